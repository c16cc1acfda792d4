//! API Router with Swagger UI

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::modules::{fares, flights, health, subfleets};
use super::state::AppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Fares
        fares::list_fares,
        fares::get_fare,
        fares::create_fare,
        fares::update_fare,
        fares::delete_fare,
        // Subfleets
        subfleets::list_subfleets,
        subfleets::get_subfleet,
        subfleets::create_subfleet,
        subfleets::list_subfleet_fares,
        subfleets::set_subfleet_fare,
        subfleets::delete_subfleet_fare,
        // Flights
        flights::list_flights,
        flights::get_flight,
        flights::create_flight,
        flights::list_flight_fares,
        flights::list_effective_fares,
        flights::set_flight_fare,
        flights::delete_flight_fare,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            fares::FareResponse,
            fares::CreateFareRequest,
            fares::UpdateFareRequest,
            fares::OverrideInput,
            fares::SetFareOverridesRequest,
            fares::OverridesDto,
            fares::ResolvedFareResponse,
            subfleets::SubfleetResponse,
            subfleets::CreateSubfleetRequest,
            flights::FlightResponse,
            flights::CreateFlightRequest,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Fares", description = "Fare catalog: codes, default price, cost and capacity"),
        (name = "Subfleets", description = "Subfleets and their fare overrides"),
        (name = "Flights", description = "Flights, their fare overrides and effective fares"),
    ),
    info(
        title = "Fare Service API",
        version = "1.0.0",
        description = "Fares for flights and subfleets with absolute or percentage overrides",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let fare_routes = Router::new()
        .route("/", get(fares::list_fares).post(fares::create_fare))
        .route(
            "/{id}",
            get(fares::get_fare)
                .put(fares::update_fare)
                .delete(fares::delete_fare),
        );

    let subfleet_routes = Router::new()
        .route(
            "/",
            get(subfleets::list_subfleets).post(subfleets::create_subfleet),
        )
        .route("/{id}", get(subfleets::get_subfleet))
        .route("/{id}/fares", get(subfleets::list_subfleet_fares))
        .route(
            "/{id}/fares/{fare_id}",
            axum::routing::put(subfleets::set_subfleet_fare)
                .delete(subfleets::delete_subfleet_fare),
        );

    let flight_routes = Router::new()
        .route("/", get(flights::list_flights).post(flights::create_flight))
        .route("/{id}", get(flights::get_flight))
        .route("/{id}/fares", get(flights::list_flight_fares))
        .route("/{id}/fares/effective", get(flights::list_effective_fares))
        .route(
            "/{id}/fares/{fare_id}",
            axum::routing::put(flights::set_flight_fare).delete(flights::delete_flight_fare),
        );

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        .nest("/api/v1/fares", fare_routes)
        .nest("/api/v1/subfleets", subfleet_routes)
        .nest("/api/v1/flights", flight_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
