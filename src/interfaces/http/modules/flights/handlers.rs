//! Flight REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateFlightRequest, FlightResponse};
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::fares::{ResolvedFareResponse, SetFareOverridesRequest};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/flights",
    tag = "Flights",
    responses(
        (status = 200, description = "Flight list", body = ApiResponse<Vec<FlightResponse>>)
    )
)]
pub async fn list_flights(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FlightResponse>>>, ApiError> {
    let flights = state.fleet.list_flights().await?;
    Ok(Json(ApiResponse::success(
        flights.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/flights/{id}",
    tag = "Flights",
    params(("id" = String, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight details", body = ApiResponse<FlightResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<FlightResponse>>, ApiError> {
    let flight = state.fleet.get_flight(&id).await?;
    Ok(Json(ApiResponse::success(flight.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/flights",
    tag = "Flights",
    request_body = CreateFlightRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<FlightResponse>),
        (status = 404, description = "Subfleet not found"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_flight(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFlightRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FlightResponse>>), ApiError> {
    let flight = state.fleet.create_flight(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(flight.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/flights/{id}/fares",
    tag = "Flights",
    params(("id" = String, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Fares attached directly to the flight", body = ApiResponse<Vec<ResolvedFareResponse>>),
        (status = 404, description = "Flight not found")
    )
)]
pub async fn list_flight_fares(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<ResolvedFareResponse>>>, ApiError> {
    let fares = state.fares.get_for_flight(&id).await?;
    Ok(Json(ApiResponse::success(
        fares.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/flights/{id}/fares/effective",
    tag = "Flights",
    params(("id" = String, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Subfleet fares with the flight's own associations layered on top", body = ApiResponse<Vec<ResolvedFareResponse>>),
        (status = 404, description = "Flight not found")
    )
)]
pub async fn list_effective_fares(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<ResolvedFareResponse>>>, ApiError> {
    let fares = state.fares.get_all_fares(&id).await?;
    Ok(Json(ApiResponse::success(
        fares.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    put,
    path = "/api/v1/flights/{id}/fares/{fare_id}",
    tag = "Flights",
    params(
        ("id" = String, Path, description = "Flight ID"),
        ("fare_id" = i32, Path, description = "Fare ID")
    ),
    request_body = SetFareOverridesRequest,
    responses(
        (status = 200, description = "Association stored; returns the flight's fares", body = ApiResponse<Vec<ResolvedFareResponse>>),
        (status = 404, description = "Flight or fare not found"),
        (status = 422, description = "Invalid override")
    )
)]
pub async fn set_flight_fare(
    State(state): State<AppState>,
    Path((id, fare_id)): Path<(String, i32)>,
    ValidatedJson(req): ValidatedJson<SetFareOverridesRequest>,
) -> Result<Json<ApiResponse<Vec<ResolvedFareResponse>>>, ApiError> {
    let overrides = req.into_overrides()?;
    state.fares.set_for_flight(&id, fare_id, overrides).await?;
    let fares = state.fares.get_for_flight(&id).await?;
    Ok(Json(ApiResponse::success(
        fares.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/flights/{id}/fares/{fare_id}",
    tag = "Flights",
    params(
        ("id" = String, Path, description = "Flight ID"),
        ("fare_id" = i32, Path, description = "Fare ID")
    ),
    responses(
        (status = 200, description = "Association removed, or there was none"),
        (status = 404, description = "Flight not found")
    )
)]
pub async fn delete_flight_fare(
    State(state): State<AppState>,
    Path((id, fare_id)): Path<(String, i32)>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    state.fares.del_fare_from_flight(&id, fare_id).await?;
    Ok(Json(ApiResponse::success("Fare removed from flight".to_string())))
}
