//! Fare catalog REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use rust_decimal::Decimal;

use super::dto::{CreateFareRequest, FareResponse, UpdateFareRequest};
use crate::domain::Fare;
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/fares",
    tag = "Fares",
    responses(
        (status = 200, description = "Fare list ordered by code", body = ApiResponse<Vec<FareResponse>>)
    )
)]
pub async fn list_fares(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FareResponse>>>, ApiError> {
    let fares = state.fares.list_fares().await?;
    Ok(Json(ApiResponse::success(
        fares.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/fares/{id}",
    tag = "Fares",
    params(("id" = i32, Path, description = "Fare ID")),
    responses(
        (status = 200, description = "Fare details", body = ApiResponse<FareResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_fare(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<FareResponse>>, ApiError> {
    let fare = state.fares.get_fare(id).await?;
    Ok(Json(ApiResponse::success(fare.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/fares",
    tag = "Fares",
    request_body = CreateFareRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<FareResponse>),
        (status = 409, description = "Fare code already in use"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_fare(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFareRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FareResponse>>), ApiError> {
    let now = Utc::now();
    let fare = Fare {
        id: 0,
        name: req.name.unwrap_or_else(|| req.code.clone()),
        code: req.code,
        price: req.price,
        cost: req.cost.unwrap_or(Decimal::ZERO),
        capacity: req.capacity.unwrap_or(0),
        notes: req.notes,
        active: req.active.unwrap_or(true),
        created_at: now,
        updated_at: now,
    };

    let saved = state.fares.create_fare(fare).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(saved.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/fares/{id}",
    tag = "Fares",
    params(("id" = i32, Path, description = "Fare ID")),
    request_body = UpdateFareRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<FareResponse>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Fare code already in use")
    )
)]
pub async fn update_fare(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateFareRequest>,
) -> Result<Json<ApiResponse<FareResponse>>, ApiError> {
    let existing = state.fares.get_fare(id).await?;

    let updated = Fare {
        id: existing.id,
        code: req.code.unwrap_or(existing.code),
        name: req.name.unwrap_or(existing.name),
        price: req.price.unwrap_or(existing.price),
        cost: req.cost.unwrap_or(existing.cost),
        capacity: req.capacity.unwrap_or(existing.capacity),
        notes: req.notes.or(existing.notes),
        active: req.active.unwrap_or(existing.active),
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    let saved = state.fares.update_fare(updated).await?;
    Ok(Json(ApiResponse::success(saved.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/fares/{id}",
    tag = "Fares",
    params(("id" = i32, Path, description = "Fare ID")),
    responses(
        (status = 200, description = "Deleted along with its flight and subfleet links"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_fare(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    state.fares.delete_fare(id).await?;
    Ok(Json(ApiResponse::success("Fare deleted".to_string())))
}
