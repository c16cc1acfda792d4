//! Subfleet REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateSubfleetRequest, SubfleetResponse};
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::fares::{ResolvedFareResponse, SetFareOverridesRequest};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/subfleets",
    tag = "Subfleets",
    responses(
        (status = 200, description = "Subfleet list", body = ApiResponse<Vec<SubfleetResponse>>)
    )
)]
pub async fn list_subfleets(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SubfleetResponse>>>, ApiError> {
    let subfleets = state.fleet.list_subfleets().await?;
    Ok(Json(ApiResponse::success(
        subfleets.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/subfleets/{id}",
    tag = "Subfleets",
    params(("id" = i32, Path, description = "Subfleet ID")),
    responses(
        (status = 200, description = "Subfleet details", body = ApiResponse<SubfleetResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_subfleet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<SubfleetResponse>>, ApiError> {
    let subfleet = state.fleet.get_subfleet(id).await?;
    Ok(Json(ApiResponse::success(subfleet.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/subfleets",
    tag = "Subfleets",
    request_body = CreateSubfleetRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<SubfleetResponse>),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_subfleet(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateSubfleetRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SubfleetResponse>>), ApiError> {
    let subfleet = state
        .fleet
        .create_subfleet(&req.type_code, &req.name)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(subfleet.into())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/subfleets/{id}/fares",
    tag = "Subfleets",
    params(("id" = i32, Path, description = "Subfleet ID")),
    responses(
        (status = 200, description = "Fares with subfleet overrides applied", body = ApiResponse<Vec<ResolvedFareResponse>>),
        (status = 404, description = "Subfleet not found")
    )
)]
pub async fn list_subfleet_fares(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<ResolvedFareResponse>>>, ApiError> {
    let fares = state.fares.get_for_subfleet(id).await?;
    Ok(Json(ApiResponse::success(
        fares.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    put,
    path = "/api/v1/subfleets/{id}/fares/{fare_id}",
    tag = "Subfleets",
    params(
        ("id" = i32, Path, description = "Subfleet ID"),
        ("fare_id" = i32, Path, description = "Fare ID")
    ),
    request_body = SetFareOverridesRequest,
    responses(
        (status = 200, description = "Association stored; returns the subfleet's fares", body = ApiResponse<Vec<ResolvedFareResponse>>),
        (status = 404, description = "Subfleet or fare not found"),
        (status = 422, description = "Invalid override")
    )
)]
pub async fn set_subfleet_fare(
    State(state): State<AppState>,
    Path((id, fare_id)): Path<(i32, i32)>,
    ValidatedJson(req): ValidatedJson<SetFareOverridesRequest>,
) -> Result<Json<ApiResponse<Vec<ResolvedFareResponse>>>, ApiError> {
    let overrides = req.into_overrides()?;
    state.fares.set_for_subfleet(id, fare_id, overrides).await?;
    let fares = state.fares.get_for_subfleet(id).await?;
    Ok(Json(ApiResponse::success(
        fares.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/subfleets/{id}/fares/{fare_id}",
    tag = "Subfleets",
    params(
        ("id" = i32, Path, description = "Subfleet ID"),
        ("fare_id" = i32, Path, description = "Fare ID")
    ),
    responses(
        (status = 200, description = "Association removed, or there was none"),
        (status = 404, description = "Subfleet not found")
    )
)]
pub async fn delete_subfleet_fare(
    State(state): State<AppState>,
    Path((id, fare_id)): Path<(i32, i32)>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    state.fares.del_fare_from_subfleet(id, fare_id).await?;
    Ok(Json(ApiResponse::success("Fare removed from subfleet".to_string())))
}
