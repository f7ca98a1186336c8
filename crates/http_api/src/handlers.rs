use axum::{
    body::Bytes,
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use app_api::{
    ActivityRequest, AssignDriverRequest, CalendarRequest, ChartRequest, ChatErrorResponse,
    ChatRequest, DeleteRequest, DepartmentCreateRequest, DepartmentUpdateRequest, IdRequest,
    MaintenanceCreateRequest, MaintenanceListRequest, MaintenanceUpdateRequest,
    ProviderCreateRequest, ProviderUpdateRequest, ProvidersListRequest, SettingsPutRequest,
    StorageListRequest, StorageRemoveRequest, UploadRequest, UserCreateRequest, UserUpdateRequest,
    UsersListRequest, VehicleCreateRequest, VehicleHistoryRequest, VehicleUpdateRequest,
};

use crate::{errors::HttpError, state::HttpState};

pub async fn vehicles_list(
    State(state): State<HttpState>,
    Json(_): Json<app_api::EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::vehicles_list(&state.context)?;
    Ok(Json(response))
}

pub async fn vehicles_get(
    State(state): State<HttpState>,
    Json(req): Json<IdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::vehicles_get(&state.context, req)?;
    Ok(Json(response))
}

pub async fn vehicles_create(
    State(state): State<HttpState>,
    Json(req): Json<VehicleCreateRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::vehicles_create(&state.context, req)?;
    Ok(Json(response))
}

pub async fn vehicles_update(
    State(state): State<HttpState>,
    Json(req): Json<VehicleUpdateRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::vehicles_update(&state.context, req)?;
    Ok(Json(response))
}

pub async fn vehicles_delete(
    State(state): State<HttpState>,
    Json(req): Json<DeleteRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::vehicles_delete(&state.context, req)?;
    Ok(Json(response))
}

pub async fn vehicles_assign_driver(
    State(state): State<HttpState>,
    Json(req): Json<AssignDriverRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::vehicles_assign_driver(&state.context, req)?;
    Ok(Json(response))
}

pub async fn users_list(
    State(state): State<HttpState>,
    Json(req): Json<UsersListRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::users_list(&state.context, req)?;
    Ok(Json(response))
}

pub async fn drivers_list(
    State(state): State<HttpState>,
    Json(_): Json<app_api::EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::drivers_list(&state.context)?;
    Ok(Json(response))
}

pub async fn users_get(
    State(state): State<HttpState>,
    Json(req): Json<IdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::users_get(&state.context, req)?;
    Ok(Json(response))
}

pub async fn users_create(
    State(state): State<HttpState>,
    Json(req): Json<UserCreateRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::users_create(&state.context, req)?;
    Ok(Json(response))
}

pub async fn users_update(
    State(state): State<HttpState>,
    Json(req): Json<UserUpdateRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::users_update(&state.context, req)?;
    Ok(Json(response))
}

pub async fn users_delete(
    State(state): State<HttpState>,
    Json(req): Json<DeleteRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::users_delete(&state.context, req)?;
    Ok(Json(response))
}

pub async fn departments_list(
    State(state): State<HttpState>,
    Json(_): Json<app_api::EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::departments_list(&state.context)?;
    Ok(Json(response))
}

pub async fn departments_get(
    State(state): State<HttpState>,
    Json(req): Json<IdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::departments_get(&state.context, req)?;
    Ok(Json(response))
}

pub async fn departments_create(
    State(state): State<HttpState>,
    Json(req): Json<DepartmentCreateRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::departments_create(&state.context, req)?;
    Ok(Json(response))
}

pub async fn departments_update(
    State(state): State<HttpState>,
    Json(req): Json<DepartmentUpdateRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::departments_update(&state.context, req)?;
    Ok(Json(response))
}

pub async fn departments_delete(
    State(state): State<HttpState>,
    Json(req): Json<DeleteRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::departments_delete(&state.context, req)?;
    Ok(Json(response))
}

pub async fn providers_list(
    State(state): State<HttpState>,
    Json(req): Json<ProvidersListRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::providers_list(&state.context, req)?;
    Ok(Json(response))
}

pub async fn providers_get(
    State(state): State<HttpState>,
    Json(req): Json<IdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::providers_get(&state.context, req)?;
    Ok(Json(response))
}

pub async fn providers_create(
    State(state): State<HttpState>,
    Json(req): Json<ProviderCreateRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::providers_create(&state.context, req)?;
    Ok(Json(response))
}

pub async fn providers_update(
    State(state): State<HttpState>,
    Json(req): Json<ProviderUpdateRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::providers_update(&state.context, req)?;
    Ok(Json(response))
}

pub async fn providers_delete(
    State(state): State<HttpState>,
    Json(req): Json<DeleteRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::providers_delete(&state.context, req)?;
    Ok(Json(response))
}

pub async fn maintenance_list(
    State(state): State<HttpState>,
    Json(req): Json<MaintenanceListRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::maintenance_list(&state.context, req)?;
    Ok(Json(response))
}

pub async fn maintenance_history(
    State(state): State<HttpState>,
    Json(req): Json<VehicleHistoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::maintenance_history(&state.context, req)?;
    Ok(Json(response))
}

pub async fn maintenance_get(
    State(state): State<HttpState>,
    Json(req): Json<IdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::maintenance_get(&state.context, req)?;
    Ok(Json(response))
}

pub async fn maintenance_create(
    State(state): State<HttpState>,
    Json(req): Json<MaintenanceCreateRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::maintenance_create(&state.context, req)?;
    Ok(Json(response))
}

pub async fn maintenance_update(
    State(state): State<HttpState>,
    Json(req): Json<MaintenanceUpdateRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::maintenance_update(&state.context, req)?;
    Ok(Json(response))
}

pub async fn maintenance_delete(
    State(state): State<HttpState>,
    Json(req): Json<DeleteRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::maintenance_delete(&state.context, req)?;
    Ok(Json(response))
}

pub async fn maintenance_chart(
    State(state): State<HttpState>,
    Json(req): Json<ChartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::maintenance_chart(&state.context, req)?;
    Ok(Json(response))
}

pub async fn maintenance_calendar(
    State(state): State<HttpState>,
    Json(req): Json<CalendarRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::maintenance_calendar(&state.context, req)?;
    Ok(Json(response))
}

pub async fn dashboard_stats(
    State(state): State<HttpState>,
    Json(_): Json<app_api::EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::dashboard_stats(&state.context)?;
    Ok(Json(response))
}

pub async fn activity_list(
    State(state): State<HttpState>,
    Json(req): Json<ActivityRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::activity_list(&state.context, req)?;
    Ok(Json(response))
}

pub async fn settings_get(
    State(state): State<HttpState>,
    Json(_): Json<app_api::EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::settings_get(&state.context)?;
    Ok(Json(response))
}

pub async fn settings_put(
    State(state): State<HttpState>,
    Json(req): Json<SettingsPutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::settings_put(&state.context, req)?;
    Ok(Json(response))
}

pub async fn storage_list(
    State(state): State<HttpState>,
    Json(req): Json<StorageListRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::storage_list(&state.context, req)?;
    Ok(Json(response))
}

pub async fn storage_remove(
    State(state): State<HttpState>,
    Json(req): Json<StorageRemoveRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::storage_remove(&state.context, req)?;
    Ok(Json(response))
}

pub async fn vehicles_upload_image(
    State(state): State<HttpState>,
    Query(req): Query<UploadRequest>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::vehicles_upload_image(&state.context, req, &body)?;
    Ok(Json(response))
}

pub async fn users_upload_image(
    State(state): State<HttpState>,
    Query(req): Query<UploadRequest>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::users_upload_image(&state.context, req, &body)?;
    Ok(Json(response))
}

pub async fn users_upload_license(
    State(state): State<HttpState>,
    Query(req): Query<UploadRequest>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::users_upload_license(&state.context, req, &body)?;
    Ok(Json(response))
}

pub async fn settings_upload_logo(
    State(state): State<HttpState>,
    Query(req): Query<UploadRequest>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::settings_upload_logo(&state.context, req, &body)?;
    Ok(Json(response))
}

/// Relays a chat turn to the inference endpoint. Failures answer 500 with `{ error }`.
pub async fn chat(State(state): State<HttpState>, Json(req): Json<ChatRequest>) -> Response {
    match state.chat.complete(&req).await {
        Ok(reply) => Json(reply).into_response(),
        Err(err) => {
            warn!(error = %err, "chat relay failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn not_found() -> HttpError {
    HttpError::coded(StatusCode::NOT_FOUND, "not found", "not_found")
}
