use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use cinevault_model::{ApiResponse, ContentDraft, ContentFilter, ContentRecord};
use tracing::info;
use uuid::Uuid;

use crate::errors::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /content — filtered list, newest first. Public.
pub async fn list_content_handler(
    State(state): State<AppState>,
    Query(filter): Query<ContentFilter>,
) -> ApiResult<Json<ApiResponse<Vec<ContentRecord>>>> {
    let records = state.store.list(&filter).await?;
    info!("listed {} content records", records.len());
    Ok(Json(ApiResponse::success(records)))
}

/// POST /content — create a record. Admin only, 201 on success.
pub async fn create_content_handler(
    State(state): State<AppState>,
    Json(draft): Json<ContentDraft>,
) -> ApiResult<(StatusCode, Json<ApiResponse<ContentRecord>>)> {
    let record = state.store.insert(draft).await?;
    info!("created content {} ({})", record.id, record.title);
    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::success(record)
                .with_message("Content created successfully"),
        ),
    ))
}

/// GET /content/{idOrSlug} — single record. The path value is tried as an id
/// first and retried as a slug on a miss, so both key kinds share one
/// endpoint shape.
pub async fn get_content_handler(
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
) -> ApiResult<Json<ApiResponse<ContentRecord>>> {
    let by_id = match Uuid::parse_str(&id_or_slug) {
        Ok(id) => state.store.find_by_id(id).await?,
        // A malformed id is simply not an id; fall through to the slug lookup.
        Err(_) => None,
    };
    let record = match by_id {
        Some(record) => Some(record),
        None => state.store.find_by_slug(&id_or_slug).await?,
    };

    match record {
        Some(record) => Ok(Json(ApiResponse::success(record))),
        None => Err(ApiError::not_found("Content not found")),
    }
}

/// PUT /content/{id} — partial merge onto an existing record. Admin only.
pub async fn update_content_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ContentDraft>,
) -> ApiResult<Json<ApiResponse<ContentRecord>>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(ApiError::not_found("Content not found"));
    };

    match state.store.update(id, draft).await? {
        Some(record) => {
            info!("updated content {id}");
            Ok(Json(
                ApiResponse::success(record)
                    .with_message("Content updated successfully"),
            ))
        }
        None => Err(ApiError::not_found("Content not found")),
    }
}

/// DELETE /content/{id} — remove a record. Admin only.
pub async fn delete_content_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(ApiError::not_found("Content not found"));
    };

    if state.store.delete(id).await? {
        info!("deleted content {id}");
        Ok(Json(ApiResponse::message("Content deleted successfully")))
    } else {
        Err(ApiError::not_found("Content not found"))
    }
}
