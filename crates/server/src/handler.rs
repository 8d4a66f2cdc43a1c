//! Request handlers for the listing API

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nearby::{ItemResponse, NearbyError, NearbySearch, SearchParams};
use serde::Serialize;
use tracing::{error, info};

pub const APP_NAME: &str = "Nearby";

/// Error body returned by every failing endpoint: `{"detail": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Item not found")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl From<NearbyError> for ApiError {
    fn from(e: NearbyError) -> Self {
        if e.is_client_error() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(message) => {
                error!(%message, "Internal error while serving request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let detail = match self {
            // Storage details stay in the log.
            ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Service banner.
#[derive(Debug, Serialize)]
pub struct Banner {
    pub app_name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// Handle GET /
pub async fn root() -> Json<Banner> {
    Json(Banner {
        app_name: APP_NAME,
        version: env!("CARGO_PKG_VERSION"),
        status: "API is up and running!",
    })
}

/// Handle GET /api/items
pub async fn list_items(
    State(search): State<NearbySearch>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let Query(params) = params?;
    let items = search.search_params(params).await?;
    info!(count = items.len(), "Listed items");
    Ok(Json(items))
}

/// Handle GET /api/items/:id
pub async fn get_item(
    State(search): State<NearbySearch>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = search.get(&id).await?.ok_or(ApiError::NotFound)?;
    info!(id = %item.id, "Fetched item");
    Ok(Json(item))
}
