use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppError, state::AppState};

pub mod access;
pub mod artists;
pub mod auth;
pub mod catalog;
pub mod customers;
pub mod doc;
pub mod frontend;
pub mod health;
pub mod sales;
pub mod submissions;

pub const API_VERSION: &str = "1.0";

pub const ENDPOINTS: &[&str] = &[
    "/api/login",
    "/api/register",
    "/api/artists",
    "/api/artworks",
    "/api/customers",
    "/api/sales",
    "/api/exhibitions",
    "/api/events",
    "/api/billing",
    "/api/submissions",
    "/api/stats",
    "/api/access",
];

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiIndex {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiNotFound {
    pub error: String,
    pub requested: String,
    pub available_endpoints: Vec<String>,
}

// Routes carry their full `/api/...` paths; state is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/api", get(api_index))
        .route("/api/", get(api_index))
        .merge(access::router())
        .merge(auth::router())
        .merge(artists::router())
        .merge(catalog::router())
        .merge(customers::router())
        .merge(sales::router())
        .merge(submissions::router())
}

#[utoipa::path(
    get,
    path = "/api",
    responses((status = 200, description = "Available endpoints", body = ApiIndex)),
    tag = "Health"
)]
pub async fn api_index() -> Json<ApiIndex> {
    Json(ApiIndex {
        message: "Art Gallery API".to_string(),
        version: API_VERSION.to_string(),
        endpoints: endpoint_list(),
    })
}

/// Unmatched requests: unknown `/api` paths get a JSON 404 listing the
/// endpoints, GET and HEAD are looked up in the static document root, and any
/// other method is a 405.
pub async fn fallback(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let path = uri.path();
    if is_api_path(path) {
        return api_not_found(path).into_response();
    }
    if method != Method::GET && method != Method::HEAD {
        return AppError::MethodNotAllowed.into_response();
    }
    frontend::serve_static(&state.static_dir, path).await
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

fn api_not_found(path: &str) -> (StatusCode, Json<ApiNotFound>) {
    tracing::debug!(%path, "unknown api endpoint");
    let body = ApiNotFound {
        error: "API endpoint not found".to_string(),
        requested: path.to_string(),
        available_endpoints: endpoint_list(),
    };
    (StatusCode::NOT_FOUND, Json(body))
}

fn endpoint_list() -> Vec<String> {
    ENDPOINTS.iter().map(|e| e.to_string()).collect()
}
