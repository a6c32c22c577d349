use axum::{Json, Router, routing::get};
use serde::Deserialize;

use crate::{
    access::{PageAccess, Role, check_page_access},
    error::{AppError, AppResult},
    extract::ApiQuery,
    response::ErrorBody,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/access", get(page_access))
}

#[derive(Debug, Deserialize)]
pub struct PageAccessQuery {
    pub page: String,
    pub role: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/access",
    params(
        ("page" = String, Query, description = "Page file name, e.g. admin-submissions.html"),
        ("role" = Option<String>, Query, description = "Role from the stored session; omit when logged out")
    ),
    responses(
        (status = 200, description = "Whether the page may be shown", body = PageAccess),
        (status = 400, description = "Unknown role or missing page", body = ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn page_access(
    ApiQuery(query): ApiQuery<PageAccessQuery>,
) -> AppResult<Json<PageAccess>> {
    let role = query
        .role
        .as_deref()
        .map(str::parse::<Role>)
        .transpose()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let gate = check_page_access(role, &query.page);
    Ok(Json(PageAccess::new(&query.page, gate)))
}
