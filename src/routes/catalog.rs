use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    models::{Artwork, Event, Exhibition, GalleryStats},
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/artworks", get(list_artworks))
        .route("/api/artworks/available", get(list_available_artworks))
        .route("/api/exhibitions", get(list_exhibitions))
        .route("/api/events", get(list_events))
        .route("/api/stats", get(gallery_stats))
}

#[utoipa::path(
    get,
    path = "/api/artworks",
    responses((status = 200, description = "All artworks with artist names", body = Vec<Artwork>)),
    tag = "Artworks"
)]
pub async fn list_artworks(State(state): State<AppState>) -> AppResult<Json<Vec<Artwork>>> {
    Ok(Json(catalog_service::list_artworks(&state, None).await?))
}

#[utoipa::path(
    get,
    path = "/api/artworks/available",
    responses((status = 200, description = "Artworks still for sale", body = Vec<Artwork>)),
    tag = "Artworks"
)]
pub async fn list_available_artworks(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Artwork>>> {
    Ok(Json(catalog_service::list_available_artworks(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/exhibitions",
    responses((status = 200, description = "List exhibitions", body = Vec<Exhibition>)),
    tag = "Gallery"
)]
pub async fn list_exhibitions(State(state): State<AppState>) -> AppResult<Json<Vec<Exhibition>>> {
    Ok(Json(catalog_service::list_exhibitions(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/events",
    responses((status = 200, description = "List events", body = Vec<Event>)),
    tag = "Gallery"
)]
pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    Ok(Json(catalog_service::list_events(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses((status = 200, description = "Dashboard counters", body = GalleryStats)),
    tag = "Gallery"
)]
pub async fn gallery_stats(State(state): State<AppState>) -> AppResult<Json<GalleryStats>> {
    Ok(Json(catalog_service::gallery_stats(&state).await?))
}
