use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};

use crate::{
    dto::artists::{CreateArtistRequest, UpdateArtistRequest},
    error::AppResult,
    extract::{ApiJson, ApiPath},
    models::Artist,
    response::{ApiMessage, Created, ErrorBody},
    services::artist_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/artists", get(list_artists))
        .route("/api/artists/add", post(create_artist))
        .route("/api/artists/update", put(update_artist))
        .route("/api/artists/delete/{id}", delete(delete_artist))
}

#[utoipa::path(
    get,
    path = "/api/artists",
    responses((status = 200, description = "List artists", body = Vec<Artist>)),
    tag = "Artists"
)]
pub async fn list_artists(State(state): State<AppState>) -> AppResult<Json<Vec<Artist>>> {
    Ok(Json(artist_service::list_artists(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/artists/add",
    request_body = CreateArtistRequest,
    responses((status = 201, description = "Artist created", body = Created)),
    tag = "Artists"
)]
pub async fn create_artist(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateArtistRequest>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let resp = artist_service::create_artist(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/artists/update",
    request_body = UpdateArtistRequest,
    responses(
        (status = 200, description = "Artist updated", body = ApiMessage),
        (status = 404, description = "Artist not found", body = ErrorBody)
    ),
    tag = "Artists"
)]
pub async fn update_artist(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateArtistRequest>,
) -> AppResult<Json<ApiMessage>> {
    Ok(Json(artist_service::update_artist(&state, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/artists/delete/{id}",
    params(("id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 200, description = "Artist deleted", body = ApiMessage),
        (status = 404, description = "Artist not found", body = ErrorBody),
        (status = 409, description = "Artist still has artworks", body = ErrorBody)
    ),
    tag = "Artists"
)]
pub async fn delete_artist(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiMessage>> {
    Ok(Json(artist_service::delete_artist(&state, id).await?))
}
