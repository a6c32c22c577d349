use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::{
    dto::artists::{CreateArtistRequest, UpdateArtistRequest},
    entity::artists::{ActiveModel, Column, Entity as Artists, Model as ArtistModel},
    error::{AppError, AppResult},
    models::Artist,
    response::{ApiMessage, Created},
    state::AppState,
};

pub async fn list_artists(state: &AppState) -> AppResult<Vec<Artist>> {
    let items = Artists::find()
        .order_by_asc(Column::ArtistId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(artist_from_entity)
        .collect();
    Ok(items)
}

pub async fn create_artist(state: &AppState, payload: CreateArtistRequest) -> AppResult<Created> {
    let artist = ActiveModel {
        artist_id: NotSet,
        name: Set(payload.name),
        country: Set(payload.country),
        biography: Set(payload.biography),
        birth_year: Set(payload.birth_year),
        email: Set(payload.email),
        phone: Set(payload.phone),
    }
    .insert(&state.orm)
    .await?;

    tracing::debug!(artist_id = artist.artist_id, "artist created");
    Ok(Created::new("Artist added successfully", artist.artist_id))
}

pub async fn update_artist(
    state: &AppState,
    payload: UpdateArtistRequest,
) -> AppResult<ApiMessage> {
    let existing = Artists::find_by_id(payload.artist_id)
        .one(&state.orm)
        .await?;
    let existing = match existing {
        Some(a) => a,
        None => return Err(AppError::not_found("Artist")),
    };

    let mut active: ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.country = Set(payload.country);
    active.biography = Set(payload.biography);
    active.birth_year = Set(payload.birth_year);
    active.email = Set(payload.email);
    active.phone = Set(payload.phone);
    active.update(&state.orm).await?;

    Ok(ApiMessage::new("Artist updated successfully"))
}

/// Fails with 409 while any artwork still references the artist.
pub async fn delete_artist(state: &AppState, id: i32) -> AppResult<ApiMessage> {
    let result = Artists::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found("Artist"));
    }

    tracing::debug!(artist_id = id, "artist deleted");
    Ok(ApiMessage::new("Artist deleted successfully"))
}

fn artist_from_entity(model: ArtistModel) -> Artist {
    Artist {
        artist_id: model.artist_id,
        name: model.name,
        country: model.country,
        biography: model.biography,
        birth_year: model.birth_year,
        email: model.email,
        phone: model.phone,
    }
}
