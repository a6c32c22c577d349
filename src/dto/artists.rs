use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArtistRequest {
    pub name: String,
    pub country: Option<String>,
    pub biography: Option<String>,
    pub birth_year: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Full replacement of an artist; absent optional fields are cleared.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArtistRequest {
    pub artist_id: i32,
    pub name: String,
    pub country: Option<String>,
    pub biography: Option<String>,
    pub birth_year: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
