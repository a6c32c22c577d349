use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSubmissionRequest {
    pub artist_name: String,
    pub title: String,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub year_created: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RejectSubmissionRequest {
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApprovalOutcome {
    pub message: String,
    pub artwork_id: i32,
    pub artist_id: i32,
    /// False when an existing artist with the same name was reused.
    pub artist_created: bool,
}
