use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::access::{Capabilities, Role};

#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    /// Defaults to `Viewer`.
    pub role: Option<Role>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The user object the front-end stores as its session.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionUser {
    #[serde(rename = "User_ID")]
    pub user_id: i32,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Role")]
    pub role: Role,
    #[serde(rename = "Capabilities")]
    pub capabilities: Capabilities,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: SessionUser,
}
