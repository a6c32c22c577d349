use serde::Serialize;
use utoipa::ToSchema;

/// Plain acknowledgement body, `{ "message": ... }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned when a row is inserted, `{ "message": ..., "id": ... }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct Created {
    pub message: String,
    pub id: i32,
}

impl Created {
    pub fn new(message: impl Into<String>, id: i32) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
