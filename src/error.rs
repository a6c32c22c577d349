use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, RuntimeErr};
use thiserror::Error;

use crate::response::ErrorBody;

/// Postgres `raise_exception`, used by `record_sale` to refuse a sale.
const RAISE_EXCEPTION: &str = "P0001";
/// Postgres `no_data_found`, raised by `record_sale` for an unknown artwork.
const NO_DATA_FOUND: &str = "P0002";
/// Value too long, numeric out of range, not-null violation.
const INVALID_INPUT: &[&str] = &["22001", "22003", "23502"];

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid username or password")]
    Unauthorized,

    #[error("{0}")]
    Conflict(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Database error")]
    DbError(#[from] sqlx::Error),

    #[error("ORM error")]
    OrmError(#[from] DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(what: &str) -> Self {
        AppError::NotFound(format!("{what} not found"))
    }

    pub fn status(&self) -> StatusCode {
        match self.classify() {
            Ok((status, _)) => status,
            Err(()) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps the error to a status and a client-safe message.
    /// `Err(())` means the detail is internal and must not leak.
    fn classify(&self) -> Result<(StatusCode, String), ()> {
        match self {
            AppError::NotFound(_) => Ok((StatusCode::NOT_FOUND, self.to_string())),
            AppError::BadRequest(_) => Ok((StatusCode::BAD_REQUEST, self.to_string())),
            AppError::Unauthorized => Ok((StatusCode::UNAUTHORIZED, self.to_string())),
            AppError::Conflict(_) => Ok((StatusCode::CONFLICT, self.to_string())),
            AppError::MethodNotAllowed => Ok((StatusCode::METHOD_NOT_ALLOWED, self.to_string())),
            AppError::DbError(err) => classify_sqlx(err),
            AppError::OrmError(err) => classify_orm(err),
            AppError::Internal(_) => Err(()),
        }
    }
}

fn classify_sqlx(err: &sqlx::Error) -> Result<(StatusCode, String), ()> {
    let Some(db_err) = err.as_database_error() else {
        return Err(());
    };
    if db_err.is_unique_violation() {
        return Ok((StatusCode::CONFLICT, "Resource already exists".into()));
    }
    if db_err.is_foreign_key_violation() {
        return Ok((StatusCode::CONFLICT, foreign_key_message()));
    }
    if db_err.is_check_violation() {
        return Ok((StatusCode::BAD_REQUEST, "Value is outside the allowed set".into()));
    }
    match db_err.code().as_deref() {
        Some(RAISE_EXCEPTION) => Ok((StatusCode::CONFLICT, db_err.message().to_string())),
        Some(NO_DATA_FOUND) => Ok((StatusCode::NOT_FOUND, db_err.message().to_string())),
        Some(code) if INVALID_INPUT.contains(&code) => Ok((
            StatusCode::BAD_REQUEST,
            format!("Invalid value: {}", db_err.message()),
        )),
        _ => Err(()),
    }
}

fn classify_orm(err: &DbErr) -> Result<(StatusCode, String), ()> {
    match err {
        DbErr::RecordNotUpdated => Ok((StatusCode::NOT_FOUND, "Record not found".into())),
        DbErr::Conn(RuntimeErr::SqlxError(inner))
        | DbErr::Exec(RuntimeErr::SqlxError(inner))
        | DbErr::Query(RuntimeErr::SqlxError(inner)) => classify_sqlx(inner),
        _ => Err(()),
    }
}

fn foreign_key_message() -> String {
    "Operation conflicts with related records".into()
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.classify() {
            Ok(pair) => pair,
            Err(()) => {
                tracing::error!(error = ?self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
