use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::submissions::{ApprovalOutcome, CreateSubmissionRequest, RejectSubmissionRequest},
    error::{AppError, AppResult},
    extract::{ApiJson, ApiPath},
    models::Submission,
    response::{ApiMessage, Created, ErrorBody},
    services::submission_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/submissions", get(list_submissions))
        .route("/api/submissions/add", post(create_submission))
        .route("/api/submissions/approve/{id}", post(approve_submission))
        .route("/api/submissions/reject/{id}", post(reject_submission))
}

#[utoipa::path(
    get,
    path = "/api/submissions",
    responses((status = 200, description = "Submissions, newest first", body = Vec<Submission>)),
    tag = "Submissions"
)]
pub async fn list_submissions(State(state): State<AppState>) -> AppResult<Json<Vec<Submission>>> {
    Ok(Json(submission_service::list_submissions(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/submissions/add",
    request_body = CreateSubmissionRequest,
    responses((status = 201, description = "Submission received", body = Created)),
    tag = "Submissions"
)]
pub async fn create_submission(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let resp = submission_service::create_submission(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    post,
    path = "/api/submissions/approve/{id}",
    params(("id" = i32, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Submission published", body = ApprovalOutcome),
        (status = 404, description = "Submission not found", body = ErrorBody),
        (status = 409, description = "Submission already reviewed", body = ErrorBody)
    ),
    tag = "Submissions"
)]
pub async fn approve_submission(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApprovalOutcome>> {
    Ok(Json(submission_service::approve_submission(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/submissions/reject/{id}",
    params(("id" = i32, Path, description = "Submission ID")),
    request_body(content = RejectSubmissionRequest, description = "Optional review notes"),
    responses(
        (status = 200, description = "Submission rejected", body = ApiMessage),
        (status = 404, description = "Submission not found", body = ErrorBody),
        (status = 409, description = "Submission already reviewed", body = ErrorBody)
    ),
    tag = "Submissions"
)]
pub async fn reject_submission(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    body: Bytes,
) -> AppResult<Json<ApiMessage>> {
    let payload = parse_reject_body(&body)?;
    Ok(Json(
        submission_service::reject_submission(&state, id, payload).await?,
    ))
}

/// The notes body is optional; an empty body rejects with the default note.
fn parse_reject_body(body: &[u8]) -> AppResult<RejectSubmissionRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RejectSubmissionRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|err| AppError::BadRequest(format!("Invalid JSON body: {err}")))
}
