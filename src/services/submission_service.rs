use chrono::Utc;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait,
    DatabaseTransaction, DbBackend, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    Statement, TransactionTrait,
};
use sea_orm::sea_query::LockType;

use crate::{
    dto::submissions::{ApprovalOutcome, CreateSubmissionRequest, RejectSubmissionRequest},
    entity::{
        artists::{ActiveModel as ArtistActive, Column as ArtistCol, Entity as Artists},
        artwork_submissions::{
            ActiveModel as SubmissionActive, Column as SubmissionCol, Entity as Submissions,
            Model as SubmissionModel, SubmissionStatus,
        },
        artworks::{ActiveModel as ArtworkActive, ArtworkStatus},
    },
    error::{AppError, AppResult},
    models::Submission,
    response::{ApiMessage, Created},
    state::AppState,
};

pub const SUBMITTED_ARTIST_BIOGRAPHY: &str = "Submitted artist";
pub const SUBMITTED_ARTIST_BIRTH_YEAR: i32 = 1990;
pub const SUBMITTED_ARTIST_COUNTRY: &str = "Unknown";
pub const DEFAULT_REJECTION_NOTE: &str = "Rejected by admin";

pub async fn list_submissions(state: &AppState) -> AppResult<Vec<Submission>> {
    let items = Submissions::find()
        .order_by_desc(SubmissionCol::SubmittedDate)
        .order_by_desc(SubmissionCol::SubmissionId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(submission_from_entity)
        .collect();
    Ok(items)
}

pub async fn create_submission(
    state: &AppState,
    payload: CreateSubmissionRequest,
) -> AppResult<Created> {
    let submission = SubmissionActive {
        submission_id: NotSet,
        artist_name: Set(payload.artist_name),
        title: Set(payload.title),
        category: Set(payload.category),
        price: Set(payload.price),
        year_created: Set(payload.year_created),
        description: Set(payload.description),
        image_url: Set(payload.image_url),
        email: Set(payload.email),
        phone: Set(payload.phone),
        status: Set(SubmissionStatus::Pending),
        review_notes: NotSet,
        submitted_date: NotSet,
        review_date: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(submission_id = submission.submission_id, "submission received");
    Ok(Created::new(
        "Submission received successfully",
        submission.submission_id,
    ))
}

/// Publishes a pending submission as an artwork.
///
/// The submission row is locked for the whole transaction, and the artist
/// lookup-or-create runs under an advisory lock keyed by the artist name so
/// two approvals naming the same new artist cannot both create one. Any
/// failure rolls back every step.
pub async fn approve_submission(state: &AppState, id: i32) -> AppResult<ApprovalOutcome> {
    let txn = state.orm.begin().await?;

    let submission = lock_pending_submission(&txn, id).await?;
    let (artist_id, artist_created) = resolve_artist(&txn, &submission).await?;

    let artwork = ArtworkActive {
        artwork_id: NotSet,
        title: Set(submission.title.clone()),
        artist_id: Set(Some(artist_id)),
        category: Set(submission.category.clone()),
        price: Set(submission.price),
        year_created: Set(submission.year_created),
        status: Set(ArtworkStatus::Available),
        image_url: Set(submission.image_url.clone()),
        description: Set(submission.description.clone()),
    }
    .insert(&txn)
    .await?;

    let mut active: SubmissionActive = submission.into();
    active.status = Set(SubmissionStatus::Approved);
    active.review_date = Set(Some(Utc::now().into()));
    active.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        submission_id = id,
        artwork_id = artwork.artwork_id,
        artist_id,
        artist_created,
        "submission approved"
    );

    Ok(ApprovalOutcome {
        message: "Submission approved and added to gallery".to_string(),
        artwork_id: artwork.artwork_id,
        artist_id,
        artist_created,
    })
}

pub async fn reject_submission(
    state: &AppState,
    id: i32,
    payload: RejectSubmissionRequest,
) -> AppResult<ApiMessage> {
    let txn = state.orm.begin().await?;

    let submission = lock_pending_submission(&txn, id).await?;
    let notes = payload
        .notes
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REJECTION_NOTE.to_string());

    let mut active: SubmissionActive = submission.into();
    active.status = Set(SubmissionStatus::Rejected);
    active.review_notes = Set(Some(notes));
    active.review_date = Set(Some(Utc::now().into()));
    active.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(submission_id = id, "submission rejected");
    Ok(ApiMessage::new("Submission rejected"))
}

async fn lock_pending_submission(
    txn: &DatabaseTransaction,
    id: i32,
) -> AppResult<SubmissionModel> {
    let submission = Submissions::find_by_id(id)
        .lock(LockType::Update)
        .one(txn)
        .await?
        .ok_or_else(|| AppError::not_found("Submission"))?;
    ensure_pending(&submission)?;
    Ok(submission)
}

/// Reviews only move a submission out of `Pending`; they never revisit one.
fn ensure_pending(submission: &SubmissionModel) -> AppResult<()> {
    let reviewed = match submission.status {
        SubmissionStatus::Pending => return Ok(()),
        SubmissionStatus::Approved => "approved",
        SubmissionStatus::Rejected => "rejected",
    };
    Err(AppError::Conflict(format!(
        "Submission {} has already been {reviewed}",
        submission.submission_id
    )))
}

/// Returns the artist id to attach the artwork to, and whether it was created.
///
/// Names are not unique; when several artists share one, the lowest id wins.
async fn resolve_artist(
    txn: &DatabaseTransaction,
    submission: &SubmissionModel,
) -> AppResult<(i32, bool)> {
    txn.execute(Statement::from_sql_and_values(
        DbBackend::Postgres,
        "SELECT pg_advisory_xact_lock(hashtext($1))",
        [submission.artist_name.clone().into()],
    ))
    .await?;

    let existing = Artists::find()
        .filter(ArtistCol::Name.eq(submission.artist_name.as_str()))
        .order_by_asc(ArtistCol::ArtistId)
        .one(txn)
        .await?;

    if let Some(artist) = existing {
        tracing::debug!(artist_id = artist.artist_id, "reusing existing artist");
        return Ok((artist.artist_id, false));
    }

    let artist = artist_from_submission(submission).insert(txn).await?;
    tracing::debug!(artist_id = artist.artist_id, "created artist from submission");
    Ok((artist.artist_id, true))
}

/// Minimal artist record for a submitter not yet in the catalogue. Biography,
/// birth year and country are placeholders until someone edits the artist.
fn artist_from_submission(submission: &SubmissionModel) -> ArtistActive {
    ArtistActive {
        artist_id: NotSet,
        name: Set(submission.artist_name.clone()),
        country: Set(Some(SUBMITTED_ARTIST_COUNTRY.to_string())),
        biography: Set(Some(SUBMITTED_ARTIST_BIOGRAPHY.to_string())),
        birth_year: Set(Some(SUBMITTED_ARTIST_BIRTH_YEAR)),
        email: Set(submission.email.clone()),
        phone: Set(submission.phone.clone()),
    }
}

fn submission_from_entity(model: SubmissionModel) -> Submission {
    Submission {
        submission_id: model.submission_id,
        artist_name: model.artist_name,
        title: model.title,
        category: model.category,
        price: model.price,
        year_created: model.year_created,
        description: model.description,
        image_url: model.image_url,
        email: model.email,
        phone: model.phone,
        status: model.status.to_value(),
        review_notes: model.review_notes,
        submitted_date: model.submitted_date.with_timezone(&Utc),
        review_date: model.review_date.map(|dt| dt.with_timezone(&Utc)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(status: SubmissionStatus) -> SubmissionModel {
        SubmissionModel {
            submission_id: 7,
            artist_name: "Jane Doe".into(),
            title: "Sunset".into(),
            category: Some("Painting".into()),
            price: Some(500.0),
            year_created: Some(2020),
            description: None,
            image_url: None,
            email: Some("jane@x.com".into()),
            phone: Some("555-0100".into()),
            status,
            review_notes: None,
            submitted_date: Utc::now().into(),
            review_date: None,
        }
    }

    #[test]
    fn only_pending_submissions_can_be_reviewed() {
        assert!(ensure_pending(&submission(SubmissionStatus::Pending)).is_ok());

        let err = ensure_pending(&submission(SubmissionStatus::Approved)).unwrap_err();
        assert_eq!(err.to_string(), "Submission 7 has already been approved");

        let err = ensure_pending(&submission(SubmissionStatus::Rejected)).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn new_artist_carries_submitter_contact_and_placeholders() {
        let artist = artist_from_submission(&submission(SubmissionStatus::Pending));
        assert_eq!(artist.name, Set("Jane Doe".to_string()));
        assert_eq!(artist.email, Set(Some("jane@x.com".to_string())));
        assert_eq!(artist.phone, Set(Some("555-0100".to_string())));
        assert_eq!(artist.biography, Set(Some("Submitted artist".to_string())));
        assert_eq!(artist.birth_year, Set(Some(1990)));
        assert_eq!(artist.country, Set(Some("Unknown".to_string())));
        assert_eq!(artist.artist_id, NotSet);
    }

    #[test]
    fn listing_uses_status_names() {
        let row = submission_from_entity(submission(SubmissionStatus::Rejected));
        assert_eq!(row.status, "Rejected");
        assert_eq!(row.title, "Sunset");
    }
}
