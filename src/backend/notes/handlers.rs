//! Note HTTP Handlers
//!
//! CRUD handlers for `/api/notes`. All of them sit behind `auth_middleware`
//! and act on the caller's own notes only.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::db::NoteRepository;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::extract::{ApiJson, ApiPath};
use crate::shared::{NoteDraft, NotePatch, NoteResponse};

fn note_not_found(note_id: Uuid) -> BackendError {
    tracing::debug!("Note not found: {}", note_id);
    BackendError::not_found("Note not found")
}

/// `GET /api/notes`
pub async fn list_notes(
    State(notes): State<NoteRepository>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<NoteResponse>>, BackendError> {
    let notes = notes.list_notes(user.user_id).await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// `POST /api/notes`
pub async fn create_note(
    State(notes): State<NoteRepository>,
    AuthUser(user): AuthUser,
    ApiJson(draft): ApiJson<NoteDraft>,
) -> Result<(StatusCode, Json<NoteResponse>), BackendError> {
    let draft = draft.validated()?;

    let note = notes
        .create_note(user.user_id, &draft.title, &draft.content)
        .await?;
    tracing::info!("Note {} created by {}", note.id, user.username);

    Ok((StatusCode::CREATED, Json(note.into())))
}

/// `GET /api/notes/{note_id}`
pub async fn get_note(
    State(notes): State<NoteRepository>,
    AuthUser(user): AuthUser,
    ApiPath(note_id): ApiPath<Uuid>,
) -> Result<Json<NoteResponse>, BackendError> {
    let note = notes
        .get_note(user.user_id, note_id)
        .await?
        .ok_or_else(|| note_not_found(note_id))?;

    Ok(Json(note.into()))
}

/// `PUT /api/notes/{note_id}`
pub async fn update_note(
    State(notes): State<NoteRepository>,
    AuthUser(user): AuthUser,
    ApiPath(note_id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<NotePatch>,
) -> Result<Json<NoteResponse>, BackendError> {
    let patch = patch.validated()?;

    let note = notes
        .update_note(
            user.user_id,
            note_id,
            patch.title.as_deref(),
            patch.content.as_deref(),
        )
        .await?
        .ok_or_else(|| note_not_found(note_id))?;

    Ok(Json(note.into()))
}

/// `DELETE /api/notes/{note_id}`
pub async fn delete_note(
    State(notes): State<NoteRepository>,
    AuthUser(user): AuthUser,
    ApiPath(note_id): ApiPath<Uuid>,
) -> Result<StatusCode, BackendError> {
    if !notes.delete_note(user.user_id, note_id).await? {
        return Err(note_not_found(note_id));
    }

    tracing::info!("Note {} deleted by {}", note_id, user.username);
    Ok(StatusCode::NO_CONTENT)
}
