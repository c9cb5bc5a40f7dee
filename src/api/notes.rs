//! Notes API endpoints
//!
//! Creating, editing and removing notes

use axum::Extension;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::database::CreateNoteValues;
use crate::database::Database;
use crate::database::Patch;
use crate::database::UpdateNoteValues;

use super::Error;
use super::Form;
use super::Success;

/// Response data of a freshly added note
#[derive(Debug, Serialize)]
pub struct AddNoteResponse {
    /// The generated ID of the note
    pub note_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct AddNoteForm {
    title: String,
    body: String,
    parent_id: Option<Uuid>,
    created_by_user_id: String,
    color: Option<String>,
    tag: Option<String>,
}

/// Add a note
///
/// Request:
/// ```sh
/// curl -v -X POST -H 'Content-Type: application/json' \
///     -d '{"title": "Groceries", "body": "Milk, eggs", "created_by_user_id": "u1"}' \
///     http://localhost:8000/add_note
/// ```
///
/// Response:
/// ```json
/// { "status": "success", "message": "Note added", "note_id": "<uuid>" }
/// ```
pub async fn add(
    Extension(database): Extension<Database>,
    Form(form): Form<AddNoteForm>,
) -> Result<Success<AddNoteResponse>, Error> {
    let values = CreateNoteValues {
        title: &form.title,
        body: &form.body,
        parent_id: form.parent_id.as_ref(),
        created_by_user_id: &form.created_by_user_id,
        color: form.color.as_deref(),
        tag: form.tag.as_deref(),
    };

    let note_id = database.create_note(&values).await.map_err(|err| {
        tracing::error!("Could not add note: {err}");
        Error::internal_server_error("Could not add note").with_description(err)
    })?;

    tracing::debug!("Added note {note_id}");

    Ok(Success::created("Note added", AddNoteResponse { note_id }))
}

#[derive(Debug, Deserialize)]
pub struct RemoveNoteForm {
    note_id: Uuid,
}

/// Remove a note
///
/// Removing a note that does not exist is fine, children of the note are kept
///
/// Request:
/// ```sh
/// curl -v -X DELETE -H 'Content-Type: application/json' \
///     -d '{"note_id": "<uuid>"}' \
///     http://localhost:8000/remove_note
/// ```
///
/// Response:
/// ```json
/// { "status": "success", "message": "Note removed" }
/// ```
pub async fn remove(
    Extension(database): Extension<Database>,
    Form(form): Form<RemoveNoteForm>,
) -> Result<Success<()>, Error> {
    let removed = database.delete_note(&form.note_id).await.map_err(|err| {
        tracing::error!("Could not remove note {}: {err}", form.note_id);
        Error::internal_server_error("Could not remove note").with_description(err)
    })?;

    tracing::debug!("Removed note {} ({removed} affected)", form.note_id);

    Ok(Success::ok("Note removed"))
}

#[derive(Debug, Deserialize)]
pub struct EditNoteForm {
    note_id: Uuid,
    #[serde(default)]
    title: Patch<String>,
    #[serde(default)]
    body: Patch<String>,
    #[serde(default)]
    color: Patch<String>,
    #[serde(default)]
    parent_id: Patch<Uuid>,
    #[serde(default)]
    tag: Patch<String>,
}

/// Edit a note
///
/// Only the fields with a value are changed, a missing or `null` field keeps its stored value.
/// Editing a note that does not exist is fine.
///
/// Request:
/// ```sh
/// curl -v -X PATCH -H 'Content-Type: application/json' \
///     -d '{"note_id": "<uuid>", "title": "Groceries v2"}' \
///     http://localhost:8000/edit_note
/// ```
///
/// Response:
/// ```json
/// { "status": "success", "message": "Note updated" }
/// ```
pub async fn edit(
    Extension(database): Extension<Database>,
    Form(form): Form<EditNoteForm>,
) -> Result<Success<()>, Error> {
    let values = UpdateNoteValues {
        title: &form.title,
        body: &form.body,
        color: &form.color,
        parent_id: &form.parent_id,
        tag: &form.tag,
    };

    let updated = database
        .update_note(&form.note_id, &values)
        .await
        .map_err(|err| {
            tracing::error!("Could not update note {}: {err}", form.note_id);
            Error::internal_server_error("Could not update note").with_description(err)
        })?;

    if updated.is_some() {
        tracing::debug!("Updated note {}", form.note_id);
    } else {
        tracing::debug!("Note {} does not exist, nothing updated", form.note_id);
    }

    Ok(Success::ok("Note updated"))
}
