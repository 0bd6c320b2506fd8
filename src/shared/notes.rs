/**
 * Note Wire Types
 *
 * Request and response bodies for the `/api/notes` endpoints, together with
 * the validation rules applied before anything reaches the database.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Maximum note title length, counted in characters after trimming
pub const MAX_TITLE_CHARS: usize = 200;

/// Maximum note body length in characters
pub const MAX_CONTENT_CHARS: usize = 100_000;

/// Body of `POST /api/notes`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    /// Note title (required, 1-200 chars after trimming)
    pub title: String,
    /// Note body (optional, defaults to empty)
    #[serde(default)]
    pub content: String,
}

impl NoteDraft {
    /// Validate the draft and return it with the title trimmed
    pub fn validated(self) -> Result<Self, SharedError> {
        let title = validate_title(&self.title)?;
        validate_content(&self.content)?;
        Ok(Self {
            title,
            content: self.content,
        })
    }
}

/// Body of `PUT /api/notes/{id}`
///
/// Fields left out of the request keep their stored value.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NotePatch {
    /// Validate the patch and return it with the title trimmed
    ///
    /// A patch must change at least one field.
    pub fn validated(self) -> Result<Self, SharedError> {
        if self.title.is_none() && self.content.is_none() {
            return Err(SharedError::validation(
                "body",
                "Provide a title or content to update",
            ));
        }

        let title = self.title.as_deref().map(validate_title).transpose()?;
        if let Some(content) = &self.content {
            validate_content(content)?;
        }

        Ok(Self {
            title,
            content: self.content,
        })
    }
}

/// A note as returned to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NoteResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn validate_title(title: &str) -> Result<String, SharedError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(SharedError::validation("title", "Title cannot be empty"));
    }
    if trimmed.chars().count() > MAX_TITLE_CHARS {
        return Err(SharedError::validation(
            "title",
            format!("Title must be at most {} characters", MAX_TITLE_CHARS),
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_content(content: &str) -> Result<(), SharedError> {
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(SharedError::validation(
            "content",
            format!("Content must be at most {} characters", MAX_CONTENT_CHARS),
        ));
    }
    Ok(())
}
