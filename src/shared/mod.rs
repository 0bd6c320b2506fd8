//! Shared Module
//!
//! Wire types shared by the server and any Rust client of the API. Nothing in
//! here touches the database or the HTTP stack; these are plain serde types
//! plus the validation rules the server enforces on them.

/// Shared error types
pub mod error;

/// Note request and response types
pub mod notes;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use notes::{NoteDraft, NotePatch, NoteResponse, MAX_CONTENT_CHARS, MAX_TITLE_CHARS};
