//! Notes Module
//!
//! Per-user note storage and its HTTP handlers.
//!
//! - **`db`** - `Note` row type and `NoteRepository`
//! - **`handlers`** - `/api/notes` CRUD handlers

pub mod db;
pub mod handlers;

pub use db::{Note, NoteRepository};
pub use handlers::{create_note, delete_note, get_note, list_notes, update_note};
