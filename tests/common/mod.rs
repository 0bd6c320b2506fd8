//! Common test utilities and helpers
//!
//! Shared by every integration test file:
//! - Database fixtures (in-memory and file-backed SQLite)
//! - App/server construction and authentication helpers
//! - Custom assertion macros

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
pub use database::*;
