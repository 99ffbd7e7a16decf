//! Domain layer for the Bookrack plugin.
//!
//! This module contains the core domain types for the plugin, independent of
//! Zellij-specific APIs or infrastructure concerns: the book and status wire
//! records, the merged library model, and the error taxonomy.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book record, status record and cover-color models
//! - [`library`]: Merged in-memory catalog model

pub mod book;
pub mod error;
pub mod library;

pub use book::{BookRecord, CoverColor, ReadingStatus, StatusRecord};
pub use error::{BookrackError, Result};
pub use library::LibraryModel;
