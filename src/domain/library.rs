//! Merged in-memory library model.
//!
//! This module defines [`LibraryModel`], the container the loader produces
//! once every fetch has resolved. It joins books and status entries by
//! identifier and remembers the library index order, which is the canonical
//! enumeration order for rendering.

use crate::domain::book::{BookRecord, StatusRecord};
use std::collections::HashMap;

/// The merged catalog, produced once per session by the loader.
///
/// `order` lists every identifier from the library index, including ones
/// whose book fetch failed; consumers that iterate it must check membership
/// in `books`. Status entries without a loaded book stay in `statuses` —
/// rendering never sees them, but the stats aggregator (which scans the
/// status map directly) still counts them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryModel {
    /// Successfully loaded books, keyed by identifier.
    pub books: HashMap<String, BookRecord>,

    /// Reading status per identifier, exactly as fetched.
    pub statuses: HashMap<String, StatusRecord>,

    /// Identifier order from `library.json`.
    pub order: Vec<String>,
}

impl LibraryModel {
    /// Looks up the status entry joined to a book identifier.
    #[must_use]
    pub fn status_of(&self, id: &str) -> Option<&StatusRecord> {
        self.statuses.get(id)
    }
}
