//! Book and reading-status domain models.
//!
//! This module defines the wire-format records the loader fetches from the
//! catalog: one [`BookRecord`] per book file, plus a [`StatusRecord`] map keyed
//! by the same identifiers. Both are immutable for the lifetime of a session;
//! the identifier is the join key between the two.

use serde::{Deserialize, Serialize};

/// The three reading-status codes the catalog knows about.
///
/// Status values arrive as raw strings (see [`StatusRecord::status`]); this
/// enumeration exists for filter and stats comparisons against the known
/// codes. A status string outside this set is displayed verbatim but matches
/// no filter and counts in no stats bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingStatus {
    Reading,
    Completed,
    ToRead,
}

impl ReadingStatus {
    /// The wire code for this status, as it appears in `status.json`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Completed => "completed",
            Self::ToRead => "toread",
        }
    }
}

/// Fixed cover-color enumeration for books without a thumbnail.
///
/// Serialized as the lowercase color name. When a book record omits the
/// field, [`CoverColor::default`] (blue) is the single fallback used by both
/// the card cover and the modal header gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverColor {
    Red,
    #[default]
    Blue,
    Purple,
    Green,
}

/// A single book as stored in `data/books/<id>.json`.
///
/// The identifier is injected by the loader from the library index; it is not
/// required to be present in the file itself and is ignored if it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Unique identifier, assigned by the loader (join key to the status map).
    #[serde(skip)]
    pub id: String,

    pub title: String,
    pub author: String,
    pub category: String,

    /// Tags in display order. Cards show the first two and collapse the
    /// remainder into a "+N" indicator; the modal shows all of them.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Free-text notes. Passed through in full; any truncation happens at
    /// paint time.
    #[serde(default)]
    pub notes: String,

    /// Total page count. `Some(0)` is treated as absent when deriving the
    /// progress block.
    #[serde(default)]
    pub total_pages: Option<u32>,

    /// Relative path to a cover thumbnail. Retained from the wire format;
    /// the terminal renderer paints the colored cover band regardless.
    #[serde(default)]
    pub thumbnail: Option<String>,

    /// Explicit cover color; resolved to blue when absent.
    #[serde(default)]
    pub cover_color: Option<CoverColor>,

    /// Whether a summary exists for this book (shown as a card indicator).
    #[serde(default)]
    pub summary_available: bool,
}

impl BookRecord {
    /// Resolves the cover color, applying the default when the field is absent.
    ///
    /// This is the single fallback point shared by card and modal projections.
    #[must_use]
    pub fn resolved_cover(&self) -> CoverColor {
        self.cover_color.unwrap_or_default()
    }
}

/// Per-book reading status as stored in `data/status.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    /// Raw status code. Known values are `"reading"`, `"completed"` and
    /// `"toread"`; anything else renders verbatim and matches no filter.
    pub status: String,

    /// Pages read so far. Only meaningful while `status` is `"reading"` and
    /// the joined book carries a total page count. May exceed the total;
    /// rendering clamps the fill, never the label.
    #[serde(default)]
    pub pages_read: Option<u32>,
}

impl StatusRecord {
    /// Returns the known status this record matches, if any.
    #[must_use]
    pub fn known_status(&self) -> Option<ReadingStatus> {
        match self.status.as_str() {
            "reading" => Some(ReadingStatus::Reading),
            "completed" => Some(ReadingStatus::Completed),
            "toread" => Some(ReadingStatus::ToRead),
            _ => None,
        }
    }
}
