//! View modes: load phase, status filter and detail focus.

use crate::domain::ReadingStatus;

/// Lifecycle phase of the catalog load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Fetches are still in flight; a loading indicator is shown.
    #[default]
    Loading,
    /// The model is installed and the grid is interactive.
    Ready,
    /// A required resource failed. Carries the diagnostic detail, which is
    /// logged; the screen shows a generic failure message.
    Failed(String),
}

/// The active status filter.
///
/// `All` shows every loaded book. The other three match the exact known
/// status codes, so a book with an unknown status string is visible only
/// under `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Reading,
    Completed,
    ToRead,
}

impl StatusFilter {
    /// Every filter in toolbar order.
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Reading,
        StatusFilter::Completed,
        StatusFilter::ToRead,
    ];

    /// The status code this filter matches, or `None` for `All`.
    #[must_use]
    pub fn code(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Reading => Some(ReadingStatus::Reading.code()),
            Self::Completed => Some(ReadingStatus::Completed.code()),
            Self::ToRead => Some(ReadingStatus::ToRead.code()),
        }
    }

    /// Toolbar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Reading => "Reading",
            Self::Completed => "Completed",
            Self::ToRead => "To Read",
        }
    }
}

/// Whether the detail overlay is open, and on which book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    /// Open on the book with this identifier.
    Open(String),
}

impl ModalState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_codes_match_wire_values() {
        assert_eq!(StatusFilter::All.code(), None);
        assert_eq!(StatusFilter::Reading.code(), Some("reading"));
        assert_eq!(StatusFilter::Completed.code(), Some("completed"));
        assert_eq!(StatusFilter::ToRead.code(), Some("toread"));
    }

    #[test]
    fn to_read_label_has_a_space() {
        assert_eq!(StatusFilter::ToRead.label(), "To Read");
    }
}
