//! View model types representing renderable UI state.
//!
//! Immutable projections computed from application state, following the MVVM
//! pattern. View models are created via `AppState::compute_viewmodel()` and
//! consumed by the renderer; they contain no business logic, only
//! display-ready data, so every labeling rule here is testable without a
//! terminal.

use crate::app::stats::LibraryStats;
use crate::domain::{BookRecord, CoverColor, StatusRecord};

/// Status label shown when a book has no status entry.
const UNKNOWN_STATUS_LABEL: &str = "unknown";

/// Tags shown on a card before the remainder collapses into a `+N` chip.
pub const CARD_TAG_LIMIT: usize = 2;

/// Complete UI view model for one frame in the ready phase.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub filter_bar: FilterBarInfo,

    /// Cards in the visible window, in library index order.
    pub cards: Vec<CardProjection>,

    /// Shown instead of the grid when the filter matches nothing.
    pub empty_state: Option<EmptyState>,

    /// Detail overlay contents, painted over the grid when present.
    pub modal: Option<ModalProjection>,

    pub footer: FooterInfo,
}

/// Header line: title plus the aggregate counters.
///
/// The counters come straight from [`LibraryStats`]; the status buckets scan
/// the status map, so a bucket can exceed the number of cards its filter
/// shows when a counted book failed to load.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub stats: LibraryStats,
}

/// One entry in the filter toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    pub label: &'static str,
    pub count: u32,
    pub is_active: bool,
}

/// The filter toolbar, in fixed order: All, Reading, Completed, To Read.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    pub entries: Vec<FilterEntry>,
}

/// Display information for one book card.
#[derive(Debug, Clone)]
pub struct CardProjection {
    pub title: String,
    pub author: String,
    pub category: String,

    /// Badge text: `"To Read"`, a raw status string, or `"unknown"`.
    pub status_label: String,

    /// Cover band color, defaulted to blue when the record omits it.
    pub cover: CoverColor,

    /// Up to [`CARD_TAG_LIMIT`] leading tags.
    pub tags: Vec<String>,

    /// How many tags were collapsed into the `+N` chip, if any.
    pub tag_overflow: Option<usize>,

    /// Notes, truncated at paint time to the card width.
    pub notes_preview: String,

    pub summary_available: bool,

    /// Present only for books actively being read with a known page total.
    pub progress: Option<ProgressInfo>,

    pub is_selected: bool,
}

/// Reading progress, split into label and fill.
///
/// `percent` is the rounded, unclamped label value; `fill_ratio` is clamped
/// to 1.0 so an overshoot (more pages read than the total) reads as a full
/// bar with a label above 100%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressInfo {
    pub pages_read: u32,
    pub total_pages: u32,
    pub percent: u32,
    pub fill_ratio: f32,
}

/// Detail overlay contents.
///
/// Unlike the card, the overlay carries every tag and the full notes text;
/// its header band uses the same resolved cover color as the card.
#[derive(Debug, Clone)]
pub struct ModalProjection {
    pub title: String,
    pub author: String,
    pub category: String,
    pub status_label: String,
    pub cover: CoverColor,
    pub tags: Vec<String>,
    pub notes: String,
    pub progress: Option<ProgressInfo>,
}

/// Message shown when the active filter matches no loaded book.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
}

/// Keybinding help line.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Derives the badge text for a book's status entry.
///
/// Missing entries read `"unknown"`, the `toread` code gets its display
/// form, and anything else (known or not) is shown verbatim.
#[must_use]
pub fn status_label(status: Option<&StatusRecord>) -> String {
    match status {
        None => UNKNOWN_STATUS_LABEL.to_string(),
        Some(record) if record.status == "toread" => "To Read".to_string(),
        Some(record) => record.status.clone(),
    }
}

/// Derives the progress block, when the book qualifies for one.
///
/// Requires all three: the status code is exactly `reading`, a pages-read
/// value is present, and the book carries a nonzero page total.
#[must_use]
pub fn progress_info(status: Option<&StatusRecord>, book: &BookRecord) -> Option<ProgressInfo> {
    let record = status?;
    if record.status != "reading" {
        return None;
    }
    let pages_read = record.pages_read?;
    let total_pages = match book.total_pages {
        Some(total) if total > 0 => total,
        _ => return None,
    };

    let ratio = f64::from(pages_read) / f64::from(total_pages);
    Some(ProgressInfo {
        pages_read,
        total_pages,
        percent: (ratio * 100.0).round() as u32,
        fill_ratio: (ratio as f32).min(1.0),
    })
}

/// Projects one book onto a card.
#[must_use]
pub fn project_card(
    book: &BookRecord,
    status: Option<&StatusRecord>,
    is_selected: bool,
) -> CardProjection {
    let overflow = book.tags.len().saturating_sub(CARD_TAG_LIMIT);
    CardProjection {
        title: book.title.clone(),
        author: book.author.clone(),
        category: book.category.clone(),
        status_label: status_label(status),
        cover: book.resolved_cover(),
        tags: book.tags.iter().take(CARD_TAG_LIMIT).cloned().collect(),
        tag_overflow: (overflow > 0).then_some(overflow),
        notes_preview: book.notes.clone(),
        summary_available: book.summary_available,
        progress: progress_info(status, book),
        is_selected,
    }
}

/// Projects one book onto the detail overlay.
#[must_use]
pub fn project_modal(book: &BookRecord, status: Option<&StatusRecord>) -> ModalProjection {
    ModalProjection {
        title: book.title.clone(),
        author: book.author.clone(),
        category: book.category.clone(),
        status_label: status_label(status),
        cover: book.resolved_cover(),
        tags: book.tags.clone(),
        notes: book.notes.clone(),
        progress: progress_info(status, book),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> BookRecord {
        BookRecord {
            id: "a".to_string(),
            title: "title".to_string(),
            author: "author".to_string(),
            category: "category".to_string(),
            tags: vec![
                "one".to_string(),
                "two".to_string(),
                "three".to_string(),
                "four".to_string(),
            ],
            notes: "some notes".to_string(),
            total_pages: Some(100),
            thumbnail: None,
            cover_color: None,
            summary_available: true,
        }
    }

    fn reading(pages: u32) -> StatusRecord {
        StatusRecord {
            status: "reading".to_string(),
            pages_read: Some(pages),
        }
    }

    #[test]
    fn status_label_covers_all_three_shapes() {
        assert_eq!(status_label(None), "unknown");
        assert_eq!(
            status_label(Some(&StatusRecord {
                status: "toread".to_string(),
                pages_read: None,
            })),
            "To Read"
        );
        // Unknown codes are shown verbatim, not normalized.
        assert_eq!(
            status_label(Some(&StatusRecord {
                status: "paused".to_string(),
                pages_read: None,
            })),
            "paused"
        );
    }

    #[test]
    fn overshoot_keeps_label_unclamped_but_fills_the_bar() {
        let status = reading(120);
        let info = progress_info(Some(&status), &book()).unwrap();
        assert_eq!(info.percent, 120);
        assert!((info.fill_ratio - 1.0).abs() < f32::EPSILON);
        assert_eq!(info.pages_read, 120);
        assert_eq!(info.total_pages, 100);
    }

    #[test]
    fn progress_requires_reading_status_pages_and_total() {
        let b = book();

        assert_eq!(progress_info(None, &b), None);

        let completed = StatusRecord {
            status: "completed".to_string(),
            pages_read: Some(50),
        };
        assert_eq!(progress_info(Some(&completed), &b), None);

        let no_pages = StatusRecord {
            status: "reading".to_string(),
            pages_read: None,
        };
        assert_eq!(progress_info(Some(&no_pages), &b), None);

        let mut zero_total = book();
        zero_total.total_pages = Some(0);
        let status = reading(10);
        assert_eq!(progress_info(Some(&status), &zero_total), None);
    }

    #[test]
    fn card_truncates_tags_and_counts_overflow() {
        let card = project_card(&book(), None, false);
        assert_eq!(card.tags, vec!["one", "two"]);
        assert_eq!(card.tag_overflow, Some(2));
        assert_eq!(card.status_label, "unknown");
    }

    #[test]
    fn modal_carries_full_tags_and_notes() {
        let status = reading(40);
        let modal = project_modal(&book(), Some(&status));
        assert_eq!(modal.tags.len(), 4);
        assert_eq!(modal.notes, "some notes");
        assert_eq!(modal.progress.unwrap().percent, 40);
    }

    #[test]
    fn card_and_modal_share_the_default_cover() {
        let card = project_card(&book(), None, false);
        let modal = project_modal(&book(), None);
        assert_eq!(card.cover, CoverColor::Blue);
        assert_eq!(modal.cover, CoverColor::Blue);
    }
}
