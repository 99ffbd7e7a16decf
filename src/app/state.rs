//! Central application state.

use crate::app::modes::{LoadPhase, ModalState, StatusFilter};
use crate::app::stats::{compute_stats, LibraryStats};
use crate::domain::{BookRecord, LibraryModel};
use crate::loader::LoadTracker;
use crate::ui::components::grid::CARD_ROWS;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    self, EmptyState, FilterBarInfo, FilterEntry, FooterInfo, HeaderInfo, UIViewModel,
};

/// Everything the plugin knows between events.
///
/// Mutated only by the event handler; rendering reads it through an
/// immutable projection. The library model itself never changes after
/// install, so navigation and filtering are pure index bookkeeping on top
/// of it.
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: LoadPhase,
    pub tracker: LoadTracker,
    pub model: LibraryModel,
    pub stats: LibraryStats,

    pub filter: StatusFilter,
    /// Identifiers visible under the current filter, in index order.
    pub visible_ids: Vec<String>,
    /// Cursor position within `visible_ids`.
    pub selected_index: usize,

    pub modal: ModalState,
    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Installs the loaded model and moves to the ready phase.
    pub fn install_model(&mut self, model: LibraryModel) {
        self.stats = compute_stats(model.books.len(), &model.statuses);
        self.model = model;
        self.phase = LoadPhase::Ready;
        self.refresh_visible();
    }

    /// Switches the status filter and recomputes the visible set.
    ///
    /// The cursor resets to the top; a filter change always lands on a
    /// different population so carrying the old index over is meaningless.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        if self.filter == filter {
            return;
        }
        self.filter = filter;
        self.selected_index = 0;
        self.refresh_visible();
    }

    /// Recomputes `visible_ids` from the model and the active filter.
    ///
    /// Walks the library index order, keeping only identifiers with a loaded
    /// book. For a status filter the joined status code must equal the
    /// filter's code exactly, so unknown status strings and missing entries
    /// match only `All`.
    fn refresh_visible(&mut self) {
        let wanted = self.filter.code();
        self.visible_ids = self
            .model
            .order
            .iter()
            .filter(|id| self.model.books.contains_key(id.as_str()))
            .filter(|id| match wanted {
                None => true,
                Some(code) => self
                    .model
                    .status_of(id)
                    .is_some_and(|s| s.status == code),
            })
            .cloned()
            .collect();
        if self.selected_index >= self.visible_ids.len() {
            self.selected_index = 0;
        }
    }

    /// Moves the cursor by `delta`, wrapping at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible_ids.len();
        if len == 0 {
            return;
        }
        let len = len as isize;
        let next = (self.selected_index as isize + delta).rem_euclid(len);
        self.selected_index = next as usize;
    }

    /// The identifier under the cursor, if any books are visible.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.visible_ids.get(self.selected_index).map(String::as_str)
    }

    /// The book record under the cursor.
    #[must_use]
    pub fn selected_book(&self) -> Option<&BookRecord> {
        self.selected_id().and_then(|id| self.model.books.get(id))
    }

    /// The book the detail overlay is focused on, if open.
    #[must_use]
    pub fn focused_book(&self) -> Option<&BookRecord> {
        match &self.modal {
            ModalState::Open(id) => self.model.books.get(id),
            ModalState::Closed => None,
        }
    }

    /// Projects the ready-phase state onto a renderable view model.
    ///
    /// The grid is windowed to the rows the terminal can hold; the window
    /// slides so the cursor is always inside it. Loading and failure screens
    /// bypass this entirely.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        // Header, filter bar, a blank row, and the footer.
        const CHROME_ROWS: usize = 4;

        let header = HeaderInfo {
            title: "Bookrack".to_string(),
            stats: self.stats,
        };

        let filter_bar = FilterBarInfo {
            entries: StatusFilter::ALL
                .iter()
                .map(|f| FilterEntry {
                    label: f.label(),
                    count: self.filter_count(*f),
                    is_active: *f == self.filter,
                })
                .collect(),
        };

        let slots = rows.saturating_sub(CHROME_ROWS).max(CARD_ROWS) / CARD_ROWS;
        let window_start = if self.selected_index < slots {
            0
        } else {
            self.selected_index + 1 - slots
        };

        let cards: Vec<_> = self
            .visible_ids
            .iter()
            .enumerate()
            .skip(window_start)
            .take(slots)
            .filter_map(|(index, id)| {
                let book = self.model.books.get(id)?;
                Some(viewmodel::project_card(
                    book,
                    self.model.status_of(id),
                    index == self.selected_index,
                ))
            })
            .collect();

        let empty_state = cards.is_empty().then(|| EmptyState {
            message: if self.filter == StatusFilter::All {
                "The library is empty".to_string()
            } else {
                "No books match this filter".to_string()
            },
        });

        let modal = self
            .focused_book()
            .map(|book| viewmodel::project_modal(book, self.model.status_of(&book.id)));

        let keybindings = if self.modal.is_open() {
            "esc/q/enter: close".to_string()
        } else {
            "j/k: navigate | 1-4: filter | enter: details | q: quit".to_string()
        };

        UIViewModel {
            header,
            filter_bar,
            cards,
            empty_state,
            modal,
            footer: FooterInfo { keybindings },
        }
    }

    /// Toolbar count for a filter entry, mirroring the header stats row.
    fn filter_count(&self, filter: StatusFilter) -> u32 {
        match filter {
            StatusFilter::All => self.stats.total,
            StatusFilter::Reading => self.stats.reading,
            StatusFilter::Completed => self.stats.completed,
            StatusFilter::ToRead => self.stats.to_read,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatusRecord;
    use std::collections::HashMap;

    fn book(id: &str) -> BookRecord {
        BookRecord {
            id: id.to_string(),
            title: format!("Book {id}"),
            author: "author".to_string(),
            category: "category".to_string(),
            tags: Vec::new(),
            notes: String::new(),
            total_pages: None,
            thumbnail: None,
            cover_color: None,
            summary_available: false,
        }
    }

    fn status(code: &str) -> StatusRecord {
        StatusRecord {
            status: code.to_string(),
            pages_read: None,
        }
    }

    fn sample_state() -> AppState {
        // Index [a, b, c]; "b" failed to load but kept its status entry.
        let mut books = HashMap::new();
        books.insert("a".to_string(), book("a"));
        books.insert("c".to_string(), book("c"));

        let mut statuses = HashMap::new();
        statuses.insert("a".to_string(), status("reading"));
        statuses.insert("b".to_string(), status("completed"));

        let mut state = AppState::default();
        state.install_model(LibraryModel {
            books,
            statuses,
            order: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        });
        state
    }

    #[test]
    fn install_preserves_index_order_and_skips_missing_books() {
        let state = sample_state();
        assert_eq!(state.phase, LoadPhase::Ready);
        assert_eq!(state.visible_ids, vec!["a", "c"]);
        assert_eq!(state.stats.total, 2);
        // Stats count the orphaned "completed" entry even though the grid
        // will never show that book.
        assert_eq!(state.stats.completed, 1);
        assert_eq!(state.stats.reading, 1);
    }

    #[test]
    fn completed_filter_shows_nothing_when_the_only_completed_book_failed() {
        let mut state = sample_state();
        state.set_filter(StatusFilter::Completed);
        assert!(state.visible_ids.is_empty());
        assert_eq!(state.selected_id(), None);
        assert_eq!(state.stats.completed, 1);
    }

    #[test]
    fn status_filter_matches_exact_code_only() {
        let mut state = sample_state();
        state.set_filter(StatusFilter::Reading);
        assert_eq!(state.visible_ids, vec!["a"]);

        // "c" has no status entry at all, so it matches only All.
        state.set_filter(StatusFilter::ToRead);
        assert!(state.visible_ids.is_empty());
        state.set_filter(StatusFilter::All);
        assert_eq!(state.visible_ids, vec!["a", "c"]);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = sample_state();
        assert_eq!(state.selected_id(), Some("a"));
        state.move_selection(-1);
        assert_eq!(state.selected_id(), Some("c"));
        state.move_selection(1);
        assert_eq!(state.selected_id(), Some("a"));
    }

    #[test]
    fn filter_change_resets_the_cursor() {
        let mut state = sample_state();
        state.move_selection(1);
        assert_eq!(state.selected_index, 1);
        state.set_filter(StatusFilter::Reading);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_noop_on_empty_visible_set() {
        let mut state = AppState::default();
        state.move_selection(1);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn viewmodel_window_follows_the_cursor() {
        let ids: Vec<String> = (0..20).map(|i| format!("b{i:02}")).collect();
        let mut books = HashMap::new();
        for id in &ids {
            books.insert(id.clone(), book(id));
        }
        let mut state = AppState::default();
        state.install_model(LibraryModel {
            books,
            statuses: HashMap::new(),
            order: ids,
        });

        // 24 rows leaves room for 4 cards of chrome-free grid.
        let vm = state.compute_viewmodel(24, 80);
        let slots = vm.cards.len();
        assert!(slots > 0 && slots < 20);
        assert!(vm.cards[0].is_selected);

        for _ in 0..10 {
            state.move_selection(1);
        }
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.cards.len(), slots);
        assert!(vm.cards.last().unwrap().is_selected);
        assert_eq!(vm.cards.last().unwrap().title, "Book b10");
    }

    #[test]
    fn viewmodel_reports_empty_filters_and_open_overlay() {
        let mut state = sample_state();
        state.set_filter(StatusFilter::Completed);
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.cards.is_empty());
        assert_eq!(
            vm.empty_state.unwrap().message,
            "No books match this filter"
        );
        // The toolbar still advertises the orphaned completed entry.
        let completed = vm
            .filter_bar
            .entries
            .iter()
            .find(|e| e.label == "Completed")
            .unwrap();
        assert_eq!(completed.count, 1);
        assert!(completed.is_active);

        state.set_filter(StatusFilter::All);
        state.modal = ModalState::Open("a".to_string());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.modal.unwrap().title, "Book a");
        assert_eq!(vm.footer.keybindings, "esc/q/enter: close");
    }
}
