//! Event handling: the single place state transitions happen.

use crate::app::actions::Action;
use crate::app::modes::{LoadPhase, ModalState, StatusFilter};
use crate::app::state::AppState;
use crate::domain::Result;
use crate::loader::{ResourceKind, TrackerStep};

/// Application-level events, mapped from host input by the plugin shim.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Move the grid cursor down.
    MoveDown,
    /// Move the grid cursor up.
    MoveUp,
    /// Switch the status filter.
    SetFilter(StatusFilter),
    /// Open the detail overlay on the selected book.
    OpenDetail,
    /// Close the detail overlay.
    CloseDetail,
    /// Escape: closes the overlay if open, otherwise does nothing.
    Escape,
    /// Hide the plugin pane.
    CloseFocus,
    /// A catalog fetch resolved.
    ResourceLoaded {
        resource: ResourceKind,
        http_status: u16,
        body: Vec<u8>,
    },
}

/// Applies one event to the state.
///
/// Returns whether the screen must be repainted, plus the side effects the
/// shim should execute. Navigation and filter events are suppressed while
/// the detail overlay is open and ignored entirely outside the ready phase.
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Result<(bool, Vec<Action>)> {
    let mut should_render = false;
    let mut actions = Vec::new();

    match event {
        AppEvent::MoveDown => {
            if can_navigate(state) {
                state.move_selection(1);
                should_render = true;
            }
        }
        AppEvent::MoveUp => {
            if can_navigate(state) {
                state.move_selection(-1);
                should_render = true;
            }
        }
        AppEvent::SetFilter(filter) => {
            if can_navigate(state) && state.filter != filter {
                tracing::debug!(filter = filter.label(), "status filter changed");
                state.set_filter(filter);
                should_render = true;
            }
        }
        AppEvent::OpenDetail => {
            if state.phase == LoadPhase::Ready && !state.modal.is_open() {
                if let Some(id) = state.selected_id() {
                    state.modal = ModalState::Open(id.to_string());
                    should_render = true;
                }
            }
        }
        AppEvent::CloseDetail | AppEvent::Escape => {
            // Idempotent when already closed: no repaint, no effect.
            if state.modal.is_open() {
                state.modal = ModalState::Closed;
                should_render = true;
            }
        }
        AppEvent::CloseFocus => {
            actions.push(Action::CloseFocus);
        }
        AppEvent::ResourceLoaded {
            resource,
            http_status,
            body,
        } => {
            let (render, fetches) = absorb_result(state, &resource, http_status, &body);
            should_render = render;
            actions.extend(fetches.into_iter().map(Action::Fetch));
        }
    }

    Ok((should_render, actions))
}

fn can_navigate(state: &AppState) -> bool {
    state.phase == LoadPhase::Ready && !state.modal.is_open()
}

/// Feeds one fetch result to the tracker and applies its verdict.
fn absorb_result(
    state: &mut AppState,
    resource: &ResourceKind,
    http_status: u16,
    body: &[u8],
) -> (bool, Vec<ResourceKind>) {
    match state.tracker.on_response(resource, http_status, body) {
        TrackerStep::Pending => (false, Vec::new()),
        TrackerStep::Fetch(requests) => (false, requests),
        TrackerStep::Complete(model) => {
            state.install_model(model);
            (true, Vec::new())
        }
        TrackerStep::Failed(detail) => {
            state.phase = LoadPhase::Failed(detail);
            (true, Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookRecord, LibraryModel, StatusRecord};
    use std::collections::HashMap;

    fn book(id: &str) -> BookRecord {
        BookRecord {
            id: id.to_string(),
            title: id.to_uppercase(),
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

    fn ready_state() -> AppState {
        let mut books = HashMap::new();
        books.insert("a".to_string(), book("a"));
        books.insert("b".to_string(), book("b"));
        let mut statuses = HashMap::new();
        statuses.insert(
            "a".to_string(),
            StatusRecord {
                status: "reading".to_string(),
                pages_read: Some(10),
            },
        );
        let mut state = AppState::default();
        state.install_model(LibraryModel {
            books,
            statuses,
            order: vec!["a".to_string(), "b".to_string()],
        });
        state
    }

    fn apply(state: &mut AppState, event: AppEvent) -> (bool, Vec<Action>) {
        handle_event(state, event).unwrap()
    }

    #[test]
    fn open_close_reopen_tracks_latest_selection() {
        let mut state = ready_state();
        apply(&mut state, AppEvent::OpenDetail);
        assert_eq!(state.modal, ModalState::Open("a".to_string()));

        apply(&mut state, AppEvent::CloseDetail);
        apply(&mut state, AppEvent::MoveDown);
        apply(&mut state, AppEvent::OpenDetail);
        assert_eq!(state.modal, ModalState::Open("b".to_string()));
    }

    #[test]
    fn escape_is_idempotent_when_closed() {
        let mut state = ready_state();
        let (render, actions) = apply(&mut state, AppEvent::Escape);
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn open_overlay_suppresses_navigation_and_filters() {
        let mut state = ready_state();
        apply(&mut state, AppEvent::OpenDetail);

        let (render, _) = apply(&mut state, AppEvent::MoveDown);
        assert!(!render);
        assert_eq!(state.selected_index, 0);

        let (render, _) = apply(&mut state, AppEvent::SetFilter(StatusFilter::Reading));
        assert!(!render);
        assert_eq!(state.filter, StatusFilter::All);

        // Escape still works with the overlay open.
        let (render, _) = apply(&mut state, AppEvent::Escape);
        assert!(render);
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn navigation_is_ignored_while_loading() {
        let mut state = AppState::default();
        let (render, _) = apply(&mut state, AppEvent::MoveDown);
        assert!(!render);
        let (render, _) = apply(&mut state, AppEvent::OpenDetail);
        assert!(!render);
    }

    #[test]
    fn index_result_fans_out_book_fetches() {
        let mut state = AppState::default();
        apply(
            &mut state,
            AppEvent::ResourceLoaded {
                resource: ResourceKind::Status,
                http_status: 200,
                body: b"{}".to_vec(),
            },
        );
        let (render, actions) = apply(
            &mut state,
            AppEvent::ResourceLoaded {
                resource: ResourceKind::Index,
                http_status: 200,
                body: br#"["a", "b"]"#.to_vec(),
            },
        );
        assert!(!render);
        assert_eq!(
            actions,
            vec![
                Action::Fetch(ResourceKind::Book("a".to_string())),
                Action::Fetch(ResourceKind::Book("b".to_string())),
            ]
        );
        assert_eq!(state.phase, LoadPhase::Loading);
    }

    #[test]
    fn fatal_load_failure_moves_to_failed_phase() {
        let mut state = AppState::default();
        let (render, _) = apply(
            &mut state,
            AppEvent::ResourceLoaded {
                resource: ResourceKind::Index,
                http_status: 503,
                body: Vec::new(),
            },
        );
        assert!(render);
        assert!(matches!(state.phase, LoadPhase::Failed(_)));
    }

    #[test]
    fn close_focus_requests_the_action() {
        let mut state = ready_state();
        let (_, actions) = apply(&mut state, AppEvent::CloseFocus);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
