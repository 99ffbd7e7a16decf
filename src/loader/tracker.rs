//! Fetch fan-out tracking and model assembly.
//!
//! [`LoadTracker`] is the loader's state machine. It is pure: fetch results
//! are fed in as byte payloads with their HTTP status, and the tracker
//! answers with the next thing to do — issue more fetches, keep waiting,
//! surface the finished [`LibraryModel`], or give up.
//!
//! # Sequencing
//!
//! The status map and the library index are requested together and may
//! complete in either order. The moment the index arrives, one request per
//! listed identifier is emitted in a single batch, so the shim fires them
//! all before any response comes back — total load time is bounded by the
//! slowest single fetch, not the sum. The tracker completes only once the
//! two required resources are in and every book request has resolved,
//! success or failure.
//!
//! # Failure classification
//!
//! Status or index failures (transport or parse) are fatal and abort
//! initialization. A failing book is logged at warn level and its
//! identifier is dropped from the merged model; its status entry, if any,
//! stays behind as an orphan that stats still count.

use crate::domain::book::{BookRecord, StatusRecord};
use crate::domain::error::{BookrackError, Result};
use crate::domain::library::LibraryModel;
use crate::loader::fetch::ResourceKind;
use std::collections::{HashMap, HashSet};

/// What the tracker wants next after absorbing a fetch result.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerStep {
    /// Requests are still in flight; nothing to do yet.
    Pending,
    /// Issue these fetches now (the per-book fan-out).
    Fetch(Vec<ResourceKind>),
    /// Everything resolved; here is the merged model.
    Complete(LibraryModel),
    /// A required resource failed; initialization is aborted.
    Failed(String),
}

/// Tracks the three-stage load: status + index, then the book fan-out.
#[derive(Debug, Default)]
pub struct LoadTracker {
    statuses: Option<HashMap<String, StatusRecord>>,
    order: Option<Vec<String>>,
    books: HashMap<String, BookRecord>,
    pending_books: HashSet<String>,
    fanned_out: bool,
    finished: bool,
}

impl LoadTracker {
    /// The requests to issue at startup.
    ///
    /// Status and index are independent and fetched concurrently.
    #[must_use]
    pub fn initial_requests() -> Vec<ResourceKind> {
        vec![ResourceKind::Status, ResourceKind::Index]
    }

    /// Absorbs one fetch result and decides the next step.
    ///
    /// `http_status` is the response code reported by the host; anything
    /// outside 2xx is treated as a failed fetch. Results arriving after the
    /// tracker has finished (completed or failed) are ignored.
    pub fn on_response(
        &mut self,
        resource: &ResourceKind,
        http_status: u16,
        body: &[u8],
    ) -> TrackerStep {
        if self.finished {
            tracing::debug!(resource = %resource.describe(), "result after completion, ignoring");
            return TrackerStep::Pending;
        }

        let _span = tracing::debug_span!("load_response",
            resource = %resource.describe(),
            http_status = http_status
        )
        .entered();

        match resource {
            ResourceKind::Status => match parse_required::<HashMap<String, StatusRecord>>(
                resource,
                http_status,
                body,
            ) {
                Ok(statuses) => {
                    tracing::debug!(entry_count = statuses.len(), "status map loaded");
                    self.statuses = Some(statuses);
                    self.step_after_progress()
                }
                Err(e) => self.fail(&e),
            },
            ResourceKind::Index => {
                match parse_required::<Vec<String>>(resource, http_status, body) {
                    Ok(order) => {
                        tracing::debug!(book_count = order.len(), "library index loaded");
                        let fan_out = self.fan_out(&order);
                        self.order = Some(order);
                        if fan_out.is_empty() {
                            self.step_after_progress()
                        } else {
                            TrackerStep::Fetch(fan_out)
                        }
                    }
                    Err(e) => self.fail(&e),
                }
            }
            ResourceKind::Book(id) => {
                self.pending_books.remove(id);
                match parse_book(id, http_status, body) {
                    Ok(book) => {
                        self.books.insert(id.clone(), book);
                    }
                    Err(e) => {
                        // Non-fatal: the identifier is dropped from the model.
                        tracing::warn!(book_id = %id, error = %e, "book fetch failed, skipping");
                    }
                }
                self.step_after_progress()
            }
        }
    }

    /// Builds the per-book request batch from the index, deduplicating ids.
    fn fan_out(&mut self, order: &[String]) -> Vec<ResourceKind> {
        self.fanned_out = true;
        order
            .iter()
            .filter(|id| self.pending_books.insert((*id).clone()))
            .map(|id| ResourceKind::Book(id.clone()))
            .collect()
    }

    /// Checks for completion after any successful progress.
    fn step_after_progress(&mut self) -> TrackerStep {
        let ready = self.statuses.is_some() && self.fanned_out && self.pending_books.is_empty();
        if !ready {
            return TrackerStep::Pending;
        }

        self.finished = true;
        let model = LibraryModel {
            books: std::mem::take(&mut self.books),
            statuses: self.statuses.take().unwrap_or_default(),
            order: self.order.take().unwrap_or_default(),
        };
        tracing::debug!(
            loaded_books = model.books.len(),
            status_entries = model.statuses.len(),
            "library load complete"
        );
        TrackerStep::Complete(model)
    }

    /// Records a fatal failure and stops absorbing further results.
    fn fail(&mut self, error: &BookrackError) -> TrackerStep {
        tracing::error!(error = %error, "required catalog resource failed");
        self.finished = true;
        TrackerStep::Failed(error.to_string())
    }
}

/// Parses a required resource, converting transport and parse failures into
/// the fatal error variants.
fn parse_required<T: serde::de::DeserializeOwned>(
    resource: &ResourceKind,
    http_status: u16,
    body: &[u8],
) -> Result<T> {
    if !(200..300).contains(&http_status) {
        return Err(BookrackError::Load {
            resource: resource.describe(),
            reason: format!("HTTP {http_status}"),
        });
    }
    serde_json::from_slice(body).map_err(|e| BookrackError::Parse {
        resource: resource.describe(),
        reason: e.to_string(),
    })
}

/// Parses a single book payload, injecting the identifier on success.
fn parse_book(id: &str, http_status: u16, body: &[u8]) -> Result<BookRecord> {
    let resource = ResourceKind::Book(id.to_string());
    let mut book: BookRecord = parse_required(&resource, http_status, body)?;
    book.id = id.to_string();
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_json(title: &str) -> Vec<u8> {
        format!(
            r#"{{"title": "{title}", "author": "someone", "category": "fiction", "tags": [], "notes": ""}}"#
        )
        .into_bytes()
    }

    fn drive_core(tracker: &mut LoadTracker, status_json: &str, index_json: &str) -> Vec<ResourceKind> {
        let step = tracker.on_response(&ResourceKind::Status, 200, status_json.as_bytes());
        assert_eq!(step, TrackerStep::Pending);
        match tracker.on_response(&ResourceKind::Index, 200, index_json.as_bytes()) {
            TrackerStep::Fetch(requests) => requests,
            other => panic!("expected book fan-out, got {other:?}"),
        }
    }

    #[test]
    fn fan_out_issues_every_book_in_one_batch() {
        let mut tracker = LoadTracker::default();
        let requests = drive_core(&mut tracker, "{}", r#"["a", "b", "c"]"#);
        assert_eq!(
            requests,
            vec![
                ResourceKind::Book("a".to_string()),
                ResourceKind::Book("b".to_string()),
                ResourceKind::Book("c".to_string()),
            ]
        );
    }

    #[test]
    fn completes_only_after_last_book_resolves() {
        let mut tracker = LoadTracker::default();
        drive_core(&mut tracker, "{}", r#"["a", "b"]"#);

        let step = tracker.on_response(&ResourceKind::Book("a".to_string()), 200, &book_json("A"));
        assert_eq!(step, TrackerStep::Pending);

        let step = tracker.on_response(&ResourceKind::Book("b".to_string()), 200, &book_json("B"));
        let TrackerStep::Complete(model) = step else {
            panic!("expected completion");
        };
        assert_eq!(model.books.len(), 2);
        assert_eq!(model.books["a"].id, "a");
        assert_eq!(model.order, vec!["a", "b"]);
    }

    #[test]
    fn book_failure_is_dropped_not_fatal() {
        let mut tracker = LoadTracker::default();
        let status = r#"{"a": {"status": "reading", "pagesRead": 50}, "b": {"status": "completed"}}"#;
        drive_core(&mut tracker, status, r#"["a", "b", "c"]"#);

        tracker.on_response(&ResourceKind::Book("a".to_string()), 200, &book_json("A"));
        tracker.on_response(&ResourceKind::Book("b".to_string()), 404, b"not found");
        let step = tracker.on_response(&ResourceKind::Book("c".to_string()), 200, &book_json("C"));

        let TrackerStep::Complete(model) = step else {
            panic!("expected completion despite a failed book");
        };
        assert!(model.books.contains_key("a"));
        assert!(!model.books.contains_key("b"));
        assert!(model.books.contains_key("c"));
        // The orphaned status entry for "b" survives the merge.
        assert!(model.statuses.contains_key("b"));
    }

    #[test]
    fn unparseable_book_is_dropped_not_fatal() {
        let mut tracker = LoadTracker::default();
        drive_core(&mut tracker, "{}", r#"["a"]"#);
        let step = tracker.on_response(&ResourceKind::Book("a".to_string()), 200, b"{nope");
        let TrackerStep::Complete(model) = step else {
            panic!("expected completion");
        };
        assert!(model.books.is_empty());
    }

    #[test]
    fn index_failure_is_fatal() {
        let mut tracker = LoadTracker::default();
        tracker.on_response(&ResourceKind::Status, 200, b"{}");
        let step = tracker.on_response(&ResourceKind::Index, 500, b"boom");
        assert!(matches!(step, TrackerStep::Failed(_)));

        // Later results are ignored once failed.
        let step = tracker.on_response(&ResourceKind::Status, 200, b"{}");
        assert_eq!(step, TrackerStep::Pending);
    }

    #[test]
    fn status_parse_failure_is_fatal() {
        let mut tracker = LoadTracker::default();
        let step = tracker.on_response(&ResourceKind::Status, 200, b"[1, 2]");
        let TrackerStep::Failed(message) = step else {
            panic!("expected fatal failure");
        };
        assert!(message.contains("status map"));
    }

    #[test]
    fn empty_index_completes_once_status_arrives() {
        let mut tracker = LoadTracker::default();
        let step = tracker.on_response(&ResourceKind::Index, 200, b"[]");
        assert_eq!(step, TrackerStep::Pending);
        let step = tracker.on_response(&ResourceKind::Status, 200, b"{}");
        assert!(matches!(step, TrackerStep::Complete(_)));
    }

    #[test]
    fn duplicate_index_entries_are_fetched_once() {
        let mut tracker = LoadTracker::default();
        let requests = drive_core(&mut tracker, "{}", r#"["a", "a"]"#);
        assert_eq!(requests.len(), 1);

        let step = tracker.on_response(&ResourceKind::Book("a".to_string()), 200, &book_json("A"));
        assert!(matches!(step, TrackerStep::Complete(_)));
    }
}
