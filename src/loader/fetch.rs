//! Fetch request descriptions and URL construction.
//!
//! The loader never performs I/O itself. It emits [`ResourceKind`] values
//! describing what to fetch; the plugin shim turns each into a `web_request`
//! host call against a [`BaseUrl`] and tags it with a context map so the
//! asynchronous result can be routed back to the right place. Context maps
//! are plain string pairs, matching what the Zellij host round-trips.

use std::collections::BTreeMap;

/// Context key carrying the resource discriminant.
const CONTEXT_RESOURCE: &str = "resource";

/// Context key carrying the book identifier for per-book fetches.
const CONTEXT_BOOK_ID: &str = "book_id";

/// The three kinds of static resources the catalog serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    /// `data/status.json` — identifier → status record map. Required.
    Status,
    /// `data/library.json` — ordered identifier array. Required.
    Index,
    /// `data/books/<id>.json` — a single book record. Failure is non-fatal.
    Book(String),
}

impl ResourceKind {
    /// Human-readable description used in diagnostics and error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Status => "status map".to_string(),
            Self::Index => "library index".to_string(),
            Self::Book(id) => format!("book \"{id}\""),
        }
    }

    /// Encodes this resource into a `web_request` context map.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        match self {
            Self::Status => {
                context.insert(CONTEXT_RESOURCE.to_string(), "status".to_string());
            }
            Self::Index => {
                context.insert(CONTEXT_RESOURCE.to_string(), "index".to_string());
            }
            Self::Book(id) => {
                context.insert(CONTEXT_RESOURCE.to_string(), "book".to_string());
                context.insert(CONTEXT_BOOK_ID.to_string(), id.clone());
            }
        }
        context
    }

    /// Decodes a resource from a `web_request` result context.
    ///
    /// Returns `None` for contexts that did not originate from this plugin's
    /// fetches (unknown discriminant, or a book entry missing its id).
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        match context.get(CONTEXT_RESOURCE).map(String::as_str) {
            Some("status") => Some(Self::Status),
            Some("index") => Some(Self::Index),
            Some("book") => context
                .get(CONTEXT_BOOK_ID)
                .map(|id| Self::Book(id.clone())),
            _ => None,
        }
    }
}

/// Catalog base URL with normalized trailing slash.
///
/// All three resource kinds are resolved as relative paths under this base,
/// mirroring the static layout the catalog is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a base URL, appending a trailing slash if missing.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        if raw.ends_with('/') {
            Self(raw.to_string())
        } else {
            Self(format!("{raw}/"))
        }
    }

    /// Builds the absolute URL for a resource.
    #[must_use]
    pub fn url_for(&self, resource: &ResourceKind) -> String {
        let base = &self.0;
        match resource {
            ResourceKind::Status => format!("{base}data/status.json"),
            ResourceKind::Index => format!("{base}data/library.json"),
            ResourceKind::Book(id) => format!("{base}data/books/{id}.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_round_trips_every_kind() {
        for kind in [
            ResourceKind::Status,
            ResourceKind::Index,
            ResourceKind::Book("dispossessed".to_string()),
        ] {
            let context = kind.to_context();
            assert_eq!(ResourceKind::from_context(&context), Some(kind));
        }
    }

    #[test]
    fn foreign_context_is_rejected() {
        assert_eq!(ResourceKind::from_context(&BTreeMap::new()), None);

        let mut context = BTreeMap::new();
        context.insert("resource".to_string(), "session".to_string());
        assert_eq!(ResourceKind::from_context(&context), None);

        // A book context without an id is not ours either.
        let mut context = BTreeMap::new();
        context.insert("resource".to_string(), "book".to_string());
        assert_eq!(ResourceKind::from_context(&context), None);
    }

    #[test]
    fn base_url_normalizes_trailing_slash() {
        let with = BaseUrl::new("http://127.0.0.1:8000/");
        let without = BaseUrl::new("http://127.0.0.1:8000");
        assert_eq!(with, without);
        assert_eq!(
            with.url_for(&ResourceKind::Status),
            "http://127.0.0.1:8000/data/status.json"
        );
        assert_eq!(
            with.url_for(&ResourceKind::Book("a-1".to_string())),
            "http://127.0.0.1:8000/data/books/a-1.json"
        );
    }
}
