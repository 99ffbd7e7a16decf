//! Aggregate counters for the header stats row.

use crate::domain::{ReadingStatus, StatusRecord};
use std::collections::HashMap;

/// Counters shown in the stats row, computed once per model install.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LibraryStats {
    /// Number of successfully loaded books.
    pub total: u32,
    pub reading: u32,
    pub completed: u32,
    pub to_read: u32,
}

/// Computes the stats row counters.
///
/// `total` counts loaded books, but the three status buckets scan the status
/// map directly. A status entry whose book failed to load still lands in its
/// bucket, so buckets can sum to more than `total`. Unknown status strings
/// land in no bucket.
#[must_use]
pub fn compute_stats(
    books_loaded: usize,
    statuses: &HashMap<String, StatusRecord>,
) -> LibraryStats {
    let mut stats = LibraryStats {
        total: books_loaded as u32,
        ..LibraryStats::default()
    };
    for record in statuses.values() {
        match record.known_status() {
            Some(ReadingStatus::Reading) => stats.reading += 1,
            Some(ReadingStatus::Completed) => stats.completed += 1,
            Some(ReadingStatus::ToRead) => stats.to_read += 1,
            None => {}
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: &str) -> StatusRecord {
        StatusRecord {
            status: code.to_string(),
            pages_read: None,
        }
    }

    #[test]
    fn buckets_scan_the_status_map() {
        let mut statuses = HashMap::new();
        statuses.insert("a".to_string(), status("reading"));
        statuses.insert("b".to_string(), status("completed"));
        statuses.insert("c".to_string(), status("completed"));
        statuses.insert("d".to_string(), status("toread"));

        let stats = compute_stats(4, &statuses);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.reading, 1);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.to_read, 1);
    }

    #[test]
    fn orphaned_statuses_still_count() {
        // Two books loaded, but three status entries: "b" failed to load.
        let mut statuses = HashMap::new();
        statuses.insert("a".to_string(), status("reading"));
        statuses.insert("b".to_string(), status("completed"));
        statuses.insert("c".to_string(), status("completed"));

        let stats = compute_stats(2, &statuses);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 2);
    }

    #[test]
    fn unknown_status_lands_in_no_bucket() {
        let mut statuses = HashMap::new();
        statuses.insert("a".to_string(), status("paused"));

        let stats = compute_stats(1, &statuses);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.reading + stats.completed + stats.to_read, 0);
    }
}
