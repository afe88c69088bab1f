//! Drill-queue selection.
//!
//! Pure projection over a caller-supplied vocabulary pool: partitions
//! items into due / upcoming / new buckets relative to a reference time,
//! orders each bucket, and returns a single queue truncated to the
//! caller's limit. Items due beyond the lookahead window are excluded
//! entirely. Nothing here mutates the pool or any scheduling state.

use crate::types::{Bucket, DrillQueue, VocabularyItem};
use chrono::{DateTime, Duration, Utc};

/// Classify one item relative to `now` and the lookahead window.
pub fn classify(
    item: &VocabularyItem,
    now: DateTime<Utc>,
    upcoming_window_hours: i64,
) -> Bucket {
    let horizon = now + Duration::hours(upcoming_window_hours);
    match &item.scheduling {
        None => Bucket::New,
        Some(state) if state.due_at <= now => Bucket::Due,
        Some(state) if state.due_at <= horizon => Bucket::Upcoming,
        Some(_) => Bucket::Later,
    }
}

/// Build the prioritized drill queue from a vocabulary pool.
///
/// Ordering: all due items by ascending `due_at` (most overdue first),
/// then upcoming items by ascending `due_at` (soonest first), then new
/// items by ascending `created_at` (input order breaks ties). The
/// concatenation is truncated to `limit`; the reported counts are the
/// full bucket sizes before truncation.
///
/// A `limit` of zero yields an empty queue with counts still computed —
/// an empty practice session is a valid, displayable state.
pub fn select_drill_queue(
    items: &[VocabularyItem],
    now: DateTime<Utc>,
    limit: usize,
    upcoming_window_hours: i64,
) -> DrillQueue {
    let mut due: Vec<&VocabularyItem> = Vec::new();
    let mut upcoming: Vec<&VocabularyItem> = Vec::new();
    let mut new: Vec<&VocabularyItem> = Vec::new();

    for item in items {
        match classify(item, now, upcoming_window_hours) {
            Bucket::Due => due.push(item),
            Bucket::Upcoming => upcoming.push(item),
            Bucket::New => new.push(item),
            Bucket::Later => {}
        }
    }

    // Stable sorts, so equal keys keep input order.
    let due_key = |item: &&VocabularyItem| {
        item.scheduling.as_ref().map(|s| s.due_at).unwrap_or(now)
    };
    due.sort_by_key(due_key);
    upcoming.sort_by_key(due_key);
    new.sort_by_key(|item| item.created_at);

    let due_count = due.len();
    let upcoming_count = upcoming.len();
    let new_count = new.len();

    let queue = due
        .into_iter()
        .chain(upcoming)
        .chain(new)
        .take(limit)
        .cloned()
        .collect();

    DrillQueue {
        queue,
        due_count,
        upcoming_count,
        new_count,
    }
}
