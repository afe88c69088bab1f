//! Core types for the vocabulary drill library.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Spaced-repetition metadata attached to an item once it has been
/// reviewed at least once. Written by a [`crate::scheduler::ReviewScheduler`],
/// read (never written) by the drill-queue selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingState {
    /// Tag of the scheduler that produced this state. Opaque to the
    /// selector; resolved by [`crate::scheduler::get_scheduler`].
    pub algorithm: String,
    /// Consecutive successful reviews.
    pub streak: u32,
    pub interval_days: f64,
    pub ease_factor: f64,
    /// When the item next becomes eligible for review.
    pub due_at: DateTime<Utc>,
    pub last_reviewed_at: DateTime<Utc>,
}

/// A user's saved word or phrase.
///
/// `scheduling` is `None` until the first review; such items are "new"
/// and ordered by `created_at` instead of a due time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub id: String,
    pub term: String,
    pub meaning: String,
    #[serde(default)]
    pub examples: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduling: Option<SchedulingState>,
}

impl VocabularyItem {
    /// Whether the item has never been scheduled for review.
    pub fn is_new(&self) -> bool {
        self.scheduling.is_none()
    }
}

/// Classification of an item relative to a reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Scheduled and already eligible (`due_at <= now`).
    Due,
    /// Scheduled and eligible within the lookahead window.
    Upcoming,
    /// Never scheduled.
    New,
    /// Scheduled but beyond the lookahead window; excluded from drills.
    Later,
}

/// Ordered, size-bounded practice queue with per-bucket pool counts.
///
/// The counts are taken before truncation to the caller's limit, so the
/// UI can show "12 due" even when only 5 items are drilled at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillQueue {
    pub queue: Vec<VocabularyItem>,
    pub due_count: usize,
    pub upcoming_count: usize,
    pub new_count: usize,
}

/// Review outcome on a 4-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Again,
    Hard,
    Good,
    Easy,
}

impl Grade {
    /// Map a 2-point outcome (tap-through drill UIs) to the 4-point scale.
    pub fn from_correct(correct: bool) -> Self {
        if correct { Self::Good } else { Self::Again }
    }

    /// Whether the outcome counts toward the streak.
    pub fn is_success(self) -> bool {
        !matches!(self, Self::Again)
    }
}
