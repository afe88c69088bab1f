//! Review scheduling.
//!
//! Schedulers consume a review outcome and produce the item's next
//! [`SchedulingState`]. The drill-queue selector never calls into this
//! module; the two meet only at the `SchedulingState` type.

pub mod sm2;

use crate::types::{Grade, SchedulingState};
use chrono::{DateTime, Utc};

/// Trait for spaced-repetition schedulers.
pub trait ReviewScheduler: Send + Sync {
    /// Tag written into [`SchedulingState::algorithm`].
    fn name(&self) -> &'static str;

    /// Compute the next scheduling state after a review.
    ///
    /// `previous` is `None` when the item has never been reviewed.
    fn review(
        &self,
        previous: Option<&SchedulingState>,
        grade: Grade,
        now: DateTime<Utc>,
    ) -> SchedulingState;
}

/// Resolve a scheduler by the tag stored on an item's scheduling state.
pub fn get_scheduler(tag: &str) -> Option<Box<dyn ReviewScheduler>> {
    match tag {
        "sm2" => Some(Box::new(sm2::Sm2::default())),
        _ => None,
    }
}
