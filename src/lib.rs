//! Core library for a vocabulary drill application.
//!
//! Provides:
//! - Drill-queue selection (due / upcoming / new bucketing with a
//!   bounded, prioritized practice queue)
//! - Spaced repetition scheduling (SM-2 variant)
//! - Decoding of the JSON vocabulary bank stored by the mobile app
//! - Shared types (VocabularyItem, SchedulingState, Grade, etc.)

pub mod error;
pub mod queue;
pub mod record;
pub mod scheduler;
pub mod types;

pub use error::{RecordError, Result};
pub use queue::{classify, select_drill_queue};
pub use record::{decode_bank, decode_item, encode_bank};
pub use scheduler::{get_scheduler, ReviewScheduler};
pub use types::{Bucket, DrillQueue, Grade, SchedulingState, VocabularyItem};
