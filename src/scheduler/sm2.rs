//! SM-2-style scheduler adapted to streak-based vocabulary drilling.
//!
//! Successful reviews extend the streak and grow the interval
//! multiplicatively by the ease factor; `Again` resets the streak and
//! schedules a short same-session re-drill instead of a full-day reset.

use super::ReviewScheduler;
use crate::types::{Grade, SchedulingState};
use chrono::{DateTime, Duration, Utc};

/// SM-2 variant with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    /// Interval after the first successful review.
    pub graduating_interval_days: f64,
    /// Interval when the first review is rated Easy.
    pub easy_interval_days: f64,
    pub hard_multiplier: f64,
    pub easy_bonus: f64,
    /// Re-drill delay after a failed review.
    pub again_delay_minutes: i64,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            graduating_interval_days: 1.0,
            easy_interval_days: 4.0,
            hard_multiplier: 1.2,
            easy_bonus: 1.3,
            again_delay_minutes: 10,
        }
    }
}

impl ReviewScheduler for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn review(
        &self,
        previous: Option<&SchedulingState>,
        grade: Grade,
        now: DateTime<Utc>,
    ) -> SchedulingState {
        let prev_ease = previous.map(|s| s.ease_factor).unwrap_or(self.initial_ease);
        let prev_interval = previous.map(|s| s.interval_days).unwrap_or(0.0);
        let prev_streak = previous.map(|s| s.streak).unwrap_or(0);

        let (streak, interval_days, ease_factor) = if grade.is_success() {
            let ease_adjustment = match grade {
                Grade::Hard => -0.15,
                Grade::Easy => 0.15,
                _ => 0.0,
            };
            let ease = (prev_ease + ease_adjustment).max(self.minimum_ease);
            let interval = if prev_streak == 0 {
                match grade {
                    Grade::Easy => self.easy_interval_days,
                    _ => self.graduating_interval_days,
                }
            } else {
                let multiplier = match grade {
                    Grade::Hard => self.hard_multiplier,
                    Grade::Easy => ease * self.easy_bonus,
                    _ => ease,
                };
                (prev_interval * multiplier).max(self.graduating_interval_days)
            };
            (prev_streak + 1, interval, ease)
        } else {
            let ease = (prev_ease - 0.2).max(self.minimum_ease);
            (0, 0.0, ease)
        };

        let due_at = if grade.is_success() {
            now + Duration::days(interval_days.ceil() as i64)
        } else {
            now + Duration::minutes(self.again_delay_minutes)
        };

        SchedulingState {
            algorithm: self.name().to_string(),
            streak,
            interval_days,
            ease_factor,
            due_at,
            last_reviewed_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn first_good_review_graduates_to_one_day() {
        let sm2 = Sm2::default();
        let state = sm2.review(None, Grade::Good, now());
        assert_eq!(state.streak, 1);
        assert_eq!(state.interval_days, 1.0);
        assert_eq!(state.ease_factor, 2.5);
    }

    #[test]
    fn first_easy_review_gets_longer_interval() {
        let sm2 = Sm2::default();
        let state = sm2.review(None, Grade::Easy, now());
        assert_eq!(state.interval_days, 4.0);
    }

    #[test]
    fn successful_streak_grows_interval_by_ease() {
        let sm2 = Sm2::default();
        let t = now();
        let first = sm2.review(None, Grade::Good, t);
        let second = sm2.review(Some(&first), Grade::Good, t + Duration::days(1));
        assert_eq!(second.streak, 2);
        assert_eq!(second.interval_days, 2.5);
    }

    #[test]
    fn again_resets_streak_and_schedules_redrill() {
        let sm2 = Sm2::default();
        let t = now();
        let first = sm2.review(None, Grade::Good, t);
        let lapsed = sm2.review(Some(&first), Grade::Again, t + Duration::days(1));
        assert_eq!(lapsed.streak, 0);
        assert_eq!(lapsed.interval_days, 0.0);
        assert!(lapsed.due_at - lapsed.last_reviewed_at <= Duration::minutes(10));
    }

    #[test]
    fn recovery_after_lapse_starts_from_graduating_interval() {
        let sm2 = Sm2::default();
        let t = now();
        let lapsed = sm2.review(None, Grade::Again, t);
        let recovered = sm2.review(Some(&lapsed), Grade::Good, t + Duration::minutes(10));
        assert_eq!(recovered.streak, 1);
        assert_eq!(recovered.interval_days, 1.0);
    }

    #[test]
    fn hard_lowers_ease_and_slows_growth() {
        let sm2 = Sm2::default();
        let t = now();
        let first = sm2.review(None, Grade::Good, t);
        let second = sm2.review(Some(&first), Grade::Hard, t + Duration::days(1));
        assert!((second.ease_factor - 2.35).abs() < 1e-9);
        assert_eq!(second.interval_days, 1.2);
    }

    #[test]
    fn ease_never_drops_below_minimum() {
        let sm2 = Sm2::default();
        let t = now();
        let mut state = sm2.review(None, Grade::Again, t);
        for _ in 0..10 {
            state = sm2.review(Some(&state), Grade::Again, t);
        }
        assert!(state.ease_factor >= sm2.minimum_ease);
    }

    #[test]
    fn review_stamps_last_reviewed_at() {
        let sm2 = Sm2::default();
        let t = now();
        let state = sm2.review(None, Grade::Good, t);
        assert_eq!(state.last_reviewed_at, t);
    }
}
