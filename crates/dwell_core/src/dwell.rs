//! Dwell-time state machine.
//!
//! A widget moves between three states:
//!
//! ```text
//!            point                 still for still_time_ms
//! Inactive ─────────▶ Active ──────────────────────────────▶ Pressed
//!    ▲                  │  ▲                                    │
//!    └──── no point ────┘  └──────────── moved ─────────────────┘
//! ```
//!
//! "Still" means every sample stays within `still_dist2` of the *frozen*
//! point, the sample recorded when movement was last detected. Samples
//! that are close are not recorded, so jitter around the frozen point never
//! resets the clock, and slow drift away from it eventually does.
//!
//! [`DwellTracker`] owns only the timing fields and tells its widget which
//! hook to run through [`DwellAction`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DwellConfig;
use crate::geometry::{Point, Timestamp};

/// Interaction state of a single widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GestureState {
    /// No pointer over the widget.
    #[default]
    Inactive,
    /// Pointer over the widget, dwell clock running.
    Active,
    /// Pointer held still long enough; the press has been committed.
    Pressed,
}

impl GestureState {
    pub fn is_inactive(&self) -> bool {
        matches!(self, GestureState::Inactive)
    }
}

/// What the widget must do after a tracker step
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DwellAction {
    /// Pointer absent: clear transient state.
    Release,
    /// Pointer moved (or just arrived): recompute continuous state.
    Update(Point),
    /// Dwell completed for the first time this episode: build the payload.
    Commit,
    /// Nothing changed.
    Hold,
}

/// Timing state for one widget.
#[derive(Clone, Debug, Default)]
pub struct DwellTracker {
    state: GestureState,
    /// Frozen point that stillness is measured against.
    last_point: Option<Point>,
    /// When the frozen point was recorded. `None` until the first sample.
    dwell_start: Option<Timestamp>,
    /// Whether the press has already been announced this episode.
    committed: bool,
}

impl DwellTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    pub fn dwell_start(&self) -> Option<Timestamp> {
        self.dwell_start
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Advance one tick.
    pub fn step(&mut self, point: Option<Point>, now: Timestamp, config: &DwellConfig) -> DwellAction {
        let Some(point) = point else {
            if !self.state.is_inactive() {
                debug!("dwell released after {:?}", self.state);
            }
            self.state = GestureState::Inactive;
            self.dwell_start = None;
            self.last_point = None;
            return DwellAction::Release;
        };

        let Some(start) = self.dwell_start else {
            self.state = GestureState::Active;
            return self.restart(point, now);
        };

        if !self.is_close(point, config) {
            if self.state == GestureState::Pressed {
                debug!("pointer moved, leaving pressed state");
            }
            self.state = GestureState::Active;
            return self.restart(point, now);
        }

        if now.millis_since(start) >= config.still_time_ms {
            self.state = GestureState::Pressed;
            if self.committed {
                DwellAction::Hold
            } else {
                self.committed = true;
                DwellAction::Commit
            }
        } else {
            self.state = GestureState::Active;
            DwellAction::Hold
        }
    }

    fn restart(&mut self, point: Point, now: Timestamp) -> DwellAction {
        self.dwell_start = Some(now);
        self.committed = false;
        self.last_point = Some(point);
        DwellAction::Update(point)
    }

    fn is_close(&self, point: Point, config: &DwellConfig) -> bool {
        self.last_point
            .is_some_and(|last| last.distance2(point) <= config.still_dist2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(t: u64) -> Timestamp {
        Timestamp::from_millis(t)
    }

    fn p(x: f32, y: f32) -> Option<Point> {
        Some(Point::new(x, y))
    }

    #[test]
    fn test_first_point_activates_and_updates() {
        let config = DwellConfig::default();
        let mut tracker = DwellTracker::new();

        let action = tracker.step(p(50.0, 50.0), ms(0), &config);
        assert_eq!(action, DwellAction::Update(Point::new(50.0, 50.0)));
        assert_eq!(tracker.state(), GestureState::Active);
        assert_eq!(tracker.dwell_start(), Some(ms(0)));
        assert!(!tracker.is_committed());
    }

    #[test]
    fn test_close_sample_before_still_time_is_noop() {
        let config = DwellConfig::default();
        let mut tracker = DwellTracker::new();
        tracker.step(p(50.0, 50.0), ms(0), &config);

        let action = tracker.step(p(52.0, 51.0), ms(500), &config);
        assert_eq!(action, DwellAction::Hold);
        assert_eq!(tracker.last_point(), Some(Point::new(50.0, 50.0)));
        assert_eq!(tracker.dwell_start(), Some(ms(0)));
    }

    #[test]
    fn test_commit_fires_once_at_still_time() {
        let config = DwellConfig::default();
        let mut tracker = DwellTracker::new();
        tracker.step(p(50.0, 50.0), ms(0), &config);

        assert_eq!(tracker.step(p(51.0, 50.0), ms(1999), &config), DwellAction::Hold);
        assert_eq!(tracker.step(p(51.0, 50.0), ms(2000), &config), DwellAction::Commit);
        assert_eq!(tracker.state(), GestureState::Pressed);
        assert!(tracker.is_committed());

        for t in [2100, 3000, 10_000] {
            assert_eq!(tracker.step(p(49.0, 51.0), ms(t), &config), DwellAction::Hold);
            assert_eq!(tracker.state(), GestureState::Pressed);
        }
    }

    #[test]
    fn test_movement_while_pressed_demotes_and_rearms() {
        let config = DwellConfig::default();
        let mut tracker = DwellTracker::new();
        tracker.step(p(50.0, 50.0), ms(0), &config);
        tracker.step(p(50.0, 50.0), ms(2000), &config);
        assert_eq!(tracker.state(), GestureState::Pressed);

        let action = tracker.step(p(90.0, 50.0), ms(2100), &config);
        assert_eq!(action, DwellAction::Update(Point::new(90.0, 50.0)));
        assert_eq!(tracker.state(), GestureState::Active);
        assert!(!tracker.is_committed());
        assert_eq!(tracker.dwell_start(), Some(ms(2100)));

        assert_eq!(tracker.step(p(90.0, 50.0), ms(4100), &config), DwellAction::Commit);
    }

    #[test]
    fn test_release_clears_timer() {
        let config = DwellConfig::default();
        let mut tracker = DwellTracker::new();
        tracker.step(p(50.0, 50.0), ms(0), &config);

        assert_eq!(tracker.step(None, ms(100), &config), DwellAction::Release);
        assert_eq!(tracker.state(), GestureState::Inactive);
        assert_eq!(tracker.dwell_start(), None);

        // Re-entering starts a fresh episode, even at the same spot
        let action = tracker.step(p(50.0, 50.0), ms(2500), &config);
        assert!(matches!(action, DwellAction::Update(_)));
        assert_eq!(tracker.dwell_start(), Some(ms(2500)));
    }

    #[test]
    fn test_inactive_release_is_idempotent() {
        let config = DwellConfig::default();
        let mut tracker = DwellTracker::new();
        for t in 0..5 {
            assert_eq!(tracker.step(None, ms(t * 100), &config), DwellAction::Release);
            assert_eq!(tracker.state(), GestureState::Inactive);
            assert_eq!(tracker.last_point(), None);
            assert_eq!(tracker.dwell_start(), None);
            assert!(!tracker.is_committed());
        }
    }

    #[test]
    fn test_boundary_distance_counts_as_close() {
        let config = DwellConfig::default().with_still_dist2(25.0);
        let mut tracker = DwellTracker::new();
        tracker.step(p(0.0, 0.0), ms(0), &config);

        // 3-4-5 triangle: distance2 == 25
        assert_eq!(tracker.step(p(3.0, 4.0), ms(10), &config), DwellAction::Hold);
        assert!(matches!(
            tracker.step(p(3.0, 4.1), ms(20), &config),
            DwellAction::Update(_)
        ));
    }

    #[test]
    fn test_clock_going_backwards_does_not_commit() {
        let config = DwellConfig::default();
        let mut tracker = DwellTracker::new();
        tracker.step(p(10.0, 10.0), ms(5000), &config);
        assert_eq!(tracker.step(p(10.0, 10.0), ms(0), &config), DwellAction::Hold);
        assert_eq!(tracker.state(), GestureState::Active);
    }
}
