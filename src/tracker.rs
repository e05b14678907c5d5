//! The pull-to-refresh state machine.
//!
//! `Idle -> Tracking -> Confirmed -> Committing -> Idle`, with a vetoed
//! sub-path straight back to `Idle`. One method per touch callback; each
//! takes the touch point, the current time and the page scroll offset as
//! plain values and returns the side effect the host must perform, if any.

use crate::classify::{in_horizontal_scroll_context, in_scrolled_container};
use crate::config::{ACTIVATION_DELAY_MS, DEAD_ZONE_PX};
use crate::state::{PullToRefreshState, TouchSession};
use crate::surface::SurfaceNode;

/// Side effect requested by a transition. The tracker itself never touches
/// the host: scroll suppression and the reload are performed by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PullEffect {
    /// Call `preventDefault()` on the current `touchmove`.
    SuppressScroll,
    /// Enter the commit sequence: schedule the reload after the grace
    /// period.
    BeginRefresh,
}

#[derive(Debug)]
pub struct PullGesture<N> {
    session: TouchSession<N>,
    state: PullToRefreshState,
}

impl<N: SurfaceNode> PullGesture<N> {
    pub fn new() -> Self {
        Self {
            session: TouchSession::idle(),
            state: PullToRefreshState::IDLE,
        }
    }

    /// Current public snapshot.
    pub fn state(&self) -> PullToRefreshState {
        self.state
    }

    /// Seeds a fresh session, superseding any prior one. No effect on the
    /// public snapshot.
    pub fn touch_start(&mut self, y: f64, now_ms: f64, scroll_y: f64, target: Option<N>) {
        self.session = TouchSession::begin(y, now_ms, scroll_y, target);
    }

    /// Runs the decision ladder for one `touchmove`.
    pub fn touch_move(&mut self, y: f64, now_ms: f64, scroll_y: f64) -> Option<PullEffect> {
        if !self.session.active {
            return None;
        }
        // Once committed, the pending reload owns the page. A session
        // seeded inside the grace window must never confirm.
        if self.state.is_refreshing {
            return None;
        }

        let delta_y = y - self.session.start_y;

        // Moving up or stationary: drop any feedback and fall back to an
        // unconfirmed session.
        if delta_y <= 0.0 {
            self.reset_pulling();
            self.session.confirmed = false;
            return None;
        }

        // Any scroll excursion, past or present, permanently disqualifies
        // this session from becoming a refresh gesture.
        if scroll_y > 0.0 || self.session.last_scroll_y > 0.0 {
            self.reset_pulling();
            self.session.confirmed = false;
            // Sticky: a past excursion keeps disqualifying this session
            // even after the page scrolls back to the top.
            self.session.last_scroll_y = self.session.last_scroll_y.max(scroll_y);
            return None;
        }
        self.session.last_scroll_y = scroll_y;

        if !self.session.confirmed {
            if in_horizontal_scroll_context(self.session.target.as_ref()) {
                self.session.active = false;
                return None;
            }
            if in_scrolled_container(self.session.target.as_ref()) {
                self.session.active = false;
                return None;
            }
            // Give native scroll a chance to claim the gesture first.
            if now_ms - self.session.start_time < ACTIVATION_DELAY_MS {
                return None;
            }
            self.session.confirmed = true;
        }

        let effective = (delta_y - DEAD_ZONE_PX).max(0.0);
        if effective > 0.0 {
            self.state = PullToRefreshState::pulling(effective);
            // The one and only point where native scrolling is suppressed;
            // doing it before the dead zone clears would break ordinary
            // scrolling.
            Some(PullEffect::SuppressScroll)
        } else {
            self.reset_pulling();
            None
        }
    }

    /// `touchend` and `touchcancel` share this path.
    pub fn release(&mut self) -> Option<PullEffect> {
        if !self.session.active {
            return None;
        }
        // can_refresh must be read before the session is torn down.
        let should_refresh = self.state.can_refresh;
        let committing = self.state.is_refreshing;
        self.session = TouchSession::idle();

        if committing {
            // A stray release inside the grace window; the scheduled
            // reload stands.
            return None;
        }
        if should_refresh {
            self.state = PullToRefreshState::refreshing(self.state.pull_distance);
            Some(PullEffect::BeginRefresh)
        } else {
            self.state = PullToRefreshState::IDLE;
            None
        }
    }

    fn reset_pulling(&mut self) {
        if self.state.is_pulling {
            self.state = PullToRefreshState::IDLE;
        }
    }
}
