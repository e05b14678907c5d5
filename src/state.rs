//! Externally observed recognizer state and the per-gesture session value.

use serde::{Deserialize, Serialize};

use crate::config::PULL_THRESHOLD_PX;
use crate::curve::visual_offset;

/// Render-safe snapshot consumed by the presentation layer. Replaced
/// wholesale on every transition; never mutated field by field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PullToRefreshState {
    /// A confirmed pull is in progress (or the commit sequence is running).
    pub is_pulling: bool,
    /// Post-dead-zone overscroll distance in pixels, always >= 0.
    pub pull_distance: f64,
    /// Releasing now would trigger a refresh.
    pub can_refresh: bool,
    /// True only during the commit sequence between release and reload.
    pub is_refreshing: bool,
    /// Damped offset to apply as a vertical translation to page content.
    pub visual_offset: f64,
}

impl PullToRefreshState {
    pub const IDLE: Self = Self {
        is_pulling: false,
        pull_distance: 0.0,
        can_refresh: false,
        is_refreshing: false,
        visual_offset: 0.0,
    };

    /// Snapshot for an active, confirmed pull at `distance` px.
    pub fn pulling(distance: f64) -> Self {
        Self {
            is_pulling: true,
            pull_distance: distance,
            can_refresh: distance >= PULL_THRESHOLD_PX,
            is_refreshing: false,
            visual_offset: visual_offset(distance),
        }
    }

    /// Snapshot for the commit sequence. The offset drops to zero so the
    /// content snaps back while the indicator keeps spinning.
    pub fn refreshing(distance: f64) -> Self {
        Self {
            is_pulling: true,
            pull_distance: distance,
            can_refresh: true,
            is_refreshing: true,
            visual_offset: 0.0,
        }
    }
}

/// Per-gesture session owned by the tracker. Created on `touchstart`,
/// destroyed on `touchend`/`touchcancel`; a new `touchstart` always
/// supersedes any prior session.
#[derive(Clone, Debug)]
pub struct TouchSession<N> {
    pub active: bool,
    /// Exclusion checks have passed and the activation delay has elapsed.
    pub confirmed: bool,
    pub start_y: f64,
    pub start_time: f64,
    /// Touch target, used only for ancestry lookups while the session lives.
    pub target: Option<N>,
    /// Last observed page scroll offset. Once this goes positive the
    /// session can never become a refresh gesture again.
    pub last_scroll_y: f64,
}

impl<N> TouchSession<N> {
    pub fn idle() -> Self {
        Self {
            active: false,
            confirmed: false,
            start_y: 0.0,
            start_time: 0.0,
            target: None,
            last_scroll_y: 0.0,
        }
    }

    pub fn begin(y: f64, now_ms: f64, scroll_y: f64, target: Option<N>) -> Self {
        Self {
            active: true,
            confirmed: false,
            start_y: y,
            start_time: now_ms,
            target,
            last_scroll_y: scroll_y,
        }
    }
}

impl<N> Default for TouchSession<N> {
    fn default() -> Self {
        Self::idle()
    }
}
