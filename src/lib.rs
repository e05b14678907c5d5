//! Pull-to-refresh gesture recognition for Yew apps installed to the home
//! screen. Native browser chrome already handles pull-to-refresh in a tab,
//! so the recognizer only arms itself in standalone display mode.
//!
//! The core (`tracker`, `classify`, `curve`) is generic over [`SurfaceNode`]
//! and takes coordinates, timestamps and scroll offsets as plain values, so
//! it runs under `cargo test` with no browser. `dom` and `hook` bind it to
//! `web_sys` and Yew.

pub mod classify;
pub mod config;
pub mod curve;
pub mod dom;
pub mod hook;
pub mod state;
pub mod surface;
pub mod tracker;
pub mod util;

#[cfg(test)]
mod test_surface;

#[cfg(test)]
mod tracker_tests;

pub use hook::{PullToRefreshOptions, use_pull_to_refresh};
pub use state::PullToRefreshState;
pub use surface::SurfaceNode;
