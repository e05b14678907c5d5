//! Gesture policy constants.
//!
//! These values are a perceptual contract, not tuning knobs: the dead zone,
//! threshold and response curve together define how the pull "feels", and
//! the reload grace period is matched to the CSS return transition. Change
//! them here or nowhere.

/// Minimum time a downward drag must persist, at scroll-top, before it is
/// classified as overscroll rather than the start of an ordinary scroll.
pub const ACTIVATION_DELAY_MS: f64 = 50.0;

/// Pixels of initial movement ignored before any visual feedback begins.
/// Finger jitter on touch screens routinely produces drags of a few px.
pub const DEAD_ZONE_PX: f64 = 20.0;

/// Post-dead-zone distance required before release triggers a refresh.
pub const PULL_THRESHOLD_PX: f64 = 220.0;

/// Multiplier of the response curve.
pub const RESISTANCE: f64 = 0.4;

/// Sub-linear exponent of the response curve. Values below 1.0 make each
/// additional pixel of pull move the content less than the previous one.
pub const RESPONSE_EXPONENT: f64 = 0.6;

/// Delay between committing a refresh and firing the reload, matching the
/// 350ms return transition on the content so the rubber band is visually
/// released before the page unloads.
pub const RELOAD_GRACE_MS: i32 = 350;

/// Slack for the scrollable-geometry comparisons. Browsers report scroll
/// metrics as rounded integers, so an exact `>` would misclassify
/// containers that overflow by a fractional pixel.
pub const SCROLL_EPSILON_PX: f64 = 1.0;

/// Attribute that explicitly marks an element as a horizontal carousel.
pub const CAROUSEL_ATTRIBUTE: &str = "data-carousel";

/// Class tokens of the carousel/slider libraries seen in the wild. Matched
/// as exact `classList` tokens, not substrings.
pub const CAROUSEL_CLASSES: &[&str] = &[
    "carousel",
    "swiper",
    "slider",
    "slick-slider",
    "splide",
    "glide",
    "flickity",
];
