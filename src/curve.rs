//! Rubber-band response curve.

use crate::config::{RESISTANCE, RESPONSE_EXPONENT};

/// Maps raw overscroll distance to the damped visual offset. Sub-linear, so
/// the further the user pulls the less each pixel moves the content.
pub fn visual_offset(pull_distance: f64) -> f64 {
    if pull_distance <= 0.0 {
        0.0
    } else {
        pull_distance.powf(RESPONSE_EXPONENT) * RESISTANCE
    }
}
