//! Layout/style capability of a surface tree node.
//!
//! The classifiers and the tracker only ever look at nodes through this
//! trait, so the whole recognizer runs against a fake tree in tests and
//! against `web_sys::Element` in the browser (see `dom`).

/// A node in the touch surface's tree, with just enough layout and style
/// visibility for the exclusion checks. Every method must be total: a
/// detached or exotic node answers with the neutral value, never an error.
pub trait SurfaceNode: Clone {
    /// Parent node, or `None` at the walk boundary.
    fn parent(&self) -> Option<Self>;

    /// Declared touch policy allows horizontal panning but not vertical
    /// (e.g. `touch-action: pan-x`).
    fn restricts_vertical_pan(&self) -> bool;

    /// Overflow policy permits horizontal scrolling (`auto`/`scroll`).
    fn allows_horizontal_overflow(&self) -> bool;

    /// Explicitly marked as a carousel/slider, by attribute or by a known
    /// library class.
    fn has_carousel_marker(&self) -> bool;

    fn scroll_width(&self) -> f64;
    fn client_width(&self) -> f64;
    fn scroll_height(&self) -> f64;
    fn client_height(&self) -> f64;
    fn scroll_top(&self) -> f64;
}
