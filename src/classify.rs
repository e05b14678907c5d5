//! Exclusion checks over the touch target's ancestry.
//!
//! Both predicates are read-only, total and short-circuit on the first
//! match. A missing node is simply "no exclusion detected".

use crate::config::SCROLL_EPSILON_PX;
use crate::surface::SurfaceNode;

/// True if the touch landed inside a horizontal-scroll context: an element
/// (the target itself or any ancestor) that declares horizontal-only pan
/// intent, actually overflows horizontally with a scrolling overflow
/// policy, or carries a carousel marker. Such a touch belongs to the
/// carousel, not the page.
pub fn in_horizontal_scroll_context<N: SurfaceNode>(node: Option<&N>) -> bool {
    let mut cur = node.cloned();
    while let Some(n) = cur {
        if n.restricts_vertical_pan() {
            return true;
        }
        if n.allows_horizontal_overflow()
            && n.scroll_width() > n.client_width() + SCROLL_EPSILON_PX
        {
            return true;
        }
        if n.has_carousel_marker() {
            return true;
        }
        cur = n.parent();
    }
    false
}

/// True if a strict ancestor of the target is vertically scrollable and not
/// at its own top. An inner region that has been scrolled down will consume
/// the downward drag itself; one still at its top should not block a
/// page-level pull, so the target itself is never inspected here.
pub fn in_scrolled_container<N: SurfaceNode>(node: Option<&N>) -> bool {
    let mut cur = node.and_then(SurfaceNode::parent);
    while let Some(n) = cur {
        if n.scroll_height() > n.client_height() + SCROLL_EPSILON_PX && n.scroll_top() > 0.0 {
            return true;
        }
        cur = n.parent();
    }
    false
}
