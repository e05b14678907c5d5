//! Bindings between the host-agnostic core and the real DOM.
//!
//! Every accessor here degrades to the neutral value on failure: a node
//! that cannot be inspected is treated as "no exclusion detected", a
//! viewport that cannot be queried reports scroll 0.

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::config::{CAROUSEL_ATTRIBUTE, CAROUSEL_CLASSES};
use crate::surface::SurfaceNode;

/// A live DOM element viewed through the [`SurfaceNode`] capability.
#[derive(Clone, Debug)]
pub struct DomNode {
    element: Element,
}

impl DomNode {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    fn computed_property(&self, name: &str) -> String {
        web_sys::window()
            .and_then(|w| w.get_computed_style(&self.element).ok().flatten())
            .and_then(|style| style.get_property_value(name).ok())
            .unwrap_or_default()
    }
}

impl SurfaceNode for DomNode {
    /// Walks stop at `<body>`/`<html>`: the page-level scroller is handled
    /// by the scroll-excursion rule, not the container exclusion.
    fn parent(&self) -> Option<Self> {
        let parent = self.element.parent_element()?;
        match parent.tag_name().as_str() {
            "BODY" | "HTML" => None,
            _ => Some(Self::new(parent)),
        }
    }

    fn restricts_vertical_pan(&self) -> bool {
        let value = self.computed_property("touch-action");
        if value.is_empty() {
            return false;
        }
        let mut pan_x = false;
        for token in value.split_whitespace() {
            match token {
                "pan-x" | "pan-left" | "pan-right" => pan_x = true,
                "auto" | "manipulation" | "pan-y" | "pan-up" | "pan-down" => return false,
                _ => {}
            }
        }
        pan_x
    }

    fn allows_horizontal_overflow(&self) -> bool {
        matches!(self.computed_property("overflow-x").as_str(), "auto" | "scroll")
    }

    fn has_carousel_marker(&self) -> bool {
        if self.element.has_attribute(CAROUSEL_ATTRIBUTE) {
            return true;
        }
        let classes = self.element.class_list();
        CAROUSEL_CLASSES.iter().any(|c| classes.contains(c))
    }

    fn scroll_width(&self) -> f64 {
        f64::from(self.element.scroll_width())
    }

    fn client_width(&self) -> f64 {
        f64::from(self.element.client_width())
    }

    fn scroll_height(&self) -> f64 {
        f64::from(self.element.scroll_height())
    }

    fn client_height(&self) -> f64 {
        f64::from(self.element.client_height())
    }

    fn scroll_top(&self) -> f64 {
        f64::from(self.element.scroll_top())
    }
}

/// Current vertical page scroll offset.
pub fn page_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Monotonic-ish clock for activation-delay timing.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Whether the surface runs without browser chrome: the standalone
/// display-mode media query, or the legacy `navigator.standalone` flag on
/// iOS home-screen apps.
pub fn standalone_display_mode() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    if window
        .match_media("(display-mode: standalone)")
        .ok()
        .flatten()
        .is_some_and(|q| q.matches())
    {
        return true;
    }
    let navigator = JsValue::from(window.navigator());
    js_sys::Reflect::get(&navigator, &JsValue::from_str("standalone"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// The terminal side effect: return to the top and reload. Fire-and-forget;
/// if the embedder intercepts it there is nothing to retry.
pub fn reload_application() {
    let Some(window) = web_sys::window() else {
        return;
    };
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let _ = window.location().reload();
}
