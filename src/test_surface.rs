//! In-memory surface tree for exercising the core without a browser.

use std::rc::Rc;

use crate::surface::SurfaceNode;

#[derive(Debug)]
pub struct FakeNodeData {
    pub parent: Option<FakeNode>,
    pub pan_x_only: bool,
    pub overflow_x_scroll: bool,
    pub carousel: bool,
    pub scroll_width: f64,
    pub client_width: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    pub scroll_top: f64,
}

impl Default for FakeNodeData {
    fn default() -> Self {
        // A phone-sized block element that fits its content exactly.
        Self {
            parent: None,
            pan_x_only: false,
            overflow_x_scroll: false,
            carousel: false,
            scroll_width: 360.0,
            client_width: 360.0,
            scroll_height: 640.0,
            client_height: 640.0,
            scroll_top: 0.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FakeNode(Rc<FakeNodeData>);

impl FakeNode {
    pub fn new(data: FakeNodeData) -> Self {
        Self(Rc::new(data))
    }

    /// A plain `<div>` with no parent and nothing remarkable about it.
    pub fn plain() -> Self {
        Self::new(FakeNodeData::default())
    }

    pub fn plain_under(parent: &Self) -> Self {
        Self::new(FakeNodeData {
            parent: Some(parent.clone()),
            ..Default::default()
        })
    }
}

impl SurfaceNode for FakeNode {
    fn parent(&self) -> Option<Self> {
        self.0.parent.clone()
    }

    fn restricts_vertical_pan(&self) -> bool {
        self.0.pan_x_only
    }

    fn allows_horizontal_overflow(&self) -> bool {
        self.0.overflow_x_scroll
    }

    fn has_carousel_marker(&self) -> bool {
        self.0.carousel
    }

    fn scroll_width(&self) -> f64 {
        self.0.scroll_width
    }

    fn client_width(&self) -> f64 {
        self.0.client_width
    }

    fn scroll_height(&self) -> f64 {
        self.0.scroll_height
    }

    fn client_height(&self) -> f64 {
        self.0.client_height
    }

    fn scroll_top(&self) -> f64 {
        self.0.scroll_top
    }
}
