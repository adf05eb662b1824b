//! Per-frame layout: viewport size and obstacle rectangles
//!
//! The page decides where its controls sit; the simulation only reads the
//! resulting rectangles. Layout is fetched fresh every frame so resizes and
//! moved controls take effect immediately.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Obstacle, Viewport};

/// Everything the simulation needs from the page for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub viewport: Viewport,
    /// Checked in this order
    pub obstacles: Vec<Obstacle>,
}

impl Layout {
    pub fn new(viewport: Viewport, obstacles: Vec<Obstacle>) -> Self {
        Self {
            viewport,
            obstacles,
        }
    }
}

/// Source of the layout, queried once per frame
pub trait LayoutProvider {
    fn layout(&mut self) -> Layout;
}

impl<P: LayoutProvider + ?Sized> LayoutProvider for Box<P> {
    fn layout(&mut self) -> Layout {
        (**self).layout()
    }
}

/// A layout that never changes
#[derive(Debug, Clone)]
pub struct FixedLayout(pub Layout);

impl LayoutProvider for FixedLayout {
    fn layout(&mut self) -> Layout {
        self.0.clone()
    }
}

/// Default control surface (spawn button) size
pub const BUTTON_SIZE: Vec2 = Vec2::new(120.0, 40.0);
/// Default readout surface (spawn counter) size
pub const READOUT_SIZE: Vec2 = Vec2::new(80.0, 48.0);
/// Vertical space between the readout and the button
pub const CONTROL_SPACING: f32 = 16.0;

/// Counter readout stacked above a spawn button, centered in the viewport
#[derive(Debug, Clone)]
pub struct CenteredControls {
    pub viewport: Viewport,
    pub button_size: Vec2,
    pub readout_size: Vec2,
    pub spacing: f32,
}

impl CenteredControls {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            button_size: BUTTON_SIZE,
            readout_size: READOUT_SIZE,
            spacing: CONTROL_SPACING,
        }
    }

    /// Window resized
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn stack_top(&self) -> f32 {
        let stack_height = self.readout_size.y + self.spacing + self.button_size.y;
        (self.viewport.height - stack_height) / 2.0
    }

    /// The spawn button's bounds
    pub fn button_rect(&self) -> Obstacle {
        let top = self.stack_top() + self.readout_size.y + self.spacing;
        let left = (self.viewport.width - self.button_size.x) / 2.0;
        Obstacle::from_origin_size(Vec2::new(left, top), self.button_size)
    }

    /// The counter readout's bounds
    pub fn readout_rect(&self) -> Obstacle {
        let left = (self.viewport.width - self.readout_size.x) / 2.0;
        Obstacle::from_origin_size(Vec2::new(left, self.stack_top()), self.readout_size)
    }
}

impl LayoutProvider for CenteredControls {
    fn layout(&mut self) -> Layout {
        Layout::new(self.viewport, vec![self.button_rect(), self.readout_rect()])
    }
}
