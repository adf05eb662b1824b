//! Publishing ball positions once per frame
//!
//! Renderers see a borrowed snapshot after the physics pass completes. They
//! never mutate simulation state.

pub mod instance;
pub mod json;

pub use instance::{BallInstance, InstanceBuffer};
pub use json::JsonLinesRenderer;

use glam::Vec2;

use crate::consts::BALL_DIAMETER;
use crate::sim::{Ball, FrameStats, SimState};

/// Read-only view of one finished frame
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot<'a> {
    pub stats: FrameStats,
    /// Spawn counter at the end of the frame
    pub spawned: u32,
    balls: &'a [Ball],
}

impl<'a> FrameSnapshot<'a> {
    /// Every ball is drawn as a circle of this diameter
    pub const DIAMETER: f32 = BALL_DIAMETER;

    pub fn new(state: &'a SimState, stats: FrameStats) -> Self {
        Self {
            stats,
            spawned: state.spawned(),
            balls: state.balls(),
        }
    }

    pub fn frame(&self) -> u64 {
        self.stats.frame
    }

    /// Top-left positions in insertion order. Can be iterated any number of times.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec2> + Clone + 'a {
        self.balls.iter().map(|b| b.pos)
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }
}

/// Consumer of finished frames
pub trait Renderer {
    fn present(&mut self, frame: &FrameSnapshot<'_>) -> anyhow::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn present(&mut self, frame: &FrameSnapshot<'_>) -> anyhow::Result<()> {
        (**self).present(frame)
    }
}
