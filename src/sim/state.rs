//! Simulation state and core types
//!
//! The ball store is append-only: balls are spawned, stepped every frame and
//! never removed. Iteration order is insertion order.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Visible area balls are confined to (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest `x` a ball may have before hitting the right edge
    #[inline]
    pub fn right_limit(&self) -> f32 {
        self.width - BALL_DIAMETER
    }

    /// `y` of a ball resting on the floor
    #[inline]
    pub fn floor_limit(&self) -> f32 {
        self.height - BALL_DIAMETER
    }
}

/// A ball entity
///
/// `pos` is the top-left corner of the ball's bounding square, which is what
/// renderers draw at. The radius is shared by every ball (`BALL_RADIUS`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// A ball at rest at the given position
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    pub fn with_velocity(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(BALL_RADIUS)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Frames stepped so far
    pub frame: u64,
    /// Viewport seen on the most recent frame (spawns use its width)
    pub viewport: Viewport,
    /// Spawn position RNG
    rng: Pcg32,
    /// Balls in insertion order
    balls: Vec<Ball>,
    /// Number of spawn requests handled
    spawned: u32,
}

impl SimState {
    /// Create an empty simulation with the given seed
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self {
            seed,
            frame: 0,
            viewport,
            rng: Pcg32::seed_from_u64(seed),
            balls: Vec::new(),
            spawned: 0,
        }
    }

    /// Spawn a ball at a random `x` along the top edge, at rest.
    ///
    /// Returns the new ball's index.
    pub fn spawn(&mut self) -> usize {
        let span = self.viewport.right_limit();
        if span < 0.0 {
            log::warn!(
                "Viewport width {} is narrower than a ball, spawning at negative x",
                self.viewport.width
            );
        }
        let x = self.rng.random::<f32>() * span;
        self.spawn_at(Vec2::new(x, 0.0))
    }

    /// Spawn a ball at rest at an explicit position. Returns its index.
    pub fn spawn_at(&mut self, pos: Vec2) -> usize {
        let index = self.balls.len();
        self.balls.push(Ball::new(pos));
        self.spawned += 1;
        log::debug!("Spawned ball {} at ({:.1}, {:.1})", index, pos.x, pos.y);
        index
    }

    /// Balls in insertion order
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub(crate) fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    /// Positions in insertion order. Cheap to clone and restart.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec2> + Clone + '_ {
        self.balls.iter().map(|b| b.pos)
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Spawn counter (what the page's counter readout shows)
    pub fn spawned(&self) -> u32 {
        self.spawned
    }
}
