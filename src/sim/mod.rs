//! Frame-stepped simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - One step per frame, no elapsed-time scaling
//! - Seeded RNG only
//! - Stable iteration order (insertion order of balls)
//! - No rendering or platform dependencies

pub mod collision;
pub mod integrate;
pub mod pairs;
pub mod state;
pub mod tick;

pub use collision::{
    CollisionResult, Obstacle, ball_rect_collision, resolve_obstacle, resolve_obstacles,
};
pub use integrate::{integrate, integrate_ball};
pub use pairs::{PairContact, resolve_pair, resolve_pairs};
pub use state::{Ball, SimState, Viewport};
pub use tick::{FrameStats, tick};
