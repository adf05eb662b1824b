//! Ball Drop - falling, colliding balls in a browser-sized viewport
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (integration, obstacle and ball collisions)
//! - `layout`: Viewport and obstacle rectangles supplied each frame
//! - `renderer`: Per-frame position publishing
//! - `driver`: Frame driver tying layout, simulation and renderer together
//! - `settings`: Headless runner configuration

pub mod driver;
pub mod layout;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::FrameDriver;
pub use layout::{CenteredControls, FixedLayout, Layout, LayoutProvider};
pub use renderer::{FrameSnapshot, Renderer};
pub use settings::{OutputMode, Settings};

/// Simulation constants (fixed, not runtime-configurable)
pub mod consts {
    /// Downward velocity added every frame (px/frame²). Not scaled by elapsed time.
    pub const GRAVITY: f32 = 0.5;

    /// Ball size
    pub const BALL_DIAMETER: f32 = 20.0;
    pub const BALL_RADIUS: f32 = BALL_DIAMETER / 2.0;

    /// Space kept between two touching balls
    pub const GAP: f32 = 4.0;
    /// Minimum center distance between two balls
    pub const MIN_BALL_DISTANCE: f32 = BALL_DIAMETER + GAP;

    /// Velocity kept after a wall bounce or collision impulse
    pub const DAMPING: f32 = 0.8;
    /// Horizontal velocity kept per frame while on the floor
    pub const FRICTION: f32 = 0.98;
    /// Horizontal speed below which a resting ball stops
    pub const SLEEP_THRESHOLD: f32 = 0.01;
}
