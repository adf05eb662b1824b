//! Per-frame integration and viewport bounds
//!
//! Gravity is a constant per-frame velocity increment, so trajectories depend
//! on how many frames run, not on wall-clock time.

use super::state::{Ball, Viewport};
use crate::consts::*;

/// Advance one ball by a frame and keep it inside the viewport.
///
/// Returns true if the ball was clamped to the floor this frame.
pub fn integrate_ball(ball: &mut Ball, viewport: Viewport) -> bool {
    ball.vel.y += GRAVITY;
    ball.pos += ball.vel;

    // Side walls
    if ball.pos.x < 0.0 {
        ball.pos.x = 0.0;
        ball.vel.x = -ball.vel.x * DAMPING;
    }
    let right = viewport.right_limit();
    if ball.pos.x > right {
        ball.pos.x = right;
        ball.vel.x = -ball.vel.x * DAMPING;
    }

    // Floor: stop falling, keep upward motion, bleed off sideways speed
    let floor = viewport.floor_limit();
    if ball.pos.y > floor {
        ball.pos.y = floor;
        if ball.vel.y > 0.0 {
            ball.vel.y = 0.0;
        }
        ball.vel.x *= FRICTION;
        if ball.vel.x.abs() < SLEEP_THRESHOLD {
            ball.vel.x = 0.0;
        }
        return true;
    }

    false
}

/// Integrate every ball. Returns how many are on the floor.
pub fn integrate(balls: &mut [Ball], viewport: Viewport) -> usize {
    balls
        .iter_mut()
        .map(|ball| integrate_ball(ball, viewport))
        .filter(|&grounded| grounded)
        .count()
}
