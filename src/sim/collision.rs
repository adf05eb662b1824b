//! Ball vs. rectangle collision detection and response
//!
//! Obstacles are axis-aligned rectangles taken from the page layout each frame.
//! The ball is pushed out along the normal from the closest point on the
//! rectangle, and its velocity is reflected with damping if it is moving in.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Ball;
use crate::consts::*;

/// An axis-aligned rectangle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Obstacle {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle from its top-left corner and size
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, origin.x + size.x, origin.y + size.y)
    }

    /// Closest point on (or in) the rectangle to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.min(self.right).max(self.left),
            p.y.min(self.bottom).max(self.top),
        )
    }
}

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the rectangle
    pub point: Vec2,
    /// Unit normal from the rectangle toward the ball center.
    /// Zero when the center lies inside the rectangle.
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check a circle against a rectangle
pub fn ball_rect_collision(center: Vec2, radius: f32, rect: &Obstacle) -> CollisionResult {
    let closest = rect.closest_point(center);
    let delta = center - closest;
    let distance = delta.length();

    if distance >= radius {
        return CollisionResult::miss();
    }

    // A center inside the rectangle has no usable direction; report the hit
    // with a zero normal so the response does nothing.
    let normal = if distance > 0.0 {
        delta / distance
    } else {
        Vec2::ZERO
    };

    CollisionResult {
        hit: true,
        point: closest,
        normal,
        penetration: radius - distance,
    }
}

/// Push a ball out of an obstacle and reflect its velocity with damping.
///
/// Returns true if the ball overlapped the obstacle.
pub fn resolve_obstacle(ball: &mut Ball, rect: &Obstacle) -> bool {
    let result = ball_rect_collision(ball.center(), BALL_RADIUS, rect);
    if !result.hit {
        return false;
    }

    let n = result.normal;
    ball.pos += n * result.penetration;

    // Only when moving into the surface
    let v_dot_n = ball.vel.dot(n);
    if v_dot_n < 0.0 {
        ball.vel -= (1.0 + DAMPING) * v_dot_n * n;
    }

    true
}

/// Resolve every ball against every obstacle, obstacles in list order, once each.
///
/// Returns the number of ball/obstacle overlaps.
pub fn resolve_obstacles(balls: &mut [Ball], obstacles: &[Obstacle]) -> usize {
    let mut hits = 0;
    for ball in balls.iter_mut() {
        for rect in obstacles {
            if resolve_obstacle(ball, rect) {
                hits += 1;
            }
        }
    }
    hits
}
