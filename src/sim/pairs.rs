//! Ball vs. ball collision resolution
//!
//! Every unordered pair is visited once per frame, `i < j` in insertion order,
//! against positions as already modified by earlier pairs in the same pass.
//! Overlapping balls are pushed apart symmetrically until `GAP` pixels separate
//! their surfaces, and closing balls exchange an equal and opposite impulse.

use glam::Vec2;

use super::state::Ball;
use crate::consts::*;

/// What happened to one overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairContact {
    /// Unit vector from the first ball toward the second
    pub normal: Vec2,
    /// Distance the pair was pushed apart (split evenly)
    pub overlap: f32,
    /// Signed impulse along the normal, 0 if the balls were separating
    pub impulse: f32,
}

/// Resolve one pair. `a` is the earlier ball in insertion order.
///
/// Returns `None` if the balls are far enough apart or their centers coincide.
pub fn resolve_pair(a: &mut Ball, b: &mut Ball) -> Option<PairContact> {
    let delta = b.pos - a.pos;
    let dist = delta.length();

    // Coincident centers have no normal; such a pair never separates.
    if !(dist > 0.0 && dist < MIN_BALL_DISTANCE) {
        return None;
    }

    let overlap = MIN_BALL_DISTANCE - dist;
    let normal = delta / dist;

    let push = normal * overlap / 2.0;
    a.pos -= push;
    b.pos += push;

    let closing = (b.vel - a.vel).dot(normal);
    let impulse = if closing < 0.0 {
        let impulse = closing * DAMPING;
        a.vel += normal * impulse;
        b.vel -= normal * impulse;
        impulse
    } else {
        0.0
    };

    Some(PairContact {
        normal,
        overlap,
        impulse,
    })
}

/// Single pass over all pairs. Returns the number of overlapping pairs.
pub fn resolve_pairs(balls: &mut [Ball]) -> usize {
    let n = balls.len();
    let mut contacts = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = balls.split_at_mut(j);
            if resolve_pair(&mut head[i], &mut tail[0]).is_some() {
                contacts += 1;
            }
        }
    }
    contacts
}
