//! One simulation frame
//!
//! Integration, obstacle collisions and pairwise collisions, in that order,
//! each run to completion over every ball before the next starts.

use serde::Serialize;

use super::collision::resolve_obstacles;
use super::integrate::integrate;
use super::pairs::resolve_pairs;
use super::state::SimState;
use crate::layout::Layout;

/// Counters from a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameStats {
    /// Frame number after this step (1 for the first frame)
    pub frame: u64,
    pub balls: usize,
    /// Balls clamped to the floor
    pub grounded: usize,
    /// Ball/obstacle overlaps resolved
    pub obstacle_hits: usize,
    /// Ball/ball overlaps resolved
    pub ball_contacts: usize,
}

/// Advance the simulation by one frame using this frame's layout
pub fn tick(state: &mut SimState, layout: &Layout) -> FrameStats {
    if state.viewport != layout.viewport {
        log::debug!(
            "Viewport changed: {}x{} -> {}x{}",
            state.viewport.width,
            state.viewport.height,
            layout.viewport.width,
            layout.viewport.height
        );
        state.viewport = layout.viewport;
    }

    state.frame += 1;
    let frame = state.frame;
    let viewport = state.viewport;

    let balls = state.balls_mut();
    let grounded = integrate(balls, viewport);
    let obstacle_hits = resolve_obstacles(balls, &layout.obstacles);
    let ball_contacts = resolve_pairs(balls);

    let stats = FrameStats {
        frame,
        balls: balls.len(),
        grounded,
        obstacle_hits,
        ball_contacts,
    };
    log::trace!("{:?}", stats);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Obstacle, Viewport};
    use glam::Vec2;

    fn open_layout() -> Layout {
        Layout::new(Viewport::new(800.0, 600.0), Vec::new())
    }

    #[test]
    fn test_tick_first_frame() {
        let layout = open_layout();
        let mut state = SimState::new(1, layout.viewport);
        state.spawn_at(Vec2::new(100.0, 0.0));

        let stats = tick(&mut state, &layout);

        assert_eq!(stats.frame, 1);
        assert_eq!(stats.balls, 1);
        assert_eq!(stats.grounded, 0);
        let ball = state.balls()[0];
        assert_eq!(ball.pos, Vec2::new(100.0, 0.5));
        assert_eq!(ball.vel, Vec2::new(0.0, 0.5));
    }

    #[test]
    fn test_tick_empty_state() {
        let layout = open_layout();
        let mut state = SimState::new(1, layout.viewport);
        let stats = tick(&mut state, &layout);
        let expected = FrameStats {
            frame: 1,
            ..Default::default()
        };
        assert_eq!(stats, expected);
    }

    #[test]
    fn test_tick_picks_up_resize() {
        let mut state = SimState::new(1, Viewport::new(800.0, 600.0));
        state.spawn_at(Vec2::new(700.0, 0.0));

        let narrow = Layout::new(Viewport::new(400.0, 600.0), Vec::new());
        tick(&mut state, &narrow);

        assert_eq!(state.viewport, narrow.viewport);
        assert_eq!(state.balls()[0].pos.x, 380.0);
    }

    #[test]
    fn test_ball_lands_on_obstacle() {
        let obstacle = Obstacle::new(50.0, 300.0, 250.0, 340.0);
        let layout = Layout::new(Viewport::new(800.0, 600.0), vec![obstacle]);
        let mut state = SimState::new(1, layout.viewport);
        state.spawn_at(Vec2::new(140.0, 0.0));

        for _ in 0..600 {
            tick(&mut state, &layout);
        }

        // Settles on top of the obstacle instead of the floor
        let ball = state.balls()[0];
        assert!(ball.center().y < obstacle.top);
        assert!(ball.center().y > obstacle.top - 12.0);
        assert!(ball.vel.length() < 1.0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let layout = Layout::new(
            Viewport::new(320.0, 240.0),
            vec![Obstacle::new(100.0, 150.0, 220.0, 180.0)],
        );
        let mut state1 = SimState::new(99999, layout.viewport);
        let mut state2 = SimState::new(99999, layout.viewport);

        for frame in 0..300 {
            if frame % 7 == 0 {
                state1.spawn();
                state2.spawn();
            }
            let s1 = tick(&mut state1, &layout);
            let s2 = tick(&mut state2, &layout);
            assert_eq!(s1, s2);
        }

        assert_eq!(state1.frame, 300);
        assert_eq!(state1.balls(), state2.balls());
    }
}
