//! Frame driver
//!
//! Stands in for the display-refresh callback: each call to [`FrameDriver::frame`]
//! fetches a fresh layout, runs one full physics step and hands the result to
//! the renderer. Nothing runs between frames and nothing runs concurrently.

use std::time::{Duration, Instant};

use crate::layout::LayoutProvider;
use crate::renderer::{FrameSnapshot, Renderer};
use crate::sim::{FrameStats, SimState, tick};

/// One refresh at 60 Hz
pub const DEFAULT_FRAME_BUDGET: Duration = Duration::from_micros(16_667);

/// Owns the simulation and drives it one frame at a time
pub struct FrameDriver<L, R> {
    state: SimState,
    layout: L,
    renderer: R,
    frame_budget: Option<Duration>,
}

impl<L: LayoutProvider, R: Renderer> FrameDriver<L, R> {
    pub fn new(state: SimState, layout: L, renderer: R) -> Self {
        Self {
            state,
            layout,
            renderer,
            frame_budget: Some(DEFAULT_FRAME_BUDGET),
        }
    }

    /// Warn when a frame takes longer than `budget`. `None` disables the check.
    pub fn with_frame_budget(mut self, budget: Option<Duration>) -> Self {
        self.frame_budget = budget;
        self
    }

    /// Spawn trigger (one click)
    pub fn spawn(&mut self) -> usize {
        self.state.spawn()
    }

    /// Run one frame: layout, physics, publish
    pub fn frame(&mut self) -> anyhow::Result<FrameStats> {
        let start = Instant::now();

        let layout = self.layout.layout();
        let stats = tick(&mut self.state, &layout);
        self.renderer
            .present(&FrameSnapshot::new(&self.state, stats))?;

        if let Some(budget) = self.frame_budget {
            let elapsed = start.elapsed();
            if elapsed > budget {
                log::warn!(
                    "Frame {} with {} balls took {:.2} ms (budget {:.2} ms)",
                    stats.frame,
                    stats.balls,
                    elapsed.as_secs_f32() * 1000.0,
                    budget.as_secs_f32() * 1000.0
                );
            }
        }

        Ok(stats)
    }

    /// Run `frames` frames back to back. Returns the last frame's stats.
    pub fn run(&mut self, frames: u64) -> anyhow::Result<FrameStats> {
        let mut last = FrameStats {
            frame: self.state.frame,
            balls: self.state.len(),
            ..Default::default()
        };
        for _ in 0..frames {
            last = self.frame()?;
        }
        Ok(last)
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn into_parts(self) -> (SimState, L, R) {
        (self.state, self.layout, self.renderer)
    }
}
