//! JSON-lines position stream, one line per frame

use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use super::{FrameSnapshot, Renderer};
use crate::sim::FrameStats;

#[derive(Serialize)]
struct FrameLine {
    frame: u64,
    spawned: u32,
    diameter: f32,
    positions: Vec<[f32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<FrameStats>,
}

/// Writes `{"frame":..,"spawned":..,"diameter":..,"positions":[[x,y],..]}` per frame
pub struct JsonLinesRenderer<W: Write> {
    out: W,
    with_stats: bool,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            with_stats: false,
        }
    }

    /// Also emit per-frame collision counters
    pub fn with_stats(mut self, enabled: bool) -> Self {
        self.with_stats = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn present(&mut self, frame: &FrameSnapshot<'_>) -> anyhow::Result<()> {
        let line = FrameLine {
            frame: frame.frame(),
            spawned: frame.spawned,
            diameter: FrameSnapshot::DIAMETER,
            positions: frame.positions().map(|p| p.to_array()).collect(),
            stats: self.with_stats.then_some(frame.stats),
        };
        serde_json::to_writer(&mut self.out, &line)
            .with_context(|| format!("failed to write frame {}", line.frame))?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimState, Viewport};
    use glam::Vec2;

    #[test]
    fn test_writes_one_line_per_frame() {
        let mut state = SimState::new(3, Viewport::new(200.0, 200.0));
        state.spawn_at(Vec2::new(10.0, 20.5));

        let mut renderer = JsonLinesRenderer::new(Vec::new());
        let stats = FrameStats {
            frame: 1,
            balls: 1,
            ..Default::default()
        };
        let snapshot = FrameSnapshot::new(&state, stats);
        renderer.present(&snapshot).unwrap();
        renderer.present(&snapshot).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["frame"], 1);
        assert_eq!(value["spawned"], 1);
        assert_eq!(value["positions"][0][1], 20.5);
        assert!(value.get("stats").is_none());
    }

    #[test]
    fn test_stats_are_optional() {
        let state = SimState::new(3, Viewport::new(200.0, 200.0));
        let mut renderer = JsonLinesRenderer::new(Vec::new()).with_stats(true);
        let stats = FrameStats {
            frame: 9,
            ball_contacts: 2,
            ..Default::default()
        };
        let snapshot = FrameSnapshot::new(&state, stats);
        renderer.present(&snapshot).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["stats"]["ball_contacts"], 2);
        assert_eq!(value["positions"].as_array().unwrap().len(), 0);
    }
}
