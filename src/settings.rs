//! Headless runner settings
//!
//! Read from a JSON file; any field left out keeps its default. Physics
//! constants live in `consts` and are deliberately not configurable here.

use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::sim::{Obstacle, Viewport};

/// What the runner prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// One JSON line of positions per frame on stdout
    JsonLines,
    /// Only a final summary in the log
    #[default]
    Summary,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::JsonLines => "json_lines",
            OutputMode::Summary => "summary",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json_lines" | "jsonl" | "json" => Some(OutputMode::JsonLines),
            "summary" => Some(OutputMode::Summary),
            _ => None,
        }
    }
}

/// Runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for spawn positions
    pub seed: u64,
    /// Viewport size in pixels
    pub viewport: Viewport,
    /// Frames to simulate
    pub frames: u64,

    // === Simulated clicks ===
    /// Frames between spawns
    pub spawn_every: u64,
    /// Total spawns before clicking stops
    pub max_spawns: u32,

    /// Fixed obstacle rectangles. When absent, a centered button and counter
    /// readout are laid out from the viewport.
    pub obstacles: Option<Vec<Obstacle>>,

    pub output: OutputMode,
    /// Include per-frame collision counters in JSON lines
    pub frame_stats: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::new(800.0, 600.0),
            frames: 600,
            spawn_every: 10,
            max_spawns: 40,
            obstacles: None,
            output: OutputMode::Summary,
            frame_stats: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text and validate them
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let settings: Settings = serde_json::from_str(json).context("invalid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("in settings file {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the runner cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        let Viewport { width, height } = self.viewport;
        let positive = width > 0.0 && height > 0.0;
        if !(positive && width.is_finite() && height.is_finite()) {
            bail!("invalid viewport size {width}x{height}");
        }
        if self.spawn_every == 0 {
            bail!("spawn_every must be at least 1");
        }
        if let Some(obstacles) = &self.obstacles {
            for (i, rect) in obstacles.iter().enumerate() {
                let bounds = [rect.left, rect.top, rect.right, rect.bottom];
                if bounds.iter().any(|v| !v.is_finite()) {
                    bail!("obstacle {i} has non-finite bounds: {rect:?}");
                }
                if rect.right < rect.left || rect.bottom < rect.top {
                    bail!("obstacle {i} has inverted bounds: {rect:?}");
                }
            }
        }
        Ok(())
    }

    /// Whether a simulated click lands before frame `frame` (0-based)
    pub fn spawns_before(&self, frame: u64, spawned: u32) -> bool {
        spawned < self.max_spawns && frame.is_multiple_of(self.spawn_every)
    }

    /// Fixed layout if obstacles were given explicitly
    pub fn fixed_layout(&self) -> Option<Layout> {
        self.obstacles
            .as_ref()
            .map(|obstacles| Layout::new(self.viewport, obstacles.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(settings.fixed_layout().is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "output": "json_lines" }"#).unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.output, OutputMode::JsonLines);
        assert_eq!(settings.frames, 600);
        assert_eq!(settings.viewport, Viewport::new(800.0, 600.0));
    }

    #[test]
    fn test_explicit_obstacles() {
        let settings = Settings::from_json(
            r#"{
                "viewport": { "width": 320, "height": 240 },
                "obstacles": [{ "left": 10, "top": 20, "right": 30, "bottom": 40 }]
            }"#,
        )
        .unwrap();
        let layout = settings.fixed_layout().unwrap();
        assert_eq!(layout.viewport, Viewport::new(320.0, 240.0));
        let expected = vec![Obstacle::new(10.0, 20.0, 30.0, 40.0)];
        assert_eq!(layout.obstacles, expected);
    }

    #[test]
    fn test_rejects_bad_values() {
        // 1e39 overflows f32 and parses as infinity
        let bad = [
            r#"{ "viewport": { "width": 0, "height": 600 } }"#,
            r#"{ "viewport": { "width": 1e39, "height": 600 } }"#,
            r#"{ "viewport": { "width": 800, "height": 1e39 } }"#,
            r#"{ "spawn_every": 0 }"#,
            r#"{ "obstacles": [{ "left": 50, "top": 0, "right": 10, "bottom": 10 }] }"#,
            r#"{ "obstacles": [{ "left": 0, "top": 0, "right": 1e39, "bottom": 10 }] }"#,
            "not json",
        ];
        for json in bad {
            assert!(Settings::from_json(json).is_err(), "accepted {json}");
        }
    }

    #[test]
    fn test_spawn_schedule() {
        let settings = Settings {
            spawn_every: 5,
            max_spawns: 2,
            ..Default::default()
        };
        assert!(settings.spawns_before(0, 0));
        assert!(!settings.spawns_before(3, 1));
        assert!(settings.spawns_before(5, 1));
        assert!(!settings.spawns_before(10, 2));
    }

    #[test]
    fn test_output_mode_names() {
        assert_eq!(OutputMode::parse("JSONL"), Some(OutputMode::JsonLines));
        let summary = OutputMode::Summary.as_str();
        assert_eq!(OutputMode::parse(summary), Some(OutputMode::Summary));
        assert_eq!(OutputMode::parse("xml"), None);
    }
}
