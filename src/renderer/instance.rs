//! GPU-ready per-ball instance records

use bytemuck::{Pod, Zeroable};

use super::{FrameSnapshot, Renderer};

/// One ball, laid out for an instanced circle draw
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BallInstance {
    /// Top-left corner in viewport pixels
    pub position: [f32; 2],
    pub diameter: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

impl BallInstance {
    pub const fn new(x: f32, y: f32, diameter: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            diameter,
            _pad: 0.0,
            color,
        }
    }
}

/// Colors for drawn elements
pub mod colors {
    pub const BALL: [f32; 4] = [0.95, 0.35, 0.3, 1.0];
}

/// Repacks every frame into a contiguous instance buffer
#[derive(Debug, Default)]
pub struct InstanceBuffer {
    instances: Vec<BallInstance>,
    frame: u64,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame the buffer currently holds
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn instances(&self) -> &[BallInstance] {
        &self.instances
    }

    /// Raw bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Renderer for InstanceBuffer {
    fn present(&mut self, frame: &FrameSnapshot<'_>) -> anyhow::Result<()> {
        self.instances.clear();
        self.instances.extend(
            frame
                .positions()
                .map(|p| BallInstance::new(p.x, p.y, FrameSnapshot::DIAMETER, colors::BALL)),
        );
        self.frame = frame.frame();
        Ok(())
    }
}
