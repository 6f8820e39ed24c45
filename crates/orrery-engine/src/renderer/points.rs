use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One point sprite (starfield star): 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct PointSprite {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Point size in pixels.
    pub size: f32,
}

impl PointSprite {
    pub const FLOATS: usize = 4;
}

/// Static point-sprite geometry (the starfield). Written once at init.
pub struct PointBuffer {
    points: Vec<PointSprite>,
}

impl PointBuffer {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(1024),
        }
    }

    pub fn push(&mut self, pos: Vec3, size: f32) {
        self.points.push(PointSprite {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            size,
        });
    }

    pub fn point_count(&self) -> u32 {
        self.points.len() as u32
    }

    /// Raw pointer to point data for SharedArrayBuffer reads.
    pub fn points_ptr(&self) -> *const f32 {
        self.points.as_ptr() as *const f32
    }
}

impl Default for PointBuffer {
    fn default() -> Self {
        Self::new()
    }
}
