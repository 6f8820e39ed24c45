use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One endpoint of a line segment: 3 floats = 12 bytes stride.
/// Vertices are consumed pairwise (GL_LINES) by the TypeScript renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct PathVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PathVertex {
    pub const FLOATS: usize = 3;

    fn from_vec3(v: Vec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

/// Static line geometry (orbit paths). Written once at init and read every
/// frame by the renderer, so the buffer never churns.
pub struct PathBuffer {
    vertices: Vec<PathVertex>,
}

impl PathBuffer {
    pub fn new() -> Self {
        Self {
            vertices: Vec::with_capacity(1024),
        }
    }

    /// Append a polyline as pairwise line segments. When `closed`, the last
    /// point connects back to the first.
    pub fn stroke_polyline(&mut self, points: &[Vec3], closed: bool) {
        if points.len() < 2 {
            return;
        }
        for pair in points.windows(2) {
            self.vertices.push(PathVertex::from_vec3(pair[0]));
            self.vertices.push(PathVertex::from_vec3(pair[1]));
        }
        if closed {
            self.vertices.push(PathVertex::from_vec3(points[points.len() - 1]));
            self.vertices.push(PathVertex::from_vec3(points[0]));
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Raw pointer to vertex data for SharedArrayBuffer reads.
    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }
}

impl Default for PathBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_polyline_emits_segment_pairs() {
        let mut buf = PathBuffer::new();
        buf.stroke_polyline(
            &[Vec3::ZERO, Vec3::X, Vec3::new(1.0, 0.0, 1.0)],
            false,
        );
        // 2 segments, 2 vertices each
        assert_eq!(buf.vertex_count(), 4);
    }

    #[test]
    fn closed_polyline_adds_closing_segment() {
        let mut buf = PathBuffer::new();
        let points = [Vec3::ZERO, Vec3::X, Vec3::Z];
        buf.stroke_polyline(&points, true);
        assert_eq!(buf.vertex_count(), 6);
    }

    #[test]
    fn degenerate_polyline_is_ignored() {
        let mut buf = PathBuffer::new();
        buf.stroke_polyline(&[Vec3::ZERO], true);
        assert_eq!(buf.vertex_count(), 0);
    }
}
