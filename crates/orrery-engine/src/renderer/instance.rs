use bytemuck::{Pod, Zeroable};

use crate::components::mesh::SphereMesh;

/// Per-sphere render data written to SharedArrayBuffer for the TypeScript
/// renderer. Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SphereInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Z position in world space.
    pub z: f32,
    /// Radius in world units.
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// HDR glow multiplier (0.0 = unlit surface).
    pub emissive: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_mesh(pos: glam::Vec3, mesh: &SphereMesh) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            radius: mesh.radius,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            emissive: mesh.emissive,
        }
    }
}

/// Render buffer containing all sphere instances for one frame.
pub struct RenderBuffer {
    pub instances: Vec<SphereInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(64),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SphereInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::MeshColor;
    use glam::Vec3;

    #[test]
    fn sphere_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<SphereInstance>(), 32);
        assert_eq!(SphereInstance::FLOATS, 8);
    }

    #[test]
    fn from_mesh_copies_fields() {
        let mesh = SphereMesh::new(12.0, MeshColor::rgb8(0xff, 0xdd, 0x77)).with_emissive(2.0);
        let inst = SphereInstance::from_mesh(Vec3::new(1.0, 2.0, 3.0), &mesh);
        assert_eq!(inst.x, 1.0);
        assert_eq!(inst.z, 3.0);
        assert_eq!(inst.radius, 12.0);
        assert_eq!(inst.emissive, 2.0);
    }

    #[test]
    fn render_buffer_push_and_count() {
        let mut buf = RenderBuffer::new();
        buf.push(SphereInstance::default());
        buf.push(SphereInstance::default());
        assert_eq!(buf.instance_count(), 2);
    }
}
