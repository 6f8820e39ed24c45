/// RGB color for sphere rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MeshColor {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from RGB u8 values (0-255).
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }
}

impl Default for MeshColor {
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.8 }
    }
}

/// Renderable sphere descriptor. One per visible body, owned by the
/// [`MeshArena`](crate::renderer::arena::MeshArena) and referenced from an
/// entity by handle.
#[derive(Debug, Clone, Copy)]
pub struct SphereMesh {
    /// Radius in world units.
    pub radius: f32,
    pub color: MeshColor,
    /// HDR glow multiplier (default: 0.0, values > 0 push into EDR range).
    pub emissive: f32,
    /// Phong specular exponent (default: 32.0).
    pub shininess: f32,
}

impl Default for SphereMesh {
    fn default() -> Self {
        Self {
            radius: 1.0,
            color: MeshColor::default(),
            emissive: 0.0,
            shininess: 32.0,
        }
    }
}

impl SphereMesh {
    pub fn new(radius: f32, color: MeshColor) -> Self {
        Self {
            radius,
            color,
            ..Default::default()
        }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_normalizes() {
        let c = MeshColor::rgb8(255, 0, 51);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn builder_sets_fields() {
        let m = SphereMesh::new(2.5, MeshColor::rgb8(0x33, 0x66, 0xff))
            .with_emissive(1.5)
            .with_shininess(8.0);
        assert_eq!(m.radius, 2.5);
        assert_eq!(m.emissive, 1.5);
        assert_eq!(m.shininess, 8.0);
    }
}
