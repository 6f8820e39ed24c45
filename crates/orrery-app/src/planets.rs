//! Planet catalog — sizes, colors, orbit geometry, and info-panel text.
//!
//! Distances and radii are display units, not AU; values are exaggerated for
//! readability (real planets would be sub-pixel).

/// One planet's static data.
#[derive(Debug, Clone)]
pub struct PlanetSpec {
    pub name: &'static str,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Base color, RGB 0-255.
    pub color: (u8, u8, u8),
    /// Ellipse semi-major axis in world units.
    pub semi_major: f32,
    /// Ellipse semi-minor axis; falls back to the major axis when absent.
    pub semi_minor: Option<f32>,
    /// Orbit-plane tilt in degrees (rotation about the Z axis).
    pub tilt_deg: f32,
    /// Angular speed in radians per tick.
    pub speed: f32,
    /// Info-panel text.
    pub info: &'static str,
}

pub const PLANET_COUNT: usize = 8;

pub const PLANETS: [PlanetSpec; PLANET_COUNT] = [
    PlanetSpec {
        name: "Mercury",
        radius: 1.0,
        color: (0xaa, 0xaa, 0xaa),
        semi_major: 20.0,
        semi_minor: Some(18.0),
        tilt_deg: 7.0,
        speed: 0.04,
        info: "Mercury is the smallest planet in the Solar System and closest to the Sun.",
    },
    PlanetSpec {
        name: "Venus",
        radius: 2.0,
        color: (0xff, 0xcc, 0x33),
        semi_major: 30.0,
        semi_minor: Some(28.0),
        tilt_deg: 3.0,
        speed: 0.03,
        info: "Venus has a thick atmosphere and is the hottest planet in the Solar System.",
    },
    PlanetSpec {
        name: "Earth",
        radius: 2.5,
        color: (0x33, 0x66, 0xff),
        semi_major: 40.0,
        semi_minor: Some(38.0),
        tilt_deg: 23.5,
        speed: 0.02,
        info: "Earth is the only planet known to support life.",
    },
    PlanetSpec {
        name: "Mars",
        radius: 1.8,
        color: (0xff, 0x33, 0x00),
        semi_major: 50.0,
        semi_minor: Some(48.0),
        tilt_deg: 25.0,
        speed: 0.018,
        info: "Mars is known as the Red Planet and has the tallest volcano in the Solar System.",
    },
    PlanetSpec {
        name: "Jupiter",
        radius: 5.0,
        color: (0xff, 0x99, 0x00),
        semi_major: 70.0,
        semi_minor: Some(68.0),
        tilt_deg: 3.0,
        speed: 0.01,
        info: "Jupiter is the largest planet and has a giant storm called the Great Red Spot.",
    },
    PlanetSpec {
        name: "Saturn",
        radius: 4.5,
        color: (0xff, 0xcc, 0x88),
        semi_major: 90.0,
        semi_minor: Some(88.0),
        tilt_deg: 27.0,
        speed: 0.008,
        info: "Saturn is famous for its extensive ring system.",
    },
    PlanetSpec {
        name: "Uranus",
        radius: 3.8,
        color: (0x66, 0xcc, 0xff),
        semi_major: 110.0,
        semi_minor: Some(108.0),
        tilt_deg: 97.8,
        speed: 0.007,
        info: "Uranus rotates on its side and has a bluish color due to methane.",
    },
    PlanetSpec {
        name: "Neptune",
        radius: 3.6,
        color: (0x33, 0x66, 0xcc),
        semi_major: 130.0,
        semi_minor: Some(128.0),
        tilt_deg: 28.3,
        speed: 0.006,
        info: "Neptune is the farthest planet from the Sun and has the strongest winds.",
    },
];

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 12.0;
pub const SUN_COLOR: (u8, u8, u8) = (0xff, 0xdd, 0x77);
pub const SUN_EMISSIVE: f32 = 2.0;
pub const SUN_SHININESS: f32 = 8.0;

// ── Starfield ────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 3000;
/// Stars are scattered in a cube of this edge length centered on the sun.
pub const STAR_SPREAD: f32 = 4000.0;
pub const STAR_SIZE: f32 = 0.5;

// ── Orbit paths ──────────────────────────────────────────────────────

/// Sample points per orbit ellipse.
pub const ORBIT_SAMPLES: usize = 200;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_ordered_outward() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].semi_major < pair[1].semi_major);
        }
    }

    #[test]
    fn outer_planets_are_slower() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].speed > pair[1].speed, "{} vs {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn minor_axis_never_exceeds_major() {
        for p in &PLANETS {
            if let Some(minor) = p.semi_minor {
                assert!(minor <= p.semi_major, "{}", p.name);
            }
        }
    }
}
