//! Closed-form elliptical orbit math — pure, no engine dependencies.

use glam::{Quat, Vec3};

use crate::planets::PlanetSpec;

/// Advance an orbital angle by one tick. Angles accumulate unbounded;
/// only sin/cos consume them, so no wrapping is needed.
pub fn advance(angle: f32, speed: f32, time_scale: f32) -> f32 {
    angle + speed * time_scale
}

/// Position on an ellipse in the orbital plane:
/// `x = a·cos θ`, `z = b·sin θ`, `y = 0`.
/// A missing minor axis degrades to a circle of radius `a`.
pub fn ellipse_position(semi_major: f32, semi_minor: Option<f32>, angle: f32) -> Vec3 {
    let minor = semi_minor.unwrap_or(semi_major);
    Vec3::new(semi_major * angle.cos(), 0.0, minor * angle.sin())
}

/// Orbit-plane tilt as a rotation about the Z axis.
pub fn tilt_rotation(tilt_deg: f32) -> Quat {
    Quat::from_rotation_z(tilt_deg.to_radians())
}

/// World-space position of a planet at the given angle, tilt applied.
pub fn planet_position(spec: &PlanetSpec, angle: f32) -> Vec3 {
    tilt_rotation(spec.tilt_deg) * ellipse_position(spec.semi_major, spec.semi_minor, angle)
}

/// Sample the full orbit ellipse for path drawing, tilt applied.
pub fn orbit_path(spec: &PlanetSpec, samples: usize) -> Vec<Vec3> {
    let rot = tilt_rotation(spec.tilt_deg);
    (0..samples)
        .map(|i| {
            let angle = i as f32 / samples as f32 * std::f32::consts::TAU;
            rot * ellipse_position(spec.semi_major, spec.semi_minor, angle)
        })
        .collect()
}

/// Parse the UI's time-scale input. Malformed or non-finite input degrades
/// to 0.0 (no motion) rather than failing the frame.
pub fn parse_time_scale(raw: &str) -> f32 {
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planets::PLANETS;

    #[test]
    fn advance_accumulates_exactly() {
        // speed·scale = 0.125 is exactly representable, so N ticks must land
        // on initial + N·s·k with no drift.
        let mut angle = 0.5_f32;
        for _ in 0..8 {
            angle = advance(angle, 0.25, 0.5);
        }
        assert_eq!(angle, 0.5 + 8.0 * 0.25 * 0.5);
    }

    #[test]
    fn zero_scale_freezes_motion() {
        let angle = advance(1.25, 0.04, 0.0);
        assert_eq!(angle, 1.25);
    }

    #[test]
    fn ellipse_position_matches_closed_form() {
        for i in 0..64 {
            let angle = i as f32 / 64.0 * std::f32::consts::TAU;
            let p = ellipse_position(40.0, Some(38.0), angle);
            assert_eq!(p.x, 40.0 * angle.cos());
            assert_eq!(p.z, 38.0 * angle.sin());
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn missing_minor_axis_degrades_to_circle() {
        let p = ellipse_position(20.0, None, std::f32::consts::FRAC_PI_2);
        assert!((p.z - 20.0).abs() < 1e-4);
    }

    #[test]
    fn tilt_rotates_out_of_ecliptic() {
        // 90° tilt about Z maps +X onto +Y.
        let spec = PlanetSpec {
            tilt_deg: 90.0,
            ..PLANETS[0].clone()
        };
        let p = planet_position(&spec, 0.0);
        assert!(p.x.abs() < 1e-4);
        assert!((p.y - spec.semi_major).abs() < 1e-3);
    }

    #[test]
    fn orbit_path_has_requested_samples() {
        let points = orbit_path(&PLANETS[2], 200);
        assert_eq!(points.len(), 200);
        // All samples lie on the tilted ellipse: |inverse-rotated| obeys the
        // ellipse equation.
        let inv = tilt_rotation(PLANETS[2].tilt_deg).inverse();
        for p in &points {
            let q = inv * *p;
            let a = PLANETS[2].semi_major;
            let b = PLANETS[2].semi_minor.unwrap();
            let e = (q.x / a).powi(2) + (q.z / b).powi(2);
            assert!((e - 1.0).abs() < 1e-3, "e = {e}");
        }
    }

    #[test]
    fn parse_time_scale_accepts_floats() {
        assert_eq!(parse_time_scale("1.5"), 1.5);
        assert_eq!(parse_time_scale("  2 "), 2.0);
        assert_eq!(parse_time_scale("-0.5"), -0.5);
    }

    #[test]
    fn parse_time_scale_degrades_to_zero() {
        assert_eq!(parse_time_scale(""), 0.0);
        assert_eq!(parse_time_scale("abc"), 0.0);
        assert_eq!(parse_time_scale("NaN"), 0.0);
        assert_eq!(parse_time_scale("inf"), 0.0);
    }
}
