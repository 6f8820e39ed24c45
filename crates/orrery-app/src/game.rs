//! The orrery game: animates the planet catalog, forwards UI input, and
//! drives the meteor overlay.

use glam::Vec3;
use orrery_engine::{
    EngineContext, Entity, EntityId, Game, GameConfig, GameEvent, InputEvent, InputQueue,
    MeshColor, SphereMesh,
};

use crate::meteors::{MeteorError, MeteorOverlay, MeteorRequest};
use crate::orbit;
use crate::planets::{
    ORBIT_SAMPLES, PLANETS, PLANET_COUNT, STAR_COUNT, STAR_SIZE, STAR_SPREAD, SUN_COLOR,
    SUN_EMISSIVE, SUN_RADIUS, SUN_SHININESS,
};

// Custom input kinds, pushed by the UI layer.
pub const CUSTOM_SET_TIME_SCALE: u32 = 1;
pub const CUSTOM_SELECT_PLANET: u32 = 2;

// Event kinds emitted per tick, read by the UI layer.
pub const EVENT_SELECTION: f32 = 1.0;
pub const EVENT_OVERLAY: f32 = 2.0;
pub const EVENT_TIME_SCALE: f32 = 3.0;

pub struct Orrery {
    time_scale: f32,
    angles: [f32; PLANET_COUNT],
    selected: Option<usize>,
    sun_id: Option<EntityId>,
    planet_ids: [Option<EntityId>; PLANET_COUNT],
    overlay: MeteorOverlay,
}

impl Orrery {
    pub fn new() -> Self {
        Self {
            time_scale: 1.0,
            angles: [0.0; PLANET_COUNT],
            selected: None,
            sun_id: None,
            planet_ids: [None; PLANET_COUNT],
            overlay: MeteorOverlay::new(),
        }
    }

    pub fn overlay(&self) -> &MeteorOverlay {
        &self.overlay
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Forward a month selection to the overlay.
    pub fn select_month(
        &mut self,
        ctx: &mut EngineContext,
        month: &str,
    ) -> Option<MeteorRequest> {
        self.overlay.select_month(ctx, month)
    }

    /// Forward a fetch outcome to the overlay.
    pub fn complete_meteors(
        &mut self,
        ctx: &mut EngineContext,
        generation: u64,
        result: Result<String, MeteorError>,
    ) {
        self.overlay.complete(ctx, generation, result);
    }

    fn handle_input(&mut self, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind: CUSTOM_SET_TIME_SCALE, a, .. } => {
                    self.time_scale = if a.is_finite() { a } else { 0.0 };
                }
                InputEvent::Custom { kind: CUSTOM_SELECT_PLANET, a, .. } => {
                    let index = a as i32;
                    self.selected = if (0..PLANET_COUNT as i32).contains(&index) {
                        Some(index as usize)
                    } else {
                        None
                    };
                }
                _ => {}
            }
        }
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Orrery {
    fn config(&self) -> GameConfig {
        GameConfig {
            // Sun + 8 planets + up to 128 meteor markers, with headroom.
            max_spheres: 160,
            // 8 closed orbits of 200 samples: 8 * 200 * 2 line vertices.
            max_path_vertices: 3264,
            max_points: STAR_COUNT,
            max_events: 16,
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let sun_id = ctx.next_id();
        let (r, g, b) = SUN_COLOR;
        ctx.spawn_sphere(
            Entity::new(sun_id).with_tag("sun"),
            SphereMesh::new(SUN_RADIUS, MeshColor::rgb8(r, g, b))
                .with_emissive(SUN_EMISSIVE)
                .with_shininess(SUN_SHININESS),
        );
        self.sun_id = Some(sun_id);

        for (i, spec) in PLANETS.iter().enumerate() {
            // Spread the planets out so they never start in a straight line.
            self.angles[i] = ctx.rng.next_f32() * std::f32::consts::TAU;
            let id = ctx.next_id();
            let (r, g, b) = spec.color;
            ctx.spawn_sphere(
                Entity::new(id)
                    .with_tag(spec.name)
                    .with_pos(orbit::planet_position(spec, self.angles[i])),
                SphereMesh::new(spec.radius, MeshColor::rgb8(r, g, b)),
            );
            self.planet_ids[i] = Some(id);

            ctx.paths
                .stroke_polyline(&orbit::orbit_path(spec, ORBIT_SAMPLES), true);
        }

        let half = STAR_SPREAD / 2.0;
        for _ in 0..STAR_COUNT {
            let pos = Vec3::new(
                ctx.rng.next_range(-half, half),
                ctx.rng.next_range(-half, half),
                ctx.rng.next_range(-half, half),
            );
            ctx.points.push(pos, STAR_SIZE);
        }

        log::info!("orrery initialized: {} planets, {STAR_COUNT} stars", PLANET_COUNT);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(input);

        for (i, spec) in PLANETS.iter().enumerate() {
            self.angles[i] = orbit::advance(self.angles[i], spec.speed, self.time_scale);
            if let Some(id) = self.planet_ids[i] {
                if let Some(entity) = ctx.scene.get_mut(id) {
                    entity.pos = orbit::planet_position(spec, self.angles[i]);
                }
            }
        }

        let selection = self.selected.map_or(-1.0, |i| i as f32);
        ctx.emit_event(GameEvent {
            kind: EVENT_SELECTION,
            a: selection,
            b: 0.0,
            c: 0.0,
        });
        ctx.emit_event(GameEvent {
            kind: EVENT_OVERLAY,
            a: self.overlay.state().code(),
            b: self.overlay.marker_count() as f32,
            c: self.overlay.generation() as f32,
        });
        ctx.emit_event(GameEvent {
            kind: EVENT_TIME_SCALE,
            a: self.time_scale,
            b: 0.0,
            c: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_game() -> (Orrery, EngineContext, InputQueue) {
        let mut game = Orrery::new();
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        (game, ctx, InputQueue::new())
    }

    #[test]
    fn init_populates_whole_scene() {
        let (_, ctx, _) = init_game();
        // Sun plus eight planets
        assert_eq!(ctx.scene.len(), 9);
        assert_eq!(ctx.meshes.live_count(), 9);
        assert_eq!(ctx.points.point_count(), STAR_COUNT as u32);
        // Eight closed 200-sample orbits, two line vertices per segment
        assert_eq!(ctx.paths.vertex_count(), (PLANET_COUNT * ORBIT_SAMPLES * 2) as u32);
    }

    #[test]
    fn scene_fits_configured_capacities() {
        let (game, ctx, _) = init_game();
        let config = game.config();
        assert!(ctx.scene.len() + crate::meteors::MAX_MARKERS <= config.max_spheres);
        assert!(ctx.paths.vertex_count() as usize <= config.max_path_vertices);
        assert!(ctx.points.point_count() as usize <= config.max_points);
    }

    #[test]
    fn update_advances_each_planet_by_its_speed() {
        let (mut game, mut ctx, input) = init_game();
        let before = game.angles;
        game.update(&mut ctx, &input);
        for (i, spec) in PLANETS.iter().enumerate() {
            assert_eq!(game.angles[i], before[i] + spec.speed);
        }
    }

    #[test]
    fn time_scale_input_scales_motion() {
        let (mut game, mut ctx, mut input) = init_game();
        input.push(InputEvent::Custom {
            kind: CUSTOM_SET_TIME_SCALE,
            a: 3.0,
            b: 0.0,
            c: 0.0,
        });
        let before = game.angles[0];
        game.update(&mut ctx, &input);
        assert_eq!(game.angles[0], before + PLANETS[0].speed * 3.0);
        assert_eq!(game.time_scale(), 3.0);
    }

    #[test]
    fn non_finite_time_scale_freezes_motion() {
        let (mut game, mut ctx, mut input) = init_game();
        input.push(InputEvent::Custom {
            kind: CUSTOM_SET_TIME_SCALE,
            a: f32::NAN,
            b: 0.0,
            c: 0.0,
        });
        let before = game.angles;
        game.update(&mut ctx, &input);
        assert_eq!(game.time_scale(), 0.0);
        assert_eq!(game.angles, before);
    }

    #[test]
    fn planet_positions_track_angles() {
        let (mut game, mut ctx, input) = init_game();
        game.update(&mut ctx, &input);
        for (i, spec) in PLANETS.iter().enumerate() {
            let entity = ctx.scene.get(game.planet_ids[i].unwrap()).unwrap();
            assert_eq!(entity.pos, orbit::planet_position(spec, game.angles[i]));
        }
    }

    #[test]
    fn selection_events_follow_input() {
        let (mut game, mut ctx, mut input) = init_game();
        input.push(InputEvent::Custom {
            kind: CUSTOM_SELECT_PLANET,
            a: 2.0,
            b: 0.0,
            c: 0.0,
        });
        game.update(&mut ctx, &input);
        assert_eq!(game.selected(), Some(2));
        let selection = ctx
            .events
            .iter()
            .find(|e| e.kind == EVENT_SELECTION)
            .unwrap();
        assert_eq!(selection.a, 2.0);
    }

    #[test]
    fn out_of_range_selection_deselects() {
        let (mut game, mut ctx, mut input) = init_game();
        input.push(InputEvent::Custom {
            kind: CUSTOM_SELECT_PLANET,
            a: 2.0,
            b: 0.0,
            c: 0.0,
        });
        game.update(&mut ctx, &input);
        ctx.clear_frame_data();

        let mut input = InputQueue::new();
        input.push(InputEvent::Custom {
            kind: CUSTOM_SELECT_PLANET,
            a: -1.0,
            b: 0.0,
            c: 0.0,
        });
        game.update(&mut ctx, &input);
        assert_eq!(game.selected(), None);
        let selection = ctx
            .events
            .iter()
            .find(|e| e.kind == EVENT_SELECTION)
            .unwrap();
        assert_eq!(selection.a, -1.0);
    }

    #[test]
    fn every_tick_reports_overlay_and_time_scale() {
        let (mut game, mut ctx, input) = init_game();
        game.update(&mut ctx, &input);
        let overlay = ctx.events.iter().find(|e| e.kind == EVENT_OVERLAY).unwrap();
        assert_eq!(overlay.a, 0.0); // idle
        assert_eq!(overlay.b, 0.0); // no markers
        let scale = ctx
            .events
            .iter()
            .find(|e| e.kind == EVENT_TIME_SCALE)
            .unwrap();
        assert_eq!(scale.a, 1.0);
    }
}
