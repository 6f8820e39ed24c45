use crate::api::types::{EntityId, GameEvent};
use crate::components::entity::Entity;
use crate::components::mesh::SphereMesh;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::arena::MeshArena;
use crate::renderer::paths::PathBuffer;
use crate::renderer::points::PointBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Maximum number of sphere instances (default: 64).
    pub max_spheres: usize,
    /// Maximum number of static path vertices (default: 4096).
    pub max_path_vertices: usize,
    /// Maximum number of static point sprites (default: 4096).
    pub max_points: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_spheres: 64,
            max_path_vertices: 4096,
            max_points: 4096,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, write static geometry.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One animation tick, driven by the browser's frame callback.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    /// Arena owning every renderable handle in the scene.
    pub meshes: MeshArena,
    /// Static line geometry (orbit paths).
    pub paths: PathBuffer,
    /// Static point geometry (starfield).
    pub points: PointBuffer,
    pub events: Vec<GameEvent>,
    pub rng: Rng,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            meshes: MeshArena::new(),
            paths: PathBuffer::new(),
            points: PointBuffer::new(),
            events: Vec::new(),
            rng: Rng::new(42),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Spawn an entity with a renderable sphere. Allocates the mesh from the
    /// arena and attaches its handle. Returns the EntityId.
    pub fn spawn_sphere(&mut self, entity: Entity, mesh: SphereMesh) -> EntityId {
        let id = entity.id;
        let handle = self.meshes.alloc(mesh);
        self.scene.spawn(entity.with_mesh(handle));
        id
    }

    /// Despawn an entity, releasing its mesh before removal so graphics
    /// resources never leak across removal paths.
    pub fn despawn(&mut self, id: EntityId) {
        if let Some(entity) = self.scene.despawn(id) {
            if let Some(handle) = entity.mesh {
                self.meshes.free(handle);
            }
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
