use orrery_engine::systems::render::build_render_buffer;
use orrery_engine::{
    EngineContext, Game, GameConfig, InputEvent, InputQueue, ProtocolLayout, RenderBuffer,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_spheres);

        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            render_buffer,
            layout,
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: update game, rebuild the sphere render buffer.
    /// Driven once per browser animation frame.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        // Build render buffer from entities
        build_render_buffer(self.ctx.scene.iter(), &self.ctx.meshes, &mut self.render_buffer);
    }

    /// Split access to the concrete game and the engine context.
    ///
    /// Used by app-level exports that must act on both at once — e.g. an
    /// async fetch completion that mutates game state and the scene.
    pub fn with_parts<R>(&mut self, f: impl FnOnce(&mut G, &mut EngineContext) -> R) -> R {
        f(&mut self.game, &mut self.ctx)
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn spheres_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn sphere_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn path_vertices_ptr(&self) -> *const f32 {
        self.ctx.paths.vertices_ptr()
    }

    pub fn path_vertex_count(&self) -> u32 {
        self.ctx.paths.vertex_count()
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.ctx.points.points_ptr()
    }

    pub fn point_count(&self) -> u32 {
        self.ctx.points.point_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_spheres(&self) -> u32 {
        self.layout.max_spheres as u32
    }

    pub fn max_path_vertices(&self) -> u32 {
        self.layout.max_path_vertices as u32
    }

    pub fn max_points(&self) -> u32 {
        self.layout.max_points as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
