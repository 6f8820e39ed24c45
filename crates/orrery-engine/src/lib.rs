pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{MeshColor, SphereMesh};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::arena::{MeshArena, MeshHandle};
pub use renderer::instance::{RenderBuffer, SphereInstance};
pub use renderer::paths::{PathBuffer, PathVertex};
pub use renderer::points::{PointBuffer, PointSprite};
pub use bridge::protocol::ProtocolLayout;
