//! System scheduler of the game-object runtime.
//!
//! The [`GameEngine`] owns named [`EngineSystem`]s and drives them through
//! initialize, update and shutdown. [`WorldSystem`](systems::WorldSystem)
//! connects the engine with the [`World`](outpost_ecs::World) of entities.

pub use engine::{EngineEvent, EngineState, GameEngine};
pub use system::EngineSystem;

pub mod config;
pub mod engine;
pub mod error;
pub mod system;
pub mod systems;
