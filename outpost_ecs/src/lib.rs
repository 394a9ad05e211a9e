//! Entities, components and the world registry of the game-object runtime.
//!
//! A [`World`] owns every [`Entity`] it creates. Entities carry at most one
//! [`Component`] per [`ComponentKind`] and forward each frame's delta time to
//! them.

pub use component::{Component, ComponentKind};
pub use entity::{DuplicateComponent, Entity, EntityId, WorldId};
pub use listener::{ListenerId, Listeners};
pub use world::{World, WorldEvent};

pub mod component;
pub mod components;
pub mod entity;
mod listener;
pub mod world;
