//! Engine systems provided by the runtime itself.

pub use world::WorldSystem;

mod world;
