use outpost_ecs::World;

use crate::error::SystemResult;
use crate::system::EngineSystem;

/// Engine system which advances the [`World`] on every tick.
pub struct WorldSystem {
    name: String,
    world: World,
}

impl WorldSystem {
    /// Default name of the system.
    pub const NAME: &'static str = "world";

    /// Creates system for the given world under the default name.
    pub fn new(world: World) -> Self {
        Self::with_name(Self::NAME, world)
    }

    /// Creates system for the given world under a custom name.
    pub fn with_name(name: impl Into<String>, world: World) -> Self {
        Self {
            name: name.into(),
            world,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl EngineSystem for WorldSystem {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self) -> SystemResult {
        log::debug!(
            "world {} starts with {} entities",
            self.world.id(),
            self.world.entity_count(),
        );
        Ok(())
    }

    fn update(&mut self, delta_time: f32) -> SystemResult {
        self.world.update(delta_time);
        Ok(())
    }

    fn shutdown(&mut self) -> SystemResult {
        self.world.clear();
        Ok(())
    }
}
