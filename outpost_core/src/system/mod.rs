//! Utilities for *engine systems*: named subsystems driven by the engine.

use std::any::Any;

use crate::error::SystemResult;

/// Conversion of an engine system into [`Any`] for typed lookups.
///
/// Implemented for every `'static` type, there is no need to implement it by hand.
///
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> AsAny for T
where
    T: Any,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Objects of this trait represent *system* of game engine.
///
/// The engine initializes each system once before its first update and shuts it
/// down once after its last update. Errors returned from the hooks are reported
/// by the engine; see [`GameEngine`](crate::GameEngine) for how each of them is
/// handled.
///
pub trait EngineSystem: AsAny {
    /// Name of the system, unique within one engine.
    ///
    /// Must be available before initialization and must not change afterwards.
    ///
    fn name(&self) -> &str;

    /// Prepares the system for updates.
    fn initialize(&mut self) -> SystemResult {
        Ok(())
    }

    /// Advances the state of the system by `delta_time` seconds.
    fn update(&mut self, delta_time: f32) -> SystemResult;

    /// Stops the system after its last update.
    fn shutdown(&mut self) -> SystemResult {
        Ok(())
    }

    /// Releases resources which are not freed by [`Drop`], such as files or handles.
    ///
    /// Called once after [`shutdown`](EngineSystem::shutdown), whatever its result.
    ///
    fn dispose(&mut self) {}
}
