//! Scheduler which drives engine systems frame by frame.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use outpost_ecs::{ListenerId, Listeners};

use crate::config::Config;
use crate::error::{EngineError, Result, SystemFault};
use crate::system::{AsAny, EngineSystem};


/// Type which represents duration between two ticks.
pub type DeltaTime = Duration;

/// Lifecycle notification of the [`GameEngine`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EngineEvent {
    /// Emitted once all systems were initialized.
    Initialized,

    /// Emitted after all systems were updated, with delta time in seconds.
    Update(f32),

    /// Emitted once all systems were shut down and released.
    Shutdown,
}

/// Callback type for engine notifications.
pub type EngineListener = dyn FnMut(&EngineEvent);

/// Lifecycle state of the [`GameEngine`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineState {
    /// Systems can be registered; ticks do nothing.
    Idle,

    /// All systems were initialized; ticks update them.
    Running,

    /// All systems were shut down and released; ticks do nothing.
    ShutDown,
}

/// General context of game engine which owns and drives [`EngineSystem`]s.
///
/// Systems are visited in registration order on every lifecycle step.
/// All work happens synchronously on the thread which calls the engine.
///
pub struct GameEngine {
    config: Config,
    /// Registered systems in registration order.
    systems: Vec<Box<dyn EngineSystem>>,
    /// Index of each system in `systems` by its name.
    names: HashMap<String, usize>,
    state: EngineState,
    delta_time: DeltaTime,
    last_tick: Instant,
    listeners: Listeners<EngineListener>,
}

impl GameEngine {
    /// Creates engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates engine with the given configuration.
    ///
    /// Delta time of the first tick is measured from this call.
    ///
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            systems: Vec::new(),
            names: HashMap::new(),
            state: EngineState::Idle,
            delta_time: DeltaTime::ZERO,
            last_tick: Instant::now(),
            listeners: Listeners::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Returns `true` between successful initialization and shutdown.
    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    /// Delta time of the last tick in seconds.
    pub fn delta_time(&self) -> f32 {
        self.delta_time.as_secs_f32()
    }

    /// Registers the system under its name.
    ///
    /// # Errors
    ///
    /// An error is returned if a system with the same name is already registered
    /// or if the engine is running. In both cases the registry is left untouched.
    ///
    pub fn register_system<S>(&mut self, system: S) -> Result<()>
    where
        S: EngineSystem,
    {
        if self.is_running() {
            return Err(EngineError::AlreadyRunning);
        }
        let name = system.name().to_string();
        if self.names.contains_key(&name) {
            return Err(EngineError::DuplicateSystem(name));
        }
        log::debug!("system `{}` registered", name);
        self.names.insert(name, self.systems.len());
        self.systems.push(Box::new(system));
        Ok(())
    }

    /// Retrieves the system with the given name, if any.
    pub fn get_system(&self, name: &str) -> Option<&dyn EngineSystem> {
        let index = *self.names.get(name)?;
        Some(self.systems[index].as_ref())
    }

    /// Retrieves the system with the given name mutably, if any.
    pub fn get_system_mut(
        &mut self,
        name: &str,
    ) -> Option<&mut (dyn EngineSystem + 'static)> {
        let index = *self.names.get(name)?;
        Some(self.systems[index].as_mut())
    }

    /// Retrieves the system with the given name if it has type `T`.
    pub fn get_system_as<T>(&self, name: &str) -> Option<&T>
    where
        T: EngineSystem,
    {
        self.get_system(name)?.as_any().downcast_ref()
    }

    /// Retrieves the system with the given name mutably if it has type `T`.
    pub fn get_system_as_mut<T>(&mut self, name: &str) -> Option<&mut T>
    where
        T: EngineSystem,
    {
        self.get_system_mut(name)?.as_any_mut().downcast_mut()
    }

    /// Count of registered systems.
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Returns iterator over names of registered systems in registration order.
    pub fn system_names(&self) -> impl Iterator<Item = &str> {
        self.systems.iter().map(|system| system.name())
    }

    /// Initializes all registered systems and starts the engine.
    ///
    /// # Errors
    ///
    /// If some system fails to initialize, the failure is logged and returned,
    /// systems after it are not initialized and the engine does not start.
    /// An error is also returned if the engine is already running.
    ///
    pub fn initialize(&mut self) -> Result<()> {
        if self.is_running() {
            return Err(EngineError::AlreadyRunning);
        }
        for system in &mut self.systems {
            if let Err(source) = system.initialize() {
                let fault = SystemFault::Initialization {
                    name: system.name().to_string(),
                    source,
                };
                log::error!("{}", fault);
                return Err(EngineError::Initialization(fault));
            }
            log::debug!("system `{}` initialized", system.name());
        }

        self.state = EngineState::Running;
        log::info!(
            "{} v{} started with {} systems",
            self.config.name(),
            self.config.version(),
            self.systems.len(),
        );
        self.emit(EngineEvent::Initialized);
        Ok(())
    }

    /// Updates all systems with the time elapsed since the previous tick.
    ///
    /// Does nothing unless the engine is running. A failing system is logged and
    /// skipped, the remaining systems are still updated.
    ///
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_tick);
        self.last_tick = now;

        let delta_time = self.delta_time.as_secs_f32();
        for system in &mut self.systems {
            if let Err(source) = system.update(delta_time) {
                let fault = SystemFault::Update {
                    name: system.name().to_string(),
                    source,
                };
                log::error!("{}", fault);
            }
        }
        self.emit(EngineEvent::Update(delta_time));
    }

    /// Stops the engine, shuts down and releases all systems.
    ///
    /// Every system is shut down and disposed even if others fail to shut down.
    /// The registry is empty afterwards and must be populated again before
    /// the next initialization.
    ///
    pub fn shutdown(&mut self) {
        self.state = EngineState::ShutDown;

        for mut system in self.systems.drain(..) {
            if let Err(source) = system.shutdown() {
                let fault = SystemFault::Shutdown {
                    name: system.name().to_string(),
                    source,
                };
                log::error!("{}", fault);
            }
            system.dispose();
            log::debug!("system `{}` released", system.name());
        }
        self.names.clear();

        log::info!("{} stopped", self.config.name());
        self.emit(EngineEvent::Shutdown);
    }

    /// Registers a listener of engine notifications.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&EngineEvent) + 'static,
    {
        self.listeners.insert(Box::new(listener))
    }

    /// Removes a previously registered listener.
    ///
    /// Returns `false` if there was no such listener.
    ///
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn emit(&mut self, event: EngineEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
