//! Configuration utilities for game engine and your game.

use std::time::Duration;

use semver::Version;

/// This struct represents general configuration of game engine.
#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    frame_time: Duration,
    frame_limit: Option<u64>,
}

pub const ENGINE_NAME: &str = env!("CARGO_CRATE_NAME", "library must be compiled by Cargo");

const ENGINE_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");
lazy_static::lazy_static! {
    pub static ref ENGINE_VERSION: Version = ENGINE_VERSION_STR
        .parse()
        .expect("package version must follow semver");
}

/// Frame time of ~60 ticks per second.
pub const DEFAULT_FRAME_TIME: Duration = Duration::from_micros(16_667);

impl Config {
    /// Creates new configuration with given name and version.
    pub const fn new(name: String, version: Version) -> Self {
        Self {
            name,
            version,
            frame_time: DEFAULT_FRAME_TIME,
            frame_limit: None,
        }
    }

    /// Sets time which the driving loop should wait between ticks.
    pub fn with_frame_time(mut self, frame_time: Duration) -> Self {
        self.frame_time = frame_time;
        self
    }

    /// Sets count of ticks after which the driving loop stops.
    pub fn with_frame_limit(mut self, frame_limit: Option<u64>) -> Self {
        self.frame_limit = frame_limit;
        self
    }

    /// Name of your game.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semver version of your game.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Target interval between two ticks.
    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Count of ticks to run, or `None` to run until stopped.
    pub fn frame_limit(&self) -> Option<u64> {
        self.frame_limit
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("Hello World".to_string(), Version::new(0, 0, 0))
    }
}
