use std::fmt;

use crate::{Component, ComponentKind};

/// Health points of the game object.
///
/// Current health always stays within `0..=max`.
///
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Health {
    current: f32,
    max: f32,
}

impl Health {
    /// Creates full health; the maximum is at least `1`.
    pub fn new(max: f32) -> Self {
        let max = max.max(1.0);
        Self { current: max, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn set_current(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.max);
    }

    /// Changes the maximum, clamping current health to it.
    pub fn set_max(&mut self, value: f32) {
        self.max = value.max(1.0);
        self.current = self.current.min(self.max);
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    pub fn take_damage(&mut self, damage: f32) {
        self.set_current(self.current - damage);
    }

    pub fn heal(&mut self, amount: f32) {
        self.set_current(self.current + amount);
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Health: {:.1}/{:.1}", self.current, self.max)
    }
}

impl Component for Health {
    const KIND: ComponentKind = ComponentKind::new("health");
}
