use crate::{Component, ComponentKind, Entity};

/// Playback state of the current animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Animated {
    pub animation: String,
    /// Normalized progress of the animation, within `0..=1`.
    pub progress: f32,
    pub speed: f32,
    pub looping: bool,
}

impl Animated {
    /// Restarts playback with another animation.
    pub fn play(&mut self, animation: impl Into<String>, looping: bool) {
        self.animation = animation.into();
        self.progress = 0.0;
        self.looping = looping;
    }

    /// Returns `true` once a one-shot animation has reached its end.
    pub fn is_finished(&self) -> bool {
        !self.looping && self.progress >= 1.0
    }
}

impl Default for Animated {
    fn default() -> Self {
        Self {
            animation: "idle".to_string(),
            progress: 0.0,
            speed: 1.0,
            looping: true,
        }
    }
}

impl Component for Animated {
    const KIND: ComponentKind = ComponentKind::new("animated");

    fn update(&mut self, _owner: &mut Entity, delta_time: f32) {
        self.progress += delta_time * self.speed;
        if self.looping {
            self.progress = self.progress.rem_euclid(1.0);
        } else {
            self.progress = self.progress.clamp(0.0, 1.0);
        }
    }
}
