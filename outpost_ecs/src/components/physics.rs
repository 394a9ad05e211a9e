use crate::{Component, ComponentKind, Entity};

use super::Transform;

/// Free fall acceleration, in units per second squared.
pub const GRAVITY: f32 = 9.8;

/// Simple rigid body which moves the sibling [`Transform`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Physics {
    pub velocity: [f32; 3],
    pub mass: f32,
    /// Fraction of velocity lost per second.
    pub drag: f32,
    pub use_gravity: bool,
    pub gravity_scale: f32,
}

impl Physics {
    /// Applies an instant impulse to the body.
    pub fn apply_force(&mut self, force: [f32; 3]) {
        for (velocity, force) in self.velocity.iter_mut().zip(force) {
            *velocity += force / self.mass;
        }
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            velocity: [0.0; 3],
            mass: 1.0,
            drag: 0.1,
            use_gravity: true,
            gravity_scale: 1.0,
        }
    }
}

impl Component for Physics {
    const KIND: ComponentKind = ComponentKind::new("physics");

    fn update(&mut self, owner: &mut Entity, delta_time: f32) {
        if self.use_gravity {
            self.velocity[1] -= GRAVITY * self.gravity_scale * delta_time;
        }
        let damping = 1.0 - self.drag * delta_time;
        self.velocity.iter_mut().for_each(|velocity| *velocity *= damping);

        if let Some(transform) = owner.get_component_mut::<Transform>() {
            let velocity = self.velocity;
            transform.translate(velocity.map(|velocity| velocity * delta_time));
        }
    }
}
