use crate::{Component, ComponentKind};

/// Position, rotation and scale of the game object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: [f32; 3],
    /// Euler angles in degrees.
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Transform {
    /// Creates transform placed at the given position.
    pub const fn from_position(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
            rotation: [0.0; 3],
            scale: [1.0; 3],
        }
    }

    /// Moves the object by the given offset.
    pub fn translate(&mut self, offset: [f32; 3]) {
        for (axis, delta) in self.position.iter_mut().zip(offset) {
            *axis += delta;
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_position(0.0, 0.0, 0.0)
    }
}

impl Component for Transform {
    const KIND: ComponentKind = ComponentKind::new("transform");
}
