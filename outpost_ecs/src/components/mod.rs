//! Basic components shared by most game objects.

pub use animated::Animated;
pub use health::Health;
pub use inventory::{Inventory, InventoryItem};
pub use physics::Physics;
pub use transform::Transform;

mod animated;
mod health;
mod inventory;
mod physics;
mod tests;
mod transform;
