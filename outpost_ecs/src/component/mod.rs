//! Utilities for *components* of entities.

use std::any::Any;
use std::fmt;

use crate::entity::{Entity, EntityId};

mod tests;

/// Stable tag which identifies a kind of component.
///
/// Every component type declares its own tag, and an entity holds at most one
/// component per tag. Two different types must never share a tag.
///
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ComponentKind(&'static str);

impl ComponentKind {
    /// Creates new component kind from its tag.
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    /// Tag of this component kind.
    pub const fn tag(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Objects of this trait represent *component*: a unit of behavior and state
/// attached to exactly one entity.
///
/// All hooks do nothing by default.
///
pub trait Component: Any {
    /// Kind of this component.
    const KIND: ComponentKind;

    /// Called right after the component was attached to the `owner`.
    fn on_attach(&mut self, owner: EntityId) {
        let _ = owner;
    }

    /// Called right before the component is detached from the `owner` and dropped.
    fn on_detach(&mut self, owner: EntityId) {
        let _ = owner;
    }

    /// Advances the state of the component by `delta_time` seconds.
    ///
    /// Sibling components are reachable through the `owner`, but no update order
    /// between siblings is guaranteed within one frame. While this method runs,
    /// the component itself is checked out of the `owner`.
    ///
    fn update(&mut self, owner: &mut Entity, delta_time: f32) {
        let _ = (owner, delta_time);
    }
}

/// Object safe counterpart of [`Component`] used for storage inside of entities.
pub(crate) trait ErasedComponent: Any {
    fn kind(&self) -> ComponentKind;

    fn on_attach(&mut self, owner: EntityId);

    fn on_detach(&mut self, owner: EntityId);

    fn update(&mut self, owner: &mut Entity, delta_time: f32);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> ErasedComponent for T
where
    T: Component,
{
    fn kind(&self) -> ComponentKind {
        T::KIND
    }

    fn on_attach(&mut self, owner: EntityId) {
        Component::on_attach(self, owner)
    }

    fn on_detach(&mut self, owner: EntityId) {
        Component::on_detach(self, owner)
    }

    fn update(&mut self, owner: &mut Entity, delta_time: f32) {
        Component::update(self, owner, delta_time)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
