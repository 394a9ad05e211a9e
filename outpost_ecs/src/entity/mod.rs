//! Utilities for *entities*: addressable containers of components.

use std::any::Any;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use slotmap::{new_key_type, Key};
use thiserror::Error;

use crate::component::{Component, ComponentKind, ErasedComponent};


new_key_type! {
    /// Slot of the entity inside of its world.
    pub struct EntityKey;
}

/// Unique identifier of the world which owns an entity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct WorldId(u64);

impl WorldId {
    /// Allocates identifier which was never handed out before in this process.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of the *entity*.
///
/// Identifiers are never reused in one process: slots of the world are versioned
/// and every world gets its own [`WorldId`].
///
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EntityId {
    world: WorldId,
    key: EntityKey,
}

impl EntityId {
    pub(crate) const fn new(world: WorldId, key: EntityKey) -> Self {
        Self { world, key }
    }

    /// Identifier of the world which owns the entity.
    pub const fn world(self) -> WorldId {
        self.world
    }

    pub(crate) const fn key(self) -> EntityKey {
        self.key
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{:?}", self.world, self.key.data())
    }
}

/// Error returned when a component kind is attached twice to the same entity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("component `{kind}` is already attached to entity {entity}")]
pub struct DuplicateComponent {
    /// Entity which already holds the component.
    pub entity: EntityId,
    /// Kind of the rejected component.
    pub kind: ComponentKind,
}

/// Addressable container which holds at most one component per kind.
///
/// Entities are created and destroyed only by the [`World`](crate::World).
///
pub struct Entity {
    id: EntityId,
    name: String,
    active: bool,
    /// Attached components; `None` while the component runs its own update.
    components: HashMap<ComponentKind, Option<Box<dyn ErasedComponent>>>,
    /// Kinds of attached components in attachment order.
    order: Vec<ComponentKind>,
}

impl Entity {
    pub(crate) fn new(id: EntityId, name: String) -> Self {
        Self {
            id,
            name,
            active: true,
            components: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Unique identifier of this entity.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Human-readable name of this entity, not necessarily unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// If this entity takes part in updates.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Attaches component of type `T` to this entity.
    ///
    /// Returns a mutable reference to the attached component.
    ///
    /// # Errors
    ///
    /// An error is returned if a component of the same kind is already attached.
    /// In that case the entity is left untouched.
    ///
    pub fn add_component<T>(&mut self, component: T) -> Result<&mut T, DuplicateComponent>
    where
        T: Component,
    {
        let duplicate = DuplicateComponent {
            entity: self.id,
            kind: T::KIND,
        };
        let Entry::Vacant(entry) = self.components.entry(T::KIND) else {
            return Err(duplicate);
        };
        self.order.push(T::KIND);

        let component: Box<dyn ErasedComponent> = Box::new(component);
        let stored = entry.insert(None).insert(component);
        stored.on_attach(self.id);
        log::trace!("component `{}` attached to entity {}", T::KIND, self.id);

        // The slot holds a `T`, the downcast never fails.
        stored.as_any_mut().downcast_mut().ok_or(duplicate)
    }

    /// Retrieves an immutable reference to the component of type `T`, if any.
    pub fn get_component<T>(&self) -> Option<&T>
    where
        T: Component,
    {
        let component = self.components.get(&T::KIND)?.as_ref()?;
        component.as_any().downcast_ref()
    }

    /// Retrieves a mutable reference to the component of type `T`, if any.
    pub fn get_component_mut<T>(&mut self) -> Option<&mut T>
    where
        T: Component,
    {
        let component = self.components.get_mut(&T::KIND)?.as_mut()?;
        component.as_any_mut().downcast_mut()
    }

    /// Returns `true` if component of type `T` is attached to this entity.
    pub fn has_component<T>(&self) -> bool
    where
        T: Component,
    {
        self.has_kind(T::KIND)
    }

    /// Returns `true` if component of the given kind is attached to this entity.
    pub fn has_kind(&self, kind: ComponentKind) -> bool {
        self.components.contains_key(&kind)
    }

    /// Detaches component of type `T` and drops it.
    ///
    /// Returns `false` if there was no such component.
    ///
    pub fn remove_component<T>(&mut self) -> bool
    where
        T: Component,
    {
        self.remove_kind(T::KIND)
    }

    /// Detaches component of the given kind and drops it.
    ///
    /// Returns `false` if there was no such component.
    ///
    pub fn remove_kind(&mut self, kind: ComponentKind) -> bool {
        let Some(slot) = self.components.remove(&kind) else {
            return false;
        };
        self.order.retain(|attached| *attached != kind);
        // Checked out components are detached once their update returns.
        if let Some(mut component) = slot {
            component.on_detach(self.id);
            log::trace!("component `{}` detached from entity {}", kind, self.id);
        }
        true
    }

    /// Updates components of this entity, if it is active.
    ///
    /// Only components attached at the start of the call are visited, in
    /// attachment order. Components attached during the call wait for the next
    /// one; components detached before their turn are skipped.
    ///
    pub fn update(&mut self, delta_time: f32) {
        if !self.active {
            return;
        }
        let snapshot = self.order.clone();
        for kind in snapshot {
            let checked_out = self.components.get_mut(&kind).and_then(Option::take);
            let Some(mut component) = checked_out else {
                continue;
            };
            component.update(self, delta_time);

            match self.components.get_mut(&kind) {
                Some(slot) if slot.is_none() => *slot = Some(component),
                _ => {
                    // Detached itself during the update.
                    component.on_detach(self.id);
                    log::trace!("component `{}` detached from entity {}", kind, self.id);
                }
            }
        }
    }

    /// Returns iterator over attached components in attachment order.
    ///
    /// A component which is running its own update is not yielded.
    ///
    pub fn components(&self) -> impl Iterator<Item = (ComponentKind, &dyn Any)> + '_ {
        self.order.iter().filter_map(move |kind| {
            let component = self.components.get(kind)?.as_ref()?;
            Some((*kind, component.as_any()))
        })
    }

    /// Returns iterator over kinds of attached components in attachment order.
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.order.iter().copied()
    }

    /// Count of attached components.
    pub fn component_count(&self) -> usize {
        self.order.len()
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("active", &self.active)
            .field("components", &self.order)
            .finish()
    }
}
