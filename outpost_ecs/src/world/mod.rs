//! Utilities for storage of entities.

use slotmap::{SecondaryMap, SlotMap};

use crate::entity::{Entity, EntityId, EntityKey, WorldId};
use crate::listener::{ListenerId, Listeners};

mod tests;

/// Notification about lifecycle of entities in the [`World`].
#[derive(Debug, Copy, Clone)]
pub enum WorldEvent<'a> {
    /// Emitted when the entity was created.
    EntityAdded(&'a Entity),

    /// Emitted when the entity was scheduled for removal.
    ///
    /// The entity is still alive until the next [`World::update`] call.
    ///
    EntityRemoved(&'a Entity),
}

/// Callback type for world notifications.
pub type WorldListener = dyn for<'a> FnMut(&WorldEvent<'a>);

/// Registry which owns all live entities.
pub struct World {
    id: WorldId,
    /// Storage for all live entities, including ones pending removal.
    entities: SlotMap<EntityKey, Entity>,
    /// Entities to be destroyed at the start of the next update.
    pending_removal: SecondaryMap<EntityKey, ()>,
    listeners: Listeners<WorldListener>,
}

impl World {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self {
            id: WorldId::next(),
            entities: SlotMap::with_key(),
            pending_removal: SecondaryMap::new(),
            listeners: Listeners::new(),
        }
    }

    /// Unique identifier of this world.
    pub fn id(&self) -> WorldId {
        self.id
    }

    /// Creates new entity with the given name.
    ///
    /// Listeners receive [`WorldEvent::EntityAdded`] before this method returns.
    ///
    pub fn create_entity(&mut self, name: impl Into<String>) -> &mut Entity {
        let world = self.id;
        let name = name.into();
        let key = self
            .entities
            .insert_with_key(|key| Entity::new(EntityId::new(world, key), name));

        let entity = &self.entities[key];
        log::debug!("entity {} \"{}\" created", entity.id(), entity.name());
        for listener in self.listeners.iter_mut() {
            listener(&WorldEvent::EntityAdded(entity));
        }
        &mut self.entities[key]
    }

    /// Retrieves an immutable reference to the entity, if it is alive.
    pub fn get_entity(&self, id: EntityId) -> Option<&Entity> {
        if id.world() != self.id {
            return None;
        }
        self.entities.get(id.key())
    }

    /// Retrieves a mutable reference to the entity, if it is alive.
    pub fn get_entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        if id.world() != self.id {
            return None;
        }
        self.entities.get_mut(id.key())
    }

    /// Returns iterator over all entities with the given name, in no particular order.
    pub fn get_entities_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Entity> {
        self.entities
            .values()
            .filter(move |entity| entity.name() == name)
    }

    /// Returns iterator over all live entities, in no particular order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Schedules the entity for removal at the start of the next update.
    ///
    /// Listeners receive [`WorldEvent::EntityRemoved`] right away.
    /// Does nothing if the entity is not alive or is already scheduled.
    ///
    pub fn remove_entity(&mut self, id: EntityId) {
        if id.world() != self.id || self.pending_removal.contains_key(id.key()) {
            return;
        }
        let Some(entity) = self.entities.get(id.key()) else {
            return;
        };
        self.pending_removal.insert(id.key(), ());

        log::debug!("entity {} \"{}\" scheduled for removal", id, entity.name());
        for listener in self.listeners.iter_mut() {
            listener(&WorldEvent::EntityRemoved(entity));
        }
    }

    /// Returns `true` if the entity is scheduled for removal.
    pub fn is_pending_removal(&self, id: EntityId) -> bool {
        id.world() == self.id && self.pending_removal.contains_key(id.key())
    }

    /// Destroys entities scheduled for removal, then updates the remaining ones.
    pub fn update(&mut self, delta_time: f32) {
        for (key, ()) in self.pending_removal.drain() {
            if let Some(entity) = self.entities.remove(key) {
                log::debug!("entity {} \"{}\" destroyed", entity.id(), entity.name());
            }
        }
        for entity in self.entities.values_mut() {
            entity.update(delta_time);
        }
    }

    /// Destroys all entities immediately, without notifying listeners.
    pub fn clear(&mut self) {
        log::debug!("world {} cleared of {} entities", self.id, self.entities.len());
        self.entities.clear();
        self.pending_removal.clear();
    }

    /// Count of live entities, including ones scheduled for removal.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Registers a listener of world notifications.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: for<'a> FnMut(&WorldEvent<'a>) + 'static,
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
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
