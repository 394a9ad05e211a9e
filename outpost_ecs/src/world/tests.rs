#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Component, ComponentKind};

use super::*;

#[derive(Debug, PartialEq)]
struct Ticks(u32);

impl Component for Ticks {
    const KIND: ComponentKind = ComponentKind::new("ticks");

    fn update(&mut self, _owner: &mut Entity, _delta_time: f32) {
        self.0 += 1;
    }
}

fn record_events(world: &mut World) -> Rc<RefCell<Vec<String>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    world.subscribe(move |event| {
        let line = match event {
            WorldEvent::EntityAdded(entity) => format!("added:{}", entity.name()),
            WorldEvent::EntityRemoved(entity) => format!("removed:{}", entity.name()),
        };
        sink.borrow_mut().push(line);
    });
    events
}

#[test]
fn test_create_entity() {
    let mut world = World::new();
    let events = record_events(&mut world);

    let first = world.create_entity("zombie").id();
    let second = world.create_entity("zombie").id();

    assert_ne!(first, second);
    assert_eq!(world.entity_count(), 2);
    assert_eq!(world.get_entity(first).unwrap().name(), "zombie");
    assert_eq!(world.get_entity(first).unwrap().component_count(), 0);
    assert_eq!(*events.borrow(), ["added:zombie", "added:zombie"]);
}

#[test]
fn test_ids_are_unique_across_worlds() {
    let mut first = World::new();
    let mut second = World::new();

    let id = first.create_entity("a").id();
    let other = second.create_entity("a").id();

    assert_ne!(id, other);
    assert!(second.get_entity(id).is_none());
    assert!(first.get_entity(other).is_none());
    assert!(second.get_entity_mut(id).is_none());
    assert!(first.get_entity_mut(other).is_none());

    let events = record_events(&mut second);
    second.remove_entity(id);
    assert!(!second.is_pending_removal(other));
    assert!(events.borrow().is_empty());
    second.update(0.0);
    assert_eq!(second.entity_count(), 1);
    assert!(second.get_entity(other).is_some());
}

#[test]
fn test_get_entities_by_name() {
    let mut world = World::new();
    world.create_entity("zombie");
    world.create_entity("player");
    world.create_entity("zombie");

    assert_eq!(world.get_entities_by_name("zombie").count(), 2);
    assert_eq!(world.get_entities_by_name("player").count(), 1);
    assert_eq!(world.get_entities_by_name("wolf").count(), 0);
    assert_eq!(world.entities().count(), 3);
}

#[test]
fn test_remove_entity_is_deferred() {
    let mut world = World::new();
    let events = record_events(&mut world);

    let a = world.create_entity("a").id();
    world.create_entity("b");
    world.create_entity("c");

    world.remove_entity(a);
    assert_eq!(events.borrow().last().unwrap(), "removed:a");
    assert_eq!(world.entity_count(), 3);
    assert!(world.get_entity(a).is_some());
    assert!(world.is_pending_removal(a));

    world.update(0.016);
    assert_eq!(world.entity_count(), 2);
    assert!(world.get_entity(a).is_none());
    assert!(!world.is_pending_removal(a));
}

#[test]
fn test_removed_entity_is_not_updated() {
    let mut world = World::new();
    let doomed = world.create_entity("doomed");
    doomed.add_component(Ticks(0)).unwrap();
    let doomed = doomed.id();
    let survivor = world.create_entity("survivor");
    survivor.add_component(Ticks(0)).unwrap();
    let survivor = survivor.id();

    world.update(0.1);
    world.remove_entity(doomed);
    // Still alive and updatable until the next world update.
    world.get_entity_mut(doomed).unwrap().update(0.1);
    assert_eq!(
        world.get_entity(doomed).unwrap().get_component::<Ticks>(),
        Some(&Ticks(2))
    );

    world.update(0.1);
    assert!(world.get_entity(doomed).is_none());
    assert_eq!(
        world.get_entity(survivor).unwrap().get_component::<Ticks>(),
        Some(&Ticks(2))
    );
}

#[test]
fn test_remove_unknown_entity() {
    let mut world = World::new();
    let events = record_events(&mut world);
    let id = world.create_entity("a").id();

    world.remove_entity(id);
    world.update(0.0);
    events.borrow_mut().clear();

    world.remove_entity(id);
    assert!(events.borrow().is_empty());
    assert_eq!(world.entity_count(), 0);
}

#[test]
fn test_remove_entity_twice() {
    let mut world = World::new();
    let events = record_events(&mut world);
    let id = world.create_entity("a").id();

    world.remove_entity(id);
    world.remove_entity(id);
    assert_eq!(*events.borrow(), ["added:a", "removed:a"]);
}

#[test]
fn test_clear() {
    let mut world = World::new();
    let events = record_events(&mut world);
    let a = world.create_entity("a").id();
    world.create_entity("b");
    world.remove_entity(a);
    events.borrow_mut().clear();

    world.clear();
    assert_eq!(world.entity_count(), 0);
    assert!(!world.is_pending_removal(a));
    assert!(events.borrow().is_empty());

    world.create_entity("c");
    assert_eq!(world.entity_count(), 1);
}

#[test]
fn test_ids_are_not_reused() {
    let mut world = World::new();
    let old = world.create_entity("a").id();
    world.remove_entity(old);
    world.update(0.0);

    let new = world.create_entity("a").id();
    assert_ne!(old, new);
    assert!(world.get_entity(old).is_none());
}

#[test]
fn test_unsubscribe() {
    let mut world = World::new();
    let events = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&events);
    let id = world.subscribe(move |_| *sink.borrow_mut() += 1);

    world.create_entity("a");
    assert!(world.unsubscribe(id));
    world.create_entity("b");

    assert_eq!(*events.borrow(), 1);
    assert!(!world.unsubscribe(id));
}
