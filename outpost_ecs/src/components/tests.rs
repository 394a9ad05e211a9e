#![cfg(test)]

use crate::World;

use super::*;

fn approx_eq(left: f32, right: f32) -> bool {
    (left - right).abs() < 1e-4
}

#[test]
fn test_health_clamping() {
    let mut health = Health::new(100.0);
    health.take_damage(30.0);
    assert!(approx_eq(health.current(), 70.0));

    health.heal(500.0);
    assert!(approx_eq(health.current(), 100.0));

    health.take_damage(1000.0);
    assert!(approx_eq(health.current(), 0.0));
    assert!(!health.is_alive());

    assert!(approx_eq(Health::new(-5.0).max(), 1.0));
    assert_eq!(Health::new(50.0).to_string(), "Health: 50.0/50.0");
}

#[test]
fn test_inventory_stacking() {
    let mut inventory = Inventory::new(2);
    assert!(inventory.add_item("bandage", 2, 0.1));
    assert!(inventory.add_item("bandage", 3, 0.1));
    assert!(inventory.add_item("canteen", 1, 1.0));
    assert!(!inventory.add_item("rifle", 1, 4.5));
    assert!(inventory.add_item("canteen", 1, 1.0));

    assert_eq!(inventory.item_count(), 2);
    assert_eq!(inventory.items()[0].quantity, 5);
    assert!(approx_eq(inventory.total_weight(), 2.5));

    assert!(inventory.remove_item("canteen", 5));
    assert!(!inventory.remove_item("canteen", 1));
    assert_eq!(inventory.item_count(), 1);
}

#[test]
fn test_inventory_rejects_empty_stack() {
    let mut inventory = Inventory::new(1);
    assert!(!inventory.add_item("air", 0, 1.0));
    assert_eq!(inventory.item_count(), 0);
    assert!(inventory.add_item("rifle", 1, 4.5));
    assert!(!inventory.add_item("rifle", 0, 4.5));
    assert_eq!(inventory.items()[0].quantity, 1);
}

#[test]
fn test_inventory_stack_overflow() {
    let mut inventory = Inventory::default();
    assert!(inventory.add_item("ammo", u32::MAX, 0.01));
    assert!(!inventory.add_item("ammo", 1, 0.01));
    assert_eq!(inventory.items()[0].quantity, u32::MAX);
    assert_eq!(inventory.item_count(), 1);
}

#[test]
fn test_animation_progress() {
    let mut world = World::new();
    let entity = world.create_entity("zombie");
    entity.add_component(Animated::default()).unwrap();

    entity.update(0.75);
    entity.update(0.5);
    assert!(approx_eq(entity.get_component::<Animated>().unwrap().progress, 0.25));

    let animated = entity.get_component_mut::<Animated>().unwrap();
    animated.play("attack", false);
    entity.update(0.75);
    entity.update(0.5);
    let animated = entity.get_component::<Animated>().unwrap();
    assert!(approx_eq(animated.progress, 1.0));
    assert!(animated.is_finished());
}

#[test]
fn test_animation_reverse_playback() {
    let mut world = World::new();
    let entity = world.create_entity("zombie");
    let animated = entity.add_component(Animated::default()).unwrap();
    animated.speed = -1.0;

    entity.update(0.25);
    assert!(approx_eq(entity.get_component::<Animated>().unwrap().progress, 0.75));

    let animated = entity.get_component_mut::<Animated>().unwrap();
    animated.play("attack", false);
    entity.update(0.25);
    let animated = entity.get_component::<Animated>().unwrap();
    assert!(approx_eq(animated.progress, 0.0));
    assert!(!animated.is_finished());
}

#[test]
fn test_physics_moves_transform() {
    let mut world = World::new();
    let entity = world.create_entity("crate");
    entity.add_component(Transform::from_position(0.0, 10.0, 0.0)).unwrap();
    let physics = entity.add_component(Physics::default()).unwrap();
    physics.drag = 0.0;
    physics.apply_force([2.0, 0.0, 0.0]);

    entity.update(0.5);

    let transform = entity.get_component::<Transform>().unwrap();
    assert!(approx_eq(transform.position[0], 1.0));
    // v = -9.8 * 0.5, y = 10 + v * 0.5
    assert!(approx_eq(transform.position[1], 10.0 - 2.45));
    assert!(approx_eq(transform.position[2], 0.0));
}

#[test]
fn test_physics_without_transform() {
    let mut world = World::new();
    let entity = world.create_entity("ghost");
    entity.add_component(Physics::default()).unwrap();

    entity.update(1.0);
    assert!(entity.get_component::<Physics>().unwrap().velocity[1] < 0.0);
}
