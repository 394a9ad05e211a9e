//! Demo driver of the Outpost game-object runtime

use std::error::Error;
use std::thread;

use outpost_core::config::Config;
use outpost_core::systems::WorldSystem;
use outpost_core::{EngineEvent, GameEngine};
use outpost_ecs::components::{Animated, Health, Inventory, Physics, Transform};
use outpost_ecs::{World, WorldEvent};

mod logger;

const APP_NAME: &str = env!("CARGO_CRATE_NAME", "binary must be compiled by Cargo");
const APP_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "binary must be compiled by Cargo");

/// Count of ticks to run when no count was passed on the command line.
const DEFAULT_FRAME_LIMIT: u64 = 180;

/// Entry point of `outpost` demo
fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let _handle = logger::init()?;
    log::info!("logger initialized successfully");

    let frame_limit = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_FRAME_LIMIT,
    };
    let config = Config::new(APP_NAME.to_string(), APP_VERSION_STR.parse()?)
        .with_frame_limit(Some(frame_limit));
    log::info!(
        "running on {} v{}",
        outpost_core::config::ENGINE_NAME,
        *outpost_core::config::ENGINE_VERSION,
    );

    let mut engine = GameEngine::with_config(config);
    engine.subscribe(|event| match event {
        EngineEvent::Initialized => log::debug!("initialized"),
        EngineEvent::Update(_) => {}
        EngineEvent::Shutdown => log::debug!("shut down"),
    });
    engine.register_system(WorldSystem::new(populate()?))?;

    engine.initialize()?;
    let frame_time = engine.config().frame_time();
    let mut frame = 0;
    while engine.is_running() && Some(frame) != engine.config().frame_limit() {
        engine.tick();
        frame += 1;

        if frame == frame_limit / 2 {
            despawn_dead(&mut engine);
        }
        if frame % 60 == 0 {
            report(&engine, frame);
        }
        thread::sleep(frame_time);
    }
    report(&engine, frame);
    engine.shutdown();
    Ok(())
}

/// Creates the world with a player and a zombie.
fn populate() -> Result<World, Box<dyn Error + Send + Sync + 'static>> {
    let mut world = World::new();
    world.subscribe(|event| match event {
        WorldEvent::EntityAdded(entity) => log::debug!("entity {} added", entity.name()),
        WorldEvent::EntityRemoved(entity) => log::debug!("entity {} removed", entity.name()),
    });

    let player = world.create_entity("player");
    player.add_component(Transform::from_position(0.0, 10.0, 0.0))?;
    player.add_component(Health::new(100.0))?;
    player.add_component(Animated::default())?;
    let physics = player.add_component(Physics::default())?;
    physics.apply_force([2.0, 0.0, 0.0]);
    let inventory = player.add_component(Inventory::default())?;
    inventory.add_item("bandage", 3, 0.1);
    inventory.add_item("canned_beans", 2, 0.4);

    let zombie = world.create_entity("zombie");
    zombie.add_component(Transform::from_position(5.0, 0.0, 5.0))?;
    let health = zombie.add_component(Health::new(50.0))?;
    health.take_damage(50.0);
    Ok(world)
}

/// Schedules every entity without health left for removal.
fn despawn_dead(engine: &mut GameEngine) {
    let Some(system) = engine.get_system_as_mut::<WorldSystem>(WorldSystem::NAME) else {
        return;
    };
    let world = system.world_mut();
    let dead: Vec<_> = world
        .entities()
        .filter(|entity| {
            entity
                .get_component::<Health>()
                .map_or(false, |health| !health.is_alive())
        })
        .map(|entity| entity.id())
        .collect();
    for id in dead {
        world.remove_entity(id);
    }
}

fn report(engine: &GameEngine, frame: u64) {
    let Some(system) = engine.get_system_as::<WorldSystem>(WorldSystem::NAME) else {
        return;
    };
    let world = system.world();
    log::info!(
        "frame {}: {} entities, delta time {:.4}s",
        frame,
        world.entity_count(),
        engine.delta_time(),
    );
    for entity in world.get_entities_by_name("player") {
        if let Some(transform) = entity.get_component::<Transform>() {
            log::info!("player at {:?}", transform.position);
        }
        if let Some(health) = entity.get_component::<Health>() {
            log::info!("player {}", health);
        }
        if let Some(inventory) = entity.get_component::<Inventory>() {
            log::info!("player carries {:.1} kg", inventory.total_weight());
        }
    }
}
