//! E2E test for the spike → damage → knockback → recovery pipeline, from
//! overlap event to restored control.
//!
//! Run: cargo test --test hurt_recovery_e2e

use std::time::{Duration, Instant};

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::rapier::prelude::CollisionEventFlags;
use demons_kitchen::player::components::*;
use demons_kitchen::player::{hurt, movement};
use demons_kitchen::world::hazard::{self, Spike};

fn test_app() -> App {
  let mut app = App::new();
  app
    .add_plugins(MinimalPlugins)
    .add_message::<CollisionEvent>()
    .add_message::<hurt::PlayerDamaged>()
    .add_systems(
      Update,
      (
        hazard::detect_spike_contact,
        hurt::apply_damage,
        hurt::tick_hurt_recovery,
      )
        .chain(),
    );
  app
}

fn spawn_player(app: &mut App, facing: Facing) -> Entity {
  app
    .world_mut()
    .spawn((
      Player,
      PlayerMovementConfig {
        move_speed: 5.0,
        jump_speed: 7.0,
        ground_check_distance: 1.1,
        knockback_force: 5.0,
        knockback_duration: 0.3,
        drop_through_duration: 0.5,
        hold_offset: Vec2::new(0.0, 1.5),
      },
      MoveInput(1.0),
      facing,
      HurtState::default(),
      Velocity::linear(Vec2::new(5.0, 0.0)),
      ExternalImpulse::default(),
    ))
    .id()
}

#[test]
fn spike_contact_starts_knockback_opposite_facing() {
  let mut app = test_app();
  let player = spawn_player(&mut app, Facing::Left);
  let spike = app.world_mut().spawn(Spike).id();
  app.update();

  app.world_mut().write_message(CollisionEvent::Started(
    spike,
    player,
    CollisionEventFlags::SENSOR,
  ));
  app.update();

  let world = app.world();
  assert!(world.get::<HurtState>(player).unwrap().is_hurting());
  assert_eq!(
    world.get::<MoveInput>(player).unwrap().0,
    0.0,
    "movement axis is forced to zero on entry"
  );
  assert_eq!(
    world.get::<ExternalImpulse>(player).unwrap().impulse,
    Vec2::new(5.0, 4.0),
    "facing left: knocked right, 0.8x force upward"
  );
}

#[test]
fn repeated_spike_hits_cause_one_knockback_and_one_recovery() {
  let mut app = test_app();
  let player = spawn_player(&mut app, Facing::Right);
  let spike = app.world_mut().spawn(Spike).id();
  app.update();

  app.world_mut().write_message(CollisionEvent::Started(
    player,
    spike,
    CollisionEventFlags::SENSOR,
  ));
  app.update();
  app
    .world_mut()
    .get_mut::<ExternalImpulse>(player)
    .unwrap()
    .impulse = Vec2::ZERO;

  // Keep hitting spikes for most of the 0.3s recovery window.
  let start = Instant::now();
  while start.elapsed() < Duration::from_millis(200) {
    app.world_mut().write_message(CollisionEvent::Started(
      player,
      spike,
      CollisionEventFlags::SENSOR,
    ));
    app.update();
    assert_eq!(
      app
        .world()
        .get::<ExternalImpulse>(player)
        .unwrap()
        .impulse,
      Vec2::ZERO,
      "no knockback while invulnerable"
    );
    assert!(app.world().get::<HurtState>(player).unwrap().is_hurting());
  }

  // Stop hitting; once the window elapses control comes back, exactly once.
  while start.elapsed() < Duration::from_millis(450) {
    app.update();
  }
  assert!(
    !app
      .world()
      .get::<HurtState>(player)
      .unwrap()
      .is_hurting(),
    "recovery returns control after the window"
  );
}

#[test]
fn locomotion_does_not_fight_the_knockback() {
  let mut app = test_app();
  app.add_systems(Update, movement::apply_horizontal_velocity);
  let player = spawn_player(&mut app, Facing::Right);
  let spike = app.world_mut().spawn(Spike).id();
  app.update();

  app.world_mut().write_message(CollisionEvent::Started(
    player,
    spike,
    CollisionEventFlags::SENSOR,
  ));
  app.update();

  // Simulate the knockback in flight, with a held key re-asserting the axis.
  {
    let world = app.world_mut();
    world.get_mut::<Velocity>(player).unwrap().linvel = Vec2::new(-4.0, 3.0);
    world.get_mut::<MoveInput>(player).unwrap().0 = 1.0;
  }
  app.update();
  assert_eq!(
    app.world().get::<Velocity>(player).unwrap().linvel,
    Vec2::new(-4.0, 3.0),
    "velocity writes are suspended while hurting"
  );
}
