use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::door::{DemonKing, Door, DoorTrigger};
use super::hazard::{FallZone, Spike};
use super::item::{Item, ItemMotion, MotionOrigin};
use super::kitchen::Kitchen;
use crate::config::ConfigLoaded;
use crate::core::ground_collision_groups;
use crate::scene::{GameState, SceneGate};

/// Everything spawned by the level, torn down on leaving Playing so a
/// restart starts clean.
#[derive(Component)]
pub struct LevelEntity;

const PLATFORM_COLOR: Color = Color::srgb(0.35, 0.28, 0.22);
const SPIKE_COLOR: Color = Color::srgb(0.75, 0.75, 0.8);
const KITCHEN_COLOR: Color = Color::srgb(0.9, 0.6, 0.2);

pub fn spawn_level(
  mut commands: Commands,
  config: Res<ConfigLoaded>,
  asset_server: Res<AssetServer>,
) {
  // Walkable surfaces. Every one of them can be dropped through, since the
  // pass-through filter keys on the exact stood-on collider.
  spawn_platform(&mut commands, Vec2::new(0.0, 0.0), Vec2::new(30.0, 1.0));
  spawn_platform(&mut commands, Vec2::new(6.0, 3.0), Vec2::new(5.0, 0.5));
  spawn_platform(&mut commands, Vec2::new(-6.0, 4.5), Vec2::new(4.0, 0.5));
  spawn_platform(&mut commands, Vec2::new(13.0, 6.0), Vec2::new(6.0, 0.5));
  spawn_platform(&mut commands, Vec2::new(20.0, 1.5), Vec2::new(6.0, 1.0));

  // Spikes on the main floor.
  for x in [9.5, 10.25] {
    commands.spawn((
      LevelEntity,
      Spike,
      Sprite::from_color(SPIKE_COLOR, Vec2::new(0.7, 0.6)),
      Transform::from_xyz(x, 0.8, 1.0),
      Collider::cuboid(0.35, 0.3),
      Sensor,
      ActiveEvents::COLLISION_EVENTS,
    ));
  }

  // Three ingredients with distinct patrols.
  spawn_item(
    &mut commands,
    &asset_server,
    "chili",
    1,
    "sprites/chili.png",
    Vec2::new(-3.5, 1.6),
    ItemMotion::Float {
      amplitude: 0.2,
      speed: 8.0,
    },
  );
  spawn_item(
    &mut commands,
    &asset_server,
    "mushroom",
    0,
    "sprites/mushroom.png",
    Vec2::new(5.0, 4.2),
    ItemMotion::Horizontal {
      distance: 2.0,
      speed: 2.0,
    },
  );
  let waypoints = [
    Vec2::new(11.0, 7.2),
    Vec2::new(14.0, 7.8),
    Vec2::new(16.0, 7.2),
  ];
  spawn_item(
    &mut commands,
    &asset_server,
    "ghost pepper",
    1,
    "sprites/ghost_pepper.png",
    // Teleporters start on their first waypoint.
    waypoints[0],
    ItemMotion::Teleport {
      points: waypoints,
      timer: Timer::from_seconds(1.0, TimerMode::Repeating),
      index: 0,
    },
  );

  // The kitchen, down by the player spawn.
  commands.spawn((
    LevelEntity,
    Kitchen::new(config.kitchen.capacity),
    Sprite::from_color(KITCHEN_COLOR, Vec2::new(2.4, 1.6)),
    Transform::from_xyz(-9.0, 1.3, 1.0),
    Collider::cuboid(1.2, 0.8),
    Sensor,
    ActiveEvents::COLLISION_EVENTS,
  ));

  // Out-of-bounds catcher, well below everything.
  commands.spawn((
    LevelEntity,
    FallZone,
    Transform::from_xyz(0.0, -14.0, 0.0),
    Collider::cuboid(60.0, 1.0),
    Sensor,
    ActiveEvents::COLLISION_EVENTS,
  ));

  // Exit gate at the far right end.
  commands.spawn((
    LevelEntity,
    SceneGate {
      target: GameState::GameOver,
      player_in_range: false,
    },
    Transform::from_xyz(24.5, 3.0, 0.0),
    Collider::cuboid(0.8, 1.5),
    Sensor,
    ActiveEvents::COLLISION_EVENTS,
  ));

  // The demon king's door, and the king himself, hidden until the door
  // event reveals him.
  let door = commands
    .spawn((
      LevelEntity,
      Door,
      Sprite::from_color(Color::srgb(0.3, 0.15, 0.1), Vec2::new(1.6, 2.6)),
      Transform::from_xyz(21.5, 3.3, 1.0),
    ))
    .id();
  let demon_king = commands
    .spawn((
      LevelEntity,
      DemonKing {
        eyes_open: asset_server.load("sprites/demon_king_open.png"),
        eyes_closed: asset_server.load("sprites/demon_king_closed.png"),
        fade_in_speed: 1.0,
      },
      Sprite {
        image: asset_server.load("sprites/demon_king_open.png"),
        custom_size: Some(Vec2::new(2.2, 3.0)),
        ..default()
      },
      Transform::from_xyz(21.5, 3.6, 0.5),
      Visibility::Hidden,
    ))
    .id();
  commands.spawn((
    LevelEntity,
    DoorTrigger {
      door,
      demon_king,
      player_in_range: false,
    },
    Transform::from_xyz(21.5, 2.8, 0.0),
    Collider::cuboid(1.4, 1.2),
    Sensor,
    ActiveEvents::COLLISION_EVENTS,
  ));
}

pub fn despawn_level(mut commands: Commands, entities: Query<Entity, With<LevelEntity>>) {
  for entity in &entities {
    commands.entity(entity).despawn();
  }
}

fn spawn_platform(commands: &mut Commands, center: Vec2, size: Vec2) {
  commands.spawn((
    LevelEntity,
    Sprite::from_color(PLATFORM_COLOR, size),
    Transform::from_xyz(center.x, center.y, 0.0),
    RigidBody::Fixed,
    Collider::cuboid(size.x / 2.0, size.y / 2.0),
    ground_collision_groups(),
  ));
}

fn spawn_item(
  commands: &mut Commands,
  asset_server: &AssetServer,
  name: &str,
  value: u8,
  sprite: &str,
  position: Vec2,
  motion: ItemMotion,
) {
  commands.spawn((
    LevelEntity,
    Item {
      name: name.to_string(),
      value,
      sprite: sprite.to_string(),
    },
    Sprite {
      image: asset_server.load(sprite.to_string()),
      custom_size: Some(Vec2::splat(0.8)),
      ..default()
    },
    Transform::from_xyz(position.x, position.y, 1.0),
    MotionOrigin(position),
    motion,
    Collider::ball(0.5),
    Sensor,
    ActiveEvents::COLLISION_EVENTS,
  ));
}
