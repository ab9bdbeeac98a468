use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{
  AnimationState, Facing, GroundState, HurtState, JumpIntent, MoveInput, Player,
  PlayerMovementConfig, Possession,
};
use crate::config::ConfigLoaded;
use crate::input::{PlayerInput, player_input_actions};

pub fn spawn_player(
  mut commands: Commands,
  config: Res<ConfigLoaded>,
  asset_server: Res<AssetServer>,
) {
  let player = &config.player;
  let half_height = player.collider_length / 2.0;

  commands.spawn((
    Player,
    Sprite {
      image: asset_server.load(&player.sprite),
      custom_size: Some(Vec2::new(0.9, 1.3)),
      ..default()
    },
    Transform::from_xyz(player.spawn_x, player.spawn_y, 10.0),
    (
      RigidBody::Dynamic,
      LockedAxes::ROTATION_LOCKED,
      Collider::capsule_y(half_height, player.collider_radius),
      Velocity::zero(),
      ExternalImpulse::default(),
      // Zero friction so walls don't grab the falling player.
      Friction {
        coefficient: 0.0,
        combine_rule: CoefficientCombineRule::Min,
      },
      ActiveEvents::COLLISION_EVENTS,
      ActiveHooks::FILTER_CONTACT_PAIRS,
    ),
    (
      PlayerMovementConfig {
        move_speed: player.move_speed,
        jump_speed: player.jump_speed,
        ground_check_distance: player.ground_check_distance,
        knockback_force: player.knockback_force,
        knockback_duration: player.knockback_duration,
        drop_through_duration: player.drop_through_duration,
        hold_offset: Vec2::from(player.hold_offset),
      },
      MoveInput::default(),
      Facing::default(),
      GroundState::default(),
      JumpIntent::default(),
      HurtState::default(),
      Possession::default(),
      AnimationState::default(),
    ),
    PlayerInput,
    player_input_actions(),
  ));
}

pub fn despawn_player(mut commands: Commands, players: Query<Entity, With<Player>>) {
  for entity in &players {
    // Recursive, so a carried item goes with the player.
    commands.entity(entity).despawn();
  }
}
