use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{
  AnimationState, Facing, GroundState, HurtState, JumpIntent, MoveInput, PassThroughFloor, Player,
  PlayerMovementConfig, Possession,
};
use crate::core::GROUND_GROUP;
use crate::input::{Jump, JumpDown, Move, PlayerInput};

/// Tracks which one-shot actions already fired during the current press.
#[derive(Default)]
pub struct PressLatch {
  jump_held: bool,
  drop_held: bool,
}

impl PressLatch {
  /// One edge per press. The latch engages on every press, including a
  /// rejected one, so a key held down through the hurt window cannot fire a
  /// deferred intent on the first frame after recovery.
  pub fn press(held: &mut bool, state: &ActionState, hurting: bool) -> bool {
    match state {
      ActionState::Fired => {
        if std::mem::replace(held, true) {
          false
        } else {
          !hurting
        }
      }
      ActionState::None => {
        *held = false;
        false
      }
      _ => false,
    }
  }
}

/// Frame tick: samples the horizontal axis and flips facing. Axis is forced
/// to zero while hurting so knockback is not fought by held keys.
pub fn sample_move_input(
  mut players: Query<
    (
      &Actions<PlayerInput>,
      &mut MoveInput,
      &mut Facing,
      &HurtState,
    ),
    With<Player>,
  >,
  move_actions: Query<(&Action<Move>, &ActionState)>,
) {
  for (actions, mut input, mut facing, hurt) in &mut players {
    if hurt.is_hurting() {
      input.0 = 0.0;
      continue;
    }

    let mut axis = 0.0;
    for action_entity in actions.iter() {
      if let Ok((action, action_state)) = move_actions.get(action_entity) {
        if matches!(action_state, ActionState::Fired | ActionState::Ongoing) {
          axis = **action;
        }
      }
    }
    input.0 = axis;

    let flipped = facing.flipped_by(axis);
    if flipped != *facing {
      *facing = flipped;
    }
  }
}

/// Frame tick: latches jump / jump-down edges for the next physics tick.
/// One action per press; the latch resets when the key is released.
pub fn queue_jump_intents(
  mut players: Query<(&Actions<PlayerInput>, &mut JumpIntent, &HurtState), With<Player>>,
  jump_states: Query<&ActionState, With<Action<Jump>>>,
  drop_states: Query<&ActionState, With<Action<JumpDown>>>,
  mut latch: Local<PressLatch>,
) {
  for (actions, mut intent, hurt) in &mut players {
    for action_entity in actions.iter() {
      if let Ok(state) = jump_states.get(action_entity) {
        if PressLatch::press(&mut latch.jump_held, state, hurt.is_hurting()) {
          intent.jump = true;
        }
      }
      if let Ok(state) = drop_states.get(action_entity) {
        if PressLatch::press(&mut latch.drop_held, state, hurt.is_hurting()) {
          intent.drop = true;
        }
      }
    }
  }
}

/// Physics tick: writes the horizontal velocity, leaving the vertical
/// component to gravity, jumps and knockback.
pub fn apply_horizontal_velocity(
  mut players: Query<
    (&MoveInput, &PlayerMovementConfig, &mut Velocity, &HurtState),
    With<Player>,
  >,
) {
  for (input, config, mut velocity, hurt) in &mut players {
    if hurt.is_hurting() {
      continue;
    }
    velocity.linvel.x = input.0 * config.move_speed;
  }
}

/// Physics tick: consumes the latched jump/jump-down intents. Jump only when
/// grounded; jump-down additionally needs a known stood-on surface.
pub fn apply_jump(
  mut commands: Commands,
  mut players: Query<
    (
      Entity,
      &mut JumpIntent,
      &GroundState,
      &PlayerMovementConfig,
      &mut Velocity,
      &HurtState,
    ),
    With<Player>,
  >,
) {
  for (entity, mut intent, ground, config, mut velocity, hurt) in &mut players {
    let jump = std::mem::take(&mut intent.jump);
    let drop = std::mem::take(&mut intent.drop);

    if hurt.is_hurting() {
      continue;
    }

    if jump {
      if ground.grounded {
        velocity.linvel.y = config.jump_speed;
      } else {
        debug!("jump rejected: airborne");
      }
    }

    if drop {
      match (ground.grounded, ground.surface) {
        (true, Some(surface)) => {
          commands.entity(entity).insert(PassThroughFloor {
            surface,
            timer: Timer::from_seconds(config.drop_through_duration, TimerMode::Once),
          });
        }
        _ => debug!("jump-down rejected: no stood-on surface"),
      }
    }
  }
}

/// Frame tick: winds down the drop-through window and restores collision
/// with the surface when it elapses.
pub fn tick_pass_through(
  mut commands: Commands,
  time: Res<Time>,
  mut players: Query<(Entity, &mut PassThroughFloor), With<Player>>,
) {
  for (entity, mut pass_through) in &mut players {
    pass_through.timer.tick(time.delta());
    if pass_through.timer.is_finished() {
      commands.entity(entity).remove::<PassThroughFloor>();
    }
  }
}

/// Physics tick, after rapier writeback: one downward ray against the ground
/// group, excluding the player's own collider.
pub fn ground_probe(
  rapier_context: ReadRapierContext,
  mut players: Query<(Entity, &Transform, &PlayerMovementConfig, &mut GroundState), With<Player>>,
) {
  let Ok(context) = rapier_context.single() else {
    return;
  };

  for (entity, transform, config, mut ground) in &mut players {
    let origin = transform.translation.truncate();
    // Sensors carry default groups and would pass the group test; overlap
    // volumes are never ground.
    let filter = QueryFilter::default()
      .exclude_sensors()
      .exclude_collider(entity)
      .groups(CollisionGroups::new(Group::ALL, GROUND_GROUP));

    let hit = context.cast_ray(
      origin,
      Vec2::NEG_Y,
      config.ground_check_distance,
      true,
      filter,
    );

    ground.grounded = hit.is_some();
    ground.surface = hit.map(|(surface, _toi)| surface);
  }
}

/// Frame tick: refreshes what the animation collaborator reads.
pub fn update_animation_state(
  mut players: Query<
    (
      &MoveInput,
      &GroundState,
      &HurtState,
      &Possession,
      &Facing,
      &mut AnimationState,
    ),
    With<Player>,
  >,
) {
  for (input, ground, hurt, possession, facing, mut anim) in &mut players {
    anim.speed = input.0.abs();
    anim.airborne = !ground.grounded;
    anim.holding = possession.carrying.is_some();
    anim.hurt = hurt.is_hurting();
    anim.facing = *facing;
  }
}

/// Frame tick: mirrors the sprite to match facing. Visual only.
pub fn apply_facing(mut players: Query<(&Facing, &mut Sprite), With<Player>>) {
  for (facing, mut sprite) in &mut players {
    sprite.flip_x = *facing == Facing::Left;
  }
}
