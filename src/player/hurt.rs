use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Facing, HurtState, MoveInput, Player, PlayerMovementConfig};

/// Published by hazard overlap detection; consumed here. Signals arriving
/// during an active knockback are dropped without any side effect.
#[derive(Message, Debug, Clone, Copy)]
pub struct PlayerDamaged;

/// Frame tick: enters the hurt state on the first damage signal. Entry zeros
/// movement and velocity, then applies a single impulse away from facing
/// with an upward component.
pub fn apply_damage(
  mut damage: MessageReader<PlayerDamaged>,
  mut players: Query<
    (
      &mut HurtState,
      &mut MoveInput,
      &mut Velocity,
      &mut ExternalImpulse,
      &Facing,
      &PlayerMovementConfig,
    ),
    With<Player>,
  >,
) {
  let hit = !damage.is_empty();
  damage.clear();
  if !hit {
    return;
  }

  for (mut hurt, mut input, mut velocity, mut impulse, facing, config) in &mut players {
    if hurt.is_hurting() {
      debug!("damage ignored: invulnerability window active");
      continue;
    }

    input.0 = 0.0;
    velocity.linvel = Vec2::ZERO;
    impulse.impulse = Vec2::new(
      -facing.sign() * config.knockback_force,
      config.knockback_force * 0.8,
    );
    hurt.begin(config.knockback_duration);
    info!("player hurt, knocked back");
  }
}

/// Frame tick: winds down the recovery window. Control returns exactly once
/// per knockback, no matter how many damage signals were dropped meanwhile.
pub fn tick_hurt_recovery(time: Res<Time>, mut players: Query<&mut HurtState, With<Player>>) {
  for mut hurt in &mut players {
    if hurt.tick(time.delta()) {
      debug!("hurt recovery complete");
    }
  }
}
