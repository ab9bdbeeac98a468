use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::player::components::Player;
use crate::player::hurt::PlayerDamaged;
use crate::scene::GameState;

/// Touching one of these hurts the player.
#[derive(Component)]
pub struct Spike;

/// Falling in here ends the run.
#[derive(Component)]
pub struct FallZone;

pub fn detect_spike_contact(
  mut collisions: MessageReader<CollisionEvent>,
  players: Query<(), With<Player>>,
  spikes: Query<(), With<Spike>>,
  mut damage: MessageWriter<PlayerDamaged>,
) {
  for event in collisions.read() {
    let CollisionEvent::Started(a, b, _) = event else {
      continue;
    };
    let spiked = (players.contains(*a) && spikes.contains(*b))
      || (players.contains(*b) && spikes.contains(*a));
    if spiked {
      damage.write(PlayerDamaged);
    }
  }
}

pub fn detect_fall_zone(
  mut collisions: MessageReader<CollisionEvent>,
  players: Query<(), With<Player>>,
  zones: Query<(), With<FallZone>>,
  mut next_state: ResMut<NextState<GameState>>,
) {
  for event in collisions.read() {
    let CollisionEvent::Started(a, b, _) = event else {
      continue;
    };
    let fell = (players.contains(*a) && zones.contains(*b))
      || (players.contains(*b) && zones.contains(*a));
    if fell {
      info!("player fell out of the level");
      next_state.set(GameState::GameOver);
    }
  }
}
