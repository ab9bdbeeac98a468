pub mod components;
pub mod hurt;
pub mod interact;
pub mod movement;
mod spawn;


use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::scene::GameState;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_message::<hurt::PlayerDamaged>()
      .add_message::<interact::InteractPressed>()
      .add_systems(OnEnter(GameState::Playing), spawn::spawn_player)
      .add_systems(OnExit(GameState::Playing), spawn::despawn_player)
      // Frame tick: input sampling, interaction, timed recoveries, and the
      // flags the animation collaborator reads.
      .add_systems(
        Update,
        (
          movement::sample_move_input,
          movement::queue_jump_intents,
          interact::read_interact_input,
          interact::track_interact_range,
          interact::handle_interact,
          hurt::apply_damage,
          hurt::tick_hurt_recovery,
          movement::tick_pass_through,
          movement::update_animation_state,
          movement::apply_facing,
        )
          .chain()
          .run_if(in_state(GameState::Playing)),
      )
      // Physics tick: velocity writes before the rapier step, ground probe
      // after writeback so it sees fresh positions.
      .add_systems(
        FixedUpdate,
        (movement::apply_horizontal_velocity, movement::apply_jump)
          .chain()
          .before(PhysicsSet::SyncBackend)
          .run_if(in_state(GameState::Playing)),
      )
      .add_systems(
        FixedUpdate,
        movement::ground_probe
          .after(PhysicsSet::Writeback)
          .run_if(in_state(GameState::Playing)),
      );
  }
}
