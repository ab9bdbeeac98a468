pub mod door;
pub mod hazard;
pub mod item;
pub mod kitchen;
mod level;

use bevy::prelude::*;
pub use level::LevelEntity;

use crate::scene::GameState;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_message::<kitchen::KitchenSlotsChanged>()
      .add_message::<kitchen::DishCooked>()
      .add_systems(OnEnter(GameState::Playing), level::spawn_level)
      .add_systems(OnExit(GameState::Playing), level::despawn_level)
      .add_systems(
        Update,
        (
          item::animate_items,
          kitchen::log_kitchen_activity,
          hazard::detect_spike_contact,
          hazard::detect_fall_zone,
          door::track_door_range,
          door::open_door_on_key,
          door::fade_in_demon_king,
          door::blink_demon_king,
        )
          .run_if(in_state(GameState::Playing)),
      );
  }
}
