mod plugin;

use bevy::{asset::Asset, prelude::*, reflect::TypePath};
pub use plugin::{CONFIG_PATH, ConfigPlugin};
use serde::Deserialize;

#[derive(Asset, TypePath, Deserialize, Debug, Clone)]
pub struct GameConfig {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub physics: PhysicsConfig,
  pub player: PlayerConfig,
  pub kitchen: KitchenConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
  pub width: u32,
  pub height: u32,
  pub title: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CameraConfig {
  pub viewport_width: f32,
  pub viewport_height: f32,
  pub follow_speed: f32,
  pub offset: [f32; 2],
}

#[derive(Deserialize, Debug, Clone)]
pub struct PhysicsConfig {
  pub gravity: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayerConfig {
  pub spawn_x: f32,
  pub spawn_y: f32,
  pub collider_radius: f32,
  pub collider_length: f32,
  pub move_speed: f32,
  pub jump_speed: f32,
  pub ground_check_distance: f32,
  pub knockback_force: f32,
  pub knockback_duration: f32,
  pub drop_through_duration: f32,
  /// Local offset where a carried item sits, relative to the player.
  /// Optional in the file; missing values fall back to above-the-head.
  #[serde(default = "default_hold_offset")]
  pub hold_offset: [f32; 2],
  pub sprite: String,
}

fn default_hold_offset() -> [f32; 2] {
  [0.0, 1.5]
}

#[derive(Deserialize, Debug, Clone)]
pub struct KitchenConfig {
  pub capacity: usize,
}

#[derive(Resource)]
pub struct ConfigHandle(pub Handle<GameConfig>);

#[derive(Resource, Debug, Clone)]
pub struct ConfigLoaded {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub physics: PhysicsConfig,
  pub player: PlayerConfig,
  pub kitchen: KitchenConfig,
}

impl From<GameConfig> for ConfigLoaded {
  fn from(config: GameConfig) -> Self {
    Self {
      window: config.window,
      camera: config.camera,
      physics: config.physics,
      player: config.player,
      kitchen: config.kitchen,
    }
  }
}
