use bevy::{camera::ScalingMode, prelude::*};

use crate::config::ConfigLoaded;
use crate::player::components::Player;

/// Marker component for the game camera
#[derive(Component)]
pub struct GameCamera;

pub fn setup_camera(mut commands: Commands, config: Res<ConfigLoaded>) {
  commands.spawn((
    GameCamera,
    Camera2d,
    Camera {
      order: 0,
      clear_color: ClearColorConfig::Custom(Color::BLACK),
      ..default()
    },
    Projection::Orthographic(OrthographicProjection {
      near: -1000.0,
      far: 1000.0,
      scale: 1.0,
      viewport_origin: Vec2::new(0.5, 0.5),
      scaling_mode: ScalingMode::AutoMin {
        min_width: config.camera.viewport_width,
        min_height: config.camera.viewport_height,
      },
      area: Rect::default(),
    }),
  ));
}

/// Smoothly trails the player. The exponential form keeps the smoothing
/// framerate-independent.
pub fn camera_follow(
  config: Res<ConfigLoaded>,
  time: Res<Time>,
  player_query: Query<&Transform, (With<Player>, Without<GameCamera>)>,
  mut camera_query: Query<&mut Transform, With<GameCamera>>,
) {
  let Ok(player_transform) = player_query.single() else {
    return;
  };
  let Ok(mut camera_transform) = camera_query.single_mut() else {
    return;
  };

  let offset = Vec2::from(config.camera.offset);
  let target = player_transform.translation.truncate() + offset;

  let t = 1.0 - (-config.camera.follow_speed * time.delta_secs()).exp();
  let current = camera_transform.translation.truncate();
  let next = current.lerp(target, t);
  camera_transform.translation.x = next.x;
  camera_transform.translation.y = next.y;
}
