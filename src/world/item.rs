use bevy::prelude::*;

/// A pickable ingredient. `value` feeds the kitchen's taste evaluation.
#[derive(Component, Debug, Clone)]
pub struct Item {
  pub name: String,
  /// 0 or 1; summed mod 3 when a dish is cooked.
  pub value: u8,
  pub sprite: String,
}

/// Present while the item is carried. Suspends patrol motion; the collider
/// is disabled separately at pickup.
#[derive(Component)]
pub struct Held;

/// World position the patrol moves around, captured at spawn.
#[derive(Component)]
pub struct MotionOrigin(pub Vec2);

/// Patrol/idle motion for items sitting in the world.
#[derive(Component)]
pub enum ItemMotion {
  /// Gentle bob in place.
  Float { amplitude: f32, speed: f32 },
  Horizontal { distance: f32, speed: f32 },
  Vertical { distance: f32, speed: f32 },
  Circle { radius: f32, speed: f32 },
  /// Cycles 0 → 1 → 2 → 0 over the waypoints, one hop per interval.
  Teleport {
    points: [Vec2; 3],
    timer: Timer,
    index: usize,
  },
}

/// Frame tick: moves unheld items along their patrol. Held items keep
/// whatever local transform the pickup gave them.
pub fn animate_items(
  time: Res<Time>,
  mut items: Query<(&mut Transform, &MotionOrigin, &mut ItemMotion), (With<Item>, Without<Held>)>,
) {
  let now = time.elapsed_secs();
  for (mut transform, origin, mut motion) in &mut items {
    match &mut *motion {
      ItemMotion::Float { amplitude, speed } => {
        transform.translation.y = origin.0.y + (now * *speed).sin() * *amplitude;
      }
      ItemMotion::Horizontal { distance, speed } => {
        transform.translation.x = origin.0.x + (now * *speed).sin() * *distance;
      }
      ItemMotion::Vertical { distance, speed } => {
        transform.translation.y = origin.0.y + (now * *speed).sin() * *distance;
      }
      ItemMotion::Circle { radius, speed } => {
        let t = now * *speed;
        transform.translation.x = origin.0.x + t.cos() * *radius;
        transform.translation.y = origin.0.y + t.sin() * *radius;
      }
      ItemMotion::Teleport {
        points,
        timer,
        index,
      } => {
        timer.tick(time.delta());
        if timer.just_finished() {
          *index = (*index + 1) % points.len();
          let target = points[*index];
          transform.translation.x = target.x;
          transform.translation.y = target.y;
        }
      }
    }
  }
}
