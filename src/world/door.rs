use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::player::components::Player;

/// The door that hides the demon king.
#[derive(Component)]
pub struct Door;

/// Sensor in front of the door. W or E while in range opens it; one shot.
#[derive(Component)]
pub struct DoorTrigger {
  pub door: Entity,
  pub demon_king: Entity,
  pub player_in_range: bool,
}

#[derive(Component)]
pub struct DemonKing {
  pub eyes_open: Handle<Image>,
  pub eyes_closed: Handle<Image>,
  pub fade_in_speed: f32,
}

/// Alpha ramp from 0 to 1 after the reveal.
#[derive(Component)]
pub struct FadeIn;

#[derive(Component)]
pub struct Blink {
  pub timer: Timer,
  pub eyes_closed: bool,
}

const BLINK_CLOSED_SECS: f32 = 0.15;

fn next_open_duration() -> f32 {
  rand::rng().random_range(2.0..4.0)
}

pub fn track_door_range(
  mut collisions: MessageReader<CollisionEvent>,
  players: Query<(), With<Player>>,
  mut triggers: Query<(Entity, &mut DoorTrigger)>,
) {
  for event in collisions.read() {
    let (a, b, entered) = match event {
      CollisionEvent::Started(a, b, _) => (*a, *b, true),
      CollisionEvent::Stopped(a, b, _) => (*a, *b, false),
    };
    for (trigger_entity, mut trigger) in &mut triggers {
      let involved = (a == trigger_entity && players.contains(b))
        || (b == trigger_entity && players.contains(a));
      if involved {
        trigger.player_in_range = entered;
        if entered {
          info!("at the door, press W or E to enter");
        }
      }
    }
  }
}

/// Frame tick: opens the door. The door despawns, the demon king is
/// revealed, and the trigger despawns itself so the event cannot re-fire.
pub fn open_door_on_key(
  mut commands: Commands,
  keyboard: Res<ButtonInput<KeyCode>>,
  triggers: Query<(Entity, &DoorTrigger)>,
  mut kings: Query<(&mut Visibility, &mut Sprite), With<DemonKing>>,
) {
  let pressed =
    keyboard.just_pressed(KeyCode::KeyW) || keyboard.just_pressed(KeyCode::KeyE);
  if !pressed {
    return;
  }

  for (trigger_entity, trigger) in &triggers {
    if !trigger.player_in_range {
      continue;
    }
    info!("the door opens...");
    commands.entity(trigger.door).despawn();

    if let Ok((mut visibility, mut sprite)) = kings.get_mut(trigger.demon_king) {
      *visibility = Visibility::Inherited;
      sprite.color.set_alpha(0.0);
      commands.entity(trigger.demon_king).insert((
        FadeIn,
        Blink {
          timer: Timer::from_seconds(next_open_duration(), TimerMode::Once),
          eyes_closed: false,
        },
      ));
    }
    commands.entity(trigger_entity).despawn();
  }
}

pub fn fade_in_demon_king(
  mut commands: Commands,
  time: Res<Time>,
  mut kings: Query<(Entity, &DemonKing, &mut Sprite), With<FadeIn>>,
) {
  for (entity, king, mut sprite) in &mut kings {
    let alpha = sprite.color.alpha() + time.delta_secs() * king.fade_in_speed;
    if alpha >= 1.0 {
      sprite.color.set_alpha(1.0);
      commands.entity(entity).remove::<FadeIn>();
    } else {
      sprite.color.set_alpha(alpha);
    }
  }
}

/// Eyes open for a random 2-4 s stretch, closed for a fixed instant.
pub fn blink_demon_king(
  time: Res<Time>,
  mut kings: Query<(&DemonKing, &mut Blink, &mut Sprite)>,
) {
  for (king, mut blink, mut sprite) in &mut kings {
    blink.timer.tick(time.delta());
    if !blink.timer.is_finished() {
      continue;
    }
    if blink.eyes_closed {
      blink.eyes_closed = false;
      sprite.image = king.eyes_open.clone();
      blink.timer = Timer::from_seconds(next_open_duration(), TimerMode::Once);
    } else {
      blink.eyes_closed = true;
      sprite.image = king.eyes_closed.clone();
      blink.timer = Timer::from_seconds(BLINK_CLOSED_SECS, TimerMode::Once);
    }
  }
}
