use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::player::components::Player;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
  #[default]
  Playing,
  GameOver,
}

/// In-range trigger that moves to another scene when the interact key is
/// pressed. Reads the keyboard directly; it is not part of the player's
/// input context.
#[derive(Component)]
pub struct SceneGate {
  pub target: GameState,
  pub player_in_range: bool,
}

/// Marker for the game-over screen entities.
#[derive(Component)]
struct GameOverScreen;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
  fn build(&self, app: &mut App) {
    app
      .init_state::<GameState>()
      .add_systems(
        Update,
        (track_gate_range, activate_gate).run_if(in_state(GameState::Playing)),
      )
      .add_systems(OnEnter(GameState::GameOver), spawn_game_over_screen)
      .add_systems(OnExit(GameState::GameOver), despawn_game_over_screen)
      .add_systems(
        Update,
        restart_on_key.run_if(in_state(GameState::GameOver)),
      );
  }
}

fn track_gate_range(
  mut collisions: MessageReader<CollisionEvent>,
  players: Query<(), With<Player>>,
  mut gates: Query<(Entity, &mut SceneGate)>,
) {
  for event in collisions.read() {
    let (a, b, entered) = match event {
      CollisionEvent::Started(a, b, _) => (*a, *b, true),
      CollisionEvent::Stopped(a, b, _) => (*a, *b, false),
    };
    for (gate_entity, mut gate) in &mut gates {
      let involved = (a == gate_entity && players.contains(b))
        || (b == gate_entity && players.contains(a));
      if involved {
        gate.player_in_range = entered;
      }
    }
  }
}

fn activate_gate(
  keyboard: Res<ButtonInput<KeyCode>>,
  gates: Query<&SceneGate>,
  mut next_state: ResMut<NextState<GameState>>,
) {
  if !keyboard.just_pressed(KeyCode::KeyF) {
    return;
  }
  for gate in &gates {
    if gate.player_in_range {
      info!("scene gate activated");
      next_state.set(gate.target);
      return;
    }
  }
}

fn spawn_game_over_screen(mut commands: Commands) {
  commands.spawn((
    GameOverScreen,
    Node {
      width: Val::Percent(100.0),
      height: Val::Percent(100.0),
      align_items: AlignItems::Center,
      justify_content: JustifyContent::Center,
      flex_direction: FlexDirection::Column,
      row_gap: Val::Px(12.0),
      ..default()
    },
    children![
      (
        Text::new("GAME OVER"),
        TextFont {
          font_size: 64.0,
          ..default()
        },
        TextColor(Color::WHITE),
      ),
      (
        Text::new("press R to restart"),
        TextFont {
          font_size: 24.0,
          ..default()
        },
        TextColor(Color::srgb(0.7, 0.7, 0.7)),
      ),
    ],
  ));
}

fn despawn_game_over_screen(
  mut commands: Commands,
  screens: Query<Entity, With<GameOverScreen>>,
) {
  for entity in &screens {
    commands.entity(entity).despawn();
  }
}

fn restart_on_key(
  keyboard: Res<ButtonInput<KeyCode>>,
  mut next_state: ResMut<NextState<GameState>>,
) {
  if keyboard.just_pressed(KeyCode::KeyR) {
    info!("restarting");
    next_state.set(GameState::Playing);
  }
}
