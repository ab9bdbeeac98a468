use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{HurtState, Player, PlayerMovementConfig, Possession};
use crate::input::{Interact, PlayerInput};
use crate::world::item::{Held, Item};
use crate::world::kitchen::{
  DishCooked, IngredientSlot, Kitchen, KitchenSlotsChanged, SubmitOutcome,
};

/// One interact key edge. Published on press, once per press.
#[derive(Message, Debug, Clone, Copy)]
pub struct InteractPressed;

/// Frame tick: turns the interact action edge into a message, one per press.
pub fn read_interact_input(
  players: Query<&Actions<PlayerInput>, With<Player>>,
  interact_states: Query<&ActionState, With<Action<Interact>>>,
  mut presses: MessageWriter<InteractPressed>,
  mut held: Local<bool>,
) {
  for actions in &players {
    for action_entity in actions.iter() {
      if let Ok(state) = interact_states.get(action_entity) {
        match state {
          ActionState::Fired => {
            if !*held {
              *held = true;
              presses.write(InteractPressed);
            }
          }
          ActionState::None => *held = false,
          _ => {}
        }
      }
    }
  }
}

/// Frame tick: keeps the pickup candidate and drop target in sync with
/// sensor overlap events. Matching is by entity identity so a stale exit can
/// never clear state belonging to a different, still-present object.
pub fn track_interact_range(
  mut collisions: MessageReader<CollisionEvent>,
  mut players: Query<(Entity, &mut Possession), With<Player>>,
  items: Query<(), (With<Item>, Without<Held>)>,
  kitchens: Query<(), With<Kitchen>>,
) {
  let Ok((player, mut possession)) = players.single_mut() else {
    return;
  };

  for event in collisions.read() {
    let (a, b, entered) = match event {
      CollisionEvent::Started(a, b, _) => (*a, *b, true),
      CollisionEvent::Stopped(a, b, _) => (*a, *b, false),
    };
    let other = if a == player {
      b
    } else if b == player {
      a
    } else {
      continue;
    };

    if items.contains(other) {
      if entered {
        possession.item_entered(other);
        debug!("item in range: {other:?}");
      } else {
        possession.item_exited(other);
      }
    } else if kitchens.contains(other) {
      if entered {
        possession.kitchen_entered(other);
        debug!("kitchen in range");
      } else {
        possession.kitchen_exited(other);
      }
    }
  }
}

/// Frame tick: the single interact action. Carrying something means "try to
/// put it down", otherwise "try to pick something up". Rejected attempts
/// change no state.
pub fn handle_interact(
  mut commands: Commands,
  mut presses: MessageReader<InteractPressed>,
  mut players: Query<
    (Entity, &mut Possession, &HurtState, &PlayerMovementConfig),
    With<Player>,
  >,
  items: Query<&Item>,
  mut kitchens: Query<&mut Kitchen>,
  mut slots_changed: MessageWriter<KitchenSlotsChanged>,
  mut dishes: MessageWriter<DishCooked>,
) {
  let fired = !presses.is_empty();
  presses.clear();
  if !fired {
    return;
  }

  let Ok((player, mut possession, hurt, config)) = players.single_mut() else {
    return;
  };
  if hurt.is_hurting() {
    return;
  }

  match possession.carrying {
    Some(carried) => {
      let Some(kitchen_entity) = possession.nearby_kitchen else {
        info!("nowhere to put this down, find a kitchen");
        return;
      };
      let Ok(mut kitchen) = kitchens.get_mut(kitchen_entity) else {
        return;
      };
      let Ok(item) = items.get(carried) else {
        // Carried entity lost its item data; resolve ownership anyway so the
        // player is not stuck holding a ghost.
        warn!("carried item had no data, dropping it");
        commands.entity(carried).despawn();
        possession.carrying = None;
        return;
      };

      match kitchen.submit(IngredientSlot {
        value: item.value,
        sprite: item.sprite.clone(),
      }) {
        SubmitOutcome::Full => {
          info!("kitchen is full, keeping {}", item.name);
        }
        SubmitOutcome::Accepted => {
          info!("placed {} in the kitchen", item.name);
          slots_changed.write(KitchenSlotsChanged {
            kitchen: kitchen_entity,
            slots: kitchen.slot_states(),
          });
          commands.entity(carried).despawn();
          possession.carrying = None;
        }
        SubmitOutcome::Cooked { taste, consumed } => {
          // Show the briefly-full slots, then the cook result, then the
          // cleared slots, in submission order.
          slots_changed.write(KitchenSlotsChanged {
            kitchen: kitchen_entity,
            slots: consumed.iter().map(|s| Some(s.sprite.clone())).collect(),
          });
          dishes.write(DishCooked {
            kitchen: kitchen_entity,
            taste,
          });
          slots_changed.write(KitchenSlotsChanged {
            kitchen: kitchen_entity,
            slots: kitchen.slot_states(),
          });
          commands.entity(carried).despawn();
          possession.carrying = None;
        }
      }
    }
    None => {
      let Some(item_entity) = possession.nearby_item else {
        debug!("nothing here to pick up");
        return;
      };
      let name = items
        .get(item_entity)
        .map(|item| item.name.clone())
        .unwrap_or_else(|_| "item".into());
      info!("picked up {name}");

      // Ownership transfer: the item stops moving and colliding on its own
      // and rides along above the player's head, still visible.
      commands.entity(item_entity).insert((
        Held,
        ColliderDisabled,
        ChildOf(player),
        Transform::from_translation(config.hold_offset.extend(0.0)),
      ));
      possession.carrying = Some(item_entity);
      possession.nearby_item = None;
    }
  }
}
