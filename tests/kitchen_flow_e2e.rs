//! E2E test for the pickup → carry → drop → cook loop, driven entirely by
//! messages in a headless app.
//!
//! Run: cargo test --test kitchen_flow_e2e

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::rapier::prelude::CollisionEventFlags;
use demons_kitchen::player::components::*;
use demons_kitchen::player::{hurt, interact};
use demons_kitchen::world::item::{Held, Item};
use demons_kitchen::world::kitchen::{
  DishCooked, IngredientSlot, Kitchen, KitchenSlotsChanged, Taste,
};

#[derive(Resource, Default)]
struct CookedDishes(Vec<Taste>);

fn capture_dishes(mut dishes: MessageReader<DishCooked>, mut log: ResMut<CookedDishes>) {
  for dish in dishes.read() {
    log.0.push(dish.taste);
  }
}

fn test_app() -> App {
  let mut app = App::new();
  app
    .add_plugins(MinimalPlugins)
    .add_message::<CollisionEvent>()
    .add_message::<hurt::PlayerDamaged>()
    .add_message::<interact::InteractPressed>()
    .add_message::<KitchenSlotsChanged>()
    .add_message::<DishCooked>()
    .init_resource::<CookedDishes>()
    .add_systems(
      Update,
      (
        interact::track_interact_range,
        interact::handle_interact,
        capture_dishes,
      )
        .chain(),
    );
  app
}

fn spawn_player(app: &mut App) -> Entity {
  app
    .world_mut()
    .spawn((
      Player,
      PlayerMovementConfig {
        move_speed: 5.0,
        jump_speed: 7.0,
        ground_check_distance: 1.1,
        knockback_force: 5.0,
        knockback_duration: 0.5,
        drop_through_duration: 0.5,
        hold_offset: Vec2::new(0.0, 1.5),
      },
      HurtState::default(),
      Possession::default(),
      Transform::default(),
    ))
    .id()
}

fn spawn_item(app: &mut App, name: &str, value: u8) -> Entity {
  app
    .world_mut()
    .spawn((
      Item {
        name: name.into(),
        value,
        sprite: format!("sprites/{name}.png"),
      },
      Transform::default(),
    ))
    .id()
}

fn overlap(app: &mut App, a: Entity, b: Entity) {
  app
    .world_mut()
    .write_message(CollisionEvent::Started(a, b, CollisionEventFlags::SENSOR));
}

fn press_interact(app: &mut App) {
  app.world_mut().write_message(interact::InteractPressed);
}

#[test]
fn pickup_transfers_ownership() {
  let mut app = test_app();
  let player = spawn_player(&mut app);
  let chili = spawn_item(&mut app, "chili", 1);
  app.update();

  overlap(&mut app, player, chili);
  press_interact(&mut app);
  app.update();

  let world = app.world();
  let possession = world.get::<Possession>(player).unwrap();
  assert_eq!(possession.carrying, Some(chili));
  assert_eq!(possession.nearby_item, None, "candidate consumed by pickup");
  assert!(world.get::<Held>(chili).is_some(), "item motion suspended");
  assert!(
    world.get::<ColliderDisabled>(chili).is_some(),
    "item collision disabled while carried"
  );
  assert_eq!(
    world.get::<ChildOf>(chili).map(|c| c.parent()),
    Some(player),
    "item rides on the player"
  );
  assert_eq!(
    world.get::<Transform>(chili).unwrap().translation,
    Vec3::new(0.0, 1.5, 0.0),
    "item sits at the hold offset"
  );
}

#[test]
fn interact_with_nothing_in_range_is_a_noop() {
  let mut app = test_app();
  let player = spawn_player(&mut app);
  app.update();

  press_interact(&mut app);
  app.update();

  let possession = app.world().get::<Possession>(player).unwrap();
  assert_eq!(possession.carrying, None);
}

#[test]
fn drop_without_kitchen_keeps_the_item() {
  let mut app = test_app();
  let player = spawn_player(&mut app);
  let chili = spawn_item(&mut app, "chili", 1);
  app.update();

  overlap(&mut app, player, chili);
  press_interact(&mut app);
  app.update();

  // Not near a kitchen: drop attempt changes nothing.
  press_interact(&mut app);
  app.update();

  let possession = app.world().get::<Possession>(player).unwrap();
  assert_eq!(possession.carrying, Some(chili));
  assert!(app.world().get_entity(chili).is_ok());
}

#[test]
fn third_ingredient_cooks_the_dish() {
  let mut app = test_app();
  let player = spawn_player(&mut app);
  let chili = spawn_item(&mut app, "chili", 1);
  let kitchen = app.world_mut().spawn(Kitchen::new(3)).id();

  // Two ingredients already submitted: [1, 0].
  for value in [1, 0] {
    let outcome = app
      .world_mut()
      .get_mut::<Kitchen>(kitchen)
      .unwrap()
      .submit(IngredientSlot {
        value,
        sprite: String::new(),
      });
    assert!(outcome.accepted());
  }
  app.update();

  overlap(&mut app, player, chili);
  press_interact(&mut app);
  app.update();

  overlap(&mut app, player, kitchen);
  press_interact(&mut app);
  app.update();

  let world = app.world();
  assert_eq!(
    world.get::<Possession>(player).unwrap().carrying,
    None,
    "submitted item leaves the player's hands"
  );
  assert!(
    world.get_entity(chili).is_err(),
    "submitted item is destroyed"
  );
  assert_eq!(
    world.get::<Kitchen>(kitchen).unwrap().count(),
    0,
    "kitchen resets after cooking"
  );
  assert_eq!(
    world.resource::<CookedDishes>().0,
    vec![Taste::Salty],
    "[1, 0, 1] sums to 2 -> salty"
  );
}

#[test]
fn single_slot_kitchen_cooks_immediately() {
  let mut app = test_app();
  let player = spawn_player(&mut app);
  let chili = spawn_item(&mut app, "chili", 1);
  let kitchen = app.world_mut().spawn(Kitchen::new(1)).id();
  app.update();

  overlap(&mut app, player, chili);
  press_interact(&mut app);
  app.update();

  overlap(&mut app, player, kitchen);
  press_interact(&mut app);
  app.update();

  assert_eq!(app.world().get::<Possession>(player).unwrap().carrying, None);
  assert_eq!(app.world().resource::<CookedDishes>().0, vec![Taste::Spicy]);
}

#[test]
fn full_kitchen_rejects_and_player_keeps_item() {
  let mut app = test_app();
  let player = spawn_player(&mut app);
  let chili = spawn_item(&mut app, "chili", 1);
  // A closed kitchen never accepts; the drop must fail without any state
  // change on the player's side.
  let kitchen = app.world_mut().spawn(Kitchen::new(0)).id();
  app.update();

  overlap(&mut app, player, chili);
  press_interact(&mut app);
  app.update();

  overlap(&mut app, player, kitchen);
  press_interact(&mut app);
  app.update();

  let world = app.world();
  assert_eq!(
    world.get::<Possession>(player).unwrap().carrying,
    Some(chili),
    "rejected drop leaves the item with the carrier"
  );
  assert!(world.get_entity(chili).is_ok(), "item not destroyed");
  assert!(world.resource::<CookedDishes>().0.is_empty());
}
