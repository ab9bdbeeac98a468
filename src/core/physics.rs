use bevy::{ecs::system::SystemParam, prelude::*};
use bevy_rapier2d::prelude::*;

use crate::config::ConfigLoaded;
use crate::player::components::PassThroughFloor;

/// Group for walkable surfaces. The ground probe only looks at this group.
pub const GROUND_GROUP: Group = Group::GROUP_1;

pub fn ground_collision_groups() -> CollisionGroups {
  CollisionGroups::new(GROUND_GROUP, Group::ALL)
}

#[derive(Resource)]
pub struct GravityConfig {
  pub value: f32,
}

/// Contact-pair filter that lets the player fall through exactly the surface
/// recorded in its `PassThroughFloor`, leaving all other contacts solid.
#[derive(SystemParam)]
pub struct DropThroughHooks<'w, 's> {
  pass_through: Query<'w, 's, &'static PassThroughFloor>,
}

impl BevyPhysicsHooks for DropThroughHooks<'_, '_> {
  fn filter_contact_pair(&self, context: PairFilterContextView) -> Option<SolverFlags> {
    let ignored = self
      .pass_through
      .get(context.collider1())
      .is_ok_and(|p| p.surface == context.collider2())
      || self
        .pass_through
        .get(context.collider2())
        .is_ok_and(|p| p.surface == context.collider1());

    if ignored {
      None
    } else {
      Some(SolverFlags::COMPUTE_IMPULSES)
    }
  }
}

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(RapierPhysicsPlugin::<DropThroughHooks>::default().with_length_unit(1.0))
      .add_systems(Startup, setup_gravity)
      .add_systems(Update, sync_rapier_gravity);
  }
}

fn setup_gravity(mut commands: Commands, config: Res<ConfigLoaded>) {
  commands.insert_resource(GravityConfig {
    value: config.physics.gravity,
  });
}

/// Pushes `GravityConfig` into the rapier context whenever it changes
/// (startup and config hot-reload).
fn sync_rapier_gravity(
  gravity: Res<GravityConfig>,
  mut rapier_config: Query<&mut RapierConfiguration>,
) {
  if gravity.is_changed() {
    for mut config in &mut rapier_config {
      config.gravity = Vec2::NEG_Y * gravity.value;
    }
  }
}
