use bevy::prelude::*;

#[derive(Component)]
pub struct Player;

/// Tuning values copied out of `ConfigLoaded` at spawn so systems don't have
/// to reach back into the config resource every tick.
#[derive(Component, Clone)]
pub struct PlayerMovementConfig {
  pub move_speed: f32,
  pub jump_speed: f32,
  pub ground_check_distance: f32,
  pub knockback_force: f32,
  pub knockback_duration: f32,
  pub drop_through_duration: f32,
  pub hold_offset: Vec2,
}

/// Latest horizontal axis sample, in [-1, 1].
#[derive(Component, Default)]
pub struct MoveInput(pub f32);

#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
  Left,
  #[default]
  Right,
}

impl Facing {
  pub fn sign(self) -> f32 {
    match self {
      Facing::Left => -1.0,
      Facing::Right => 1.0,
    }
  }

  /// Facing flips only when a nonzero axis disagrees with it.
  pub fn flipped_by(self, axis: f32) -> Facing {
    match self {
      Facing::Right if axis < 0.0 => Facing::Left,
      Facing::Left if axis > 0.0 => Facing::Right,
      other => other,
    }
  }
}

/// Result of the downward ground probe, refreshed every physics tick.
#[derive(Component, Default)]
pub struct GroundState {
  pub grounded: bool,
  /// Collider the probe hit. Needed to drop through that exact surface.
  pub surface: Option<Entity>,
}

/// Jump/jump-down edges latched on the frame tick, consumed on the physics
/// tick so a short press between fixed steps is never lost.
#[derive(Component, Default)]
pub struct JumpIntent {
  pub jump: bool,
  pub drop: bool,
}

/// Knockback recovery state machine. While `Hurting`, movement input is
/// suppressed and jump/interact are rejected; further damage is ignored for
/// the whole window.
#[derive(Component, Default, Debug)]
pub enum HurtState {
  #[default]
  Normal,
  Hurting {
    timer: Timer,
  },
}

impl HurtState {
  pub fn is_hurting(&self) -> bool {
    matches!(self, HurtState::Hurting { .. })
  }

  pub fn begin(&mut self, duration: f32) {
    *self = HurtState::Hurting {
      timer: Timer::from_seconds(duration, TimerMode::Once),
    };
  }

  /// Advances the recovery timer. Returns true exactly once, on the tick the
  /// window elapses.
  pub fn tick(&mut self, delta: std::time::Duration) -> bool {
    let HurtState::Hurting { timer } = self else {
      return false;
    };
    timer.tick(delta);
    if timer.is_finished() {
      *self = HurtState::Normal;
      true
    } else {
      false
    }
  }
}

/// Zero-or-one carried item plus the currently overlapped pickup candidate
/// and drop target, all tracked by entity identity.
#[derive(Component, Default, Debug)]
pub struct Possession {
  pub carrying: Option<Entity>,
  pub nearby_item: Option<Entity>,
  pub nearby_kitchen: Option<Entity>,
}

impl Possession {
  /// Last-entered item wins as the pickup candidate. Nothing is tracked
  /// while already carrying.
  pub fn item_entered(&mut self, item: Entity) {
    if self.carrying.is_none() {
      self.nearby_item = Some(item);
    }
  }

  /// An exit only clears the candidate it belongs to; an unrelated item
  /// leaving range must not drop a still-present candidate.
  pub fn item_exited(&mut self, item: Entity) {
    if self.nearby_item == Some(item) {
      self.nearby_item = None;
    }
  }

  pub fn kitchen_entered(&mut self, kitchen: Entity) {
    self.nearby_kitchen = Some(kitchen);
  }

  pub fn kitchen_exited(&mut self, kitchen: Entity) {
    if self.nearby_kitchen == Some(kitchen) {
      self.nearby_kitchen = None;
    }
  }
}

/// What the animation collaborator reads to pick a pose. The crate only
/// maintains the flags (and mirrors the sprite); pose selection is external.
#[derive(Component, Default)]
pub struct AnimationState {
  pub speed: f32,
  pub airborne: bool,
  pub holding: bool,
  pub hurt: bool,
  pub facing: Facing,
}

/// While present, the contact-pair filter ignores collisions between the
/// player and `surface`, letting the player fall through it. Runs to
/// completion; not cancellable.
#[derive(Component)]
pub struct PassThroughFloor {
  pub surface: Entity,
  pub timer: Timer,
}
