use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

#[derive(Component)]
pub struct PlayerInput;

/// Horizontal movement axis, level-triggered.
#[derive(Debug, InputAction)]
#[action_output(f32)]
pub struct Move;

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct Jump;

/// Drop through the platform currently stood on.
#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct JumpDown;

/// Pick up / put down, depending on what the player is holding.
#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct Interact;
