//! Movement domain: platformer controller plugin wiring and public exports.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, GroundProbe, MovementState, Player};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::GameState;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(
                OnEnter(GameState::Playing),
                bootstrap::spawn_player.after(crate::level::spawn_level),
            )
            .add_systems(
                Update,
                (
                    systems::read_input,
                    systems::detect_ground,
                    systems::update_timers,
                    systems::apply_lateral_movement,
                    systems::apply_vertical_movement,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
