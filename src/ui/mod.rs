//! UI domain: HUD plugin wiring.

mod hud;

use bevy::prelude::*;

use crate::core::GameState;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), hud::spawn_ornament_counter)
            .add_systems(
                Update,
                hud::update_ornament_counter.run_if(in_state(GameState::Playing)),
            );
    }
}
