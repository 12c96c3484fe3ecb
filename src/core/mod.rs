//! Core domain: game states and the world camera.

mod state;

pub use state::GameState;

use bevy::prelude::*;

/// Marker for the single gameplay camera.
#[derive(Component, Debug)]
pub struct WorldCamera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((WorldCamera, Camera2d));
}
