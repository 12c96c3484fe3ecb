//! Level domain: content schema, loading, and the spawn pass.

mod data;
mod loader;
mod spawn;


pub use data::{LevelDef, LocusDef, OrnamentDef};
pub use loader::{LevelLoadError, load_level};
pub use spawn::{LEVEL_PATH, LevelData};
pub(crate) use spawn::spawn_level;

use bevy::prelude::*;

use crate::core::GameState;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn::load_level_content)
            .add_systems(OnEnter(GameState::Playing), spawn::spawn_level);
    }
}
