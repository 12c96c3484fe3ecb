//! Reflection domain: region copy/paste onto the overlay grid.

mod engine;
mod events;
mod snapshot;
mod systems;

#[cfg(test)]
mod tests;

pub use engine::{CopyError, Reflector};
pub use events::{CellChangeKind, GridLayer, ReflectionChanged};
pub use snapshot::RegionSnapshot;
pub(crate) use systems::handle_reflect_trigger;

use bevy::prelude::*;

use crate::core::GameState;

pub struct ReflectionPlugin;

impl Plugin for ReflectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Reflector>()
            .add_message::<ReflectionChanged>()
            .add_systems(
                Update,
                handle_reflect_trigger.run_if(in_state(GameState::Playing)),
            );
    }
}
