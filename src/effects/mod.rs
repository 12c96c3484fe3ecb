//! Effects domain: pooled cell-burst visuals.

mod pool;
mod systems;

#[cfg(test)]
mod tests;

pub use pool::{EffectPool, TileEffect};

use bevy::prelude::*;

use crate::core::GameState;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EffectPool>()
            .add_systems(Startup, systems::spawn_pool)
            .add_systems(
                Update,
                (
                    systems::trigger_reflection_effects
                        .after(crate::reflection::handle_reflect_trigger),
                    systems::trigger_ornament_effects,
                    systems::fade_effects,
                )
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
