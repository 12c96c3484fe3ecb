//! Grid domain: sparse tile layers, palette manifest, and tile presentation.

mod map;
mod palette;
mod render;


pub use map::{BaseGrid, GridBox, GridConfig, OverlayGrid, TileGrid, TileId};
pub use palette::TilePalette;
pub use render::{BaseTile, OverlayTile};
pub(crate) use render::spawn_base_tile;

use bevy::prelude::*;

use crate::core::GameState;

pub struct GridPlugin;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BaseGrid>()
            .init_resource::<OverlayGrid>()
            .init_resource::<GridConfig>()
            .init_resource::<TilePalette>()
            .add_systems(Startup, palette::load_palette)
            .add_systems(
                OnEnter(GameState::Playing),
                render::spawn_base_tiles.after(crate::level::spawn_level),
            )
            .add_systems(
                Update,
                render::sync_overlay_tiles
                    .after(crate::reflection::handle_reflect_trigger)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
