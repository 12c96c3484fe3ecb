//! Level domain: boot-time loading and the spawn pass.

use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;
use crate::grid::{BaseGrid, GridBox, GridConfig, TileId};
use crate::locus::{Locus, LocusPulse, LocusRoster};

use super::data::LevelDef;
use super::loader::load_level;

pub const LEVEL_PATH: &str = "assets/levels/atrium.ron";

const LOCUS_Z: f32 = 3.0;

/// The loaded level definition, inserted during boot.
#[derive(Resource, Debug)]
pub struct LevelData(pub LevelDef);

pub(crate) fn load_level_content(
    mut commands: Commands,
    mut config: ResMut<GridConfig>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let def = match load_level(Path::new(LEVEL_PATH)) {
        Ok(def) => {
            info!("Loaded level '{}' ({} rows)", def.name, def.rows.len());
            def
        }
        Err(e) => {
            warn!("{}; using built-in level", e);
            LevelDef::fallback()
        }
    };

    config.cell_size = def.cell_size;
    commands.insert_resource(LevelData(def));
    next_state.set(GameState::Playing);
}

/// Populate the base grid and spawn loci and ornaments. Tile visuals and the
/// player are spawned by their own domains, ordered after this pass.
pub(crate) fn spawn_level(
    mut commands: Commands,
    level: Res<LevelData>,
    mut base: ResMut<BaseGrid>,
    mut roster: ResMut<LocusRoster>,
    config: Res<GridConfig>,
) {
    let def = &level.0;

    let (cells, unknown) = def.tile_cells();
    if unknown > 0 {
        warn!(
            "Level '{}' has {} cells with unknown legend symbols",
            def.name, unknown
        );
    }
    for (cell, id) in &cells {
        base.0.set(*cell, TileId(*id));
    }

    for locus_def in &def.loci {
        let bounds = GridBox::flat(
            IVec2::new(locus_def.origin.0, locus_def.origin.1),
            IVec2::new(locus_def.size.0, locus_def.size.1),
        );
        let extent = Vec2::new(bounds.size.x as f32, bounds.size.y as f32) * config.cell_size;
        let center = config.cell_to_world(bounds.min()) + extent * 0.5;

        let entity = commands
            .spawn((
                Locus::new(bounds),
                LocusPulse::default(),
                Transform::from_xyz(center.x, center.y, LOCUS_Z),
                Visibility::default(),
            ))
            .id();
        roster.entities.push(entity);
    }

    for ornament in &def.ornaments {
        crate::ornament::spawn_ornament(&mut commands, Vec2::new(ornament.x, ornament.y));
    }

    info!(
        "Level '{}': {} terrain cells, {} loci, {} ornaments",
        def.name,
        cells.len(),
        def.loci.len(),
        def.ornaments.len()
    );
}
