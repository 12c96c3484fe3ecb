//! Grid domain: tile palette manifest.
//!
//! Maps tile ids to display names and colors. Loaded from a JSON manifest so
//! level authors can add tile kinds without touching code.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::TileId;

pub const PALETTE_PATH: &str = "assets/palette.json";

/// Resource mapping tile ids to their display definitions.
#[derive(Resource, Debug, Default)]
pub struct TilePalette {
    entries: HashMap<u16, TileDef>,
}

/// Definition of a single tile kind.
#[derive(Debug, Clone, Deserialize)]
pub struct TileDef {
    pub id: u16,
    pub name: String,
    /// Linear sRGB components.
    pub color: [f32; 3],
}

impl TileDef {
    pub fn color(&self) -> Color {
        Color::srgb(self.color[0], self.color[1], self.color[2])
    }
}

/// Raw manifest JSON structure.
#[derive(Deserialize)]
struct PaletteJson {
    tiles: Vec<TileDef>,
}

impl TilePalette {
    pub fn get(&self, tile: TileId) -> Option<&TileDef> {
        self.entries.get(&tile.0)
    }

    /// Display color for a tile, magenta for ids missing from the manifest.
    pub fn color_of(&self, tile: TileId) -> Color {
        self.get(tile)
            .map(TileDef::color)
            .unwrap_or(Color::srgb(1.0, 0.0, 1.0))
    }

    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.entries.keys().map(|id| TileId(*id))
    }

    fn insert_all(&mut self, tiles: Vec<TileDef>) {
        for def in tiles {
            self.entries.insert(def.id, def);
        }
    }

    /// Built-in palette used when the manifest is missing or malformed.
    fn fallback() -> Vec<TileDef> {
        vec![
            TileDef {
                id: 1,
                name: "stone".to_string(),
                color: [0.52, 0.55, 0.6],
            },
            TileDef {
                id: 2,
                name: "moss".to_string(),
                color: [0.35, 0.58, 0.38],
            },
            TileDef {
                id: 3,
                name: "amber".to_string(),
                color: [0.82, 0.64, 0.28],
            },
        ]
    }
}

/// Load the palette manifest at startup, falling back to built-ins on failure.
pub(crate) fn load_palette(mut palette: ResMut<TilePalette>) {
    let path = Path::new(PALETTE_PATH);

    if !path.exists() {
        warn!("Palette manifest not found at {:?}, using built-ins", path);
        palette.insert_all(TilePalette::fallback());
        return;
    }

    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to read palette manifest: {}", e);
            palette.insert_all(TilePalette::fallback());
            return;
        }
    };

    let parsed: PaletteJson = match serde_json::from_str(&contents) {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to parse palette manifest: {}", e);
            palette.insert_all(TilePalette::fallback());
            return;
        }
    };

    let count = parsed.tiles.len();
    palette.insert_all(parsed.tiles);
    info!("Loaded palette manifest with {} tile kinds", count);
}
