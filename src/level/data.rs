//! Level domain: serde schema for level content.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;

/// Symbols that always mean "no tile", independent of the legend.
pub const EMPTY_SYMBOLS: [char; 2] = ['.', ' '];

#[derive(Debug, Clone, Deserialize)]
pub struct LevelDef {
    pub name: String,
    pub cell_size: f32,
    pub player_spawn: (f32, f32),
    /// Symbol -> tile id for the ASCII rows.
    pub legend: HashMap<char, u16>,
    /// ASCII tile rows, top row first.
    pub rows: Vec<String>,
    pub loci: Vec<LocusDef>,
    #[serde(default)]
    pub ornaments: Vec<OrnamentDef>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LocusDef {
    pub origin: (i32, i32),
    pub size: (i32, i32),
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OrnamentDef {
    pub x: f32,
    pub y: f32,
}

impl LevelDef {
    /// Resolve the ASCII rows into grid cells. The top row maps to the
    /// highest y row. Returns the cells plus the count of symbols that were
    /// skipped for missing a legend entry.
    pub fn tile_cells(&self) -> (Vec<(IVec3, u16)>, usize) {
        let mut cells = Vec::new();
        let mut unknown = 0;
        let height = self.rows.len();

        for (row_index, row) in self.rows.iter().enumerate() {
            let y = (height - 1 - row_index) as i32;
            for (x, symbol) in row.chars().enumerate() {
                if EMPTY_SYMBOLS.contains(&symbol) {
                    continue;
                }
                match self.legend.get(&symbol) {
                    Some(id) => cells.push((IVec3::new(x as i32, y, 0), *id)),
                    None => unknown += 1,
                }
            }
        }

        (cells, unknown)
    }

    /// Built-in layout used when no level file can be loaded: one floor, two
    /// loci and a couple of platforms to mirror around.
    pub fn fallback() -> Self {
        Self {
            name: "fallback".to_string(),
            cell_size: 32.0,
            player_spawn: (96.0, 160.0),
            legend: HashMap::from([('#', 1), ('=', 2)]),
            rows: vec![
                "....................".to_string(),
                "....................".to_string(),
                "......==............".to_string(),
                "....................".to_string(),
                "...==...............".to_string(),
                "....................".to_string(),
                "####################".to_string(),
            ],
            loci: vec![
                LocusDef {
                    origin: (2, 1),
                    size: (6, 5),
                },
                LocusDef {
                    origin: (11, 1),
                    size: (6, 5),
                },
            ],
            ornaments: vec![OrnamentDef { x: 232.0, y: 112.0 }],
        }
    }
}
