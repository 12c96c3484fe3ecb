//! Locus domain: grid regions of interest, lookup, and pulse feedback.

mod components;
mod locator;
mod visuals;

#[cfg(test)]
mod tests;

pub use components::{Locus, LocusPulse, LocusRoster, PULSE_DURATION};
pub use locator::{CameraProjector, ViewportProjector, find_onscreen_locus};

use bevy::prelude::*;

use crate::core::GameState;

pub struct LocusPlugin;

impl Plugin for LocusPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocusRoster>().add_systems(
            Update,
            (
                visuals::attach_outlines,
                visuals::tick_pulses,
                visuals::animate_pulse,
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}
