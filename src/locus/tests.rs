//! Locus domain: tests for center derivation, pulse timing, and the locator.

use bevy::prelude::{IVec2, IVec3, Vec2};

use super::{Locus, LocusPulse, PULSE_DURATION, ViewportProjector, find_onscreen_locus};
use crate::grid::{GridBox, GridConfig};

/// Fixed-rectangle projector: maps the world rect `[min, min + size]` onto
/// the `[0,1]` viewport.
struct FixedViewport {
    min: Vec2,
    size: Vec2,
}

impl ViewportProjector for FixedViewport {
    fn project(&self, world: Vec2) -> Option<Vec2> {
        Some((world - self.min) / self.size)
    }
}

fn config() -> GridConfig {
    GridConfig { cell_size: 32.0 }
}

// -----------------------------------------------------------------------------
// Locus tests
// -----------------------------------------------------------------------------

#[test]
fn test_locus_center_precomputed_from_bounds() {
    let locus = Locus::new(GridBox::flat(IVec2::new(2, 2), IVec2::new(4, 2)));
    // min (2,2), exclusive max (6,4) -> floor(4, 3)
    assert_eq!(locus.center_cell(), IVec3::new(4, 3, 0));
}

#[test]
fn test_locus_bounds_round_trip() {
    let bounds = GridBox::flat(IVec2::new(-1, 5), IVec2::new(3, 3));
    let locus = Locus::new(bounds);
    assert_eq!(locus.bounds(), bounds);
}

// -----------------------------------------------------------------------------
// Pulse tests
// -----------------------------------------------------------------------------

#[test]
fn test_pulse_starts_inactive() {
    let pulse = LocusPulse::default();
    assert!(!pulse.is_active());
}

#[test]
fn test_pulse_expires_after_duration() {
    let mut pulse = LocusPulse::default();
    pulse.restart();
    assert!(pulse.is_active());

    pulse.tick(PULSE_DURATION + 0.01);
    assert!(!pulse.is_active());
}

#[test]
fn test_pulse_restart_preempts_in_flight_pulse() {
    let mut pulse = LocusPulse::default();
    pulse.restart();
    pulse.tick(PULSE_DURATION * 0.9);

    // A second trigger resets the full window instead of queueing.
    pulse.restart();
    pulse.tick(PULSE_DURATION * 0.9);
    assert!(pulse.is_active());

    pulse.tick(PULSE_DURATION * 0.2);
    assert!(!pulse.is_active());
}

// -----------------------------------------------------------------------------
// Locator tests
// -----------------------------------------------------------------------------

#[test]
fn test_locator_returns_first_match_in_registration_order() {
    // Viewport covers world [0, 320) on both axes: cells 0..10 are visible.
    let viewport = FixedViewport {
        min: Vec2::ZERO,
        size: Vec2::splat(320.0),
    };

    // Both loci are on screen; the second is closer to the viewport center,
    // but registration order wins.
    let loci = vec![
        (1usize, IVec3::new(8, 8, 0)),
        (2usize, IVec3::new(5, 5, 0)),
    ];

    assert_eq!(
        find_onscreen_locus(&loci, &config(), &viewport),
        Some(1usize)
    );
}

#[test]
fn test_locator_skips_offscreen_loci() {
    let viewport = FixedViewport {
        min: Vec2::ZERO,
        size: Vec2::splat(320.0),
    };

    let loci = vec![
        (1usize, IVec3::new(-5, 3, 0)),
        (2usize, IVec3::new(3, 40, 0)),
        (3usize, IVec3::new(4, 4, 0)),
    ];

    assert_eq!(
        find_onscreen_locus(&loci, &config(), &viewport),
        Some(3usize)
    );
}

#[test]
fn test_locator_none_when_everything_offscreen() {
    let viewport = FixedViewport {
        min: Vec2::ZERO,
        size: Vec2::splat(320.0),
    };

    let loci = vec![(1usize, IVec3::new(100, 100, 0))];
    assert_eq!(find_onscreen_locus(&loci, &config(), &viewport), None);
}

#[test]
fn test_locator_none_for_empty_roster() {
    let viewport = FixedViewport {
        min: Vec2::ZERO,
        size: Vec2::splat(320.0),
    };

    let loci: Vec<(usize, IVec3)> = Vec::new();
    assert_eq!(find_onscreen_locus(&loci, &config(), &viewport), None);
}
