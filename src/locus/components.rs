//! Locus domain: region-of-interest components and registration order.

use bevy::prelude::*;

use crate::grid::GridBox;

/// Seconds a pulse acknowledgment stays widened.
pub const PULSE_DURATION: f32 = 0.25;

/// A fixed rectangular region of the tile grid, usable as a copy source or a
/// paste destination. Bounds never change after spawn.
#[derive(Component, Debug)]
pub struct Locus {
    bounds: GridBox,
    center: IVec3,
}

impl Locus {
    pub fn new(bounds: GridBox) -> Self {
        Self {
            bounds,
            center: bounds.center_cell(),
        }
    }

    pub fn bounds(&self) -> GridBox {
        self.bounds
    }

    pub fn center_cell(&self) -> IVec3 {
        self.center
    }
}

/// Transient visual acknowledgment. Starting a new pulse preempts and
/// restarts an in-flight one; there is no queue.
#[derive(Component, Debug, Default)]
pub struct LocusPulse {
    remaining: f32,
}

impl LocusPulse {
    pub fn restart(&mut self) {
        self.remaining = PULSE_DURATION;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining -= dt;
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }
}

/// Locus entities in registration (spawn) order. The locator scans this, not
/// an ECS query, so the first-match rule stays deterministic.
#[derive(Resource, Debug, Default)]
pub struct LocusRoster {
    pub entities: Vec<Entity>,
}
