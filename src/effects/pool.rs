//! Effects domain: pooled burst instances.

use bevy::prelude::*;

pub const EFFECT_LIFETIME: f32 = 0.4;
pub const DEFAULT_POOL_SIZE: usize = 12;

/// One pooled burst. Idle instances stay hidden and reusable; the pool grows
/// when every instance is busy and never shrinks.
#[derive(Component, Debug, Default)]
pub struct TileEffect {
    pub remaining: f32,
}

impl TileEffect {
    pub fn is_idle(&self) -> bool {
        self.remaining <= 0.0
    }
}

#[derive(Resource, Debug, Default)]
pub struct EffectPool {
    pub entities: Vec<Entity>,
}

/// First reusable slot, in pool order.
pub(crate) fn first_idle(busy: &[bool]) -> Option<usize> {
    busy.iter().position(|b| !*b)
}

/// Remaining-lifetime fade, clamped to [0, 1].
pub(crate) fn fade_alpha(remaining: f32) -> f32 {
    (remaining / EFFECT_LIFETIME).clamp(0.0, 1.0)
}
