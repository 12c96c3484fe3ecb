//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub accel: f32,
    pub jump_impulse: f32,
    /// Vertical velocity above which jump input is ignored. Stops mashed
    /// input from stacking impulses on consecutive frames.
    pub jump_cap: f32,
    /// Upper bound of the rising-velocity band where an early jump release
    /// switches to the stifle gravity.
    pub jump_stifle_max: f32,
    pub coyote_time: f32,
    pub gravity: f32,
    pub stifle_gravity: f32,
    pub max_fall_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 220.0,
            accel: 1900.0,
            jump_impulse: 620.0,
            jump_cap: 40.0,
            jump_stifle_max: 560.0,
            coyote_time: 0.1,
            gravity: 1500.0,
            stifle_gravity: 4500.0,
            max_fall_speed: 900.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub lateral: f32,
    pub jump_held: bool,
}
