//! Movement domain: locomotion systems for timers and velocities.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
pub(crate) fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// The coyote window opens only on a walk-off: airborne this frame, grounded
/// last frame, and not rising (rising means a jump just happened).
pub(crate) fn coyote_window_opens(was_on_ground: bool, on_ground: bool, vertical: f32) -> bool {
    was_on_ground && !on_ground && vertical <= 0.0
}

/// Stifled gravity applies while airborne, rising below the stifle band's
/// top, with jump released. Cuts jumps short without freezing full jumps.
pub(crate) fn should_stifle(
    on_ground: bool,
    jump_held: bool,
    vertical: f32,
    stifle_max: f32,
) -> bool {
    !on_ground && !jump_held && vertical > 0.0 && vertical < stifle_max
}

pub(crate) fn update_timers(
    time: Res<Time>,
    mut query: Query<(&mut MovementState, &LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, velocity) in &mut query {
        if coyote_window_opens(state.was_on_ground, state.on_ground, velocity.y) {
            state.coyote_timer = 0.0;
        } else if state.on_ground {
            state.coyote_timer = f32::MAX;
        } else if state.coyote_timer != f32::MAX {
            state.coyote_timer += dt;
        }
    }
}

pub(crate) fn apply_lateral_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut velocity in &mut query {
        velocity.x = move_toward(
            velocity.x,
            input.lateral * tuning.max_speed,
            tuning.accel * dt,
        );
    }
}

pub(crate) fn apply_vertical_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity) in &mut query {
        let under_cap = velocity.y <= tuning.jump_cap;

        let gravity = if should_stifle(
            state.on_ground,
            input.jump_held,
            velocity.y,
            tuning.jump_stifle_max,
        ) {
            tuning.stifle_gravity
        } else {
            tuning.gravity
        };

        if !state.on_ground {
            velocity.y -= gravity * dt;
        } else if velocity.y <= 0.05 {
            // Grounded and not freshly launched: settle.
            velocity.y = 0.0;
        }

        let jump_eligible = state.on_ground || state.coyote_timer < tuning.coyote_time;
        if jump_eligible && input.jump_held && under_cap {
            // Impulse, not scaled by dt.
            velocity.y += tuning.jump_impulse;
            state.coyote_timer = f32::MAX;
            debug!("Jump: on_ground={}", state.on_ground);
        }

        velocity.y = velocity.y.clamp(-tuning.max_fall_speed, tuning.jump_impulse);
    }
}
