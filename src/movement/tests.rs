//! Movement domain: tests for controller helper logic.

use super::systems::movement::{coyote_window_opens, move_toward, should_stifle};

// -----------------------------------------------------------------------------
// move_toward tests
// -----------------------------------------------------------------------------

#[test]
fn test_move_toward_steps_by_max_delta() {
    assert_eq!(move_toward(0.0, 100.0, 30.0), 30.0);
    assert_eq!(move_toward(100.0, 0.0, 30.0), 70.0);
}

#[test]
fn test_move_toward_never_overshoots() {
    assert_eq!(move_toward(90.0, 100.0, 30.0), 100.0);
    assert_eq!(move_toward(-90.0, -100.0, 30.0), -100.0);
}

#[test]
fn test_move_toward_is_symmetric_in_sign() {
    let up = move_toward(0.0, 50.0, 10.0);
    let down = move_toward(0.0, -50.0, 10.0);
    assert_eq!(up, -down);
}

// -----------------------------------------------------------------------------
// Coyote window tests
// -----------------------------------------------------------------------------

#[test]
fn test_coyote_opens_on_walk_off() {
    assert!(coyote_window_opens(true, false, 0.0));
    assert!(coyote_window_opens(true, false, -12.0));
}

#[test]
fn test_coyote_does_not_open_when_rising_from_jump() {
    assert!(!coyote_window_opens(true, false, 200.0));
}

#[test]
fn test_coyote_does_not_open_on_landing_or_steady_state() {
    // Landing
    assert!(!coyote_window_opens(false, true, 0.0));
    // Already airborne
    assert!(!coyote_window_opens(false, false, -50.0));
    // Still grounded
    assert!(!coyote_window_opens(true, true, 0.0));
}

// -----------------------------------------------------------------------------
// Stifle gravity tests
// -----------------------------------------------------------------------------

#[test]
fn test_stifle_applies_when_jump_released_while_rising() {
    assert!(should_stifle(false, false, 300.0, 560.0));
}

#[test]
fn test_stifle_not_applied_while_jump_held() {
    assert!(!should_stifle(false, true, 300.0, 560.0));
}

#[test]
fn test_stifle_not_applied_above_band_or_falling() {
    // Above the stifle band: the jump is past cutting range.
    assert!(!should_stifle(false, false, 600.0, 560.0));
    // Falling
    assert!(!should_stifle(false, false, -10.0, 560.0));
    // Grounded
    assert!(!should_stifle(true, false, 300.0, 560.0));
}
