//! Effects domain: tests for pool selection and fade policy.

use super::pool::{EFFECT_LIFETIME, fade_alpha, first_idle};
use super::systems::reacts_to;
use crate::reflection::CellChangeKind;

// -----------------------------------------------------------------------------
// Pool selection tests
// -----------------------------------------------------------------------------

#[test]
fn test_first_idle_prefers_earliest_slot() {
    assert_eq!(first_idle(&[true, false, false]), Some(1));
    assert_eq!(first_idle(&[false, true, false]), Some(0));
}

#[test]
fn test_first_idle_none_when_saturated() {
    assert_eq!(first_idle(&[true, true, true]), None);
    assert_eq!(first_idle(&[]), None);
}

// -----------------------------------------------------------------------------
// Fade tests
// -----------------------------------------------------------------------------

#[test]
fn test_fade_alpha_spans_lifetime() {
    assert_eq!(fade_alpha(EFFECT_LIFETIME), 1.0);
    assert_eq!(fade_alpha(EFFECT_LIFETIME * 0.5), 0.5);
    assert_eq!(fade_alpha(0.0), 0.0);
}

#[test]
fn test_fade_alpha_clamps_out_of_range() {
    assert_eq!(fade_alpha(EFFECT_LIFETIME * 2.0), 1.0);
    assert_eq!(fade_alpha(-0.1), 0.0);
}

// -----------------------------------------------------------------------------
// Reaction policy tests
// -----------------------------------------------------------------------------

#[test]
fn test_only_created_changes_drive_bursts() {
    assert!(reacts_to(CellChangeKind::Created));
    assert!(!reacts_to(CellChangeKind::Destroyed));
}
