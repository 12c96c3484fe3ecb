//! Movement domain: player components and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (base tiles and pasted overlay tiles)
    Ground,
    /// Player character
    Player,
    /// Sensors (ornament pickups) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug)]
pub struct MovementState {
    pub on_ground: bool,
    pub was_on_ground: bool,
    /// Seconds since walking off a ledge. Starts expired so spawning in the
    /// air grants no free jump.
    pub coyote_timer: f32,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            on_ground: false,
            was_on_ground: false,
            coyote_timer: f32::MAX,
        }
    }
}

/// Downward box-cast settings for the ground probe.
#[derive(Component, Debug)]
pub struct GroundProbe {
    /// Cast origin relative to the player position.
    pub offset: Vec2,
    /// Box size in world units.
    pub size: Vec2,
    /// How far below the origin the box travels.
    pub travel: f32,
}

impl Default for GroundProbe {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.0, -22.0),
            size: Vec2::new(20.0, 6.0),
            travel: 4.0,
        }
    }
}
