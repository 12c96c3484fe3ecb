//! Reflection domain: change notification messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Which grid layer a change applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayer {
    Base,
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellChangeKind {
    Created,
    Destroyed,
}

/// Emitted whenever a reflection operation changes a set of grid cells.
/// `cells` lists exactly the cells that changed, in enumeration order.
#[derive(Debug, Clone)]
pub struct ReflectionChanged {
    pub cells: Vec<IVec3>,
    pub layer: GridLayer,
    pub kind: CellChangeKind,
}

impl Message for ReflectionChanged {}
