//! The sliding pre-drop block
//!
//! At most one block is in flight at a time. It is not a physics body:
//! it oscillates kinematically at the spawn height, reversing inside a
//! margin from each side edge, until the player drops it into the world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::block::BlockSpec;
use super::boundary::Viewport;

/// The block currently sliding above the bowl
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveBlock {
    /// Center position in screen coordinates
    pub pos: Vec2,
    /// Accumulated rotation in radians, applied on drop
    pub rotation: f32,
    pub spec: BlockSpec,
}

impl ActiveBlock {
    pub fn new(spec: BlockSpec, pos: Vec2) -> Self {
        Self {
            pos,
            rotation: 0.0,
            spec,
        }
    }

    /// Advance one slide tick and reverse `direction` when the block
    /// has crossed past `margin` from either side edge. The overshoot
    /// tick is kept, so the turnaround point wanders a little.
    pub fn slide(&mut self, direction: &mut f32, speed: f32, viewport: Viewport, margin: f32) {
        self.pos.x += speed * *direction;
        if self.pos.x > viewport.width - margin {
            *direction = -1.0;
        } else if self.pos.x < margin {
            *direction = 1.0;
        }
    }

    /// Add a quarter turn clockwise (y-down screen coordinates). The
    /// angle accumulates without normalization.
    pub fn rotate_cw(&mut self) {
        self.rotation += std::f32::consts::FRAC_PI_2;
    }
}
