//! Bowl boundary generation
//!
//! Derives the static container from the viewport: a wide flat floor
//! near the bottom edge with a short ramp angled inward on each side,
//! so strays roll back toward the middle. Screen coordinates, y down.
//! Regenerated whole on every resize.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Playfield dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An oriented rectangle: center, half extents, angle in radians
/// (positive tilts the right edge down in y-down coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slab {
    pub center: Vec2,
    pub half_extents: Vec2,
    pub angle: f32,
}

/// The three static slabs forming the bowl
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BowlGeometry {
    pub floor: Slab,
    pub left_ramp: Slab,
    pub right_ramp: Slab,
}

/// Bowl span as a fraction of the viewport width
const BOWL_WIDTH_RATIO: f32 = 0.75;
/// Fraction of the bowl span that is flat floor; the ramps split the rest
const FLAT_RATIO: f32 = 2.0 / 3.0;
/// Ramp length stretch so the seams overlap instead of leaving gaps
const RAMP_OVERLAP: f32 = 1.2;
/// Slab thickness in pixels
const THICKNESS: f32 = 20.0;
/// Floor center height above the bottom edge
const FLOOR_RAISE: f32 = 50.0;
/// Ramp center height above the floor center
const RAMP_RAISE: f32 = 15.0;
/// Ramp incline in radians
const RAMP_ANGLE: f32 = std::f32::consts::FRAC_PI_6;

impl BowlGeometry {
    /// Derive the bowl for a viewport.
    ///
    /// Pure: the same viewport always yields the same slabs. Degenerate
    /// viewports (zero or negative extent) yield zero-area slabs rather
    /// than failing.
    pub fn generate(viewport: Viewport) -> Self {
        let width = viewport.width.max(0.0);
        let height = viewport.height.max(0.0);

        let center_x = width / 2.0;
        let floor_y = height - FLOOR_RAISE;
        let bowl = width * BOWL_WIDTH_RATIO;
        let flat = bowl * FLAT_RATIO;
        let slope = (bowl - flat) / 2.0;

        let floor = Slab {
            center: Vec2::new(center_x, floor_y),
            half_extents: Vec2::new(flat / 2.0, THICKNESS / 2.0),
            angle: 0.0,
        };

        let ramp_y = floor_y - RAMP_RAISE;
        let ramp_x = flat / 2.0 + slope / 2.0;
        let ramp_half_extents = Vec2::new(slope * RAMP_OVERLAP / 2.0, THICKNESS / 2.0);
        let left_ramp = Slab {
            center: Vec2::new(center_x - ramp_x, ramp_y),
            half_extents: ramp_half_extents,
            angle: RAMP_ANGLE,
        };
        let right_ramp = Slab {
            center: Vec2::new(center_x + ramp_x, ramp_y),
            half_extents: ramp_half_extents,
            angle: -RAMP_ANGLE,
        };

        BowlGeometry {
            floor,
            left_ramp,
            right_ramp,
        }
    }

    /// All slabs, floor first
    pub fn slabs(&self) -> [Slab; 3] {
        [self.floor, self.left_ramp, self.right_ramp]
    }
}
