//! Pile agitation
//!
//! Every tick each settled block receives a tiny random nudge so the
//! pile keeps creeping and shuffling instead of freezing solid. The
//! nudge is a one-step force scaled by body mass, applied at the center
//! of mass so no torque sneaks in.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::physics::{BodyLabel, PhysicsWorld};

/// Apply one tick of jitter to every block body.
///
/// The magnitude is `scale` times the body mass; each force component
/// is drawn uniformly from half that magnitude on either side of zero.
/// Draws happen in the stable block enumeration order, so the same RNG
/// state always produces the same forces.
pub fn agitate(world: &mut PhysicsWorld, rng: &mut Pcg32, scale: f32) {
    for handle in world.bodies_with_label(BodyLabel::Block) {
        let magnitude = scale * world.body_mass(handle);
        let force = Vec2::new(
            rng.random_range(-0.5..0.5) * magnitude,
            rng.random_range(-0.5..0.5) * magnitude,
        );
        if let Some(com) = world.center_of_mass(handle) {
            world.apply_force_at_point(handle, force, com);
        }
    }
}
