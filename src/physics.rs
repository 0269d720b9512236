//! Thin facade over the rapier2d physics world
//!
//! Owns the full solver state and exposes only what the simulation
//! needs: static slabs, composite letter bodies, label-filtered
//! enumeration, one-step forces and transform reads. Bodies carry no
//! game data; what each body is lives in an insertion-ordered label
//! list on this side of the fence, which doubles as the stable
//! enumeration order.
//!
//! Coordinates are screen pixels with y pointing down, so gravity is a
//! positive y vector.

use glam::Vec2;
use rapier2d::na::UnitComplex;
use rapier2d::prelude::*;

use crate::sim::block::CellPart;
use crate::sim::boundary::Slab;

/// What a body is, for enumeration and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyLabel {
    /// Static bowl slab
    Ground,
    /// Dropped letter block
    Block,
}

/// Stable identifier for a body in the world
pub type BodyHandle = RigidBodyHandle;

/// Material applied to dynamic letter bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockMaterial {
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
}

pub struct PhysicsWorld {
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    params: IntegrationParameters,
    gravity: Vector<Real>,
    labels: Vec<(BodyHandle, BodyLabel)>,
}

impl PhysicsWorld {
    /// New empty world. `gravity` is in pixels/s^2 (y down) and `dt`
    /// is the fixed step length in seconds.
    pub fn new(gravity: Vec2, dt: f32) -> Self {
        let mut params = IntegrationParameters::default();
        params.dt = dt;
        Self {
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            params,
            gravity: vector![gravity.x, gravity.y],
            labels: Vec::new(),
        }
    }

    /// Insert a fixed slab (floor or ramp)
    pub fn insert_static(
        &mut self,
        slab: &Slab,
        restitution: f32,
        friction: f32,
        label: BodyLabel,
    ) -> BodyHandle {
        let body = RigidBodyBuilder::fixed()
            .translation(vector![slab.center.x, slab.center.y])
            .rotation(slab.angle)
            .build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::cuboid(slab.half_extents.x, slab.half_extents.y)
            .restitution(restitution)
            .friction(friction)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        self.labels.push((handle, label));
        handle
    }

    /// Insert a dynamic compound body, one cuboid collider per cell
    /// part. Parts are relative to `pos`; the body starts unrotated and
    /// never sleeps, so the pile stays live for agitation.
    pub fn insert_block(
        &mut self,
        pos: Vec2,
        parts: &[CellPart],
        material: &BlockMaterial,
        label: BodyLabel,
    ) -> BodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![pos.x, pos.y])
            .can_sleep(false)
            .build();
        let handle = self.bodies.insert(body);
        for part in parts {
            let collider = ColliderBuilder::cuboid(part.half_extent, part.half_extent)
                .translation(vector![part.center.x, part.center.y])
                .restitution(material.restitution)
                .friction(material.friction)
                .density(material.density)
                .build();
            self.colliders
                .insert_with_parent(collider, handle, &mut self.bodies);
        }
        self.labels.push((handle, label));
        handle
    }

    /// Handles of all bodies with this label, in insertion order
    pub fn bodies_with_label(&self, label: BodyLabel) -> Vec<BodyHandle> {
        self.labels
            .iter()
            .filter(|(_, l)| *l == label)
            .map(|(handle, _)| *handle)
            .collect()
    }

    /// Remove a body and its colliders. Unknown handles are ignored.
    pub fn remove(&mut self, handle: BodyHandle) {
        let removed = self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
        if removed.is_some() {
            self.labels.retain(|(h, _)| *h != handle);
        }
    }

    /// Remove every body with this label
    pub fn remove_labeled(&mut self, label: BodyLabel) {
        for handle in self.bodies_with_label(label) {
            self.remove(handle);
        }
    }

    /// Apply a force at a world-space point. Forces last exactly one
    /// step; [`step`](Self::step) clears the accumulators.
    pub fn apply_force_at_point(&mut self, handle: BodyHandle, force: Vec2, point: Vec2) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.add_force_at_point(vector![force.x, force.y], point![point.x, point.y], true);
        }
    }

    /// Set a body's absolute rotation in radians
    pub fn set_rotation(&mut self, handle: BodyHandle, angle: f32) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_rotation(UnitComplex::new(angle), true);
        }
    }

    /// Position and rotation of a body, if it still exists
    pub fn body_transform(&self, handle: BodyHandle) -> Option<(Vec2, f32)> {
        self.bodies.get(handle).map(|body| {
            let translation = body.translation();
            (
                Vec2::new(translation.x, translation.y),
                body.rotation().angle(),
            )
        })
    }

    /// Mass of a body; zero for unknown handles
    pub fn body_mass(&self, handle: BodyHandle) -> f32 {
        self.bodies.get(handle).map_or(0.0, |body| body.mass())
    }

    /// World-space center of mass of a body
    pub fn center_of_mass(&self, handle: BodyHandle) -> Option<Vec2> {
        self.bodies.get(handle).map(|body| {
            let com = body.center_of_mass();
            Vec2::new(com.x, com.y)
        })
    }

    /// Number of live bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advance the world one fixed step, then clear every per-step
    /// force accumulator so the next tick starts clean.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
        for (_, body) in self.bodies.iter_mut() {
            body.reset_forces(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::block::{cell_parts, BlockColor, BlockSpec};
    use crate::sim::boundary::{BowlGeometry, Viewport};

    const DT: f32 = 1.0 / 60.0;

    fn test_material() -> BlockMaterial {
        BlockMaterial {
            restitution: 0.4,
            friction: 0.1,
            density: 0.01,
        }
    }

    fn letter_parts(letter: char) -> Vec<CellPart> {
        let spec = BlockSpec {
            letter,
            color: BlockColor::Standard,
        };
        cell_parts(Vec2::ZERO, &spec, 10.0)
    }

    #[test]
    fn test_insert_and_enumerate_by_label() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 800.0), DT);
        let bowl = BowlGeometry::generate(Viewport::new(800.0, 600.0));
        for slab in bowl.slabs() {
            world.insert_static(&slab, 0.5, 0.1, BodyLabel::Ground);
        }
        world.insert_block(
            Vec2::new(400.0, 100.0),
            &letter_parts('A'),
            &test_material(),
            BodyLabel::Block,
        );

        assert_eq!(world.bodies_with_label(BodyLabel::Ground).len(), 3);
        assert_eq!(world.bodies_with_label(BodyLabel::Block).len(), 1);
        assert_eq!(world.body_count(), 4);
    }

    #[test]
    fn test_dynamic_body_falls_down_screen() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 800.0), DT);
        let handle = world.insert_block(
            Vec2::new(400.0, 100.0),
            &letter_parts('H'),
            &test_material(),
            BodyLabel::Block,
        );
        for _ in 0..60 {
            world.step();
        }
        let (pos, _) = world.body_transform(handle).unwrap();
        assert!(pos.y > 100.0, "block did not fall: y {}", pos.y);
    }

    #[test]
    fn test_static_slab_stays_put() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 800.0), DT);
        let slab = BowlGeometry::generate(Viewport::new(800.0, 600.0)).floor;
        let handle = world.insert_static(&slab, 0.5, 0.1, BodyLabel::Ground);
        for _ in 0..60 {
            world.step();
        }
        let (pos, angle) = world.body_transform(handle).unwrap();
        assert_eq!(pos, slab.center);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_set_rotation_applies() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 800.0), DT);
        let handle = world.insert_block(
            Vec2::new(400.0, 100.0),
            &letter_parts('T'),
            &test_material(),
            BodyLabel::Block,
        );
        world.set_rotation(handle, std::f32::consts::FRAC_PI_2);
        let (_, angle) = world.body_transform(handle).unwrap();
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 0.0001);
    }

    #[test]
    fn test_remove_labeled_clears_only_that_label() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 800.0), DT);
        let bowl = BowlGeometry::generate(Viewport::new(800.0, 600.0));
        for slab in bowl.slabs() {
            world.insert_static(&slab, 0.5, 0.1, BodyLabel::Ground);
        }
        let block = world.insert_block(
            Vec2::new(400.0, 100.0),
            &letter_parts('A'),
            &test_material(),
            BodyLabel::Block,
        );

        world.remove_labeled(BodyLabel::Ground);

        assert_eq!(world.bodies_with_label(BodyLabel::Ground).len(), 0);
        assert_eq!(world.bodies_with_label(BodyLabel::Block), vec![block]);
        assert_eq!(world.body_count(), 1);
    }

    #[test]
    fn test_block_mass_tracks_cell_count() {
        // Density 0.01 over a 10x10 cell gives one mass unit per cell
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 800.0), DT);
        let i_block = world.insert_block(
            Vec2::new(200.0, 100.0),
            &letter_parts('I'),
            &test_material(),
            BodyLabel::Block,
        );
        let e_block = world.insert_block(
            Vec2::new(600.0, 100.0),
            &letter_parts('E'),
            &test_material(),
            BodyLabel::Block,
        );
        assert!((world.body_mass(i_block) - 9.0).abs() < 0.001);
        assert!((world.body_mass(e_block) - 16.0).abs() < 0.001);
    }
}
