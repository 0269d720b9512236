//! Game over detection
//!
//! The run ends when any block escapes the bowl and falls past the
//! bottom of the viewport. Only dropped blocks count; the bowl itself
//! and the sliding block can never end the run.

use crate::physics::{BodyLabel, PhysicsWorld};

/// True if any block body's center has fallen below `height`.
pub fn fallen_below(world: &PhysicsWorld, height: f32) -> bool {
    world
        .bodies_with_label(BodyLabel::Block)
        .into_iter()
        .filter_map(|handle| world.body_transform(handle))
        .any(|(pos, _)| pos.y > height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::BlockMaterial;
    use crate::sim::block::{cell_parts, BlockColor, BlockSpec};
    use glam::Vec2;

    fn insert_block_at(world: &mut PhysicsWorld, y: f32) {
        let spec = BlockSpec {
            letter: 'A',
            color: BlockColor::Standard,
        };
        let parts = cell_parts(Vec2::ZERO, &spec, 10.0);
        let material = BlockMaterial {
            restitution: 0.4,
            friction: 0.1,
            density: 0.01,
        };
        world.insert_block(Vec2::new(400.0, y), &parts, &material, BodyLabel::Block);
    }

    #[test]
    fn test_empty_world_is_not_over() {
        let world = PhysicsWorld::new(Vec2::new(0.0, 800.0), 1.0 / 60.0);
        assert!(!fallen_below(&world, 600.0));
    }

    #[test]
    fn test_block_inside_viewport_is_not_over() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 800.0), 1.0 / 60.0);
        insert_block_at(&mut world, 550.0);
        assert!(!fallen_below(&world, 600.0));
    }

    #[test]
    fn test_block_below_viewport_ends_the_run() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 800.0), 1.0 / 60.0);
        insert_block_at(&mut world, 550.0);
        insert_block_at(&mut world, 700.0);
        assert!(fallen_below(&world, 600.0));
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 800.0), 1.0 / 60.0);
        insert_block_at(&mut world, 600.0);
        assert!(!fallen_below(&world, 600.0));
    }
}
