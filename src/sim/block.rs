//! Block sequencing and letter-to-parts mapping
//!
//! Decides what each spawned block is (a random letter, or on a fixed
//! cadence a highlighted letter of the target word) and turns a letter
//! grid into the square cell parts its rigid body is assembled from.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::letters::{self, GRID_COLS, GRID_ROWS};

/// Every this-many-th spawned block is a target-word letter
pub const FORCED_CADENCE: u32 = 5;

/// Block color tag. The sim only distinguishes forced target-word
/// blocks from ordinary ones; renderers map the tags however they like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockColor {
    Standard,
    Highlight,
}

impl BlockColor {
    /// CSS-style hex color for renderers that want the classic look
    pub fn hex(&self) -> &'static str {
        match self {
            BlockColor::Standard => "#000000",
            BlockColor::Highlight => "#ff0000",
        }
    }
}

/// Immutable description of a spawned block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub letter: char,
    pub color: BlockColor,
}

/// One solid cell of a letter body: center relative to the block
/// origin, plus half the cell edge length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellPart {
    pub center: Vec2,
    pub half_extent: f32,
}

/// Decide the block for spawn number `counter` (1-based).
///
/// Every [`FORCED_CADENCE`]-th spawn is the next letter of `target`,
/// cycled in order and highlighted; every other spawn is a uniformly
/// random A-Z. An empty target degrades to the random path.
pub fn next_block(counter: u32, target: &str, rng: &mut Pcg32) -> BlockSpec {
    let forced = counter % FORCED_CADENCE == 0;
    if forced && !target.is_empty() {
        let cycle: Vec<char> = target.chars().collect();
        let index = (counter / FORCED_CADENCE).saturating_sub(1) as usize % cycle.len();
        BlockSpec {
            letter: cycle[index],
            color: BlockColor::Highlight,
        }
    } else {
        BlockSpec {
            letter: (b'A' + rng.random_range(0..26u8)) as char,
            color: BlockColor::Standard,
        }
    }
}

/// Cell parts for `spec`'s letter, centered on `origin`.
///
/// The `GRID_COLS` x `GRID_ROWS` grid of `cell`-sized squares is laid
/// out so the whole letter is centered on the origin, and one part is
/// emitted per solid cell, scanning rows top-first. Pass `Vec2::ZERO`
/// to get body-local offsets.
pub fn cell_parts(origin: Vec2, spec: &BlockSpec, cell: f32) -> Vec<CellPart> {
    let grid = letters::shape_of(spec.letter);
    let width = GRID_COLS as f32 * cell;
    let height = GRID_ROWS as f32 * cell;
    let mut parts = Vec::new();
    for (row, cells) in grid.iter().enumerate() {
        for (col, &solid) in cells.iter().enumerate() {
            if solid == 1 {
                let x = origin.x + col as f32 * cell - width / 2.0 + cell / 2.0;
                let y = origin.y + row as f32 * cell - height / 2.0 + cell / 2.0;
                parts.push(CellPart {
                    center: Vec2::new(x, y),
                    half_extent: cell / 2.0,
                });
            }
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn test_forced_spawns_cycle_target_word() {
        let mut rng = Pcg32::seed_from_u64(7);
        let expected = ['H', 'E', 'L', 'L', 'O', 'H', 'E'];
        for (i, &letter) in expected.iter().enumerate() {
            let spec = next_block((i as u32 + 1) * FORCED_CADENCE, "HELLO", &mut rng);
            assert_eq!(spec.letter, letter);
            assert_eq!(spec.color, BlockColor::Highlight);
        }
    }

    #[test]
    fn test_unforced_spawns_are_random_letters() {
        let mut rng = Pcg32::seed_from_u64(7);
        for counter in 1..FORCED_CADENCE {
            let spec = next_block(counter, "HELLO", &mut rng);
            assert!(spec.letter.is_ascii_uppercase());
            assert_eq!(spec.color, BlockColor::Standard);
        }
    }

    #[test]
    fn test_empty_target_degrades_to_random() {
        let mut rng = Pcg32::seed_from_u64(7);
        let spec = next_block(FORCED_CADENCE, "", &mut rng);
        assert!(spec.letter.is_ascii_uppercase());
        assert_eq!(spec.color, BlockColor::Standard);
    }

    #[test]
    fn test_cell_parts_match_grid_layout() {
        // 'I' at (100, 100) with 10px cells: the centers sit on a lattice
        // from 80 to 120 on both axes
        let spec = BlockSpec {
            letter: 'I',
            color: BlockColor::Standard,
        };
        let parts = cell_parts(Vec2::new(100.0, 100.0), &spec, 10.0);
        assert_eq!(parts.len(), 9);
        assert_eq!(parts[0].center, Vec2::new(90.0, 80.0));
        assert_eq!(parts[3].center, Vec2::new(100.0, 90.0));
        assert_eq!(parts[8].center, Vec2::new(110.0, 120.0));
        assert!(parts.iter().all(|p| p.half_extent == 5.0));
    }

    #[test]
    fn test_cell_parts_center_on_origin_for_symmetric_letters() {
        let spec = BlockSpec {
            letter: 'O',
            color: BlockColor::Standard,
        };
        let parts = cell_parts(Vec2::ZERO, &spec, 10.0);
        let sum: Vec2 = parts.iter().map(|p| p.center).sum();
        let mean = sum / parts.len() as f32;
        assert!(mean.length() < 0.0001);
    }

    proptest! {
        #[test]
        fn prop_forced_cadence_is_exact(counter in 1u32..1000) {
            let mut rng = Pcg32::seed_from_u64(99);
            let spec = next_block(counter, "HELLO", &mut rng);
            if counter % FORCED_CADENCE == 0 {
                prop_assert_eq!(spec.color, BlockColor::Highlight);
                prop_assert!("HELLO".contains(spec.letter));
            } else {
                prop_assert_eq!(spec.color, BlockColor::Standard);
            }
        }
    }
}
