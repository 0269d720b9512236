//! Deterministic simulation module
//!
//! All gameplay decisions live here. This module must stay deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable body enumeration order (by insertion)
//! - Wall-clock time is passed in, never read
//! - No rendering or platform dependencies

pub mod active;
pub mod agitation;
pub mod block;
pub mod boundary;
pub mod gameover;
pub mod letters;
pub mod session;

pub use active::ActiveBlock;
pub use agitation::agitate;
pub use block::{BlockColor, BlockSpec, CellPart, FORCED_CADENCE, cell_parts, next_block};
pub use boundary::{BowlGeometry, Slab, Viewport};
pub use gameover::fallen_below;
pub use letters::{GRID_COLS, GRID_ROWS, LetterGrid, shape_of};
pub use session::{Phase, Session, SessionState};
