//! Letterfall - a falling letter-block toy
//!
//! Letter-shaped blocks slide in above a physics bowl; the player
//! rotates and drops them, constant jitter keeps the pile restless, and
//! the run ends when a block spills out of the viewport.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sequencing, session state machine)
//! - `physics`: Thin facade over the rapier2d world
//! - `tuning`: Data-driven game balance
//!
//! The embedding loop owns timing and input. Each frame it calls
//! [`sim::Session::pump`] with the current time, applies player input
//! ([`sim::Session::rotate`] / [`sim::Session::drop_active`]), runs
//! [`sim::Session::before_step`], steps the [`physics::PhysicsWorld`],
//! then reads state back for drawing.

pub mod physics;
pub mod sim;
pub mod tuning;

pub use physics::{BodyHandle, BodyLabel, PhysicsWorld};
pub use sim::{ActiveBlock, BlockColor, BlockSpec, BowlGeometry, Phase, Session, SessionState, Viewport};
pub use tuning::Tuning;

/// Game configuration constants (compile-time defaults; runtime values
/// live in [`tuning::Tuning`])
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Gravity in pixels/s^2, y pointing down the screen
    pub const GRAVITY: f32 = 800.0;

    /// Letter block defaults
    pub const CELL_SIZE: f32 = 10.0;
    pub const SPAWN_HEIGHT: f32 = 100.0;
    pub const SLIDE_SPEED: f32 = 3.0;
    pub const SLIDE_MARGIN: f32 = 30.0;
    /// Delay between a drop and the next spawn (milliseconds)
    pub const SPAWN_DELAY_MS: u64 = 1000;
    /// Jitter force scale, in units of body mass per axis
    pub const AGITATION_SCALE: f32 = 0.002;
    /// Letters forced in on every fifth spawn
    pub const TARGET_WORD: &str = "HELLO";

    /// Material defaults
    pub const BLOCK_RESTITUTION: f32 = 0.4;
    pub const BLOCK_FRICTION: f32 = 0.1;
    pub const BLOCK_DENSITY: f32 = 0.01;
    pub const GROUND_RESTITUTION: f32 = 0.5;
    pub const GROUND_FRICTION: f32 = 0.1;
}
