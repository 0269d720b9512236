//! Session state machine
//!
//! Owns everything one run needs: the counters, the sliding block, the
//! committed-block side table, the respawn timer, the seeded RNG and
//! the viewport. Each frame the embedding calls [`Session::pump`] with
//! the current time, applies player input, runs
//! [`Session::before_step`] and then steps the physics world.
//!
//! Once a block falls out of the viewport the session latches game
//! over and every mutation becomes a silent no-op; the pile keeps
//! existing so the final scene can still be drawn.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::physics::{BlockMaterial, BodyHandle, BodyLabel, PhysicsWorld};
use crate::tuning::Tuning;

use super::active::ActiveBlock;
use super::agitation;
use super::block::{self, BlockSpec};
use super::boundary::{BowlGeometry, Viewport};
use super::gameover;

/// Mutable run counters, small enough to snapshot freely
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Blocks dropped so far
    pub score: u32,
    /// Blocks spawned so far; drives the forced-letter cadence
    pub block_counter: u32,
    /// Latched once any block falls past the bottom of the viewport
    pub is_game_over: bool,
    /// Slide direction, +1.0 right / -1.0 left
    pub slide_direction: f32,
    /// Slide speed in pixels per tick
    pub slide_speed: f32,
}

/// Where the session is in its spawn/drop cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No block in flight and no respawn scheduled
    Spawning,
    /// A block is sliding, waiting for the drop
    Active,
    /// Last block committed; the respawn timer is running
    Dropped,
    /// Terminal
    GameOver,
}

pub struct Session {
    state: SessionState,
    active: Option<ActiveBlock>,
    /// Which spec each committed body was spawned from
    specs: HashMap<BodyHandle, BlockSpec>,
    /// When the next spawn comes due, if one is scheduled
    respawn_due: Option<Instant>,
    rng: Pcg32,
    seed: u64,
    tuning: Tuning,
    viewport: Viewport,
}

impl Session {
    /// Install the bowl into `world`, spawn the first sliding block and
    /// return the running session.
    pub fn new(
        world: &mut PhysicsWorld,
        tuning: Tuning,
        viewport: Viewport,
        seed: u64,
        now: Instant,
    ) -> Self {
        let mut session = Self {
            state: SessionState {
                score: 0,
                block_counter: 0,
                is_game_over: false,
                slide_direction: 1.0,
                slide_speed: tuning.slide_speed,
            },
            active: None,
            specs: HashMap::new(),
            respawn_due: None,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            tuning,
            viewport,
        };
        session.install_bowl(world);
        session.spawn(now);
        log::info!(
            "Session started with seed: {} ({}x{})",
            seed,
            viewport.width,
            viewport.height
        );
        session
    }

    fn install_bowl(&self, world: &mut PhysicsWorld) {
        let bowl = BowlGeometry::generate(self.viewport);
        for slab in bowl.slabs() {
            world.insert_static(
                &slab,
                self.tuning.ground_restitution,
                self.tuning.ground_friction,
                BodyLabel::Ground,
            );
        }
    }

    fn material(&self) -> BlockMaterial {
        BlockMaterial {
            restitution: self.tuning.block_restitution,
            friction: self.tuning.block_friction,
            density: self.tuning.block_density,
        }
    }

    #[inline]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[inline]
    pub fn active_block(&self) -> Option<&ActiveBlock> {
        self.active.as_ref()
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Spec a committed body was spawned from
    pub fn spec_for(&self, handle: BodyHandle) -> Option<&BlockSpec> {
        self.specs.get(&handle)
    }

    /// All committed bodies and their specs, in no particular order
    pub fn committed(&self) -> impl Iterator<Item = (BodyHandle, &BlockSpec)> {
        self.specs.iter().map(|(handle, spec)| (*handle, spec))
    }

    /// Current phase, derived from the session fields
    pub fn phase(&self) -> Phase {
        if self.state.is_game_over {
            Phase::GameOver
        } else if self.active.is_some() {
            Phase::Active
        } else if self.respawn_due.is_some() {
            Phase::Dropped
        } else {
            Phase::Spawning
        }
    }

    /// Spawn the next sliding block at the top center.
    ///
    /// Silently refused while the session is over, a block is already
    /// in flight, or a scheduled respawn has not come due. The block
    /// counter advances before the letter is decided, so the very first
    /// spawn is block number one.
    pub fn spawn(&mut self, now: Instant) {
        if self.state.is_game_over {
            return;
        }
        if self.active.is_some() {
            log::debug!("spawn ignored: a block is already in flight");
            return;
        }
        if let Some(due) = self.respawn_due {
            if now < due {
                return;
            }
        }
        self.respawn_due = None;
        self.state.block_counter += 1;
        let spec = block::next_block(
            self.state.block_counter,
            &self.tuning.target_word,
            &mut self.rng,
        );
        let pos = Vec2::new(self.viewport.width / 2.0, self.tuning.spawn_height);
        self.active = Some(ActiveBlock::new(spec, pos));
        log::debug!(
            "Spawned block {}: '{}' ({:?})",
            self.state.block_counter,
            spec.letter,
            spec.color
        );
    }

    /// Fire a due respawn. Call once per frame with the current time.
    pub fn pump(&mut self, now: Instant) {
        if self.state.is_game_over {
            return;
        }
        if let Some(due) = self.respawn_due {
            if now >= due {
                self.spawn(now);
            }
        }
    }

    /// Rotate the sliding block a quarter turn clockwise. No-op without
    /// a block in flight.
    pub fn rotate(&mut self) {
        if self.state.is_game_over {
            return;
        }
        if let Some(block) = self.active.as_mut() {
            block.rotate_cw();
        }
    }

    /// Commit the sliding block into the physics world at its current
    /// position and rotation. Scores one point, remembers the spec for
    /// the new body and schedules the next spawn.
    pub fn drop_active(&mut self, world: &mut PhysicsWorld, now: Instant) {
        if self.state.is_game_over {
            return;
        }
        let block = match self.active.take() {
            Some(block) => block,
            None => {
                log::debug!("drop ignored: no block in flight");
                return;
            }
        };

        let parts = block::cell_parts(Vec2::ZERO, &block.spec, self.tuning.cell_size);
        let handle = world.insert_block(block.pos, &parts, &self.material(), BodyLabel::Block);
        world.set_rotation(handle, block.rotation);
        self.specs.insert(handle, block.spec);

        self.state.score += 1;
        self.respawn_due = Some(now + Duration::from_millis(self.tuning.spawn_delay_ms));
        log::debug!(
            "Dropped '{}' at x {:.1}, score {}",
            block.spec.letter,
            block.pos.x,
            self.state.score
        );
    }

    /// Per-tick update, to run right before stepping the physics world:
    /// slide the in-flight block, agitate the pile, then sweep for
    /// fallen blocks. Does nothing once the session is over.
    pub fn before_step(&mut self, world: &mut PhysicsWorld) {
        if self.state.is_game_over {
            return;
        }

        if let Some(block) = self.active.as_mut() {
            block.slide(
                &mut self.state.slide_direction,
                self.state.slide_speed,
                self.viewport,
                self.tuning.slide_margin,
            );
        }

        agitation::agitate(world, &mut self.rng, self.tuning.agitation_scale);

        if gameover::fallen_below(world, self.viewport.height) {
            self.state.is_game_over = true;
            log::info!("Game over at score {}", self.state.score);
        }
    }

    /// Swap the bowl for a resized viewport. Settled blocks stay where
    /// they are; only the ground bodies are rebuilt.
    pub fn resize(&mut self, world: &mut PhysicsWorld, viewport: Viewport) {
        self.viewport = viewport;
        world.remove_labeled(BodyLabel::Ground);
        self.install_bowl(world);
        log::info!("Resized to {}x{}", viewport.width, viewport.height);
    }
}
