//! One match from first frame to knockout.

use glam::Vec2;

use brawl_core::{EntityError, FighterId, MatchConfig, MatchPhase, MatchState};

use crate::bot::EnemyDriver;
use crate::input::{ButtonLatch, FrameInput};

/// Owns the arena plus the per-frame policy around it.
///
/// [`step`](Self::step) is the single entry point a frontend calls once per
/// rendered frame, before drawing: input is resolved, both fighters advance,
/// and the phase is refreshed, in that order. The session never draws.
#[derive(Debug)]
pub struct MatchSession {
    arena: MatchState,
    latch: ButtonLatch,
    enemy: EnemyDriver,
    /// Frames stepped since the session started.
    frame: u64,
}

impl MatchSession {
    /// Builds the arena with both fighters at their corners.
    pub fn new(
        config: MatchConfig,
        player_start: Vec2,
        enemy_start: Vec2,
    ) -> Result<Self, EntityError> {
        Ok(Self {
            arena: MatchState::new(config, player_start, enemy_start)?,
            latch: ButtonLatch::new(),
            enemy: EnemyDriver::new(),
            frame: 0,
        })
    }

    /// Advances the match by one frame.
    ///
    /// The player's face follows the pointer; a click-down edge throws a
    /// punch (always swinging, damaging only in reach); the enemy driver
    /// makes its move; then both entities advance their animations. Once
    /// the match is over, punches stop routing while animations run on.
    pub fn step(&mut self, input: FrameInput) {
        self.frame += 1;

        self.arena
            .fighter_mut(FighterId::Player)
            .set_position(input.pointer);

        // Edge detection runs every frame so a button held across the end
        // of the match does not fire into the next phase.
        let clicked = self.latch.rising_edge(input.button_down);

        if self.arena.phase() == MatchPhase::Fighting {
            self.enemy.drive(&mut self.arena);

            if clicked {
                let in_reach = self.arena.in_reach();
                tracing::debug!(target: "brawl::session", in_reach, "player punches");
                self.arena.punch(FighterId::Player, in_reach);
            }
        }

        let phase_before = self.arena.phase();
        self.arena.update();
        if let (MatchPhase::Fighting, MatchPhase::Over { winner }) =
            (phase_before, self.arena.phase())
        {
            tracing::info!(
                target: "brawl::session",
                frame = self.frame,
                %winner,
                "knockout"
            );
        }
    }

    pub fn arena(&self) -> &MatchState {
        &self.arena
    }

    pub fn phase(&self) -> MatchPhase {
        self.arena.phase()
    }

    pub fn winner(&self) -> Option<FighterId> {
        self.arena.winner()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}
