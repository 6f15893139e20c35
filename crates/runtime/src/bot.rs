//! The enemy policy: close the distance, then punch on a fixed cadence.

use brawl_core::{FighterId, MatchState};

/// Drives the enemy fighter one decision per frame.
///
/// Outside punching reach the enemy walks toward the player at its
/// configured speed; inside reach it punches whenever its cooldown has
/// elapsed. The cadence lives in the entity's cooldown countdown, so the
/// driver itself stays stateless and the whole policy is deterministic in
/// frame counts.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnemyDriver;

impl EnemyDriver {
    pub fn new() -> Self {
        Self
    }

    /// Decides and applies the enemy's move for this frame. Must run before
    /// [`MatchState::update`] so the decision uses this frame's positions.
    pub fn drive(&self, arena: &mut MatchState) {
        if arena.fighter(FighterId::Enemy).is_dead() {
            return;
        }

        let player_pos = arena.fighter(FighterId::Player).position();
        if !arena.in_reach() {
            let speed = arena.fighter(FighterId::Enemy).config().speed;
            arena
                .fighter_mut(FighterId::Enemy)
                .move_towards(player_pos, speed);
        } else if arena.fighter(FighterId::Enemy).ready_to_punch() {
            tracing::debug!(target: "brawl::bot", "enemy punches");
            arena.punch(FighterId::Enemy, true);
        }
    }
}
