//! The arena owning both fighters and the single punch-routing path.

use glam::Vec2;

use crate::config::MatchConfig;
use crate::entity::{Entity, EntityError, FighterId};
use crate::geometry;

/// Match lifecycle. One-way: `Fighting` until a fighter dies, then
/// `Over` with the survivor recorded for the rest of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    Fighting,
    Over { winner: FighterId },
}

/// Owns the two entities and routes every cross-entity mutation.
///
/// The fighters never hold references to each other; they carry each
/// other's [`FighterId`] and this arena resolves ids to entities, so no
/// ownership cycle ever forms between the two.
#[derive(Debug)]
pub struct MatchState {
    config: MatchConfig,
    player: Entity,
    enemy: Entity,
    phase: MatchPhase,
}

impl MatchState {
    /// Builds both fighters at their starting positions and wires the
    /// opponent links (two-phase construction).
    pub fn new(
        config: MatchConfig,
        player_start: Vec2,
        enemy_start: Vec2,
    ) -> Result<Self, EntityError> {
        let mut player = Entity::new(FighterId::Player, config.player, player_start)?;
        let mut enemy = Entity::new(FighterId::Enemy, config.enemy, enemy_start)?;
        player.set_opponent(FighterId::Enemy);
        enemy.set_opponent(FighterId::Player);

        Ok(Self {
            config,
            player,
            enemy,
            phase: MatchPhase::Fighting,
        })
    }

    /// Advances both fighters one frame and refreshes the phase.
    ///
    /// Animations keep advancing after the match is decided so the final
    /// swing and flash play out; only punch routing stops.
    pub fn update(&mut self) {
        let player_pos = self.player.position();
        let enemy_pos = self.enemy.position();
        self.player.update(Some(enemy_pos));
        self.enemy.update(Some(player_pos));

        if self.phase == MatchPhase::Fighting {
            if self.enemy.is_dead() {
                self.phase = MatchPhase::Over {
                    winner: FighterId::Player,
                };
            } else if self.player.is_dead() {
                self.phase = MatchPhase::Over {
                    winner: FighterId::Enemy,
                };
            }
        }
    }

    /// Routes one punch. The attacker's swing always plays (feedback for
    /// the attempt); the defender is only damaged when `in_range` and still
    /// alive. Dead or post-match attackers throw nothing.
    pub fn punch(&mut self, attacker: FighterId, in_range: bool) {
        if self.phase != MatchPhase::Fighting || self.fighter(attacker).is_dead() {
            return;
        }

        let (attacker_entity, defender) = self.pair_mut(attacker);
        let damage = attacker_entity.config().punch_damage;
        let from = attacker_entity.position();
        attacker_entity.throw_punch();

        if in_range && defender.is_alive() {
            defender.take_punch(from, damage);
        }
    }

    /// True when the fighters are within punching reach of each other.
    pub fn in_reach(&self) -> bool {
        geometry::distance_squared(self.player.position(), self.enemy.position())
            <= self.config.reach * self.config.reach
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn winner(&self) -> Option<FighterId> {
        match self.phase {
            MatchPhase::Over { winner } => Some(winner),
            MatchPhase::Fighting => None,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn fighter(&self, id: FighterId) -> &Entity {
        match id {
            FighterId::Player => &self.player,
            FighterId::Enemy => &self.enemy,
        }
    }

    pub fn fighter_mut(&mut self, id: FighterId) -> &mut Entity {
        match id {
            FighterId::Player => &mut self.player,
            FighterId::Enemy => &mut self.enemy,
        }
    }

    /// Splits the arena into (attacker, defender) borrows.
    fn pair_mut(&mut self, attacker: FighterId) -> (&mut Entity, &mut Entity) {
        match attacker {
            FighterId::Player => (&mut self.player, &mut self.enemy),
            FighterId::Enemy => (&mut self.enemy, &mut self.player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> MatchState {
        MatchState::new(
            MatchConfig::default(),
            Vec2::new(100.0, 100.0),
            Vec2::new(1000.0, 100.0),
        )
        .unwrap()
    }

    #[test]
    fn twenty_connected_punches_end_the_match() {
        let mut arena = arena();

        for _ in 0..20 {
            arena.punch(FighterId::Player, true);
            arena.update();
        }

        assert_eq!(arena.fighter(FighterId::Enemy).health().health(), 0);
        assert!(arena.fighter(FighterId::Enemy).is_dead());
        assert_eq!(arena.winner(), Some(FighterId::Player));

        // The 21st punch routes nothing: the match is over
        arena.punch(FighterId::Player, true);
        assert_eq!(arena.fighter(FighterId::Enemy).health().health(), 0);
    }

    #[test]
    fn out_of_range_punch_swings_without_damage() {
        let mut arena = arena();
        arena.punch(FighterId::Player, false);
        // two frames in: the swing has left its rest reach (frame one runs
        // with t = 0, which is still the rest distance)
        arena.update();
        arena.update();

        let enemy = arena.fighter(FighterId::Enemy);
        assert_eq!(enemy.health().health(), enemy.health().capacity());
        assert!(
            arena.fighter(FighterId::Player).fist_reach() > MatchConfig::FIST_REACH_DEFAULT
        );
    }

    #[test]
    fn enemy_punches_damage_the_player() {
        let mut arena = arena();
        arena.punch(FighterId::Enemy, true);
        assert_eq!(
            arena.fighter(FighterId::Player).health().health(),
            MatchConfig::DEFAULT_MAX_HEALTH - MatchConfig::DEFAULT_PUNCH_DAMAGE
        );
        assert_eq!(arena.winner(), None);
    }

    #[test]
    fn reach_check_uses_center_distance() {
        let mut arena = arena();
        assert!(!arena.in_reach());

        arena
            .fighter_mut(FighterId::Player)
            .set_position(Vec2::new(900.0, 100.0));
        assert!(arena.in_reach());
    }

    #[test]
    fn winner_is_declared_on_the_frame_of_death() {
        let mut arena = arena();
        for _ in 0..19 {
            arena.punch(FighterId::Player, true);
        }
        arena.update();
        assert_eq!(arena.phase(), MatchPhase::Fighting);

        arena.punch(FighterId::Player, true);
        arena.update();
        assert_eq!(
            arena.phase(),
            MatchPhase::Over {
                winner: FighterId::Player
            }
        );
    }
}
