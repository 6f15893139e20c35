//! The combat actor: health, fist aiming, and the two fight animations.

mod body;

pub use body::{Body, FaceTint};

use glam::Vec2;

use crate::animation::{ActionRegistry, AnimationError, TimedAction};
use crate::config::{ConfigError, FighterConfig};
use crate::geometry;
use crate::health::HealthBar;

/// Registry id of the punch (fist reach) action.
pub const PUNCH_ACTION: &str = "punch";
/// Registry id of the get-hit (flash + knockback) action.
pub const GET_HIT_ACTION: &str = "get-hit";

/// Which of the two fighters an [`Entity`] is.
///
/// Doubles as the arena index that replaces a stored opponent pointer: the
/// two entities are wired to each other by id after both exist, and the
/// match state resolves ids back to entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FighterId {
    Player,
    Enemy,
}

impl FighterId {
    /// The other fighter.
    pub fn opponent(self) -> Self {
        match self {
            FighterId::Player => FighterId::Enemy,
            FighterId::Enemy => FighterId::Player,
        }
    }
}

/// Errors surfaced while constructing an entity.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EntityError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Animation(#[from] AnimationError),
}

/// One fighter: a face (whose center is the entity's position), a fist kept
/// aimed at the opponent, a health bar, and the punch/get-hit animations.
///
/// Alive → dead is derived from health and one-way: once health reaches
/// zero the entity stops taking punches and aims its fist straight out.
pub struct Entity {
    id: FighterId,
    config: FighterConfig,
    body: Body,
    health: HealthBar,
    opponent: Option<FighterId>,
    /// Frames until this fighter may punch again; zero means ready.
    cooldown: u32,
    /// Where the fist sprite sits, recomputed every update.
    fist_anchor: Vec2,
    actions: ActionRegistry<Body>,
}

impl Entity {
    /// Creates a fighter at `position` with its two animations registered.
    /// The opponent link is wired separately once both fighters exist.
    pub fn new(id: FighterId, config: FighterConfig, position: Vec2) -> Result<Self, EntityError> {
        let mut actions = ActionRegistry::new();
        actions.register(PUNCH_ACTION, body::punch_action())?;
        actions.register(GET_HIT_ACTION, body::get_hit_action())?;

        let body = Body::new(position);
        let fist_anchor = position + Vec2::X * body.fist_reach;

        Ok(Self {
            id,
            config,
            body,
            health: HealthBar::new(config.max_health)?,
            opponent: None,
            cooldown: 0,
            fist_anchor,
            actions,
        })
    }

    /// Wires the non-owning opponent link (second phase of construction).
    pub fn set_opponent(&mut self, opponent: FighterId) {
        self.opponent = Some(opponent);
    }

    pub fn opponent(&self) -> Option<FighterId> {
        self.opponent
    }

    /// Advances the fighter one frame: ticks the punch cooldown, advances
    /// both animations, then re-aims the fist at `opponent_pos`.
    pub fn update(&mut self, opponent_pos: Option<Vec2>) {
        self.cooldown = self.cooldown.saturating_sub(1);
        self.actions.advance_all(&mut self.body);
        self.aim_fist(opponent_pos);
    }

    /// Starts the punch swing and arms the cooldown. The swing plays whether
    /// or not anything is in range; landing the hit is the caller's call.
    pub fn throw_punch(&mut self) {
        self.action_mut(PUNCH_ACTION).play();
        self.cooldown = self.config.punch_cooldown;
    }

    /// Takes a punch thrown from `from`: flash, knockback, and `damage`
    /// health points lost.
    ///
    /// A dead fighter takes no further punches; the call is a silent no-op
    /// so `health == 0` stays terminal.
    pub fn take_punch(&mut self, from: Vec2, damage: u32) {
        if self.is_dead() {
            return;
        }
        self.body.knock_from = from;
        self.action_mut(GET_HIT_ACTION).play();
        self.health.damage(damage);
    }

    /// Moves up to `speed` toward `target`, stopping exactly on it.
    pub fn move_towards(&mut self, target: Vec2, speed: f32) {
        let to_target = geometry::between(self.body.position, target);
        let dist = geometry::length(to_target);
        if dist <= speed {
            self.body.position = target;
        } else {
            self.body.position += geometry::direction(to_target) * speed;
        }
    }

    /// True when the punch cooldown has elapsed and the fighter is alive.
    pub fn ready_to_punch(&self) -> bool {
        self.cooldown == 0 && self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_empty()
    }

    pub fn id(&self) -> FighterId {
        self.id
    }

    pub fn config(&self) -> &FighterConfig {
        &self.config
    }

    pub fn health(&self) -> &HealthBar {
        &self.health
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.body.position = position;
    }

    /// Center of the fist sprite, as of the last update.
    pub fn fist_anchor(&self) -> Vec2 {
        self.fist_anchor
    }

    pub fn fist_reach(&self) -> f32 {
        self.body.fist_reach
    }

    pub fn tint(&self) -> FaceTint {
        self.body.tint
    }

    /// Points the fist at the opponent, scaled by the animated reach. With
    /// no opponent position, or once dead, the fist hangs straight out
    /// along +X. A coincident opponent also degrades to +X rather than
    /// normalizing a zero vector.
    fn aim_fist(&mut self, opponent_pos: Option<Vec2>) {
        let aim = match opponent_pos {
            Some(target) if self.is_alive() => {
                geometry::direction_or(geometry::between(self.body.position, target), Vec2::X)
            }
            _ => Vec2::X,
        };
        self.fist_anchor = self.body.position + aim * self.body.fist_reach;
    }

    /// Fetches a registered action; the two ids used here are registered at
    /// construction, so a miss is a wiring bug worth dying over.
    fn action_mut(&mut self, id: &str) -> &mut TimedAction<Body> {
        self.actions
            .get_mut(id)
            .expect("fight actions are registered at construction")
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("body", &self.body)
            .field("health", &self.health)
            .field("cooldown", &self.cooldown)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;

    fn fighter(position: Vec2) -> Entity {
        Entity::new(FighterId::Player, FighterConfig::player(), position).unwrap()
    }

    #[test]
    fn repeated_punches_drain_health_to_zero_and_stop() {
        let mut defender = fighter(Vec2::new(300.0, 0.0));
        let capacity = defender.health().capacity();
        let damage = 5;

        for hits in 1..=20u32 {
            defender.take_punch(Vec2::ZERO, damage);
            assert_eq!(defender.health().health(), capacity - hits * damage);
            assert_eq!(defender.is_dead(), hits == 20);
        }

        // 21st punch: dead fighters take no further damage and do not flash
        defender.update(None);
        let tint_before = defender.tint();
        defender.take_punch(Vec2::ZERO, damage);
        assert_eq!(defender.health().health(), 0);
        assert_eq!(defender.tint(), tint_before);
    }

    #[test]
    fn becomes_dead_exactly_when_health_first_reaches_zero() {
        let mut defender = fighter(Vec2::ZERO);
        defender.take_punch(Vec2::new(-10.0, 0.0), 99);
        assert!(defender.is_alive());
        defender.take_punch(Vec2::new(-10.0, 0.0), 1);
        assert!(defender.is_dead());
    }

    #[test]
    fn fist_anchor_is_independent_of_opponent_distance() {
        for r in [1.0f32, 150.0, 4000.0] {
            let mut entity = fighter(Vec2::new(100.0, 100.0));
            let direction = Vec2::new(0.6, 0.8); // unit vector
            entity.update(Some(entity.position() + direction * r));

            let expected = entity.position() + direction * entity.fist_reach();
            assert!((entity.fist_anchor() - expected).length() < 1e-3);
        }
    }

    #[test]
    fn fist_points_straight_out_without_an_opponent() {
        let mut entity = fighter(Vec2::new(50.0, 60.0));
        entity.update(None);
        assert_eq!(
            entity.fist_anchor(),
            Vec2::new(50.0 + MatchConfig::FIST_REACH_DEFAULT, 60.0)
        );
    }

    #[test]
    fn dead_fighter_lets_the_fist_hang() {
        let mut entity = fighter(Vec2::ZERO);
        entity.take_punch(Vec2::new(-5.0, 0.0), u32::MAX);
        assert!(entity.is_dead());

        // even with a live opponent position, a dead fighter aims nowhere
        entity.update(Some(Vec2::new(0.0, 999.0)));
        assert_eq!(
            entity.fist_anchor(),
            entity.position() + Vec2::X * entity.fist_reach()
        );
    }

    #[test]
    fn throw_punch_arms_the_cooldown() {
        let mut entity =
            Entity::new(FighterId::Enemy, FighterConfig::enemy(), Vec2::ZERO).unwrap();
        assert!(entity.ready_to_punch());

        entity.throw_punch();
        assert!(!entity.ready_to_punch());

        for _ in 0..MatchConfig::DEFAULT_ENEMY_PUNCH_COOLDOWN {
            entity.update(None);
        }
        assert!(entity.ready_to_punch());
    }

    #[test]
    fn move_towards_snaps_onto_a_close_target() {
        let mut entity = fighter(Vec2::ZERO);
        entity.move_towards(Vec2::new(3.0, 0.0), 5.0);
        assert_eq!(entity.position(), Vec2::new(3.0, 0.0));

        entity.move_towards(Vec2::new(103.0, 0.0), 5.0);
        assert_eq!(entity.position(), Vec2::new(8.0, 0.0));
    }

    #[test]
    fn opponent_link_is_wired_after_construction() {
        let mut entity = fighter(Vec2::ZERO);
        assert_eq!(entity.opponent(), None);
        entity.set_opponent(FighterId::Enemy);
        assert_eq!(entity.opponent(), Some(FighterId::Enemy));
    }
}
