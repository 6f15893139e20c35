//! The animated part of a fighter, and the two curves that drive it.
//!
//! [`Body`] is the subject both registered actions mutate: the punch action
//! animates `fist_reach`, the get-hit action animates `tint` and `position`.
//! Keeping it separate from [`Entity`](super::Entity) is what lets the
//! entity pass `&mut Body` into its own action registry each frame.

use glam::Vec2;

use crate::animation::TimedAction;
use crate::config::MatchConfig;
use crate::geometry;

/// Face color state toggled by the get-hit flash.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaceTint {
    /// The normal face color.
    #[default]
    Base,
    /// The red flash shown while a hit lands.
    Hit,
}

/// Mutable animated state of one fighter.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    /// Center of the face; every other visual position derives from this.
    pub position: Vec2,
    /// Animated distance from the face center to the fist anchor.
    pub fist_reach: f32,
    pub tint: FaceTint,
    /// Attacker position captured when the last punch landed; the knockback
    /// oscillation pushes away from here.
    pub knock_from: Vec2,
}

impl Body {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            fist_reach: MatchConfig::FIST_REACH_DEFAULT,
            tint: FaceTint::Base,
            knock_from: Vec2::ZERO,
        }
    }
}

/// The punch action: a triangular pulse on `fist_reach`, rising from the
/// rest distance to the punch distance at `t = 0.5` and falling back by
/// `t = 1.0`.
pub fn punch_action() -> TimedAction<Body> {
    TimedAction::new(MatchConfig::PUNCH_FRAMES, |body: &mut Body, t| {
        let rest = MatchConfig::FIST_REACH_DEFAULT;
        let swing = MatchConfig::FIST_REACH_PUNCH - rest;
        body.fist_reach = if t < 0.5 {
            rest + 2.0 * t * swing
        } else {
            rest + 2.0 * (1.0 - t) * swing
        };
    })
}

/// The get-hit action: flash the face at the start, restore it at the end,
/// and shake the body along the attacker-to-defender axis in between.
///
/// The shake flips sign with the parity of `floor(t * 20)`, so displacement
/// approximately cancels over the full run instead of accumulating.
pub fn get_hit_action() -> TimedAction<Body> {
    TimedAction::new(MatchConfig::GET_HIT_FRAMES, |body: &mut Body, t| {
        if t <= 1e-4 {
            body.tint = FaceTint::Hit;
        }
        if t >= 1.0 - 1e-4 {
            body.tint = FaceTint::Base;
        }

        // Unit vector pointing from the attacker toward this body. Falls
        // back to +X when the two coincide.
        let away = geometry::direction_or(
            geometry::between(body.knock_from, body.position),
            Vec2::X,
        );
        if (t * 20.0) as i32 % 2 == 0 {
            body.position += away * MatchConfig::PUNCH_POWER;
        } else {
            body.position -= away * MatchConfig::PUNCH_POWER;
        }
    })
}
