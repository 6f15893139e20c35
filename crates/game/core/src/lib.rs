//! Deterministic match logic for the two-fighter punch-out game.
//!
//! `brawl-core` defines the frame-stepped combat model: timed actions (the
//! generic curve-over-frames animation mechanism), the clamped health bar,
//! the fighter entity composing a punch and a get-hit animation, and the
//! match arena that owns both fighters. Everything here advances exactly one
//! step per call to [`MatchState::update`]; there is no I/O, no clock, and
//! no rendering state beyond what a frontend needs to read back.
pub mod animation;
pub mod config;
pub mod entity;
pub mod geometry;
pub mod health;
pub mod match_state;

pub use animation::{ActionRegistry, ActionState, AnimationError, TimedAction};
pub use config::{ConfigError, FighterConfig, MatchConfig};
pub use entity::{Body, Entity, EntityError, FaceTint, FighterId};
pub use health::HealthBar;
pub use match_state::{MatchPhase, MatchState};

pub use glam::Vec2;
