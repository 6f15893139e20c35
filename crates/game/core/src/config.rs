//! Match configuration constants and tunable parameters.

/// Errors raised when a configuration value cannot produce a valid match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A health bar cannot be built with zero capacity (its display
    /// fraction would divide by zero).
    #[error("health capacity must be positive")]
    ZeroHealthCapacity,
}

/// Per-fighter tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterConfig {
    /// Health bar capacity in health points.
    pub max_health: u32,
    /// Health points removed from the defender per connected punch.
    pub punch_damage: u32,
    /// Minimum frames between two punches thrown by this fighter.
    /// Zero means the fighter is limited only by its driver (the player's
    /// click edge, for instance).
    pub punch_cooldown: u32,
    /// Movement speed in pixels per frame, for driver-controlled fighters.
    pub speed: f32,
}

impl FighterConfig {
    /// The mouse-driven fighter: no built-in cooldown, no self movement.
    pub fn player() -> Self {
        Self {
            max_health: MatchConfig::DEFAULT_MAX_HEALTH,
            punch_damage: MatchConfig::DEFAULT_PUNCH_DAMAGE,
            punch_cooldown: 0,
            speed: 0.0,
        }
    }

    /// The stalking fighter: punches every 30 frames, closes at 5 px/frame.
    pub fn enemy() -> Self {
        Self {
            max_health: MatchConfig::DEFAULT_MAX_HEALTH,
            punch_damage: MatchConfig::DEFAULT_PUNCH_DAMAGE,
            punch_cooldown: MatchConfig::DEFAULT_ENEMY_PUNCH_COOLDOWN,
            speed: MatchConfig::DEFAULT_ENEMY_SPEED,
        }
    }
}

/// Tunable parameters shared by the whole match.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    /// Fighters closer than this (center to center) are in punching range.
    pub reach: f32,
    pub player: FighterConfig,
    pub enemy: FighterConfig,
}

impl MatchConfig {
    // ===== fixed animation constants =====
    /// Fist rest distance from the face center, in pixels.
    pub const FIST_REACH_DEFAULT: f32 = 100.0;
    /// Fist distance at the apex of a punch.
    pub const FIST_REACH_PUNCH: f32 = 150.0;
    /// Punch animation length in frames.
    pub const PUNCH_FRAMES: u32 = 15;
    /// Get-hit animation (flash + knock oscillation) length in frames.
    pub const GET_HIT_FRAMES: u32 = 10;
    /// Knockback oscillation amplitude per frame, in pixels.
    pub const PUNCH_POWER: f32 = 10.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REACH: f32 = 150.0;
    pub const DEFAULT_MAX_HEALTH: u32 = 100;
    pub const DEFAULT_PUNCH_DAMAGE: u32 = 5;
    pub const DEFAULT_ENEMY_PUNCH_COOLDOWN: u32 = 30;
    pub const DEFAULT_ENEMY_SPEED: f32 = 5.0;

    pub fn new() -> Self {
        Self {
            reach: Self::DEFAULT_REACH,
            player: FighterConfig::player(),
            enemy: FighterConfig::enemy(),
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
