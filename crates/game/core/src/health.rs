//! Clamped health counter plus its derived display fraction.

use crate::config::ConfigError;

/// A bounded health meter: `0 <= health <= capacity` holds after every
/// mutation. The frontend reads it back through [`health`](Self::health) and
/// [`fraction`](Self::fraction); nothing here knows how a bar is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthBar {
    health: u32,
    capacity: u32,
}

impl HealthBar {
    /// Creates a full bar with the given capacity.
    ///
    /// Zero capacity is a configuration error: the display fraction would
    /// divide by zero, so construction refuses it up front.
    pub fn new(capacity: u32) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroHealthCapacity);
        }
        Ok(Self {
            health: capacity,
            capacity,
        })
    }

    /// Removes up to `amount` health, clamping at zero.
    pub fn damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Restores up to `amount` health, clamping at capacity.
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.capacity);
    }

    /// Clamp-sets the counter directly.
    pub fn set_health(&mut self, value: u32) {
        self.health = value.min(self.capacity);
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Remaining health as a fraction in `[0, 1]`, for rendering.
    pub fn fraction(&self) -> f32 {
        self.health as f32 / self.capacity as f32
    }

    pub fn is_empty(&self) -> bool {
        self.health == 0
    }
}
