//! CLI-specific configuration for the terminal frontend.
use std::env;

use glam::Vec2;

/// Terminal frontend configuration.
///
/// The match itself runs in a fixed pixel-like arena space (the combat
/// constants in `brawl-core` are tuned for it); the frontend maps terminal
/// cells onto that space with a per-axis scale, since cells are roughly
/// twice as tall as they are wide.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Milliseconds between frames (default 16, about 60 FPS).
    pub frame_interval_ms: u64,
    /// Arena units covered by one terminal column.
    pub px_per_cell_x: f32,
    /// Arena units covered by one terminal row.
    pub px_per_cell_y: f32,
    /// Directory the log file is written into.
    pub log_dir: String,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BRAWL_FRAME_INTERVAL_MS` - frame interval (default: 16)
    /// - `BRAWL_PX_PER_CELL_X` / `BRAWL_PX_PER_CELL_Y` - cell-to-arena scale
    /// - `BRAWL_LOG_DIR` - log directory (default: "logs")
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_env::<u64>("BRAWL_FRAME_INTERVAL_MS") {
            config.frame_interval_ms = interval.max(1);
        }
        if let Some(scale) = read_env::<f32>("BRAWL_PX_PER_CELL_X") {
            config.px_per_cell_x = scale.max(1.0);
        }
        if let Some(scale) = read_env::<f32>("BRAWL_PX_PER_CELL_Y") {
            config.px_per_cell_y = scale.max(1.0);
        }
        if let Ok(dir) = env::var("BRAWL_LOG_DIR") {
            config.log_dir = dir;
        }

        config
    }

    /// Maps a terminal cell to arena coordinates.
    pub fn cell_to_arena(&self, column: u16, row: u16) -> Vec2 {
        Vec2::new(
            column as f32 * self.px_per_cell_x,
            row as f32 * self.px_per_cell_y,
        )
    }

    /// Maps an arena position back to the nearest terminal cell.
    pub fn arena_to_cell(&self, position: Vec2) -> (i32, i32) {
        (
            (position.x / self.px_per_cell_x).round() as i32,
            (position.y / self.px_per_cell_y).round() as i32,
        )
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            // a 120x40 terminal spans the full 1920x1080 arena
            px_per_cell_x: 16.0,
            px_per_cell_y: 27.0,
            log_dir: "logs".to_string(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
