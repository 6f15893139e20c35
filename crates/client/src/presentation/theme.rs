//! Styling rules for the terminal UI.

use brawl_core::{FaceTint, FighterId};
use ratatui::style::{Color, Modifier, Style};

/// Consistent color scheme for the fight screen.
pub struct BrawlTheme;

impl BrawlTheme {
    /// Face style: each fighter has a base color; a landing hit flashes the
    /// face red, matching the core's tint state.
    pub fn face(&self, fighter: FighterId, tint: FaceTint) -> Style {
        match tint {
            FaceTint::Hit => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            FaceTint::Base => Style::default().fg(match fighter {
                FighterId::Player => Color::Yellow,
                FighterId::Enemy => Color::LightMagenta,
            }),
        }
    }

    pub fn fist(&self, fighter: FighterId) -> Style {
        Style::default().fg(match fighter {
            FighterId::Player => Color::LightYellow,
            FighterId::Enemy => Color::Magenta,
        })
    }

    /// Health gauge color by remaining fraction.
    pub fn health(&self, fraction: f32) -> Style {
        let color = if fraction >= 0.75 {
            Color::Green
        } else if fraction >= 0.5 {
            Color::Yellow
        } else if fraction >= 0.25 {
            Color::LightRed
        } else {
            Color::Red
        };
        Style::default().fg(color)
    }

    pub fn banner(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    /// Dead fighters render dimmed.
    pub fn knocked_out(&self, style: Style) -> Style {
        style.add_modifier(Modifier::DIM)
    }
}
