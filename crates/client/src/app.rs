//! The frame loop: poll input, step the match, draw.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use glam::Vec2;
use tokio::time::{self, Duration, MissedTickBehavior};

use brawl_core::MatchConfig;
use brawl_runtime::{FrameInput, MatchSession};

use crate::config::CliConfig;
use crate::presentation::{sprites::SpriteSet, terminal, theme::BrawlTheme, ui};

/// Arena-space starting corner for the enemy; the player spawns wherever
/// the pointer is.
const ENEMY_START: Vec2 = Vec2::new(1520.0, 600.0);
const PLAYER_START: Vec2 = Vec2::new(100.0, 540.0);

/// Owns the session and the sampled input state between frames.
pub struct CliApp {
    config: CliConfig,
    session: MatchSession,
    sprites: SpriteSet,
    theme: BrawlTheme,
    /// Last pointer position, already mapped into arena space.
    pointer: Vec2,
    /// Current left-button level; the runtime turns it into a click edge.
    button_down: bool,
}

impl CliApp {
    /// Validates sprites and builds the match. Fails before the terminal is
    /// touched, so configuration errors land on stderr, not inside the TUI.
    pub fn new(config: CliConfig) -> Result<Self> {
        let sprites = SpriteSet::load()?;
        let session = MatchSession::new(MatchConfig::default(), PLAYER_START, ENEMY_START)?;

        Ok(Self {
            config,
            session,
            sprites,
            theme: BrawlTheme,
            pointer: PLAYER_START,
            button_down: false,
        })
    }

    /// Runs until the player quits. Each tick: drain pending terminal
    /// events, step the session once, draw once.
    pub async fn run(mut self) -> Result<()> {
        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let mut tick = time::interval(Duration::from_millis(self.config.frame_interval_ms));
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(target: "brawl::cli", "match started");
        loop {
            tick.tick().await;

            if self.drain_input()? {
                break;
            }

            self.session
                .step(FrameInput::new(self.pointer, self.button_down));

            terminal.draw(|frame| {
                ui::render(frame, &self.session, &self.sprites, &self.theme, &self.config)
            })?;
        }

        tracing::info!(target: "brawl::cli", winner = ?self.session.winner(), "quit");
        Ok(())
    }

    /// Consumes every pending terminal event. Returns true on quit.
    fn drain_input(&mut self) -> Result<bool> {
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(true);
                    }
                }
                Event::Mouse(mouse) => {
                    match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => self.button_down = true,
                        MouseEventKind::Up(MouseButton::Left) => self.button_down = false,
                        _ => {}
                    }
                    // every mouse event carries the pointer cell
                    self.pointer = self.config.cell_to_arena(mouse.column, mouse.row);
                }
                _ => {}
            }
        }
        Ok(false)
    }
}
