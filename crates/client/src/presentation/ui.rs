//! The fight screen: faces, fists, health gauges, winner banner.

use brawl_core::{FighterId, MatchPhase};
use brawl_runtime::MatchSession;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::config::CliConfig;
use crate::presentation::{
    sprites::{Sprite, SpriteSet},
    theme::BrawlTheme,
};

/// Draws one full frame of the match.
pub fn render(
    frame: &mut Frame,
    session: &MatchSession,
    sprites: &SpriteSet,
    theme: &BrawlTheme,
    config: &CliConfig,
) {
    let area = frame.area();

    // enemy first so the player overdraws on overlap
    render_fighter(frame, area, session, FighterId::Enemy, sprites, theme, config);
    render_fighter(frame, area, session, FighterId::Player, sprites, theme, config);

    render_health(frame, area, session, FighterId::Player, theme);
    render_health(frame, area, session, FighterId::Enemy, theme);

    if let MatchPhase::Over { winner } = session.phase() {
        render_banner(frame, area, winner, theme);
    }
}

fn render_fighter(
    frame: &mut Frame,
    area: Rect,
    session: &MatchSession,
    id: FighterId,
    sprites: &SpriteSet,
    theme: &BrawlTheme,
    config: &CliConfig,
) {
    let entity = session.arena().fighter(id);
    let face_sprite = match id {
        FighterId::Player => &sprites.player_face,
        FighterId::Enemy => &sprites.enemy_face,
    };

    let mut face_style = theme.face(id, entity.tint());
    let mut fist_style = theme.fist(id);
    if entity.is_dead() {
        face_style = theme.knocked_out(face_style);
        fist_style = theme.knocked_out(fist_style);
    }

    blit_sprite(
        frame,
        area,
        face_sprite,
        face_style,
        config.arena_to_cell(entity.position()),
    );
    blit_sprite(
        frame,
        area,
        &sprites.fist,
        fist_style,
        config.arena_to_cell(entity.fist_anchor()),
    );
}

/// Copies a sprite into the frame buffer centered on `center`, clipping
/// rows and columns that fall outside `area`.
fn blit_sprite(frame: &mut Frame, area: Rect, sprite: &Sprite, style: Style, center: (i32, i32)) {
    let left = center.0 - sprite.width() as i32 / 2;
    let top = center.1 - sprite.height() as i32 / 2;

    for (row_index, row) in sprite.rows().iter().enumerate() {
        let y = top + row_index as i32;
        if y < area.top() as i32 || y >= area.bottom() as i32 {
            continue;
        }

        for (col_index, glyph) in row.chars().enumerate() {
            let x = left + col_index as i32;
            if x < area.left() as i32 || x >= area.right() as i32 || glyph == ' ' {
                continue;
            }
            frame.buffer_mut()[(x as u16, y as u16)].set_char(glyph).set_style(style);
        }
    }
}

fn render_health(
    frame: &mut Frame,
    area: Rect,
    session: &MatchSession,
    id: FighterId,
    theme: &BrawlTheme,
) {
    let bar = session.arena().fighter(id).health();
    let width = (area.width / 3).clamp(10, 42);
    let rect = match id {
        FighterId::Player => Rect::new(area.left() + 1, area.top(), width, 3),
        FighterId::Enemy => Rect::new(area.right().saturating_sub(width + 1), area.top(), width, 3),
    }
    .intersection(area);
    if rect.height < 3 {
        return;
    }

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(id.to_string()))
        .gauge_style(theme.health(bar.fraction()))
        .ratio(bar.fraction() as f64)
        .label(format!("{}/{}", bar.health(), bar.capacity()));
    frame.render_widget(gauge, rect);
}

fn render_banner(frame: &mut Frame, area: Rect, winner: FighterId, theme: &BrawlTheme) {
    let text = format!("  {} wins!  press q to quit  ", winner);
    let width = (text.chars().count() as u16).min(area.width);
    let rect = Rect::new(
        area.left() + (area.width.saturating_sub(width)) / 2,
        area.top() + area.height / 2,
        width,
        1,
    )
    .intersection(area);
    frame.render_widget(Paragraph::new(text).style(theme.banner()), rect);
}
