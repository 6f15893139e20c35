//! ASCII sprites for the two faces and the fist.
//!
//! Sprites are validated once at startup; a malformed sprite is a fatal
//! configuration error surfaced before the event loop starts, the same
//! contract the match core applies to its own construction inputs.

use anyhow::{Result, ensure};

const PLAYER_FACE: &[&str] = &[
    r"  .-----.  ",
    r" /       \ ",
    r"|  ^   ^  |",
    r"|    u    |",
    r" \  \_/  / ",
    r"  '-----'  ",
];

const ENEMY_FACE: &[&str] = &[
    r"  .-----.  ",
    r" /       \ ",
    r"|  >   <  |",
    r"|    ~    |",
    r" \  /-\  / ",
    r"  '-----'  ",
];

const FIST: &[&str] = &[
    r".---.", //
    r"|===|",
    r"'---'",
];

/// A validated rectangular block of sprite rows.
#[derive(Clone, Debug)]
pub struct Sprite {
    rows: Vec<String>,
    width: u16,
    height: u16,
}

impl Sprite {
    fn from_rows(name: &str, rows: &[&str]) -> Result<Self> {
        ensure!(!rows.is_empty(), "sprite '{name}' has no rows");
        let width = rows[0].chars().count();
        ensure!(width > 0, "sprite '{name}' has empty rows");
        for (index, row) in rows.iter().enumerate() {
            ensure!(
                row.chars().count() == width,
                "sprite '{name}' row {index} is not {width} columns wide"
            );
        }

        Ok(Self {
            rows: rows.iter().map(|row| row.to_string()).collect(),
            width: width as u16,
            height: rows.len() as u16,
        })
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }
}

/// The full sprite set the arena widget draws from.
#[derive(Clone, Debug)]
pub struct SpriteSet {
    pub player_face: Sprite,
    pub enemy_face: Sprite,
    pub fist: Sprite,
}

impl SpriteSet {
    /// Loads and validates every sprite.
    pub fn load() -> Result<Self> {
        Ok(Self {
            player_face: Sprite::from_rows("player-face", PLAYER_FACE)?,
            enemy_face: Sprite::from_rows("enemy-face", ENEMY_FACE)?,
            fist: Sprite::from_rows("fist", FIST)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sprites_are_rectangular() {
        let set = SpriteSet::load().unwrap();
        assert_eq!(set.player_face.width(), set.enemy_face.width());
        assert_eq!(set.fist.height(), 3);
    }

    #[test]
    fn ragged_sprite_is_rejected() {
        let err = Sprite::from_rows("bad", &["abc", "toolong"]).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn empty_sprite_is_rejected() {
        assert!(Sprite::from_rows("empty", &[]).is_err());
    }
}
