//! Terminal presentation: setup/teardown, theme, sprites, and widgets.

pub mod sprites;
pub mod terminal;
pub mod theme;
pub mod ui;
