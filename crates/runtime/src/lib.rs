//! Per-frame match orchestration over [`brawl_core`].
//!
//! The runtime owns the frame-stepped policy the core stays agnostic of:
//! reading pointer input, detecting the click edge, driving the enemy
//! (approach, then punch on a fixed cadence), and stepping the arena in
//! strict poll → update order once per rendered frame. Frontends feed a
//! [`FrameInput`] into [`MatchSession::step`] and read the core state back
//! out for drawing.

mod bot;
mod input;
mod session;

pub use bot::EnemyDriver;
pub use input::{ButtonLatch, FrameInput};
pub use session::MatchSession;
