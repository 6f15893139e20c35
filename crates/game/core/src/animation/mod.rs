//! Frame-quantized animation building blocks.
//!
//! A [`TimedAction`] plays a user-supplied curve over a fixed number of
//! frames with play/stop/pause/resume transport; an [`ActionRegistry`] is a
//! named collection of actions over one subject type, advanced once per
//! frame by its owner. The subject is not stored inside the action: the
//! owner passes `&mut S` into each advance call, which is what lets a
//! fighter own its registry and its animated body side by side.

mod action;
mod registry;

pub use action::{ActionState, TimedAction};
pub use registry::ActionRegistry;

/// Errors surfaced while wiring or looking up registered actions.
///
/// Both variants indicate a wiring bug in the owning entity, not a runtime
/// condition, so callers are expected to propagate them out of construction
/// or fail fast.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    #[error("action '{0}' is already registered")]
    DuplicateAction(String),

    #[error("no action registered under '{0}'")]
    UnknownAction(String),
}
