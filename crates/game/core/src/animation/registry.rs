//! Named collection of timed actions scoped to one subject type.

use std::collections::BTreeMap;

use super::{AnimationError, TimedAction};

/// A map of action id to [`TimedAction`], advanced as a unit once per frame.
///
/// Invariant: registered curves must not read state another registered curve
/// writes within the same frame. [`advance_all`](Self::advance_all) makes no
/// ordering promise between actions, so a cross-dependent pair would observe
/// half-updated state.
pub struct ActionRegistry<S> {
    actions: BTreeMap<String, TimedAction<S>>,
}

impl<S> ActionRegistry<S> {
    pub fn new() -> Self {
        Self {
            actions: BTreeMap::new(),
        }
    }

    /// Registers `action` under `id`.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        action: TimedAction<S>,
    ) -> Result<(), AnimationError> {
        let id = id.into();
        if self.actions.contains_key(&id) {
            return Err(AnimationError::DuplicateAction(id));
        }
        self.actions.insert(id, action);
        Ok(())
    }

    /// Returns a mutable handle to the action registered under `id`, so the
    /// owner can play/pause/stop/resume it.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut TimedAction<S>, AnimationError> {
        self.actions
            .get_mut(id)
            .ok_or_else(|| AnimationError::UnknownAction(id.to_string()))
    }

    pub fn get(&self, id: &str) -> Result<&TimedAction<S>, AnimationError> {
        self.actions
            .get(id)
            .ok_or_else(|| AnimationError::UnknownAction(id.to_string()))
    }

    /// Advances every registered action one frame against `subject`.
    pub fn advance_all(&mut self, subject: &mut S) {
        for action in self.actions.values_mut() {
            action.advance(subject);
        }
    }
}

impl<S> Default for ActionRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for ActionRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.actions.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_action() -> TimedAction<u32> {
        TimedAction::new(3, |count: &mut u32, _t| *count += 1)
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = ActionRegistry::new();
        registry.register("punch", counting_action()).unwrap();

        let err = registry.register("punch", counting_action()).unwrap_err();
        assert_eq!(err, AnimationError::DuplicateAction("punch".to_string()));
    }

    #[test]
    fn unknown_lookup_is_an_error() {
        let mut registry = ActionRegistry::<u32>::new();
        let err = registry.get_mut("get-hit").unwrap_err();
        assert_eq!(err, AnimationError::UnknownAction("get-hit".to_string()));
    }

    #[test]
    fn advance_all_drives_every_playing_action() {
        let mut registry = ActionRegistry::new();
        registry.register("a", counting_action()).unwrap();
        registry.register("b", counting_action()).unwrap();
        registry.get_mut("a").unwrap().play();

        let mut count = 0;
        registry.advance_all(&mut count);
        // only "a" is playing
        assert_eq!(count, 1);

        registry.get_mut("b").unwrap().play();
        registry.advance_all(&mut count);
        assert_eq!(count, 3);
    }
}
