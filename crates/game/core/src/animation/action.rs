//! A single animatable property driven by a curve over a fixed frame count.

/// Transport state of a [`TimedAction`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActionState {
    /// Not running. Advancing is a no-op.
    #[default]
    Idle,
    /// Running; each advance applies the curve and steps the frame counter.
    Playing,
    /// Suspended mid-run; the current frame is preserved until resumed.
    Paused,
}

/// The curve describing the subject's state as a function of normalized time.
///
/// Called once per advanced frame with `t` in `[0, 1]`; `t = 0` is the first
/// frame and `t = 1` the last. All side effects of an action go through the
/// curve mutating the subject.
pub type Curve<S> = Box<dyn Fn(&mut S, f32) + Send>;

/// One property's animation: a curve, a fixed duration in frames, and
/// transport controls.
///
/// The action does not own its subject. The owner passes the subject into
/// [`advance`](Self::advance) every frame, so an entity can keep its actions
/// and the body they animate in sibling fields without aliasing.
pub struct TimedAction<S> {
    curve: Curve<S>,
    duration_frames: u32,
    current_frame: u32,
    state: ActionState,
}

impl<S> TimedAction<S> {
    /// Creates a new idle action over `duration_frames` frames.
    ///
    /// # Panics
    ///
    /// Panics if `duration_frames` is zero; a zero-length action is a
    /// wiring bug, not a runtime condition.
    pub fn new(duration_frames: u32, curve: impl Fn(&mut S, f32) + Send + 'static) -> Self {
        assert!(duration_frames > 0, "action duration must be at least one frame");
        Self {
            curve: Box::new(curve),
            duration_frames,
            current_frame: 0,
            state: ActionState::Idle,
        }
    }

    /// Starts playing from the beginning. A paused action restarts from
    /// frame zero; the pause position is discarded.
    pub fn play(&mut self) {
        self.current_frame = 0;
        self.state = ActionState::Playing;
    }

    /// Stops the action and rewinds it.
    pub fn stop(&mut self) {
        self.current_frame = 0;
        self.state = ActionState::Idle;
    }

    /// Pauses a playing action, preserving the current frame. No-op unless
    /// currently playing.
    pub fn pause(&mut self) {
        if self.state == ActionState::Playing {
            self.state = ActionState::Paused;
        }
    }

    /// Resumes a paused action from its preserved frame. No-op unless
    /// currently paused.
    pub fn resume(&mut self) {
        if self.state == ActionState::Paused {
            self.state = ActionState::Playing;
        }
    }

    /// Advances the action one frame, applying the curve to `subject`.
    ///
    /// No-op unless playing. The final frame runs with `t = 1.0`, after
    /// which the action rewinds to idle by itself; no explicit stop is
    /// needed. A one-frame action fires once with `t = 0.0`.
    pub fn advance(&mut self, subject: &mut S) {
        if self.state != ActionState::Playing {
            return;
        }

        // duration - 1 in the denominator so t spans [0, 1] inclusive.
        let t = if self.duration_frames > 1 {
            self.current_frame as f32 / (self.duration_frames - 1) as f32
        } else {
            0.0
        };
        (self.curve)(subject, t);

        self.current_frame += 1;
        if self.current_frame >= self.duration_frames {
            self.current_frame = 0;
            self.state = ActionState::Idle;
        }
    }

    pub fn state(&self) -> ActionState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == ActionState::Playing
    }

    /// Frame that the next advance will run, in `[0, duration)`.
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn duration_frames(&self) -> u32 {
        self.duration_frames
    }
}

impl<S> std::fmt::Debug for TimedAction<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedAction")
            .field("duration_frames", &self.duration_frames)
            .field("current_frame", &self.current_frame)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every `t` the curve sees so tests can assert exact sequences.
    fn recording_action(duration: u32) -> TimedAction<Vec<f32>> {
        TimedAction::new(duration, |seen: &mut Vec<f32>, t| seen.push(t))
    }

    #[test]
    fn t_spans_zero_to_one_inclusive() {
        let mut action = recording_action(10);
        let mut seen = Vec::new();

        action.play();
        for _ in 0..10 {
            action.advance(&mut seen);
        }

        assert_eq!(seen.len(), 10);
        assert_eq!(seen[0], 0.0);
        assert_eq!(*seen.last().unwrap(), 1.0);
        assert_eq!(action.state(), ActionState::Idle);
        assert_eq!(action.current_frame(), 0);
    }

    #[test]
    fn still_playing_on_penultimate_frame() {
        let mut action = recording_action(10);
        let mut seen = Vec::new();

        action.play();
        for _ in 0..9 {
            action.advance(&mut seen);
        }
        assert_eq!(action.state(), ActionState::Playing);
        assert_eq!(action.current_frame(), 9);

        action.advance(&mut seen);
        assert_eq!(action.state(), ActionState::Idle);
        assert_eq!(action.current_frame(), 0);
        assert_eq!(*seen.last().unwrap(), 9.0 / 9.0);
    }

    #[test]
    fn advance_is_noop_unless_playing() {
        let mut action = recording_action(5);
        let mut seen = Vec::new();

        action.advance(&mut seen);
        assert!(seen.is_empty());

        action.play();
        action.pause();
        action.advance(&mut seen);
        assert!(seen.is_empty());
    }

    #[test]
    fn pause_and_resume_preserve_the_t_sequence() {
        let mut paused_seen = Vec::new();
        let mut paused = recording_action(8);
        paused.play();
        for _ in 0..3 {
            paused.advance(&mut paused_seen);
        }
        paused.pause();
        assert_eq!(paused.current_frame(), 3);
        paused.advance(&mut paused_seen); // no-op while paused
        paused.resume();
        for _ in 0..5 {
            paused.advance(&mut paused_seen);
        }

        let mut straight_seen = Vec::new();
        let mut straight = recording_action(8);
        straight.play();
        for _ in 0..8 {
            straight.advance(&mut straight_seen);
        }

        assert_eq!(paused_seen, straight_seen);
    }

    #[test]
    fn play_always_restarts_from_frame_zero() {
        let mut action = recording_action(6);
        let mut seen = Vec::new();

        action.play();
        action.advance(&mut seen);
        action.advance(&mut seen);
        action.pause();

        action.play();
        assert_eq!(action.current_frame(), 0);
        assert_eq!(action.state(), ActionState::Playing);
    }

    #[test]
    fn resume_is_noop_unless_paused() {
        let mut action = recording_action(4);
        action.resume();
        assert_eq!(action.state(), ActionState::Idle);

        action.play();
        action.resume();
        assert_eq!(action.state(), ActionState::Playing);
    }

    #[test]
    fn stop_then_play_matches_a_fresh_action() {
        let mut seen = Vec::new();
        let mut action = recording_action(5);
        action.play();
        action.advance(&mut seen);
        action.advance(&mut seen);
        action.stop();
        assert_eq!(action.current_frame(), 0);
        assert_eq!(action.state(), ActionState::Idle);

        seen.clear();
        action.play();
        for _ in 0..5 {
            action.advance(&mut seen);
        }
        assert_eq!(seen[0], 0.0);
        assert_eq!(*seen.last().unwrap(), 1.0);
    }

    #[test]
    fn single_frame_action_fires_once_with_t_zero() {
        let mut action = recording_action(1);
        let mut seen = Vec::new();

        action.play();
        action.advance(&mut seen);

        assert_eq!(seen, vec![0.0]);
        assert_eq!(action.state(), ActionState::Idle);
    }

    #[test]
    #[should_panic(expected = "at least one frame")]
    fn zero_duration_is_rejected() {
        recording_action(0);
    }
}
