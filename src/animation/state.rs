use std::time::Duration;

use super::{Animatable, Transition};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Animation state for a single animatable value.
///
/// Retargeting while running starts the new animation from the current
/// interpolated value, never from the previous start or target.
pub struct AnimationState<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Value being animated toward
    target: T,
    /// Value when animation started
    start: T,
    /// Time progress from 0.0 to 1.0
    progress: f32,
    /// Time accumulated since the animation started
    elapsed: Duration,
    /// Transition configuration
    transition: Transition,
}

impl<T: Animatable> AnimationState<T> {
    pub fn new(initial_value: T, transition: Transition) -> Self {
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            progress: 1.0, // Start completed
            elapsed: Duration::ZERO,
            transition,
        }
    }

    /// Start animating to a new target value
    pub fn animate_to(&mut self, new_target: T) {
        // Don't restart if we're already animating to this target
        if new_target == self.target {
            return;
        }

        self.start = self.current.clone();
        self.target = new_target;
        self.progress = 0.0;
        self.elapsed = Duration::ZERO;
    }

    /// Advance the animation by `dt` and return whether the value changed.
    ///
    /// An instant transition completes on the first advance, even with a
    /// zero `dt`.
    pub fn advance(&mut self, dt: Duration) -> AdvanceResult<T> {
        if !self.is_animating() {
            return AdvanceResult::NoChange;
        }

        self.elapsed += dt;
        let t = if self.transition.is_instant() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.transition.duration.as_secs_f32()).min(1.0)
        };
        self.progress = t;

        let new_value = if t >= 1.0 {
            self.target.clone()
        } else {
            T::lerp(&self.start, &self.target, self.transition.timing.evaluate(t))
        };

        let changed = new_value != self.current;
        self.current = new_value;

        if changed {
            AdvanceResult::Changed(self.current.clone())
        } else {
            AdvanceResult::NoChange
        }
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.progress < 1.0
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Replace the transition. A running animation keeps its start and
    /// target and continues on the new curve.
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }
}
