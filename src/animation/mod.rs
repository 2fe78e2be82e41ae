mod animatable;
mod clock;
mod state;
mod timing;

pub use animatable::Animatable;
pub use clock::FrameClock;
pub use state::{AdvanceResult, AnimationState};
pub use timing::TimingFunction;

use std::time::Duration;

/// Configuration for how a value should animate when its target changes
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation. Zero applies the target instantly.
    pub duration: Duration,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self { duration, timing }
    }

    /// A transition that applies its target without intermediate frames
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, TimingFunction::Linear)
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }
}

impl Default for Transition {
    /// The press cross-fade: 400ms, decelerating
    fn default() -> Self {
        Self::new(Duration::from_millis(400), TimingFunction::EaseOut)
    }
}
