use std::time::{Duration, Instant};

/// Converts host frame timestamps into the deltas consumed by
/// [`AnimationState::advance`](super::AnimationState::advance).
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now` and return the time since the previous one.
    /// The first frame yields a zero delta.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let delta = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);
        delta
    }

    /// Forget the previous frame, e.g. after the host stopped requesting frames.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}
