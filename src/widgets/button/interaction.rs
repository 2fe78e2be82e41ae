//! Press, release, drag-out and cancel handling for a single pointer.

use std::time::Duration;

use crate::animation::{AnimationState, Transition};
use crate::widgets::{Event, EventResponse, Rect};

/// Where the button is in its press gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// At rest, or settling back to rest after a tap
    #[default]
    Idle,
    /// Held, or released inside with the tap completing once the reverse
    /// cross-fade ends
    Pressed,
    /// Returning to rest without a tap
    Cancelling,
}

/// What one event or frame did to the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub response: EventResponse,
    /// A tap just completed; the owner must call its handler once
    pub tapped: bool,
    /// The press progress moved
    pub changed: bool,
    /// More frames are needed
    pub animating: bool,
}

/// Single-pointer press state machine.
///
/// One progress value in `[0, 1]` drives the cross-fade in both directions
/// (0 is rest, 1 is pressed). Reversals start from wherever the progress
/// currently is.
pub struct InteractionMachine {
    state: InteractionState,
    pointer_down: bool,
    tap_pending: bool,
    progress: AnimationState<f32>,
}

impl InteractionMachine {
    pub fn new(transition: Transition) -> Self {
        Self {
            state: InteractionState::Idle,
            pointer_down: false,
            tap_pending: false,
            progress: AnimationState::new(0.0, transition),
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// A pointer went down on the button and has not been lifted or cancelled
    pub fn is_tracking(&self) -> bool {
        self.pointer_down
    }

    /// A release inside has completed a tap that fires once the cross-fade
    /// settles at rest. A re-press carries it until that gesture settles.
    pub fn is_tap_pending(&self) -> bool {
        self.tap_pending
    }

    /// Current cross-fade position, 0 at rest and 1 fully pressed
    pub fn progress(&self) -> f32 {
        *self.progress.current()
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    pub fn set_transition(&mut self, transition: Transition) {
        self.progress.set_transition(transition);
    }

    /// Feed a pointer event. `hit_region` is the button frame, in the same
    /// coordinate space as the event.
    ///
    /// With an instant transition any completion (including the tap) is
    /// reported by this call.
    pub fn handle_event(&mut self, event: &Event, hit_region: Rect) -> Step {
        let handled = match *event {
            Event::PointerDown { x, y } => self.pointer_down_at(x, y, hit_region),
            Event::PointerMove { x, y } => self.pointer_moved_to(x, y, hit_region),
            Event::PointerUp { x, y } => self.pointer_up_at(x, y, hit_region),
            Event::PointerCancel => self.pointer_cancelled(),
        };

        if !handled {
            log::trace!("ignoring {:?} in {:?}", event, self.state);
            return Step {
                response: EventResponse::Ignored,
                tapped: false,
                changed: false,
                animating: self.is_animating(),
            };
        }

        // Instant transitions settle during dispatch; otherwise this is a no-op
        let mut step = self.advance(Duration::ZERO);
        step.response = EventResponse::Handled;
        step
    }

    /// Advance the cross-fade by `dt` and settle the state machine when it
    /// reaches rest.
    pub fn advance(&mut self, dt: Duration) -> Step {
        let was_animating = self.progress.is_animating();
        let changed = self.progress.advance(dt).is_changed();
        if changed {
            log::trace!("press progress {:.3}", self.progress());
        }

        let tapped = was_animating && !self.progress.is_animating() && self.finish();
        Step {
            response: EventResponse::Ignored,
            tapped,
            changed,
            animating: self.progress.is_animating(),
        }
    }

    fn pointer_down_at(&mut self, x: f32, y: f32, hit_region: Rect) -> bool {
        if self.pointer_down || !hit_region.contains(x, y) {
            return false;
        }
        if self.state != InteractionState::Idle {
            // A completed tap still settling is carried by this press
            log::debug!(
                "press interrupts {:?} at progress {:.3} (tap pending: {})",
                self.state,
                self.progress(),
                self.tap_pending
            );
        }
        self.transition_to(InteractionState::Pressed);
        self.pointer_down = true;
        self.progress.animate_to(1.0);
        true
    }

    fn pointer_moved_to(&mut self, x: f32, y: f32, hit_region: Rect) -> bool {
        if !self.pointer_down {
            return false;
        }
        if self.state == InteractionState::Pressed && !hit_region.contains(x, y) {
            self.cancel();
        }
        true
    }

    fn pointer_up_at(&mut self, x: f32, y: f32, hit_region: Rect) -> bool {
        if !self.pointer_down {
            return false;
        }
        self.pointer_down = false;
        if self.state == InteractionState::Pressed {
            if hit_region.contains(x, y) {
                self.tap_pending = true;
                self.progress.animate_to(0.0);
            } else {
                self.cancel();
            }
        }
        true
    }

    fn pointer_cancelled(&mut self) -> bool {
        if !self.pointer_down {
            return false;
        }
        self.pointer_down = false;
        if self.state == InteractionState::Pressed {
            self.cancel();
        }
        true
    }

    fn cancel(&mut self) {
        self.transition_to(InteractionState::Cancelling);
        self.progress.animate_to(0.0);
    }

    /// Called once when the cross-fade stops. Returns whether a tap completed.
    fn finish(&mut self) -> bool {
        if *self.progress.target() != 0.0 {
            return false;
        }
        let settled = match self.state {
            InteractionState::Pressed => self.tap_pending,
            InteractionState::Cancelling => true,
            InteractionState::Idle => false,
        };
        if !settled {
            return false;
        }
        self.transition_to(InteractionState::Idle);
        std::mem::take(&mut self.tap_pending)
    }

    fn transition_to(&mut self, state: InteractionState) {
        if self.state != state {
            log::debug!("button {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }
}

impl Default for InteractionMachine {
    fn default() -> Self {
        Self::new(Transition::default())
    }
}
