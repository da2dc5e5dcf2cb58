//! Generic interaction driver
//!
//! One FSM-plus-spring abstraction covers every press/hover style
//! interaction: the state machine decides which of two targets (`rest` or
//! `active`) the spring should chase, and the spring supplies the animated
//! value the renderer samples each frame. Press and hover differ only in
//! which state counts as active and what the two targets are.

use squish_core::events::{PointerEvent, PointerKind};
use squish_core::fsm::StateMachine;
use squish_motion::{Spring, SpringConfig};

/// Interaction states shared by all pointer-driven widgets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionState {
    Idle,
    Hovered,
    Pressed,
    Disabled,
}

/// Build the standard interaction FSM
///
/// A leave or cancel while pressed returns to `Idle`, exactly like a
/// release would return the spring to rest: the driver does not
/// distinguish the causes, only the resulting target. Disabled machines
/// have no transitions at all.
fn interaction_fsm(disabled: bool) -> StateMachine<InteractionState, PointerKind> {
    use InteractionState::*;

    if disabled {
        StateMachine::builder(Disabled).build()
    } else {
        StateMachine::builder(Idle)
            .on(Idle, PointerKind::Enter, Hovered)
            .on(Hovered, PointerKind::Leave, Idle)
            .on(Hovered, PointerKind::Down, Pressed)
            .on(Pressed, PointerKind::Up, Hovered)
            .on(Pressed, PointerKind::Leave, Idle)
            .on(Pressed, PointerKind::Cancel, Idle)
            .build()
    }
}

/// A spring-animated pointer interaction
///
/// Owns one [`Spring`] and the FSM that retargets it. The owning component
/// forwards pointer events with [`handle_event`], steps the animation with
/// [`update`] each frame, and reads [`value`] when building its transform.
///
/// [`handle_event`]: InteractionDriver::handle_event
/// [`update`]: InteractionDriver::update
/// [`value`]: InteractionDriver::value
pub struct InteractionDriver {
    fsm: StateMachine<InteractionState, PointerKind>,
    spring: Spring,
    rest: f32,
    active: f32,
    /// The state in which the spring chases `active` instead of `rest`
    active_state: InteractionState,
    disabled: bool,
    activated: bool,
}

impl InteractionDriver {
    /// Create a driver resting at `rest`
    pub fn new(
        config: SpringConfig,
        rest: f32,
        active: f32,
        active_state: InteractionState,
        disabled: bool,
    ) -> Self {
        Self {
            fsm: interaction_fsm(disabled),
            spring: Spring::new(config, rest),
            rest,
            active,
            active_state,
            disabled,
            activated: false,
        }
    }

    /// Current animated value (sample once per rendered frame)
    pub fn value(&self) -> f32 {
        self.spring.value()
    }

    /// The value the spring is currently chasing
    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    /// Current interaction state
    pub fn state(&self) -> InteractionState {
        self.fsm.current_state()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the animation has converged
    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }

    /// Forward a pointer event, retargeting the spring if the state changes
    pub fn handle_event(&mut self, event: &PointerEvent) {
        if self.disabled {
            return;
        }

        let old_state = self.fsm.current_state();
        let new_state = self.fsm.send(event.kind);

        let target = if new_state == self.active_state {
            self.active
        } else {
            self.rest
        };
        if target != self.spring.target() {
            tracing::trace!(?new_state, target, "interaction retarget");
            self.spring.set_target(target);
        }

        // A full press-and-release counts as an activation (click/tap).
        if old_state == InteractionState::Pressed && new_state == InteractionState::Hovered {
            self.activated = true;
        }
    }

    /// Advance the animation; returns true while the value is still moving
    /// so callers know to keep the element marked dirty
    pub fn update(&mut self, dt: f32) -> bool {
        let before = self.spring.value();
        self.spring.step(dt);
        (self.spring.value() - before).abs() > f32::EPSILON
    }

    /// Check whether a press was completed since the last call, clearing
    /// the flag
    pub fn take_activated(&mut self) -> bool {
        std::mem::take(&mut self.activated)
    }
}
