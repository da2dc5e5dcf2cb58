//! State Machine Runtime
//!
//! Flat statecharts for widget interaction states, generic over the state
//! and event types so each widget can use its own enums instead of sharing
//! a pool of numeric ids.
//!
//! Supports:
//! - Flat state machines built from a transition table
//! - Entry/exit actions per state
//! - A transition history for debugging
//!
//! A machine with an empty transition table never leaves its initial state;
//! disabled widgets are modeled that way rather than with guard functions.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// An action function executed when entering or exiting a state
pub type Action = Box<dyn FnMut() + Send>;

/// A transition in the state machine
#[derive(Clone, Copy, Debug)]
pub struct Transition<S, E> {
    pub from: S,
    pub event: E,
    pub to: S,
}

impl<S, E> Transition<S, E> {
    /// Create a transition
    pub fn new(from: S, event: E, to: S) -> Self {
        Self { from, event, to }
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    transitions: SmallVec<[Transition<S, E>; 8]>,
    entry_callbacks: FxHashMap<S, Vec<Action>>,
    exit_callbacks: FxHashMap<S, Vec<Action>>,
}

impl<S, E> StateMachineBuilder<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Debug,
{
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: SmallVec::new(),
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
        }
    }

    /// Add a transition (from, event, to)
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add an entry action for a state
    pub fn on_enter<F: FnMut() + Send + 'static>(mut self, state: S, action: F) -> Self {
        self.entry_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Add an exit action for a state
    pub fn on_exit<F: FnMut() + Send + 'static>(mut self, state: S, action: F) -> Self {
        self.exit_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E> {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
            entry_callbacks: self.entry_callbacks,
            exit_callbacks: self.exit_callbacks,
            history: Vec::new(),
        }
    }
}

/// A state machine instance
pub struct StateMachine<S, E> {
    current_state: S,
    transitions: SmallVec<[Transition<S, E>; 8]>,
    entry_callbacks: FxHashMap<S, Vec<Action>>,
    exit_callbacks: FxHashMap<S, Vec<Action>>,
    /// History of state transitions (for debugging)
    history: Vec<(S, E, S)>,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Debug,
{
    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Get transition history
    pub fn history(&self) -> &[(S, E, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from the current state
    pub fn can_send(&self, event: E) -> bool {
        let current = self.current_state;
        self.transitions
            .iter()
            .any(|t| t.from == current && t.event == event)
    }

    /// Send an event to the state machine, potentially triggering a transition
    ///
    /// Events with no matching transition are ignored and the current state
    /// is returned unchanged.
    pub fn send(&mut self, event: E) -> S {
        let current = self.current_state;

        let Some(transition) = self
            .transitions
            .iter()
            .find(|t| t.from == current && t.event == event)
        else {
            return current;
        };

        let to_state = transition.to;

        tracing::trace!(from = ?current, ?event, to = ?to_state, "fsm transition");

        // Execute exit callbacks
        if let Some(callbacks) = self.exit_callbacks.get_mut(&current) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        self.current_state = to_state;
        self.history.push((current, event, to_state));

        // Execute entry callbacks
        if let Some(callbacks) = self.entry_callbacks.get_mut(&to_state) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        to_state
    }
}
