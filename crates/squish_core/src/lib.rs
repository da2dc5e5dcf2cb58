//! Squish Core Runtime
//!
//! Foundational primitives for the squish interaction library:
//!
//! - **Pointer Events**: the small, typed event vocabulary interaction
//!   drivers consume (enter/leave/down/up/cancel)
//! - **State Machines**: flat statecharts for widget interaction states
//!
//! # Example
//!
//! ```rust
//! use squish_core::fsm::StateMachine;
//! use squish_core::events::PointerKind;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum State {
//!     Idle,
//!     Hovered,
//! }
//!
//! let mut fsm = StateMachine::builder(State::Idle)
//!     .on(State::Idle, PointerKind::Enter, State::Hovered)
//!     .on(State::Hovered, PointerKind::Leave, State::Idle)
//!     .build();
//!
//! fsm.send(PointerKind::Enter);
//! assert_eq!(fsm.current_state(), State::Hovered);
//! ```

pub mod events;
pub mod fsm;

pub use events::{PointerEvent, PointerKind};
pub use fsm::{StateMachine, Transition};
