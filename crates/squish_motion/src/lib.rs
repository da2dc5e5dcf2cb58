//! Squish Motion System
//!
//! Spring physics for interactive UI feedback.
//!
//! # Features
//!
//! - **Validated configs**: stiffness/damping/mass are checked at
//!   construction so bad physics never reach the integrator
//! - **Named presets**: six tuned feels from `gentle` to `stiff`
//! - **Interruptible**: springs inherit velocity when retargeted
//! - **Frame-driven**: a scheduler ticks every spring once per frame and
//!   reports when everything has settled
//!
//! # Example
//!
//! ```rust
//! use squish_motion::{Spring, SpringPreset};
//!
//! let mut scale = Spring::with_preset(SpringPreset::Snappy, 1.0);
//! scale.set_target(0.96); // press
//!
//! // host frame loop
//! for _ in 0..240 {
//!     scale.step(1.0 / 120.0);
//! }
//! assert!(scale.is_settled());
//! assert!((scale.value() - 0.96).abs() < Spring::SETTLE_EPSILON);
//! ```

pub mod config;
pub mod presets;
pub mod scheduler;
pub mod spring;

pub use config::{SpringConfig, SpringConfigError};
pub use presets::{SpringPreset, UnknownPreset};
pub use scheduler::{MotionScheduler, SpringId};
pub use spring::Spring;
