//! Squish Widget Layer
//!
//! The interaction logic UI components share, with the rendering left to a
//! host presentation layer:
//!
//! - **Squishy press**: scale an element down on press, spring back on
//!   release ([`press_driver`])
//! - **Hover lift**: raise an element while hovered ([`hover_driver`])
//! - **Pagination**: the page-range/ellipsis calculator and a small page
//!   controller ([`compute_page_range`], [`Pagination`])
//!
//! Press and hover are two parameterizations of one generic
//! [`InteractionDriver`]: an interaction state machine bound to a spring.

pub mod hover;
pub mod interaction;
pub mod pagination;
pub mod press;

pub use hover::{hover_driver, HoverOptions, DEFAULT_HOVER_LIFT, FAB_HOVER_LIFT};
pub use interaction::{InteractionDriver, InteractionState};
pub use pagination::{compute_page_range, PageMarker, Pagination, PaginationError};
pub use press::{press_driver, PressOptions, DEFAULT_PRESS_SCALE};
