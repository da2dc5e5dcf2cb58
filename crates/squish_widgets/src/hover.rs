//! Hover lift
//!
//! Raise an element while the pointer hovers over it. The driver animates
//! a vertical offset: `0.0` at rest, a negative `lift` while hovered.

use squish_motion::SpringPreset;

use crate::interaction::{InteractionDriver, InteractionState};

/// Default hover lift, in layout units (negative = up)
pub const DEFAULT_HOVER_LIFT: f32 = -2.0;

/// Hover lift used by floating action buttons
pub const FAB_HOVER_LIFT: f32 = -4.0;

/// Options for a hover-lift driver
#[derive(Clone, Copy, Debug)]
pub struct HoverOptions {
    lift: f32,
    preset: SpringPreset,
    disabled: bool,
}

impl Default for HoverOptions {
    fn default() -> Self {
        Self {
            lift: DEFAULT_HOVER_LIFT,
            preset: SpringPreset::Gentle,
            disabled: false,
        }
    }
}

impl HoverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options tuned for a floating action button
    pub fn fab() -> Self {
        Self::new().lift(FAB_HOVER_LIFT)
    }

    /// Set the hovered vertical offset
    pub fn lift(mut self, lift: f32) -> Self {
        self.lift = lift;
        self
    }

    /// Set the spring preset
    pub fn preset(mut self, preset: SpringPreset) -> Self {
        self.preset = preset;
        self
    }

    /// Set whether the interaction is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Create a hover-lift driver
///
/// The returned driver's [`value`](InteractionDriver::value) is the
/// vertical translation to apply to the element each frame.
pub fn hover_driver(options: HoverOptions) -> InteractionDriver {
    InteractionDriver::new(
        options.preset.config(),
        0.0,
        options.lift,
        InteractionState::Hovered,
        options.disabled,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use squish_core::events::PointerEvent;

    #[test]
    fn lifts_on_enter_and_rests_on_leave() {
        let mut driver = hover_driver(HoverOptions::default());
        driver.handle_event(&PointerEvent::enter());
        assert_eq!(driver.target(), DEFAULT_HOVER_LIFT);

        driver.handle_event(&PointerEvent::leave());
        assert_eq!(driver.target(), 0.0);
    }

    #[test]
    fn fab_lifts_higher() {
        let mut driver = hover_driver(HoverOptions::fab());
        driver.handle_event(&PointerEvent::enter());
        assert_eq!(driver.target(), FAB_HOVER_LIFT);
    }

    #[test]
    fn disabled_hover_never_lifts() {
        let mut driver = hover_driver(HoverOptions::new().disabled(true));
        driver.handle_event(&PointerEvent::enter());
        assert_eq!(driver.target(), 0.0);
    }
}
