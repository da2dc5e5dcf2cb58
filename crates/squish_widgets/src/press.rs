//! Squishy press
//!
//! Scale an element down while pressed and spring back on release. The
//! driver animates a scale factor: `1.0` at rest, `scale` while the
//! pointer is down.

use squish_motion::SpringPreset;

use crate::interaction::{InteractionDriver, InteractionState};

/// Default pressed scale for buttons
pub const DEFAULT_PRESS_SCALE: f32 = 0.96;

/// Options for a squishy-press driver
///
/// Buttons use the default scale; denser controls (icon buttons, chips)
/// typically sit in the 0.85–0.94 range.
#[derive(Clone, Copy, Debug)]
pub struct PressOptions {
    scale: f32,
    preset: SpringPreset,
    disabled: bool,
}

impl Default for PressOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_PRESS_SCALE,
            preset: SpringPreset::Snappy,
            disabled: false,
        }
    }
}

impl PressOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pressed scale
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
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

/// Create a squishy-press driver
///
/// The returned driver's [`value`](InteractionDriver::value) is the scale
/// to apply to the element's transform each frame.
pub fn press_driver(options: PressOptions) -> InteractionDriver {
    InteractionDriver::new(
        options.preset.config(),
        1.0,
        options.scale,
        InteractionState::Pressed,
        options.disabled,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use squish_core::events::PointerEvent;

    #[test]
    fn defaults_to_button_scale() {
        let mut driver = press_driver(PressOptions::default());
        driver.handle_event(&PointerEvent::enter());
        driver.handle_event(&PointerEvent::down());
        assert_eq!(driver.target(), DEFAULT_PRESS_SCALE);
    }

    #[test]
    fn custom_scale_for_dense_controls() {
        let mut driver = press_driver(PressOptions::new().scale(0.88));
        driver.handle_event(&PointerEvent::enter());
        driver.handle_event(&PointerEvent::down());
        assert_eq!(driver.target(), 0.88);
    }

    #[test]
    fn disabled_press_stays_at_rest() {
        let mut driver = press_driver(PressOptions::new().disabled(true));
        driver.handle_event(&PointerEvent::enter());
        driver.handle_event(&PointerEvent::down());
        assert_eq!(driver.target(), 1.0);
        assert_eq!(driver.value(), 1.0);
    }
}
