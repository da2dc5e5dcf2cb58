//! Spring integrator
//!
//! A `Spring` is a single scalar under damped-harmonic-oscillator control:
//! the value a rendering layer samples once per frame to drive squishy
//! press scale, hover lift, and similar feedback. Retargeting never snaps;
//! the spring keeps its current value and velocity and integrates toward
//! the new attractor, which is what makes rapid press/release sequences
//! feel continuous.

use crate::config::SpringConfig;
use crate::presets::SpringPreset;

/// Integration substep ceiling. Frame deltas are subdivided so a dropped
/// frame can't push a stiff spring past the stability limit of the
/// integrator.
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// A scalar value animated by spring physics
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Convergence threshold, applied to both the distance from the target
    /// and the velocity. When both fall below it the spring snaps exactly
    /// onto the target and reports settled. Part of the public contract:
    /// `value()` is never further than this from `target()` once
    /// `is_settled()` returns true.
    pub const SETTLE_EPSILON: f32 = 1e-3;

    /// Create a spring at rest at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Create a spring at rest at `initial` using a named preset
    pub fn with_preset(preset: SpringPreset, initial: f32) -> Self {
        Self::new(preset.config(), initial)
    }

    /// Current value (sample once per rendered frame)
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current velocity, in value units per second
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Current attractor
    pub fn target(&self) -> f32 {
        self.target
    }

    /// The active configuration
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Move the attractor. The value does not change until the next
    /// `step`; current velocity is preserved so an in-flight settle is
    /// redirected rather than restarted.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Whether the spring has converged onto its target
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < Self::SETTLE_EPSILON
            && self.velocity.abs() < Self::SETTLE_EPSILON
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Semi-implicit Euler over substeps of at most 1/240 s:
    /// `accel = (k*(target - value) - c*velocity) / m`. Deterministic for a
    /// given sequence of calls.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        if self.is_settled() {
            // Settled springs snap exactly; nothing left to integrate.
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let stiffness = self.config.stiffness();
        let damping = self.config.damping();
        let inv_mass = 1.0 / self.config.mass();

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let accel = (stiffness * (self.target - self.value) - damping * self.velocity)
                * inv_mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.value - self.target).abs() < Self::SETTLE_EPSILON
            && self.velocity.abs() < Self::SETTLE_EPSILON
        {
            tracing::trace!(target = self.target, "spring settled");
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 120.0;

    fn run(spring: &mut Spring, seconds: f32) {
        let frames = (seconds / FRAME).ceil() as usize;
        for _ in 0..frames {
            spring.step(FRAME);
        }
    }

    #[test]
    fn starts_settled_at_initial_value() {
        let spring = Spring::new(SpringConfig::smooth(), 1.0);
        assert_eq!(spring.value(), 1.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn set_target_does_not_snap() {
        let mut spring = Spring::new(SpringConfig::snappy(), 0.0);
        spring.set_target(1.0);
        // No frame has elapsed; the value must be untouched.
        assert_eq!(spring.value(), 0.0);
        assert!(!spring.is_settled());
    }

    #[test]
    fn converges_to_target_and_settles() {
        for preset in SpringPreset::all() {
            let mut spring = Spring::with_preset(*preset, 0.0);
            spring.set_target(1.0);
            run(&mut spring, 6.0);
            assert!(spring.is_settled(), "{preset} did not settle");
            assert_eq!(spring.value(), 1.0, "{preset} did not snap onto target");
            assert_eq!(spring.velocity(), 0.0);
        }
    }

    #[test]
    fn same_target_while_settled_does_not_retrigger() {
        let mut spring = Spring::new(SpringConfig::smooth(), 0.5);
        spring.set_target(0.5);
        assert!(spring.is_settled());
        spring.step(FRAME);
        assert_eq!(spring.value(), 0.5);
        assert!(spring.is_settled());
    }

    #[test]
    fn retarget_preserves_velocity() {
        let mut spring = Spring::new(SpringConfig::gentle(), 0.0);
        spring.set_target(1.0);
        run(&mut spring, 0.1);
        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(-1.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn bouncy_overshoots_smooth_does_not() {
        let mut bouncy = Spring::new(SpringConfig::bouncy(), 0.0);
        bouncy.set_target(1.0);
        let mut peak = 0.0_f32;
        for _ in 0..(6.0 / FRAME) as usize {
            bouncy.step(FRAME);
            peak = peak.max(bouncy.value());
        }
        assert!(peak > 1.01, "bouncy should overshoot, peaked at {peak}");

        let mut smooth = Spring::new(SpringConfig::smooth(), 0.0);
        smooth.set_target(1.0);
        let mut peak = 0.0_f32;
        for _ in 0..(6.0 / FRAME) as usize {
            smooth.step(FRAME);
            peak = peak.max(smooth.value());
        }
        assert!(peak < 1.01, "smooth should not overshoot, peaked at {peak}");
    }

    #[test]
    fn deterministic_for_equal_step_sequences() {
        let mut a = Spring::new(SpringConfig::wobbly(), 0.0);
        let mut b = Spring::new(SpringConfig::wobbly(), 0.0);
        a.set_target(1.0);
        b.set_target(1.0);
        for _ in 0..100 {
            a.step(FRAME);
            b.step(FRAME);
        }
        assert_eq!(a.value(), b.value());
        assert_eq!(a.velocity(), b.velocity());
    }

    #[test]
    fn large_frame_delta_stays_stable() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(1.0);
        // Simulate a 250ms hitch; the substep cap keeps integration sane.
        spring.step(0.25);
        assert!(spring.value().is_finite());
        assert!(spring.value() > 0.0 && spring.value() < 2.0);
        run(&mut spring, 2.0);
        assert!(spring.is_settled());
    }
}
