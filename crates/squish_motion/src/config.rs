//! Spring configuration
//!
//! A `SpringConfig` is the stiffness/damping/mass triple that defines one
//! damped-oscillator feel. All three values must be positive and finite;
//! construction fails otherwise, so a zero mass or negative damping can
//! never make the integrator emit NaN into a render pass.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a spring parameter is not a positive, finite number
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpringConfigError {
    #[error("spring stiffness must be positive and finite (got {0})")]
    InvalidStiffness(f32),
    #[error("spring damping must be positive and finite (got {0})")]
    InvalidDamping(f32),
    #[error("spring mass must be positive and finite (got {0})")]
    InvalidMass(f32),
}

/// Physical parameters of a damped harmonic oscillator
///
/// Higher stiffness settles faster; lower damping overshoots more. Values
/// are immutable once constructed. Deserialization goes through the same
/// validation as [`SpringConfig::new`], so configs loaded from TOML carry
/// the same guarantees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpringConfig")]
pub struct SpringConfig {
    stiffness: f32,
    damping: f32,
    mass: f32,
}

/// Unvalidated mirror of [`SpringConfig`] used as the serde entry point
#[derive(Deserialize)]
struct RawSpringConfig {
    stiffness: f32,
    damping: f32,
    mass: f32,
}

impl TryFrom<RawSpringConfig> for SpringConfig {
    type Error = SpringConfigError;

    fn try_from(raw: RawSpringConfig) -> Result<Self, Self::Error> {
        SpringConfig::new(raw.stiffness, raw.damping, raw.mass)
    }
}

impl SpringConfig {
    /// Create a validated config
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Result<Self, SpringConfigError> {
        if !(stiffness.is_finite() && stiffness > 0.0) {
            return Err(SpringConfigError::InvalidStiffness(stiffness));
        }
        if !(damping.is_finite() && damping > 0.0) {
            return Err(SpringConfigError::InvalidDamping(damping));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SpringConfigError::InvalidMass(mass));
        }
        Ok(Self {
            stiffness,
            damping,
            mass,
        })
    }

    /// Known-valid constructor for the built-in presets
    pub(crate) const fn preset(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Soft spring with noticeable bounce
    pub fn gentle() -> Self {
        Self::preset(120.0, 14.0, 1.0)
    }

    /// Near-critically damped default; no visible overshoot
    pub fn smooth() -> Self {
        Self::preset(170.0, 26.0, 1.0)
    }

    /// Fast with pronounced overshoot
    pub fn bouncy() -> Self {
        Self::preset(600.0, 15.0, 1.0)
    }

    /// Fast settle with a hint of spring; the press-feedback default
    pub fn snappy() -> Self {
        Self::preset(500.0, 30.0, 1.0)
    }

    /// Slow and springy
    pub fn wobbly() -> Self {
        Self::preset(180.0, 12.0, 1.0)
    }

    /// Very fast, almost no bounce
    pub fn stiff() -> Self {
        Self::preset(1000.0, 60.0, 1.0)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::smooth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_finite_values() {
        let config = SpringConfig::new(400.0, 30.0, 1.0).unwrap();
        assert_eq!(config.stiffness(), 400.0);
        assert_eq!(config.damping(), 30.0);
        assert_eq!(config.mass(), 1.0);
    }

    #[test]
    fn rejects_non_positive_parameters() {
        assert_eq!(
            SpringConfig::new(0.0, 30.0, 1.0),
            Err(SpringConfigError::InvalidStiffness(0.0))
        );
        assert_eq!(
            SpringConfig::new(400.0, -5.0, 1.0),
            Err(SpringConfigError::InvalidDamping(-5.0))
        );
        assert_eq!(
            SpringConfig::new(400.0, 30.0, 0.0),
            Err(SpringConfigError::InvalidMass(0.0))
        );
    }

    #[test]
    fn rejects_non_finite_parameters() {
        assert!(SpringConfig::new(f32::NAN, 30.0, 1.0).is_err());
        assert!(SpringConfig::new(400.0, f32::INFINITY, 1.0).is_err());
    }

    #[test]
    fn deserialization_validates() {
        let config: SpringConfig =
            toml::from_str("stiffness = 500.0\ndamping = 30.0\nmass = 1.0").unwrap();
        assert_eq!(config, SpringConfig::snappy());

        let bad: Result<SpringConfig, _> =
            toml::from_str("stiffness = -1.0\ndamping = 30.0\nmass = 1.0");
        assert!(bad.is_err());
    }

    #[test]
    fn serializes_round_trip() {
        let config = SpringConfig::wobbly();
        let text = toml::to_string(&config).unwrap();
        let back: SpringConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, back);
    }
}
