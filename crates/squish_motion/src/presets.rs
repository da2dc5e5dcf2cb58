//! Built-in spring presets
//!
//! Named feels covering the overshoot/settle-time tradeoff, from the soft
//! bounce of `gentle` to the near-instant `stiff`. Components refer to
//! presets by name; the physical parameters stay in one place here.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SpringConfig;

/// Error for a preset name that doesn't exist in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown spring preset `{0}`")]
pub struct UnknownPreset(pub String);

/// Built-in spring preset catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpringPreset {
    /// Soft spring with noticeable bounce
    Gentle,
    /// Near-critically damped; no visible overshoot
    Smooth,
    /// Fast with pronounced overshoot
    Bouncy,
    /// Fast settle with a hint of spring
    Snappy,
    /// Slow and springy
    Wobbly,
    /// Very fast, almost no bounce
    Stiff,
}

impl SpringPreset {
    /// Stable preset id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::Gentle => "gentle",
            Self::Smooth => "smooth",
            Self::Bouncy => "bouncy",
            Self::Snappy => "snappy",
            Self::Wobbly => "wobbly",
            Self::Stiff => "stiff",
        }
    }

    /// Full preset list
    pub fn all() -> &'static [SpringPreset] {
        const PRESETS: [SpringPreset; 6] = [
            SpringPreset::Gentle,
            SpringPreset::Smooth,
            SpringPreset::Bouncy,
            SpringPreset::Snappy,
            SpringPreset::Wobbly,
            SpringPreset::Stiff,
        ];
        &PRESETS
    }

    /// Physical parameters for this preset
    pub fn config(self) -> SpringConfig {
        match self {
            Self::Gentle => SpringConfig::gentle(),
            Self::Smooth => SpringConfig::smooth(),
            Self::Bouncy => SpringConfig::bouncy(),
            Self::Snappy => SpringConfig::snappy(),
            Self::Wobbly => SpringConfig::wobbly(),
            Self::Stiff => SpringConfig::stiff(),
        }
    }
}

impl Display for SpringPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SpringPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gentle" => Ok(Self::Gentle),
            "smooth" => Ok(Self::Smooth),
            "bouncy" => Ok(Self::Bouncy),
            "snappy" => Ok(Self::Snappy),
            "wobbly" => Ok(Self::Wobbly),
            "stiff" => Ok(Self::Stiff),
            other => Err(UnknownPreset(other.to_string())),
        }
    }
}
