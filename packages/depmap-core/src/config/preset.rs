//! Preset configurations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Parallel resolution as soon as there is more than one definition
    Fast,

    /// Parallel resolution above the default threshold
    #[default]
    Balanced,

    /// Everything on the calling thread
    Sequential,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Balanced => "balanced",
            Self::Sequential => "sequential",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "balanced" => Ok(Self::Balanced),
            "sequential" => Ok(Self::Sequential),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
