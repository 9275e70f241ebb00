//! Per-stage configuration types

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use crate::shared::constants::thread_pool::{DEFAULT_PARALLEL_THRESHOLD, MAX_WORKERS};

// ============================================================================
// Definition collection: project scope boundary
// ============================================================================

/// Scope boundary applied on top of the semantic model's own
/// project/external classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeConfig {
    /// Project scopes under any of these path prefixes are treated as
    /// external (vendored copies, generated code). Matching stops at `/`
    /// boundaries: `app/vendor` excludes `app/vendor/yaml` but not
    /// `app/vendored`.
    pub exclude_scope_prefixes: Vec<String>,
}

impl ScopeConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        for prefix in &self.exclude_scope_prefixes {
            if prefix.trim().trim_end_matches('/').is_empty() {
                return Err(ConfigError::InvalidScopePrefix {
                    prefix: prefix.clone(),
                    reason: "an empty prefix would exclude every declaration".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Whether a project scope falls outside the analyzed boundary
    pub fn is_excluded(&self, scope: &str) -> bool {
        self.exclude_scope_prefixes.iter().any(|prefix| {
            let prefix = prefix.trim_end_matches('/');
            match scope.strip_prefix(prefix) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            }
        })
    }
}

// ============================================================================
// Reference resolution: parallelism
// ============================================================================

/// Parallel reference resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallelConfig {
    /// Enable rayon-backed resolution (ignored without the `parallel` feature)
    pub enable_rayon: bool,

    /// Number of workers (0=auto, 1..=256)
    pub num_workers: usize,

    /// Minimum number of definitions before work is split across workers
    pub min_parallel_definitions: usize,
}

impl ParallelConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_workers > MAX_WORKERS {
            return Err(ConfigError::range_with_hint(
                "num_workers",
                self.num_workers,
                0,
                MAX_WORKERS,
                "Number of workers must be reasonable (0=auto)",
            ));
        }

        if self.min_parallel_definitions < 1 {
            return Err(ConfigError::range_with_hint(
                "min_parallel_definitions",
                self.min_parallel_definitions,
                1,
                usize::MAX,
                "Threshold must be at least one definition",
            ));
        }

        Ok(())
    }

    /// Get preset configuration
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                enable_rayon: true,
                num_workers: 0,
                min_parallel_definitions: 2,
            },
            Preset::Balanced => Self {
                enable_rayon: true,
                num_workers: 0,
                min_parallel_definitions: DEFAULT_PARALLEL_THRESHOLD,
            },
            Preset::Sequential => Self {
                enable_rayon: false,
                num_workers: 1,
                min_parallel_definitions: DEFAULT_PARALLEL_THRESHOLD,
            },
        }
    }

    /// Effective worker count (auto resolves to the number of CPUs)
    pub fn effective_workers(&self) -> usize {
        if self.num_workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.num_workers
        }
    }

    /// Whether a batch of `definitions` should be split across workers
    pub fn should_parallelize(&self, definitions: usize) -> bool {
        self.enable_rayon && definitions >= self.min_parallel_definitions
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}
