//! Configuration System
//!
//! Two tiers:
//! - Preset: one-liner defaults (`DepmapConfig::preset(Preset::Fast)`)
//! - YAML: complete control, versioned schema (`version: 1`)
//!
//! # Examples
//!
//! ```rust
//! use depmap_core::config::{DepmapConfig, Preset};
//!
//! let config = DepmapConfig::preset(Preset::Sequential);
//! assert!(config.validate().is_ok());
//!
//! let config = DepmapConfig::from_yaml_str(
//!     "version: 1\nscope:\n  exclude_scope_prefixes: [\"example.com/app/vendor\"]\n",
//! )
//! .unwrap();
//! assert!(config.scope.is_excluded("example.com/app/vendor/yaml"));
//! ```

pub mod depmap_config;
pub mod error;
pub mod preset;
pub mod stage_configs;

pub use depmap_config::{DepmapConfig, SUPPORTED_VERSIONS};
pub use error::{ConfigError, ConfigResult};
pub use preset::Preset;
pub use stage_configs::{ParallelConfig, ScopeConfig};
