//! Top-level configuration and YAML I/O

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::stage_configs::{ParallelConfig, ScopeConfig};

/// Configuration schema versions this crate can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Complete analysis configuration (YAML schema v1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DepmapConfig {
    /// Schema version (always 1 for v1)
    pub version: u32,

    #[serde(default)]
    pub scope: ScopeConfig,

    #[serde(default)]
    pub parallel: ParallelConfig,
}

/// Used only to detect a missing `version` before full deserialization
#[derive(Deserialize)]
struct VersionProbe {
    version: Option<u32>,
}

impl DepmapConfig {
    /// Complete configuration for a preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            version: 1,
            scope: ScopeConfig::default(),
            parallel: ParallelConfig::from_preset(preset),
        }
    }

    /// Builder-style scope exclusion
    pub fn exclude_scope_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.scope.exclude_scope_prefixes.push(prefix.into());
        self
    }

    /// Builder-style parallel override
    pub fn parallel(mut self, f: impl FnOnce(ParallelConfig) -> ParallelConfig) -> Self {
        self.parallel = f(self.parallel);
        self
    }

    /// Validate every section
    pub fn validate(&self) -> ConfigResult<()> {
        if !SUPPORTED_VERSIONS.contains(&self.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }
        self.scope.validate()?;
        self.parallel.validate()?;
        Ok(())
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let probe: VersionProbe = serde_yaml::from_str(yaml)?;
        if probe.version.is_none() {
            return Err(ConfigError::MissingVersion);
        }

        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Export as YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for DepmapConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_roundtrip() {
        let config = DepmapConfig::preset(Preset::Fast).exclude_scope_prefix("app/vendor");

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("app/vendor"));

        let recovered = DepmapConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(recovered, config);
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
scope:
  exclude_scope_prefixes:
    - example.com/app/vendor
parallel:
  enable_rayon: true
  num_workers: 4
  min_parallel_definitions: 8
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = DepmapConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.parallel.num_workers, 4);
        assert_eq!(config.parallel.min_parallel_definitions, 8);
        assert!(config.scope.is_excluded("example.com/app/vendor/lib"));
    }

    #[test]
    fn test_yaml_sections_default_when_omitted() {
        let config = DepmapConfig::from_yaml_str("version: 1\n").unwrap();
        assert_eq!(config.parallel, ParallelConfig::default());
        assert!(config.scope.exclude_scope_prefixes.is_empty());
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = DepmapConfig::from_yaml_str("parallel:\n  num_workers: 2\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = DepmapConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnsupportedVersion { found: 2, .. }
        ));
    }

    #[test]
    fn test_yaml_unknown_field_rejected() {
        let result = DepmapConfig::from_yaml_str("version: 1\nparallel:\n  workers: 2\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_yaml_invalid_range_rejected() {
        let result = DepmapConfig::from_yaml_str("version: 1\nparallel:\n  num_workers: 1000\n");
        assert!(matches!(result, Err(ConfigError::Range { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = DepmapConfig::from_yaml("/nonexistent/depmap.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
