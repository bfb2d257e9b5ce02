//! Layered configuration system
//!
//! Config is loaded with three layers of precedence (highest wins):
//! 1. Environment variables: `VECTRA_ANGLE_UNIT`, `VECTRA_PRECISION`, `VECTRA_FORMAT`
//! 2. Project-local: `.vectra/config.toml`
//! 3. Global: `~/.vectra/config.toml`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vectra_core::{AngleUnit, Result, VectraError};

use crate::output::OutputFormat;

/// How angle arguments are read
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AngleConfig {
    #[serde(default)]
    pub unit: Option<AngleUnit>,
}

/// How results are printed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub precision: Option<usize>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VectraConfigFile {
    #[serde(default)]
    pub angles: AngleConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Resolved configuration with environment variable overrides applied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectraConfig {
    pub angle_unit: AngleUnit,
    pub precision: Option<usize>,
    pub format: OutputFormat,
}

impl VectraConfig {
    /// Load config with layered precedence: global < project < env vars
    pub fn load() -> Result<Self> {
        let mut config = VectraConfigFile::default();

        // Layer 1: Global config (~/.vectra/config.toml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut config, global);
            }
        }

        // Layer 2: Project-local config (.vectra/config.toml)
        let local_path = PathBuf::from(".vectra/config.toml");
        if local_path.exists() {
            let local = Self::load_file(&local_path)?;
            Self::merge_into(&mut config, local);
        }

        // Layer 3: Environment variable overrides
        Self::apply_overrides(&mut config, |key| std::env::var(key).ok())?;

        Ok(Self::resolve(config))
    }

    /// Load config from a specific file path only, plus env overrides
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        Self::apply_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(Self::resolve(config))
    }

    fn resolve(file: VectraConfigFile) -> Self {
        Self {
            angle_unit: file.angles.unit.unwrap_or_default(),
            precision: file.output.precision,
            format: file.output.format.unwrap_or_default(),
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".vectra").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<VectraConfigFile> {
        let content = std::fs::read_to_string(path)?;
        let config: VectraConfigFile = toml::from_str(&content).map_err(|e| {
            VectraError::ConfigError(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn merge_into(base: &mut VectraConfigFile, overlay: VectraConfigFile) {
        if overlay.angles.unit.is_some() {
            base.angles.unit = overlay.angles.unit;
        }
        if overlay.output.precision.is_some() {
            base.output.precision = overlay.output.precision;
        }
        if overlay.output.format.is_some() {
            base.output.format = overlay.output.format;
        }
    }

    fn apply_overrides<F>(config: &mut VectraConfigFile, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(unit) = lookup("VECTRA_ANGLE_UNIT") {
            config.angles.unit = Some(unit.parse()?);
        }
        if let Some(precision) = lookup("VECTRA_PRECISION") {
            let precision = precision.trim().parse().map_err(|_| {
                VectraError::ConfigError(format!(
                    "VECTRA_PRECISION must be a non-negative integer, got '{}'",
                    precision
                ))
            })?;
            config.output.precision = Some(precision);
        }
        if let Some(format) = lookup("VECTRA_FORMAT") {
            config.output.format = Some(format.parse()?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn temp_config(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vectra_config_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        std::fs::remove_file(path).ok();
        std::fs::remove_dir(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_config_from_file() {
        let config_str = r#"
[angles]
unit = "radians"

[output]
precision = 3
format = "json"
"#;
        let path = temp_config(config_str);
        let file = VectraConfig::load_file(&path).unwrap();
        let config = VectraConfig::resolve(file);

        assert_eq!(config.angle_unit, AngleUnit::Radians);
        assert_eq!(config.precision, Some(3));
        assert_eq!(config.format, OutputFormat::Json);

        cleanup(&path);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let path = temp_config("[angles]\nunit = \"gradians\"\n");
        let err = VectraConfig::load_file(&path).unwrap_err();
        assert!(matches!(err, VectraError::ConfigError(_)));
        cleanup(&path);
    }

    #[test]
    fn test_defaults() {
        let config = VectraConfig::resolve(VectraConfigFile::default());
        assert_eq!(config.angle_unit, AngleUnit::Degrees);
        assert_eq!(config.precision, None);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_merge_keeps_base_when_overlay_is_silent() {
        let mut base: VectraConfigFile =
            toml::from_str("[angles]\nunit = \"radians\"\n[output]\nprecision = 2\n").unwrap();
        let overlay: VectraConfigFile = toml::from_str("[output]\nformat = \"toml\"\n").unwrap();

        VectraConfig::merge_into(&mut base, overlay);
        let config = VectraConfig::resolve(base);

        assert_eq!(config.angle_unit, AngleUnit::Radians);
        assert_eq!(config.precision, Some(2));
        assert_eq!(config.format, OutputFormat::Toml);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("VECTRA_ANGLE_UNIT", "rad"),
            ("VECTRA_PRECISION", "5"),
            ("VECTRA_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut file: VectraConfigFile =
            toml::from_str("[angles]\nunit = \"degrees\"\n[output]\nprecision = 1\n").unwrap();
        VectraConfig::apply_overrides(&mut file, |key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        let config = VectraConfig::resolve(file);

        assert_eq!(config.angle_unit, AngleUnit::Radians);
        assert_eq!(config.precision, Some(5));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_bad_env_override() {
        let mut file = VectraConfigFile::default();
        let err = VectraConfig::apply_overrides(&mut file, |key| {
            (key == "VECTRA_PRECISION").then(|| "-1".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, VectraError::ConfigError(_)));
    }
}
