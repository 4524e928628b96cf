//! # Kit Configuration
//!
//! Chooses which family and which vehicle the rest of an application uses,
//! so the choice lives in one place instead of being spread over call sites.
//!
//! ## Layering
//!
//! 1. Built-in defaults (`windows`, `sedan`, no log filter)
//! 2. A TOML document handed in by the caller ([`KitConfig::from_toml_str`])
//! 3. `CREATION__*` environment variables ([`KitConfig::apply_env_overrides`])
//!
//! The crate never opens files; reading the TOML is the caller's job.
//!
//! ```rust
//! use creation_recipe::lifecycle::config::KitConfig;
//! use creation_recipe::framework::FamilyTag;
//!
//! let config = KitConfig::from_toml_str("family = \"mac\"").unwrap();
//! assert_eq!(config.family, FamilyTag::Mac);
//! assert_eq!(config.builder().variant().to_string(), "Sedan");
//! ```

use ::config::{Config, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::car_builder::CarBuilder;
use crate::family_factory::{factory_for, GuiFactory};
use crate::framework::FamilyTag;
use crate::model::CarVariant;
use crate::product_factory::{dialog_for, Dialog};

/// Prefix of every environment override; keys follow after `__`,
/// e.g. `CREATION__VEHICLE`.
pub const ENV_PREFIX: &str = "CREATION";

const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document or an override could not be read into a [`KitConfig`].
    #[error("invalid configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    pub family: FamilyTag,
    pub vehicle: CarVariant,
    /// `EnvFilter` directive, e.g. `"debug"`. `None` defers to `RUST_LOG`.
    pub log_filter: Option<String>,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            family: FamilyTag::Windows,
            vehicle: CarVariant::Sedan,
            log_filter: None,
        }
    }
}

impl KitConfig {
    /// Reads a TOML document. Keys it leaves out keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        debug!(?config, "Parsed configuration");
        Ok(config)
    }

    /// Overlays `CREATION__FAMILY`, `CREATION__VEHICLE` and
    /// `CREATION__LOG_FILTER` from the process environment.
    pub fn apply_env_overrides(self) -> Result<Self, ConfigError> {
        self.overlay(env_source())
    }

    /// Same as [`apply_env_overrides`](Self::apply_env_overrides), but the
    /// variables come from `vars` instead of the process environment.
    pub fn apply_overrides_from(self, vars: Map<String, String>) -> Result<Self, ConfigError> {
        self.overlay(env_source().source(Some(vars)))
    }

    fn overlay(self, env: Environment) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(&self)?)
            .add_source(env)
            .build()?
            .try_deserialize()?;
        info!(family = %config.family, vehicle = %config.vehicle, "Configuration resolved");
        Ok(config)
    }

    pub fn family_factory(&self) -> Box<dyn GuiFactory> {
        factory_for(self.family)
    }

    pub fn dialog(&self) -> Box<dyn Dialog> {
        dialog_for(self.family)
    }

    pub fn builder(&self) -> Box<dyn CarBuilder> {
        self.vehicle.builder()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family_factory::FamilyFactory;

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = KitConfig::from_toml_str("").unwrap();
        assert_eq!(config, KitConfig::default());
        assert_eq!(config.family, FamilyTag::Windows);
        assert_eq!(config.vehicle, CarVariant::Sedan);
    }

    #[test]
    fn test_full_document() {
        let config = KitConfig::from_toml_str(
            r#"
            family = "macos"
            vehicle = "suv"
            log_filter = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.family, FamilyTag::Mac);
        assert_eq!(config.vehicle, CarVariant::Suv);
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_family_in_toml() {
        let err = KitConfig::from_toml_str("family = \"linux\"").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
        assert!(err.to_string().contains("linux"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = KitConfig::from_toml_str("family = ").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn test_overrides_win_over_document() {
        let config = KitConfig::from_toml_str("family = \"mac\"")
            .unwrap()
            .apply_overrides_from(vars(&[
                ("CREATION__FAMILY", "win"),
                ("CREATION__VEHICLE", "suv"),
                ("CREATION__LOG_FILTER", "info"),
            ]))
            .unwrap();

        assert_eq!(config.family, FamilyTag::Windows);
        assert_eq!(config.vehicle, CarVariant::Suv);
        assert_eq!(config.log_filter.as_deref(), Some("info"));
    }

    #[test]
    fn test_overrides_keep_unset_fields() {
        let base = KitConfig {
            family: FamilyTag::Mac,
            vehicle: CarVariant::Suv,
            log_filter: Some("debug".into()),
        };
        let config = base
            .clone()
            .apply_overrides_from(vars(&[("OTHER__VEHICLE", "sedan")]))
            .unwrap();
        assert_eq!(config, base);
    }

    #[test]
    fn test_invalid_override() {
        let err = KitConfig::default()
            .apply_overrides_from(vars(&[("CREATION__VEHICLE", "truck")]))
            .unwrap_err();

        assert!(matches!(err, ConfigError::Load(_)));
        assert!(err.to_string().contains("truck"));
    }

    #[test]
    fn test_selected_variants() {
        let config = KitConfig {
            family: FamilyTag::Mac,
            vehicle: CarVariant::Suv,
            log_filter: None,
        };
        assert_eq!(config.family_factory().family(), FamilyTag::Mac);
        assert_eq!(config.dialog().family(), FamilyTag::Mac);
        assert_eq!(config.builder().variant(), CarVariant::Suv);
    }
}
