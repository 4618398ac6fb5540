//! Configuration for the domain layer
//!
//! Settings are layered: built-in defaults, then the optional
//! `config/default` and `config/local` files (relative to the working
//! directory, or to the base passed to [`DomainConfig::load_in`]), then
//! `POKEDEX__*` environment variables, for example
//! `POKEDEX__TYPE_CATALOG__EXTRA_TYPES=shadow,stellar`.

use crate::error::ConfigError;
use crate::pokemon_type::{TypeCatalog, DEFAULT_MAX_CODE_LENGTH, DEFAULT_MIN_CODE_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const ENV_PREFIX: &str = "POKEDEX";

/// Domain configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    pub type_catalog: TypeCatalogConfig,
}

/// Type catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCatalogConfig {
    /// Codes recognised in addition to the canonical ones
    pub extra_types: Vec<String>,
    pub min_code_length: i64,
    pub max_code_length: i64,
}

impl Default for TypeCatalogConfig {
    fn default() -> Self {
        Self {
            extra_types: Vec::new(),
            min_code_length: DEFAULT_MIN_CODE_LENGTH,
            max_code_length: DEFAULT_MAX_CODE_LENGTH,
        }
    }
}

impl DomainConfig {
    /// Load configuration from environment and config files
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_in(Path::new("."))
    }

    /// Load configuration with the `config/` directory resolved under `base`
    pub fn load_in(base: &Path) -> Result<Self, ConfigError> {
        let config_dir = base.join("config");
        let settings = Self::defaults()?
            .add_source(
                config::File::with_name(&config_dir.join("default").to_string_lossy())
                    .required(false),
            )
            .add_source(
                config::File::with_name(&config_dir.join("local").to_string_lossy())
                    .required(false),
            )
            .add_source(Self::environment())
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        info!(
            base = %base.display(),
            extra_types = loaded.type_catalog.extra_types.len(),
            "loaded domain configuration"
        );
        Ok(loaded)
    }

    /// Load configuration from a single file layered over the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Self::defaults()?
            .add_source(config::File::from(path))
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        info!(
            path = %path.display(),
            extra_types = loaded.type_catalog.extra_types.len(),
            "loaded domain configuration"
        );
        Ok(loaded)
    }

    /// Build the type catalog these settings describe
    pub fn type_catalog(&self) -> Result<TypeCatalog, ConfigError> {
        TypeCatalog::from_config(&self.type_catalog)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let builder = config::Config::builder()
            .set_default("type_catalog.extra_types", Vec::<String>::new())?
            .set_default("type_catalog.min_code_length", DEFAULT_MIN_CODE_LENGTH)?
            .set_default("type_catalog.max_code_length", DEFAULT_MAX_CODE_LENGTH)?;
        Ok(builder)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("type_catalog.extra_types")
            .try_parsing(true)
    }
}
