//! Pokemon type value object and the catalog of recognised type codes
//!
//! A [`PokemonType`] can only be obtained for a code its [`TypeCatalog`]
//! recognises. The canonical catalog holds the eighteen main-series types;
//! deployments can extend it through [`TypeCatalogConfig`].
//!
//! # Examples
//!
//! ```rust
//! use pokedex_core::pokemon_type::*;
//!
//! let fire = PokemonType::new("fire").unwrap();
//! assert_eq!(fire.code(), "fire");
//! assert!(PokemonType::new("plasma").is_err());
//!
//! let catalog = TypeCatalog::extended(["shadow"]).unwrap();
//! let shadow = PokemonType::in_catalog(&catalog, "shadow").unwrap();
//! assert_eq!(shadow.to_string(), "shadow");
//! ```

use crate::config::TypeCatalogConfig;
use crate::error::ConfigError;
use crate::validation::NumberBoundsCheck;
use crate::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// The eighteen main-series type codes
pub const CANONICAL_TYPE_CODES: [&str; 18] = [
    "normal", "fire", "water", "grass", "electric", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

pub const DEFAULT_MIN_CODE_LENGTH: i64 = 3;
pub const DEFAULT_MAX_CODE_LENGTH: i64 = 12;

/// Set of type codes a [`PokemonType`] may carry.
///
/// Every code in a catalog is ASCII lowercase and its length lies within the
/// catalog's inclusive bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCatalog {
    codes: BTreeSet<String>,
    min_code_length: i64,
    max_code_length: i64,
}

impl NumberBoundsCheck for TypeCatalog {}

impl TypeCatalog {
    /// Shared canonical catalog
    pub fn canonical() -> &'static Arc<TypeCatalog> {
        static CANONICAL: OnceLock<Arc<TypeCatalog>> = OnceLock::new();
        CANONICAL.get_or_init(|| {
            Arc::new(Self {
                codes: CANONICAL_TYPE_CODES.iter().map(|c| c.to_string()).collect(),
                min_code_length: DEFAULT_MIN_CODE_LENGTH,
                max_code_length: DEFAULT_MAX_CODE_LENGTH,
            })
        })
    }

    /// Canonical catalog plus `extra` codes, using the default length bounds
    pub fn extended<I, S>(extra: I) -> std::result::Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(
            extra.into_iter().map(Into::<String>::into),
            DEFAULT_MIN_CODE_LENGTH,
            DEFAULT_MAX_CODE_LENGTH,
        )
    }

    /// Build a catalog from configuration.
    ///
    /// Canonical codes are re-checked against the configured bounds, so
    /// bounds that would exclude a main-series type are rejected.
    pub fn from_config(config: &TypeCatalogConfig) -> std::result::Result<Self, ConfigError> {
        let catalog = Self::build(
            config.extra_types.iter().cloned(),
            config.min_code_length,
            config.max_code_length,
        )?;
        debug!(
            extra_types = config.extra_types.len(),
            total_types = catalog.len(),
            "built type catalog from configuration"
        );
        Ok(catalog)
    }

    fn build(
        extra: impl Iterator<Item = String>,
        min_code_length: i64,
        max_code_length: i64,
    ) -> std::result::Result<Self, ConfigError> {
        if min_code_length < 1 || min_code_length > max_code_length {
            return Err(ConfigError::InvalidCodeLength {
                min: min_code_length,
                max: max_code_length,
            });
        }

        let mut catalog = Self {
            codes: BTreeSet::new(),
            min_code_length,
            max_code_length,
        };
        let canonical = CANONICAL_TYPE_CODES.iter().map(|c| c.to_string());
        for code in canonical.chain(extra) {
            if !catalog.is_well_formed_code(&code) {
                return Err(ConfigError::invalid_type_code(code));
            }
            catalog.codes.insert(code);
        }
        Ok(catalog)
    }

    /// Whether `code` has the shape of a type code under this catalog's bounds
    pub fn is_well_formed_code(&self, code: &str) -> bool {
        let length = i64::try_from(code.len()).unwrap_or(i64::MAX);
        Self::is_integer_between_values(length, self.min_code_length, self.max_code_length)
            && code.chars().all(|c| c.is_ascii_lowercase())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn code_length_bounds(&self) -> (i64, i64) {
        (self.min_code_length, self.max_code_length)
    }
}

/// A Pokemon type, identified by its code.
///
/// Deserialization checks the code against the canonical catalog only, so a
/// type built from an extended catalog serializes fine but cannot be read
/// back on its own. Read such types through a collection and
/// [`CollectionSeed`](crate::collection::CollectionSeed) instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PokemonType {
    code: String,
}

impl PokemonType {
    /// Create a type recognised by the canonical catalog
    pub fn new<S: Into<String>>(code: S) -> Result<Self> {
        Self::in_catalog(TypeCatalog::canonical(), code)
    }

    /// Create a type recognised by `catalog`
    pub fn in_catalog<S: Into<String>>(catalog: &TypeCatalog, code: S) -> Result<Self> {
        let code = code.into();
        if !catalog.contains(&code) {
            return Err(DomainError::invalid_pokemon_type());
        }
        Ok(Self { code })
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for PokemonType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for PokemonType {
    type Error = DomainError;

    fn try_from(code: String) -> Result<Self> {
        Self::new(code)
    }
}

impl From<PokemonType> for String {
    fn from(pokemon_type: PokemonType) -> Self {
        pokemon_type.code
    }
}
