//! Error types for the core domain

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The closed set of domain validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainErrorKind {
    InvalidPokemonName,
    InvalidPokemonNickname,
    InvalidPokemonType,
    InvalidPokemonTypeCollectionItem,
}

impl DomainErrorKind {
    /// Fixed human-readable message for this kind
    pub const fn message(self) -> &'static str {
        match self {
            DomainErrorKind::InvalidPokemonName => "the Pokemon name is not valid",
            DomainErrorKind::InvalidPokemonNickname => "the Pokemon nickname is not valid",
            DomainErrorKind::InvalidPokemonType => "the Pokemon type is not valid",
            DomainErrorKind::InvalidPokemonTypeCollectionItem => {
                "the Pokemon type collection has an invalid item"
            }
        }
    }

    /// Stable code for logging and for mapping by outer layers
    pub const fn category(self) -> &'static str {
        match self {
            DomainErrorKind::InvalidPokemonName => "invalid_pokemon_name",
            DomainErrorKind::InvalidPokemonNickname => "invalid_pokemon_nickname",
            DomainErrorKind::InvalidPokemonType => "invalid_pokemon_type",
            DomainErrorKind::InvalidPokemonTypeCollectionItem => {
                "invalid_pokemon_type_collection_item"
            }
        }
    }
}

impl fmt::Display for DomainErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Core error type for domain validation.
///
/// The only field is private: every instance comes from one of the named
/// factories below, so two errors of the same kind are always identical.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("{kind}")]
pub struct DomainError {
    kind: DomainErrorKind,
}

impl DomainError {
    const fn of(kind: DomainErrorKind) -> Self {
        Self { kind }
    }

    /// The Pokemon name failed validation
    pub const fn invalid_pokemon_name() -> Self {
        Self::of(DomainErrorKind::InvalidPokemonName)
    }

    /// The Pokemon nickname failed validation
    pub const fn invalid_pokemon_nickname() -> Self {
        Self::of(DomainErrorKind::InvalidPokemonNickname)
    }

    /// A type code is not recognised
    pub const fn invalid_pokemon_type() -> Self {
        Self::of(DomainErrorKind::InvalidPokemonType)
    }

    /// A Pokemon type collection was given an item it does not accept
    pub const fn pokemon_type_collection_has_invalid_item() -> Self {
        Self::of(DomainErrorKind::InvalidPokemonTypeCollectionItem)
    }

    pub const fn kind(&self) -> DomainErrorKind {
        self.kind
    }

    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Get the error category for logging and metrics
    pub const fn category(&self) -> &'static str {
        self.kind.category()
    }

    /// Check if this error reports a rejected collection item
    pub fn is_invalid_collection_item(&self) -> bool {
        matches!(self.kind, DomainErrorKind::InvalidPokemonTypeCollectionItem)
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, DomainError>;

/// Errors raised while loading or applying configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration source error: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Invalid type code in catalog: {code:?}")]
    InvalidTypeCode { code: String },

    #[error("Invalid type code length bounds: {min}..={max}")]
    InvalidCodeLength { min: i64, max: i64 },
}

impl ConfigError {
    pub fn invalid_type_code<S: Into<String>>(code: S) -> Self {
        Self::InvalidTypeCode { code: code.into() }
    }

    /// Get the error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            ConfigError::Source(_) => "config_source",
            ConfigError::InvalidTypeCode { .. } => "invalid_type_code",
            ConfigError::InvalidCodeLength { .. } => "invalid_code_length",
        }
    }
}
