//! Core domain models for Pokedex
//!
//! This crate contains the validated value objects used across the Pokedex
//! domain: Pokemon types, the catalog that defines which types exist, and the
//! immutable collections that hold them. Every value is checked when it is
//! built and cannot change afterwards.

pub mod collection;
pub mod config;
pub mod error;
pub mod pokemon_type;
pub mod type_collection;
pub mod validation;

pub use error::{ConfigError, DomainError, DomainErrorKind, Result};
