//! Validated collection of Pokemon types
//!
//! # Examples
//!
//! ```rust
//! use pokedex_core::pokemon_type::PokemonType;
//! use pokedex_core::type_collection::PokemonTypeCollection;
//! use serde_json::json;
//!
//! let from_raw = PokemonTypeCollection::from_primitives(&[json!("fire"), json!("flying")]).unwrap();
//! let typed = PokemonTypeCollection::construct(vec![
//!     PokemonType::new("fire").unwrap(),
//!     PokemonType::new("flying").unwrap(),
//! ])
//! .unwrap();
//!
//! assert_eq!(from_raw, typed);
//! assert!(from_raw.has_type("flying"));
//! ```

use crate::collection::{CollectionSchema, ValidatedCollection};
use crate::pokemon_type::{PokemonType, TypeCatalog};
use crate::{DomainError, Result};
use serde_json::Value;
use std::sync::Arc;

/// Accepts Pokemon types recognised by a catalog
#[derive(Debug, Clone)]
pub struct PokemonTypeSchema {
    catalog: Arc<TypeCatalog>,
}

impl PokemonTypeSchema {
    pub fn new(catalog: Arc<TypeCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }
}

impl Default for PokemonTypeSchema {
    fn default() -> Self {
        Self::new(Arc::clone(TypeCatalog::canonical()))
    }
}

impl CollectionSchema for PokemonTypeSchema {
    type Item = PokemonType;

    fn accepts(&self, item: &PokemonType) -> bool {
        self.catalog.contains(item.code())
    }

    fn from_primitive(&self, raw: &Value) -> Result<PokemonType> {
        let code = raw.as_str().ok_or_else(|| self.invalid_item())?;
        PokemonType::in_catalog(&self.catalog, code)
    }

    fn invalid_item(&self) -> DomainError {
        DomainError::pokemon_type_collection_has_invalid_item()
    }
}

pub type PokemonTypeCollection = ValidatedCollection<PokemonTypeSchema>;

impl ValidatedCollection<PokemonTypeSchema> {
    /// Type codes in insertion order
    pub fn type_codes(&self) -> Vec<&str> {
        self.iter().map(PokemonType::code).collect()
    }

    pub fn has_type(&self, code: &str) -> bool {
        self.iter().any(|t| t.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::CollectionSeed;
    use crate::DomainErrorKind;
    use assert_matches::assert_matches;
    use rstest::rstest;
    use serde::de::DeserializeSeed;
    use serde_json::json;

    fn types(codes: &[&str]) -> Vec<PokemonType> {
        codes.iter().map(|c| PokemonType::new(*c).unwrap()).collect()
    }

    #[test]
    fn test_construct_from_valid_types() {
        let collection = PokemonTypeCollection::construct(types(&["fire", "flying"])).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.type_codes(), vec!["fire", "flying"]);
        assert!(collection.has_type("fire"));
        assert!(!collection.has_type("water"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let collection = PokemonTypeCollection::construct(types(&["ice", "ice"])).unwrap();
        assert_eq!(collection.type_codes(), vec!["ice", "ice"]);
    }

    #[test]
    fn test_construct_rejects_type_outside_catalog() {
        let extended = TypeCatalog::extended(["shadow"]).unwrap();
        let shadow = PokemonType::in_catalog(&extended, "shadow").unwrap();
        let fire = PokemonType::new("fire").unwrap();

        let err = PokemonTypeCollection::construct(vec![fire, shadow]).unwrap_err();
        assert_eq!(err.kind(), DomainErrorKind::InvalidPokemonTypeCollectionItem);
    }

    #[test]
    fn test_construct_with_extended_catalog() {
        let extended = Arc::new(TypeCatalog::extended(["shadow"]).unwrap());
        let schema = PokemonTypeSchema::new(Arc::clone(&extended));
        let shadow = PokemonType::in_catalog(&extended, "shadow").unwrap();

        let collection = PokemonTypeCollection::construct_with(&schema, vec![shadow]).unwrap();
        assert!(collection.has_type("shadow"));

        let from_raw =
            PokemonTypeCollection::from_primitives_with(&schema, &[json!("shadow"), json!("dark")])
                .unwrap();
        assert_eq!(from_raw.type_codes(), vec!["shadow", "dark"]);
    }

    #[test]
    fn test_extended_catalog_collection_derives_and_round_trips() {
        let extended = Arc::new(TypeCatalog::extended(["shadow"]).unwrap());
        let schema = PokemonTypeSchema::new(Arc::clone(&extended));
        let shadow = PokemonType::in_catalog(&extended, "shadow").unwrap();
        let collection =
            PokemonTypeCollection::construct_with(&schema, vec![shadow.clone()]).unwrap();

        let dual = collection.with(PokemonType::new("fire").unwrap()).unwrap();
        assert_eq!(dual.type_codes(), vec!["shadow", "fire"]);

        let fire_only = dual.without(&shadow);
        assert_eq!(fire_only.type_codes(), vec!["fire"]);
        assert!(fire_only.with(shadow).is_ok());

        let json = serde_json::to_string(&dual).unwrap();
        assert_eq!(json, r#"["shadow","fire"]"#);
        let mut deserializer = serde_json::Deserializer::from_str(&json);
        let back = CollectionSeed::new(dual.schema())
            .deserialize(&mut deserializer)
            .unwrap();
        assert_eq!(back, dual);
        assert!(back.schema().catalog().contains("shadow"));
    }

    #[test]
    fn test_from_primitives_equals_typed_construction() {
        let from_raw =
            PokemonTypeCollection::from_primitives(&[json!("fire"), json!("water")]).unwrap();
        let typed = PokemonTypeCollection::construct(types(&["fire", "water"])).unwrap();
        assert_eq!(from_raw, typed);
    }

    #[rstest]
    #[case(json!(42))]
    #[case(json!(null))]
    #[case(json!(true))]
    #[case(json!(["fire"]))]
    #[case(json!({"code": "fire"}))]
    fn test_from_primitives_rejects_non_text(#[case] raw: Value) {
        let err = PokemonTypeCollection::from_primitives(&[json!("fire"), raw]).unwrap_err();
        assert_eq!(err.kind(), DomainErrorKind::InvalidPokemonTypeCollectionItem);
    }

    #[test]
    fn test_unknown_code_surfaces_as_collection_error() {
        let err = PokemonTypeCollection::from_primitives(&[json!("plasma")]).unwrap_err();
        assert_eq!(err.kind(), DomainErrorKind::InvalidPokemonTypeCollectionItem);
        assert_ne!(err, DomainError::invalid_pokemon_type());
    }

    #[test]
    fn test_derived_collections() {
        let original = PokemonTypeCollection::construct(types(&["grass"])).unwrap();
        let dual = original.with(PokemonType::new("poison").unwrap()).unwrap();
        assert_eq!(dual.type_codes(), vec!["grass", "poison"]);
        assert_eq!(original.type_codes(), vec!["grass"]);

        let back = dual.without(&PokemonType::new("poison").unwrap());
        assert_eq!(back, original);
    }

    #[test]
    fn test_serde_uses_type_codes() {
        let collection = PokemonTypeCollection::construct(types(&["bug", "steel"])).unwrap();
        let json = serde_json::to_string(&collection).unwrap();
        assert_eq!(json, r#"["bug","steel"]"#);

        let parsed: PokemonTypeCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, collection);

        assert_matches!(serde_json::from_str::<PokemonTypeCollection>(r#"["bug", 7]"#), Err(_));
    }
}
