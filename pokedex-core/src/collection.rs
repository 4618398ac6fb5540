//! Immutable, self-validating collections of domain value objects
//!
//! A [`ValidatedCollection`] is parameterised by a [`CollectionSchema`] that
//! decides which items are acceptable and how a raw primitive becomes an
//! item. Both construction paths run through the same acceptance check, so a
//! collection built from typed items and one built from primitives obey the
//! same invariant.
//!
//! Construction is fail-fast: the first rejected item, in input order, aborts
//! the whole construction and no partial collection is returned.
//!
//! A collection keeps the schema it was validated with, so derived
//! collections from [`ValidatedCollection::with`] are checked by the same
//! rules. The `Deserialize` impl always uses `S::default()`; use
//! [`CollectionSeed`] to read a collection back under another schema.
//!
//! # Examples
//!
//! ```rust
//! use pokedex_core::collection::*;
//! use pokedex_core::{DomainError, Result};
//! use serde_json::{json, Value};
//!
//! #[derive(Clone, Default)]
//! struct Levels;
//!
//! impl CollectionSchema for Levels {
//!     type Item = u8;
//!
//!     fn accepts(&self, item: &u8) -> bool {
//!         (1..=100).contains(item)
//!     }
//!
//!     fn from_primitive(&self, raw: &Value) -> Result<u8> {
//!         raw.as_u64()
//!             .and_then(|n| u8::try_from(n).ok())
//!             .ok_or_else(|| self.invalid_item())
//!     }
//!
//!     fn invalid_item(&self) -> DomainError {
//!         DomainError::pokemon_type_collection_has_invalid_item()
//!     }
//! }
//!
//! let levels = ValidatedCollection::<Levels>::construct(vec![5, 50]).unwrap();
//! assert_eq!(levels.len(), 2);
//! assert!(ValidatedCollection::<Levels>::from_primitives(&[json!(0)]).is_err());
//! ```

use crate::{DomainError, Result};
use serde::de::{Deserialize, DeserializeSeed, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Rules for one kind of validated collection
pub trait CollectionSchema: Clone {
    type Item;

    /// Whether `item` may be held by the collection
    fn accepts(&self, item: &Self::Item) -> bool;

    /// Turn a raw primitive into an item.
    ///
    /// Implementations check the primitive's shape before attempting any
    /// conversion. Whatever error this returns, the collection reports
    /// [`CollectionSchema::invalid_item`] to its caller.
    fn from_primitive(&self, raw: &Value) -> Result<Self::Item>;

    /// The error reported for any rejected item
    fn invalid_item(&self) -> DomainError;
}

/// Ordered, immutable collection whose items all satisfy schema `S`
pub struct ValidatedCollection<S: CollectionSchema> {
    schema: S,
    items: Vec<S::Item>,
}

impl<S: CollectionSchema> ValidatedCollection<S> {
    /// Validate `items` against the default schema
    pub fn construct(items: Vec<S::Item>) -> Result<Self>
    where
        S: Default,
    {
        Self::construct_with(&S::default(), items)
    }

    /// Validate `items` against `schema`
    pub fn construct_with(schema: &S, items: Vec<S::Item>) -> Result<Self> {
        if let Some(index) = items.iter().position(|item| !schema.accepts(item)) {
            let err = schema.invalid_item();
            debug!(index, category = err.category(), "rejected collection item");
            return Err(err);
        }
        Ok(Self {
            schema: schema.clone(),
            items,
        })
    }

    /// Convert and validate raw primitives with the default schema
    pub fn from_primitives(raw: &[Value]) -> Result<Self>
    where
        S: Default,
    {
        Self::from_primitives_with(&S::default(), raw)
    }

    /// Convert and validate raw primitives with `schema`
    pub fn from_primitives_with(schema: &S, raw: &[Value]) -> Result<Self> {
        let mut items = Vec::with_capacity(raw.len());
        for (index, element) in raw.iter().enumerate() {
            match schema.from_primitive(element) {
                Ok(item) => items.push(item),
                Err(source) => {
                    debug!(
                        index,
                        source = source.category(),
                        "rejected collection primitive"
                    );
                    return Err(schema.invalid_item());
                }
            }
        }
        Self::construct_with(schema, items)
    }

    /// The schema this collection was validated with
    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S::Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&S::Item> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&S::Item> {
        self.items.first()
    }

    pub fn as_slice(&self) -> &[S::Item] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<S::Item> {
        self.items
    }

    /// Check membership by value equality
    pub fn contains(&self, item: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        self.items.contains(item)
    }

    /// New collection holding these items followed by `item`
    pub fn with(&self, item: S::Item) -> Result<Self>
    where
        S::Item: Clone,
    {
        let mut items = self.items.clone();
        items.push(item);
        Self::construct_with(&self.schema, items)
    }

    /// New collection without any item equal to `item`
    pub fn without(&self, item: &S::Item) -> Self
    where
        S::Item: Clone + PartialEq,
    {
        Self {
            schema: self.schema.clone(),
            items: self.items.iter().filter(|i| *i != item).cloned().collect(),
        }
    }
}

impl<S: CollectionSchema> Clone for ValidatedCollection<S>
where
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            items: self.items.clone(),
        }
    }
}

impl<S: CollectionSchema> fmt::Debug for ValidatedCollection<S>
where
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<S: CollectionSchema> PartialEq for ValidatedCollection<S>
where
    S::Item: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<S: CollectionSchema> Eq for ValidatedCollection<S> where S::Item: Eq {}

impl<S: CollectionSchema> Hash for ValidatedCollection<S>
where
    S::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<'a, S: CollectionSchema> IntoIterator for &'a ValidatedCollection<S> {
    type Item = &'a S::Item;
    type IntoIter = std::slice::Iter<'a, S::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<S: CollectionSchema> IntoIterator for ValidatedCollection<S> {
    type Item = S::Item;
    type IntoIter = std::vec::IntoIter<S::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<S: CollectionSchema> Serialize for ValidatedCollection<S>
where
    S::Item: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.items.serialize(serializer)
    }
}

impl<'de, S: CollectionSchema + Default> Deserialize<'de> for ValidatedCollection<S> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        CollectionSeed::new(&S::default()).deserialize(deserializer)
    }
}

/// Deserializes a sequence of primitives into a collection checked by a
/// given schema
#[derive(Debug)]
pub struct CollectionSeed<'a, S> {
    schema: &'a S,
}

impl<'a, S: CollectionSchema> CollectionSeed<'a, S> {
    pub fn new(schema: &'a S) -> Self {
        Self { schema }
    }
}

impl<'de, S: CollectionSchema> DeserializeSeed<'de> for CollectionSeed<'_, S> {
    type Value = ValidatedCollection<S>;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<Value>::deserialize(deserializer)?;
        ValidatedCollection::from_primitives_with(self.schema, &raw).map_err(D::Error::custom)
    }
}
