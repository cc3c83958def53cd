//! Meta crate that re-exports the collectible catalog building blocks.
//! Downstream users depend on this crate and reach the sheet model through
//! [`common`] or the population machinery through [`catalog`] when they need
//! more than the top-level re-exports.

#[cfg(feature = "common")]
pub use collectibles_common as common;

#[cfg(feature = "catalog")]
pub use collectibles_catalog as catalog;

#[cfg(feature = "common")]
pub use collectibles_common::{
    CatalogError, CatalogResult, Category, EquipSlot, RowId, SUPPORTED_EQUIP_SLOTS, SeString,
};

#[cfg(feature = "catalog")]
pub use collectibles_catalog::{
    CatalogConfig, CategoryEntry, Collectible, CollectibleKind, Collection, CollectionRegistry,
    DataOverrides, InMemorySource, PlayerAttributes, PlayerCharacter, PopulateReport, RowSource,
};

#[cfg(feature = "catalog")]
pub mod doc_examples;
