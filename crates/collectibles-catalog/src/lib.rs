//! Collectible catalog population.
//!
//! Filters read-only game-data sheets into per-category collectible lists
//! and caches every collectible object so each source row is adapted at most
//! once. See [`CollectionRegistry`] for the entry point.

pub mod adapters;
pub mod builders;
pub mod collectible;
pub mod config;
pub mod factory;
pub mod hairstyle;
pub mod player;
pub mod reference;
pub mod registry;
pub mod source;
pub mod test_source;

mod fanout;

pub use collectible::{Collectible, CollectibleKind, FromRow};
pub use config::{CatalogConfig, DataOverrides};
pub use factory::{CacheKey, CacheStats, CollectibleFactory};
pub use player::{PlayerAttributes, PlayerCharacter};
pub use registry::{CategoryEntry, Collection, CollectionRegistry, PopulateReport};
pub use source::RowSource;
pub use test_source::InMemorySource;

pub use collectibles_common::{CatalogError, CatalogResult, Category};

#[cfg(test)]
mod tests;
