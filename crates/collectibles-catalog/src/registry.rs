//! The collection registry: every category's materialized list, plus the
//! orchestration that fills it.
//!
//! Lifecycle is `unpopulated → ready`. [`CollectionRegistry::initialize`]
//! builds everything off to the side and publishes in one write, so a failed
//! pass leaves the registry exactly as it was. After that only the hairstyle
//! entry changes, swapped wholesale by
//! [`CollectionRegistry::rebuild_hairstyles`]. Readers clone `Arc`s under a
//! read lock and never see a half-replaced list.

use std::sync::Arc;
use std::time::{Duration, Instant};

use collectibles_common::{
    CatalogError, CatalogResult, Category, ClassJobRow, EquipSlot, SUPPORTED_EQUIP_SLOTS,
};
use parking_lot::RwLock;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::adapters::{StainAdapter, adapt_items};
use crate::builders::{BuildInputs, CategoryBuilder};
use crate::collectible::{Collectible, CollectibleKind};
use crate::config::CatalogConfig;
use crate::factory::{CacheStats, CollectibleFactory};
use crate::hairstyle::available_hairstyles;
use crate::player::{PlayerAttributes, PlayerCharacter};
use crate::reference::{supported_class_jobs, supported_stains};
use crate::source::RowSource;

/// An immutable, shareable category list.
pub type Collection = Arc<[Arc<Collectible>]>;

#[derive(Debug, Clone)]
pub struct CategoryEntry {
    pub category: Category,
    pub name: &'static str,
    pub order_key: u32,
    pub collection: Collection,
}

impl CategoryEntry {
    fn new(category: Category, list: Vec<Arc<Collectible>>) -> Self {
        Self {
            category,
            name: category.display_name(),
            order_key: category.order_key(),
            collection: list.into(),
        }
    }
}

/// Outcome of one [`CollectionRegistry::initialize`] pass.
#[derive(Debug, Clone)]
pub struct PopulateReport {
    /// Per-category sizes, in display order.
    pub counts: Vec<(Category, usize)>,
    pub total: usize,
    pub elapsed: Duration,
    pub parallel: bool,
}

impl PopulateReport {
    pub fn count(&self, category: Category) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

struct Populated {
    entries: FxHashMap<Category, CategoryEntry>,
    hairstyle_identity: PlayerAttributes,
    class_jobs: Arc<[ClassJobRow]>,
    stains: Arc<[StainAdapter]>,
}

pub struct CollectionRegistry {
    source: Arc<dyn RowSource>,
    config: CatalogConfig,
    factory: CollectibleFactory,
    thread_pool: Option<Arc<rayon::ThreadPool>>,
    state: RwLock<Option<Populated>>,
}

impl CollectionRegistry {
    pub fn new(source: Arc<dyn RowSource>, config: CatalogConfig) -> Self {
        // Fall back to sequential population if the pool cannot be built
        let thread_pool = match config.build_thread_pool() {
            Ok(pool) => pool.map(Arc::new),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_e, "populating sequentially");
                None
            }
        };
        Self::with_parts(source, config, thread_pool)
    }

    /// Create a registry that shares an existing rayon pool.
    pub fn with_thread_pool(
        source: Arc<dyn RowSource>,
        config: CatalogConfig,
        thread_pool: Arc<rayon::ThreadPool>,
    ) -> Self {
        Self::with_parts(source, config, Some(thread_pool))
    }

    fn with_parts(
        source: Arc<dyn RowSource>,
        config: CatalogConfig,
        thread_pool: Option<Arc<rayon::ThreadPool>>,
    ) -> Self {
        Self {
            source,
            config,
            factory: CollectibleFactory::new(),
            thread_pool,
            state: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn factory(&self) -> &CollectibleFactory {
        &self.factory
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.factory.stats()
    }

    pub fn is_parallel(&self) -> bool {
        self.thread_pool.is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.state.read().is_some()
    }

    /* ─────────────────────────── population ─────────────────────────── */

    /// Build every category and publish them together.
    ///
    /// All-or-nothing: on error nothing is published. Calling it again
    /// rebuilds from the source; the factory cache survives, so unchanged
    /// rows come back as the same instances.
    pub fn initialize(&self) -> CatalogResult<PopulateReport> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("initialize", parallel = self.is_parallel()).entered();
        let start = Instant::now();

        let populated = self.install(|| self.populate())?;
        let mut counts: Vec<(Category, usize)> = populated
            .entries
            .values()
            .map(|e| (e.category, e.collection.len()))
            .collect();
        counts.sort_by_key(|(c, _)| c.order_key());
        let report = PopulateReport {
            total: counts.iter().map(|(_, n)| n).sum(),
            counts,
            elapsed: start.elapsed(),
            parallel: self.is_parallel(),
        };

        *self.state.write() = Some(populated);

        #[cfg(feature = "tracing")]
        tracing::info!(
            total = report.total,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "collections populated"
        );
        Ok(report)
    }

    fn populate(&self) -> CatalogResult<Populated> {
        let source: &dyn RowSource = &*self.source;
        let parallel = self.is_parallel();

        let default_player = self.config.default_player;
        let hairstyles = available_hairstyles(source, default_player).inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %_e, "hairstyle reference data missing");
        })?;
        let items = adapt_items(source, parallel);
        let inputs = BuildInputs {
            items: &items,
            hairstyles: &hairstyles,
        };

        let builder = CategoryBuilder::new(source, &self.factory, &self.config.overrides, parallel);
        let build = |category: Category| CategoryEntry::new(category, builder.build(category, inputs));
        let entries: Vec<CategoryEntry> = if parallel {
            Category::ALL.par_iter().map(|&c| build(c)).collect()
        } else {
            Category::ALL.iter().map(|&c| build(c)).collect()
        };

        Ok(Populated {
            entries: entries.into_iter().map(|e| (e.category, e)).collect(),
            hairstyle_identity: default_player,
            class_jobs: supported_class_jobs(source, parallel).into(),
            stains: supported_stains(source).into(),
        })
    }

    /// Rebuild only the hairstyle collection for `player`, or for the
    /// configured default identity when `None`.
    ///
    /// On error the previous hairstyle list stays in place.
    pub fn rebuild_hairstyles(&self, player: Option<&dyn PlayerCharacter>) -> CatalogResult<usize> {
        let attributes = PlayerAttributes::resolve(player, self.config.default_player)?;
        self.rebuild_hairstyles_for(attributes)
    }

    pub fn rebuild_hairstyles_for(&self, attributes: PlayerAttributes) -> CatalogResult<usize> {
        let not_ready = CatalogError::Lookup {
            category: Category::Hairstyle,
        };
        if !self.is_ready() {
            return Err(not_ready);
        }

        let list = self.install(|| {
            let set = available_hairstyles(&*self.source, attributes)?;
            let builder = CategoryBuilder::new(
                &*self.source,
                &self.factory,
                &self.config.overrides,
                self.is_parallel(),
            );
            Ok::<_, CatalogError>(builder.hairstyles(&set))
        })?;
        let count = list.len();

        let mut state = self.state.write();
        let populated = state.as_mut().ok_or(not_ready)?;
        populated.entries.insert(
            Category::Hairstyle,
            CategoryEntry::new(Category::Hairstyle, list),
        );
        populated.hairstyle_identity = attributes;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            race = attributes.race,
            tribe = attributes.tribe,
            gender = attributes.gender,
            count,
            "hairstyles rebuilt"
        );
        Ok(count)
    }

    /// Hook for the host's login event.
    pub fn repopulate_for_logged_in_player(
        &self,
        player: &dyn PlayerCharacter,
    ) -> CatalogResult<usize> {
        self.rebuild_hairstyles(Some(player))
    }

    fn install<T, F>(&self, op: F) -> T
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        match &self.thread_pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    /* ───────────────────────────── lookups ───────────────────────────── */

    pub fn entry(&self, category: Category) -> CatalogResult<CategoryEntry> {
        self.state
            .read()
            .as_ref()
            .and_then(|p| p.entries.get(&category).cloned())
            .ok_or(CatalogError::Lookup { category })
    }

    pub fn collection(&self, category: Category) -> CatalogResult<Collection> {
        self.entry(category).map(|e| e.collection)
    }

    /// Typed lookup: `registry.collection_of::<MountCollectible>()`.
    pub fn collection_of<C: CollectibleKind>(&self) -> CatalogResult<Collection> {
        self.collection(C::CATEGORY)
    }

    /// All entries in display order; empty before population.
    pub fn entries(&self) -> Vec<CategoryEntry> {
        let state = self.state.read();
        let mut entries: Vec<CategoryEntry> = state
            .as_ref()
            .map(|p| p.entries.values().cloned().collect())
            .unwrap_or_default();
        entries.sort_by_key(|e| e.order_key);
        entries
    }

    /// Snapshot of every collection keyed by display name.
    pub fn all_collections(&self) -> FxHashMap<&'static str, Collection> {
        self.state
            .read()
            .as_ref()
            .map(|p| {
                p.entries
                    .values()
                    .map(|e| (e.name, Arc::clone(&e.collection)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Identity the current hairstyle list was built for.
    pub fn hairstyle_identity(&self) -> Option<PlayerAttributes> {
        self.state.read().as_ref().map(|p| p.hairstyle_identity)
    }

    pub fn supported_class_jobs(&self) -> CatalogResult<Arc<[ClassJobRow]>> {
        self.state
            .read()
            .as_ref()
            .map(|p| Arc::clone(&p.class_jobs))
            .ok_or(CatalogError::NotReady)
    }

    pub fn supported_stains(&self) -> CatalogResult<Arc<[StainAdapter]>> {
        self.state
            .read()
            .as_ref()
            .map(|p| Arc::clone(&p.stains))
            .ok_or(CatalogError::NotReady)
    }

    pub fn supported_equip_slots(&self) -> &'static [EquipSlot] {
        &SUPPORTED_EQUIP_SLOTS
    }
}

impl std::fmt::Debug for CollectionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionRegistry")
            .field("config", &self.config)
            .field("parallel", &self.is_parallel())
            .field("ready", &self.is_ready())
            .field("cache", &self.factory.stats())
            .finish()
    }
}
