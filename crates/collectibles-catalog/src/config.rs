use collectibles_common::{CatalogError, CatalogResult, RowId};
use rayon::ThreadPoolBuilder;
use rustc_hash::FxHashSet;

use crate::player::PlayerAttributes;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rows to drop from a category even though they pass its filter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataOverrides {
    pub ignore_minion_ids: FxHashSet<RowId>,
    pub ignore_emote_ids: FxHashSet<RowId>,
    pub ignore_barding_ids: FxHashSet<RowId>,
    pub ignore_fashion_accessory_ids: FxHashSet<RowId>,
}

impl DataOverrides {
    /// No exclusions at all.
    pub fn empty() -> Self {
        Self {
            ignore_minion_ids: FxHashSet::default(),
            ignore_emote_ids: FxHashSet::default(),
            ignore_barding_ids: FxHashSet::default(),
            ignore_fashion_accessory_ids: FxHashSet::default(),
        }
    }
}

impl Default for DataOverrides {
    fn default() -> Self {
        // Representative ids; hosts with their own exclusion data should pass
        // it through `CatalogConfig::with_overrides`.
        Self {
            ignore_minion_ids: [68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 91]
                .into_iter()
                .collect(),
            ignore_emote_ids: [56, 57, 58, 59, 74, 75, 133, 141].into_iter().collect(),
            ignore_barding_ids: [1, 2, 3, 4, 9, 10, 11, 12].into_iter().collect(),
            ignore_fashion_accessory_ids: [22].into_iter().collect(),
        }
    }
}

/// Configuration for catalog population.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Fan categories and rows out over a rayon pool.
    pub enable_parallel: bool,
    /// Worker count for the dedicated pool; rayon's default when `None`.
    pub max_threads: Option<usize>,
    pub overrides: DataOverrides,
    /// Identity used for the hairstyle collection until a player logs in.
    pub default_player: PlayerAttributes,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            enable_parallel: true,
            max_threads: None,
            overrides: DataOverrides::default(),
            default_player: PlayerAttributes::REFERENCE,
        }
    }
}

impl CatalogConfig {
    /// Single-threaded population; handy for deterministic debugging.
    pub fn sequential() -> Self {
        Self {
            enable_parallel: false,
            ..Self::default()
        }
    }

    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.enable_parallel = enable;
        self
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = Some(threads);
        self
    }

    pub fn with_overrides(mut self, overrides: DataOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_default_player(mut self, attributes: PlayerAttributes) -> Self {
        self.default_player = attributes;
        self
    }

    /// Build the dedicated worker pool this config asks for.
    ///
    /// `Ok(None)` when parallelism is disabled.
    pub fn build_thread_pool(&self) -> CatalogResult<Option<rayon::ThreadPool>> {
        if !self.enable_parallel {
            return Ok(None);
        }
        let mut builder =
            ThreadPoolBuilder::new().thread_name(|i| format!("collectibles-populate-{i}"));
        if let Some(max_threads) = self.max_threads {
            builder = builder.num_threads(max_threads);
        }
        builder
            .build()
            .map(Some)
            .map_err(|e| CatalogError::ThreadPool(e.to_string()))
    }
}
