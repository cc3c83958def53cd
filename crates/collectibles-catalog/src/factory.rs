//! Memoizing collectible factory.
//!
//! Keys are `(category, row id)`, so identical ids from unrelated sheets
//! never share a slot. A miss takes the shard's write lock through the entry
//! API, which makes construction single-flight: concurrent callers for the
//! same key wait for the first one and get its `Arc`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use collectibles_common::{Category, RowId, SheetRow};
use dashmap::DashMap;

use crate::collectible::{Collectible, FromRow};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub category: Category,
    pub row_id: RowId,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub entries: usize,
    /// Times construction logic actually ran.
    pub constructed: usize,
}

#[derive(Debug, Default)]
pub struct CollectibleFactory {
    cache: DashMap<CacheKey, Arc<Collectible>>,
    constructed: AtomicUsize,
}

impl CollectibleFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical collectible of kind `C` for `row`.
    pub fn get_object<C, R>(&self, row: &R) -> Arc<Collectible>
    where
        C: FromRow<R>,
        R: SheetRow,
    {
        let key = CacheKey {
            category: C::CATEGORY,
            row_id: row.row_id(),
        };
        if let Some(hit) = self.cache.get(&key) {
            return Arc::clone(hit.value());
        }
        let entry = self.cache.entry(key).or_insert_with(|| {
            self.constructed.fetch_add(1, Ordering::Relaxed);
            Arc::new(C::from_row(row).into())
        });
        Arc::clone(entry.value())
    }

    pub fn get(&self, category: Category, row_id: RowId) -> Option<Arc<Collectible>> {
        self.cache
            .get(&CacheKey { category, row_id })
            .map(|v| Arc::clone(v.value()))
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.len(),
            constructed: self.constructed.load(Ordering::Relaxed),
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
