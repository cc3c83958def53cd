//! Per-category filter chains.
//!
//! Each builder reads one sheet, keeps the rows its predicate accepts and maps
//! them through the [`CollectibleFactory`]. Predicates run cheap checks first
//! so field dereferences only happen for plausible rows. Output order is the
//! sheet's row order.

use std::sync::Arc;

use collectibles_common::{Category, ItemRow, RowId, SheetIndex, SheetRow};

use crate::adapters::{CharaMakeCustomizeAdapter, ItemAdapter};
use crate::collectible::*;
use crate::config::DataOverrides;
use crate::factory::CollectibleFactory;
use crate::fanout::filter_map_rows;
use crate::hairstyle::HairstyleSet;
use crate::source::RowSource;

/// Items at or below this id are 1.0 "Dated"/"Weathered" placeholders.
pub const LEGACY_ITEM_MAX_ROW_ID: RowId = 1599;
/// `ClassJob` row of Blue Mage.
pub const BLUE_MAGE_CLASS_JOB: RowId = 36;
/// `ItemUICategory` row of outfit glamours.
pub const OUTFIT_UI_CATEGORY: RowId = 112;
/// `ItemAction` type of framer's kits.
pub const FRAMER_KIT_ACTION_TYPE: u16 = 29459;

/// Shared inputs computed once per population pass.
#[derive(Debug, Clone, Copy)]
pub struct BuildInputs<'i> {
    /// The adapted `Item` sheet, shared by the three item-backed categories.
    pub items: &'i [ItemAdapter],
    pub hairstyles: &'i HairstyleSet,
}

pub struct CategoryBuilder<'a, S: RowSource + ?Sized> {
    source: &'a S,
    factory: &'a CollectibleFactory,
    overrides: &'a DataOverrides,
    parallel: bool,
}

impl<'a, S: RowSource + ?Sized> CategoryBuilder<'a, S> {
    pub fn new(
        source: &'a S,
        factory: &'a CollectibleFactory,
        overrides: &'a DataOverrides,
        parallel: bool,
    ) -> Self {
        Self {
            source,
            factory,
            overrides,
            parallel,
        }
    }

    pub fn build(&self, category: Category, inputs: BuildInputs<'_>) -> Vec<Arc<Collectible>> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("build_category", category = %category).entered();

        let list = match category {
            Category::Glamour => self.glamour(inputs.items),
            Category::Mount => self.mounts(),
            Category::Minion => self.minions(),
            Category::Emote => self.emotes(),
            Category::Hairstyle => self.hairstyles(inputs.hairstyles),
            Category::TripleTriad => self.triple_triad(),
            Category::BlueMage => self.blue_mage(),
            Category::Barding => self.bardings(),
            Category::OrchestrionRoll => self.orchestrion_rolls(),
            Category::Outfit => self.outfits(inputs.items),
            Category::FramerKit => self.framer_kits(inputs.items),
            Category::FashionAccessory => self.fashion_accessories(),
            Category::Glasses => self.glasses(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(category = %category, count = list.len(), "category built");
        list
    }

    fn collect<R, C, P>(&self, rows: &[R], keep: P) -> Vec<Arc<Collectible>>
    where
        R: SheetRow,
        C: FromRow<R>,
        P: Fn(&R) -> bool + Sync + Send,
    {
        let factory = self.factory;
        filter_map_rows(rows, self.parallel, |row| {
            keep(row).then(|| factory.get_object::<C, R>(row))
        })
    }

    pub fn glamour(&self, items: &[ItemAdapter]) -> Vec<Arc<Collectible>> {
        self.collect::<_, GlamourCollectible, _>(items, |item| {
            item.level_equip >= 1
                && item.equip_slot.is_some_and(|slot| slot.is_supported())
                && item.row_id > LEGACY_ITEM_MAX_ROW_ID
        })
    }

    pub fn mounts(&self) -> Vec<Arc<Collectible>> {
        self.collect::<_, MountCollectible, _>(self.source.mounts(), |row| {
            !row.singular.is_empty() && row.order != -1
        })
    }

    pub fn minions(&self) -> Vec<Arc<Collectible>> {
        let ignored = &self.overrides.ignore_minion_ids;
        self.collect::<_, MinionCollectible, _>(self.source.companions(), |row| {
            !row.singular.is_empty() && !ignored.contains(&row.row_id)
        })
    }

    pub fn emotes(&self) -> Vec<Arc<Collectible>> {
        let ignored = &self.overrides.ignore_emote_ids;
        self.collect::<_, EmoteCollectible, _>(self.source.emotes(), |row| {
            !row.name.is_empty()
                && row.icon != 0
                && !ignored.contains(&row.row_id)
                && row.unlock_link != 0
        })
    }

    pub fn hairstyles(&self, available: &HairstyleSet) -> Vec<Arc<Collectible>> {
        let items: SheetIndex<'_, ItemRow> = SheetIndex::new(self.source.items());
        let factory = self.factory;
        filter_map_rows(self.source.chara_make_customize(), self.parallel, |row| {
            (row.is_purchasable && available.contains(row.row_id)).then(|| {
                let adapted = CharaMakeCustomizeAdapter::adapt(row, &items);
                factory.get_object::<HairstyleCollectible, _>(&adapted)
            })
        })
    }

    pub fn triple_triad(&self) -> Vec<Arc<Collectible>> {
        self.collect::<_, TripleTriadCollectible, _>(self.source.triple_triad_cards(), |row| {
            !row.name.is_empty() && !row.name.text_eq("0")
        })
    }

    pub fn blue_mage(&self) -> Vec<Arc<Collectible>> {
        self.collect::<_, BlueMageCollectible, _>(self.source.actions(), |row| {
            row.class_job == BLUE_MAGE_CLASS_JOB && !row.name.is_empty()
        })
    }

    pub fn bardings(&self) -> Vec<Arc<Collectible>> {
        let ignored = &self.overrides.ignore_barding_ids;
        self.collect::<_, BardingCollectible, _>(self.source.buddy_equips(), |row| {
            !row.name.is_empty() && !ignored.contains(&row.row_id)
        })
    }

    pub fn orchestrion_rolls(&self) -> Vec<Arc<Collectible>> {
        self.collect::<_, OrchestrionCollectible, _>(self.source.orchestrions(), |row| {
            !row.name.is_empty() && !row.name.text_eq("0")
        })
    }

    pub fn outfits(&self, items: &[ItemAdapter]) -> Vec<Arc<Collectible>> {
        self.collect::<_, OutfitCollectible, _>(items, |item| {
            item.level_equip >= 1 && item.ui_category == OUTFIT_UI_CATEGORY
        })
    }

    pub fn framer_kits(&self, items: &[ItemAdapter]) -> Vec<Arc<Collectible>> {
        self.collect::<_, FramerKitCollectible, _>(items, |item| {
            item.action_type == FRAMER_KIT_ACTION_TYPE
        })
    }

    pub fn fashion_accessories(&self) -> Vec<Arc<Collectible>> {
        let ignored = &self.overrides.ignore_fashion_accessory_ids;
        self.collect::<_, FashionAccessoryCollectible, _>(self.source.ornaments(), |row| {
            row.icon != 0 && !ignored.contains(&row.row_id)
        })
    }

    pub fn glasses(&self) -> Vec<Arc<Collectible>> {
        let styles = SheetIndex::new(self.source.glasses_styles());
        self.collect::<_, GlassesCollectible, _>(self.source.glasses(), |row| {
            row.icon != 0
                && styles
                    .get(row.style)
                    .is_some_and(|style| style.name.text() == row.name.text())
        })
    }
}
