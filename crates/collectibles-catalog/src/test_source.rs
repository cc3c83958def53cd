//! Lightweight in-memory row source for unit/prop tests and small hosts.
use collectibles_common::{
    ActionRow, BuddyEquipRow, CharaMakeCustomizeRow, ClassJobRow, CompanionRow, EmoteRow,
    EquipSlotCategoryRow, GlassesRow, GlassesStyleRow, HairMakeTypeRow, ItemActionRow, ItemRow,
    LobbyRow, MountRow, OrchestrionRow, OrnamentRow, StainRow, TripleTriadCardRow,
};

use crate::source::RowSource;

macro_rules! in_memory_source {
    ($($field:ident: $row:ty => $with:ident),+ $(,)?) => {
        /// Owns every sheet as a `Vec`, in insertion order.
        #[derive(Debug, Clone, Default)]
        pub struct InMemorySource {
            $($field: Vec<$row>,)+
        }

        impl InMemorySource {
            $(
                pub fn $with(mut self, rows: impl IntoIterator<Item = $row>) -> Self {
                    self.$field.extend(rows);
                    self
                }
            )+
        }

        impl RowSource for InMemorySource {
            $(
                fn $field(&self) -> &[$row] {
                    &self.$field
                }
            )+
        }
    };
}

in_memory_source! {
    items: ItemRow => with_items,
    equip_slot_categories: EquipSlotCategoryRow => with_equip_slot_categories,
    item_actions: ItemActionRow => with_item_actions,
    mounts: MountRow => with_mounts,
    companions: CompanionRow => with_companions,
    emotes: EmoteRow => with_emotes,
    chara_make_customize: CharaMakeCustomizeRow => with_chara_make_customize,
    hair_make_types: HairMakeTypeRow => with_hair_make_types,
    lobby: LobbyRow => with_lobby,
    triple_triad_cards: TripleTriadCardRow => with_triple_triad_cards,
    actions: ActionRow => with_actions,
    buddy_equips: BuddyEquipRow => with_buddy_equips,
    orchestrions: OrchestrionRow => with_orchestrions,
    ornaments: OrnamentRow => with_ornaments,
    glasses: GlassesRow => with_glasses,
    glasses_styles: GlassesStyleRow => with_glasses_styles,
    class_jobs: ClassJobRow => with_class_jobs,
    stains: StainRow => with_stains,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every character-creation parameter row. Handy for exercising the
    /// missing-reference-data path.
    pub fn without_hair_make_types(mut self) -> Self {
        self.hair_make_types.clear();
        self
    }
}
