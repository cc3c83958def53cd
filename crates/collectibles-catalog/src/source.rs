//! Read-only sheet access supplied by the host.
//!
//! Every accessor returns the sheet's rows in natural iteration order. The
//! catalog reads sheets from several worker threads at once, hence the
//! `Send + Sync` bound; implementations must not mutate rows while a
//! registry holds the source.

use collectibles_common::{
    ActionRow, BuddyEquipRow, CharaMakeCustomizeRow, ClassJobRow, CompanionRow, EmoteRow,
    EquipSlotCategoryRow, GlassesRow, GlassesStyleRow, HairMakeTypeRow, ItemActionRow, ItemRow,
    LobbyRow, MountRow, OrchestrionRow, OrnamentRow, StainRow, TripleTriadCardRow,
};

pub trait RowSource: Send + Sync {
    fn items(&self) -> &[ItemRow];
    fn equip_slot_categories(&self) -> &[EquipSlotCategoryRow];
    fn item_actions(&self) -> &[ItemActionRow];
    fn mounts(&self) -> &[MountRow];
    fn companions(&self) -> &[CompanionRow];
    fn emotes(&self) -> &[EmoteRow];
    fn chara_make_customize(&self) -> &[CharaMakeCustomizeRow];
    fn hair_make_types(&self) -> &[HairMakeTypeRow];
    fn lobby(&self) -> &[LobbyRow];
    fn triple_triad_cards(&self) -> &[TripleTriadCardRow];
    fn actions(&self) -> &[ActionRow];
    fn buddy_equips(&self) -> &[BuddyEquipRow];
    fn orchestrions(&self) -> &[OrchestrionRow];
    fn ornaments(&self) -> &[OrnamentRow];
    fn glasses(&self) -> &[GlassesRow];
    fn glasses_styles(&self) -> &[GlassesStyleRow];
    fn class_jobs(&self) -> &[ClassJobRow];
    fn stains(&self) -> &[StainRow];
}
