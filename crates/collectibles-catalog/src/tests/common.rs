//! Common test fixtures
use std::sync::Arc;

use collectibles_common::*;

use crate::player::PlayerCharacter;
use crate::registry::CollectionRegistry;
use crate::test_source::InMemorySource;
use crate::{CatalogConfig, Collection, RowSource};

pub struct TestPlayer(pub Vec<u8>);

impl TestPlayer {
    /// Customize vector with race at 0, gender at 1 and tribe at 4.
    pub fn new(race: u8, tribe: u8, gender: u8) -> Self {
        TestPlayer(vec![race, gender, 1, 50, tribe, 1, 7, 0])
    }
}

impl PlayerCharacter for TestPlayer {
    fn customize(&self) -> &[u8] {
        &self.0
    }
}

pub fn item(row_id: RowId, name: &str, level: u8, slot_cat: RowId) -> ItemRow {
    ItemRow {
        row_id,
        name: name.into(),
        icon: (row_id % 60_000) as u16,
        level_equip: level,
        equip_slot_category: slot_cat,
        ..Default::default()
    }
}

fn mount(row_id: RowId, singular: &str, order: i16) -> MountRow {
    MountRow {
        row_id,
        singular: singular.into(),
        order,
        icon: 4000 + row_id as u16,
    }
}

fn companion(row_id: RowId, singular: &str) -> CompanionRow {
    CompanionRow {
        row_id,
        singular: singular.into(),
        icon: 4400 + row_id as u16,
    }
}

fn emote(row_id: RowId, name: &str, icon: u16, unlock_link: u32) -> EmoteRow {
    EmoteRow {
        row_id,
        name: name.into(),
        icon,
        unlock_link,
    }
}

fn customize(row_id: RowId, is_purchasable: bool, hint_item: RowId) -> CharaMakeCustomizeRow {
    CharaMakeCustomizeRow {
        row_id,
        is_purchasable,
        icon: 130_000 + row_id,
        feature_id: row_id as u8,
        hint_item,
    }
}

fn menu(lobby: RowId, params: &[u32]) -> CharaMakeStruct {
    CharaMakeStruct {
        menu: lobby,
        sub_menu_param: params.to_vec(),
    }
}

fn glasses(row_id: RowId, name: &str, icon: u32, style: RowId) -> GlassesRow {
    GlassesRow {
        row_id,
        name: name.into(),
        icon,
        style,
    }
}

/// Lobby row for the face menu.
pub const FACE_MENU: RowId = 10;
/// Lobby row for the hairstyle menu.
pub const HAIR_MENU: RowId = 11;

/// A small dataset touching every sheet, with rows on both sides of every
/// filter.
pub fn sample_source() -> InMemorySource {
    InMemorySource::new()
        .with_items([
            item(1000, "Dated Bronze Sword", 1, 1),
            item(2001, "Bronze Gladius", 1, 1),
            item(2002, "Hempen Camise", 1, 4),
            item(2003, "Leather Belt", 1, 6),
            ItemRow {
                item_action: 10,
                ..item(2004, "Potion", 0, 0)
            },
            item(2005, "Copper Ring", 5, 12),
            ItemRow {
                item_action: 20,
                ..item(3000, "Framer's Kit: Mounts", 0, 0)
            },
            ItemRow {
                item_ui_category: 112,
                ..item(3001, "Grand Champion's Attire", 1, 4)
            },
            ItemRow {
                item_ui_category: 112,
                ..item(3002, "Outfit Voucher", 0, 0)
            },
            item(3100, "Modern Aesthetics - Curled Bob", 0, 0),
        ])
        .with_equip_slot_categories([
            EquipSlotCategoryRow {
                row_id: 1,
                main_hand: 1,
                ..Default::default()
            },
            EquipSlotCategoryRow {
                row_id: 4,
                body: 1,
                ..Default::default()
            },
            EquipSlotCategoryRow {
                row_id: 6,
                waist: 1,
                ..Default::default()
            },
            EquipSlotCategoryRow {
                row_id: 12,
                finger_l: 1,
                finger_r: 1,
                ..Default::default()
            },
        ])
        .with_item_actions([
            ItemActionRow {
                row_id: 0,
                action_type: 0,
            },
            ItemActionRow {
                row_id: 10,
                action_type: 847,
            },
            ItemActionRow {
                row_id: 20,
                action_type: 29459,
            },
        ])
        .with_mounts([
            mount(1, "Chocobo", 5),
            mount(2, "", 1),
            mount(3, "Fat Chocobo", -1),
            mount(4, "Magitek Armor", 6),
        ])
        .with_companions([
            companion(1, "Cait Sith Doll"),
            companion(2, ""),
            companion(68, "Wind-up Leader"),
            companion(100, "Wind-up Moogle"),
        ])
        .with_emotes([
            emote(1, "Bow", 64_001, 0),
            emote(2, "Dance", 64_003, 1001),
            emote(3, "", 64_004, 1002),
            emote(4, "Victory", 0, 1003),
            emote(56, "Test Emote", 1, 1),
            emote(200, "Lali-ho", 64_200, 2003),
        ])
        .with_chara_make_customize([
            customize(201, true, 3100),
            customize(202, false, 0),
            customize(203, true, 0),
            customize(204, true, 0),
            customize(205, true, 0),
        ])
        .with_hair_make_types([
            HairMakeTypeRow {
                row_id: 0,
                race: 1,
                tribe: 1,
                gender: 0,
                chara_make_struct: vec![
                    menu(FACE_MENU, &[1, 2]),
                    menu(HAIR_MENU, &[201, 202, 0, 205, 0]),
                ],
            },
            HairMakeTypeRow {
                row_id: 1,
                race: 4,
                tribe: 8,
                gender: 1,
                chara_make_struct: vec![menu(HAIR_MENU, &[203, 204, 0])],
            },
            HairMakeTypeRow {
                row_id: 2,
                race: 5,
                tribe: 9,
                gender: 0,
                chara_make_struct: vec![menu(FACE_MENU, &[3])],
            },
        ])
        .with_lobby([
            LobbyRow {
                row_id: FACE_MENU,
                text: "Face".into(),
            },
            LobbyRow {
                row_id: HAIR_MENU,
                text: SeString::from_payloads(vec![
                    Payload::Macro {
                        code: 0x48,
                        params: vec![500],
                    },
                    Payload::Text("Hairstyle".into()),
                ]),
            },
        ])
        .with_triple_triad_cards([
            TripleTriadCardRow {
                row_id: 1,
                name: "Dodo".into(),
                description: "A flightless bird.".into(),
                icon: 82_101,
            },
            TripleTriadCardRow {
                row_id: 2,
                name: "0".into(),
                ..Default::default()
            },
            TripleTriadCardRow {
                row_id: 3,
                ..Default::default()
            },
            TripleTriadCardRow {
                row_id: 4,
                name: "Tonberry".into(),
                icon: 82_104,
                ..Default::default()
            },
        ])
        .with_actions([
            ActionRow {
                row_id: 7,
                name: "Attack".into(),
                icon: 101,
                class_job: 0,
            },
            ActionRow {
                row_id: 11383,
                name: "Snort".into(),
                icon: 3201,
                class_job: 36,
            },
            ActionRow {
                row_id: 11384,
                name: "".into(),
                icon: 3202,
                class_job: 36,
            },
            ActionRow {
                row_id: 11385,
                name: "Water Cannon".into(),
                icon: 3203,
                class_job: 36,
            },
        ])
        .with_buddy_equips([
            BuddyEquipRow {
                row_id: 1,
                name: "Chocobo Tail".into(),
                icon_head: 1,
                ..Default::default()
            },
            BuddyEquipRow {
                row_id: 20,
                name: "Gridanian Barding".into(),
                icon_head: 20,
                icon_body: 21,
                icon_legs: 22,
            },
            BuddyEquipRow {
                row_id: 21,
                ..Default::default()
            },
        ])
        .with_orchestrions([
            OrchestrionRow {
                row_id: 1,
                name: "Answers".into(),
                icon: 25_945,
                ..Default::default()
            },
            OrchestrionRow {
                row_id: 2,
                name: "0".into(),
                ..Default::default()
            },
            OrchestrionRow {
                row_id: 3,
                ..Default::default()
            },
        ])
        .with_ornaments([
            OrnamentRow {
                row_id: 1,
                singular: "Parasol".into(),
                icon: 1,
            },
            OrnamentRow {
                row_id: 2,
                singular: "Wings".into(),
                icon: 0,
            },
            OrnamentRow {
                row_id: 22,
                singular: "Test Ornament".into(),
                icon: 5,
            },
            OrnamentRow {
                row_id: 23,
                singular: "Cape".into(),
                icon: 8,
            },
        ])
        .with_glasses([
            glasses(1, "Plain Glasses", 10, 1),
            glasses(2, "Plain Glasses (Black)", 11, 1),
            glasses(3, "Sunglasses", 0, 2),
            glasses(4, "Orphan Frames", 12, 99),
        ])
        .with_glasses_styles([
            GlassesStyleRow {
                row_id: 1,
                name: "Plain Glasses".into(),
            },
            GlassesStyleRow {
                row_id: 2,
                name: "Sunglasses".into(),
            },
        ])
        .with_class_jobs([
            ClassJobRow {
                row_id: 0,
                name: "adventurer".into(),
                doh_dol_job_index: -1,
                ..Default::default()
            },
            ClassJobRow {
                row_id: 1,
                name: "gladiator".into(),
                class_job_category: 2,
                job_index: 0,
                doh_dol_job_index: -1,
                ..Default::default()
            },
            ClassJobRow {
                row_id: 8,
                name: "carpenter".into(),
                class_job_category: 9,
                job_index: 0,
                doh_dol_job_index: 0,
                ..Default::default()
            },
            ClassJobRow {
                row_id: 19,
                name: "paladin".into(),
                class_job_category: 20,
                job_index: 1,
                doh_dol_job_index: -1,
                ..Default::default()
            },
        ])
        .with_stains([
            StainRow::default(),
            StainRow {
                row_id: 1,
                name: "Snow White".into(),
                color: 0xe4dfd0,
                shade: 2,
            },
            StainRow {
                row_id: 2,
                name: "Soot Black".into(),
                color: 0x2b2923,
                shade: 2,
            },
        ])
}

pub fn registry_with(source: InMemorySource, config: CatalogConfig) -> CollectionRegistry {
    let source: Arc<dyn RowSource> = Arc::new(source);
    CollectionRegistry::new(source, config)
}

pub fn ready_registry(config: CatalogConfig) -> CollectionRegistry {
    let registry = registry_with(sample_source(), config);
    registry.initialize().unwrap();
    registry
}

pub fn ids(collection: &Collection) -> Vec<RowId> {
    collection.iter().map(|c| c.row_id()).collect()
}
