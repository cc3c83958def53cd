use std::sync::Arc;

use collectibles_catalog::{CatalogConfig, CollectionRegistry, InMemorySource, RowSource};
use collectibles_common::{
    CharaMakeCustomizeRow, CharaMakeStruct, CompanionRow, EmoteRow, EquipSlotCategoryRow,
    HairMakeTypeRow, ItemRow, LobbyRow, MountRow,
};
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// A source shaped like the live sheets: mostly items, a sprinkle of
/// everything else, and one hairstyle parameter row for the default identity.
fn synthetic_source(n: u32) -> Arc<dyn RowSource> {
    let items = (0..n).map(|i| ItemRow {
        row_id: i,
        name: format!("Item {i}").into(),
        icon: (i % 60_000) as u16,
        level_equip: (i % 3) as u8,
        equip_slot_category: i % 4,
        item_ui_category: if i % 50 == 0 { 112 } else { 1 },
        ..Default::default()
    });
    let slots = (0..4).map(|i| EquipSlotCategoryRow {
        row_id: i,
        main_hand: i8::from(i == 1),
        body: i8::from(i == 2),
        waist: i8::from(i == 3),
        ..Default::default()
    });
    let small = n / 20;
    let mounts = (0..small).map(|i| MountRow {
        row_id: i,
        singular: format!("Mount {i}").into(),
        order: if i % 10 == 0 { -1 } else { i as i16 },
        icon: i as u16,
    });
    let companions = (0..small).map(|i| CompanionRow {
        row_id: i,
        singular: format!("Minion {i}").into(),
        icon: i as u16,
    });
    let emotes = (0..small).map(|i| EmoteRow {
        row_id: i,
        name: format!("Emote {i}").into(),
        icon: i as u16,
        unlock_link: i % 2,
    });
    let customize = (0..200).map(|i| CharaMakeCustomizeRow {
        row_id: i,
        is_purchasable: i % 3 != 0,
        icon: i,
        feature_id: i as u8,
        hint_item: i,
    });
    let hair_params: Vec<u32> = (1..120).collect();

    let source = InMemorySource::new()
        .with_items(items)
        .with_equip_slot_categories(slots)
        .with_mounts(mounts)
        .with_companions(companions)
        .with_emotes(emotes)
        .with_chara_make_customize(customize)
        .with_hair_make_types([HairMakeTypeRow {
            row_id: 0,
            race: 1,
            tribe: 1,
            gender: 0,
            chara_make_struct: vec![CharaMakeStruct {
                menu: 1,
                sub_menu_param: hair_params,
            }],
        }])
        .with_lobby([LobbyRow {
            row_id: 1,
            text: "Hairstyle".into(),
        }]);
    Arc::new(source)
}

fn bench_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Populate");
    group.sample_size(20);

    for n in [10_000u32, 50_000] {
        let source = synthetic_source(n);

        for (label, config) in [
            ("Sequential", CatalogConfig::sequential()),
            ("Parallel", CatalogConfig::default()),
        ] {
            // cold: fresh registry, every collectible constructed
            group.bench_with_input(BenchmarkId::new(format!("{label}/Cold"), n), &n, |b, _| {
                b.iter_batched(
                    || CollectionRegistry::new(Arc::clone(&source), config.clone()),
                    |registry| black_box(registry.initialize().map(|r| r.total)),
                    BatchSize::LargeInput,
                )
            });

            // warm: re-initialize against a filled factory cache
            let registry = CollectionRegistry::new(Arc::clone(&source), config.clone());
            let _ = registry.initialize();
            group.bench_with_input(BenchmarkId::new(format!("{label}/Warm"), n), &n, |b, _| {
                b.iter(|| black_box(registry.initialize().map(|r| r.total)))
            });
        }
    }

    group.finish();
}

fn bench_rebuild_hairstyles(c: &mut Criterion) {
    let source = synthetic_source(10_000);
    let registry = CollectionRegistry::new(source, CatalogConfig::default());
    let _ = registry.initialize();

    c.bench_function("RebuildHairstyles", |b| {
        b.iter(|| black_box(registry.rebuild_hairstyles(None)))
    });
}

criterion_group!(benches, bench_populate, bench_rebuild_hairstyles);
criterion_main!(benches);
