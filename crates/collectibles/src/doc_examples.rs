use std::sync::Arc;

use crate::{CatalogConfig, CatalogResult, Category, CollectionRegistry, RowSource};

/// Populate a sequential registry over `source` and return each category's
/// display name with its size, in display order.
///
/// This helper is intended for documentation examples to avoid repetitive setup.
///
/// # Example
///
/// ```rust
/// # use collectibles::doc_examples::category_sizes;
/// use collectibles::common::{CharaMakeStruct, HairMakeTypeRow, LobbyRow, MountRow};
/// use collectibles::InMemorySource;
///
/// let source = InMemorySource::new()
///     .with_mounts([MountRow { row_id: 1, singular: "Chocobo".into(), order: 5, icon: 4001 }])
///     .with_hair_make_types([HairMakeTypeRow {
///         row_id: 0,
///         race: 1,
///         tribe: 1,
///         gender: 0,
///         chara_make_struct: vec![CharaMakeStruct { menu: 1, sub_menu_param: vec![] }],
///     }])
///     .with_lobby([LobbyRow { row_id: 1, text: "Hairstyle".into() }]);
///
/// let sizes = category_sizes(source)?;
/// assert_eq!(sizes.len(), 13);
/// assert_eq!(sizes[1], ("Mounts", 1));
/// # Ok::<(), collectibles::CatalogError>(())
/// ```
pub fn category_sizes<S: RowSource + 'static>(
    source: S,
) -> CatalogResult<Vec<(&'static str, usize)>> {
    let source: Arc<dyn RowSource> = Arc::new(source);
    let registry = CollectionRegistry::new(source, CatalogConfig::sequential());
    let report = registry.initialize()?;
    Ok(report
        .counts
        .into_iter()
        .map(|(category, count): (Category, usize)| (category.display_name(), count))
        .collect())
}
