//! Hairstyles a given character can wear.
//!
//! The set is not a sheet filter of its own: it comes from the
//! character-creation parameter row for the player's (race, tribe, gender),
//! specifically the customization menu labelled [`HAIRSTYLE_MENU_LABEL`].

use collectibles_common::{
    CatalogError, CatalogResult, HairMakeTypeRow, LobbyRow, RowId, SheetIndex, SheetRow,
};
use rustc_hash::FxHashSet;

use crate::adapters::menu_label;
use crate::player::PlayerAttributes;
use crate::source::RowSource;

/// Menu label text, matched exactly.
pub const HAIRSTYLE_MENU_LABEL: &str = "Hairstyle";

/// `CharaMakeCustomize` row ids available to one character identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HairstyleSet {
    attributes: PlayerAttributes,
    ids: FxHashSet<RowId>,
}

impl HairstyleSet {
    pub fn attributes(&self) -> PlayerAttributes {
        self.attributes
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &FxHashSet<RowId> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Resolve the hairstyle ids for `attributes`.
///
/// Fails with [`CatalogError::SourceStructure`] when no parameter row matches
/// the attributes or the row has no hairstyle menu. An empty result would hide
/// broken reference data as "no hairstyles", so it is never returned for
/// those cases.
pub fn available_hairstyles<S: RowSource + ?Sized>(
    source: &S,
    attributes: PlayerAttributes,
) -> CatalogResult<HairstyleSet> {
    let params = source
        .hair_make_types()
        .iter()
        .find(|row| matches_attributes(row, attributes))
        .ok_or_else(|| {
            CatalogError::source_structure(
                HairMakeTypeRow::SHEET,
                format!(
                    "no parameter row for race {}, tribe {}, gender {}",
                    attributes.race, attributes.tribe, attributes.gender
                ),
            )
        })?;

    let lobby = SheetIndex::new(source.lobby());
    let menu = params
        .chara_make_struct
        .iter()
        .find(|entry| menu_label(entry, &lobby) == HAIRSTYLE_MENU_LABEL)
        .ok_or_else(|| {
            CatalogError::source_structure(
                LobbyRow::SHEET,
                format!(
                    "parameter row {} has no '{HAIRSTYLE_MENU_LABEL}' menu",
                    params.row_id
                ),
            )
        })?;

    let ids = menu
        .sub_menu_param
        .iter()
        .copied()
        .filter(|&id| id != 0)
        .collect();
    Ok(HairstyleSet { attributes, ids })
}

fn matches_attributes(row: &HairMakeTypeRow, attributes: PlayerAttributes) -> bool {
    row.race == RowId::from(attributes.race)
        && row.tribe == RowId::from(attributes.tribe)
        && i16::from(row.gender) == i16::from(attributes.gender)
}
