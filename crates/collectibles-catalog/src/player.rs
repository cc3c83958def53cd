//! Player identity as far as the catalog cares: which character-creation
//! parameters apply.

use collectibles_common::{CatalogError, CatalogResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Positions in a character's customization vector.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CustomizeIndex {
    Race = 0,
    Gender = 1,
    ModelType = 2,
    Height = 3,
    Tribe = 4,
    FaceType = 5,
    HairStyle = 6,
}

/// A logged-in character, provided by the host.
pub trait PlayerCharacter {
    /// Raw customization bytes, indexed by [`CustomizeIndex`].
    fn customize(&self) -> &[u8];
}

/// The three attributes that pick a character-creation parameter row.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PlayerAttributes {
    pub race: u8,
    pub tribe: u8,
    pub gender: u8,
}

impl PlayerAttributes {
    /// Midlander Hyur, male. Used before any character has logged in.
    pub const REFERENCE: Self = Self {
        race: 1,
        tribe: 1,
        gender: 0,
    };

    pub const fn new(race: u8, tribe: u8, gender: u8) -> Self {
        Self {
            race,
            tribe,
            gender,
        }
    }

    pub fn from_customize(customize: &[u8]) -> CatalogResult<Self> {
        let read = |index: CustomizeIndex| {
            customize
                .get(index as usize)
                .copied()
                .ok_or(CatalogError::CustomizeData {
                    len: customize.len(),
                    index: index as usize,
                })
        };
        Ok(Self {
            race: read(CustomizeIndex::Race)?,
            tribe: read(CustomizeIndex::Tribe)?,
            gender: read(CustomizeIndex::Gender)?,
        })
    }

    pub fn from_player<P: PlayerCharacter + ?Sized>(player: &P) -> CatalogResult<Self> {
        Self::from_customize(player.customize())
    }

    /// Attributes of `player`, or [`PlayerAttributes::REFERENCE`]-style
    /// `fallback` when there is none.
    pub fn resolve<P: PlayerCharacter + ?Sized>(
        player: Option<&P>,
        fallback: Self,
    ) -> CatalogResult<Self> {
        match player {
            Some(p) => Self::from_player(p),
            None => Ok(fallback),
        }
    }
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self::REFERENCE
    }
}
