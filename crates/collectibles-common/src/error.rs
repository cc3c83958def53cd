//! Catalog error taxonomy.
//!
//! The category set is closed and population is all-or-nothing, so the only
//! failures are programming errors (asking for something that was never
//! populated) and data-integrity problems in the source sheets.

use thiserror::Error;

use crate::Category;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A category was requested before the registry populated it.
    #[error("collection '{category}' has not been populated")]
    Lookup { category: Category },

    /// Reference data other than a category was requested before population.
    #[error("catalog is not populated")]
    NotReady,

    /// The source dataset is missing rows the catalog depends on.
    #[error("sheet '{sheet}' is missing expected data: {detail}")]
    SourceStructure { sheet: &'static str, detail: String },

    /// A player customization vector is too short to read an attribute from.
    #[error("customize data has {len} entries, index {index} is out of range")]
    CustomizeData { len: usize, index: usize },

    /// The dedicated worker pool could not be created.
    #[error("worker pool: {0}")]
    ThreadPool(String),
}

impl CatalogError {
    pub fn source_structure(sheet: &'static str, detail: impl Into<String>) -> Self {
        Self::SourceStructure {
            sheet,
            detail: detail.into(),
        }
    }

    /// True for failures caused by the dataset rather than by the caller.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::SourceStructure { .. })
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        let e = CatalogError::Lookup {
            category: Category::Hairstyle,
        };
        assert_eq!(e.to_string(), "collection 'Hairstyles' has not been populated");

        let e = CatalogError::source_structure("HairMakeType", "no row for race 9");
        assert_eq!(
            e.to_string(),
            "sheet 'HairMakeType' is missing expected data: no row for race 9"
        );
        assert!(e.is_data_error());
    }
}
