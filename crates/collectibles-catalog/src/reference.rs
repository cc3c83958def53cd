//! Reference lists that ride along with the collections: the class jobs and
//! dyes the catalog UI filters by.

use collectibles_common::ClassJobRow;

use crate::adapters::StainAdapter;
use crate::fanout::filter_map_rows;
use crate::source::RowSource;

/// Jobs and crafting/gathering classes, without base classes and junk rows.
pub fn supported_class_jobs<S: RowSource + ?Sized>(source: &S, parallel: bool) -> Vec<ClassJobRow> {
    filter_map_rows(source.class_jobs(), parallel, |row| {
        (row.class_job_category > 0 && (row.doh_dol_job_index >= 0 || row.job_index > 0))
            .then(|| row.clone())
    })
}

/// Dyes with a name; unnamed rows are unused slots.
pub fn supported_stains<S: RowSource + ?Sized>(source: &S) -> Vec<StainAdapter> {
    source
        .stains()
        .iter()
        .map(StainAdapter::from)
        .filter(|stain| !stain.name.is_empty())
        .collect()
}
