//! Order-preserving fan-out over sheet rows.

use rayon::prelude::*;

/// Filter-map `rows`, optionally across the current rayon pool.
///
/// The output is in `rows` order either way; rayon's `collect` into a `Vec`
/// keeps source order even after `filter_map`.
pub(crate) fn filter_map_rows<R, T, F>(rows: &[R], parallel: bool, f: F) -> Vec<T>
where
    R: Sync,
    T: Send,
    F: Fn(&R) -> Option<T> + Sync + Send,
{
    if parallel {
        rows.par_iter().filter_map(|row| f(row)).collect()
    } else {
        rows.iter().filter_map(|row| f(row)).collect()
    }
}
