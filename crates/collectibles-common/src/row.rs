//! Row identity for sheet-backed data.

use rustc_hash::FxHashMap;

/// Stable numeric row id within a single sheet.
pub type RowId = u32;

/// A row of a read-only game-data sheet.
///
/// Ids are unique within one sheet only; two sheets may both carry a row 7.
pub trait SheetRow: Send + Sync {
    /// Sheet name, used in diagnostics.
    const SHEET: &'static str;

    fn row_id(&self) -> RowId;
}

/// Id-keyed view over a sheet slice, for resolving links between sheets.
#[derive(Debug)]
pub struct SheetIndex<'a, R> {
    rows: FxHashMap<RowId, &'a R>,
}

impl<'a, R: SheetRow> SheetIndex<'a, R> {
    pub fn new(rows: &'a [R]) -> Self {
        let mut map = FxHashMap::with_capacity_and_hasher(rows.len(), Default::default());
        for row in rows {
            // first row wins, matching a forward scan of the sheet
            map.entry(row.row_id()).or_insert(row);
        }
        Self { rows: map }
    }

    pub fn get(&self, id: RowId) -> Option<&'a R> {
        self.rows.get(&id).copied()
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
