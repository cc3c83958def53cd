use collectibles_common::{RowId, SheetRow, StainRow};

/// A dye with plain-text name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StainAdapter {
    pub row_id: RowId,
    pub name: String,
    pub color: u32,
    pub shade: u8,
}

impl SheetRow for StainAdapter {
    const SHEET: &'static str = StainRow::SHEET;

    fn row_id(&self) -> RowId {
        self.row_id
    }
}

impl From<&StainRow> for StainAdapter {
    fn from(row: &StainRow) -> Self {
        Self {
            row_id: row.row_id,
            name: row.name.extract_text(),
            color: row.color,
            shade: row.shade,
        }
    }
}

impl StainAdapter {
    /// `(r, g, b)` of the dye colour.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            ((self.color >> 16) & 0xff) as u8,
            ((self.color >> 8) & 0xff) as u8,
            (self.color & 0xff) as u8,
        )
    }
}
