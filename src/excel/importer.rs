//! Workbook importer - spreadsheet file → per-category cell grids

use crate::error::{PriceListError, PriceListResult};
use crate::excel::grid::{CatalogGrids, SheetGrid};
use crate::types::{CellValue, Category};
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the first five sheets of a price-list workbook (.xlsx, .xls, .ods)
pub struct WorkbookImporter {
    path: PathBuf,
}

impl WorkbookImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Open the workbook and extract all category grids
    pub fn import(&self) -> PriceListResult<CatalogGrids> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            PriceListError::Workbook(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))
        })?;

        read_grids(&mut workbook)
    }
}

/// Extract grids from an in-memory workbook (e.g. an upload)
pub fn import_bytes(bytes: Vec<u8>) -> PriceListResult<CatalogGrids> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| PriceListError::Workbook(format!("Failed to open workbook: {}", e)))?;

    read_grids(&mut workbook)
}

fn read_grids<RS: Read + Seek>(workbook: &mut Sheets<RS>) -> PriceListResult<CatalogGrids> {
    let found = workbook.sheet_names().len();
    let mut grids = CatalogGrids::default();

    for category in Category::ALL {
        let range = workbook
            .worksheet_range_at(category.sheet_index())
            .ok_or(PriceListError::MissingSheet { category, found })?
            .map_err(|e| {
                PriceListError::Workbook(format!(
                    "Failed to read sheet \"{}\": {}",
                    category.display_name(),
                    e
                ))
            })?;

        let grid = grid_from_range(&range);
        debug!(
            "Sheet {} ({}): {} columns, {} rows",
            category.sheet_index(),
            category,
            grid.column_count(),
            grid.row_count()
        );
        *grids.grid_mut(category) = grid;
    }

    Ok(grids)
}

/// Walk columns left to right and rows top to bottom from A1.
///
/// The range may start past A1, so cells are read by absolute position.
pub fn grid_from_range(range: &Range<Data>) -> SheetGrid {
    let mut grid = SheetGrid::default();
    let Some((last_row, last_col)) = range.end() else {
        return grid;
    };

    for col in 0..=last_col {
        let column = (0..=last_row)
            .map(|row| {
                range
                    .get_value((row, col))
                    .map(cell_from_data)
                    .unwrap_or_default()
            })
            .collect();
        grid.push_column(column);
    }

    grid
}

/// Convert a calamine cell to a [`CellValue`]
pub fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        // Excel stores dates as days since 1899-12-30
        Data::DateTime(dt) => CellValue::number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}
