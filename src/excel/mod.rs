//! Workbook import
//!
//! Turns a price-list workbook into one column-major grid per category:
//! `grid[category][column_index][row_index]`.

mod grid;
mod importer;

pub use grid::{CatalogGrids, SheetGrid};
pub use importer::{cell_from_data, grid_from_range, import_bytes, WorkbookImporter};
