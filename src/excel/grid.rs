//! Column-major cell grids extracted from workbook sheets

use crate::types::{CellValue, Category};

static EMPTY: CellValue = CellValue::Empty;

/// A sheet as `columns[column_index][row_index]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    columns: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    pub fn new(columns: Vec<Vec<CellValue>>) -> Self {
        Self { columns }
    }

    /// Build from row-major data; short rows are padded with empty cells
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut columns = vec![Vec::with_capacity(rows.len()); width];

        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                column.push(cells.next().unwrap_or_default());
            }
        }

        Self { columns }
    }

    pub fn push_column(&mut self, column: Vec<CellValue>) {
        self.columns.push(column);
    }

    /// Cell at a position; anything outside the grid reads as empty
    pub fn cell(&self, column: usize, row: usize) -> &CellValue {
        self.columns
            .get(column)
            .and_then(|cells| cells.get(row))
            .unwrap_or(&EMPTY)
    }

    /// Rows as seen by the first column
    pub fn row_count(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}

/// The five sheets of a price-list workbook
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogGrids {
    pub fish: SheetGrid,
    pub equipment: SheetGrid,
    pub feed: SheetGrid,
    pub chemistry: SheetGrid,
    pub aquariums: SheetGrid,
}

impl CatalogGrids {
    pub fn grid(&self, category: Category) -> &SheetGrid {
        match category {
            Category::Fish => &self.fish,
            Category::Equipment => &self.equipment,
            Category::Feed => &self.feed,
            Category::Chemistry => &self.chemistry,
            Category::Aquariums => &self.aquariums,
        }
    }

    pub fn grid_mut(&mut self, category: Category) -> &mut SheetGrid {
        match category {
            Category::Fish => &mut self.fish,
            Category::Equipment => &mut self.equipment,
            Category::Feed => &mut self.feed,
            Category::Chemistry => &mut self.chemistry,
            Category::Aquariums => &mut self.aquariums,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_transposes_and_pads() {
        let grid = SheetGrid::from_rows(vec![
            vec!["a".into(), "b".into()],
            vec!["c".into()],
        ]);

        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.cell(0, 1), &CellValue::text("c"));
        assert_eq!(grid.cell(1, 0), &CellValue::text("b"));
        assert_eq!(grid.cell(1, 1), &CellValue::Empty);
    }

    #[test]
    fn test_cell_out_of_bounds_is_empty() {
        let grid = SheetGrid::from_rows(vec![vec!["x".into()]]);
        assert_eq!(grid.cell(5, 0), &CellValue::Empty);
        assert_eq!(grid.cell(0, 9), &CellValue::Empty);
    }

    #[test]
    fn test_empty_grid() {
        let grid = SheetGrid::default();
        assert!(grid.is_empty());
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn test_catalog_grids_by_category() {
        let mut grids = CatalogGrids::default();
        grids
            .grid_mut(Category::Chemistry)
            .push_column(vec![CellValue::text("~Кондиционеры")]);

        assert_eq!(grids.grid(Category::Chemistry).row_count(), 1);
        assert!(grids.grid(Category::Fish).is_empty());
    }
}
