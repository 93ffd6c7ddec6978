//! Fish sheet conversion
//!
//! The fish sheet has three header rows and a wider layout: column 0 carries
//! section titles and order totals, the article lives in column 1.

use crate::core::converter::{classify_row, RowKind, SheetConverter, TitleTracker};
use crate::excel::SheetGrid;
use crate::types::{CategoryBucket, CellValue, Category, ProductRecord};
use indexmap::IndexMap;
use tracing::debug;

/// Marker of the order-total line at the bottom of the fish sheet
pub const TOTAL_MARKER: &str = "Сумма";

/// First data row of the fish sheet
pub const FISH_FIRST_ROW: usize = 3;

impl SheetConverter<'_> {
    /// Convert the fish sheet; titles here are free-form and never validated
    pub fn convert_to_fish(&self, grid: &SheetGrid) -> CategoryBucket {
        let mut bucket = CategoryBucket::new();
        let mut titles = TitleTracker::new();

        for row in FISH_FIRST_ROW..grid.row_count() {
            let first_column = grid.cell(0, row);
            let article = grid.cell(1, row).trimmed().to_text();

            let mut fields = IndexMap::with_capacity(5);
            fields.insert("article".to_string(), grid.cell(1, row).trimmed());
            fields.insert("name".to_string(), grid.cell(2, row).trimmed());
            fields.insert("size".to_string(), grid.cell(3, row).clone());
            fields.insert("price".to_string(), grid.cell(4, row).clone());
            fields.insert(
                "comment".to_string(),
                CellValue::Text(grid.cell(5, row).to_text().trim().to_string()),
            );

            let kind = classify_row(fields.values());

            if kind == RowKind::Blank && first_column.is_truthy() {
                if first_column.is_structured() {
                    continue;
                }
                let title = first_column.to_text();
                if title.contains(TOTAL_MARKER) {
                    debug!("Skipping total line: {}", title);
                } else {
                    titles.set(title);
                }
                continue;
            }

            match kind {
                RowKind::Blank | RowKind::Ignored => continue,
                RowKind::Title(title) => titles.set(title),
                RowKind::Product => {
                    let image = self.images().lookup(Category::Fish, &article);
                    bucket.push(titles.key(), ProductRecord::new(fields, image));
                }
            }
        }

        debug!(
            "Converted fish: {} titles, {} products",
            bucket.len(),
            bucket.product_count()
        );
        bucket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::ImageLibrary;

    fn fish_grid(rows: Vec<Vec<CellValue>>) -> SheetGrid {
        let mut all = vec![
            vec!["Прайс-лист".into()],
            vec![],
            vec!["".into(), "Артикул".into(), "Название".into(), "Размер".into(), "Цена".into()],
        ];
        all.extend(rows);
        SheetGrid::from_rows(all)
    }

    #[test]
    fn test_fish_header_rows_are_skipped() {
        let grid = fish_grid(vec![]);
        let images = ImageLibrary::empty();
        assert!(SheetConverter::new(&images).convert_to_fish(&grid).is_empty());
    }

    #[test]
    fn test_fish_title_from_first_column() {
        let grid = fish_grid(vec![
            vec!["Цихлиды".into()],
            vec![
                "".into(),
                " C-01 ".into(),
                " Скалярия ".into(),
                "M".into(),
                350_i64.into(),
                "  новинка ".into(),
            ],
        ]);
        let images = ImageLibrary::empty();
        let bucket = SheetConverter::new(&images).convert_to_fish(&grid);

        let records = bucket.get("Цихлиды").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("article"), Some(&CellValue::text("C-01")));
        assert_eq!(records[0].get("name"), Some(&CellValue::text("Скалярия")));
        assert_eq!(records[0].get("size"), Some(&CellValue::text("M")));
        assert_eq!(records[0].get("price"), Some(&CellValue::Int(350)));
        assert_eq!(records[0].get("comment"), Some(&CellValue::text("новинка")));
        assert_eq!(
            records[0].field_names().collect::<Vec<_>>(),
            vec!["article", "name", "size", "price", "comment"]
        );
    }

    #[test]
    fn test_fish_total_line_keeps_title() {
        let grid = fish_grid(vec![
            vec!["Харациновые".into()],
            vec!["".into(), "H-1".into(), "Неон".into(), "S".into(), 60_i64.into()],
            vec!["Итого Сумма: 500".into()],
            vec!["".into(), "H-2".into(), "Тернеция".into(), "S".into(), 70_i64.into()],
        ]);
        let images = ImageLibrary::empty();
        let bucket = SheetConverter::new(&images).convert_to_fish(&grid);

        assert_eq!(bucket.titles().collect::<Vec<_>>(), vec!["Харациновые"]);
        assert_eq!(bucket.get("Харациновые").unwrap().len(), 2);
    }

    #[test]
    fn test_fish_structured_first_column_is_ignored() {
        let grid = fish_grid(vec![
            vec!["Сомы".into()],
            vec![CellValue::RichText(vec!["Жирный".into()])],
            vec!["".into(), "S-1".into(), "Анцитрус".into()],
        ]);
        let images = ImageLibrary::empty();
        let bucket = SheetConverter::new(&images).convert_to_fish(&grid);
        assert_eq!(bucket.get("Сомы").unwrap().len(), 1);
    }

    #[test]
    fn test_fish_numeric_first_column_title_is_text() {
        let grid = fish_grid(vec![
            vec![2024_i64.into()],
            vec!["".into(), "X-1".into(), "Гурами".into()],
        ]);
        let images = ImageLibrary::empty();
        let bucket = SheetConverter::new(&images).convert_to_fish(&grid);
        assert!(bucket.get("2024").is_some());
    }

    #[test]
    fn test_fish_products_before_title_use_empty_key() {
        let grid = fish_grid(vec![vec![
            "".into(),
            "A-1".into(),
            "Гуппи".into(),
            "".into(),
            40_i64.into(),
        ]]);
        let images = ImageLibrary::empty();
        let bucket = SheetConverter::new(&images).convert_to_fish(&grid);
        assert_eq!(bucket.get("").map(<[_]>::len), Some(1));
    }
}
