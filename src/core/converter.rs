//! Row-by-row conversion of a sheet grid into a [`CategoryBucket`]
//!
//! Column 0 holds the article; the following columns hold the named
//! attributes. Row 0 is the header. A row with a single meaningful value is a
//! title row and starts a new group; blank rows are ignored.

use crate::core::validator::validate_title;
use crate::error::{PriceListError, PriceListResult};
use crate::excel::SheetGrid;
use crate::images::ImageLibrary;
use crate::types::{CategoryBucket, CellValue, Category, ProductRecord};
use indexmap::IndexMap;
use tracing::debug;

/// Feed sheet attribute columns
pub const FEED_COLUMNS: [&str; 4] = ["name", "description", "weight", "price"];

/// How strictly the article column is typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticlePolicy {
    /// Any cell is coerced to text
    Permissive,
    /// Rich text and fractional numbers abort the conversion
    TextOnly,
}

/// The title the following products are grouped under
#[derive(Debug, Default)]
pub struct TitleTracker {
    current: Option<String>,
}

impl TitleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, title: String) {
        debug!("Title: {}", title);
        self.current = Some(title);
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Bucket key for the next product; empty until a title row is seen
    pub fn key(&self) -> &str {
        self.current.as_deref().unwrap_or("")
    }
}

/// What a row turned out to be
#[derive(Debug, PartialEq)]
pub(crate) enum RowKind {
    Blank,
    Title(String),
    /// A lone structured value: neither product nor title
    Ignored,
    Product,
}

/// Classify a row from its already coerced values
pub(crate) fn classify_row<'a>(values: impl IntoIterator<Item = &'a CellValue>) -> RowKind {
    let mut meaningful = values.into_iter().filter(|v| v.is_meaningful());

    match (meaningful.next(), meaningful.next()) {
        (None, _) => RowKind::Blank,
        (Some(value), None) if value.is_structured() => RowKind::Ignored,
        (Some(value), None) => RowKind::Title(value.to_text()),
        _ => RowKind::Product,
    }
}

/// Converts sheet grids using one run's image tables
pub struct SheetConverter<'a> {
    images: &'a ImageLibrary,
}

impl<'a> SheetConverter<'a> {
    pub fn new(images: &'a ImageLibrary) -> Self {
        Self { images }
    }

    /// Generic conversion: article in column 0, `column_names` in columns 1..
    pub fn convert_to(
        &self,
        grid: &SheetGrid,
        column_names: &[&str],
        category: Category,
    ) -> PriceListResult<CategoryBucket> {
        self.convert_columns(grid, column_names, category, ArticlePolicy::Permissive)
    }

    /// Feed sheet: the generic layout with text-only articles
    pub fn convert_to_feed(&self, grid: &SheetGrid) -> PriceListResult<CategoryBucket> {
        self.convert_columns(grid, &FEED_COLUMNS, Category::Feed, ArticlePolicy::TextOnly)
    }

    fn convert_columns(
        &self,
        grid: &SheetGrid,
        column_names: &[&str],
        category: Category,
        policy: ArticlePolicy,
    ) -> PriceListResult<CategoryBucket> {
        let mut bucket = CategoryBucket::new();
        let mut titles = TitleTracker::new();

        for row in 1..grid.row_count() {
            let raw_article = grid.cell(0, row);

            if policy == ArticlePolicy::TextOnly
                && (raw_article.is_structured() || matches!(raw_article, CellValue::Float(_)))
            {
                return Err(PriceListError::ArticleType { category });
            }

            let article = raw_article.to_article();
            let mut fields = IndexMap::with_capacity(column_names.len() + 1);
            fields.insert("article".to_string(), CellValue::Text(article.clone()));
            for (offset, name) in column_names.iter().enumerate() {
                fields.insert(name.to_string(), grid.cell(offset + 1, row).trimmed());
            }

            match classify_row(fields.values()) {
                RowKind::Blank | RowKind::Ignored => continue,
                RowKind::Title(title) => titles.set(title),
                RowKind::Product => {
                    validate_title(titles.current(), &article)?;
                    let image = self.images.lookup(category, &article);
                    bucket.push(titles.key(), ProductRecord::new(fields, image));
                }
            }
        }

        debug!(
            "Converted {}: {} titles, {} products",
            category,
            bucket.len(),
            bucket.product_count()
        );
        Ok(bucket)
    }

    pub(crate) fn images(&self) -> &ImageLibrary {
        self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::{ImageIndex, PLACEHOLDER_IMAGE};

    const EQUIPMENT: [&str; 4] = ["name", "description", "producer", "price"];

    fn header() -> Vec<CellValue> {
        vec!["Артикул".into(), "Название".into()]
    }

    #[test]
    fn test_classify_row() {
        let blank = [CellValue::Empty, CellValue::text(""), CellValue::text("0.00")];
        assert_eq!(classify_row(&blank), RowKind::Blank);

        let title = [CellValue::text("~Насосы"), CellValue::Empty];
        assert_eq!(classify_row(&title), RowKind::Title("~Насосы".to_string()));

        let rich = [CellValue::RichText(vec!["x".into()]), CellValue::Empty];
        assert_eq!(classify_row(&rich), RowKind::Ignored);

        let product = [CellValue::text("A"), CellValue::Int(5)];
        assert_eq!(classify_row(&product), RowKind::Product);
    }

    #[test]
    fn test_title_tracker_defaults_to_empty_key() {
        let mut titles = TitleTracker::new();
        assert_eq!(titles.current(), None);
        assert_eq!(titles.key(), "");
        titles.set("~Грунты".into());
        assert_eq!(titles.key(), "~Грунты");
    }

    #[test]
    fn test_convert_to_groups_by_title() {
        let grid = SheetGrid::from_rows(vec![
            header(),
            vec!["~Насосы".into()],
            vec![
                " P-1 ".into(),
                "Помпа".into(),
                "1000 л/ч".into(),
                "Eheim".into(),
                1500_i64.into(),
            ],
            vec![],
            vec!["*Внешние".into()],
            vec!["P-2".into(), "Помпа 2".into(), None::<&str>.into(), "".into(), "0.00".into()],
        ]);
        let images = ImageLibrary::empty();
        let bucket = SheetConverter::new(&images)
            .convert_to(&grid, &EQUIPMENT, Category::Equipment)
            .unwrap();

        assert_eq!(bucket.titles().collect::<Vec<_>>(), vec!["~Насосы", "*Внешние"]);
        let pumps = bucket.get("~Насосы").unwrap();
        assert_eq!(pumps.len(), 1);
        assert_eq!(pumps[0].article(), "P-1");
        assert_eq!(pumps[0].get("price"), Some(&CellValue::Int(1500)));
        assert_eq!(pumps[0].image(), PLACEHOLDER_IMAGE);
        assert_eq!(
            pumps[0].field_names().collect::<Vec<_>>(),
            vec!["article", "name", "description", "producer", "price"]
        );

        let external = bucket.get("*Внешние").unwrap();
        assert_eq!(external[0].get("price"), Some(&CellValue::text("0.00")));
    }

    #[test]
    fn test_convert_to_rejects_unmarked_title() {
        let grid = SheetGrid::from_rows(vec![
            header(),
            vec!["Filters".into()],
            vec!["F-1".into(), "Фильтр".into()],
        ]);
        let images = ImageLibrary::empty();
        let result = SheetConverter::new(&images).convert_to(&grid, &EQUIPMENT, Category::Equipment);

        match result {
            Err(PriceListError::CategoryMarker(title)) => assert_eq!(title, "Filters"),
            other => panic!("Expected CategoryMarker, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_to_rejects_product_before_any_title() {
        let grid = SheetGrid::from_rows(vec![header(), vec!["F-1".into(), "Фильтр".into()]]);
        let images = ImageLibrary::empty();
        let result = SheetConverter::new(&images).convert_to(&grid, &EQUIPMENT, Category::Equipment);
        assert!(matches!(result, Err(PriceListError::EmptyCategory)));
    }

    #[test]
    fn test_convert_to_product_without_article_skips_validation() {
        let grid = SheetGrid::from_rows(vec![
            header(),
            vec!["".into(), "Без артикула".into(), "описание".into()],
        ]);
        let images = ImageLibrary::empty();
        let bucket = SheetConverter::new(&images)
            .convert_to(&grid, &EQUIPMENT, Category::Equipment)
            .unwrap();
        assert_eq!(bucket.get("").map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_convert_to_rich_text_article_becomes_plain_text() {
        let grid = SheetGrid::from_rows(vec![
            header(),
            vec!["~Химия".into()],
            vec![
                CellValue::RichText(vec!["Tetra ".into(), "AquaSafe".into()]),
                "Кондиционер".into(),
            ],
        ]);
        let images = ImageLibrary::empty().with_index(Category::Chemistry, {
            let mut index = ImageIndex::new();
            index.insert("tetra aquasafe", "https://img/aquasafe.jpg");
            index
        });
        let bucket = SheetConverter::new(&images)
            .convert_to(&grid, &["name", "capacity", "description", "price"], Category::Chemistry)
            .unwrap();

        let records = bucket.get("~Химия").unwrap();
        assert_eq!(records[0].get("article"), Some(&CellValue::text("Tetra AquaSafe")));
        assert_eq!(records[0].image(), "https://img/aquasafe.jpg");
    }

    #[test]
    fn test_convert_to_feed_rejects_float_article() {
        let grid = SheetGrid::from_rows(vec![
            header(),
            vec!["~Корма".into()],
            vec![12.5_f64.into(), "Хлопья".into()],
        ]);
        let images = ImageLibrary::empty();
        let result = SheetConverter::new(&images).convert_to_feed(&grid);
        assert!(matches!(
            result,
            Err(PriceListError::ArticleType {
                category: Category::Feed
            })
        ));
    }

    #[test]
    fn test_convert_to_feed_accepts_integer_article() {
        let grid = SheetGrid::from_rows(vec![
            header(),
            vec!["~Корма".into()],
            vec![1001_i64.into(), "Хлопья".into(), "".into(), "100 г".into(), 250_i64.into()],
        ]);
        let images = ImageLibrary::empty();
        let bucket = SheetConverter::new(&images).convert_to_feed(&grid).unwrap();

        let records = bucket.get("~Корма").unwrap();
        assert_eq!(records[0].get("article"), Some(&CellValue::text("1001")));
        assert_eq!(records[0].get("weight"), Some(&CellValue::text("100 г")));
    }
}
