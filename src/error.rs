use thiserror::Error;

use crate::types::Category;

pub type PriceListResult<T> = Result<T, PriceListError>;

/// Everything that can abort a price-list conversion.
///
/// The validation variants carry the text shown to the person who uploaded
/// the workbook, so their messages stay in the shop's language.
#[derive(Error, Debug)]
pub enum PriceListError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Workbook has {found} sheets, sheet \"{}\" is missing", .category.display_name())]
    MissingSheet { category: Category, found: usize },

    #[error("Image index error: {0}")]
    ImageIndex(#[from] csv::Error),

    #[error(
        "Проверьте новые артикли в \"{}\", один из них имеет неподдерживаемый тип.\nУбедитесь что артикль является строкой.",
        .category.display_name()
    )]
    ArticleType { category: Category },

    #[error("Проверьте правильность прайса. Убедитесь что нет пустых строк, категорий и подкатегорий.")]
    EmptyCategory,

    #[error(
        "Проверьте правильность ввода категории или подкатегории \"{0}\".\nКаждая категория должна начинаться с символа ~, а подкатегория с символа *."
    )]
    CategoryMarker(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PriceListError {
    /// True for errors caused by the workbook's content rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PriceListError::ArticleType { .. }
                | PriceListError::EmptyCategory
                | PriceListError::CategoryMarker(_)
        )
    }
}
