//! Messages passed back to the upload form through the `msg` query parameter

use crate::error::PriceListError;
use crate::types::Category;

/// Outcome of an upload, as carried in the redirect query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMessage {
    Uploaded,
    MissingFile,
    InvalidWorkbook,
    ArticleType,
    EmptyCategory,
    CategoryMarker,
}

impl ValidationMessage {
    pub const ALL: [ValidationMessage; 6] = [
        ValidationMessage::Uploaded,
        ValidationMessage::MissingFile,
        ValidationMessage::InvalidWorkbook,
        ValidationMessage::ArticleType,
        ValidationMessage::EmptyCategory,
        ValidationMessage::CategoryMarker,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ValidationMessage::Uploaded => "uploaded",
            ValidationMessage::MissingFile => "missing_file",
            ValidationMessage::InvalidWorkbook => "invalid_workbook",
            ValidationMessage::ArticleType => "article_type",
            ValidationMessage::EmptyCategory => "empty_category",
            ValidationMessage::CategoryMarker => "category_marker",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|message| message.key() == key)
    }

    pub fn from_error(error: &PriceListError) -> Self {
        match error {
            PriceListError::ArticleType { .. } => ValidationMessage::ArticleType,
            PriceListError::EmptyCategory => ValidationMessage::EmptyCategory,
            PriceListError::CategoryMarker(_) => ValidationMessage::CategoryMarker,
            _ => ValidationMessage::InvalidWorkbook,
        }
    }

    /// Redirect target for the upload form
    pub fn redirect_to(&self, title: Option<&str>) -> String {
        match (self, title) {
            (ValidationMessage::CategoryMarker, Some(title)) => format!(
                "/?msg={}&title={}",
                self.key(),
                urlencoding::encode(title)
            ),
            _ => format!("/?msg={}", self.key()),
        }
    }

    /// Text shown to the uploader
    pub fn text(&self, title: Option<&str>) -> String {
        match self {
            ValidationMessage::Uploaded => "Прайс успешно загружен.".to_string(),
            ValidationMessage::MissingFile => "Выберите файл для загрузки.".to_string(),
            ValidationMessage::InvalidWorkbook => {
                "Не удалось прочитать файл. Убедитесь что это прайс в формате Excel с пятью листами."
                    .to_string()
            }
            ValidationMessage::ArticleType => PriceListError::ArticleType {
                category: Category::Feed,
            }
            .to_string(),
            ValidationMessage::EmptyCategory => PriceListError::EmptyCategory.to_string(),
            ValidationMessage::CategoryMarker => {
                PriceListError::CategoryMarker(title.unwrap_or_default().to_string()).to_string()
            }
        }
    }
}

/// Redirect target for a failed conversion
pub fn redirect_for_error(error: &PriceListError) -> String {
    let title = match error {
        PriceListError::CategoryMarker(title) => Some(title.as_str()),
        _ => None,
    };
    ValidationMessage::from_error(error).redirect_to(title)
}
