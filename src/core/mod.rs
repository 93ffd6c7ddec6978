//! Price-list conversion: per-sheet converters, title validation and the
//! whole-workbook orchestrator

pub mod converter;
pub mod fish;
pub mod orchestrator;
pub mod validator;

pub use converter::{ArticlePolicy, SheetConverter, TitleTracker, FEED_COLUMNS};
pub use fish::TOTAL_MARKER;
pub use orchestrator::{PriceListConverter, AQUARIUM_COLUMNS, CHEMISTRY_COLUMNS, EQUIPMENT_COLUMNS};
pub use validator::validate_title;
