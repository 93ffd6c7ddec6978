//! Aqua Pricelist - aquarium shop price-list converter
//!
//! This library reads a five-sheet price-list workbook (fish, equipment,
//! feed, chemistry, aquariums), groups each sheet's products under the
//! category/subcategory title rows they follow, and attaches an image URL
//! from per-category lookup files.
//!
//! # Features
//!
//! - Workbook import through `calamine` (.xlsx, .xls, .ods)
//! - Title-row detection with `~` category / `*` subcategory validation
//! - Strict article typing for the feed sheet
//! - Image lookup with whitespace/case-insensitive keys and a placeholder
//! - Upload form and JSON endpoint (`pricelist-server`)
//!
//! # Example
//!
//! ```no_run
//! use aqua_pricelist::core::PriceListConverter;
//! use std::path::Path;
//!
//! let converter = PriceListConverter::from_images_dir(Path::new("storage/app/csv"))?;
//! let result = converter.convert_file(Path::new("price.xlsx"))?;
//!
//! for (title, products) in result.equipment.iter() {
//!     println!("{}: {} products", title, products.len());
//! }
//! # Ok::<(), aqua_pricelist::error::PriceListError>(())
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod images;
pub mod types;

// Re-export commonly used types
pub use error::{PriceListError, PriceListResult};
pub use types::{CategoryBucket, CellValue, Category, ConversionResult, ProductRecord};
