//! Whole-workbook conversion

use crate::core::converter::SheetConverter;
use crate::error::PriceListResult;
use crate::excel::{import_bytes, CatalogGrids, WorkbookImporter};
use crate::images::ImageLibrary;
use crate::types::{Category, ConversionResult};
use std::path::Path;
use tracing::info;

/// Equipment sheet attribute columns
pub const EQUIPMENT_COLUMNS: [&str; 4] = ["name", "description", "producer", "price"];

/// Chemistry sheet attribute columns
pub const CHEMISTRY_COLUMNS: [&str; 4] = ["name", "capacity", "description", "price"];

/// Aquariums sheet attribute columns
pub const AQUARIUM_COLUMNS: [&str; 4] = ["name", "capacity", "description", "price"];

/// Converts a five-sheet price-list workbook into a [`ConversionResult`].
///
/// Any error from a sheet aborts the whole conversion.
pub struct PriceListConverter {
    images: ImageLibrary,
}

impl PriceListConverter {
    pub fn new(images: ImageLibrary) -> Self {
        Self { images }
    }

    /// Load image tables from `<dir>/<category>.csv`
    pub fn from_images_dir(dir: &Path) -> PriceListResult<Self> {
        Ok(Self::new(ImageLibrary::load_dir(dir)?))
    }

    pub fn images(&self) -> &ImageLibrary {
        &self.images
    }

    pub fn convert_file(&self, path: &Path) -> PriceListResult<ConversionResult> {
        let grids = WorkbookImporter::new(path).import()?;
        self.convert_grids(&grids)
    }

    pub fn convert_bytes(&self, bytes: Vec<u8>) -> PriceListResult<ConversionResult> {
        let grids = import_bytes(bytes)?;
        self.convert_grids(&grids)
    }

    pub fn convert_grids(&self, grids: &CatalogGrids) -> PriceListResult<ConversionResult> {
        let converter = SheetConverter::new(&self.images);

        let result = ConversionResult {
            fish: converter.convert_to_fish(grids.grid(Category::Fish)),
            equipment: converter.convert_to(
                grids.grid(Category::Equipment),
                &EQUIPMENT_COLUMNS,
                Category::Equipment,
            )?,
            feed: converter.convert_to_feed(grids.grid(Category::Feed))?,
            chemistry: converter.convert_to(
                grids.grid(Category::Chemistry),
                &CHEMISTRY_COLUMNS,
                Category::Chemistry,
            )?,
            aquariums: converter.convert_to(
                grids.grid(Category::Aquariums),
                &AQUARIUM_COLUMNS,
                Category::Aquariums,
            )?,
        };

        info!("Price list converted: {} products", result.product_count());
        Ok(result)
    }
}
