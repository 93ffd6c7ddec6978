//! Product image lookup tables
//!
//! Each category has an optional `<category>.csv` file of `key|url` lines.
//! Keys are matched against article identifiers after [`normalize_key`].

use crate::error::PriceListResult;
use crate::types::Category;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Image used when an article has no entry in its category's table
pub const PLACEHOLDER_IMAGE: &str = "https://i.ibb.co/9tpYXHz/fish-placeholder.jpg";

/// Directory searched for lookup files when none is configured
pub const DEFAULT_IMAGES_DIR: &str = "storage/app/csv";

/// Trim, collapse whitespace runs to single spaces and lowercase
pub fn normalize_key(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Lookup table for a single category
#[derive(Debug, Clone, Default)]
pub struct ImageIndex {
    entries: HashMap<String, String>,
}

impl ImageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key|url` records; records without exactly two fields or with
    /// non-UTF-8 bytes are skipped
    pub fn from_reader<R: Read>(reader: R) -> PriceListResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'|')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut index = Self::new();
        for record in csv_reader.byte_records() {
            let record = record?;
            if record.len() != 2 {
                continue;
            }
            match (std::str::from_utf8(&record[0]), std::str::from_utf8(&record[1])) {
                (Ok(key), Ok(url)) => index.insert(key, url),
                _ => debug!(
                    "Skipping non-UTF-8 image record at line {:?}",
                    record.position().map(|p| p.line())
                ),
            }
        }

        Ok(index)
    }

    /// Load a lookup file; a missing file yields an empty index
    pub fn load(path: &Path) -> PriceListResult<Self> {
        if !path.exists() {
            debug!("No image index at {}", path.display());
            return Ok(Self::new());
        }

        let file = std::fs::File::open(path)?;
        let index = Self::from_reader(std::io::BufReader::new(file))?;
        debug!("Loaded {} image entries from {}", index.len(), path.display());
        Ok(index)
    }

    /// Keys are lowercased as given; whitespace is normalized only at lookup
    pub fn insert(&mut self, key: &str, url: &str) {
        self.entries.insert(key.to_lowercase(), url.to_string());
    }

    /// Image URL for a raw article or name, or the placeholder
    pub fn lookup(&self, raw: &str) -> &str {
        self.entries
            .get(&normalize_key(raw))
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One [`ImageIndex`] per category, built once per conversion run
#[derive(Debug, Clone, Default)]
pub struct ImageLibrary {
    indexes: HashMap<Category, ImageIndex>,
}

impl ImageLibrary {
    /// Library where every lookup resolves to the placeholder
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load `<dir>/<category>.csv` for every category
    pub fn load_dir(dir: &Path) -> PriceListResult<Self> {
        let mut library = Self::empty();
        for category in Category::ALL {
            let index = ImageIndex::load(&Self::index_path(dir, category))?;
            library.indexes.insert(category, index);
        }
        Ok(library)
    }

    pub fn index_path(dir: &Path, category: Category) -> PathBuf {
        dir.join(format!("{}.csv", category.key()))
    }

    #[must_use]
    pub fn with_index(mut self, category: Category, index: ImageIndex) -> Self {
        self.indexes.insert(category, index);
        self
    }

    pub fn index(&self, category: Category) -> Option<&ImageIndex> {
        self.indexes.get(&category)
    }

    pub fn lookup(&self, category: Category, raw: &str) -> &str {
        self.index(category)
            .map(|index| index.lookup(raw))
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}
