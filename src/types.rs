use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

//==============================================================================
// Catalog categories
//==============================================================================

/// Product category, one per workbook sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Fish,
    Equipment,
    Feed,
    Chemistry,
    Aquariums,
}

impl Category {
    /// Categories in workbook sheet order
    pub const ALL: [Category; 5] = [
        Category::Fish,
        Category::Equipment,
        Category::Feed,
        Category::Chemistry,
        Category::Aquariums,
    ];

    /// Stable key used for image files and output field names
    pub fn key(&self) -> &'static str {
        match self {
            Category::Fish => "fish",
            Category::Equipment => "equipment",
            Category::Feed => "feed",
            Category::Chemistry => "chemistry",
            Category::Aquariums => "aquariums",
        }
    }

    /// Sheet title as the shop staff know it
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Fish => "Рыбы",
            Category::Equipment => "Оборудование",
            Category::Feed => "Корма для рыб",
            Category::Chemistry => "Химия",
            Category::Aquariums => "Аквариумы",
        }
    }

    /// Zero-based sheet index
    pub fn sheet_index(&self) -> usize {
        match self {
            Category::Fish => 0,
            Category::Equipment => 1,
            Category::Feed => 2,
            Category::Chemistry => 3,
            Category::Aquariums => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.key() == key)
            .ok_or_else(|| {
                format!(
                    "unknown category '{}', expected one of: fish, equipment, feed, chemistry, aquariums",
                    s
                )
            })
    }
}

//==============================================================================
// Cell values
//==============================================================================

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Formatted text split into runs
    RichText(Vec<String>),
}

impl CellValue {
    /// Build a text cell
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Wrap a float, reporting integral values as integers
    pub fn number(n: f64) -> Self {
        if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
            CellValue::Int(n as i64)
        } else {
            CellValue::Float(n)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Rich text is the only structured value a sheet can hold
    pub fn is_structured(&self) -> bool {
        matches!(self, CellValue::RichText(_))
    }

    /// Whether the value counts towards a row's content.
    ///
    /// `"0.00"` is what empty price cells are exported as, so it counts as blank.
    pub fn is_meaningful(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => !s.is_empty() && s != "0.00",
            _ => true,
        }
    }

    /// Loose truthiness used for the fish sheet's first column
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => !s.is_empty() && s != "0",
            CellValue::Int(i) => *i != 0,
            CellValue::Float(f) => *f != 0.0,
            CellValue::Bool(b) => *b,
            CellValue::RichText(_) => true,
        }
    }

    /// Trim text, pass everything else through
    pub fn trimmed(&self) -> CellValue {
        match self {
            CellValue::Text(s) => CellValue::Text(s.trim().to_string()),
            other => other.clone(),
        }
    }

    /// Plain-text rendering of the value
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => format_number(*f),
            CellValue::Bool(true) => "1".to_string(),
            CellValue::Bool(false) => String::new(),
            CellValue::RichText(runs) => runs.concat(),
        }
    }

    /// Article identifier read from an article column
    pub fn to_article(&self) -> String {
        match self {
            CellValue::Int(i) => i.to_string(),
            other => other.to_text().trim().to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_none(),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Int(i) => serializer.serialize_i64(*i),
            CellValue::Float(f) => serializer.serialize_f64(*f),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::RichText(runs) => serializer.serialize_str(&runs.concat()),
        }
    }
}

/// Format a float without a trailing `.0` for integral values
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

//==============================================================================
// Conversion output
//==============================================================================

/// One product row of a price list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    #[serde(flatten)]
    fields: IndexMap<String, CellValue>,
    image: String,
}

impl ProductRecord {
    pub fn new(fields: IndexMap<String, CellValue>, image: impl Into<String>) -> Self {
        Self {
            fields,
            image: image.into(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields.get(name)
    }

    /// Article as text (empty when the row has none)
    pub fn article(&self) -> String {
        self.get("article").map(CellValue::to_text).unwrap_or_default()
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Field names in column order, without `image`
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Products grouped under the title row they follow
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryBucket {
    groups: IndexMap<String, Vec<ProductRecord>>,
}

impl CategoryBucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, title: &str, record: ProductRecord) {
        self.groups.entry(title.to_string()).or_default().push(record);
    }

    pub fn get(&self, title: &str) -> Option<&[ProductRecord]> {
        self.groups.get(title).map(Vec::as_slice)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ProductRecord])> {
        self.groups
            .iter()
            .map(|(title, records)| (title.as_str(), records.as_slice()))
    }

    /// Number of titles
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of products across all titles
    pub fn product_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// All five converted sheets
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversionResult {
    pub fish: CategoryBucket,
    pub equipment: CategoryBucket,
    pub feed: CategoryBucket,
    pub chemistry: CategoryBucket,
    pub aquariums: CategoryBucket,
}

/// Per-category counts of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub titles: usize,
    pub products: usize,
}

impl ConversionResult {
    pub fn bucket(&self, category: Category) -> &CategoryBucket {
        match category {
            Category::Fish => &self.fish,
            Category::Equipment => &self.equipment,
            Category::Feed => &self.feed,
            Category::Chemistry => &self.chemistry,
            Category::Aquariums => &self.aquariums,
        }
    }

    pub fn product_count(&self) -> usize {
        Category::ALL
            .iter()
            .map(|c| self.bucket(*c).product_count())
            .sum()
    }

    pub fn summary(&self) -> Vec<CategorySummary> {
        Category::ALL
            .iter()
            .map(|&category| {
                let bucket = self.bucket(category);
                CategorySummary {
                    category,
                    titles: bucket.len(),
                    products: bucket.product_count(),
                }
            })
            .collect()
    }
}
