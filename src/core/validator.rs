//! Category/subcategory title validation
//!
//! Title rows on the equipment, feed, chemistry and aquariums sheets must be
//! marked: `~` for a category, `*` for a subcategory.

use crate::error::{PriceListError, PriceListResult};

/// Prefix of a category title
pub const CATEGORY_MARKER: char = '~';

/// Prefix of a subcategory title
pub const SUBCATEGORY_MARKER: char = '*';

pub fn is_category(title: &str) -> bool {
    title.trim().starts_with(CATEGORY_MARKER)
}

pub fn is_subcategory(title: &str) -> bool {
    title.trim().starts_with(SUBCATEGORY_MARKER)
}

/// Check the running title before a product with `next_article` is emitted.
///
/// `None` (or a blank title) means no title row has been seen yet.
pub fn validate_title(title: Option<&str>, next_article: &str) -> PriceListResult<()> {
    if next_article.is_empty() {
        return Ok(());
    }

    let Some(title) = title.filter(|t| !t.trim().is_empty()) else {
        return Err(PriceListError::EmptyCategory);
    };

    if !is_category(title) && !is_subcategory(title) {
        return Err(PriceListError::CategoryMarker(title.to_string()));
    }

    Ok(())
}
