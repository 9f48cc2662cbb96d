//! # Search Filter
//!
//! Narrows a category's component list by a free-text query.
//!
//! Only the active language's name and description are scanned. The same
//! query can therefore match in Chinese and miss in English.

use crate::Lang;
use crate::catalog::ComponentRecord;

/// Returns the components whose name or description in `lang` contains
/// `query`, ignoring case. Input order is kept. An empty query returns
/// everything.
pub fn filter<'a>(
    components: &'a [ComponentRecord],
    query: &str,
    lang: Lang,
) -> Vec<&'a ComponentRecord> {
    if query.is_empty() {
        return components.iter().collect();
    }
    let needle = query.to_lowercase();
    components
        .iter()
        .filter(|c| matches(c, &needle, lang))
        .collect()
}

/// `needle` must already be lowercased.
fn matches(component: &ComponentRecord, needle: &str, lang: Lang) -> bool {
    component.name.get(lang).to_lowercase().contains(needle)
        || component.description.get(lang).to_lowercase().contains(needle)
}
