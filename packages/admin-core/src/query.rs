//! Query state owned by a list controller.

use std::collections::BTreeMap;

/// Value of one list filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Free text or a dropdown choice
    Text(String),
    /// Checkbox-style flag; `false` is the same as unset
    Flag(bool),
}

impl FilterValue {
    pub fn text(value: impl Into<String>) -> Self {
        FilterValue::Text(value.into())
    }

    /// Whether this value means "no filter".
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(text) => text.trim().is_empty(),
            FilterValue::Flag(flag) => !flag,
        }
    }

    /// Rendering used in query strings.
    pub fn as_query_value(&self) -> String {
        match self {
            FilterValue::Text(text) => text.trim().to_string(),
            FilterValue::Flag(flag) => flag.to_string(),
        }
    }
}

/// Page, filters and search text of one list screen.
///
/// Fields are only mutated through methods so that the page reset on every
/// criteria change cannot be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    page: u32,
    page_size: u32,
    filters: BTreeMap<String, FilterValue>,
    search_text: String,
}

impl ResourceQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            filters: BTreeMap::new(),
            search_text: String::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Zero-based offset of the first item on the current page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Trimmed search text, `None` when blank.
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search_text.trim();
        (!term.is_empty()).then_some(term)
    }

    pub fn filter(&self, name: &str) -> Option<&FilterValue> {
        self.filters.get(name)
    }

    /// Text of a filter, `None` when unset or blank.
    pub fn filter_text(&self, name: &str) -> Option<&str> {
        match self.filters.get(name) {
            Some(FilterValue::Text(text)) if !text.trim().is_empty() => Some(text.trim()),
            _ => None,
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.filters.get(name), Some(FilterValue::Flag(true)))
    }

    pub fn filters(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Move to `page` (clamped to at least 1). Returns whether it changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        let changed = self.page != page;
        self.page = page;
        changed
    }

    /// Set or clear a filter; empty values remove it. Resets the page to 1
    /// when the criteria changed. Returns whether anything changed.
    pub fn set_filter(&mut self, name: &str, value: FilterValue) -> bool {
        let changed = if value.is_empty() {
            self.filters.remove(name).is_some()
        } else if self.filters.get(name) == Some(&value) {
            false
        } else {
            self.filters.insert(name.to_string(), value);
            true
        };

        if changed {
            self.page = 1;
        }
        changed
    }

    /// Replace the search text and reset the page to 1.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_change_resets_page() {
        let mut query = ResourceQuery::new(10);
        query.set_page(4);
        assert!(query.set_filter("status", FilterValue::text("Approved")));
        assert_eq!(query.page(), 1);
        assert_eq!(query.filter_text("status"), Some("Approved"));
    }

    #[test]
    fn test_unchanged_filter_keeps_page() {
        let mut query = ResourceQuery::new(10);
        query.set_filter("status", FilterValue::text("Approved"));
        query.set_page(3);
        assert!(!query.set_filter("status", FilterValue::text("Approved")));
        assert_eq!(query.page(), 3);
    }

    #[test]
    fn test_empty_filter_value_clears() {
        let mut query = ResourceQuery::new(10);
        query.set_filter("featured", FilterValue::Flag(true));
        assert!(query.flag("featured"));
        assert!(query.set_filter("featured", FilterValue::Flag(false)));
        assert!(query.filter("featured").is_none());
        assert!(!query.set_filter("featured", FilterValue::Flag(false)));
    }

    #[test]
    fn test_search_resets_page_and_page_keeps_filters() {
        let mut query = ResourceQuery::new(10);
        query.set_filter("category", FilterValue::text("Tech"));
        query.set_page(2);
        query.set_search_text("rust");
        assert_eq!(query.page(), 1);

        query.set_page(5);
        assert_eq!(query.page(), 5);
        assert_eq!(query.search_term(), Some("rust"));
        assert_eq!(query.filter_text("category"), Some("Tech"));
    }

    #[test]
    fn test_page_is_at_least_one() {
        let mut query = ResourceQuery::new(10);
        query.set_page(0);
        assert_eq!(query.page(), 1);
        assert_eq!(query.offset(), 0);
        query.set_page(3);
        assert_eq!(query.offset(), 20);
    }

    #[test]
    fn test_blank_search_term() {
        let mut query = ResourceQuery::new(10);
        query.set_search_text("   ");
        assert_eq!(query.search_term(), None);
    }
}
