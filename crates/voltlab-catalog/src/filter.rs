use crate::{Category, ComponentDefinition, CATALOG};

/// Palette filter: a search term takes precedence over the category tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: Option<String>,
    /// `None` means the "All" tab.
    pub category: Option<Category>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn matches(&self, definition: &ComponentDefinition) -> bool {
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => definition
                .label
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => self
                .category
                .map_or(true, |category| definition.category == category),
        }
    }

    /// Matching definitions in palette order.
    pub fn run(&self) -> Vec<&'static ComponentDefinition> {
        CATALOG.iter().filter(|def| self.matches(def)).collect()
    }
}
