//! List-item view model for templates

use tessera_core::Template;

/// What the template list needs from an entry
pub trait ListItem {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn search_key(&self) -> &str;

    /// Case-insensitive substring match on [`ListItem::search_key`]
    fn matches(&self, query: &str) -> bool {
        query.is_empty()
            || self
                .search_key()
                .to_lowercase()
                .contains(&query.to_lowercase())
    }
}

/// Adapter exposing a [`Template`] as a list entry
#[derive(Debug, Clone, Copy)]
pub struct TemplateItem<'a>(pub &'a Template);

impl ListItem for TemplateItem<'_> {
    fn title(&self) -> &str {
        &self.0.name
    }

    fn description(&self) -> &str {
        &self.0.desc
    }

    fn search_key(&self) -> &str {
        &self.0.name
    }
}
