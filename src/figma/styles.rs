//! Style-name resolution for node style references.

use std::collections::HashMap;

use super::api_types::{FigmaFile, FigmaNode, PublishedStyle};

/// Style reference categories as they appear in a node's `styles` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleCategory {
    Fill,
    Text,
    Effect,
}

impl StyleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleCategory::Fill => "fill",
            StyleCategory::Text => "text",
            StyleCategory::Effect => "effect",
        }
    }
}

/// Lookup from style id (or published style key / node id) to style name.
#[derive(Debug, Clone, Default)]
pub struct StyleIndex {
    names: HashMap<String, String>,
    published: usize,
}

impl StyleIndex {
    /// Merge the published style list into the file's own style map.
    ///
    /// File-level entries win: they are keyed by the same ids nodes use.
    pub fn new(file: &FigmaFile, published: &[PublishedStyle]) -> Self {
        let mut names = HashMap::new();
        for style in published {
            names.insert(style.key.clone(), style.name.clone());
            if let Some(node_id) = &style.node_id {
                names.insert(node_id.clone(), style.name.clone());
            }
        }
        for (id, style) in &file.styles {
            names.insert(id.clone(), style.name.clone());
            if let Some(key) = &style.key {
                names.entry(key.clone()).or_insert_with(|| style.name.clone());
            }
        }

        Self {
            names,
            published: published.len(),
        }
    }

    /// Name of the style the node references for `category`, if it is known.
    pub fn resolve(&self, node: &FigmaNode, category: StyleCategory) -> Option<&str> {
        let id = node.styles.get(category.as_str())?;
        let name = self.names.get(id).map(String::as_str);
        if name.is_none() {
            tracing::warn!(node = %node.id, style = %id, "unresolved style reference");
        }
        name
    }

    /// Number of records in the fetched style list.
    pub fn published_count(&self) -> usize {
        self.published
    }
}
