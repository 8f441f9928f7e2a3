use serde::Serialize;

use crate::figma::api_types::FigmaNode;
use crate::figma::traverse::walk;

use super::scalar::{sorted_distinct, Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Icon,
    Button,
    Input,
    Card,
}

impl ComponentKind {
    /// Classify by case-insensitive name substring. `icon` is checked first so
    /// "Icon Button" is treated as an icon.
    pub fn classify(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.contains("icon") {
            Some(ComponentKind::Icon)
        } else if lower.contains("button") || lower.contains("btn") {
            Some(ComponentKind::Button)
        } else if lower.contains("input") || lower.contains("field") {
            Some(ComponentKind::Input)
        } else if lower.contains("card") {
            Some(ComponentKind::Card)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoxSizes {
    pub widths: Vec<Scalar>,
    pub heights: Vec<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IconSizes {
    pub sizes: Vec<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DimensionTokens {
    pub buttons: BoxSizes,
    pub inputs: BoxSizes,
    pub cards: BoxSizes,
    pub icons: IconSizes,
}

#[derive(Default)]
struct Collected {
    widths: Vec<f64>,
    heights: Vec<f64>,
}

impl Collected {
    fn push(&mut self, width: Option<f64>, height: Option<f64>) {
        self.widths.extend(width.filter(|w| *w > 0.0));
        self.heights.extend(height.filter(|h| *h > 0.0));
    }

    fn finish(self) -> BoxSizes {
        BoxSizes {
            widths: sorted_distinct(self.widths),
            heights: sorted_distinct(self.heights),
        }
    }
}

pub fn extract_dimensions(root: &FigmaNode) -> DimensionTokens {
    let mut buttons = Collected::default();
    let mut inputs = Collected::default();
    let mut cards = Collected::default();
    let mut icons = Vec::new();

    walk(root, &mut |node| {
        let Some(kind) = ComponentKind::classify(&node.name) else {
            return;
        };
        let (width, height) = node.dimensions();

        match kind {
            ComponentKind::Icon => {
                if let (Some(w), Some(h)) = (width, height) {
                    if w == h && w > 0.0 {
                        icons.push(w);
                    }
                }
            }
            ComponentKind::Button => buttons.push(width, height),
            ComponentKind::Input => inputs.push(width, height),
            ComponentKind::Card => cards.push(width, height),
        }
    });

    DimensionTokens {
        buttons: buttons.finish(),
        inputs: inputs.finish(),
        cards: cards.finish(),
        icons: IconSizes {
            sizes: sorted_distinct(icons),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain(values: &[Scalar]) -> Vec<f64> {
        values.iter().map(|v| v.value()).collect()
    }

    #[test]
    fn classify_matches_name_substrings() {
        assert_eq!(ComponentKind::classify("Primary Button"), Some(ComponentKind::Button));
        assert_eq!(ComponentKind::classify("submit-btn"), Some(ComponentKind::Button));
        assert_eq!(ComponentKind::classify("Email TextField"), Some(ComponentKind::Input));
        assert_eq!(ComponentKind::classify("search input"), Some(ComponentKind::Input));
        assert_eq!(ComponentKind::classify("Lesson CARD"), Some(ComponentKind::Card));
        assert_eq!(ComponentKind::classify("icon-search"), Some(ComponentKind::Icon));
        assert_eq!(ComponentKind::classify("Icon Button"), Some(ComponentKind::Icon));
        assert_eq!(ComponentKind::classify("Header"), None);
    }

    #[test]
    fn buckets_sizes_by_component_kind() {
        let root: FigmaNode = serde_json::from_value(json!({
            "id": "0:0", "type": "DOCUMENT",
            "children": [
                { "id": "1:1", "name": "Primary Button", "type": "INSTANCE",
                  "absoluteBoundingBox": { "x": 0, "y": 0, "width": 120, "height": 44 } },
                { "id": "1:2", "name": "icon-search", "type": "VECTOR", "width": 24, "height": 24 },
                { "id": "1:3", "name": "Icon Button", "type": "INSTANCE",
                  "absoluteBoundingBox": { "x": 0, "y": 0, "width": 48, "height": 40 } },
                { "id": "1:4", "name": "Secondary btn", "type": "INSTANCE",
                  "absoluteBoundingBox": { "x": 0, "y": 0, "width": 96.4, "height": 44 } },
                { "id": "1:5", "name": "Lesson Card", "type": "FRAME",
                  "absoluteBoundingBox": { "x": 0, "y": 0, "width": 320, "height": 180 },
                  "children": [
                    { "id": "1:6", "name": "Play icon", "type": "VECTOR",
                      "absoluteBoundingBox": { "x": 0, "y": 0, "width": 16, "height": 16 } }
                  ] }
            ]
        }))
        .expect("node");
        let dims = extract_dimensions(&root);

        assert_eq!(plain(&dims.buttons.widths), vec![96.4, 120.0]);
        assert_eq!(plain(&dims.buttons.heights), vec![44.0]);
        assert_eq!(plain(&dims.icons.sizes), vec![16.0, 24.0]);
        assert_eq!(plain(&dims.cards.widths), vec![320.0]);
        assert_eq!(plain(&dims.cards.heights), vec![180.0]);
        assert!(dims.inputs.widths.is_empty());
    }

    #[test]
    fn icons_must_be_exactly_square() {
        let root: FigmaNode = serde_json::from_value(json!({
            "id": "0:0", "type": "DOCUMENT",
            "children": [
                { "id": "1:1", "name": "icon-x", "type": "VECTOR",
                  "absoluteBoundingBox": { "x": 0, "y": 0, "width": 24, "height": 24.4 } },
                { "id": "1:2", "name": "icon-check", "type": "VECTOR",
                  "absoluteBoundingBox": { "x": 0, "y": 0, "width": 20.5, "height": 20.5 } }
            ]
        }))
        .expect("node");
        let dims = extract_dimensions(&root);

        assert_eq!(plain(&dims.icons.sizes), vec![20.5]);
    }

    #[test]
    fn bounding_box_takes_precedence_over_raw_size() {
        let root: FigmaNode = serde_json::from_value(json!({
            "id": "1:1", "name": "Field", "type": "FRAME", "width": 10, "height": 10,
            "absoluteBoundingBox": { "x": 0, "y": 0, "width": 280, "height": 48 }
        }))
        .expect("node");
        let dims = extract_dimensions(&root);
        assert_eq!(plain(&dims.inputs.widths), vec![280.0]);
        assert_eq!(plain(&dims.inputs.heights), vec![48.0]);
    }
}
