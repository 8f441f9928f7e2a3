use indexmap::IndexMap;
use serde::Serialize;

use crate::color::color_string;
use crate::figma::api_types::{FigmaNode, Paint};
use crate::figma::styles::{StyleCategory, StyleIndex};
use crate::figma::traverse::walk;

use super::scalar::Scalar;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorToken {
    pub value: String,
    #[serde(rename = "type")]
    pub paint_type: &'static str,
    pub opacity: Scalar,
    pub name: String,
}

/// Solid fills keyed by fill style name, else by the color value itself.
pub fn extract_colors(root: &FigmaNode, styles: &StyleIndex) -> IndexMap<String, ColorToken> {
    let mut colors = IndexMap::new();

    walk(root, &mut |node| {
        for fill in &node.fills {
            let Paint::Solid(solid) = fill else {
                continue;
            };
            let Some(color) = &solid.color else {
                continue;
            };
            let opacity = solid.opacity.unwrap_or(1.0);
            let value = color_string(color, opacity);
            let key = styles
                .resolve(node, StyleCategory::Fill)
                .map(str::to_owned)
                .unwrap_or_else(|| value.clone());

            if colors.contains_key(&key) {
                continue;
            }
            colors.insert(
                key.clone(),
                ColorToken {
                    value,
                    paint_type: "SOLID",
                    opacity: Scalar(opacity),
                    name: key,
                },
            );
        }
    });

    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figma::api_types::FigmaFile;
    use serde_json::json;

    fn file(document: serde_json::Value) -> FigmaFile {
        serde_json::from_value(json!({
            "name": "Colors",
            "document": document,
            "styles": { "S:1": { "name": "Primary", "styleType": "FILL" } }
        }))
        .expect("file")
    }

    #[test]
    fn styled_fill_uses_style_name() {
        let file = file(json!({
            "id": "0:0", "type": "DOCUMENT",
            "children": [{
                "id": "1:1", "name": "Swatch", "type": "RECTANGLE",
                "styles": { "fill": "S:1" },
                "fills": [{ "type": "SOLID", "color": { "r": 0.4, "g": 0.2, "b": 0.8, "a": 1 } }]
            }]
        }));
        let index = StyleIndex::new(&file, &[]);
        let colors = extract_colors(&file.document, &index);

        assert_eq!(
            colors.get("Primary"),
            Some(&ColorToken {
                value: "#6633cc".into(),
                paint_type: "SOLID",
                opacity: Scalar(1.0),
                name: "Primary".into(),
            })
        );
    }

    #[test]
    fn unstyled_fills_are_keyed_by_value_and_deduplicated() {
        let file = file(json!({
            "id": "0:0", "type": "DOCUMENT",
            "children": [
                { "id": "1:1", "name": "A", "type": "RECTANGLE",
                  "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1, "a": 1 } }] },
                { "id": "1:2", "name": "B", "type": "RECTANGLE",
                  "fills": [
                    { "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1, "a": 1 } },
                    { "type": "SOLID", "opacity": 0.5, "color": { "r": 0, "g": 0, "b": 0, "a": 1 } },
                    { "type": "GRADIENT_LINEAR", "gradientStops": [] },
                    { "type": "IMAGE", "scaleMode": "FILL" }
                  ] }
            ]
        }));
        let index = StyleIndex::new(&file, &[]);
        let colors = extract_colors(&file.document, &index);

        let keys: Vec<&str> = colors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["#ffffff", "rgba(0, 0, 0, 0.5)"]);
        assert_eq!(colors["rgba(0, 0, 0, 0.5)"].opacity, Scalar(0.5));
    }

    #[test]
    fn first_styled_occurrence_wins() {
        let file = file(json!({
            "id": "0:0", "type": "DOCUMENT",
            "children": [
                { "id": "1:1", "name": "A", "type": "RECTANGLE", "styles": { "fill": "S:1" },
                  "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0, "a": 1 } }] },
                { "id": "1:2", "name": "B", "type": "RECTANGLE", "styles": { "fill": "S:1" },
                  "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 1, "a": 1 } }] }
            ]
        }));
        let index = StyleIndex::new(&file, &[]);
        let colors = extract_colors(&file.document, &index);

        assert_eq!(colors.len(), 1);
        assert_eq!(colors["Primary"].value, "#ff0000");
    }
}
