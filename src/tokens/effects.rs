use indexmap::IndexMap;
use serde::Serialize;

use crate::color::{color_string, DEFAULT_SHADOW_COLOR};
use crate::figma::api_types::{FigmaNode, Shadow, ShadowKind, Vector};
use crate::figma::styles::{StyleCategory, StyleIndex};
use crate::figma::traverse::walk;

use super::scalar::Scalar;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offset {
    pub x: Scalar,
    pub y: Scalar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadowToken {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub offset: Offset,
    pub radius: Scalar,
    pub spread: Scalar,
    pub color: String,
}

impl ShadowToken {
    fn new(kind: ShadowKind, shadow: &Shadow) -> Self {
        let offset = shadow.offset.unwrap_or(Vector { x: 0.0, y: 0.0 });
        Self {
            kind: kind.as_str(),
            offset: Offset {
                x: Scalar(offset.x),
                y: Scalar(offset.y),
            },
            radius: Scalar(shadow.radius),
            spread: Scalar(shadow.spread.unwrap_or(0.0)),
            color: shadow
                .color
                .map(|c| color_string(&c, 1.0))
                .unwrap_or_else(|| DEFAULT_SHADOW_COLOR.to_string()),
        }
    }
}

/// Drop and inner shadows per node, keyed by effect style name or `shadow-{blur}`.
pub fn extract_effects(
    root: &FigmaNode,
    styles: &StyleIndex,
) -> IndexMap<String, Vec<ShadowToken>> {
    let mut effects = IndexMap::new();

    walk(root, &mut |node| {
        let shadows: Vec<ShadowToken> = node
            .effects
            .iter()
            .filter_map(|e| e.shadow())
            .map(|(kind, shadow)| ShadowToken::new(kind, shadow))
            .collect();
        let Some(first) = shadows.first() else {
            return;
        };
        let key = styles
            .resolve(node, StyleCategory::Effect)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("shadow-{}", first.radius));

        effects.entry(key).or_insert(shadows);
    });

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figma::api_types::FigmaFile;
    use serde_json::json;

    #[test]
    fn collects_shadows_in_order_and_skips_blurs() {
        let file: FigmaFile = serde_json::from_value(json!({
            "document": {
                "id": "0:0", "type": "DOCUMENT",
                "children": [
                    { "id": "1:1", "name": "Card", "type": "FRAME",
                      "effects": [
                        { "type": "LAYER_BLUR", "radius": 4 },
                        { "type": "DROP_SHADOW", "radius": 8, "spread": 2,
                          "offset": { "x": 0, "y": 4 },
                          "color": { "r": 0, "g": 0, "b": 0, "a": 0.1 } },
                        { "type": "INNER_SHADOW", "radius": 2, "offset": { "x": 1, "y": 1 } }
                      ] },
                    { "id": "1:2", "name": "Blurred", "type": "FRAME",
                      "effects": [{ "type": "BACKGROUND_BLUR", "radius": 10 }] },
                    { "id": "1:3", "name": "Elevated", "type": "FRAME", "styles": { "effect": "S:e" },
                      "effects": [{ "type": "DROP_SHADOW", "radius": 16 }] }
                ]
            },
            "styles": { "S:e": { "name": "Elevation/High" } }
        }))
        .expect("file");
        let index = StyleIndex::new(&file, &[]);
        let effects = extract_effects(&file.document, &index);

        let keys: Vec<&str> = effects.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["shadow-8", "Elevation/High"]);

        let card = &effects["shadow-8"];
        assert_eq!(card.len(), 2);
        assert_eq!(card[0].kind, "DROP_SHADOW");
        assert_eq!(card[0].color, "rgba(0, 0, 0, 0.1)");
        assert_eq!(card[0].spread, Scalar(2.0));
        assert_eq!(card[1].kind, "INNER_SHADOW");
        assert_eq!(card[1].color, DEFAULT_SHADOW_COLOR);
        assert_eq!(card[1].spread, Scalar(0.0));

        let elevated = &effects["Elevation/High"][0];
        assert_eq!(elevated.offset, Offset { x: Scalar(0.0), y: Scalar(0.0) });
    }

    #[test]
    fn later_nodes_with_same_blur_are_dropped() {
        let file: FigmaFile = serde_json::from_value(json!({
            "document": {
                "id": "0:0", "type": "DOCUMENT",
                "children": [
                    { "id": "1:1", "name": "A", "type": "FRAME",
                      "effects": [{ "type": "DROP_SHADOW", "radius": 4, "offset": { "x": 0, "y": 1 } }] },
                    { "id": "1:2", "name": "B", "type": "FRAME",
                      "effects": [{ "type": "DROP_SHADOW", "radius": 4, "offset": { "x": 0, "y": 9 } }] }
                ]
            }
        }))
        .expect("file");
        let effects = extract_effects(&file.document, &StyleIndex::new(&file, &[]));

        assert_eq!(effects.len(), 1);
        assert_eq!(effects["shadow-4"][0].offset.y, Scalar(1.0));
    }
}
