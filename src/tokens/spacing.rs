use crate::figma::api_types::FigmaNode;
use crate::figma::traverse::walk;

use super::scalar::sorted_distinct;
use super::scale::{bucket, ScaleTokens, SPACING_STEPS};

/// Paddings and item spacing of auto-layout frames.
pub fn extract_spacing(root: &FigmaNode) -> ScaleTokens {
    let mut values = Vec::new();

    walk(root, &mut |node| {
        if node.layout_mode.is_none() {
            return;
        }
        let candidates = [
            node.padding_left,
            node.padding_right,
            node.padding_top,
            node.padding_bottom,
            node.item_spacing,
        ];
        values.extend(
            candidates
                .into_iter()
                .flatten()
                .map(f64::round)
                .filter(|v| *v > 0.0),
        );
    });

    let values = sorted_distinct(values);
    let scale = bucket(&values, &SPACING_STEPS);
    ScaleTokens { values, scale }
}
