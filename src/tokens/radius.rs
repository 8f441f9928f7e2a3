use crate::figma::api_types::FigmaNode;
use crate::figma::traverse::walk;

use super::scalar::sorted_distinct;
use super::scale::{bucket, ScaleTokens, RADIUS_STEPS};

/// Uniform and per-corner radii.
pub fn extract_border_radius(root: &FigmaNode) -> ScaleTokens {
    let mut values = Vec::new();

    walk(root, &mut |node| {
        if let Some(r) = node.corner_radius.filter(|r| *r > 0.0) {
            values.push(r);
        }
        if let Some(radii) = &node.rectangle_corner_radii {
            values.extend(radii.iter().copied().filter(|r| *r > 0.0));
        }
    });

    let values = sorted_distinct(values);
    let scale = bucket(&values, &RADIUS_STEPS);
    ScaleTokens { values, scale }
}
