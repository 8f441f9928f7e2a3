use indexmap::IndexMap;
use serde::Serialize;

use crate::color::color_string;
use crate::figma::api_types::{FigmaNode, GradientPaint, Paint};
use crate::figma::traverse::walk;

use super::scalar::Scalar;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStopToken {
    pub position: Scalar,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandleToken {
    pub x: Scalar,
    pub y: Scalar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientToken {
    #[serde(rename = "type")]
    pub gradient_type: &'static str,
    pub stops: Vec<GradientStopToken>,
    pub handles: Vec<HandleToken>,
}

impl GradientToken {
    fn new(gradient_type: &'static str, paint: &GradientPaint) -> Self {
        Self {
            gradient_type,
            stops: paint
                .gradient_stops
                .iter()
                .map(|stop| GradientStopToken {
                    position: Scalar(stop.position),
                    color: color_string(&stop.color, 1.0),
                })
                .collect(),
            handles: paint
                .gradient_handle_positions
                .iter()
                .map(|v| HandleToken {
                    x: Scalar(v.x),
                    y: Scalar(v.y),
                })
                .collect(),
        }
    }
}

/// The first linear or radial fill only; further gradient fills on the same
/// node are not recorded.
fn first_gradient(node: &FigmaNode) -> Option<GradientToken> {
    node.fills.iter().find_map(|fill| match fill {
        Paint::GradientLinear(g) => Some(GradientToken::new("GRADIENT_LINEAR", g)),
        Paint::GradientRadial(g) => Some(GradientToken::new("GRADIENT_RADIAL", g)),
        Paint::Solid(_) | Paint::Other => None,
    })
}

/// Linear and radial gradients keyed by node name, `gradient-{n}` for unnamed nodes.
pub fn extract_gradients(root: &FigmaNode) -> IndexMap<String, GradientToken> {
    let mut gradients = IndexMap::new();

    walk(root, &mut |node| {
        let Some(token) = first_gradient(node) else {
            return;
        };
        let key = if node.name.trim().is_empty() {
            format!("gradient-{}", gradients.len())
        } else {
            node.name.clone()
        };
        gradients.entry(key).or_insert(token);
    });

    gradients
}
