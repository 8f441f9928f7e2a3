//! Single-node layout export for `ftk screen`.

use serde::Serialize;

use crate::color::{color_string, DEFAULT_SHADOW_COLOR};
use crate::figma::api_types::{FigmaNode, GradientPaint, NodesResponse, Paint, TypeStyle};
use crate::figma::traverse::find_node;
use crate::tokens::typography::line_height;
use crate::tokens::Scalar;
use crate::{FtkError, Result};

/// Figma URLs carry node ids as `12-34`; the API expects `12:34`.
pub fn normalize_node_id(raw: &str) -> String {
    raw.trim().replace('-', ":")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radii: Option<Vec<Scalar>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<ScreenFill>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<ScreenEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ScreenText>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ScreenNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub x: Scalar,
    pub y: Scalar,
    pub width: Scalar,
    pub height: Scalar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub mode: String,
    pub padding: Padding,
    pub gap: Scalar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_align: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Padding {
    pub top: Scalar,
    pub right: Scalar,
    pub bottom: Scalar,
    pub left: Scalar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreenFill {
    Solid {
        color: String,
    },
    GradientLinear {
        stops: Vec<ScreenStop>,
    },
    GradientRadial {
        stops: Vec<ScreenStop>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenStop {
    pub position: Scalar,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenEffect {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Scalar,
    pub y: Scalar,
    pub blur: Scalar,
    pub spread: Scalar,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Scalar>,
    pub line_height: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
}

/// Locate `node_id` in a nodes response, searching each returned subtree.
pub fn find_in_response<'a>(response: &'a NodesResponse, node_id: &str) -> Result<&'a FigmaNode> {
    if let Some(Some(container)) = response.nodes.get(node_id) {
        if let Some(node) = find_node(&container.document, node_id) {
            return Ok(node);
        }
    }
    response
        .nodes
        .values()
        .flatten()
        .find_map(|container| find_node(&container.document, node_id))
        .ok_or_else(|| FtkError::NodeNotFound(node_id.to_string()))
}

/// Recursively copy a node's layout-relevant attributes.
pub fn extract_screen(node: &FigmaNode) -> ScreenNode {
    ScreenNode {
        id: node.id.clone(),
        name: node.name.clone(),
        node_type: node.node_type.clone(),
        position: node.absolute_bounding_box.map(|bb| Position {
            x: Scalar(bb.x),
            y: Scalar(bb.y),
            width: Scalar(bb.width),
            height: Scalar(bb.height),
        }),
        layout: layout(node),
        corner_radius: node.corner_radius.filter(|r| *r > 0.0).map(Scalar),
        corner_radii: node
            .rectangle_corner_radii
            .as_ref()
            .map(|radii| radii.iter().copied().map(Scalar).collect()),
        fills: node.fills.iter().filter_map(fill).collect(),
        effects: node
            .effects
            .iter()
            .filter_map(|e| e.shadow())
            .map(|(kind, s)| {
                let offset = s.offset.map(|o| (o.x, o.y)).unwrap_or((0.0, 0.0));
                ScreenEffect {
                    kind: kind.as_str(),
                    x: Scalar(offset.0),
                    y: Scalar(offset.1),
                    blur: Scalar(s.radius),
                    spread: Scalar(s.spread.unwrap_or(0.0)),
                    color: s
                        .color
                        .map(|c| color_string(&c, 1.0))
                        .unwrap_or_else(|| DEFAULT_SHADOW_COLOR.to_string()),
                }
            })
            .collect(),
        text: text(node),
        children: node.children.iter().map(extract_screen).collect(),
    }
}

fn layout(node: &FigmaNode) -> Option<Layout> {
    let mode = node.layout_mode.clone()?;
    let px = |v: Option<f64>| Scalar(v.unwrap_or(0.0));
    Some(Layout {
        mode,
        padding: Padding {
            top: px(node.padding_top),
            right: px(node.padding_right),
            bottom: px(node.padding_bottom),
            left: px(node.padding_left),
        },
        gap: px(node.item_spacing),
        primary_axis_align: node.primary_axis_align_items.clone(),
        counter_axis_align: node.counter_axis_align_items.clone(),
    })
}

fn gradient_stops(gradient: &GradientPaint) -> Vec<ScreenStop> {
    gradient
        .gradient_stops
        .iter()
        .map(|s| ScreenStop {
            position: Scalar(s.position),
            color: color_string(&s.color, 1.0),
        })
        .collect()
}

fn fill(paint: &Paint) -> Option<ScreenFill> {
    match paint {
        Paint::Solid(solid) => solid.color.map(|c| ScreenFill::Solid {
            color: color_string(&c, solid.opacity.unwrap_or(1.0)),
        }),
        Paint::GradientLinear(g) => Some(ScreenFill::GradientLinear {
            stops: gradient_stops(g),
        }),
        Paint::GradientRadial(g) => Some(ScreenFill::GradientRadial {
            stops: gradient_stops(g),
        }),
        Paint::Other => None,
    }
}

fn text(node: &FigmaNode) -> Option<ScreenText> {
    if node.characters.is_none() && !(node.is_text() && node.style.is_some()) {
        return None;
    }
    let default_style = TypeStyle::default();
    let style = node.style.as_ref().unwrap_or(&default_style);
    Some(ScreenText {
        content: node.characters.clone(),
        font_family: style.font_family.clone(),
        font_size: style.font_size.map(Scalar),
        font_weight: style.font_weight.map(Scalar),
        line_height: line_height(style),
        text_align: style.text_align_horizontal.clone(),
    })
}
