//! Figma API response types for parsing JSON from the Figma REST API.
//!
//! Only the attributes the extractors read are modelled; every other field
//! in Figma's payloads is ignored during deserialization.

use serde::Deserialize;
use std::collections::HashMap;

/// A Figma file response from the files endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaFile {
    #[serde(default)]
    pub name: String,
    pub document: FigmaNode,
    /// Styles referenced by nodes in this file, keyed by style id.
    #[serde(default)]
    pub styles: HashMap<String, FileStyle>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStyle {
    #[serde(default)]
    pub key: Option<String>,
    pub name: String,
}

/// Response from the file styles endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StylesResponse {
    #[serde(default)]
    pub meta: StylesMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StylesMeta {
    #[serde(default)]
    pub styles: Vec<PublishedStyle>,
}

/// A published style record (`GET /v1/files/:key/styles`).
#[derive(Debug, Clone, Deserialize)]
pub struct PublishedStyle {
    pub key: String,
    #[serde(default)]
    pub node_id: Option<String>,
    pub name: String,
}

/// Response from the nodes endpoint. Figma reports unknown ids as `null`.
#[derive(Debug, Deserialize)]
pub struct NodesResponse {
    #[serde(default)]
    pub nodes: HashMap<String, Option<NodeContainer>>,
}

#[derive(Debug, Deserialize)]
pub struct NodeContainer {
    pub document: FigmaNode,
}

/// One element of the design tree. Children are owned by their parent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub children: Vec<FigmaNode>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Style references by category (`fill`, `text`, `effect`, ...).
    #[serde(default)]
    pub styles: HashMap<String, String>,
    pub layout_mode: Option<String>,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub item_spacing: Option<f64>,
    pub primary_axis_align_items: Option<String>,
    pub counter_axis_align_items: Option<String>,
    pub corner_radius: Option<f64>,
    pub rectangle_corner_radii: Option<Vec<f64>>,
    pub absolute_bounding_box: Option<BoundingBox>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub style: Option<TypeStyle>,
    pub characters: Option<String>,
}

impl FigmaNode {
    /// Width and height from the bounding box, falling back to raw attributes.
    pub fn dimensions(&self) -> (Option<f64>, Option<f64>) {
        match &self.absolute_bounding_box {
            Some(bb) => (Some(bb.width), Some(bb.height)),
            None => (self.width, self.height),
        }
    }

    pub fn is_text(&self) -> bool {
        self.node_type == "TEXT"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub line_height_px: Option<f64>,
    pub line_height_percent_font_size: Option<f64>,
    pub line_height_unit: Option<String>,
    pub letter_spacing: Option<f64>,
    pub text_align_horizontal: Option<String>,
}

/// RGBA color from Figma (0.0-1.0 range).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Paint {
    #[serde(rename = "SOLID")]
    Solid(SolidPaint),
    #[serde(rename = "GRADIENT_LINEAR")]
    GradientLinear(GradientPaint),
    #[serde(rename = "GRADIENT_RADIAL")]
    GradientRadial(GradientPaint),
    /// Image, angular/diamond gradients and any paint type added later.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolidPaint {
    pub color: Option<Color>,
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientPaint {
    #[serde(default)]
    pub gradient_stops: Vec<ColorStop>,
    #[serde(default)]
    pub gradient_handle_positions: Vec<Vector>,
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Effect {
    #[serde(rename = "DROP_SHADOW")]
    DropShadow(Shadow),
    #[serde(rename = "INNER_SHADOW")]
    InnerShadow(Shadow),
    /// Layer and background blurs.
    #[serde(other)]
    Other,
}

impl Effect {
    pub fn shadow(&self) -> Option<(ShadowKind, &Shadow)> {
        match self {
            Effect::DropShadow(s) => Some((ShadowKind::Drop, s)),
            Effect::InnerShadow(s) => Some((ShadowKind::Inner, s)),
            Effect::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowKind {
    Drop,
    Inner,
}

impl ShadowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadowKind::Drop => "DROP_SHADOW",
            ShadowKind::Inner => "INNER_SHADOW",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Shadow {
    pub color: Option<Color>,
    pub offset: Option<Vector>,
    #[serde(default)]
    pub radius: f64,
    pub spread: Option<f64>,
}
