use indexmap::IndexMap;
use serde::Serialize;

use crate::figma::api_types::{FigmaNode, TypeStyle};
use crate::figma::styles::{StyleCategory, StyleIndex};
use crate::figma::traverse::walk;

use super::scalar::Scalar;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Scalar>,
    pub line_height: String,
    pub letter_spacing: String,
}

impl TypographyToken {
    fn from_style(style: &TypeStyle) -> Self {
        Self {
            font_family: style.font_family.clone(),
            font_size: style.font_size.map(Scalar),
            font_weight: style.font_weight.map(Scalar),
            line_height: line_height(style),
            letter_spacing: style
                .letter_spacing
                .map(|ls| format!("{}px", Scalar(ls)))
                .unwrap_or_else(|| "0px".to_string()),
        }
    }
}

/// Pixel value, then percent of font size, then `auto` for intrinsic heights.
pub fn line_height(style: &TypeStyle) -> String {
    if let Some(px) = style.line_height_px {
        return format!("{}px", Scalar(px));
    }
    if let Some(pct) = style.line_height_percent_font_size {
        return format!("{}%", Scalar(pct));
    }
    if style.line_height_unit.as_deref() == Some("INTRINSIC_%") {
        return "auto".to_string();
    }
    "normal".to_string()
}

/// `text-{fontSize}-{fontWeight}` for text nodes without a text style.
pub fn synthesized_key(style: &TypeStyle) -> String {
    let part = |v: Option<f64>| v.map(|n| Scalar(n).to_string()).unwrap_or_default();
    format!("text-{}-{}", part(style.font_size), part(style.font_weight))
}

pub fn extract_typography(
    root: &FigmaNode,
    styles: &StyleIndex,
) -> IndexMap<String, TypographyToken> {
    let mut typography = IndexMap::new();

    walk(root, &mut |node| {
        if !node.is_text() {
            return;
        }
        let Some(style) = &node.style else {
            return;
        };
        let key = styles
            .resolve(node, StyleCategory::Text)
            .map(str::to_owned)
            .unwrap_or_else(|| synthesized_key(style));

        typography
            .entry(key)
            .or_insert_with(|| TypographyToken::from_style(style));
    });

    typography
}
