use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::figma::api_types::{FigmaFile, PublishedStyle};
use crate::figma::styles::StyleIndex;

use super::{
    extract_border_radius, extract_colors, extract_dimensions, extract_effects, extract_gradients,
    extract_spacing, extract_typography, ColorToken, DimensionTokens, GradientToken, ScaleTokens,
    ShadowToken, TypographyToken,
};

/// The JSON document written by `ftk tokens`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDocument {
    pub colors: IndexMap<String, ColorToken>,
    pub typography: IndexMap<String, TypographyToken>,
    pub effects: IndexMap<String, Vec<ShadowToken>>,
    pub spacing: ScaleTokens,
    pub border_radius: ScaleTokens,
    pub dimensions: DimensionTokens,
    pub gradients: IndexMap<String, GradientToken>,
    pub metadata: TokenMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    pub extracted_at: String,
    pub file_key: String,
    pub style_count: usize,
}

/// Run every extractor against an already-fetched file.
pub fn build_token_document(
    file: &FigmaFile,
    published: &[PublishedStyle],
    file_key: &str,
    extracted_at: DateTime<Utc>,
) -> TokenDocument {
    let styles = StyleIndex::new(file, published);
    let root = &file.document;

    let document = TokenDocument {
        colors: extract_colors(root, &styles),
        typography: extract_typography(root, &styles),
        effects: extract_effects(root, &styles),
        spacing: extract_spacing(root),
        border_radius: extract_border_radius(root),
        dimensions: extract_dimensions(root),
        gradients: extract_gradients(root),
        metadata: TokenMetadata {
            extracted_at: extracted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            file_key: file_key.to_string(),
            style_count: styles.published_count(),
        },
    };
    tracing::debug!(summary = %document.summary(), "token document assembled");
    document
}

impl TokenDocument {
    pub fn summary(&self) -> TokenSummary {
        TokenSummary {
            colors: self.colors.len(),
            typography: self.typography.len(),
            effects: self.effects.len(),
            spacing: self.spacing.values.len(),
            border_radius: self.border_radius.values.len(),
            dimensions: self.dimensions.buttons.widths.len()
                + self.dimensions.inputs.widths.len()
                + self.dimensions.cards.widths.len()
                + self.dimensions.icons.sizes.len(),
            gradients: self.gradients.len(),
        }
    }
}

/// Per-category counts printed after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenSummary {
    pub colors: usize,
    pub typography: usize,
    pub effects: usize,
    pub spacing: usize,
    pub border_radius: usize,
    pub dimensions: usize,
    pub gradients: usize,
}

impl fmt::Display for TokenSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} colors, {} text styles, {} effects, {} spacing values, {} radii, {} dimensions, {} gradients",
            self.colors,
            self.typography,
            self.effects,
            self.spacing,
            self.border_radius,
            self.dimensions,
            self.gradients
        )
    }
}
