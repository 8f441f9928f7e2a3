//! Design-token extraction.
//!
//! Each category extractor walks the whole tree on its own and keeps the
//! first value seen for a key; later nodes resolving to the same key are
//! dropped even when they carry a more specific style name.

pub mod colors;
pub mod dimensions;
pub mod document;
pub mod effects;
pub mod gradients;
pub mod radius;
pub mod scalar;
pub mod scale;
pub mod spacing;
pub mod typography;

pub use colors::{extract_colors, ColorToken};
pub use dimensions::{extract_dimensions, BoxSizes, ComponentKind, DimensionTokens, IconSizes};
pub use document::{build_token_document, TokenDocument, TokenMetadata, TokenSummary};
pub use effects::{extract_effects, ShadowToken};
pub use gradients::{extract_gradients, GradientToken};
pub use radius::extract_border_radius;
pub use scalar::Scalar;
pub use scale::{bucket, ScaleTokens, RADIUS_STEPS, SPACING_STEPS};
pub use spacing::extract_spacing;
pub use typography::{extract_typography, TypographyToken};
