//! Figma document model and tree helpers.
//!
//! - [`api_types`] - typed views of the Figma REST responses
//! - [`styles`] - style id to style name resolution
//! - [`traverse`] - pre-order walk and find-by-id

pub mod api_types;
pub mod styles;
pub mod traverse;

pub use api_types::{
    BoundingBox, Color, ColorStop, Effect, FigmaFile, FigmaNode, GradientPaint, NodesResponse,
    Paint, PublishedStyle, Shadow, ShadowKind, SolidPaint, StylesResponse, TypeStyle,
};
pub use styles::{StyleCategory, StyleIndex};
pub use traverse::{find_node, walk};
