//! Figma Token Kit (FTK) Library
//!
//! Extracts design tokens (colors, typography, shadows, spacing, radii,
//! component dimensions and gradients) from a Figma file, and exports the
//! layout subtree of a single node.
//!
//! # Module Overview
//!
//! - [`figma_client`] - Figma REST API client
//! - [`figma`] - Typed document model, style resolution and traversal
//! - [`color`] - Figma color to hex/rgba conversion
//! - [`tokens`] - Category extractors and the token document
//! - [`screen`] - Single-node layout export
//! - [`pipeline`] - Fetch, extract and write drivers
//! - [`config`] - Configuration file support
//!
//! # Example
//!
//! ```no_run
//! use ftk_lib::{run_tokens, FigmaAuth, FigmaClient, TokenRunOptions};
//!
//! # async fn example() -> ftk_lib::Result<()> {
//! let auth = FigmaAuth::from_env().expect("FIGMA_TOKEN");
//! let client = FigmaClient::new(auth)?;
//! let run = run_tokens(
//!     &client,
//!     &TokenRunOptions {
//!         file_key: "FILE_KEY".into(),
//!         output_path: "theme/figma-tokens.json".into(),
//!     },
//!     None,
//! )
//! .await?;
//! println!("{}", run.summary);
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod figma;
pub mod figma_client;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod screen;
pub mod tokens;

pub use color::{to_hex, to_rgba_or_hex};
pub use config::Config;
pub use error::{ErrorCategory, ErrorPayload, FtkError, Result};
pub use figma::{FigmaFile, FigmaNode, StyleIndex};
pub use figma_client::{FigmaAuth, FigmaClient};
pub use pipeline::{
    extract_tokens, run_screen, run_tokens, write_document, ScreenRunOptions, TokenRun,
    TokenRunOptions,
};
pub use progress::ProgressCallback;
pub use screen::{extract_screen, normalize_node_id, ScreenNode};
pub use tokens::{build_token_document, TokenDocument, TokenSummary};
