//! Fetch → extract → write drivers for the token and screen exports.
//!
//! Both runs are fail-fast: any fetch error aborts before the output file is
//! touched, so a failed run leaves the previous file in place.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::figma_client::FigmaClient;
use crate::output::write_json;
use crate::progress::{report, ProgressCallback};
use crate::screen::{extract_screen, find_in_response, normalize_node_id, ScreenNode};
use crate::tokens::{build_token_document, TokenDocument, TokenSummary};
use crate::{FtkError, Result};

#[derive(Debug, Clone)]
pub struct TokenRunOptions {
    pub file_key: String,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ScreenRunOptions {
    pub file_key: String,
    /// `row-col` or `row:col`.
    pub node_id: String,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct TokenRun {
    pub document: TokenDocument,
    pub summary: TokenSummary,
    pub output_path: PathBuf,
}

/// Fetch styles, then the file, and build the token document in memory.
pub async fn extract_tokens(
    client: &FigmaClient,
    file_key: &str,
    progress: Option<&ProgressCallback>,
) -> Result<TokenDocument> {
    report(progress, "Fetching styles\u{2026}");
    let styles = client.fetch_styles(file_key).await?;
    tracing::info!(count = styles.meta.styles.len(), "fetched styles");

    report(progress, "Fetching file\u{2026}");
    let file = client.fetch_file(file_key).await?;
    tracing::info!(name = %file.name, "fetched file");

    report(progress, "Extracting tokens\u{2026}");
    Ok(build_token_document(
        &file,
        &styles.meta.styles,
        file_key,
        Utc::now(),
    ))
}

pub async fn run_tokens(
    client: &FigmaClient,
    options: &TokenRunOptions,
    progress: Option<&ProgressCallback>,
) -> Result<TokenRun> {
    let document = extract_tokens(client, &options.file_key, progress).await?;
    write_document(&options.output_path, &document)?;
    let summary = document.summary();
    tracing::info!(path = %options.output_path.display(), %summary, "tokens written");

    Ok(TokenRun {
        document,
        summary,
        output_path: options.output_path.clone(),
    })
}

pub fn write_document(path: &Path, document: &TokenDocument) -> Result<()> {
    write_json(path, document)
}

pub async fn run_screen(
    client: &FigmaClient,
    options: &ScreenRunOptions,
    progress: Option<&ProgressCallback>,
) -> Result<ScreenNode> {
    let node_id = normalize_node_id(&options.node_id);
    if node_id.is_empty() {
        return Err(FtkError::Config("node id must not be empty".into()));
    }

    report(progress, &format!("Fetching node {node_id}\u{2026}"));
    let response = client.fetch_node(&options.file_key, &node_id).await?;
    let node = find_in_response(&response, &node_id).map_err(|e| {
        tracing::error!(node = %node_id, "node not found in Figma response");
        e
    })?;

    report(progress, &format!("Extracting layout of \"{}\"\u{2026}", node.name));
    let screen = extract_screen(node);
    write_json(&options.output_path, &screen)?;
    tracing::info!(path = %options.output_path.display(), "screen data written");

    Ok(screen)
}
