mod screen;
mod tokens;

pub use screen::run_screen_command;
pub use tokens::run_tokens_command;

use std::sync::Arc;

use ftk_lib::{FigmaAuth, FigmaClient, FtkError, ProgressCallback};

use crate::settings::ResolvedSettings;

fn build_client(settings: &ResolvedSettings) -> Result<FigmaClient, FtkError> {
    let auth = FigmaAuth::from_env().ok_or_else(|| {
        FtkError::Config(
            "Figma token missing; set FIGMA_TOKEN (or FIGMA_API_KEY / FIGMA_OAUTH_TOKEN)"
                .to_string(),
        )
    })?;
    FigmaClient::with_base_url_and_timeout(auth, &settings.base_url, settings.timeout)
}

/// Progress lines go to stderr so stdout only carries the final summary.
fn progress_logger() -> ProgressCallback {
    Arc::new(|msg: &str| eprintln!("{msg}"))
}
