use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use ftk_lib::{run_tokens, TokenRunOptions};

use crate::formatting::{format_token_summary, render_error};
use crate::settings::{format_effective_settings, load_config, resolve_settings};

use super::{build_client, progress_logger};

/// Run the tokens command.
pub async fn run_tokens_command(
    config_path: Option<PathBuf>,
    verbose: bool,
    file_key: Option<String>,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err),
    };
    let settings = resolve_settings(file_key, output, config.tokens_path(), &config);
    if verbose {
        eprintln!(
            "{}",
            format_effective_settings(&settings, config_path.as_deref())
        );
    }

    let client = match build_client(&settings) {
        Ok(client) => client,
        Err(err) => return render_error(err),
    };

    let options = TokenRunOptions {
        file_key: settings.file_key.clone(),
        output_path: settings.output_path.clone(),
    };
    let progress = progress_logger();
    let run = match run_tokens(&client, &options, Some(&progress)).await {
        Ok(run) => run,
        Err(err) => return render_error(err),
    };

    print!(
        "{}",
        format_token_summary(
            &run.summary,
            &run.output_path,
            std::io::stdout().is_terminal()
        )
    );
    ExitCode::SUCCESS
}
