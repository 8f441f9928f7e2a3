use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use ftk_lib::{run_screen, ScreenRunOptions};

use crate::formatting::{format_screen_summary, render_error};
use crate::settings::{format_effective_settings, load_config, resolve_settings};

use super::{build_client, progress_logger};

/// Run the screen command.
pub async fn run_screen_command(
    config_path: Option<PathBuf>,
    verbose: bool,
    node_id: Option<String>,
    file_key: Option<String>,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err),
    };
    let settings = resolve_settings(file_key, output, config.screen_path(), &config);
    let node_id = node_id.unwrap_or_else(|| config.node_id.clone());
    if verbose {
        eprintln!(
            "{} node={}",
            format_effective_settings(&settings, config_path.as_deref()),
            node_id
        );
    }

    let client = match build_client(&settings) {
        Ok(client) => client,
        Err(err) => return render_error(err),
    };

    let options = ScreenRunOptions {
        file_key: settings.file_key.clone(),
        node_id,
        output_path: settings.output_path.clone(),
    };
    let progress = progress_logger();
    let screen = match run_screen(&client, &options, Some(&progress)).await {
        Ok(screen) => screen,
        Err(err) => return render_error(err),
    };

    println!(
        "{}",
        format_screen_summary(
            &screen.name,
            screen.children.len(),
            &options.output_path,
            std::io::stdout().is_terminal()
        )
    );
    ExitCode::SUCCESS
}
