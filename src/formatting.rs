use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use ftk_lib::{FtkError, TokenSummary};

/// Print an error with its remediation to stderr and return exit code 1.
pub fn render_error(err: FtkError) -> ExitCode {
    tracing::debug!(error = ?err, "run failed");
    let payload = err.to_payload();
    let colorize = io::stderr().is_terminal();
    let mut buf = String::new();
    writeln!(buf, "{} {}", color("Error:", "31", colorize), payload.message).ok();
    if let Some(hint) = &payload.remediation {
        writeln!(buf, "{} {}", color("Hint:", "33", colorize), hint).ok();
    }
    eprint!("{buf}");
    ExitCode::from(1)
}

/// Human-readable summary of a token run.
pub fn format_token_summary(summary: &TokenSummary, output: &Path, colorize: bool) -> String {
    let rows = [
        ("Colors", summary.colors),
        ("Typography", summary.typography),
        ("Effects", summary.effects),
        ("Spacing values", summary.spacing),
        ("Border radii", summary.border_radius),
        ("Dimensions", summary.dimensions),
        ("Gradients", summary.gradients),
    ];

    let mut buf = String::new();
    writeln!(
        buf,
        "{} Design tokens written to {}",
        color("OK", "32", colorize),
        output.display()
    )
    .ok();
    for (label, count) in rows {
        writeln!(buf, "  {label:<15} {count}").ok();
    }
    buf
}

pub fn format_screen_summary(name: &str, children: usize, output: &Path, colorize: bool) -> String {
    format!(
        "{} Screen \"{}\" ({} top-level children) written to {}",
        color("OK", "32", colorize),
        name,
        children,
        output.display()
    )
}

fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\u{1b}[{code}m{text}\u{1b}[0m")
    } else {
        text.to_string()
    }
}
