use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ftk")]
#[command(
    version,
    about = "Figma Token Kit - Extract design tokens and screen layouts from Figma files",
    long_about = "Figma Token Kit (FTK)\n\nModes:\n- tokens: walk the whole file and write a design-token JSON document.\n- screen: export the layout subtree of one node.\n\nAuthentication uses FIGMA_TOKEN (or FIGMA_API_KEY / FIGMA_OAUTH_TOKEN). The file key comes from --file-key, FIGMA_FILE_KEY, the config file, or the built-in default."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML); defaults to ./ftk.toml when present. CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract design tokens from a Figma file
    Tokens {
        #[arg(long, help = "Figma file key (overrides FIGMA_FILE_KEY and config)")]
        file_key: Option<String>,

        #[arg(long, short, help = "Output file path (default theme/figma-tokens.json)")]
        output: Option<PathBuf>,
    },

    /// Export the layout tree of a single node
    Screen {
        #[arg(
            value_name = "NODE_ID",
            help = "Node id as row-col or row:col (default from config)"
        )]
        node_id: Option<String>,

        #[arg(long, help = "Figma file key (overrides FIGMA_FILE_KEY and config)")]
        file_key: Option<String>,

        #[arg(long, short, help = "Output file path (default theme/screen-data.json)")]
        output: Option<PathBuf>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
