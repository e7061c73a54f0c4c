//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use eden_site::ContentFormat;

#[derive(Parser, Debug)]
#[command(name = "eden")]
#[command(about = "Render and check the Trader's Eden page")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        global = true,
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page to an HTML file
    Render(RenderArgs),
    /// Validate a content file
    Check(CheckArgs),
    /// Print the built-in content document
    DumpContent(DumpArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Content file (TOML, or JSON with a .json extension); built-in content when omitted
    #[arg(long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Output file
    #[arg(long, short, value_name = "FILE", default_value = "index.html")]
    pub out: PathBuf,

    /// Base path or URL for images, replacing the content's own
    #[arg(long, value_name = "URL")]
    pub asset_base: Option<String>,

    /// Render with the mobile menu expanded
    #[arg(long)]
    pub menu_open: bool,

    /// Footer copyright year (default: current year)
    #[arg(long, value_name = "N")]
    pub year: Option<i32>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Content file to validate; the built-in content when omitted
    #[arg(long, value_name = "FILE")]
    pub content: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = DumpFormat::Toml)]
    pub format: DumpFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DumpFormat {
    Toml,
    Json,
}

impl From<DumpFormat> for ContentFormat {
    fn from(format: DumpFormat) -> Self {
        match format {
            DumpFormat::Toml => ContentFormat::Toml,
            DumpFormat::Json => ContentFormat::Json,
        }
    }
}
