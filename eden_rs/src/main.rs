//! # eden
//!
//! Command line front end for `eden-site`.
//!
//! ## Usage
//!
//! ```bash
//! # Render the built-in page to ./index.html
//! eden render
//!
//! # Render edited content with images served from a CDN
//! eden render --content site.toml --asset-base https://cdn.example.com/eden --out dist/index.html
//!
//! # Validate a content file (exit status 1 on problems)
//! eden check --content site.toml
//!
//! # Starting point for a content file
//! eden dump-content > site.toml
//! ```
//!
//! Logs go to stderr. `RUST_LOG` overrides `--log-level`.

mod cli;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use eden_site::{MenuState, RenderOptions, SiteContent, render_page};
use tracing::{debug, info, warn};

use cli::{CheckArgs, Cli, Command, DumpArgs, RenderArgs};

fn load_content(path: Option<&Path>) -> Result<SiteContent> {
    match path {
        Some(path) => {
            debug!("Loading content from {}", path.display());
            SiteContent::load(path)
                .with_context(|| format!("Failed to load content from {}", path.display()))
        }
        None => {
            debug!("Using built-in content");
            Ok(SiteContent::default())
        }
    }
}

fn render(args: RenderArgs) -> Result<ExitCode> {
    let content = load_content(args.content.as_deref())?;

    // The page renders dangling anchors as-is; only report them.
    for issue in content.issues() {
        warn!("{}", issue);
    }

    let options = RenderOptions {
        asset_base: args.asset_base,
        menu: MenuState::from(args.menu_open),
        copyright_year: args.year,
    };
    let html = render_page(&content, &options);

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&args.out, &html)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    info!("Page written to {} ({} bytes)", args.out.display(), html.len());
    println!("{}", args.out.display());
    Ok(ExitCode::SUCCESS)
}

fn check(args: CheckArgs) -> Result<ExitCode> {
    let content = load_content(args.content.as_deref())?;

    for link in content.placeholder_links() {
        println!("notice: {} link is a placeholder ({})", link.label, link.href);
    }

    let issues = content.issues();
    if issues.is_empty() {
        println!("content ok");
        return Ok(ExitCode::SUCCESS);
    }

    for issue in &issues {
        println!("error: {}", issue);
    }
    warn!("{} problem(s) found", issues.len());
    Ok(ExitCode::FAILURE)
}

fn dump_content(args: DumpArgs) -> Result<ExitCode> {
    let text = SiteContent::default()
        .to_string_as(args.format.into())
        .context("Failed to serialize built-in content")?;
    print!("{}", text);
    Ok(ExitCode::SUCCESS)
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Render(args) => render(args),
        Command::Check(args) => check(args),
        Command::DumpContent(args) => dump_content(args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries command output; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("eden v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[eden] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
