use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use content_blocks_config::{Config, DEFAULT_DOCUMENT_GLOB};
use content_blocks_engine::{BlockDocument, io, parsing::roundtrip};
use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(
    name = "content-blocks",
    version,
    about = "Split studio documents into editable blocks and back"
)]
struct Cli {
    /// Content root; overrides `content_root` from the config file
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a markdown document and print its blocks as JSON
    Parse {
        file: PathBuf,

        /// Also write the block list to this path
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Render a stored JSON block list back to markdown
    Render { file: PathBuf },

    /// Verify that headings, code, quotes, images and dividers survive a round trip
    Check { file: PathBuf },

    /// Replace the body of one block, addressed by position
    Rewrite(RewriteArgs),

    /// List documents under the content root with their block counts
    List,

    /// Write a config file pointing at a content root
    Init { content_root: PathBuf },
}

#[derive(clap::Args)]
struct RewriteArgs {
    file: PathBuf,

    /// Zero-based block position
    #[arg(short, long)]
    index: usize,

    /// Replacement body
    #[arg(short, long)]
    body: String,

    /// Refuse the edit unless the block still has this body
    #[arg(long)]
    expect: Option<String>,

    /// Write the result back to FILE instead of printing it
    #[arg(short, long)]
    write: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            None
        }
    };
    let content_root = cli
        .root
        .clone()
        .or_else(|| config.as_ref().map(|c| c.content_root.clone()));

    match cli.command {
        Command::Init { content_root } => init(content_root),
        Command::Parse { file, out } => parse(&resolve(&file, content_root.as_deref()), out),
        Command::Render { file } => render(&resolve(&file, content_root.as_deref())),
        Command::Check { file } => {
            if !check(&resolve(&file, content_root.as_deref()))? {
                process::exit(1);
            }
            Ok(())
        }
        Command::Rewrite(args) => {
            let path = resolve(&args.file, content_root.as_deref());
            rewrite(&path, args)
        }
        Command::List => {
            let root = content_root.context(
                "no content root: pass --root or set content_root in the config file",
            )?;
            let pattern = config
                .as_ref()
                .map_or(DEFAULT_DOCUMENT_GLOB, |c| c.document_glob.as_str());
            list(&root, pattern)
        }
    }
}

fn init(content_root: PathBuf) -> Result<()> {
    let content_root = fs::canonicalize(&content_root)
        .with_context(|| format!("content root {} not found", content_root.display()))?;
    io::validate_content_root(&content_root)?;
    Config::new(content_root).save()?;
    log::info!("Config saved to {}", Config::config_path().display());
    Ok(())
}

/// Relative paths that don't exist in the working directory are looked up
/// under the content root.
fn resolve(file: &Path, content_root: Option<&Path>) -> PathBuf {
    match content_root {
        Some(root) if file.is_relative() && !file.exists() => root.join(file),
        _ => file.to_path_buf(),
    }
}

fn read_markdown(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn parse(path: &Path, out: Option<PathBuf>) -> Result<()> {
    let document = BlockDocument::from_markdown(&read_markdown(path)?);
    log::info!("{}: {} blocks", path.display(), document.len());

    if let Some(out) = out {
        io::write_blocks_json(&out, &document)?;
        log::info!("Wrote block list to {}", out.display());
    }
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

fn render(path: &Path) -> Result<()> {
    let document = io::read_blocks_json(path)?;
    println!("{}", document.to_markdown());
    Ok(())
}

/// Returns whether every stable block survived the round trip.
fn check(path: &Path) -> Result<bool> {
    let report = roundtrip::verify_markdown(&read_markdown(path)?);
    if report.is_clean() {
        println!("{}: {} stable blocks round-trip cleanly", path.display(), report.checked);
        return Ok(true);
    }

    for mismatch in &report.mismatches {
        println!(
            "stable block {}: expected {}, got {}",
            mismatch.position,
            serde_json::to_string(&mismatch.expected)?,
            serde_json::to_string(&mismatch.actual)?,
        );
    }
    log::error!(
        "{}: {} of {} stable blocks changed",
        path.display(),
        report.mismatches.len(),
        report.checked
    );
    Ok(false)
}

fn rewrite(path: &Path, args: RewriteArgs) -> Result<()> {
    let mut document = BlockDocument::from_markdown(&read_markdown(path)?);

    let previous = match &args.expect {
        Some(expected) => document.replace_body_if_unchanged(args.index, expected, args.body),
        None => document.replace_body(args.index, args.body),
    }
    .with_context(|| format!("cannot rewrite {}", path.display()))?;
    log::debug!("replaced block {} (was {previous:?})", args.index);

    let markdown = document.to_markdown();
    if args.write {
        fs::write(path, format!("{markdown}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("Rewrote block {} in {}", args.index, path.display());
    } else {
        println!("{markdown}");
    }
    Ok(())
}

fn list(root: &Path, pattern: &str) -> Result<()> {
    for file in io::scan_documents(root, pattern)? {
        let text = io::read_document(file.relative_path(), root)?;
        let document = BlockDocument::from_markdown(&text);
        let stored = if file.blocks_path().to_path(root).exists() {
            "\tstored"
        } else {
            ""
        };
        println!(
            "{}\t{}\t{} blocks{stored}",
            file.relative_path(),
            file.display_name(),
            document.len()
        );
    }
    Ok(())
}
