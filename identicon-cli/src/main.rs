use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use identicon::config::IdenticonConfig;
use identicon::select::{self, Selection};
use identicon::Color;
use std::path::{Path, PathBuf};

mod render_png;

/// Identicon rendering CLI
#[derive(Parser)]
#[command(name = "identicon", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the identicon for one input as PNG
    Render {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        style: StyleArgs,
        /// Output pixels per identicon pixel
        #[arg(long, default_value = "1")]
        scale: usize,
        /// Output file path
        #[arg(short, long, default_value = "identicon.png")]
        output: PathBuf,
    },
    /// Show the digest and block selection for one input
    Inspect {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Render every block at every rotation as a PNG sheet
    Blocks {
        /// Cell size in pixels
        #[arg(long, default_value = "32")]
        size: u32,
        /// Background pixels between cells
        #[arg(long, default_value = "4")]
        spacing: u32,
        /// Output file path
        #[arg(short, long, default_value = "blocks.png")]
        output: PathBuf,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Input text, hashed as its UTF-8 bytes
    #[arg(long)]
    text: Option<String>,
    /// Input bytes as hex
    #[arg(long)]
    hex: Option<String>,
}

#[derive(Args)]
struct StyleArgs {
    /// TOML file with size, background and foreground
    #[arg(long)]
    config: Option<PathBuf>,
    /// Image size in pixels (at least 16)
    #[arg(long)]
    size: Option<u32>,
    /// Background color as #rrggbb
    #[arg(long)]
    background: Option<Color>,
    /// Foreground color as #rrggbb
    #[arg(long)]
    foreground: Option<Color>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Render {
            input,
            style,
            scale,
            output,
        } => cmd_render(&input, &style, scale, &output),
        Command::Inspect { input } => cmd_inspect(&input),
        Command::Blocks {
            size,
            spacing,
            output,
        } => cmd_blocks(size, spacing, &output),
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

impl InputArgs {
    fn bytes(&self) -> Result<Vec<u8>> {
        match (&self.text, &self.hex) {
            (Some(text), _) => Ok(text.as_bytes().to_vec()),
            (None, Some(hex)) => {
                hex::decode(hex.trim()).with_context(|| format!("invalid hex input '{}'", hex))
            }
            (None, None) => anyhow::bail!("either --text or --hex is required"),
        }
    }
}

/// Load the config file if given, then apply explicit flags on top.
fn load_config(style: &StyleArgs) -> Result<IdenticonConfig> {
    let mut config = match &style.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            IdenticonConfig::from_toml(&toml_str)
                .with_context(|| format!("parsing config from {}", path.display()))?
        }
        None => IdenticonConfig::default(),
    };
    if let Some(size) = style.size {
        config.size = size;
    }
    if let Some(background) = style.background {
        config.background = background;
    }
    if let Some(foreground) = style.foreground {
        config.foreground = foreground;
    }
    Ok(config)
}

fn cmd_render(input: &InputArgs, style: &StyleArgs, scale: usize, output: &Path) -> Result<()> {
    anyhow::ensure!(scale >= 1, "--scale must be at least 1");
    let data = input.bytes()?;
    let icon = load_config(style)?.build()?;

    let img = icon.make(&data);
    render_png::write_identicon_png(&img, scale, output)?;
    println!("wrote {}", output.display());
    Ok(())
}

fn cmd_inspect(input: &InputArgs) -> Result<()> {
    let data = input.bytes()?;
    let digest = select::digest(&data);
    let selection = Selection::from_digest(&digest);

    println!("Digest:    {}", hex::encode(digest));
    println!("Corner:    block {}", selection.corner.index());
    println!("Edge:      block {}", selection.edge.index());
    println!("Center:    block {}", selection.center.index());
    println!(
        "Rotation:  {} quarter turn(s)",
        selection.rotation.quarter_turns()
    );
    Ok(())
}

fn cmd_blocks(size: u32, spacing: u32, output: &Path) -> Result<()> {
    anyhow::ensure!(size >= 1, "--size must be at least 1");
    render_png::write_block_sheet_png(size, spacing, Color::WHITE, Color::BLACK, output)?;
    println!("wrote {}", output.display());
    Ok(())
}
