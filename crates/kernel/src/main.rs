//! Menudrawer CLI
//!
//! Renders navigation markup through the mobile menu pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use menudrawer_kernel::block::{NAVIGATION_BLOCK, RenderedBlock};
use menudrawer_kernel::config::Config;
use menudrawer_kernel::error::NavError;
use menudrawer_kernel::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "menudrawer", version, about = "Render navigation blocks with mobile menus")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a block's markup through the render filters.
    Render {
        /// File containing the rendered block markup.
        #[arg(long)]
        markup: PathBuf,

        /// JSON file with the block attributes.
        #[arg(long)]
        attrs: Option<PathBuf>,

        /// Block name.
        #[arg(long, default_value = NAVIGATION_BLOCK)]
        block: String,

        /// Render the block this many times on one page.
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Template parts directory (overrides TEMPLATE_PARTS_DIR).
        #[arg(long)]
        parts_dir: Option<PathBuf>,

        /// Prepend page-level stylesheets to the output.
        #[arg(long)]
        with_page_styles: bool,
    },

    /// Print the attribute schema of a block type as JSON.
    Attributes {
        /// Block name.
        #[arg(default_value = NAVIGATION_BLOCK)]
        block: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::from_env().context("failed to load configuration")?;

    match cli.command {
        Command::Render {
            markup,
            attrs,
            block,
            count,
            parts_dir,
            with_page_styles,
        } => {
            if let Some(dir) = parts_dir {
                config.template_parts_dir = dir;
            }
            info!(parts = %config.template_parts_dir.display(), "Configuration loaded");

            let html = std::fs::read_to_string(&markup)
                .with_context(|| format!("failed to read markup from {}", markup.display()))?;
            let block = match attrs {
                Some(path) => {
                    let json = std::fs::read_to_string(&path)
                        .with_context(|| format!("failed to read attributes from {}", path.display()))?;
                    RenderedBlock::from_json(&block, &json).context("failed to parse attributes")?
                }
                None => RenderedBlock::new(&block, Default::default()),
            };

            let state = AppState::new(&config);
            for problem in state.blocks().validate_attributes(&block.name, &block.attributes) {
                tracing::warn!(block = %block.name, "{problem}");
            }

            let page = state.page();
            let rendered: Vec<String> = (0..count.max(1))
                .map(|_| page.render_block(&block, html.clone()))
                .collect();

            if with_page_styles {
                print!("{}", page.styles().render());
            }
            println!("{}", rendered.join("\n"));
        }
        Command::Attributes { block } => {
            let state = AppState::new(&config);
            let definition = state
                .blocks()
                .get(&block)
                .ok_or_else(|| NavError::UnknownBlockType(block.clone()))?;
            println!("{}", serde_json::to_string_pretty(&definition.attributes)?);
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
