//! Layout Lab - terminal playground for responsive layout techniques
//!
//! Without a subcommand this starts the TUI. Subcommands give headless,
//! scriptable access to the catalog, the custom layouts and rendering.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use layoutlab::cli::{
    ConfigArgs, CustomArgs, DesignsArgs, PresetsArgs, PropertiesArgs, RenderArgs,
};
use layoutlab::config::Config;
use layoutlab::constants::{APP_BINARY_NAME, LOG_FILE_NAME};

/// Layout Lab - explore flexbox, grid and media query layouts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keep custom layouts in memory only (TUI); nothing is read or written
    #[arg(long)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the built-in layout presets
    Presets(PresetsArgs),
    /// Browse the design gallery
    Designs(DesignsArgs),
    /// List the CSS properties demonstrated for a family
    Properties(PropertiesArgs),
    /// Show, set or reset the saved custom layouts
    Custom(CustomArgs),
    /// Render a layout to a standalone HTML page
    Render(RenderArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return run_tui_app(cli.ephemeral);
    };

    init_stderr_logging();

    let result = match command {
        Command::Presets(args) => args.execute(),
        Command::Designs(args) => args.execute(),
        Command::Properties(args) => args.execute(),
        Command::Custom(args) => args.execute(),
        Command::Render(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
    Ok(())
}

/// CLI commands log warnings to stderr; `RUST_LOG` overrides.
fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// The TUI owns the terminal, so logs go to a file in the config directory.
fn init_file_logging() -> Result<()> {
    let dir = Config::config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

#[cfg(feature = "ratatui")]
fn run_tui_app(ephemeral: bool) -> Result<()> {
    use layoutlab::clipboard::SystemClipboard;
    use layoutlab::preview::PreviewWriter;
    use layoutlab::session::Session;
    use layoutlab::store::{CustomLayoutStore, FileStorage};
    use layoutlab::tui::{self, AppState};

    init_file_logging()?;

    let config = Config::load().with_context(|| {
        format!("Invalid configuration. Fix it with `{APP_BINARY_NAME} config set`")
    })?;
    let store = if ephemeral {
        tracing::info!("Ephemeral session, custom layouts are not persisted");
        CustomLayoutStore::in_memory()
    } else {
        CustomLayoutStore::new(FileStorage::new(config.data_dir()?))
    };
    let preview = PreviewWriter::new(config.preview_file()?);
    tracing::info!("Live preview at {}", preview.path().display());

    let mut state = AppState::new(
        Session::new(store),
        config,
        Box::new(SystemClipboard),
        Some(preview),
    );

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;
    result
}

#[cfg(not(feature = "ratatui"))]
fn run_tui_app(_ephemeral: bool) -> Result<()> {
    init_file_logging()?;
    anyhow::bail!(
        "{APP_BINARY_NAME} was built without the terminal UI. Run `{APP_BINARY_NAME} --help` for commands."
    )
}
