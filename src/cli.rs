//! Command-line interface for repo-shell.
//!
//! Every invocation hydrates the shell from the saved session, runs one
//! command against it and exits. State changes are written back through the
//! shell, so consecutive invocations behave like one long-running session.

use crate::layout::selector::format_track;
use crate::layout::{LayoutGeometry, PanelBounds};
use crate::notify::ErrorChannel;
use crate::repo::GitHubFetcher;
use crate::session::FileStore;
use crate::shell::{Shell, ShellOptions};
use crate::state::{ApplicationState, NodeKind, PanelWidths};
use anyhow::Context;
use clap::{Parser, Subcommand};
use repo_shell_config::{Config, LogLevel};
use std::path::PathBuf;

/// Default workspace width used when none is given on the command line
const DEFAULT_CONTAINER_WIDTH_PX: f64 = 1208.0;

/// repo-shell - browse a GitHub repository tree with a persistent three-panel layout
#[derive(Parser, Debug)]
#[command(name = "repo-shell")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default: ~/.config/repo-shell/config.yaml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved session, overriding the config
    #[arg(long, value_name = "DIR", global = true)]
    pub state_dir: Option<PathBuf>,

    /// Log level for the debug log (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level, global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a repository tree from a GitHub URL
    Load {
        /// Repository URL, e.g. https://github.com/owner/repo
        url: String,
    },
    /// Show the current repository, layout and error
    Status,
    /// Print the loaded file tree
    Tree,
    /// Move a panel boundary
    Resize {
        /// Boundary index: 0 between tree and content, 1 between content and side
        #[arg(long)]
        boundary: usize,

        /// Pixels to move the boundary (negative moves left)
        #[arg(long, allow_hyphen_values = true)]
        delta: f64,

        /// Workspace width in pixels
        #[arg(long, default_value_t = DEFAULT_CONTAINER_WIDTH_PX)]
        width: f64,
    },
    /// Restore the default panel ratio
    ResetLayout,
    /// Forget the repository and the saved session
    Reset,
    /// Dismiss the error currently shown
    ClearError,
    /// Show which layout a viewport width selects
    Viewport {
        /// Viewport width in pixels
        width: f64,
    },
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::from_name(value).ok_or_else(|| {
        format!("invalid log level '{value}' (expected off, error, warn, info, debug or trace)")
    })
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => Config::load()?,
    };
    if cli.log_level.is_none() {
        crate::debug::set_log_level(config.log_level);
    }
    Ok(config)
}

/// Run the parsed command; returns the process exit code
pub fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = load_config(&cli)?;
    let state_dir = cli
        .state_dir
        .clone()
        .unwrap_or_else(|| config.state_dir());
    log::info!("Using state directory {:?}", state_dir);

    let store = FileStore::new(&state_dir);
    let mut shell = Shell::new(Box::new(store), ShellOptions::from_config(&config));

    let code = match cli.command {
        Commands::Load { url } => {
            let fetcher = GitHubFetcher::new(config.github_api_base.as_str()).with_env_token();
            let loaded = shell.load_repository(&url, &fetcher);
            print_banner(&shell);
            if loaded {
                let state = shell.state();
                if let Some(repository) = &state.repository_info {
                    println!(
                        "Loaded {} ({} entries)",
                        repository.full_name(),
                        state.file_tree.len()
                    );
                }
                0
            } else {
                1
            }
        }
        Commands::Status => {
            for line in status_lines(shell.state()) {
                println!("{line}");
            }
            print_banner(&shell);
            0
        }
        Commands::Tree => {
            let state = shell.state();
            if state.file_tree.is_empty() {
                println!("No repository loaded.");
            }
            for line in tree_lines(state) {
                println!("{line}");
            }
            0
        }
        Commands::Resize {
            boundary,
            delta,
            width,
        } => {
            shell.set_container(PanelBounds::new(0.0, 0.0, width, 0.0));
            if !shell.resize_boundary(boundary, delta) {
                println!("Layout unchanged.");
            }
            println!("Panels: {}", format_widths(&shell.state().panel_widths));
            print_banner(&shell);
            0
        }
        Commands::ResetLayout => {
            shell.reset_panel_widths();
            println!("Panels: {}", format_widths(&shell.state().panel_widths));
            print_banner(&shell);
            0
        }
        Commands::Reset => {
            shell.reset();
            println!("Session cleared.");
            print_banner(&shell);
            0
        }
        Commands::ClearError => {
            match shell.clear_error() {
                Some(channel) => println!("Dismissed {} error.", channel_name(channel)),
                None => println!("No error to dismiss."),
            }
            0
        }
        Commands::Viewport { width } => {
            shell.on_viewport_resize(width);
            match shell.geometry() {
                LayoutGeometry::Grid { template } => println!("grid: {template}"),
                LayoutGeometry::Drawer { open } => {
                    println!("drawer ({})", if open { "open" } else { "closed" })
                }
            }
            0
        }
    };

    shell.unmount();
    Ok(code)
}

fn print_banner(shell: &Shell) {
    if let Some(banner) = shell.visible_error() {
        eprintln!("[{}] {}", channel_name(banner.channel), banner.message);
    }
}

fn channel_name(channel: ErrorChannel) -> &'static str {
    match channel {
        ErrorChannel::Session => "session",
        ErrorChannel::Transient => "notice",
        ErrorChannel::Operation => "load",
    }
}

/// Weights as `a:b:c`
pub fn format_widths(widths: &PanelWidths) -> String {
    widths
        .weights()
        .iter()
        .map(|w| format_track(*w))
        .collect::<Vec<_>>()
        .join(":")
}

/// Summary shown by `status`
pub fn status_lines(state: &ApplicationState) -> Vec<String> {
    let repository = state
        .repository_info
        .as_ref()
        .map(|repo| repo.full_name())
        .unwrap_or_else(|| "(none)".to_string());
    let locator = if state.repository_locator.is_empty() {
        "(empty)"
    } else {
        state.repository_locator.as_str()
    };
    vec![
        format!("Repository: {repository}"),
        format!("Locator:    {locator}"),
        format!("Entries:    {}", state.file_tree.len()),
        format!("Panels:     {}", format_widths(&state.panel_widths)),
    ]
}

/// One line per tree entry, indented by depth
pub fn tree_lines(state: &ApplicationState) -> Vec<String> {
    state
        .file_tree
        .iter()
        .map(|node| {
            let depth = node.path.matches('/').count();
            let name = node.path.rsplit('/').next().unwrap_or(&node.path);
            let indent = "  ".repeat(depth);
            match (node.kind, node.size) {
                (NodeKind::Tree, _) => format!("{indent}{name}/"),
                (NodeKind::Blob, Some(size)) => format!("{indent}{name} ({size} B)"),
                (_, _) => format!("{indent}{name}"),
            }
        })
        .collect()
}
