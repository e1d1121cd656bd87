//! drilltree CLI
//!
//! Usage: drilltree [--json] [--color <WHEN>] [-v...] <COMMAND>
//!
//! Commands:
//!   tree        Print the saved-view tree
//!   recycle     Print the recycle bin
//!   drill       Print the drill path of a chart
//!   add-folder  Add a folder to the workspace
//!   browse      Browse the sidebar interactively

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use drilltree::config::{Config, Verbosity};
use drilltree::presentation::{Cli, Commands};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::load_or_default(Some(&cwd));

    let ui = UiContext::new(cli.json, cli.color, &config);
    init_tracing(config.output.verbosity, cli.verbose, ui.color);
    if !cli.json {
        print_config_warnings(&warnings, ui.unicode, ui.color);
    }

    match cli.command {
        Commands::Tree {
            workspace,
            search,
            keep_subtree,
        } => commands::cmd_tree(&workspace, search.as_deref(), keep_subtree, &ui, &config),
        Commands::Recycle { workspace, search } => {
            commands::cmd_recycle(&workspace, search.as_deref(), &ui)
        }
        Commands::Drill { chart, active } => commands::cmd_drill(&chart, active, &ui),
        Commands::AddFolder {
            workspace,
            name,
            parent,
            position,
        } => commands::cmd_add_folder(&workspace, name, parent, position, &ui, &config),
        Commands::Browse { workspace } => commands::cmd_browse(&workspace, &ui, &config),
    }
}

/// Log to stderr; `-vvv` turns on trace output
fn init_tracing(configured: Verbosity, flag_count: u8, ansi: bool) {
    let level = if flag_count >= 3 {
        LevelFilter::TRACE
    } else {
        level_for(configured.with_flag_count(flag_count))
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .without_time()
        .init();
}

fn level_for(verbosity: Verbosity) -> LevelFilter {
    match verbosity {
        Verbosity::Quiet => LevelFilter::ERROR,
        Verbosity::Normal => LevelFilter::WARN,
        Verbosity::Verbose => LevelFilter::INFO,
        Verbosity::Debug => LevelFilter::DEBUG,
    }
}
