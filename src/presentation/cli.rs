//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// drilltree - saved-view sidebar and drill path tools
#[derive(Parser, Debug)]
#[command(name = "drilltree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the saved-view tree
    Tree {
        /// Workspace file (JSON)
        #[arg(short, long, default_value = "workspace.json")]
        workspace: PathBuf,

        /// Only show views whose title contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Keep every child of a matching folder
        #[arg(long)]
        keep_subtree: bool,
    },

    /// Print the recycle bin
    Recycle {
        /// Workspace file (JSON)
        #[arg(short, long, default_value = "workspace.json")]
        workspace: PathBuf,

        /// Only show items whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Print the drill path of a chart
    Drill {
        /// Chart config file (JSON)
        #[arg(short, long)]
        chart: PathBuf,

        /// Active drill level, overrides the file's drill option
        #[arg(short, long)]
        active: Option<usize>,
    },

    /// Add a folder to the workspace
    AddFolder {
        /// Workspace file (JSON)
        #[arg(short, long, default_value = "workspace.json")]
        workspace: PathBuf,

        /// Folder name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Parent folder id (root when omitted)
        #[arg(short, long)]
        parent: Option<String>,

        /// Position among siblings (appended when omitted)
        #[arg(long)]
        position: Option<usize>,
    },

    /// Browse the sidebar interactively with live search
    Browse {
        /// Workspace file (JSON)
        #[arg(short, long, default_value = "workspace.json")]
        workspace: PathBuf,
    },
}
