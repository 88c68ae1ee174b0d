//! CLI definition for the Vitro command-line interface.
//!
//! This module only depends on `clap` and `std`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Package manager choice on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PackageManagerArg {
    /// Install and run with npm
    Npm,
    /// Install and run with yarn
    Yarn,
}

impl std::fmt::Display for PackageManagerArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageManagerArg::Npm => write!(f, "npm"),
            PackageManagerArg::Yarn => write!(f, "yarn"),
        }
    }
}

/// Vitro - React component experiments
///
/// Discovers `*.vitro.*` experiment files, builds the navigation tree and runs
/// a preview app that renders each experiment on its own page.
#[derive(Parser, Debug)]
#[command(name = "vitro")]
#[command(version)]
#[command(about = "Develop React components in isolated experiment pages")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Project root containing the vitro config (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the vitro config and scaffold the preview app
    Init {
        /// Package manager used to install the app
        #[arg(long, value_enum)]
        package_manager: Option<PackageManagerArg>,
        /// Skip installing the app dependencies
        #[arg(long)]
        no_install: bool,
    },
    /// Regenerate experiment pages, the tree and the experiments map
    Generate {
        /// Overwrite pages that already exist
        #[arg(long)]
        force: bool,
    },
    /// Print the experiments tree
    Tree {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Only print the folder at this path
        #[arg(long, value_name = "PATH")]
        root: Option<String>,
        /// Ignore sidebar_ordering
        #[arg(long)]
        no_ordering: bool,
    },
    /// Show the neighbours of the experiment at a URL
    Nav {
        /// Experiment URL, or a path relative to the URL prefix
        url: String,
    },
    /// Start the preview dev server (default)
    Dev {
        /// The port for the dev server
        #[arg(short, long)]
        port: Option<u16>,
        /// Pass VERBOSE=true to the preview app
        #[arg(long)]
        verbose: bool,
    },
}
