use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tabrs_core::config::constants;

#[derive(Subcommand)]
#[command(version, about, long_about = None)]
pub enum Commands {
    /// Compile a tab-set JSON file to a standalone HTML document
    Build {
        /// Tab-set source file
        source: PathBuf,
        /// Watch
        #[clap(short, long)]
        watch: bool,
        /// Output path
        #[clap(short = 'o', long, default_value = "tabs.html")]
        output_path: PathBuf,
    },

    /// Compile a tab-set source and persist it in the record store
    Save {
        /// Tab-set source file
        source: PathBuf,
        /// Record title (defaults to "Untitled")
        #[clap(short, long)]
        title: Option<String>,
        /// Store file
        #[clap(short, long, default_value = constants::DEFAULT_STORE_FILE)]
        store: PathBuf,
    },

    /// List stored tab sets, newest first
    List {
        /// Store file
        #[clap(short, long, default_value = constants::DEFAULT_STORE_FILE)]
        store: PathBuf,
    },

    /// Print one stored tab set
    Show {
        /// Record id
        id: String,
        /// Print only the stored HTML document
        #[clap(long)]
        html: bool,
        /// Store file
        #[clap(short, long, default_value = constants::DEFAULT_STORE_FILE)]
        store: PathBuf,
    },

    /// Reparse a source file, regenerate the document, and update a record
    Update {
        /// Record id
        id: String,
        /// Tab-set source file
        source: PathBuf,
        /// New record title
        #[clap(short, long)]
        title: Option<String>,
        /// Store file
        #[clap(short, long, default_value = constants::DEFAULT_STORE_FILE)]
        store: PathBuf,
    },

    /// Delete a stored tab set
    Delete {
        /// Record id
        id: String,
        /// Store file
        #[clap(short, long, default_value = constants::DEFAULT_STORE_FILE)]
        store: PathBuf,
    },
}

/// TabRS Command
#[derive(Parser)]
#[command(about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}
