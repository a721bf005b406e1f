//! Command-line interface.

use clap::{ArgAction, Parser, Subcommand};
use sobook_config::{BookConfig, Config};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sobook")]
#[command(version, about = "Convert a Stack Overflow Documentation dump into book sources", long_about = None)]
#[command(after_help = "EXAMPLES:
    sobook -c books.toml import           Import every book marked `import = true`
    sobook import --book \"Go\"             Import a single tag, ignoring the import flags
    sobook tags > candidates.toml         List every tag, smallest first")]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory containing the compressed dump files
    #[arg(long, global = true, value_name = "DIR")]
    pub dump_dir: Option<PathBuf>,

    /// More logging (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Generate book sources (default)
    Import {
        /// Root of the generated book tree
        #[arg(long, value_name = "DIR")]
        books_dir: Option<PathBuf>,
        /// Import only this tag title (repeatable); overrides the configured import flags
        #[arg(long = "book", value_name = "TITLE")]
        books: Vec<String>,
    },
    /// List tags with their example and topic counts
    Tags,
}
impl Default for Command {
    fn default() -> Self {
        Command::Import { books_dir: None, books: vec![] }
    }
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dump_dir) = &self.dump_dir {
            config.dump_dir = dump_dir.clone();
        }
        if let Some(Command::Import { books_dir: Some(books_dir), .. }) = &self.command {
            config.books_dir = books_dir.clone();
        }
        config
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Books to import: the configured `import = true` entries, or exactly the
/// titles given with `--book` (keeping any configured display name).
pub fn select_books(config: &Config, titles: &[String]) -> Vec<BookConfig> {
    if titles.is_empty() {
        return config.imported().cloned().collect();
    }
    titles
        .iter()
        .map(|title| match config.books.iter().find(|book| &book.title == title) {
            Some(book) => BookConfig { import: true, ..book.clone() },
            None => BookConfig::new(title.clone(), "", true),
        })
        .collect()
}
