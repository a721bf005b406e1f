//! sobook - Stack Overflow Documentation to book sources

mod cli;

use crate::cli::{Cli, Command, select_books};
use clap::Parser;
use derive_more::{Display, Error};
use exn::ResultExt;
use sobook_config::Config;
use sobook_dump::Dump;
use sobook_library::{ImportSession, Linker};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, exn::Exn<ErrorKind>>;

/// Top-level failure categories; the error tree underneath says why.
#[derive(Debug, Display, Error)]
enum ErrorKind {
    #[display("configuration error")]
    Config,
    #[display("could not load the dump")]
    Dump,
    #[display("import failed")]
    Import,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:?}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    let config = cli.apply(config);
    match cli.command.unwrap_or_default() {
        Command::Import { books, .. } => import(&config, &books),
        Command::Tags => tags(&config),
    }
}

fn import(config: &Config, titles: &[String]) -> Result<()> {
    let books = select_books(config, titles);
    if books.is_empty() {
        tracing::warn!("no books selected; set `import = true` in the configuration or pass --book");
        return Ok(());
    }
    let dump = Dump::load(&config.dump_dir).or_raise(|| ErrorKind::Dump)?;
    let session = ImportSession::new(dump, &config.books_dir);
    let report = session.run(&books).or_raise(|| ErrorKind::Import)?;
    print!("{report}");
    Ok(())
}

fn tags(config: &Config) -> Result<()> {
    let linker = Linker::new(Dump::load(&config.dump_dir).or_raise(|| ErrorKind::Dump)?);
    for stats in linker.tag_stats() {
        println!("{stats}");
    }
    Ok(())
}
