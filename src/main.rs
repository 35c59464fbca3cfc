use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hifz_notebook::{config, Notebook, PageIndex};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Inspect the Mushaf page index and a student's mistake notebook
#[derive(Debug, Parser)]
#[command(name = "hifz_notebook", version)]
struct Cli {
  /// Database file (defaults to config.toml, then DATABASE_PATH, then data/hifz.db)
  #[arg(long, global = true)]
  db: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Page a verse is printed on
  Locate { surah: u8, ayah: u16 },
  /// Verse span and surahs of a page
  Page { page: u16 },
  /// A student's mistakes, optionally limited to one page with its phrase groups
  Mistakes {
    student: i64,
    #[arg(long)]
    page: Option<u16>,
  },
  /// Mistake statistics for a student
  Stats { student: i64 },
}

#[derive(Serialize)]
struct Located {
  surah: u8,
  ayah: u16,
  page: u16,
}

fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hifz_notebook=info".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let cli = Cli::parse();
  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!("{}", e);
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> CliResult {
  match cli.command {
    // Page lookups don't need the database
    Command::Locate { surah, ayah } => {
      let page = PageIndex::madani().locate_page(surah, ayah)?;
      print_json(&Located { surah, ayah, page })
    }
    Command::Page { page } => print_json(&PageIndex::madani().page_range(page)?),
    Command::Mistakes { student, page } => {
      let notebook = open(cli.db)?;
      match page {
        Some(page) => {
          let review = notebook.page_review(student, page)?;
          print_json(&review.summary(None))
        }
        None => print_json(&notebook.list_mistakes(student)?),
      }
    }
    Command::Stats { student } => print_json(&open(cli.db)?.stats(student)?),
  }
}

fn open(db: Option<PathBuf>) -> hifz_notebook::Result<Notebook> {
  let path = db.unwrap_or_else(config::load_database_path);
  Notebook::open(&path)
}

fn print_json<T: Serialize>(value: &T) -> CliResult {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
