// porter-stem: stem words read from stdin.
//
// Usage:
//   porter-stem [--plurals-only] [--pairs] [--stopwords FILE]
//   porter-stem --stopwords FILE --list-stopwords
//
// The stopword file can also be given through PORTER_STOPWORDS.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use porter_cli::{OutputFormat, STOPWORDS_ENV};
use porter_core::StemMode;
use porter_stem::PorterHandle;

#[derive(Parser)]
#[command(name = "porter-stem", version)]
#[command(about = "Stem English words read from stdin with the Porter algorithm")]
struct Args {
    /// Only strip plurals and apply the final cleanup step
    #[arg(short, long)]
    plurals_only: bool,

    /// Print `word -> stem` instead of the bare stem
    #[arg(long)]
    pairs: bool,

    /// File with one stopword per line (`#` starts a comment line)
    #[arg(short, long, env = STOPWORDS_ENV)]
    stopwords: Option<PathBuf>,

    /// Print the loaded stopwords, sorted, and exit
    #[arg(long)]
    list_stopwords: bool,
}

fn main() {
    porter_cli::init_logging();
    let args = Args::parse();

    let handle = PorterHandle::new();
    if let Some(path) = &args.stopwords {
        porter_cli::load_stopwords(&handle, path).unwrap_or_else(|e| porter_cli::fatal(&e));
    }

    if args.list_stopwords {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        for word in handle.stopwords().sorted() {
            if writeln!(out, "{word}").is_err() {
                return;
            }
        }
        let _ = out.flush();
        return;
    }

    let mode = StemMode::from_plurals_only(args.plurals_only);
    let format = if args.pairs {
        OutputFormat::Pairs
    } else {
        OutputFormat::Stems
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let out = io::BufWriter::new(stdout.lock());
    let stats = porter_cli::stem_stream(&handle, mode, format, stdin.lock(), out, io::stderr())
        .unwrap_or_else(|e| porter_cli::fatal(&e.to_string()));
    tracing::info!(stemmed = stats.stemmed, skipped = stats.skipped, "done");
}
