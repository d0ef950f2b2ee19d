// porter-cli: shared utilities for the command-line stemmer.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use porter_core::{StemError, StemMode};
use porter_stem::PorterHandle;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a stopword file.
pub const STOPWORDS_ENV: &str = "PORTER_STOPWORDS";

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Words listed in a stopword file: one per line, blank lines and lines
/// starting with `#` skipped, surrounding whitespace trimmed.
pub fn parse_stopwords(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

/// Read a stopword file and install it on `handle`.
pub fn load_stopwords(handle: &PorterHandle, path: &Path) -> Result<usize, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let words = parse_stopwords(&text);
    handle.set_stopwords(words.iter().copied());
    debug!(path = %path.display(), count = handle.stopword_count(), "stopwords loaded");
    Ok(handle.stopword_count())
}

/// Output layout for [`stem_stream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One stem per line.
    #[default]
    Stems,
    /// `word -> stem` per line.
    Pairs,
}

/// Counters reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamStats {
    pub stemmed: usize,
    pub skipped: usize,
}

/// Stem every whitespace-separated word of `input` into `output`.
///
/// Words the stemmer rejects are reported on `errors` and skipped; I/O
/// failures end the run.
pub fn stem_stream<R, W, E>(
    handle: &PorterHandle,
    mode: StemMode,
    format: OutputFormat,
    input: R,
    mut output: W,
    mut errors: E,
) -> io::Result<StreamStats>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut stats = StreamStats::default();
    for line in input.lines() {
        let line = line?;
        for word in line.split_whitespace() {
            match handle.stem_with_mode(word, mode) {
                Ok(stem) => {
                    match format {
                        OutputFormat::Stems => writeln!(output, "{stem}")?,
                        OutputFormat::Pairs => writeln!(output, "{word} -> {stem}")?,
                    }
                    stats.stemmed += 1;
                }
                Err(e @ StemError::InputTooLong { .. }) => {
                    writeln!(errors, "skipped: {e}")?;
                    stats.skipped += 1;
                }
                Err(e) => return Err(io::Error::other(e)),
            }
        }
    }
    output.flush()?;
    Ok(stats)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
