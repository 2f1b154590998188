use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Convert a Markdown file with a frontmatter header into an EPUB
#[derive(Parser, Debug)]
#[command(name = "md2epub", version, about)]
pub struct Cli {
    /// Path to the input Markdown file. Its frontmatter must contain a `title`.
    pub input: PathBuf,

    /// Converter executable used to render the EPUB
    #[arg(long, env = "MD2EPUB_PANDOC", default_value = "pandoc")]
    pub pandoc: String,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter derived from `-v` flags; `RUST_LOG` takes precedence.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
