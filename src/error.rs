use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failures of a single Markdown to EPUB conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read input file {}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Frontmatter is missing")]
    MissingFrontmatter,

    #[error("Title is missing in the frontmatter")]
    MissingTitle,

    #[error("Title '{0}' does not contain any characters usable in a file name")]
    EmptyFilename(String),

    #[error("Failed to prepare scratch file")]
    Scratch(#[source] std::io::Error),

    #[error("Failed to launch converter '{program}'")]
    ConverterLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Converter exited with {status}{}", format_stderr(.stderr))]
    ConverterFailed { status: ExitStatus, stderr: String },
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}
