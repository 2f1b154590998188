//! Rendering through an external `pandoc` process.

use crate::error::ConvertError;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// A converter executable, resolved against `PATH` when possible.
#[derive(Debug, Clone)]
pub struct Pandoc {
    program: PathBuf,
}

/// One conversion: the Markdown source on disk and the metadata to apply.
#[derive(Debug)]
pub struct PandocJob<'a> {
    pub source: &'a Path,
    pub output: &'a Path,
    pub title: &'a str,
    pub author: Option<&'a str>,
}

impl PandocJob<'_> {
    /// Command-line arguments, passed as argv without a shell.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-s".into(),
            self.source.into(),
            "-o".into(),
            self.output.into(),
            "-f".into(),
            "markdown".into(),
            "-t".into(),
            "epub".into(),
            "--metadata".into(),
            format!("title={}", self.title).into(),
        ];

        if let Some(author) = self.author {
            args.push("--metadata".into());
            args.push(format!("author={}", author).into());
        }

        args
    }
}

impl Pandoc {
    pub fn new(program: &str) -> Self {
        let program = which::which(program).unwrap_or_else(|_| PathBuf::from(program));
        Self { program }
    }

    /// Write `body` to a scratch file and render it to `output`.
    ///
    /// The scratch file is unique to this call and removed when it returns.
    /// Success is decided by the exit status alone; anything the converter
    /// prints to stderr on success is logged as a warning.
    pub fn run(
        &self,
        body: &str,
        output: &Path,
        title: &str,
        author: Option<&str>,
    ) -> Result<(), ConvertError> {
        let scratch = write_scratch(body)?;
        tracing::debug!(scratch = %scratch.path().display(), "wrote document body");

        let job = PandocJob {
            source: scratch.path(),
            output,
            title,
            author,
        };
        let args = job.args();
        tracing::info!(
            program = %self.program.display(),
            args = ?args,
            "running converter"
        );

        let result = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| ConvertError::ConverterLaunch {
                program: self.program.display().to_string(),
                source,
            })?;

        check_output(result)
    }
}

fn write_scratch(body: &str) -> Result<NamedTempFile, ConvertError> {
    let mut file = tempfile::Builder::new()
        .prefix("md2epub-")
        .suffix(".md")
        .tempfile()
        .map_err(ConvertError::Scratch)?;
    file.write_all(body.as_bytes())
        .map_err(ConvertError::Scratch)?;
    file.flush().map_err(ConvertError::Scratch)?;
    Ok(file)
}

fn check_output(output: Output) -> Result<(), ConvertError> {
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        return Err(ConvertError::ConverterFailed {
            status: output.status,
            stderr: stderr.into_owned(),
        });
    }

    for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
        tracing::warn!("converter: {}", line);
    }

    Ok(())
}
