use crate::cli::Cli;
use crate::error::ConvertError;
use crate::filename;
use crate::frontmatter;
use crate::pandoc::Pandoc;
use std::fs;
use std::path::{Path, PathBuf};

pub fn convert(cli: &Cli) -> Result<PathBuf, ConvertError> {
    let pandoc = Pandoc::new(&cli.pandoc);
    convert_file(&cli.input, &pandoc)
}

/// Read `input`, validate its frontmatter and render the body to an EPUB
/// next to it. Returns the path of the EPUB.
pub fn convert_file(input: &Path, pandoc: &Pandoc) -> Result<PathBuf, ConvertError> {
    let content = fs::read_to_string(input).map_err(|source| ConvertError::InputRead {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::info!(input = %input.display(), bytes = content.len(), "read input");

    let header = frontmatter::extract(&content).ok_or(ConvertError::MissingFrontmatter)?;
    tracing::debug!(fields = header.len(), "parsed frontmatter");
    let metadata = header.metadata()?;

    let output_path = filename::output_path(input, &metadata.title)?;
    tracing::info!(output = %output_path.display(), title = %metadata.title, "resolved output");

    let body = frontmatter::strip(&content);

    pandoc.run(
        body,
        &output_path,
        &metadata.title,
        metadata.author.as_deref(),
    )?;

    Ok(output_path)
}
