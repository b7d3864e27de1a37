//! Argument resolution: turns raw CLI paths into a validated [`ConversionRequest`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::{Format, OutputFormat};
use crate::error::{ConvertError, PathRole};

/// A validated conversion job with absolute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    input: PathBuf,
    output: PathBuf,
    format: Format,
}

impl ConversionRequest {
    /// Validate `input`, derive the output path when `output` is absent or
    /// empty, and resolve both to absolute paths.
    ///
    /// `format_hint` is advisory: the output is always PDF.
    pub fn resolve(
        input: impl AsRef<Path>,
        output: Option<&Path>,
        format_hint: Option<&str>,
    ) -> Result<Self, ConvertError> {
        let input = input.as_ref();
        if input.as_os_str().is_empty() {
            return Err(ConvertError::EmptyPath(PathRole::Input));
        }
        if !input.exists() {
            return Err(ConvertError::NotFound(input.to_path_buf()));
        }

        let format = detect_format(input)?;

        if let Some(hint) = format_hint.filter(|h| !h.is_empty()) {
            if OutputFormat::parse(hint).is_none() {
                tracing::warn!(hint, "ignoring format hint, output is always PDF");
            }
        }

        let output = match output.filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => ensure_pdf_extension(path),
            None => default_output_path(input),
        };

        Ok(Self {
            input: std::path::absolute(input)?,
            output: std::path::absolute(output)?,
            format,
        })
    }

    /// Absolute path of the existing input file.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Absolute path the PDF will be written to. Always ends in `.pdf`.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Detected input format.
    pub fn format(&self) -> Format {
        self.format
    }
}

fn detect_format(input: &Path) -> Result<Format, ConvertError> {
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| ConvertError::UnsupportedFormat("no file extension".to_string()))?;

    Format::from_extension(ext).ok_or_else(|| ConvertError::UnsupportedFormat(format!(".{ext}")))
}

/// The input path with its extension replaced by `.pdf`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(OutputFormat::Pdf.extension())
}

fn ensure_pdf_extension(path: &Path) -> PathBuf {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(OutputFormat::Pdf.extension()));
    if is_pdf {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".pdf");
    PathBuf::from(name)
}
