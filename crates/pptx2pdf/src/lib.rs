pub mod config;
pub mod convert;
pub mod error;
pub mod request;
pub mod tool;

use std::path::{Path, PathBuf};

use config::ConvertOptions;
use convert::Converter;
use error::{ConvertError, PathRole};
use request::ConversionRequest;

/// Convert the PPTX at `input` into a PDF at `output`.
///
/// Returns the path of the written PDF.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<PathBuf, ConvertError> {
    convert_with_options(input, output, &ConvertOptions::default())
}

/// Convert the PPTX at `input` into a PDF at `output` with options.
pub fn convert_with_options(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<PathBuf, ConvertError> {
    let input = input.as_ref();
    let output = output.as_ref();

    if input.as_os_str().is_empty() {
        return Err(ConvertError::EmptyPath(PathRole::Input));
    }
    if output.as_os_str().is_empty() {
        return Err(ConvertError::EmptyPath(PathRole::Output));
    }

    let request = ConversionRequest::resolve(input, Some(output), None)?;
    Converter::new(options.clone()).convert(&request)
}

/// Validate raw command-line paths into a [`ConversionRequest`].
///
/// A missing or empty `output` is derived from `input`.
pub fn resolve(
    input: impl AsRef<Path>,
    output: Option<&Path>,
    format_hint: Option<&str>,
) -> Result<ConversionRequest, ConvertError> {
    ConversionRequest::resolve(input, output, format_hint)
}
