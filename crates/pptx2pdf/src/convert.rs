//! Conversion orchestration: probe for a converter, run it, move the artifact.

use std::path::{Path, PathBuf};

use crate::config::{ConvertOptions, OutputFormat, Platform};
use crate::error::ConvertError;
use crate::request::ConversionRequest;
use crate::tool::{CommandRunner, SystemRunner, ToolInvocation};

/// Drives an external converter through a [`CommandRunner`].
#[derive(Debug, Clone)]
pub struct Converter<R = SystemRunner> {
    runner: R,
    options: ConvertOptions,
}

impl Converter<SystemRunner> {
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_runner(SystemRunner, options)
    }
}

impl Default for Converter<SystemRunner> {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

impl<R: CommandRunner> Converter<R> {
    pub fn with_runner(runner: R, options: ConvertOptions) -> Self {
        Self { runner, options }
    }

    #[cfg(test)]
    fn runner(&self) -> &R {
        &self.runner
    }

    /// Convert the request's input into a PDF at its output path.
    ///
    /// Returns the path of the written PDF.
    pub fn convert(&self, request: &ConversionRequest) -> Result<PathBuf, ConvertError> {
        self.convert_on(std::env::consts::OS, request)
    }

    fn convert_on(&self, os: &str, request: &ConversionRequest) -> Result<PathBuf, ConvertError> {
        let input = request.input();
        let output = request.output();

        if !input.exists() {
            return Err(ConvertError::NotFound(input.to_path_buf()));
        }

        let platform = check_platform(os)?;
        tracing::debug!(?platform, "host platform supported");

        let binaries = self.locate_converters()?;

        let output_dir = output.parent().unwrap_or(Path::new("/"));
        let invocation = ToolInvocation::pdf_export(&binaries[0], input, output_dir);
        let log = self.execute(&invocation, &binaries)?;

        let artifact = expected_artifact(input, output_dir);
        if !artifact.exists() {
            return Err(ConvertError::ConversionFailed {
                reason: "output file was not created".to_string(),
                output: log,
            });
        }

        if artifact != output {
            std::fs::rename(&artifact, output).map_err(|source| ConvertError::RenameFailed {
                from: artifact.clone(),
                to: output.to_path_buf(),
                source,
            })?;
            tracing::info!(
                from = %artifact.display(),
                to = %output.display(),
                "moved converted file"
            );
        }

        Ok(output.to_path_buf())
    }

    /// Installed converter binaries, in configured order.
    fn locate_converters(&self) -> Result<Vec<String>, ConvertError> {
        let found: Vec<String> = self
            .options
            .converters
            .iter()
            .filter(|name| match self.runner.locate(name) {
                Some(path) => {
                    tracing::debug!(binary = %name, path = %path.display(), "found converter");
                    true
                }
                None => {
                    tracing::debug!(binary = %name, "converter not on PATH");
                    false
                }
            })
            .cloned()
            .collect();

        if found.is_empty() {
            return Err(ConvertError::ToolNotFound {
                candidates: self.options.converters.clone(),
            });
        }
        Ok(found)
    }

    /// Run `invocation` with each binary until one exits successfully.
    ///
    /// Returns the successful run's combined output.
    fn execute(
        &self,
        invocation: &ToolInvocation,
        binaries: &[String],
    ) -> Result<String, ConvertError> {
        let mut reason = String::new();
        let mut output = String::new();

        for binary in binaries {
            let attempt = invocation.with_binary(binary);
            tracing::debug!(
                binary = %attempt.binary,
                args = ?attempt.arguments,
                "running converter"
            );

            match self.runner.run(&attempt) {
                Ok(result) if result.success => return Ok(result.combined),
                Ok(result) => {
                    tracing::warn!(
                        binary = %attempt.binary,
                        status = %result.status,
                        "converter failed"
                    );
                    reason = result.status;
                    output = result.combined;
                }
                Err(e) => {
                    tracing::warn!(
                        binary = %attempt.binary,
                        error = %e,
                        "could not start converter"
                    );
                    reason = e.to_string();
                    output.clear();
                }
            }
        }

        Err(ConvertError::ConversionFailed { reason, output })
    }
}

/// Reject hosts outside [`Platform::SUPPORTED`].
pub fn check_platform(os: &str) -> Result<Platform, ConvertError> {
    Platform::from_os(os).ok_or_else(|| ConvertError::UnsupportedPlatform(os.to_string()))
}

/// Where the converter writes its PDF: `<output_dir>/<input stem>.pdf`.
pub fn expected_artifact(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(OutputFormat::Pdf.extension());
    output_dir.join(name)
}
