use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which path argument an [`ConvertError::EmptyPath`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    Input,
    Output,
}

impl fmt::Display for PathRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathRole::Input => f.write_str("input"),
            PathRole::Output => f.write_str("output"),
        }
    }
}

/// Errors that can occur during document conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{0} path cannot be empty")]
    EmptyPath(PathRole),

    #[error("input file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported input file format: {0}")]
    UnsupportedFormat(String),

    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    #[error("LibreOffice not found (tried {})", .candidates.join(", "))]
    ToolNotFound { candidates: Vec<String> },

    /// The converter failed or left no artifact. `output` holds whatever it
    /// printed on stdout and stderr.
    #[error("conversion failed: {reason}\nOutput: {output}")]
    ConversionFailed { reason: String, output: String },

    #[error("failed to rename output file {} to {}: {source}", .from.display(), .to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_messages() {
        assert_eq!(
            ConvertError::EmptyPath(PathRole::Input).to_string(),
            "input path cannot be empty"
        );
        assert_eq!(
            ConvertError::EmptyPath(PathRole::Output).to_string(),
            "output path cannot be empty"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = ConvertError::NotFound(PathBuf::from("/tmp/missing.pptx"));
        assert_eq!(err.to_string(), "input file does not exist: /tmp/missing.pptx");
    }

    #[test]
    fn test_tool_not_found_lists_candidates() {
        let err = ConvertError::ToolNotFound {
            candidates: vec!["libreoffice".to_string(), "soffice".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("not found"), "got: {msg}");
        assert!(msg.contains("libreoffice, soffice"), "got: {msg}");
    }

    #[test]
    fn test_conversion_failed_includes_output() {
        let err = ConvertError::ConversionFailed {
            reason: "output file was not created".to_string(),
            output: "Error: source file could not be loaded".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("conversion failed: output file was not created"));
        assert!(msg.contains("source file could not be loaded"));
    }

    #[test]
    fn test_rename_failed_keeps_source() {
        use std::error::Error as _;

        let err = ConvertError::RenameFailed {
            from: PathBuf::from("/out/deck.pdf"),
            to: PathBuf::from("/out/final.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/out/deck.pdf"));
        assert!(err.source().is_some());
    }
}
