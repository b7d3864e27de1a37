//! Locating and running the external converter.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A single converter run: which binary, with what arguments, writing where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub binary: String,
    pub arguments: Vec<OsString>,
    pub output_dir: PathBuf,
}

impl ToolInvocation {
    /// Build the headless PDF export command for `input`, writing into `output_dir`.
    pub fn pdf_export(binary: &str, input: &Path, output_dir: &Path) -> Self {
        let arguments = vec![
            OsString::from("--headless"),
            OsString::from("--convert-to"),
            OsString::from("pdf"),
            OsString::from("--outdir"),
            output_dir.as_os_str().to_owned(),
            input.as_os_str().to_owned(),
        ];
        Self {
            binary: binary.to_string(),
            arguments,
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// The same invocation with a different binary name.
    pub fn with_binary(&self, binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
            ..self.clone()
        }
    }
}

/// Outcome of a finished converter process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    /// Human-readable exit status, e.g. `exit status: 1`.
    pub status: String,
    /// stdout followed by stderr.
    pub combined: String,
}

/// Process seam for the orchestrator.
pub trait CommandRunner {
    /// Resolve a binary name to a path, or `None` when it is not installed.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run the invocation to completion and capture its output.
    fn run(&self, invocation: &ToolInvocation) -> io::Result<ToolOutput>;
}

/// Runs real processes found on `PATH`.
///
/// `run` blocks until the child exits; there is no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let path = std::env::var_os("PATH")?;
        find_in_path(program, &path)
    }

    fn run(&self, invocation: &ToolInvocation) -> io::Result<ToolOutput> {
        let output = Command::new(&invocation.binary)
            .args(&invocation.arguments)
            .output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ToolOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            combined,
        })
    }
}

/// Search each directory of a `PATH`-style list for an executable named `program`.
pub fn find_in_path(program: &str, path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_export_arguments() {
        let inv = ToolInvocation::pdf_export(
            "libreoffice",
            Path::new("/slides/deck.pptx"),
            Path::new("/out"),
        );
        assert_eq!(inv.binary, "libreoffice");
        assert_eq!(inv.output_dir, PathBuf::from("/out"));
        let expected: Vec<OsString> = [
            "--headless",
            "--convert-to",
            "pdf",
            "--outdir",
            "/out",
            "/slides/deck.pptx",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        assert_eq!(inv.arguments, expected);
    }

    #[test]
    fn test_with_binary_keeps_arguments() {
        let inv = ToolInvocation::pdf_export("libreoffice", Path::new("/a.pptx"), Path::new("/b"));
        let fallback = inv.with_binary("soffice");
        assert_eq!(fallback.binary, "soffice");
        assert_eq!(fallback.arguments, inv.arguments);
        assert_eq!(fallback.output_dir, inv.output_dir);
    }

    #[cfg(unix)]
    #[test]
    fn test_find_in_path_requires_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("soffice");
        std::fs::write(&bin, b"#!/bin/sh\n").unwrap();

        let search = std::env::join_paths([dir.path()]).unwrap();
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o644)).unwrap();
        assert_eq!(find_in_path("soffice", &search), None);

        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(find_in_path("soffice", &search), Some(bin));
        assert_eq!(find_in_path("libreoffice", &search), None);
    }

    #[test]
    fn test_find_in_path_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("libreoffice")).unwrap();
        let search = std::env::join_paths([dir.path()]).unwrap();
        assert_eq!(find_in_path("libreoffice", &search), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_combined_output() {
        let runner = SystemRunner;
        let inv = ToolInvocation {
            binary: "sh".to_string(),
            arguments: vec!["-c".into(), "echo out; echo err >&2; exit 3".into()],
            output_dir: PathBuf::from("/tmp"),
        };
        let out = runner.run(&inv).unwrap();
        assert!(!out.success);
        assert!(out.status.contains('3'), "status: {}", out.status);
        assert_eq!(out.combined, "out\nerr\n");
    }

    #[test]
    fn test_system_runner_spawn_error() {
        let runner = SystemRunner;
        let inv = ToolInvocation::pdf_export(
            "pptx2pdf-no-such-binary",
            Path::new("/a.pptx"),
            Path::new("/tmp"),
        );
        assert!(runner.run(&inv).is_err());
        assert_eq!(runner.locate("pptx2pdf-no-such-binary"), None);
    }
}
