/// Supported input document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pptx,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pptx" => Some(Self::Pptx),
            _ => None,
        }
    }
}

/// Output formats the converter can be asked for.
///
/// Only PDF is produced; the `-f` hint on the command line is advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
}

impl OutputFormat {
    /// Parse a format hint such as `"pdf"` or `"PDF"`.
    pub fn parse(hint: &str) -> Option<Self> {
        match hint.trim().to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
        }
    }
}

/// Host platform families the converter knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
}

impl Platform {
    /// Allow-list of platforms with a headless LibreOffice CLI.
    pub const SUPPORTED: &'static [Platform] = &[Platform::Linux, Platform::MacOs];

    /// Map a `std::env::consts::OS` value onto a supported platform.
    pub fn from_os(os: &str) -> Option<Self> {
        Self::SUPPORTED
            .iter()
            .copied()
            .find(|platform| platform.os_name() == os)
    }

    /// The platform this binary was compiled for, if supported.
    pub fn current() -> Option<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// The matching `std::env::consts::OS` value.
    pub fn os_name(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
        }
    }
}

/// Converter binaries probed when no other list is configured, in order.
pub const DEFAULT_CONVERTERS: &[&str] = &["libreoffice", "soffice"];

/// Options controlling the conversion process.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Candidate converter binary names, tried in order.
    pub converters: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            converters: DEFAULT_CONVERTERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
