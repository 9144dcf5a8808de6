use thiserror::Error;

/// Classifies Public Suffix List errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PslErrorKind {
    /// Required path or source not configured
    NotConfigured,
    /// File open/read failure
    FileError,
    /// List contents unusable (no rules, missing ICANN section, etc.)
    InvalidData,
    /// Download or verification failure
    DownloadFailed,
}

/// Construction, loading and update errors
#[derive(Error, Debug)]
pub enum TldError {
    #[error("PSL error: {message}")]
    PslError { kind: PslErrorKind, message: String },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TldError {
    pub(crate) fn psl(kind: PslErrorKind, message: impl Into<String>) -> Self {
        TldError::PslError {
            kind,
            message: message.into(),
        }
    }

    /// Error kind if this is a PSL error.
    pub fn psl_kind(&self) -> Option<PslErrorKind> {
        match self {
            TldError::PslError { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TldError>;

/// Malformed-input conditions that abort host resolution.
///
/// These never reach `extract` callers; the extractor absorbs them and
/// returns a partially filled result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostError {
    /// `[` not at the start of the authority, or an unmatched `[` / `]`
    #[error("malformed square brackets in authority")]
    MalformedBracket,

    /// Bracketed content is not a valid IPv6 address
    #[error("invalid IPv6 literal")]
    InvalidIpv6Literal,

    /// Host could not be converted to its ASCII (punycode) form
    #[error("host cannot be IDNA-encoded")]
    InvalidIdnaHost,
}
