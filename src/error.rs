use thiserror::Error;

/// Result alias used by the browser session and the tool layer
pub type Result<T> = std::result::Result<T, BrowserError>;

/// Failures surfaced to the calling agent.
///
/// Every variant renders to text that starts with `Error`, which is what MCP
/// clients of the original server key on. Internally nothing inspects the
/// text; the tool layer classifies on `Result::Err` alone.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrowserError {
    #[error("Error: browser not started. Please start a browser first.")]
    NotStarted,

    #[error("Error: browser is already running. Please close it first.")]
    AlreadyRunning,

    #[error("Error unsupported browser: {0}")]
    UnsupportedBrowser(String),

    #[error("Error starting browser: {0}")]
    LaunchFailed(String),

    #[error("Error navigating to url: {0}")]
    NavigationFailed(String),

    #[error("Error reading page text: {0}")]
    ReadFailed(String),

    #[error("Error closing browser: {0}")]
    CloseFailed(String),

    #[error("Error: unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Error: invalid arguments for '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },
}

/// Coarse classification of a [`BrowserError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation invoked in the wrong session state
    Usage,
    /// The browser automation driver failed
    Driver,
    /// Unrecognised engine name
    UnsupportedInput,
    /// Unknown tool or malformed argument bundle
    Protocol,
}

impl BrowserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BrowserError::NotStarted | BrowserError::AlreadyRunning => ErrorKind::Usage,
            BrowserError::UnsupportedBrowser(_) => ErrorKind::UnsupportedInput,
            BrowserError::LaunchFailed(_)
            | BrowserError::NavigationFailed(_)
            | BrowserError::ReadFailed(_)
            | BrowserError::CloseFailed(_) => ErrorKind::Driver,
            BrowserError::UnknownTool(_) | BrowserError::InvalidArguments { .. } => ErrorKind::Protocol,
        }
    }
}
