use thiserror::Error;

/// Errors surfaced by the lottery checker library.
///
/// Extraction itself never fails: missing tiers come back empty. These
/// variants cover the request boundary and the I/O collaborators.
#[derive(Error, Debug)]
pub enum LottoError {
    #[error("ticket number must be 6 digits: '{0}'")]
    InvalidTicket(String),

    #[error("invalid draw date '{input}': {reason}")]
    InvalidDrawDate { input: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

impl LottoError {
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDrawDate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// True for malformed caller input, which the boundary reports as a
    /// client error rather than a server fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidTicket(_) | Self::InvalidDrawDate { .. })
    }
}

pub type Result<T, E = LottoError> = std::result::Result<T, E>;
