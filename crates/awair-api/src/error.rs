use thiserror::Error;

/// Top-level error type for the `awair-api` crate.
///
/// Covers every failure mode a caller can branch on: authentication,
/// rate limiting, other HTTP failures, transport faults, and response
/// validation. `awair-core` surfaces these unchanged.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The access token is invalid or lacks access to the requested data
    /// (HTTP 401 or 403).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// No credentials were supplied for an operation that requires them.
    #[error("No authentication supplied")]
    MissingCredentials,

    // ── Rate limiting ───────────────────────────────────────────────
    /// The API quota was exceeded (HTTP 429). Callers implement their
    /// own backoff; the client never retries.
    #[error("Awair API rate limit exceeded -- retry later")]
    RateLimited { retry_after_secs: Option<u64> },

    // ── HTTP ────────────────────────────────────────────────────────
    /// The API rejected the request parameters (HTTP 400).
    #[error("The supplied parameters were invalid: {message}")]
    BadRequest { message: String },

    /// The requested endpoint does not exist (HTTP 404).
    #[error("The Awair API returned an unexpected HTTP 404")]
    NotFound,

    /// Any other non-2xx status.
    #[error("Unexpected HTTP status {status}")]
    Http { status: u16, body: String },

    /// A 2xx response body carrying a vendor `errors` array
    /// (holdover from the GraphQL-era API).
    #[error("Error querying the Awair API: {message}")]
    Api { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Data ────────────────────────────────────────────────────────
    /// A response body failed schema validation. The message is serde's
    /// diagnostic and names the missing or malformed field.
    #[error("Invalid {context} response: {message}")]
    Validation { context: String, message: String },

    /// Per-call query options were rejected client-side, before any
    /// request was made.
    #[error("Invalid query options: {message}")]
    InvalidOptions { message: String },
}

impl Error {
    /// Build a [`Validation`](Self::Validation) error from a serde failure,
    /// tagged with the response shape being decoded.
    pub fn validation(context: &str, err: &serde_json::Error) -> Self {
        Self::Validation {
            context: context.to_owned(),
            message: err.to_string(),
        }
    }

    /// Returns `true` if this error indicates bad or missing credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::MissingCredentials)
    }

    /// Returns `true` if the API quota was exceeded.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Returns `true` if this is a transient error worth retrying
    /// (the client itself never retries).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::RateLimited { .. } => true,
            _ => false,
        }
    }

    /// The HTTP status behind this error, if there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::BadRequest { .. } => Some(400),
            Self::NotFound => Some(404),
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
