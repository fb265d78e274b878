use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("invalid storefront URL \"{input}\": {reason}")]
    InvalidOrigin { input: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ScraperError {
    /// `true` for failures raised while talking to the storefront (network,
    /// status, or body decoding), as opposed to rejecting the input URL
    /// before any request was made.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        !matches!(self, ScraperError::InvalidOrigin { .. })
    }

    /// HTTP status that aborted the run, when there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ScraperError::UnexpectedStatus { status, .. } => Some(*status),
            ScraperError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
