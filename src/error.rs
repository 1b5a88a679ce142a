use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeatcmpError>;

#[derive(Debug, Error)]
pub enum FeatcmpError {
    #[error("invalid url `{0}`: URLs must start with http:// or https://")]
    InvalidUrl(String),

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to render {url}: {reason}")]
    Render { url: String, reason: String },

    /// Defensive: the rendered path was entered for a host that matches
    /// neither marketplace adapter. Unreachable while routing and
    /// extraction share [`crate::types::Platform`].
    #[error("unsupported platform for {0}")]
    UnsupportedPlatform(String),

    #[error("error scraping {url}: {reason}")]
    Extract { url: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl FeatcmpError {
    pub fn fetch(url: &str, reason: impl Into<String>) -> Self {
        Self::Fetch { url: url.into(), reason: reason.into() }
    }

    pub fn render(url: &str, reason: impl Into<String>) -> Self {
        Self::Render { url: url.into(), reason: reason.into() }
    }

    pub fn extract(url: &str, reason: impl Into<String>) -> Self {
        Self::Extract { url: url.into(), reason: reason.into() }
    }
}

/* Conversions so `?` works smoothly */
impl From<std::io::Error> for FeatcmpError {
    fn from(e: std::io::Error) -> Self {
        FeatcmpError::Other(e.to_string())
    }
}
impl From<serde_json::Error> for FeatcmpError {
    fn from(e: serde_json::Error) -> Self {
        FeatcmpError::Other(e.to_string())
    }
}
impl From<reqwest::Error> for FeatcmpError {
    fn from(e: reqwest::Error) -> Self {
        FeatcmpError::Other(e.to_string())
    }
}
