use crate::normalize::normalize_key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Extraction strategy, keyed by URL host. Closed set: the two
/// script-heavy marketplaces get dedicated adapters, everything else
/// goes through the generic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Amazon,
    Flipkart,
    Generic,
}

impl Platform {
    pub fn detect(url: &Url) -> Self {
        let host = url.host_str().unwrap_or("").to_ascii_lowercase();
        if host.contains("amazon") {
            Platform::Amazon
        } else if host.contains("flipkart") {
            Platform::Flipkart
        } else {
            Platform::Generic
        }
    }

    /// Marketplace pages are script-generated; a plain fetch returns an
    /// empty shell, so they go through the rendering fetch.
    pub fn requires_render(self) -> bool {
        !matches!(self, Platform::Generic)
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Amazon => "amazon",
            Platform::Flipkart => "flipkart",
            Platform::Generic => "generic",
        }
    }
}

/// Normalized feature-name → feature-value mapping for one page.
///
/// Keys are unique after normalization; a later write for the same
/// normalized key overwrites the earlier one. Built fresh per extraction,
/// never retained across requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureMap(pub BTreeMap<String, String>);

impl FeatureMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert under the normalized form of a raw label.
    pub fn insert_raw(&mut self, label: &str, value: impl Into<String>) {
        self.0.insert(normalize_key(label), value.into());
    }

    /// Insert under an already-canonical key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderSet(pub BTreeMap<String, String>);
impl HeaderSet {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }
    pub fn with(mut self, k: &str, v: &str) -> Self {
        self.0.insert(k.to_string(), v.to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub user_agent: String,
    pub default_headers: HeaderSet,
    /// Plain-fetch timeout.
    pub timeout_ms: u64,
    /// Settle timeout for the rendering fetch: maximum wait for
    /// script-driven content before giving up on that URL.
    pub render_timeout_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/91.0.4472.124 Safari/537.36"
                .into(),
            default_headers: HeaderSet::empty()
                .with(
                    "Accept",
                    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                )
                .with("Accept-Language", "en-US,en;q=0.9"),
            timeout_ms: 10_000,
            render_timeout_ms: 20_000,
        }
    }
}

/// Body of `POST /compare`. Fields are optional so that presence can be
/// validated explicitly instead of through a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareRequest {
    pub url1: Option<String>,
    pub url2: Option<String>,
}

/// Result of one comparison: both source URLs and their feature maps.
/// Constructed per `/compare` call, serialized, discarded.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub url1: String,
    pub url2: String,
    pub data1: FeatureMap,
    pub data2: FeatureMap,
}
