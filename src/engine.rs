use crate::services::extract::extractor_for;
use crate::{error::*, types::*};
use async_trait::async_trait;
use tracing::{error, info};
use url::Url;

/// Plain document fetch: URL in, response body out.
#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self, url: &str, cfg: &FetchConfig) -> Result<String>;
}

/// Script-rendering fetch: URL in, settled DOM markup out, bounded by
/// the configured settle timeout. The engine depends only on this
/// contract, never on renderer internals.
#[async_trait]
pub trait Renderer: Send + Sync {
    fn name(&self) -> &'static str;
    async fn render(&self, url: &str, cfg: &FetchConfig) -> Result<String>;
}

/// One extraction strategy: fetched markup in, normalized features out.
pub trait Extractor: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract(&self, url: &str, html: &str) -> Result<FeatureMap>;
}

/// Comparison orchestrator. Holds the two fetch capabilities and the
/// read-only fetch configuration; everything else is per-call state.
pub struct Engine {
    pub fetcher: Box<dyn Fetcher>,
    pub renderer: Box<dyn Renderer>,
    pub cfg: FetchConfig,
}

impl Engine {
    pub fn new(fetcher: Box<dyn Fetcher>, renderer: Box<dyn Renderer>, cfg: FetchConfig) -> Self {
        Self { fetcher, renderer, cfg }
    }

    /// Syntactic check only: absolute URL with an http(s) scheme.
    pub fn validate_url(raw: &str) -> Result<Url> {
        let url = Url::parse(raw).map_err(|_| FeatcmpError::InvalidUrl(raw.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FeatcmpError::InvalidUrl(raw.to_string()));
        }
        Ok(url)
    }

    /// Fetch and extract one URL, routing fetch strategy and extraction
    /// strategy together by host.
    pub async fn extract_url(&self, url: &str) -> Result<FeatureMap> {
        let parsed = Self::validate_url(url)?;
        let platform = Platform::detect(&parsed);

        let html = if platform.requires_render() {
            info!(url, platform = platform.name(), renderer = self.renderer.name(), "rendering");
            self.renderer.render(url, &self.cfg).await?
        } else {
            info!(url, fetcher = self.fetcher.name(), "fetching");
            self.fetcher.fetch(url, &self.cfg).await?
        };

        let features = extractor_for(platform).extract(url, &html)?;
        info!(url, features = features.len(), "scraped");
        Ok(features)
    }

    /// Compare two product pages.
    ///
    /// Both URLs are validated before any network work; a malformed URL
    /// fails the whole request without a single fetch. Extractions are
    /// independent, so they run concurrently; both are always attempted
    /// and every failure is reported, not just the first.
    pub async fn compare(&self, url1: &str, url2: &str) -> Result<Comparison> {
        Self::validate_url(url1)?;
        Self::validate_url(url2)?;

        let (r1, r2) = tokio::join!(self.extract_url(url1), self.extract_url(url2));

        match (r1, r2) {
            (Ok(data1), Ok(data2)) => Ok(Comparison {
                url1: url1.to_string(),
                url2: url2.to_string(),
                data1,
                data2,
            }),
            (Err(e1), Err(e2)) => {
                error!(url1, url2, "both extractions failed");
                Err(FeatcmpError::Other(format!("{e1}; {e2}")))
            }
            (Err(e), Ok(_)) | (Ok(_), Err(e)) => {
                error!(%e, "extraction failed");
                Err(e)
            }
        }
    }
}
