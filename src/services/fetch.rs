use crate::engine::Fetcher as FetcherT;
use crate::{error::*, types::*};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Plain asynchronous fetch for generic sites. One attempt per URL, no
/// retries; anything past a single timeout-bounded GET is out of scope.
pub struct ReqwestFetcher;

impl ReqwestFetcher {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    fn build_client(&self, cfg: &FetchConfig) -> Result<Client> {
        Ok(Client::builder()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()?)
    }
}

#[async_trait]
impl FetcherT for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch(&self, url: &str, cfg: &FetchConfig) -> Result<String> {
        let client = self.build_client(cfg)?;
        let headers = to_headermap(&cfg.default_headers, Some(&cfg.user_agent))?;

        let resp = client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| FeatcmpError::fetch(url, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeatcmpError::fetch(url, format!("HTTP status {status}")));
        }

        resp.text()
            .await
            .map_err(|e| FeatcmpError::fetch(url, e.to_string()))
    }
}

fn to_headermap(hs: &HeaderSet, ua: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (k, v) in &hs.0 {
        let kn = HeaderName::from_bytes(k.as_bytes())
            .map_err(|e| FeatcmpError::Other(format!("invalid header name {k}: {e}")))?;
        let vv = HeaderValue::from_str(v)
            .map_err(|e| FeatcmpError::Other(format!("invalid header value for {k}: {e}")))?;
        headers.insert(kn, vv);
    }
    if let Some(ua_str) = ua {
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(ua_str).unwrap_or(HeaderValue::from_static("Mozilla/5.0")),
        );
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_body_and_sends_user_agent() {
        let server = MockServer::start().await;
        let cfg = FetchConfig::default();

        Mock::given(method("GET"))
            .and(path("/product"))
            .and(header("user-agent", cfg.user_agent.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Widget</h1>"))
            .mount(&server)
            .await;

        let fetcher = ReqwestFetcher::new().unwrap();
        let body = fetcher
            .fetch(&format!("{}/product", server.uri()), &cfg)
            .await
            .unwrap();
        assert_eq!(body, "<h1>Widget</h1>");
    }

    #[tokio::test]
    async fn non_2xx_status_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = ReqwestFetcher::new().unwrap();
        let err = fetcher
            .fetch(&server.uri(), &FetchConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("HTTP status 404"));
    }

    #[tokio::test]
    async fn timeout_surfaces_as_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let cfg = FetchConfig { timeout_ms: 50, ..Default::default() };
        let fetcher = ReqwestFetcher::new().unwrap();
        let err = fetcher.fetch(&server.uri(), &cfg).await.unwrap_err();
        assert!(matches!(err, FeatcmpError::Fetch { .. }));
    }
}
