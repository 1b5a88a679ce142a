//! Rendering fetch, backed by headless Chromium.
//!
//! The engine only sees the [`Renderer`](crate::engine::Renderer)
//! contract: URL in, settled DOM markup or failure out, bounded by the
//! configured settle timeout.

use crate::engine::Renderer as RendererT;
use crate::{error::*, types::*};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::path::PathBuf;

/// Find a Chromium binary: explicit env override first, then PATH,
/// then the common macOS install location.
pub fn find_chromium() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("FEATCMP_CHROMIUM_PATH") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    for name in ["google-chrome", "chromium", "chromium-browser"] {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }

    if cfg!(target_os = "macos") {
        let common = PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if common.exists() {
            return Some(common);
        }
    }

    None
}

/// Headless-Chromium renderer for script-generated marketplace pages.
pub struct ChromiumRenderer {
    browser: Browser,
}

impl ChromiumRenderer {
    /// Launch a headless Chromium instance.
    pub async fn launch() -> Result<Self> {
        let exe = find_chromium().ok_or_else(|| {
            FeatcmpError::Other(
                "Chromium not found; install Chrome or set FEATCMP_CHROMIUM_PATH".into(),
            )
        })?;

        let config = BrowserConfig::builder()
            .chrome_executable(exe)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .build()
            .map_err(|e| FeatcmpError::Other(format!("failed to build browser config: {e}")))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| FeatcmpError::Other(format!("failed to launch Chromium: {e}")))?;

        // Drain CDP events for the lifetime of the browser.
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        Ok(Self { browser })
    }
}

#[async_trait]
impl RendererT for ChromiumRenderer {
    fn name(&self) -> &'static str {
        "chromium"
    }

    async fn render(&self, url: &str, cfg: &FetchConfig) -> Result<String> {
        let settle = std::time::Duration::from_millis(cfg.render_timeout_ms);

        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| FeatcmpError::render(url, e.to_string()))?;

        let work = async {
            page.goto(url).await.map_err(|e| e.to_string())?;
            page.wait_for_navigation().await.map_err(|e| e.to_string())?;
            let eval = page
                .evaluate("document.documentElement.outerHTML")
                .await
                .map_err(|e| e.to_string())?;
            eval.into_value::<String>().map_err(|e| format!("{e:?}"))
        };

        let outcome = tokio::time::timeout(settle, work).await;
        let result = match outcome {
            Ok(Ok(html)) => Ok(html),
            Ok(Err(reason)) => Err(FeatcmpError::render(url, reason)),
            Err(_) => Err(FeatcmpError::render(
                url,
                format!("page did not settle within {}ms", cfg.render_timeout_ms),
            )),
        };

        let _ = page.close().await;
        result
    }
}

/// Stand-in when no browser is available. Marketplace URLs fail with a
/// render error for that URL only; generic URLs are unaffected.
pub struct NoopRenderer;

#[async_trait]
impl RendererT for NoopRenderer {
    fn name(&self) -> &'static str {
        "noop"
    }

    async fn render(&self, url: &str, _cfg: &FetchConfig) -> Result<String> {
        Err(FeatcmpError::render(
            url,
            "browser rendering not available in this deployment",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_renderer_fails_with_render_error() {
        let err = NoopRenderer
            .render("https://www.amazon.com/dp/B0X", &FetchConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FeatcmpError::Render { .. }));
        assert!(err.to_string().contains("https://www.amazon.com/dp/B0X"));
    }

    #[tokio::test]
    #[ignore] // Requires a local Chromium install
    async fn chromium_renders_a_data_url() {
        let renderer = ChromiumRenderer::launch().await.expect("launch failed");
        let html = renderer
            .render(
                "data:text/html,<h1>Hello</h1>",
                &FetchConfig::default(),
            )
            .await
            .expect("render failed");
        assert!(html.contains("<h1>Hello</h1>"));
    }
}
