use crate::types::FetchConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "featcmp", version, about = "Compare product features from two URLs (JSON over HTTP)")]
pub struct Cli {
    /// Port to bind the HTTP API on
    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// Plain-fetch timeout in milliseconds
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Settle timeout for rendered marketplace pages, in milliseconds
    #[arg(long, default_value_t = 20_000)]
    pub render_timeout_ms: u64,

    /// Run without a headless browser; marketplace URLs will fail fast
    #[arg(long)]
    pub no_browser: bool,
}

impl Cli {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout_ms: self.timeout_ms,
            render_timeout_ms: self.render_timeout_ms,
            ..FetchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_contract() {
        let cli = Cli::parse_from(["featcmp"]);
        assert_eq!(cli.port, 5000);
        let cfg = cli.fetch_config();
        assert_eq!(cfg.timeout_ms, 10_000);
        assert_eq!(cfg.render_timeout_ms, 20_000);
    }

    #[test]
    fn flags_override_timeouts() {
        let cli = Cli::parse_from(["featcmp", "--port", "8080", "--render-timeout-ms", "5000"]);
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.fetch_config().render_timeout_ms, 5000);
    }
}
