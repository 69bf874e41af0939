use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

/// Exchange-rate feed settings. Tariff tables and fee constants are fixed
/// by the published tariff and live in code, not here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    pub url: String,
    pub refresh_interval_secs: u64,
    pub timeout_secs: u64,
}

pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()))
        .add_source(config::Environment::with_prefix("ESTIMATOR").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.feed.url.is_empty() {
        anyhow::bail!("Feed URL must not be empty");
    }

    if !cfg.feed.url.starts_with("http://") && !cfg.feed.url.starts_with("https://") {
        anyhow::bail!("Feed URL must be an http(s) URL: {}", cfg.feed.url);
    }

    if cfg.feed.refresh_interval_secs == 0 {
        anyhow::bail!("Feed refresh interval must be at least one second");
    }

    if cfg.feed.timeout_secs == 0 {
        anyhow::bail!("Feed timeout must be at least one second");
    }

    if cfg.feed.timeout_secs >= cfg.feed.refresh_interval_secs {
        anyhow::bail!(
            "Feed timeout ({}s) must be shorter than the refresh interval ({}s)",
            cfg.feed.timeout_secs,
            cfg.feed.refresh_interval_secs
        );
    }

    cfg.server
        .host
        .parse::<std::net::IpAddr>()
        .map_err(|_| anyhow::anyhow!("Server host is not a valid IP address: {}", cfg.server.host))?;

    Ok(())
}
