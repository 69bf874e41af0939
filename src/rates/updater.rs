use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use tracing::{error, info};

use crate::config::Config;
use crate::error::AppError;
use crate::rates::feed::{download_daily_json, parse_daily_json};
use crate::rates::service::RateService;

/// Background task that keeps the rate snapshot fresh.
///
/// Fetches once at startup and then on a fixed interval. A failed fetch is
/// logged and the previous snapshot stays in place until the next tick;
/// there is no retry outside the regular schedule. The feed URL and
/// timeout are re-read from the live configuration on every refresh so a
/// SIGHUP reload takes effect; the tick interval itself is fixed at
/// startup.
pub struct RateUpdater {
    service: Arc<RateService>,
    config: Arc<ArcSwap<Config>>,
}

impl RateUpdater {
    pub fn new(service: Arc<RateService>, config: Arc<ArcSwap<Config>>) -> Self {
        Self { service, config }
    }

    /// Run the refresh loop until the process shuts down.
    pub async fn start_background_task(self: Arc<Self>) {
        let refresh_interval =
            Duration::from_secs(self.config.load().feed.refresh_interval_secs);
        info!("Starting rate updater (interval: {:?})", refresh_interval);

        if let Err(e) = self.refresh().await {
            error!("Initial rate fetch failed: {}", e);
        }

        let mut interval = tokio::time::interval(refresh_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // The first tick completes immediately; consume it so the loop
        // does not refetch right after the initial fetch above.
        interval.tick().await;

        loop {
            interval.tick().await;

            match self.refresh().await {
                Ok(()) => info!("Rate snapshot refreshed"),
                Err(e) => error!("Rate refresh failed, keeping previous snapshot: {}", e),
            }
        }
    }

    /// Fetch and parse the feed once, swapping in the new snapshot.
    pub async fn refresh(&self) -> Result<(), AppError> {
        let (url, timeout) = {
            let config = self.config.load();
            (
                config.feed.url.clone(),
                Duration::from_secs(config.feed.timeout_secs),
            )
        };

        let body = download_daily_json(&url, timeout).await?;
        let table = parse_daily_json(&body)?;
        self.service.store(table);
        Ok(())
    }
}
