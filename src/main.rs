use airsense::{AirSenseConfig, telemetry, web};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AirSenseConfig::load()?;
    telemetry::init_tracing(&config.logging)?;

    if config.upstream.api_key.is_none() {
        tracing::warn!(
            "No OpenWeather API key configured (set {} or AIRSENSE_UPSTREAM__API_KEY); requests will fail",
            airsense::config::API_KEY_ENV
        );
    }

    web::run(config).await
}
