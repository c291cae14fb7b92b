//! `ping` command: probe the platform health endpoint.

use std::time::Instant;

use tidemark_admin::config::AdminConfig;
use tidemark_admin::platform::PlatformClient;

/// Probe `GET /api/health` on the configured platform and report latency.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the platform is
/// unreachable or unhealthy.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AdminConfig::from_env()?;
    let client = PlatformClient::new(&config.platform)?;

    let started = Instant::now();
    client.health().await?;
    let elapsed = started.elapsed();

    println!(
        "Platform at {} is healthy ({} ms)",
        config.platform.base_url,
        elapsed.as_millis()
    );

    Ok(())
}
