//! `check-config` command: load and validate the environment configuration.

use tidemark_admin::config::AdminConfig;

/// Load the configuration and print a redacted summary.
///
/// # Errors
///
/// Returns an error if required variables are missing or secrets fail
/// validation, with the offending variable named in the message.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AdminConfig::from_env()?;

    println!("Configuration OK");
    println!("  bind address:  {}", config.socket_addr());
    println!("  base URL:      {}", config.base_url);
    println!("  platform URL:  {}", config.platform.base_url);
    println!("  platform timeout: {}s", config.platform.timeout_secs);
    println!(
        "  sentry:        {}",
        if config.sentry_dsn.is_some() {
            "configured"
        } else {
            "disabled"
        }
    );

    Ok(())
}
