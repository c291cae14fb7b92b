//! `login` command: verify credentials against the platform.

use std::io::BufRead;

use tidemark_admin::config::AdminConfig;
use tidemark_admin::platform::PlatformClient;

/// Authenticate against the platform and report the granted role.
///
/// The token itself is never printed. When `password` is `None` it is read
/// from the first line of stdin, so it can be piped from a secret store.
///
/// # Errors
///
/// Returns an error if configuration is invalid, stdin cannot be read, or
/// the platform rejects the credentials.
pub async fn run(email: &str, password: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AdminConfig::from_env()?;
    let client = PlatformClient::new(&config.platform)?;

    let password = match password {
        Some(p) => p.to_string(),
        None => read_password_from_stdin()?,
    };

    let data = client.login(email, &password).await?;

    println!("Credentials OK");
    println!("  role: {}", data.role);
    if !data.role.has_panel_access() {
        println!("  note: this role has no admin panel access");
    }

    Ok(())
}

fn read_password_from_stdin() -> Result<String, Box<dyn std::error::Error>> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
