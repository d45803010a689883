use std::sync::Arc;

use tracing::info;

use wimstay::{Config, SmtpMailer, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = wimstay::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        wimstay::logging::init_console_only(&config.logging.level);
    }

    info!("WIMSTAY - Wimbledon holiday home site");
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );
    info!(
        "Inquiry relay via {}:{} to {}",
        config.smtp.host, config.smtp.port, config.smtp.to_address
    );

    let mailer = match SmtpMailer::new(&config.smtp) {
        Ok(mailer) => Arc::new(mailer),
        Err(e) => {
            eprintln!("Failed to configure SMTP mailer: {e}");
            std::process::exit(1);
        }
    };

    let server = WebServer::new(&config, mailer);
    if let Err(e) = server.run().await {
        eprintln!("Web server error: {e}");
        std::process::exit(1);
    }
}
