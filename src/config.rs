//! Configuration module for WIMSTAY.

use serde::Deserialize;
use std::path::Path;

use crate::{Result, WimstayError};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins. Empty means permissive (development mode).
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Serve the static front-end from `static_path`.
    #[serde(default)]
    pub serve_static: bool,
    /// Path to the static front-end files.
    #[serde(default = "default_static_path")]
    pub static_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_path() -> String {
    "web/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            serve_static: false,
            static_path: default_static_path(),
        }
    }
}

/// SMTP relay configuration.
///
/// The password should be supplied via the `WIMSTAY_SMTP_PASSWORD` environment
/// variable rather than committed to the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    #[serde(default = "default_smtp_host")]
    pub host: String,
    /// SMTP server port.
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Username for SMTP authentication. Empty means no authentication.
    #[serde(default)]
    pub user: String,
    /// Password for SMTP authentication.
    #[serde(default)]
    pub password: String,
    /// Sender address for composed inquiry emails.
    #[serde(default)]
    pub from_address: String,
    /// Recipient address for composed inquiry emails.
    #[serde(default)]
    pub to_address: String,
    /// Use STARTTLS on the connection.
    #[serde(default = "default_starttls")]
    pub starttls: bool,
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_starttls() -> bool {
    true
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            user: String::new(),
            password: String::new(),
            from_address: String::new(),
            to_address: String::new(),
            starttls: default_starttls(),
        }
    }
}

/// Site information configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Name of the site.
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Name of the property manager.
    #[serde(default = "default_manager_name")]
    pub manager_name: String,
    /// URL of the property manager.
    #[serde(default = "default_manager_url")]
    pub manager_url: String,
}

fn default_site_name() -> String {
    "Wimbledon Holiday Home".to_string()
}

fn default_manager_name() -> String {
    "BRH Property Management".to_string()
}

fn default_manager_url() -> String {
    "https://brhproperty.co.uk".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            manager_name: default_manager_name(),
            manager_url: default_manager_url(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/wimstay.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// SMTP relay configuration.
    #[serde(default)]
    pub smtp: SmtpConfig,
    /// Site information.
    #[serde(default)]
    pub site: SiteConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(WimstayError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| WimstayError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `WIMSTAY_SMTP_HOST`: SMTP server hostname
    /// - `WIMSTAY_SMTP_PORT`: SMTP server port
    /// - `WIMSTAY_SMTP_USER`: SMTP username
    /// - `WIMSTAY_SMTP_PASSWORD`: SMTP password
    /// - `WIMSTAY_SMTP_FROM`: sender address
    /// - `WIMSTAY_SMTP_TO`: recipient address
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("WIMSTAY_SMTP_HOST") {
            if !host.is_empty() {
                self.smtp.host = host;
            }
        }
        if let Ok(port) = std::env::var("WIMSTAY_SMTP_PORT") {
            if let Ok(port) = port.parse() {
                self.smtp.port = port;
            }
        }
        if let Ok(user) = std::env::var("WIMSTAY_SMTP_USER") {
            if !user.is_empty() {
                self.smtp.user = user;
            }
        }
        if let Ok(password) = std::env::var("WIMSTAY_SMTP_PASSWORD") {
            if !password.is_empty() {
                self.smtp.password = password;
            }
        }
        if let Ok(from) = std::env::var("WIMSTAY_SMTP_FROM") {
            if !from.is_empty() {
                self.smtp.from_address = from;
            }
        }
        if let Ok(to) = std::env::var("WIMSTAY_SMTP_TO") {
            if !to.is_empty() {
                self.smtp.to_address = to;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The SMTP sender or recipient address is not set
    /// - An SMTP user is configured without a password
    pub fn validate(&self) -> Result<()> {
        if self.smtp.from_address.is_empty() {
            return Err(WimstayError::Config(
                "smtp.from_address is not set. \
                 Set it in config.toml or via WIMSTAY_SMTP_FROM environment variable."
                    .to_string(),
            ));
        }
        if self.smtp.to_address.is_empty() {
            return Err(WimstayError::Config(
                "smtp.to_address is not set. \
                 Set it in config.toml or via WIMSTAY_SMTP_TO environment variable."
                    .to_string(),
            ));
        }
        if !self.smtp.user.is_empty() && self.smtp.password.is_empty() {
            return Err(WimstayError::Config(
                "smtp.user is set but smtp.password is empty. \
                 Set it via WIMSTAY_SMTP_PASSWORD environment variable."
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.cors_origins.is_empty());
        assert!(!config.server.serve_static);
        assert_eq!(config.server.static_path, "web/dist");

        assert_eq!(config.smtp.host, "localhost");
        assert_eq!(config.smtp.port, 587);
        assert!(config.smtp.user.is_empty());
        assert!(config.smtp.password.is_empty());
        assert!(config.smtp.from_address.is_empty());
        assert!(config.smtp.to_address.is_empty());
        assert!(config.smtp.starttls);

        assert_eq!(config.site.name, "Wimbledon Holiday Home");
        assert_eq!(config.site.manager_name, "BRH Property Management");
        assert_eq!(config.site.manager_url, "https://brhproperty.co.uk");

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, "logs/wimstay.log");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 3000
cors_origins = ["http://localhost:5173"]
serve_static = true
static_path = "custom/dist"

[smtp]
host = "smtp.example.com"
port = 465
user = "relay@example.com"
from_address = "relay@example.com"
to_address = "owner@example.com"
starttls = false

[site]
name = "Test Home"
manager_name = "Test Management"
manager_url = "https://example.com"

[logging]
level = "debug"
file = "custom/logs/app.log"
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:5173"]);
        assert!(config.server.serve_static);
        assert_eq!(config.server.static_path, "custom/dist");

        assert_eq!(config.smtp.host, "smtp.example.com");
        assert_eq!(config.smtp.port, 465);
        assert_eq!(config.smtp.user, "relay@example.com");
        assert_eq!(config.smtp.from_address, "relay@example.com");
        assert_eq!(config.smtp.to_address, "owner@example.com");
        assert!(!config.smtp.starttls);

        assert_eq!(config.site.name, "Test Home");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, "custom/logs/app.log");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[smtp]
host = "smtp.example.com"
from_address = "relay@example.com"
to_address = "owner@example.com"
"#;

        let config = Config::parse(toml).unwrap();

        // Overridden values
        assert_eq!(config.smtp.host, "smtp.example.com");

        // Defaults fill in everything else
        assert_eq!(config.smtp.port, 587);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::parse("not [valid toml");
        assert!(matches!(result, Err(WimstayError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[smtp]\nfrom_address = \"a@example.com\"\nto_address = \"b@example.com\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.smtp.from_address, "a@example.com");
        assert_eq!(config.smtp.to_address, "b@example.com");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("does/not/exist.toml");
        assert!(matches!(result, Err(WimstayError::Io(_))));
    }

    #[test]
    fn test_validate_missing_addresses() {
        let config = Config::default();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.smtp.from_address = "relay@example.com".to_string();
        assert!(config.validate().is_err());

        config.smtp.to_address = "owner@example.com".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_user_without_password() {
        let mut config = Config::default();
        config.smtp.from_address = "relay@example.com".to_string();
        config.smtp.to_address = "owner@example.com".to_string();
        config.smtp.user = "relay@example.com".to_string();
        assert!(config.validate().is_err());

        config.smtp.password = "app-password".to_string();
        assert!(config.validate().is_ok());
    }
}
