use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

fn default_render_timeout() -> u64 {
  30
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub pdf: PdfConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

/// PDF export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
  /// Explicit wkhtmltopdf binary path; falls back to PATH lookup
  pub wkhtmltopdf_path: Option<String>,
  #[serde(default = "default_render_timeout")]
  pub render_timeout_seconds: u64,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Sources, later ones overriding earlier ones:
  /// 1. config/default.toml
  /// 2. config/local.toml (if present)
  /// 3. config/<RUN_MODE>.toml (if present)
  /// 4. Environment variables with the GSTBILL_ prefix, double-underscore
  ///    separated: `GSTBILL_SERVER__PORT=8080`,
  ///    `GSTBILL_PDF__RENDER_TIMEOUT_SECONDS=60`
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("GSTBILL")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}
