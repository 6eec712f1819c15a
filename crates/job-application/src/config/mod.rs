use std::env;
use std::fmt;

/// Endpoint the original form posted to.
pub const DEFAULT_SUBMIT_URL: &str = "https://script.google.com/macros/s/AKfycbxWE_tamHcr_g-3tw0hof9NZLhRp-5sREU3axQaouxPEEdNkL_bqePt0tTmn1WD2Kyp/exec";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub transport: TransportConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let endpoint =
            env::var("APP_SUBMIT_URL").unwrap_or_else(|_| DEFAULT_SUBMIT_URL.to_string());
        let timeout_secs = match env::var("APP_SUBMIT_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let transport = TransportConfig {
            endpoint,
            timeout_secs,
        };
        transport.validate()?;

        Ok(Self {
            environment,
            transport,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings for the outgoing submission request.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl TransportConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidEndpoint {
                value: self.endpoint.clone(),
            })
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SUBMIT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTimeout,
    InvalidEndpoint { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTimeout => {
                write!(f, "APP_SUBMIT_TIMEOUT_SECS must be a positive integer")
            }
            ConfigError::InvalidEndpoint { value } => {
                write!(f, "APP_SUBMIT_URL must be an http(s) URL, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
