use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub dispatch: DispatchConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Per-operation request timeouts forwarded to the backend RPCs that accept
/// one. These are fixed caps, not a retry/backoff policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    pub file_delete_timeout_ms: i32,
    pub message_send_timeout_ms: i32,
    pub summary_create_timeout_ms: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub debug_logging: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("DISPATCH_FILE_DELETE_TIMEOUT_MS") {
            self.dispatch.file_delete_timeout_ms =
                v.parse().unwrap_or(self.dispatch.file_delete_timeout_ms);
        }
        if let Ok(v) = env::var("DISPATCH_MESSAGE_SEND_TIMEOUT_MS") {
            self.dispatch.message_send_timeout_ms =
                v.parse().unwrap_or(self.dispatch.message_send_timeout_ms);
        }
        if let Ok(v) = env::var("DISPATCH_SUMMARY_CREATE_TIMEOUT_MS") {
            self.dispatch.summary_create_timeout_ms =
                v.parse().unwrap_or(self.dispatch.summary_create_timeout_ms);
        }
        if let Ok(v) = env::var("LOG_DEBUG_LOGGING") {
            self.log.debug_logging = v.parse().unwrap_or(self.log.debug_logging);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            dispatch: DispatchConfig::default(),
            log: LogConfig {
                debug_logging: true,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            dispatch: DispatchConfig::default(),
            log: LogConfig {
                debug_logging: true,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            dispatch: DispatchConfig::default(),
            log: LogConfig {
                debug_logging: false,
            },
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            file_delete_timeout_ms: 60_000,
            message_send_timeout_ms: 30_000,
            summary_create_timeout_ms: 30_000,
        }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    dotenvy::dotenv().ok();
    AppConfig::from_env()
});

/// Global application configuration, loaded once from the environment.
pub fn config() -> &'static AppConfig {
    &CONFIG
}
