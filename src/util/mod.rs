use chrono::Utc;

/// Timestamp layout used across the platform for page tokens and the
/// `tm_*` lifecycle columns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Wall-clock seam. List operations capture "now" through this trait so the
/// empty-token default stays testable.
pub trait Clock: Send + Sync {
    /// Current UTC time in the platform timestamp layout.
    fn now_token(&self) -> String;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_token(&self) -> String {
        Utc::now().format(TIMESTAMP_FORMAT).to_string()
    }
}
