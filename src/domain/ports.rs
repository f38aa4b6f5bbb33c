use crate::utils::error::Result;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Where report artifacts end up.
pub trait Storage {
    /// Creates the backing location if missing. Calling it twice is fine.
    fn ensure_ready(&self) -> Result<()>;
    fn write_file(&self, name: &str, data: &[u8]) -> Result<()>;
    /// Path a file named `name` would be written to.
    fn location(&self, name: &str) -> PathBuf;
}

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}
