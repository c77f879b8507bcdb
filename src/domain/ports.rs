use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Keyed {
    fn key(&self) -> &str;
}

#[async_trait]
pub trait InputSource: Send {
    /// Reads one line of input; `Ok(None)` means the source is exhausted.
    async fn read_line(&mut self) -> Result<Option<String>>;
}

pub trait OutputSink: Send + Sync {
    /// Writes without a trailing newline (prompt style) and flushes.
    fn write(&self, text: &str);
    fn write_line(&self, line: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn title(&self) -> &str;
    fn query_budget(&self) -> u32;
    fn session_timeout(&self) -> Duration;
}
