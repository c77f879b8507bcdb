use crate::core::directory::Directory;
use crate::domain::model::SessionSignal;
use crate::domain::ports::{InputSource, OutputSink};
use std::sync::Arc;

/// The interactive half of the session: a bounded loop of lookups against
/// the shared directory.
pub struct QuerySession<I: InputSource, O: OutputSink> {
    directory: Arc<Directory>,
    budget: u32,
    input: I,
    output: O,
}

impl<I: InputSource, O: OutputSink> QuerySession<I, O> {
    pub fn new(directory: Arc<Directory>, budget: u32, input: I, output: O) -> Self {
        Self {
            directory,
            budget,
            input,
            output,
        }
    }

    /// Runs every iteration of the query budget, then yields the
    /// session-ended signal. A failed or exhausted read is a miss, never a
    /// crash or retry.
    pub async fn run(mut self) -> SessionSignal {
        for remaining in (1..=self.budget).rev() {
            self.output
                .write_line(&format!("You have {} queries left...", remaining));
            self.output.write("Enter: ");

            let line = match self.input.read_line().await {
                Ok(Some(line)) => line,
                // 輸入已關閉，視為查無此鍵
                Ok(None) => String::new(),
                Err(e) => {
                    tracing::warn!("Input read failed: {}", e);
                    String::new()
                }
            };

            let key = line.trim();
            match self.directory.get(key) {
                Some(entry) => {
                    tracing::debug!("Lookup hit: {}", key);
                    self.output.write_line(&entry.to_string());
                }
                None => {
                    tracing::debug!("Lookup miss: {}", key);
                    self.output.write_line("No entry found");
                }
            }
        }

        SessionSignal::Ended
    }
}
