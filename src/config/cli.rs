use crate::core::{InputSource, OutputSink};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};

/// Line-at-a-time reader over the process's standard input.
pub struct StdinSource {
    reader: BufReader<Stdin>,
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InputSource for StdinSource {
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line).await?;
        if bytes == 0 {
            // stdin 已關閉
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write(&self, text: &str) {
        print!("{}", text);
        // the prompt has no newline; force it out before blocking on input
        let _ = std::io::stdout().flush();
    }

    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}
