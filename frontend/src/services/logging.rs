use std::io::{self, Write};

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Buffers one formatted event and hands it to the browser console on drop.
#[derive(Default)]
struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if !line.is_empty() {
            gloo::console::log!(line);
        }
    }
}

pub struct Logger;

impl Logger {
    /// Install the global subscriber. `directive` uses `EnvFilter` syntax, e.g. "info,shared=debug".
    pub fn init(directive: &str) -> anyhow::Result<()> {
        let filter = EnvFilter::try_new(directive)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(ConsoleWriter::default)
            .with_ansi(false)
            .without_time()
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {}", e))
    }

    pub fn debug_with_component(component: &str, message: &str) {
        tracing::debug!(component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        tracing::info!(component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        tracing::error!(component, "{}", message);
    }
}
