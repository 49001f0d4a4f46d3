/// Shared helpers for integration tests

use std::io;
use std::sync::{Arc, Mutex};

/// Collects formatted log output so tests can assert on logged outcomes
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with a subscriber that writes into this capture
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Log lines at `level` (e.g. "WARN") containing `text`
    pub fn lines_with(&self, level: &str, text: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.contains(level) && line.contains(text))
            .count()
    }

    pub fn clear(&self) {
        self.buffer.lock().unwrap().clear();
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
