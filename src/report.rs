//! Progress and diagnostic output.
//!
//! Generation code reports through the `Reporter` trait so the CLI prints to
//! stdout while tests capture or discard messages.

/// Sink for progress lines and warnings
pub trait Reporter {
    fn log(&mut self, message: impl Into<String>);
    fn warn(&mut self, message: impl Into<String>);
}

/// Prints every message to stdout
#[derive(Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn log(&mut self, message: impl Into<String>) {
        println!("{}", message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        println!("{}", message.into());
    }
}

/// Discards all messages, for non-interactive use
#[derive(Default)]
pub struct SilentReporter;

impl SilentReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentReporter {
    fn log(&mut self, _message: impl Into<String>) {}
    fn warn(&mut self, _message: impl Into<String>) {}
}

/// Captures messages for inspection in tests
#[derive(Default)]
pub struct MemoryReporter {
    pub logs: Vec<String>,
    pub warnings: Vec<String>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for MemoryReporter {
    fn log(&mut self, message: impl Into<String>) {
        self.logs.push(message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}
