//! Screen session for the digit-to-letter converter.
//!
//! `ConverterSession` owns the current input text and its results, and turns
//! user actions (edit, clear, example, copy, share) into [`SessionEvent`]s
//! that the native shell carries out.

mod copy;
mod share;
mod types;

#[cfg(test)]
mod tests;

use numlet_core::{legend, process, ResultSet};
use tracing::{debug, debug_span};

pub use types::{SessionConfig, SessionEvent, SessionResponse, ShareError};

pub struct ConverterSession {
    config: SessionConfig,

    input: String,
    results: ResultSet,

    // "Copied" notice state
    notice: Option<String>,
    notice_generation: u64,
}

impl ConverterSession {
    /// New session using global settings, starting with the example input.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let input = config.example.clone();
        let results = process(&input);
        Self {
            config,
            input,
            results,
            notice: None,
            notice_generation: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Text of the visible "copied" notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn notice_generation(&self) -> u64 {
        self.notice_generation
    }

    /// Hint text the shell shows while the input is empty.
    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    pub fn legend(&self) -> String {
        legend()
    }

    /// Replace the input text and recompute every result line.
    pub fn set_input(&mut self, text: &str) -> SessionResponse {
        let _span = debug_span!("set_input", bytes = text.len()).entered();
        self.input = text.to_string();
        self.results = process(&self.input);
        debug!(line_count = self.results.len());
        SessionResponse::single(SessionEvent::ResultsChanged {
            line_count: self.results.len(),
        })
    }

    pub fn clear(&mut self) -> SessionResponse {
        self.set_input("")
    }

    pub fn load_example(&mut self) -> SessionResponse {
        let example = self.config.example.clone();
        self.set_input(&example)
    }
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new()
    }
}
