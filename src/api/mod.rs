//! UniFFI export layer — type-safe bindings for the native app shell.
//!
//! Each public type here maps to a generated Swift/Kotlin class, struct, or enum.

mod session;
mod types;

#[cfg(test)]
mod tests;

pub use session::NumletSession;
pub use types::{NumletError, NumletEvent, NumletResponse, NumletResultLine};

use std::path::Path;

use numlet_core::process;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn map_line(line: String) -> String {
    numlet_core::map_line(&line)
}

#[uniffi::export]
fn process_text(raw_text: String) -> Vec<NumletResultLine> {
    process(&raw_text)
        .iter()
        .map(NumletResultLine::from)
        .collect()
}

#[uniffi::export]
fn render_plain_text(raw_text: String) -> String {
    numlet_core::render_plain_text(&process(&raw_text))
}

#[uniffi::export]
fn render_csv(raw_text: String) -> String {
    numlet_core::render_csv(&process(&raw_text))
}

#[uniffi::export]
fn mapping_legend() -> String {
    numlet_core::legend()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), NumletError> {
    let content = std::fs::read_to_string(&path).map_err(|e| NumletError::Io {
        msg: format!("{path}: {e}"),
    })?;
    numlet_core::settings::init_custom(content)
        .map_err(|e| NumletError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    numlet_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

/// Hint text for the empty input box.
#[uniffi::export]
fn input_placeholder() -> String {
    numlet_core::settings::settings().input.placeholder.clone()
}

#[uniffi::export]
fn trace_init(log_dir: String) -> Result<(), NumletError> {
    crate::trace_init::init_tracing(Path::new(&log_dir)).map_err(|e| NumletError::Io {
        msg: format!("{log_dir}: {e}"),
    })
}
