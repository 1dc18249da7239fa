//! Native-shell engine for the digit-to-letter converter.
//!
//! The conversion logic lives in `numlet_core` and the screen state in
//! `numlet_session`; this crate exposes both to the app through UniFFI.

pub mod api;
mod trace_init;

pub use api::{NumletError, NumletEvent, NumletResponse, NumletResultLine, NumletSession};

uniffi::setup_scaffolding!();
