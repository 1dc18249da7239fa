//! Optional JSON trace log for debugging the engine from the app shell.
//!
//! Compiled to a no-op unless the `trace` feature is enabled.

use std::io;
use std::path::Path;

#[cfg(feature = "trace")]
mod imp {
    use std::fs;
    use std::io;
    use std::path::Path;
    use std::sync::OnceLock;

    use tracing_appender::non_blocking::WorkerGuard;
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    const LOG_FILE: &str = "numlet-trace.jsonl";
    const DEFAULT_FILTER: &str = "numlet_engine=debug,numlet_core=debug,numlet_session=debug";

    /// Flushes the background writer on drop; held for the life of the process.
    static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

    pub fn init(log_dir: &Path) -> io::Result<()> {
        fs::create_dir_all(log_dir)?;
        if GUARD.get().is_some() {
            return Ok(());
        }

        let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let installed = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init()
            .is_ok();

        // Another subscriber already owns the process; drop our writer.
        if installed {
            let _ = GUARD.set(guard);
            tracing::debug!(dir = %log_dir.display(), "trace log started");
        }
        Ok(())
    }
}

/// Start writing `numlet-trace.jsonl` under `log_dir`, creating the directory.
///
/// Later calls are no-ops once a subscriber is installed.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> io::Result<()> {
    imp::init(log_dir)
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> io::Result<()> {
    Ok(())
}
