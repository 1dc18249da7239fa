use numlet_core::render_csv;
use tracing::warn;

use super::types::{SessionEvent, SessionResponse, ShareError};
use super::ConverterSession;

impl ConverterSession {
    /// Export all results as CSV through the platform share service.
    pub fn share(&self) -> SessionResponse {
        SessionResponse::single(SessionEvent::Share {
            text: render_csv(&self.results),
        })
    }

    /// Called by the shell with the share service outcome. Failures become a
    /// single generic alert and are not retried.
    pub fn share_finished(&self, result: Result<(), ShareError>) -> SessionResponse {
        match result {
            Ok(()) => SessionResponse::none(),
            Err(e) => {
                warn!(error = %e, "share failed");
                SessionResponse::single(SessionEvent::ShowAlert {
                    title: self.config.share_error_title.clone(),
                    message: self.config.share_error_message.clone(),
                })
            }
        }
    }
}
