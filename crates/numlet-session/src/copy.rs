use numlet_core::render_plain_text;
use tracing::debug;

use super::types::{SessionEvent, SessionResponse};
use super::ConverterSession;

impl ConverterSession {
    /// Copy one line's word. Out-of-range indices produce no events.
    pub fn copy_line(&self, index: usize) -> SessionResponse {
        match self.results.get(index) {
            Some(line) => SessionResponse::single(SessionEvent::CopyToClipboard {
                text: line.word.clone(),
            }),
            None => {
                debug!(index, line_count = self.results.len(), "copy_line out of range");
                SessionResponse::none()
            }
        }
    }

    /// Copy every word, newline-joined.
    pub fn copy_all(&self) -> SessionResponse {
        SessionResponse::single(SessionEvent::CopyToClipboard {
            text: render_plain_text(&self.results),
        })
    }

    /// Called by the shell once a clipboard write completes.
    ///
    /// A successful write shows the notice and asks the shell to schedule its
    /// reset. Each success bumps the generation so older timers become stale.
    pub fn copy_finished(&mut self, success: bool) -> SessionResponse {
        if !success {
            debug!("clipboard write failed");
            return SessionResponse::none();
        }
        self.notice_generation += 1;
        self.notice = Some(self.config.copied_notice.clone());

        let mut resp = SessionResponse::none();
        resp.push(SessionEvent::ShowNotice {
            text: self.config.copied_notice.clone(),
        });
        resp.push(SessionEvent::ScheduleNoticeReset {
            generation: self.notice_generation,
            delay_ms: self.config.notice_duration_ms,
        });
        resp
    }

    /// Called by the shell when a notice timer fires. Stale generations are ignored.
    pub fn notice_expired(&mut self, generation: u64) -> SessionResponse {
        if generation != self.notice_generation || self.notice.is_none() {
            return SessionResponse::none();
        }
        self.notice = None;
        SessionResponse::single(SessionEvent::ClearNotice)
    }
}
