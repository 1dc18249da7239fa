use numlet_core::settings::{settings, Settings};

/// Values the session reads from settings, captured once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub example: String,
    pub placeholder: String,
    pub copied_notice: String,
    pub notice_duration_ms: u64,
    pub share_error_title: String,
    pub share_error_message: String,
}

impl SessionConfig {
    pub fn from_settings(s: &Settings) -> Self {
        Self {
            example: s.input.example.clone(),
            placeholder: s.input.placeholder.clone(),
            copied_notice: s.feedback.copied_notice.clone(),
            notice_duration_ms: s.feedback.notice_duration_ms,
            share_error_title: s.share.error_title.clone(),
            share_error_message: s.share.error_message.clone(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_settings(settings())
    }
}

/// Instruction for the shell. The shell performs the side effect and, for
/// clipboard and share, reports the outcome back to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The result list was recomputed and must be redrawn.
    ResultsChanged { line_count: usize },
    CopyToClipboard { text: String },
    Share { text: String },
    ShowNotice { text: String },
    /// Start a timer; when it fires call `notice_expired(generation)`.
    ScheduleNoticeReset { generation: u64, delay_ms: u64 },
    ClearNotice,
    ShowAlert { title: String, message: String },
}

/// Events produced by one session call, in the order the shell should apply them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionResponse {
    pub events: Vec<SessionEvent>,
}

impl SessionResponse {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn single(event: SessionEvent) -> Self {
        Self {
            events: vec![event],
        }
    }

    pub(crate) fn push(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Failure reported by the platform share service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    #[error("share service unavailable: {reason}")]
    Unavailable { reason: String },
}
