use numlet_core::ResultLine;
use numlet_session::{SessionEvent, SessionResponse};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum NumletError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

/// One result row. The labels carry the placeholder text for empty values.
#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct NumletResultLine {
    pub source: String,
    pub word: String,
    pub source_label: String,
    pub word_label: String,
}

impl From<&ResultLine> for NumletResultLine {
    fn from(line: &ResultLine) -> Self {
        Self {
            source: line.source.clone(),
            word: line.word.clone(),
            source_label: line.source_label().to_string(),
            word_label: line.word_label().to_string(),
        }
    }
}

/// Event-driven response from every session call.
#[derive(Debug, uniffi::Record)]
pub struct NumletResponse {
    pub events: Vec<NumletEvent>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum NumletEvent {
    ResultsChanged { line_count: u32 },
    CopyToClipboard { text: String },
    Share { text: String },
    ShowNotice { text: String },
    ScheduleNoticeReset { generation: u64, delay_ms: u64 },
    ClearNotice,
    ShowAlert { title: String, message: String },
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<SessionEvent> for NumletEvent {
    fn from(event: SessionEvent) -> Self {
        match event {
            SessionEvent::ResultsChanged { line_count } => Self::ResultsChanged {
                line_count: u32::try_from(line_count).unwrap_or(u32::MAX),
            },
            SessionEvent::CopyToClipboard { text } => Self::CopyToClipboard { text },
            SessionEvent::Share { text } => Self::Share { text },
            SessionEvent::ShowNotice { text } => Self::ShowNotice { text },
            SessionEvent::ScheduleNoticeReset {
                generation,
                delay_ms,
            } => Self::ScheduleNoticeReset {
                generation,
                delay_ms,
            },
            SessionEvent::ClearNotice => Self::ClearNotice,
            SessionEvent::ShowAlert { title, message } => Self::ShowAlert { title, message },
        }
    }
}

pub(super) fn convert_to_events(resp: SessionResponse) -> NumletResponse {
    NumletResponse {
        events: resp.events.into_iter().map(NumletEvent::from).collect(),
    }
}
