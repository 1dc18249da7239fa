mod basic;

use super::{ConverterSession, SessionConfig, SessionEvent, SessionResponse};

pub(super) fn test_config() -> SessionConfig {
    SessionConfig {
        example: "1234567890".to_string(),
        placeholder: "1234567890\n9870".to_string(),
        copied_notice: "Copied to clipboard".to_string(),
        notice_duration_ms: 1500,
        share_error_title: "Error".to_string(),
        share_error_message: "Unable to share".to_string(),
    }
}

pub(super) fn make_session() -> ConverterSession {
    ConverterSession::with_config(test_config())
}

/// Text of the single CopyToClipboard event in `resp`.
pub(super) fn copied_text(resp: &SessionResponse) -> &str {
    match resp.events.as_slice() {
        [SessionEvent::CopyToClipboard { text }] => text,
        other => panic!("expected one CopyToClipboard event, got {other:?}"),
    }
}
