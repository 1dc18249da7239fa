use super::*;
use numlet_core::process;

#[test]
fn test_starts_with_example() {
    let session = make_session();
    assert_eq!(session.input(), "1234567890");
    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results().get(0).unwrap().word, "BINASTOREE");
    assert_eq!(session.notice(), None);
}

#[test]
fn test_default_uses_global_settings() {
    let session = ConverterSession::default();
    assert_eq!(session.config(), &SessionConfig::default());
    assert_eq!(session.input(), SessionConfig::default().example);
}

#[test]
fn test_set_input_recomputes_results() {
    let mut session = make_session();
    let resp = session.set_input("12\r\n34\n");
    assert_eq!(
        resp.events,
        vec![SessionEvent::ResultsChanged { line_count: 3 }]
    );
    let words: Vec<&str> = session.results().words().collect();
    assert_eq!(words, vec!["BI", "NA", ""]);
    assert_eq!(session.input(), "12\r\n34\n");
}

#[test]
fn test_clear() {
    let mut session = make_session();
    let resp = session.clear();
    assert_eq!(
        resp.events,
        vec![SessionEvent::ResultsChanged { line_count: 1 }]
    );
    assert_eq!(session.input(), "");
    assert_eq!(session.results(), &process(""));
}

#[test]
fn test_load_example_after_edit() {
    let mut session = make_session();
    session.set_input("9870");
    assert_eq!(session.results().get(0).unwrap().word, "EROE");

    session.load_example();
    assert_eq!(session.input(), "1234567890");
    assert_eq!(session.results().get(0).unwrap().word, "BINASTOREE");
}

#[test]
fn test_custom_example() {
    let mut config = test_config();
    config.example = "42\n7".to_string();
    let session = ConverterSession::with_config(config);
    assert_eq!(session.results().len(), 2);
    assert_eq!(session.results().get(1).unwrap().word, "O");
}

#[test]
fn test_placeholder_from_config() {
    let session = make_session();
    assert_eq!(session.placeholder(), "1234567890\n9870");

    let mut config = test_config();
    config.placeholder = "digits here".to_string();
    let session = ConverterSession::with_config(config);
    assert_eq!(session.placeholder(), "digits here");
}

#[test]
fn test_placeholder_from_global_settings() {
    let config = SessionConfig::default();
    assert_eq!(config.placeholder, "1234567890\n9870");
    assert_eq!(ConverterSession::default().placeholder(), config.placeholder);
}

#[test]
fn test_legend() {
    let session = make_session();
    assert!(session.legend().starts_with("1=B, 2=I"));
}
