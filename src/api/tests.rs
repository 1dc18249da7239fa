use super::*;

#[test]
fn test_engine_version() {
    assert_eq!(engine_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_map_line() {
    assert_eq!(map_line("1234567890".to_string()), "BINASTOREE");
    assert_eq!(map_line("abc123".to_string()), "BIN");
    assert_eq!(map_line(String::new()), "");
}

#[test]
fn test_process_text() {
    let lines = process_text("12\r\n34".to_string());
    assert_eq!(
        lines,
        vec![
            NumletResultLine {
                source: "12".to_string(),
                word: "BI".to_string(),
                source_label: "12".to_string(),
                word_label: "BI".to_string(),
            },
            NumletResultLine {
                source: "34".to_string(),
                word: "NA".to_string(),
                source_label: "34".to_string(),
                word_label: "NA".to_string(),
            },
        ]
    );
}

#[test]
fn test_renderings() {
    assert_eq!(render_plain_text("12\nx\n9870".to_string()), "BI\n\nEROE");
    assert_eq!(
        render_csv("a,\"1\"".to_string()),
        "\"a,\"\"1\"\"\",\"B\""
    );
}

#[test]
fn test_legend_and_default_config() {
    assert_eq!(
        mapping_legend(),
        "1=B, 2=I, 3=N, 4=A, 5=S, 6=T, 7=O, 8=R, 9=E, 0=E"
    );
    assert!(settings_default_config().contains("[feedback]"));
}

#[test]
fn test_settings_load_missing_file() {
    let err = settings_load_config("/nonexistent/numlet/settings.toml".to_string()).unwrap_err();
    assert!(matches!(err, NumletError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/numlet/settings.toml"));
}

#[test]
fn test_input_placeholder() {
    assert_eq!(input_placeholder(), "1234567890\n9870");
}

#[test]
fn test_settings_load_after_first_read_is_rejected() {
    let path = std::env::temp_dir().join(format!("numlet-settings-{}.toml", std::process::id()));
    std::fs::write(&path, settings_default_config()).unwrap();
    let _ = input_placeholder();

    let err = settings_load_config(path.to_string_lossy().into_owned()).unwrap_err();
    assert!(matches!(err, NumletError::InvalidData { .. }));
    assert!(err.to_string().contains("already initialized"));
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_trace_init_accepts_log_dir() {
    let dir = std::env::temp_dir().join(format!("numlet-trace-{}", std::process::id()));
    trace_init(dir.to_string_lossy().into_owned()).unwrap();
    std::fs::remove_dir_all(&dir).ok();
}
