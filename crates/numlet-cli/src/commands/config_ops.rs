use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn legend() {
    println!("{}", numlet_core::legend());
}

pub fn settings_export() {
    print!("{}", numlet_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        numlet_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: input.example={:?}, feedback.notice_duration_ms={}",
        s.input.example, s.feedback.notice_duration_ms
    );
}
