use std::fmt::Write as _;
use std::process;

use clap::ValueEnum;
use unicode_width::UnicodeWidthStr;

use numlet_core::{process as process_text, render_csv, render_plain_text, ResultSet};

use crate::input::read_input;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned "source  word" columns with placeholder labels
    Table,
    /// Words only, one per line (same as "copy all")
    Words,
    /// Quoted "source","word" records (same as "share")
    Csv,
    /// JSON array of {source, word} objects
    Json,
}

/// Render `results` in the requested format. Output never ends with a newline.
pub fn format_results(
    results: &ResultSet,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Table => format_table(results),
        OutputFormat::Words => render_plain_text(results),
        OutputFormat::Csv => render_csv(results),
        OutputFormat::Json => serde_json::to_string_pretty(results)?,
    })
}

fn format_table(results: &ResultSet) -> String {
    let width = results
        .iter()
        .map(|l| l.source_label().width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, line) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let label = line.source_label();
        let pad = width - label.width();
        let _ = write!(out, "{label}{:pad$}  {}", "", line.word_label());
    }
    out
}

pub fn convert_cmd(file: Option<&str>, format: OutputFormat) {
    let text = die!(read_input(file), "Error: {}");
    let results = process_text(&text);
    let rendered = die!(format_results(&results, format), "Error encoding JSON: {}");
    println!("{rendered}");
}
