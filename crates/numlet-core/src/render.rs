//! Copy and export renderings of a [`ResultSet`].

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug_span;

use crate::lines::ResultSet;

/// Words only, one per line, in input order. Used for "copy all".
pub fn render_plain_text(results: &ResultSet) -> String {
    let words: Vec<&str> = results.words().collect();
    words.join("\n")
}

/// `"source","word"` records joined by '\n'; no header, no trailing newline.
pub fn render_csv(results: &ResultSet) -> String {
    let _span = debug_span!("render_csv", lines = results.len()).entered();
    let bytes = write_records(results).expect("in-memory CSV writer cannot fail");
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Every field quoted, embedded quotes doubled, records terminated by '\n'.
fn write_records(results: &ResultSet) -> csv::Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for line in results {
        writer.write_record([line.source.as_str(), line.word.as_str()])?;
    }
    let mut bytes = writer.into_inner().map_err(|e| e.into_error())?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(bytes)
}
