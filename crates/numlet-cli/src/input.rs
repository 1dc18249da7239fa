//! Input sources for the command-line tool.

use std::fs;
use std::io::{self, Read};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("IO error reading stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Read the whole input text from `path`, or from stdin when `path` is
/// `None` or `"-"`.
pub fn read_input(path: Option<&str>) -> Result<String, InputError> {
    match path {
        None | Some("-") => read_from(io::stdin().lock()).map_err(InputError::Stdin),
        Some(p) => fs::read_to_string(p).map_err(|source| InputError::Io {
            path: p.to_string(),
            source,
        }),
    }
}

fn read_from(mut reader: impl Read) -> io::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}
