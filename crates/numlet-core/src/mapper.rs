//! Fixed digit-to-letter mapping.
//!
//! Every ASCII decimal digit maps to exactly one uppercase letter. Read in key
//! order 1..9 then 0, the table spells "BINASTOREE"; '9' and '0' both map to 'E'.
//! Any other character is not part of the table and is dropped by [`map_line`].

use std::fmt;

/// Immutable digit → letter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingTable {
    /// Letters indexed by digit value (`'0'` at index 0).
    letters: [char; 10],
}

/// The process-wide mapping table.
pub static MAPPING: MappingTable = MappingTable {
    letters: ['E', 'B', 'I', 'N', 'A', 'S', 'T', 'O', 'R', 'E'],
};

/// Digits in the order the legend lists them.
static LEGEND_ORDER: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

impl MappingTable {
    /// Look up the letter for `ch`. Only ASCII digits are mapped;
    /// other Unicode decimal digits (e.g. full-width '１') return `None`.
    pub fn get(&self, ch: char) -> Option<char> {
        if !ch.is_ascii_digit() {
            return None;
        }
        self.letters.get((ch as u8 - b'0') as usize).copied()
    }

    /// Iterate `(digit, letter)` pairs in legend order (1..9, 0).
    pub fn entries(&self) -> impl Iterator<Item = (char, char)> + '_ {
        LEGEND_ORDER
            .iter()
            .filter_map(move |&d| self.get(d).map(|l| (d, l)))
    }

    /// Number of entries (always 10).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Human-readable legend, e.g. `1=B, 2=I, ..., 0=E`.
    pub fn legend(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MappingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (digit, letter)) in self.entries().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{digit}={letter}")?;
        }
        Ok(())
    }
}

/// Map a single character. `None` for anything that is not an ASCII digit.
pub fn map_char(ch: char) -> Option<char> {
    MAPPING.get(ch)
}

pub fn is_mappable(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Convert one line of text into its letter string.
///
/// Digits are replaced left to right; every other character (letters,
/// punctuation, whitespace) is skipped. Total over all strings.
pub fn map_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    out.extend(line.chars().filter_map(map_char));
    out
}

/// [`map_line`] for a possibly-absent line. `None` yields an empty string.
pub fn map_line_opt(line: Option<&str>) -> String {
    line.map(map_line).unwrap_or_default()
}

/// Returns the mapping legend shown alongside results.
pub fn legend() -> String {
    MAPPING.legend()
}
