//! Digit-to-letter conversion core.
//!
//! Pure, stateless building blocks: the fixed mapping table, line splitting,
//! and the plain-text / CSV renderings used for copy and share.

pub mod lines;
pub mod mapper;
pub mod render;
pub mod settings;

pub use lines::{process, split_lines, ResultLine, ResultSet};
pub use mapper::{legend, map_char, map_line, map_line_opt, MappingTable, MAPPING};
pub use render::{render_csv, render_plain_text};
