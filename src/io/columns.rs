//! Fixed-column record slicing.
//!
//! Fields are addressed by half-open character ranges, never by
//! delimiters. Lines are used untrimmed so column offsets stay aligned; a
//! range past the end of a short line yields an empty field.

use std::ops::Range;

/// Half-open `[start, end)` character range of one field.
pub type ColumnRange = Range<usize>;

/// Strip trailing carriage returns so `\r\n` and `\n` files slice alike.
#[must_use]
pub fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches('\r')
}

/// Byte offset of character column `col`, clamped to the line length.
fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}

/// Slice one field out of `line` and trim surrounding whitespace.
///
/// Never fails: columns beyond the line produce `""`.
#[must_use]
pub fn slice(line: &str, cols: ColumnRange) -> &str {
    let line = strip_line_ending(line);
    if cols.start >= cols.end {
        return "";
    }
    let start = byte_offset(line, cols.start);
    let end = byte_offset(line, cols.end);
    line.get(start..end).map_or("", str::trim)
}

/// Slice several fields at once, in the order of `ranges`.
#[must_use]
pub fn extract<'a>(line: &'a str, ranges: &[ColumnRange]) -> Vec<&'a str> {
    ranges.iter().map(|r| slice(line, r.clone())).collect()
}

/// One line of input with its 1-based line number.
///
/// Lines past the end of the file are represented with empty text so
/// every field reads as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    text: &'a str,
    number: usize,
    present: bool,
}

impl<'a> Record<'a> {
    /// Wrap an existing line.
    #[must_use]
    pub fn new(text: &'a str, number: usize) -> Self {
        Self {
            text: strip_line_ending(text),
            number,
            present: true,
        }
    }

    /// A line the file does not have.
    #[must_use]
    pub fn missing(number: usize) -> Self {
        Self {
            text: "",
            number,
            present: false,
        }
    }

    /// Line text without its line ending.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// 1-based line number.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Whether the line exists in the input.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Trimmed string field.
    #[must_use]
    pub fn field(&self, cols: ColumnRange) -> &'a str {
        slice(self.text, cols)
    }

    /// Integer field, `None` when empty or non-numeric.
    #[must_use]
    pub fn int(&self, cols: ColumnRange) -> Option<i64> {
        self.field(cols).parse().ok()
    }

    /// Float field, `None` when empty or non-numeric.
    #[must_use]
    pub fn float(&self, cols: ColumnRange) -> Option<f32> {
        self.field(cols).parse().ok()
    }
}

/// Split text into records, normalizing line endings.
pub fn records(text: &str) -> impl Iterator<Item = Record<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| Record::new(line, i + 1))
}
