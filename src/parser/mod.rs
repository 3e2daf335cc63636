//! Line-oriented integer scanner.
//!
//! Turns text input into the ordered value sequence the tree builders fold
//! over. The scanning rule is deliberately forgiving, one value per line:
//!
//! * A line consisting only of whitespace is skipped.
//! * Otherwise the leading run after any whitespace is parsed as a signed
//!   decimal integer (optional `+`/`-`, then digits).
//! * If nothing parses (no digits, or the run does not fit in an `i32`),
//!   the whole line is silently skipped. There is no partial-value recovery
//!   and no error surfaced.
//! * Anything on the line after the number is ignored, so `"42 ignored"`
//!   yields 42.
//!
//! Input order is preserved exactly: the returned sequence is in line order.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str;

// ============================================================================
// READING API (pub)
// ============================================================================
/// Reads values from a [BufRead] source, line by line.
///
/// Lines are scanned as raw bytes, so input that is not valid UTF-8 is
/// treated like any other malformed line and skipped rather than failing.
///
/// # Returns
/// * `Vec<i32>` - The parsed values in line order
/// * `io::Error` - Only if reading from the source itself fails
pub fn read_values<R: BufRead>(reader: R) -> io::Result<Vec<i32>> {
    let mut values = Vec::new();
    for line in reader.split(b'\n') {
        if let Some(value) = leading_int(&line?) {
            values.push(value);
        }
    }
    Ok(values)
}

/// Reads values from an in-memory string. Cannot fail; malformed lines are
/// skipped.
///
/// # Example
/// ```
/// use treefold::parser::read_values_str;
///
/// let values = read_values_str("10\n  \nabc\n42 ignored\n");
/// assert_eq!(values, vec![10, 42]);
/// ```
pub fn read_values_str<S: AsRef<str>>(input: S) -> Vec<i32> {
    input
        .as_ref()
        .lines()
        .filter_map(|line| leading_int(line.as_bytes()))
        .collect()
}

/// Reads values from the file at `path` using a buffered reader.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Returns
/// * `Vec<i32>` - The parsed values in line order
/// * `io::Error` - If the file cannot be opened or read
pub fn read_values_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<i32>> {
    let file = File::open(path)?;
    read_values(BufReader::new(file))
}

// ============================================================================
// Line scanning
// ============================================================================
/// Extracts the leading signed decimal integer of a line, if any.
///
/// Leading whitespace is skipped; the value run is an optional sign followed
/// by ASCII digits. `None` for whitespace-only lines, runs without digits,
/// and runs that overflow `i32`.
fn leading_int(line: &[u8]) -> Option<i32> {
    let start = line.iter().position(|b| !b.is_ascii_whitespace())?;
    let rest = &line[start..];

    let mut end = 0;
    if rest[0] == b'+' || rest[0] == b'-' {
        end = 1;
    }
    while end < rest.len() && rest[end].is_ascii_digit() {
        end += 1;
    }

    // the run is pure ASCII, so from_utf8 cannot fail here
    let text = str::from_utf8(&rest[..end]).ok()?;
    text.parse().ok()
}
