//! Text formats for instances, candidate matchings, and match output.
//!
//! ## Instance Format
//!
//! ```text
//! n
//! <n lines: hospital 1..n preference lists>
//! <n lines: student 1..n preference lists>
//! ```
//!
//! Line breaks carry no meaning; the input is a flat stream of
//! whitespace-separated integers. A token that is not an integer ends the
//! stream, exactly as if the input had been cut there.
//!
//! ## Pair Format
//!
//! Integer pairs `hospital student` until the stream ends. A trailing odd
//! integer is ignored.

use std::io::{self, Write};
use std::str::SplitAsciiWhitespace;

use crate::error::ParseError;
use crate::types::{is_permutation, Instance, Matching};

/// Integer token stream over a text buffer.
///
/// Stops for good at the first token that does not parse as `i64`.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
    done: bool,
}

impl<'a> Tokens<'a> {
    /// Tokenize `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_ascii_whitespace(),
            done: false,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        match self.inner.next()?.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                self.done = true;
                None
            }
        }
    }
}

/// Read an instance from the front of `tokens`.
///
/// Rows are validated as soon as they are complete, hospitals first, so the
/// reported code always names the earliest problem in the stream.
///
/// # Errors
///
/// Returns the [`ParseError`] code for the first problem found.
pub fn read_instance(tokens: &mut Tokens<'_>) -> Result<Instance, ParseError> {
    let n = tokens.next().ok_or(ParseError::EmptyOrMissingN)?;
    let n = usize::try_from(n).map_err(|_| ParseError::NegativeN)?;

    let hospitals = read_block(
        tokens,
        n,
        ParseError::TruncatedHospitalPrefs,
        ParseError::InvalidHospitalLine,
    )?;
    let students = read_block(
        tokens,
        n,
        ParseError::TruncatedStudentPrefs,
        ParseError::InvalidStudentLine,
    )?;

    Instance::from_rows(hospitals, students)
}

fn read_block(
    tokens: &mut Tokens<'_>,
    n: usize,
    truncated: ParseError,
    invalid_line: fn(usize) -> ParseError,
) -> Result<Vec<Vec<usize>>, ParseError> {
    let mut rows = Vec::new();
    for line in 1..=n {
        let mut raw = Vec::new();
        for _ in 0..n {
            raw.push(tokens.next().ok_or_else(|| truncated.clone())?);
        }

        let row: Option<Vec<usize>> = raw.into_iter().map(|v| usize::try_from(v).ok()).collect();
        match row {
            Some(row) if is_permutation(&row, n) => rows.push(row),
            _ => return Err(invalid_line(line)),
        }
    }
    Ok(rows)
}

/// Parse a complete instance from `text`, ignoring anything after it
pub fn parse_instance(text: &str) -> Result<Instance, ParseError> {
    read_instance(&mut Tokens::new(text))
}

/// Read `(hospital, student)` pairs until the stream ends
pub fn read_pairs(tokens: &mut Tokens<'_>) -> Vec<(i64, i64)> {
    let mut pairs = Vec::new();
    while let (Some(h), Some(s)) = (tokens.next(), tokens.next()) {
        pairs.push((h, s));
    }
    pairs
}

/// Write one `"<hospital> <student>"` line per hospital in id order.
///
/// An unmatched hospital is written with student `0`.
pub fn write_matching<W: Write>(out: &mut W, matching: &Matching) -> io::Result<()> {
    for h in 1..=matching.n() {
        writeln!(out, "{} {}", h, matching.student_of(h).unwrap_or(0))?;
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
