//! Parsing of textual element values and index ranges
//!
//! Used by command-line front ends; the view itself only deals in
//! [`Number`] values and integer bounds.

use crate::{FormatCode, Number, Result, SmmapError};

/// Parse a range in the format `low:high`
///
/// Either side may be omitted (`:10`, `5:`), meaning "from the start" and
/// "to the end" respectively. Bounds may be negative; they are clamped by
/// the view, not wrapped.
pub fn parse_range(range_str: &str) -> Result<(isize, isize)> {
    let (low, high) = range_str
        .split_once(':')
        .ok_or(SmmapError::InvalidLiteral)?;

    let low = match low.trim() {
        "" => 0,
        s => s.parse::<isize>().map_err(|_| SmmapError::InvalidLiteral)?,
    };
    let high = match high.trim() {
        "" => isize::MAX,
        s => s.parse::<isize>().map_err(|_| SmmapError::InvalidLiteral)?,
    };

    Ok((low, high))
}

/// Parse a literal into the [`Number`] variant natural for `code`
///
/// Integer formats accept only integer literals; float formats accept any
/// decimal literal, including `inf` and `nan`. Range checking is left to the
/// encoder so that the error names the format.
pub fn parse_number(literal: &str, code: FormatCode) -> Result<Number> {
    let literal = literal.trim();
    if literal.is_empty() {
        return Err(SmmapError::InvalidLiteral);
    }

    if code.is_float() {
        return literal
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| SmmapError::InvalidLiteral);
    }

    if literal.starts_with('-') {
        literal
            .parse::<i64>()
            .map(Number::Int)
            .map_err(|_| SmmapError::ValueOutOfRange { code }.or_literal(literal))
    } else {
        literal
            .parse::<u64>()
            .map(Number::UInt)
            .map_err(|_| SmmapError::ValueOutOfRange { code }.or_literal(literal))
    }
}

impl SmmapError {
    /// Distinguish "well-formed but too large" from "not a number at all"
    fn or_literal(self, literal: &str) -> SmmapError {
        let digits = literal.strip_prefix(['-', '+']).unwrap_or(literal);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            self
        } else {
            SmmapError::InvalidLiteral
        }
    }
}
