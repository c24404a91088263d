//! Cell values and type inference
//!
//! Every data cell loaded from a CSV file is passed through [`infer`], which
//! turns the raw text into an integer, a float or plain text. Inference is
//! per cell, so a single column can hold a mix of kinds (for example `N/A`
//! next to numbers).
//!
//! Cells compare under one explicit total order:
//! - `Null` sorts before everything else
//! - `Integer` and `Float` compare numerically against each other
//! - `Text` sorts after every numeric cell and compares lexicographically

use std::cmp::Ordering;
use std::fmt;

/// A single typed scalar value in a table
#[derive(Debug, Clone)]
pub enum Cell {
    /// "No value" marker, produced by aggregating a column with no numbers
    Null,
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Anything that did not parse as a number, kept verbatim
    Text(String),
}

/// Convert raw cell text into a typed [`Cell`]
///
/// Tries an integer first, then a float, and falls back to the original
/// text. This never fails: text that is not a number is simply `Text`.
/// Surrounding whitespace is ignored when parsing numbers (`" 30"` is an
/// integer) but kept in the `Text` fallback.
/// Only decimal notation is accepted for floats, so words such as `inf` or
/// `NaN` stay text.
///
/// # Example
/// ```
/// # use csvslice::value::{infer, Cell};
/// assert_eq!(infer("42"), Cell::Integer(42));
/// assert_eq!(infer("1e3"), Cell::Float(1000.0));
/// assert_eq!(infer("N/A"), Cell::Text("N/A".to_string()));
/// ```
pub fn infer(text: &str) -> Cell {
    let trimmed = text.trim();

    if let Ok(i) = trimmed.parse::<i64>() {
        return Cell::Integer(i);
    }

    if trimmed.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(f) = trimmed.parse::<f64>() {
            return Cell::Float(f);
        }
    }

    Cell::Text(text.to_string())
}

impl Cell {
    /// Numeric value of the cell, if it holds one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Whether the cell is an `Integer` or a `Float`
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Integer(_) | Cell::Float(_))
    }

    /// Rank of the cell kind in the cross-kind order
    fn kind_rank(&self) -> u8 {
        match self {
            Cell::Null => 0,
            Cell::Integer(_) | Cell::Float(_) => 1,
            Cell::Text(_) => 2,
        }
    }
}

fn compare_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// -2^63 and 2^63, the bounds of `i64` as exact floats
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
const I64_END_F64: f64 = 9_223_372_036_854_775_808.0;

/// Exact integer/float comparison, without rounding the integer through `f64`
///
/// NaN sorts where `total_cmp` puts it: above everything when positive,
/// below everything when negative.
fn compare_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= I64_END_F64 {
        return Ordering::Less;
    }
    if f < I64_MIN_F64 {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    // In range and integral, so the cast is exact
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&f).unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Cell::Null, Cell::Null) => Ordering::Equal,
            (Cell::Integer(a), Cell::Integer(b)) => a.cmp(b),
            (Cell::Float(a), Cell::Float(b)) => compare_floats(*a, *b),
            (Cell::Integer(a), Cell::Float(b)) => compare_int_float(*a, *b),
            (Cell::Float(a), Cell::Integer(b)) => compare_int_float(*b, *a).reverse(),
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Equality follows the ordering, so `Integer(30) == Float(30.0)` while
/// text never equals a number.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cell {}

/// Floats always keep a decimal point (`30.0`) so they read differently
/// from integers. `Null` displays as an empty string.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Integer(i) => write!(f, "{i}"),
            Cell::Float(x) => write!(f, "{x:?}"),
            Cell::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        infer(s)
    }
}
