use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A decimal string contained something other than `0`-`9`.
    InvalidDigit { position: usize, found: char },
    /// A decimal string had no digits at all.
    Empty,
    /// The divisor of `/` or `%` was zero.
    DivisionByZero,
    /// Only base 10 text is supported.
    UnsupportedRadix(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:?}", self) }
}

impl std::error::Error for Error {}
