// Copyright © 2016–2018 University of Malta

// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public License
// as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License and a copy of the GNU General Public License along with
// this program. If not, see <http://www.gnu.org/licenses/>.

use std::error;
use std::fmt::{self, Display, Formatter};

/// A specialized [`Result`](https://doc.rust-lang.org/std/result/)
/// type for operations that can fail with an [`Error`](struct.Error.html).
pub type Result<T> = ::std::result::Result<T, Error>;

/// The kind of an [`Error`](struct.Error.html).
///
/// The set of kinds is closed: every failure of the crate maps to
/// exactly one of these variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// A string could not be parsed as a number.
    InvalidNumber,
    /// An empty (or all whitespace) string was parsed.
    EmptyString,
    /// A digit is not valid for the radix in use.
    InvalidDigit,
    /// The radix is outside 2 to 16.
    InvalidRadix,
    /// A fraction string has more than one `/`.
    TooManySlashes,
    /// A rounding mode name was not recognized.
    UnknownRoundingMode,
    /// A modulo type name was not recognized.
    UnknownModType,
    /// A divisor or denominator is zero.
    DivisionByZero,
    /// The least common multiple of zero was requested.
    LcmOfZero,
    /// A bitwise operand is negative or not an integer.
    NotPositiveInteger,
    /// The result would be a complex number.
    ComplexResult,
    /// An argument is outside the domain of a function.
    OutOfRange,
    /// An aggregate was requested over no values.
    EmptyInput,
    /// A clamping range has its minimum above its maximum.
    InvalidBounds,
    /// A parameter has an invalid value.
    InvalidParameter,
    /// A parameter is valid but not supported by the operation.
    UnsupportedParameter,
    /// A fixed-point value was requested from a non-terminating
    /// fraction.
    NonIntegerFraction,
    /// A floating-point value is not a safe integer.
    UnsafeFloat,
}

/// An error which can be returned by the operations of this crate.
///
/// # Examples
///
/// ```rust
/// use exactnum::{ErrorKind, Number};
/// let err = "1.2.3".parse::<Number>().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidNumber);
/// assert_eq!(err.to_string(), "Cannot parse number \"1.2.3\"");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    fragment: Option<String>,
}

impl Error {
    #[inline]
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error {
            kind,
            fragment: None,
        }
    }

    #[inline]
    pub(crate) fn with_fragment<S>(kind: ErrorKind, fragment: S) -> Error
    where
        S: Into<String>,
    {
        Error {
            kind,
            fragment: Some(fragment.into()),
        }
    }

    /// Returns the kind of the error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the offending input, if the error carries one.
    #[inline]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_ref().map(String::as_str)
    }

    fn message(&self) -> &'static str {
        use self::ErrorKind::*;
        match self.kind {
            InvalidNumber => "Cannot parse number",
            EmptyString => "Empty string is not allowed",
            InvalidDigit => "Invalid digit",
            InvalidRadix => "Invalid radix",
            TooManySlashes => "Cannot parse fraction with more than one /",
            UnknownRoundingMode => "Invalid rounding mode",
            UnknownModType => "Invalid modulo type",
            DivisionByZero => "Division by zero",
            LcmOfZero => "LCM of zero is undefined",
            NotPositiveInteger => "Only positive integers are supported",
            ComplexResult => "Complex numbers are not supported",
            OutOfRange => "Out of range",
            EmptyInput => "Got empty array",
            InvalidBounds => "Min parameter has to be smaller than max",
            InvalidParameter => "Invalid parameter",
            UnsupportedParameter => "Unsupported parameter",
            NonIntegerFraction => {
                "Cannot create a fixed-point number from a non-terminating fraction"
            }
            UnsafeFloat => "Floating point values must be safe integers",
        }
    }
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.message())?;
        match self.fragment {
            Some(ref fragment) => write!(f, " \"{}\"", fragment),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn check_display() {
        let err = Error::with_fragment(ErrorKind::InvalidDigit, "g");
        assert_eq!(err.to_string(), "Invalid digit \"g\"");
        assert_eq!(err.fragment(), Some("g"));

        let err = Error::new(ErrorKind::LcmOfZero);
        assert_eq!(err.to_string(), "LCM of zero is undefined");
        assert_eq!(err.fragment(), None);
        assert_eq!(err.kind(), ErrorKind::LcmOfZero);
    }
}
