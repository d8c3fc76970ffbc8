//! When an operation on a [`BigInt`](crate::BigInt) cannot produce a value.

use crate::lib::fmt::{self, Debug, Display};

#[cfg(feature = "std")]
use std::error;

/// This type represents all possible errors that can occur when operating
/// on a [`BigInt`](crate::BigInt).
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
}

/// Alias for a `Result` with the error type `compactint::Error`.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error { code }
    }

    /// Specifies the cause of this error.
    ///
    /// Useful when precise error handling is required.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::DivideByZero` - a divisor or modulus was zero
    /// - `Category::Overflow` - the value does not fit the requested
    ///   representation
    /// - `Category::InvalidArgument` - an argument outside an operation's
    ///   domain
    pub fn classify(&self) -> Category {
        match self.code {
            ErrorCode::DivideByZero => Category::DivideByZero,
            ErrorCode::ValueOverflow
            | ErrorCode::NonFiniteFloat
            | ErrorCode::NegativeUnsigned => Category::Overflow,
            ErrorCode::NegativeExponent | ErrorCode::InvalidDigit | ErrorCode::EmptyInput => {
                Category::InvalidArgument
            }
        }
    }

    /// Returns true if this error was caused by a zero divisor or modulus.
    pub fn is_divide_by_zero(&self) -> bool {
        self.classify() == Category::DivideByZero
    }

    /// Returns true if this error was caused by a value that does not fit
    /// the requested representation.
    ///
    /// This covers narrowing conversions of out-of-range values, importing
    /// a non-finite float, and exporting a negative value through an
    /// unsigned byte format.
    pub fn is_overflow(&self) -> bool {
        self.classify() == Category::Overflow
    }

    /// Returns true if this error was caused by an argument outside an
    /// operation's domain, such as a negative `modpow` exponent or a
    /// malformed digit string.
    pub fn is_invalid_argument(&self) -> bool {
        self.classify() == Category::InvalidArgument
    }
}

/// Categorizes the cause of a `compactint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a zero divisor or modulus.
    DivideByZero,

    /// The error was caused by a value that does not fit the requested
    /// representation.
    Overflow,

    /// The error was caused by an argument outside an operation's domain.
    InvalidArgument,
}

/// This type describes all possible errors that can occur when operating
/// on a [`BigInt`](crate::BigInt).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum ErrorCode {
    /// A divisor or modulus was zero.
    DivideByZero,

    /// The value is out of range for the conversion target.
    ValueOverflow,

    /// A NaN or infinite float cannot be converted to an integer.
    NonFiniteFloat,

    /// A negative value cannot be exported through an unsigned format.
    NegativeUnsigned,

    /// An exponent was negative where only non-negative exponents are
    /// meaningful.
    NegativeExponent,

    /// A digit string contained a character outside `[0-9]`.
    InvalidDigit,

    /// A digit string contained no digits.
    EmptyInput,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::DivideByZero => f.write_str("attempt to divide by zero"),
            ErrorCode::ValueOverflow => f.write_str("value out of range for conversion"),
            ErrorCode::NonFiniteFloat => f.write_str("cannot convert NaN or infinity to integer"),
            ErrorCode::NegativeUnsigned => {
                f.write_str("cannot export negative value as unsigned bytes")
            }
            ErrorCode::NegativeExponent => f.write_str("exponent must be non-negative"),
            ErrorCode::InvalidDigit => f.write_str("invalid digit found in string"),
            ErrorCode::EmptyInput => f.write_str("cannot parse integer from empty string"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.code, f)
    }
}

// Remove a layer of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", self.code)
    }
}
