//! Error handling for block cipher modes of operation
//!
//! Every violation in this taxonomy is a caller error and is reported at the
//! point of misuse: key, IV and counter problems at construction, block and
//! data-sufficiency problems when the offending bytes are processed. Nothing
//! is retried or silently corrected (in particular, no mode auto-pads).

use core::fmt;

/// The error type for mode-of-operation misuse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key length does not match the primitive's accepted size
    KeyLength {
        /// Cipher whose key was malformed
        cipher: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Initialization vector length does not match the block size
    IvLength {
        /// Mode that required the IV
        mode: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Initial counter length does not match the block size
    CounterLength {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A single-block operation was given the wrong number of bytes
    BlockLength {
        /// Cipher whose block contract was violated
        cipher: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Too little data was supplied to complete the operation
    InsufficientData {
        /// Mode that needed more input
        mode: &'static str,
        /// Minimum number of bytes required
        needed: usize,
        /// Bytes actually available
        actual: usize,
    },

    /// A construction parameter that the chosen mode does not accept
    UnsupportedParameter {
        /// Mode the parameter was supplied to
        mode: &'static str,
        /// Name of the offending parameter
        parameter: &'static str,
    },
}

/// Result type for mode-of-operation operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyLength {
                cipher,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid key length for {}: expected {}, got {}",
                    cipher, expected, actual
                )
            }
            Error::IvLength {
                mode,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid IV length for {} mode: expected {}, got {}",
                    mode, expected, actual
                )
            }
            Error::CounterLength { expected, actual } => {
                write!(
                    f,
                    "Invalid initial counter length: expected {}, got {}",
                    expected, actual
                )
            }
            Error::BlockLength {
                cipher,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid block length for {}: expected {}, got {}",
                    cipher, expected, actual
                )
            }
            Error::InsufficientData {
                mode,
                needed,
                actual,
            } => {
                write!(
                    f,
                    "Insufficient data for {} mode: need at least {} bytes, got {}",
                    mode, needed, actual
                )
            }
            Error::UnsupportedParameter { mode, parameter } => {
                write!(f, "{} mode does not take the {} parameter", mode, parameter)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
