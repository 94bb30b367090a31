//! Error types.

use thiserror::Error;

/// Error creating a UUID from a byte slice whose length is not 16.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[error("invalid byte length: expected 16, found {len}")]
pub struct LengthError {
    /// Length of the rejected slice.
    pub len: usize,
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
pub enum ParseError {
    /// No string was supplied.
    #[error("missing string representation")]
    Missing,

    /// The string is not 36 bytes long.
    #[error("invalid length: expected 36, found {len}")]
    InvalidLength {
        /// Length of the rejected string in bytes.
        len: usize,
    },

    /// A hyphen is expected at `index` but something else is found.
    #[error("expected '-' at index {index}")]
    MissingHyphen {
        /// Byte offset of the misplaced character.
        index: usize,
    },

    /// A non-hexadecimal character is found at `index`.
    #[error("invalid hexadecimal digit {found:?} at index {index}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        index: usize,

        /// The offending character.
        found: char,
    },
}

/// Error parsing an unrecognized [`RngMode`](crate::RngMode) spelling.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("unrecognized random source mode '{0}' (expected 'secure', 'pseudo', or 'seeded:<u64>')")]
pub struct ModeError(pub String);

/// Error returned by [`init`](crate::init) once the process-wide codec already exists.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
pub enum InitError {
    /// The global codec has been initialized, either explicitly or on first use.
    #[error("global codec already initialized")]
    AlreadyInitialized,
}

/// Any error this crate produces.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum Error {
    /// See [`LengthError`].
    #[error(transparent)]
    Length(#[from] LengthError),

    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// See [`ModeError`].
    #[error(transparent)]
    Mode(#[from] ModeError),

    /// See [`InitError`].
    #[error(transparent)]
    Init(#[from] InitError),
}
