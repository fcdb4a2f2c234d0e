use thiserror::Error;

/// Errors produced while decoding or encoding bencode.
#[derive(Debug, Error)]
pub enum BencodeError {
    /// The input ended before the current value was complete.
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEof { offset: usize },

    /// The input violates the bencode grammar or its canonical form.
    #[error("invalid format at byte {offset}: {reason}")]
    InvalidFormat { offset: usize, reason: &'static str },

    /// The value handed to the encoder has no bencode representation.
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),

    /// Lists and dictionaries are nested deeper than the configured limit.
    #[error("nesting deeper than {depth} levels")]
    NestingTooDeep { depth: usize },

    /// Bytes remain after a complete value.
    #[error("trailing data after value at byte {offset}")]
    TrailingData { offset: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`BencodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnexpectedEof,
    InvalidFormat,
    UnsupportedType,
    NestingTooDeep,
    TrailingData,
    Io,
}

impl BencodeError {
    pub(crate) fn invalid(offset: usize, reason: &'static str) -> Self {
        BencodeError::InvalidFormat { offset, reason }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BencodeError::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
            BencodeError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            BencodeError::UnsupportedType(_) => ErrorKind::UnsupportedType,
            BencodeError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            BencodeError::TrailingData { .. } => ErrorKind::TrailingData,
            BencodeError::Io(_) => ErrorKind::Io,
        }
    }

    /// Returns the input offset the error was detected at, if it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            BencodeError::UnexpectedEof { offset }
            | BencodeError::InvalidFormat { offset, .. }
            | BencodeError::TrailingData { offset } => Some(*offset),
            _ => None,
        }
    }
}
