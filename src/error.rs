//! Error types for configuration resolution.
//!
//! Every operation in the crate reports failures through [`Error`]. The set of
//! variants is closed: callers can match on [`Error::kind`] without caring about
//! the attached detail.

use thiserror::Error;

/// Errors raised while resolving, binding, or decrypting configuration values.
#[derive(Error, Debug)]
pub enum Error {
    #[error("target is not a struct")]
    NotStructPointer,

    #[error("field '{0}' does not exist or is not public")]
    NotExported(String),

    #[error("field '{field}' has unsupported type {kind}")]
    UnhandledType { field: String, kind: &'static str },

    #[error("cannot parse value for field '{field}': {reason}")]
    Parse { field: String, reason: String },

    #[error("bad file format, missing '=' at {0}")]
    BadFileFormat(String),

    #[error("bad base64 encoding: {0}")]
    BadEncoding(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("invalid key: authentication failed")]
    InvalidKey,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fieldless discriminant of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotStructPointer,
    NotExported,
    UnhandledType,
    Parse,
    BadFileFormat,
    BadEncoding,
    Internal,
    InvalidKey,
    Io,
}

impl Error {
    /// The kind of this error, without its detail.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotStructPointer => ErrorKind::NotStructPointer,
            Self::NotExported(_) => ErrorKind::NotExported,
            Self::UnhandledType { .. } => ErrorKind::UnhandledType,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::BadFileFormat(_) => ErrorKind::BadFileFormat,
            Self::BadEncoding(_) => ErrorKind::BadEncoding,
            Self::Internal(_) => ErrorKind::Internal,
            Self::InvalidKey => ErrorKind::InvalidKey,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
