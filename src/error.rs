//! Error types returned while building an archive.

use std::borrow::Cow;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Generic result type with [`ZipError`] as its error variant
pub type ZipResult<T> = Result<T, ZipError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ZipError {
    /// The source file could not be stat'ed or read.
    #[error("failed to read {}: {source}", .path.display())]
    FilesystemRead { path: PathBuf, source: io::Error },

    /// The finished archive could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    FilesystemWrite { path: PathBuf, source: io::Error },

    /// A packed MS-DOS date or time did not fit in 16 bits.
    #[error("invalid MS-DOS timestamp encoding: {0}")]
    Encoding(#[from] ParseIntError),

    /// The entry needs Zip64, which is not produced.
    #[error("unsupported: {0}")]
    Unsupported(Cow<'static, str>),
}

pub(crate) fn unsupported<T, M: Into<Cow<'static, str>>>(message: M) -> ZipResult<T> {
    Err(ZipError::Unsupported(message.into()))
}
