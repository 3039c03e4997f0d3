//! The [`Error`] type for everything that can go wrong during a fill run.

use crate::config::Config;
use std::{fmt::Display, io, path::PathBuf, sync::Arc};

/// All possible errors of a fill run.
///
/// Errors are returned by [`fill_result!`](crate::fill_result!) and
/// [`Input::fill_result`](crate::input::Input::fill_result). The
/// panicking interfaces ([`fill!`](crate::fill!) and friends) panic
/// with the same messages, prefixed with `fill!: `.
#[derive(Debug, Clone)]
pub enum Error {
    /// The configured text block is empty. An empty block would never
    /// advance the written-bytes counter, so it is rejected before the
    /// output file is touched.
    EmptyBlock,
    /// Any I/O failure while creating, writing, or flushing the output
    /// file, or while reporting the summary. Covers permission denial,
    /// disk exhaustion, and every other rejection of the underlying
    /// storage layer. Whatever was written before the failure remains
    /// on disk.
    ///
    /// ```
    /// use brim::prelude::*;
    ///
    /// let result: Result<(), Error> =
    ///     fill_result!("does-not-exist/file1.txt", TargetSize(10));
    /// match result {
    ///     Err(Error::FileIoError { path, .. }) => {
    ///         assert_eq!(path.to_str(), Some("does-not-exist/file1.txt"));
    ///     }
    ///     _ => panic!("should match Error::FileIoError"),
    /// }
    /// ```
    FileIoError {
        path: PathBuf,
        source: Arc<io::Error>,
    },
}

impl Error {
    pub(crate) fn file_io_error(config: &Config, error: io::Error) -> Error {
        Error::FileIoError {
            path: config.output_path.clone(),
            source: Arc::new(error),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyBlock => write!(f, "the text block must not be empty"),
            Error::FileIoError { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::EmptyBlock => None,
            Error::FileIoError { source, .. } => Some(&**source),
        }
    }
}

#[doc(hidden)]
#[rustversion::attr(since(1.46), track_caller)]
pub fn panic_on_error<T>(result: Result<T, Error>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("fill!: {}", error),
    }
}
