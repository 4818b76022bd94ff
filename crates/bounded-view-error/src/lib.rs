#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use core::fmt;

/// An error raised by a named operation, with a domain-specific kind.
///
/// The context is a `&'static str`, usually the path of the operation that failed, so that
/// building an error never allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Error<Kind> {
    /// Operation that failed.
    pub context: &'static str,
    /// What went wrong.
    pub kind: Kind,
}

impl<Kind> Error<Kind> {
    /// Creates a new error of the given kind.
    #[cold]
    #[must_use]
    pub fn new(context: &'static str, kind: Kind) -> Self {
        Self { context, kind }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Returns the operation that failed.
    pub fn context(&self) -> &'static str {
        self.context
    }
}

impl<Kind: fmt::Display> fmt::Display for Error<Kind> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.context, self.kind)
    }
}

#[cfg(feature = "std")]
impl<Kind: std::error::Error> std::error::Error for Error<Kind> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

#[cfg(feature = "std")]
impl<Kind> From<Error<Kind>> for std::io::Error
where
    Kind: std::error::Error + Send + Sync + 'static,
{
    fn from(error: Error<Kind>) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, error)
    }
}
