use core::fmt;

use crate::{SizeBounds, UNBOUNDED};

/// A result type for the checked view operations.
pub type ViewResult<T> = Result<T, ViewError>;

/// Error returned by the checked view operations, wrapping a [`ViewErrorKind`].
pub type ViewError = bounded_view_error::Error<ViewErrorKind>;

/// Kinds of errors produced by the checked view operations.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewErrorKind {
    /// A sequence is too short or too long for the bounds of the requested view.
    LengthOutOfBounds {
        /// Length of the sequence.
        len: usize,
        /// Required minimum length.
        at_least: usize,
        /// Allowed maximum length, [`UNBOUNDED`] if there is none.
        at_most: usize,
    },
    /// A sub-range does not fit in the sequence it was requested from.
    RangeOutOfBounds {
        /// Start of the range.
        offset: usize,
        /// Number of elements in the range.
        count: usize,
        /// Length of the sequence.
        len: usize,
    },
}

#[cfg(feature = "std")]
impl core::error::Error for ViewErrorKind {}

impl fmt::Display for ViewErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthOutOfBounds {
                len,
                at_least,
                at_most: UNBOUNDED,
            } => write!(f, "length out of bounds: got {len} elements, expected at least {at_least}"),
            Self::LengthOutOfBounds { len, at_least, at_most } if at_least == at_most => {
                write!(f, "length out of bounds: got {len} elements, expected exactly {at_least}")
            }
            Self::LengthOutOfBounds { len, at_least, at_most } => write!(
                f,
                "length out of bounds: got {len} elements, expected between {at_least} and {at_most}"
            ),
            Self::RangeOutOfBounds { offset, count, len } => write!(
                f,
                "range out of bounds: {count} elements at offset {offset} requested from {len} elements"
            ),
        }
    }
}

pub(crate) fn length_out_of_bounds_err(context: &'static str, len: usize, bounds: SizeBounds) -> ViewError {
    ViewError::new(
        context,
        ViewErrorKind::LengthOutOfBounds {
            len,
            at_least: bounds.at_least(),
            at_most: bounds.at_most(),
        },
    )
}

pub(crate) fn range_out_of_bounds_err(context: &'static str, offset: usize, count: usize, len: usize) -> ViewError {
    ViewError::new(context, ViewErrorKind::RangeOutOfBounds { offset, count, len })
}
