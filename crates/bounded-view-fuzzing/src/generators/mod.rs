//! Test case generators.
//!
//! Test case generators take raw, unstructured input from a fuzzer
//! (e.g. libFuzzer) and translate that into a structured test case (e.g. a
//! buffer and a sequence of slicing operations to apply to it).
//!
//! These are generally implementations of the `Arbitrary` trait.

use arbitrary::Arbitrary;

/// A buffer and the slicing operations to apply to it, one after the other.
#[derive(Arbitrary, Debug)]
pub struct SlicingInput<'a> {
    pub data: &'a [u8],
    pub ops: Vec<SliceOp>,
}

/// One dynamic slicing operation.
///
/// Counts are kept small so that a good share of the generated operations are in range.
#[derive(Arbitrary, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceOp {
    First(u8),
    Last(u8),
    FromOffset(u8),
    Subarray { offset: u8, count: u8 },
    DropFront(u8),
    DropBack(u8),
}

impl SliceOp {
    /// Applies the operation to the range `start..end` of a buffer, using plain index arithmetic.
    ///
    /// Returns `None` when the operation does not fit in the range.
    pub fn apply_to_range(self, start: usize, end: usize) -> Option<(usize, usize)> {
        let len = end.checked_sub(start)?;

        match self {
            Self::First(n) => {
                let n = usize::from(n);
                (n <= len).then(|| (start, start + n))
            }
            Self::Last(n) => {
                let n = usize::from(n);
                (n <= len).then(|| (end - n, end))
            }
            Self::FromOffset(n) | Self::DropFront(n) => {
                let n = usize::from(n);
                (n <= len).then(|| (start + n, end))
            }
            Self::Subarray { offset, count } => {
                let (offset, count) = (usize::from(offset), usize::from(count));
                (offset <= len && count <= len - offset).then(|| (start + offset, start + offset + count))
            }
            Self::DropBack(n) => {
                let n = usize::from(n);
                (n <= len).then(|| (start, end - n))
            }
        }
    }
}
