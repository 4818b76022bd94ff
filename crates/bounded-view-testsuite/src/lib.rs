//! Shared fixtures for the integration tests.

use bounded_view::{SizeBounds, StaticBounds};

/// Comma-separated sample used across the slicing tests.
pub const SAMPLE: &[u8; 20] = b"abc,de,efg,h,ijk,lmn";

/// A TPKT header announcing a 20-byte frame, followed by the frame body.
pub const TPKT_FRAME: &[u8; 20] = b"\x03\x00\x00\x14\x02\xf0\x80hello, bounds";

/// Returns the static bounds of the type of `value`.
pub fn bounds_of_val<S: StaticBounds + ?Sized>(_: &S) -> SizeBounds {
    S::BOUNDS
}
