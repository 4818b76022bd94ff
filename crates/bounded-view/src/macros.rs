// Error helpers shared by the checked operations. The context names the public operation.

macro_rules! range_out_of_bounds_err {
    ( $context:expr, $offset:expr, $count:expr, $len:expr $(,)? ) => {{
        $crate::error::range_out_of_bounds_err($context, $offset, $count, $len)
    }};
}

macro_rules! ensure_bounds {
    (ctx: $ctx:expr, in: $buf:expr, bounds: $bounds:expr) => {{
        let len = $buf.len();
        let bounds: $crate::SizeBounds = $bounds;
        if !bounds.contains(len) {
            return Err($crate::error::length_out_of_bounds_err($ctx, len, bounds));
        }
    }};
}

/// Creates a [`SizedView`](crate::SizedView) over the bytes of a string literal.
///
/// The length of the view is the number of bytes of the literal: there is no terminator.
///
/// # Examples
///
/// ```
/// use bounded_view::{sized_bytes, SizedView};
///
/// let magic: SizedView<'static, u8, 4> = sized_bytes!("RDP8");
/// assert_eq!(magic.as_slice(), b"RDP8");
/// ```
#[macro_export]
macro_rules! sized_bytes {
    ($literal:literal) => {{
        const BYTES: &[u8] = $literal.as_bytes();
        const ARRAY: &[u8; BYTES.len()] = match BYTES.first_chunk::<{ BYTES.len() }>() {
            Some(array) => array,
            None => unreachable!(),
        };
        $crate::SizedView::<'static, u8, { BYTES.len() }>::from_array(ARRAY)
    }};
}
