#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]
#![warn(clippy::std_instead_of_alloc)]
#![warn(clippy::std_instead_of_core)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod macros;

mod bounds;
mod error;
mod factory;
mod sequence;
pub mod storage;
mod view;
mod view_mut;

// Flat API hierarchy of common traits and types

pub use self::bounds::*;
pub use self::error::*;
pub use self::factory::*;
pub use self::sequence::*;
pub use self::view::*;
pub use self::view_mut::*;

/// Read-only view over `AT_LEAST..=AT_MOST` bytes.
pub type BoundedBytes<'a, const AT_LEAST: usize, const AT_MOST: usize> = BoundedView<'a, u8, AT_LEAST, AT_MOST>;

/// Read-write view over `AT_LEAST..=AT_MOST` bytes.
pub type BoundedBytesMut<'a, const AT_LEAST: usize, const AT_MOST: usize> =
    MutableBoundedView<'a, u8, AT_LEAST, AT_MOST>;

/// Read-only view over exactly `N` bytes.
pub type SizedBytes<'a, const N: usize> = SizedView<'a, u8, N>;

/// Read-write view over exactly `N` bytes.
pub type SizedBytesMut<'a, const N: usize> = SizedViewMut<'a, u8, N>;

// Trait that can only be implemented within the current module
pub(crate) mod private {
    #[doc(hidden)]
    pub trait Sealed {}
}
