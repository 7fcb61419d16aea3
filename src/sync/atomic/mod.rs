//! Atomic types built from exclusive locks.
//!
//! The crate-level aliases ([`AtomicU32`], [`AtomicFlag`], ...) and fences
//! come from the [`locked`] backend unless the `native` feature selects the
//! [`native`] one. Both backends are always available by path.

mod cell;
pub use self::cell::AtomicCell;

pub mod locked;
pub mod native;

mod num;
pub use self::num::{Integer, Scalar};

mod order;
pub use self::order::{MemoryOrder, ParseMemoryOrderError};

pub mod storage;

cfg_if::cfg_if! {
    if #[cfg(feature = "native")] {
        pub use self::native::{AtomicI16, AtomicI32, AtomicI64, AtomicI8, AtomicUsize};
        pub use self::native::{AtomicU16, AtomicU32, AtomicU64, AtomicU8};
        pub use self::native::{signal_fence, thread_fence, AtomicFlag};
    } else {
        pub use self::locked::{AtomicI16, AtomicI32, AtomicI64, AtomicI8, AtomicUsize};
        pub use self::locked::{AtomicU16, AtomicU32, AtomicU64, AtomicU8};
        pub use self::locked::{signal_fence, thread_fence, AtomicFlag};
    }
}
