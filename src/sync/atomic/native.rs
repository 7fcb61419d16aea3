//! Hardware-backed backend.
//!
//! Implements [`Storage`] on top of the `std::sync::atomic` types for the
//! widths the target supports natively. Memory-order tokens map onto
//! [`std::sync::atomic::Ordering`] and fences are real fences. Observable
//! behavior for correctly synchronized code matches the lock backend. Weak
//! compare-exchange stays as strong as on the lock backend.

use super::storage::{FetchStorage, Storage};
use super::{AtomicCell, MemoryOrder};

use std::sync::atomic as std_atomic;

macro_rules! native_storage {
    ($width:tt, $atomic:ident, $t:ty) => {
        #[cfg(target_has_atomic = $width)]
        impl Storage<$t> for std_atomic::$atomic {
            const IS_LOCK_FREE: bool = true;

            fn new(value: $t) -> Self {
                std_atomic::$atomic::new(value)
            }

            fn into_inner(self) -> $t {
                std_atomic::$atomic::into_inner(self)
            }

            fn get_mut(&mut self) -> &mut $t {
                std_atomic::$atomic::get_mut(self)
            }

            fn load(&self, order: MemoryOrder) -> $t {
                std_atomic::$atomic::load(self, order.load())
            }

            fn store(&self, value: $t, order: MemoryOrder) {
                std_atomic::$atomic::store(self, value, order.store())
            }

            fn swap(&self, value: $t, order: MemoryOrder) -> $t {
                std_atomic::$atomic::swap(self, value, order.rmw())
            }

            fn compare_exchange(
                &self,
                current: $t,
                new: $t,
                order: MemoryOrder,
            ) -> Result<$t, $t> {
                std_atomic::$atomic::compare_exchange(
                    self,
                    current,
                    new,
                    order.rmw(),
                    order.failure().load(),
                )
            }

            fn fetch_update<F>(&self, order: MemoryOrder, f: F) -> Result<$t, $t>
            where
                F: FnMut($t) -> Option<$t>,
            {
                std_atomic::$atomic::fetch_update(self, order.rmw(), order.failure().load(), f)
            }
        }
    };
}

macro_rules! native_int {
    ($width:tt, $atomic:ident, $t:ty) => {
        native_storage!($width, $atomic, $t);

        #[cfg(target_has_atomic = $width)]
        impl FetchStorage<$t> for std_atomic::$atomic {
            fn fetch_add(&self, operand: $t, order: MemoryOrder) -> $t {
                std_atomic::$atomic::fetch_add(self, operand, order.rmw())
            }

            fn fetch_sub(&self, operand: $t, order: MemoryOrder) -> $t {
                std_atomic::$atomic::fetch_sub(self, operand, order.rmw())
            }

            fn fetch_or(&self, operand: $t, order: MemoryOrder) -> $t {
                std_atomic::$atomic::fetch_or(self, operand, order.rmw())
            }

            fn fetch_and(&self, operand: $t, order: MemoryOrder) -> $t {
                std_atomic::$atomic::fetch_and(self, operand, order.rmw())
            }

            fn fetch_xor(&self, operand: $t, order: MemoryOrder) -> $t {
                std_atomic::$atomic::fetch_xor(self, operand, order.rmw())
            }
        }

        #[cfg(target_has_atomic = $width)]
        #[doc = concat!(" Hardware-backed atomic `", stringify!($t), "`.")]
        pub type $atomic = AtomicCell<$t, std_atomic::$atomic>;
    };
}

native_int!("8", AtomicI8, i8);
native_int!("16", AtomicI16, i16);
native_int!("32", AtomicI32, i32);
native_int!("64", AtomicI64, i64);
native_int!("8", AtomicU8, u8);
native_int!("16", AtomicU16, u16);
native_int!("32", AtomicU32, u32);
native_int!("64", AtomicU64, u64);
native_int!("ptr", AtomicUsize, usize);

native_storage!("8", AtomicBool, bool);

/// Hardware-backed atomic boolean flag.
#[cfg(target_has_atomic = "8")]
pub type AtomicFlag = AtomicCell<bool, std_atomic::AtomicBool>;

/// A thread fence.
///
/// Maps onto [`std::sync::atomic::fence`]. A `Relaxed` fence does nothing.
pub fn thread_fence(order: MemoryOrder) {
    if order != MemoryOrder::Relaxed {
        std_atomic::fence(order.rmw());
    }
}

/// A signal fence.
///
/// Maps onto [`std::sync::atomic::compiler_fence`]. A `Relaxed` fence does
/// nothing.
pub fn signal_fence(order: MemoryOrder) {
    if order != MemoryOrder::Relaxed {
        std_atomic::compiler_fence(order.rmw());
    }
}
