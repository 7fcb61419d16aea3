//! Lock-based backend.
//!
//! Every step runs inside a critical section of the cell's own exclusive
//! lock, so no hardware atomic instruction is needed. The memory-order token
//! is accepted and ignored: acquiring and releasing the lock already orders
//! the step like `SeqCst` with respect to the guarded value. Nothing is
//! ordered across two different cells.

use super::num::{Integer, Scalar};
use super::storage::{FetchStorage, Storage};
use super::{AtomicCell, MemoryOrder};

use lock_api::RawMutex;
use std::fmt;

/// Storage guarded by an exclusive lock of type `R`.
///
/// The value is only reachable through a guard of its lock. Any
/// [`lock_api::RawMutex`] supplied by the host runtime can stand in for `R`;
/// `R::INIT` initializes it, `lock`/`unlock` acquire and release it, and
/// dropping the storage destroys it.
pub struct Locked<T, R = parking_lot::RawMutex> {
    data: lock_api::Mutex<R, T>,
}

impl<T, R> Locked<T, R>
where
    T: Scalar,
    R: RawMutex,
{
    /// Read-modify-write
    ///
    /// Runs `f` on the value with the lock held and returns the previous
    /// value. `f` must not touch this storage again; the lock is not
    /// reentrant.
    fn rmw<F>(&self, f: F) -> T
    where
        F: FnOnce(T) -> T,
    {
        let mut value = self.data.lock();
        let prev = *value;
        *value = f(prev);
        prev
    }

    /// Read-modify-write that may decline to write.
    ///
    /// When `f` fails the value is left untouched and the error returned.
    fn try_rmw<F, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(T) -> Result<T, E>,
    {
        let mut value = self.data.lock();
        let prev = *value;
        *value = f(prev)?;
        Ok(prev)
    }
}

impl<T, R> Storage<T> for Locked<T, R>
where
    T: Scalar,
    R: RawMutex,
{
    const IS_LOCK_FREE: bool = false;

    fn new(value: T) -> Self {
        Locked {
            data: lock_api::Mutex::new(value),
        }
    }

    fn into_inner(self) -> T {
        self.data.into_inner()
    }

    fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }

    fn load(&self, _order: MemoryOrder) -> T {
        *self.data.lock()
    }

    fn store(&self, value: T, _order: MemoryOrder) {
        *self.data.lock() = value;
    }

    fn swap(&self, value: T, _order: MemoryOrder) -> T {
        let mut guard = self.data.lock();
        std::mem::replace(&mut *guard, value)
    }

    fn compare_exchange(&self, current: T, new: T, _order: MemoryOrder) -> Result<T, T> {
        self.try_rmw(|actual| if actual == current { Ok(new) } else { Err(actual) })
    }

    fn fetch_update<F>(&self, order: MemoryOrder, mut f: F) -> Result<T, T>
    where
        F: FnMut(T) -> Option<T>,
    {
        // `f` runs with the lock released, so it may use this storage.
        let mut prev = self.load(order);
        while let Some(next) = f(prev) {
            match self.compare_exchange(prev, next, order) {
                Ok(prev) => return Ok(prev),
                Err(actual) => prev = actual,
            }
        }
        Err(prev)
    }
}

impl<T, R> FetchStorage<T> for Locked<T, R>
where
    T: Integer,
    R: RawMutex,
{
    fn fetch_add(&self, operand: T, _order: MemoryOrder) -> T {
        self.rmw(|v| v.wrapping_add(operand))
    }

    fn fetch_sub(&self, operand: T, _order: MemoryOrder) -> T {
        self.rmw(|v| v.wrapping_sub(operand))
    }

    fn fetch_or(&self, operand: T, _order: MemoryOrder) -> T {
        self.rmw(|v| v.bit_or(operand))
    }

    fn fetch_and(&self, operand: T, _order: MemoryOrder) -> T {
        self.rmw(|v| v.bit_and(operand))
    }

    fn fetch_xor(&self, operand: T, _order: MemoryOrder) -> T {
        self.rmw(|v| v.bit_xor(operand))
    }
}

impl<T, R> fmt::Debug for Locked<T, R>
where
    T: Scalar,
    R: RawMutex,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = fmt.debug_struct("Locked");
        match self.data.try_lock() {
            Some(value) => d.field("value", &*value),
            None => d.field("value", &format_args!("<locked>")),
        };
        d.finish()
    }
}

/// Lock-based atomic `i8`.
pub type AtomicI8 = AtomicCell<i8, Locked<i8>>;

/// Lock-based atomic `i16`.
pub type AtomicI16 = AtomicCell<i16, Locked<i16>>;

/// Lock-based atomic `i32`.
pub type AtomicI32 = AtomicCell<i32, Locked<i32>>;

/// Lock-based atomic `i64`.
pub type AtomicI64 = AtomicCell<i64, Locked<i64>>;

/// Lock-based atomic `u8`.
pub type AtomicU8 = AtomicCell<u8, Locked<u8>>;

/// Lock-based atomic `u16`.
pub type AtomicU16 = AtomicCell<u16, Locked<u16>>;

/// Lock-based atomic `u32`.
pub type AtomicU32 = AtomicCell<u32, Locked<u32>>;

/// Lock-based atomic `u64`.
pub type AtomicU64 = AtomicCell<u64, Locked<u64>>;

/// Lock-based atomic pointer-width unsigned integer.
pub type AtomicUsize = AtomicCell<usize, Locked<usize>>;

/// Lock-based atomic boolean flag.
pub type AtomicFlag = AtomicCell<bool, Locked<bool>>;

/// A thread fence.
///
/// No-op: every state-changing operation of this backend already passes
/// through a full critical section, leaving a free-standing fence nothing to
/// add.
pub fn thread_fence(_order: MemoryOrder) {}

/// A signal fence.
///
/// No-op, for the same reason as [`thread_fence`].
pub fn signal_fence(_order: MemoryOrder) {}
