//! Backend strategy for [`AtomicCell`](super::AtomicCell).
//!
//! A storage owns one value of a scalar kind and performs each primitive
//! step indivisibly. [`Locked`](super::locked::Locked) does so with a
//! critical section per step; the `std::sync::atomic` types do so with
//! hardware instructions. The operation family in `cell` is written once
//! against these traits.

use super::num::{Integer, Scalar};
use super::MemoryOrder;

/// Indivisible storage for a value of kind `T`.
pub trait Storage<T: Scalar>: Sized {
    /// `true` when steps complete without a blocking primitive.
    const IS_LOCK_FREE: bool;

    /// Creates storage holding `value`.
    fn new(value: T) -> Self;

    /// Consumes the storage and returns the value it held.
    fn into_inner(self) -> T;

    /// Returns a mutable reference to the value.
    ///
    /// Exclusive access makes this safe without synchronization.
    fn get_mut(&mut self) -> &mut T;

    /// Reads the value.
    fn load(&self, order: MemoryOrder) -> T;

    /// Overwrites the value.
    fn store(&self, value: T, order: MemoryOrder);

    /// Replaces the value, returning the previous one.
    fn swap(&self, value: T, order: MemoryOrder) -> T;

    /// Replaces the value with `new` iff it equals `current`.
    ///
    /// Returns `Ok(previous)` on success and `Err(actual)` otherwise. Never
    /// fails spuriously.
    fn compare_exchange(&self, current: T, new: T, order: MemoryOrder) -> Result<T, T>;

    /// Applies `f` to the value, storing the result when it is `Some`.
    ///
    /// Returns `Ok(previous)` if a new value was stored and `Err(previous)`
    /// otherwise.
    fn fetch_update<F>(&self, order: MemoryOrder, f: F) -> Result<T, T>
    where
        F: FnMut(T) -> Option<T>;
}

/// Storage that also supports fetch-and-modify on integer kinds.
pub trait FetchStorage<T: Integer>: Storage<T> {
    /// Wrapping add, returning the previous value.
    fn fetch_add(&self, operand: T, order: MemoryOrder) -> T;

    /// Wrapping subtract, returning the previous value.
    fn fetch_sub(&self, operand: T, order: MemoryOrder) -> T;

    /// Bitwise "or", returning the previous value.
    fn fetch_or(&self, operand: T, order: MemoryOrder) -> T;

    /// Bitwise "and", returning the previous value.
    fn fetch_and(&self, operand: T, order: MemoryOrder) -> T;

    /// Bitwise "xor", returning the previous value.
    fn fetch_xor(&self, operand: T, order: MemoryOrder) -> T;
}
