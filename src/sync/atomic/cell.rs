use super::locked::Locked;
use super::num::{Integer, Scalar};
use super::storage::{FetchStorage, Storage};
use super::MemoryOrder;

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

/// An atomic cell holding one value of a scalar kind.
///
/// `T` is the kind, `S` the storage backend. With the default [`Locked`]
/// storage, every operation acquires the cell's own exclusive lock, performs
/// exactly one step, and releases the lock before returning. Operations on
/// one cell are totally ordered by lock acquisition; nothing is ordered
/// across cells.
///
/// Every operation comes in two forms: `op_explicit(order, ..)` taking a
/// [`MemoryOrder`], and `op(..)` which passes [`MemoryOrder::SeqCst`].
///
/// # Examples
///
/// ```
/// use atomic_fallback::sync::atomic::locked::AtomicU32;
///
/// let counter = AtomicU32::init(0);
///
/// assert_eq!(0, counter.fetch_add(5));
/// assert!(counter.compare_exchange_strong(5, 10));
/// assert!(!counter.compare_exchange_strong(5, 20));
///
/// assert_eq!(10, counter.destroy());
/// ```
///
/// Fetch-and-modify is not defined for the flag kind:
///
/// ```compile_fail
/// use atomic_fallback::sync::atomic::locked::AtomicFlag;
///
/// let flag = AtomicFlag::init(false);
/// flag.fetch_or(true);
/// ```
///
/// A destroyed cell cannot be used again:
///
/// ```compile_fail
/// use atomic_fallback::sync::atomic::locked::AtomicU8;
///
/// let cell = AtomicU8::init(1);
/// cell.destroy();
/// cell.load();
/// ```
pub struct AtomicCell<T, S = Locked<T>> {
    storage: S,
    _p: PhantomData<fn() -> T>,
}

impl<T, S> AtomicCell<T, S>
where
    T: Scalar,
    S: Storage<T>,
{
    /// `true` when this cell's backend completes operations without a
    /// blocking primitive. Always `false` for [`Locked`] storage.
    pub const IS_LOCK_FREE: bool = S::IS_LOCK_FREE;

    /// Creates a cell holding `value`, binding a freshly initialized lock.
    pub fn init(value: T) -> Self {
        debug!(?value, lock_free = S::IS_LOCK_FREE, "AtomicCell::init");

        AtomicCell {
            storage: S::new(value),
            _p: PhantomData,
        }
    }

    /// Creates a cell holding `value`. Same as [`init`](Self::init).
    pub fn new(value: T) -> Self {
        Self::init(value)
    }

    /// Destroys the cell, releasing its lock, and returns the final value.
    ///
    /// Taking `self` by value means no other context can still hold or wait
    /// on the lock, and the cell cannot be used afterwards.
    pub fn destroy(self) -> T {
        let value = self.storage.into_inner();
        debug!(?value, "AtomicCell::destroy");
        value
    }

    /// Consumes the cell and returns the contained value. Same as
    /// [`destroy`](Self::destroy).
    pub fn into_inner(self) -> T {
        self.destroy()
    }

    /// Returns a mutable reference to the value.
    ///
    /// The borrow checker guarantees no concurrent access, so no lock is
    /// taken.
    pub fn get_mut(&mut self) -> &mut T {
        self.storage.get_mut()
    }

    /// Returns `true` if operations on this cell are lock-free.
    ///
    /// Always `false` for [`Locked`] storage, whatever the kind.
    pub fn is_lock_free(&self) -> bool {
        S::IS_LOCK_FREE
    }

    /// Loads the value.
    pub fn load_explicit(&self, order: MemoryOrder) -> T {
        trace!(?order, "AtomicCell::load");
        self.storage.load(order)
    }

    /// Loads the value with `SeqCst` ordering.
    pub fn load(&self) -> T {
        self.load_explicit(MemoryOrder::SeqCst)
    }

    /// Stores `value`.
    pub fn store_explicit(&self, order: MemoryOrder, value: T) {
        trace!(?order, ?value, "AtomicCell::store");
        self.storage.store(value, order)
    }

    /// Stores `value` with `SeqCst` ordering.
    pub fn store(&self, value: T) {
        self.store_explicit(MemoryOrder::SeqCst, value)
    }

    /// Stores `value`, returning the previous value.
    ///
    /// The returned value and the stored one belong to the same logical
    /// instant.
    pub fn exchange_explicit(&self, order: MemoryOrder, value: T) -> T {
        trace!(?order, ?value, "AtomicCell::exchange");
        self.storage.swap(value, order)
    }

    /// Stores `value` with `SeqCst` ordering, returning the previous value.
    pub fn exchange(&self, value: T) -> T {
        self.exchange_explicit(MemoryOrder::SeqCst, value)
    }

    /// Stores `desired` if the current value equals `expected`.
    ///
    /// Returns `true` when the value was replaced. A `false` result always
    /// means the values differed at the instant of comparison.
    pub fn compare_exchange_strong_explicit(
        &self,
        expected: T,
        desired: T,
        order: MemoryOrder,
    ) -> bool {
        self.compare_exchange_explicit(expected, desired, order).is_ok()
    }

    /// Strong compare-exchange with `SeqCst` ordering.
    pub fn compare_exchange_strong(&self, expected: T, desired: T) -> bool {
        self.compare_exchange_strong_explicit(expected, desired, MemoryOrder::SeqCst)
    }

    /// Weak compare-exchange.
    ///
    /// Identical to [`compare_exchange_strong_explicit`]: neither backend
    /// fails spuriously.
    ///
    /// [`compare_exchange_strong_explicit`]: Self::compare_exchange_strong_explicit
    pub fn compare_exchange_weak_explicit(
        &self,
        expected: T,
        desired: T,
        order: MemoryOrder,
    ) -> bool {
        self.compare_exchange_strong_explicit(expected, desired, order)
    }

    /// Weak compare-exchange with `SeqCst` ordering.
    pub fn compare_exchange_weak(&self, expected: T, desired: T) -> bool {
        self.compare_exchange_weak_explicit(expected, desired, MemoryOrder::SeqCst)
    }

    /// Stores `desired` if the current value equals `expected`, reporting
    /// the value observed.
    ///
    /// Returns `Ok(previous)` on success and `Err(actual)` on failure, so a
    /// retry loop needs no extra load.
    pub fn compare_exchange(&self, expected: T, desired: T) -> Result<T, T> {
        self.compare_exchange_explicit(expected, desired, MemoryOrder::SeqCst)
    }

    /// [`compare_exchange`](Self::compare_exchange) with an explicit order.
    pub fn compare_exchange_explicit(
        &self,
        expected: T,
        desired: T,
        order: MemoryOrder,
    ) -> Result<T, T> {
        trace!(?order, ?expected, ?desired, "AtomicCell::compare_exchange");
        self.storage.compare_exchange(expected, desired, order)
    }

    /// Fetches the value and applies `f`, storing the result if it is
    /// `Some`.
    ///
    /// Returns `Ok(previous)` if a value was stored, `Err(previous)`
    /// otherwise. `f` runs with no lock held, so it may read this cell. When
    /// another context changes the value in between, `f` is called again
    /// with the new value.
    pub fn fetch_update<F>(&self, order: MemoryOrder, f: F) -> Result<T, T>
    where
        F: FnMut(T) -> Option<T>,
    {
        trace!(?order, "AtomicCell::fetch_update");
        self.storage.fetch_update(order, f)
    }
}

impl<T, S> AtomicCell<T, S>
where
    T: Integer,
    S: FetchStorage<T>,
{
    /// Adds `operand`, wrapping on overflow, and returns the previous value.
    pub fn fetch_add_explicit(&self, order: MemoryOrder, operand: T) -> T {
        trace!(?order, ?operand, "AtomicCell::fetch_add");
        self.storage.fetch_add(operand, order)
    }

    /// Adds `operand` with `SeqCst` ordering.
    pub fn fetch_add(&self, operand: T) -> T {
        self.fetch_add_explicit(MemoryOrder::SeqCst, operand)
    }

    /// Subtracts `operand`, wrapping on overflow, and returns the previous
    /// value.
    pub fn fetch_sub_explicit(&self, order: MemoryOrder, operand: T) -> T {
        trace!(?order, ?operand, "AtomicCell::fetch_sub");
        self.storage.fetch_sub(operand, order)
    }

    /// Subtracts `operand` with `SeqCst` ordering.
    pub fn fetch_sub(&self, operand: T) -> T {
        self.fetch_sub_explicit(MemoryOrder::SeqCst, operand)
    }

    /// Bitwise "or" with `operand`, returning the previous value.
    pub fn fetch_or_explicit(&self, order: MemoryOrder, operand: T) -> T {
        trace!(?order, ?operand, "AtomicCell::fetch_or");
        self.storage.fetch_or(operand, order)
    }

    /// Bitwise "or" with `SeqCst` ordering.
    pub fn fetch_or(&self, operand: T) -> T {
        self.fetch_or_explicit(MemoryOrder::SeqCst, operand)
    }

    /// Bitwise "and" with `operand`, returning the previous value.
    pub fn fetch_and_explicit(&self, order: MemoryOrder, operand: T) -> T {
        trace!(?order, ?operand, "AtomicCell::fetch_and");
        self.storage.fetch_and(operand, order)
    }

    /// Bitwise "and" with `SeqCst` ordering.
    pub fn fetch_and(&self, operand: T) -> T {
        self.fetch_and_explicit(MemoryOrder::SeqCst, operand)
    }

    /// Bitwise "xor" with `operand`, returning the previous value.
    pub fn fetch_xor_explicit(&self, order: MemoryOrder, operand: T) -> T {
        trace!(?order, ?operand, "AtomicCell::fetch_xor");
        self.storage.fetch_xor(operand, order)
    }

    /// Bitwise "xor" with `SeqCst` ordering.
    pub fn fetch_xor(&self, operand: T) -> T {
        self.fetch_xor_explicit(MemoryOrder::SeqCst, operand)
    }
}

impl<S> AtomicCell<bool, S>
where
    S: Storage<bool>,
{
    /// Sets the flag, returning its previous state.
    pub fn test_and_set_explicit(&self, order: MemoryOrder) -> bool {
        trace!(?order, "AtomicCell::test_and_set");
        self.storage.swap(true, order)
    }

    /// Sets the flag with `SeqCst` ordering, returning its previous state.
    pub fn test_and_set(&self) -> bool {
        self.test_and_set_explicit(MemoryOrder::SeqCst)
    }

    /// Clears the flag.
    pub fn clear_explicit(&self, order: MemoryOrder) {
        trace!(?order, "AtomicCell::clear");
        self.storage.store(false, order)
    }

    /// Clears the flag with `SeqCst` ordering.
    pub fn clear(&self) {
        self.clear_explicit(MemoryOrder::SeqCst)
    }
}

impl<T, S> Default for AtomicCell<T, S>
where
    T: Scalar,
    S: Storage<T>,
{
    fn default() -> Self {
        Self::init(T::default())
    }
}

impl<T, S> From<T> for AtomicCell<T, S>
where
    T: Scalar,
    S: Storage<T>,
{
    fn from(value: T) -> Self {
        Self::init(value)
    }
}

impl<T, S: fmt::Debug> fmt::Debug for AtomicCell<T, S> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_tuple("AtomicCell").field(&self.storage).finish()
    }
}

#[cfg(feature = "serde")]
impl<T, S> serde::Serialize for AtomicCell<T, S>
where
    T: Scalar + serde::Serialize,
    S: Storage<T>,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        self.load().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for AtomicCell<T, S>
where
    T: Scalar + serde::Deserialize<'de>,
    S: Storage<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::init)
    }
}
