#![doc(html_root_url = "https://docs.rs/atomic-fallback/0.1.0")]
#![deny(missing_debug_implementations, missing_docs, rust_2018_idioms)]

//! Atomic operations for targets without atomic instructions.
//!
//! # Background
//!
//! A parallel runtime builds its counters, flags and lock-free-style
//! algorithms on atomic integers. Some hardware and compilers offer no atomic
//! instructions at all, but every runtime can offer a mutual-exclusion lock.
//! This crate provides the atomic-type family on top of such a lock.
//!
//! # Atomic cells
//!
//! An [`AtomicCell`] pairs one scalar value with its own exclusive lock.
//! Every operation acquires the lock, performs a single step, and releases
//! it, so there are no torn reads, no lost updates, and compare-exchange
//! results are deterministic.
//!
//! ```
//! use atomic_fallback::sync::atomic::{AtomicFlag, AtomicUsize};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let hits = Arc::new(AtomicUsize::init(0));
//! let done = Arc::new(AtomicFlag::init(false));
//!
//! let th = {
//!     let (hits, done) = (hits.clone(), done.clone());
//!     thread::spawn(move || {
//!         hits.fetch_add(1);
//!         done.test_and_set();
//!     })
//! };
//!
//! th.join().unwrap();
//!
//! assert_eq!(1, hits.load());
//! assert!(done.test_and_set());
//! ```
//!
//! Supported kinds are `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64`,
//! `usize` and the `bool` flag. Fetch-and-modify operations exist only for
//! the integer kinds; `test_and_set` and `clear` only for the flag.
//!
//! # Memory orders
//!
//! Every operation takes a [`MemoryOrder`] in its `_explicit` form; the
//! plain form passes `SeqCst`. With the lock backend all orders behave the
//! same: a critical section already orders the step fully for the guarded
//! value. No ordering is provided across two different cells.
//!
//! # Backends
//!
//! The [`locked`] backend is the default. Enabling the `native` feature
//! switches the crate-level aliases to the [`native`] backend, which maps
//! the same interface onto `std::sync::atomic`. The exclusive lock used by
//! [`locked::Locked`] is any [`lock_api::RawMutex`]; `parking_lot`'s is the
//! default.
//!
//! `is_lock_free()` is `false` for every kind only on the [`locked`]
//! backend. With the `native` feature the crate-level aliases report `true`;
//! the [`locked`] aliases stay available by path and keep reporting `false`.
//!
//! [`AtomicCell`]: sync::atomic::AtomicCell
//! [`MemoryOrder`]: sync::atomic::MemoryOrder
//! [`locked`]: sync::atomic::locked
//! [`locked::Locked`]: sync::atomic::locked::Locked
//! [`native`]: sync::atomic::native

pub mod sync;
