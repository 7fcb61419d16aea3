#![deny(warnings, rust_2018_idioms)]

use atomic_fallback::sync::atomic::{locked, native, MemoryOrder};
use atomic_fallback::sync::atomic::{signal_fence, thread_fence};

#[test]
fn fences_accept_every_order() {
    for order in MemoryOrder::ALL.iter() {
        thread_fence(*order);
        signal_fence(*order);

        locked::thread_fence(*order);
        locked::signal_fence(*order);

        // `Relaxed` must not panic here, unlike `std::sync::atomic::fence`.
        native::thread_fence(*order);
        native::signal_fence(*order);
    }
}
