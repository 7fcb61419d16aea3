#![deny(warnings, rust_2018_idioms)]

macro_rules! test_int {
    ($name:ident, $int:ty, $atomic:ty) => {
        mod $name {
            use atomic_fallback::sync::atomic::locked::*;
            use atomic_fallback::sync::atomic::MemoryOrder;

            const NUM_A: u64 = 11641914933775430211;
            const NUM_B: u64 = 13209405719799650717;

            #[test]
            fn store_load_boundaries() {
                let atomic = <$atomic>::init(0);

                for &v in &[0, 1, <$int>::MAX, <$int>::MIN, NUM_A as $int] {
                    atomic.store(v);
                    assert_eq!(v, atomic.load());
                }
            }

            #[test]
            fn explicit_forms_ignore_order() {
                let atomic = <$atomic>::init(0);

                for (i, order) in MemoryOrder::ALL.iter().enumerate() {
                    let v = i as $int;
                    atomic.store_explicit(*order, v);
                    assert_eq!(v, atomic.load_explicit(*order));
                    assert_eq!(v, atomic.exchange_explicit(*order, v + 1));
                    assert!(atomic.compare_exchange_strong_explicit(v + 1, v, *order));
                    assert!(atomic.compare_exchange_weak_explicit(v, v + 1, *order));
                    assert_eq!(v + 1, atomic.fetch_sub_explicit(*order, 1));
                }
            }

            #[test]
            fn exchange_then_load() {
                let a: $int = NUM_A as $int;
                let b: $int = NUM_B as $int;

                let atomic = <$atomic>::init(a);
                assert_eq!(a, atomic.exchange(b));
                assert_eq!(b, atomic.load());
            }

            #[test]
            fn compare_exchange_strong() {
                let a: $int = NUM_A as $int;
                let b: $int = NUM_B as $int;

                let atomic = <$atomic>::init(a);
                assert!(!atomic.compare_exchange_strong(b, a));
                assert_eq!(a, atomic.load());

                assert!(atomic.compare_exchange_strong(a, b));
                assert_eq!(b, atomic.load());
            }

            #[test]
            fn compare_exchange_weak() {
                let a: $int = NUM_A as $int;
                let b: $int = NUM_B as $int;

                let atomic = <$atomic>::init(a);
                assert!(!atomic.compare_exchange_weak(b, a));

                // Uncontended, a weak CAS on the current value never fails.
                for _ in 0..100 {
                    let current = atomic.load();
                    assert!(atomic.compare_exchange_weak(current, current ^ b));
                }
            }

            #[test]
            fn compare_exchange_reports_actual() {
                let a: $int = NUM_A as $int;
                let b: $int = NUM_B as $int;

                let atomic = <$atomic>::init(a);
                assert_eq!(Err(a), atomic.compare_exchange(b, a));
                assert_eq!(Ok(a), atomic.compare_exchange(a, b));

                assert_eq!(b, atomic.load());
            }

            #[test]
            fn fetch_add_sub() {
                let a: $int = NUM_A as $int;
                let b: $int = NUM_B as $int;

                let atomic = <$atomic>::init(a);
                assert_eq!(a, atomic.fetch_add(b));
                assert_eq!(a.wrapping_add(b), atomic.load());

                assert_eq!(a.wrapping_add(b), atomic.fetch_sub(b));
                assert_eq!(a, atomic.load());
            }

            #[test]
            fn fetch_add_wraps() {
                let atomic = <$atomic>::init(<$int>::MAX);
                assert_eq!(<$int>::MAX, atomic.fetch_add(1));
                assert_eq!(<$int>::MIN, atomic.load());

                assert_eq!(<$int>::MIN, atomic.fetch_sub(1));
                assert_eq!(<$int>::MAX, atomic.load());
            }

            #[test]
            fn bit_ops() {
                let a: $int = NUM_A as $int;
                let b: $int = NUM_B as $int;

                let atomic = <$atomic>::init(a);
                assert_eq!(a, atomic.fetch_or(b));
                assert_eq!(a | b, atomic.load());

                atomic.store(a);
                assert_eq!(a, atomic.fetch_and(b));
                assert_eq!(a & b, atomic.load());

                atomic.store(a);
                assert_eq!(a, atomic.fetch_xor(b));
                assert_eq!(a ^ b, atomic.load());
            }

            #[test]
            fn fetch_update() {
                let a: $int = NUM_A as $int;
                let b: $int = NUM_B as $int;

                let atomic = <$atomic>::init(a);
                assert_eq!(Ok(a), atomic.fetch_update(MemoryOrder::SeqCst, |_| Some(b)));
                assert_eq!(Err(b), atomic.fetch_update(MemoryOrder::SeqCst, |_| None));
                assert_eq!(b, atomic.load());
            }

            #[test]
            fn fetch_update_reads_same_cell() {
                let atomic = <$atomic>::init(3);

                let res = atomic.fetch_update(MemoryOrder::SeqCst, |v| Some(v + atomic.load()));
                assert_eq!(Ok(3), res);
                assert_eq!(6, atomic.load());

                let res = atomic.fetch_update(MemoryOrder::SeqCst, |_| {
                    atomic.store(1);
                    None
                });
                assert_eq!(Err(6), res);
                assert_eq!(1, atomic.load());
            }

            #[test]
            fn lifecycle() {
                let mut atomic = <$atomic>::default();
                assert_eq!(0, atomic.load());

                *atomic.get_mut() = 7;
                assert_eq!(7, atomic.fetch_add(1));

                assert_eq!(8, atomic.destroy());
                assert_eq!(3, <$atomic>::from(3).into_inner());
            }

            #[test]
            fn is_never_lock_free() {
                let atomic = <$atomic>::init(0);
                assert!(!atomic.is_lock_free());
                assert!(!<$atomic>::IS_LOCK_FREE);
            }
        }
    };
}

test_int!(atomic_u8, u8, AtomicU8);
test_int!(atomic_u16, u16, AtomicU16);
test_int!(atomic_u32, u32, AtomicU32);
test_int!(atomic_u64, u64, AtomicU64);
test_int!(atomic_usize, usize, AtomicUsize);

test_int!(atomic_i8, i8, AtomicI8);
test_int!(atomic_i16, i16, AtomicI16);
test_int!(atomic_i32, i32, AtomicI32);
test_int!(atomic_i64, i64, AtomicI64);
