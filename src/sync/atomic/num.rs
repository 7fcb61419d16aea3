use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// A scalar kind that can be stored in an [`AtomicCell`].
///
/// Implemented for the nine supported integer kinds and for `bool`, the flag
/// kind. The set is closed.
///
/// [`AtomicCell`]: super::AtomicCell
pub trait Scalar: sealed::Sealed + Copy + PartialEq + Debug + Default + Send + 'static {}

/// An integer kind, supporting the fetch-and-modify family.
///
/// All arithmetic wraps on overflow.
pub trait Integer: Scalar {
    /// `self + rhs`, wrapping at the kind's bounds.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// `self - rhs`, wrapping at the kind's bounds.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Bitwise "or".
    fn bit_or(self, rhs: Self) -> Self;

    /// Bitwise "and".
    fn bit_and(self, rhs: Self) -> Self;

    /// Bitwise "xor".
    fn bit_xor(self, rhs: Self) -> Self;
}

macro_rules! impl_int {
    ( $($t:ty),* ) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {}

            impl Integer for $t {
                fn wrapping_add(self, rhs: $t) -> $t {
                    <$t>::wrapping_add(self, rhs)
                }

                fn wrapping_sub(self, rhs: $t) -> $t {
                    <$t>::wrapping_sub(self, rhs)
                }

                fn bit_or(self, rhs: $t) -> $t {
                    self | rhs
                }

                fn bit_and(self, rhs: $t) -> $t {
                    self & rhs
                }

                fn bit_xor(self, rhs: $t) -> $t {
                    self ^ rhs
                }
            }
        )*
    };
}

impl_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl sealed::Sealed for bool {}

impl Scalar for bool {}
