// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sealed scalar kinds accepted by the arithmetic aggregations.
//!
//! The set is closed: the traits cannot be implemented outside this crate,
//! so `sum` and `product` dispatch statically over a known list of kinds.

mod sealed {
    pub trait Sealed {}
}

/// Values a sum aggregation accepts: the closed numeric set plus `String`.
///
/// `Default` supplies the zero value an empty aggregation returns. Note the
/// aggregations are first-element-seeded folds, so the zero value is used
/// only for empty input, never as a running identity.
pub trait Addable: sealed::Sealed + Default {
    /// Combine two values additively (concatenation for strings).
    #[must_use]
    fn add(self, rhs: Self) -> Self;
}

/// Values `product` accepts: the closed numeric set.
pub trait Numeric: Addable + Copy {
    /// Combine two values multiplicatively.
    #[must_use]
    fn mul(self, rhs: Self) -> Self;
}

macro_rules! impl_numeric {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Addable for $ty {
            #[inline]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }
        }

        impl Numeric for $ty {
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self * rhs
            }
        }
    )*};
}

impl_numeric!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl sealed::Sealed for String {}

impl Addable for String {
    fn add(mut self, rhs: Self) -> Self {
        self.push_str(&rhs);
        self
    }
}
