//! Strategies for adapting the natural result of a call to a required result type.

/// Converts the natural result `T` of a call into the required result `R`.
///
/// The strategies are [`Convert`] and [`Discard`].
pub trait Adapt<T, R> {
    /// Performs the adaptation.
    fn adapt(value: T) -> R;
}

/// Marker trait for [`Adapt`] strategies that never unwind.
///
/// An arbitrary [`Into`] implementation may panic, so [`Convert`] only qualifies for the identity
/// conversion and for the lossless [`From`] conversions between primitive types, such as `u8` to
/// `u32` or `f32` to `f64`. Drop glue run by [`Discard`] is assumed not to unwind.
pub trait AdaptNoUnwind<T, R>: Adapt<T, R> {}

/// Converts the natural result with [`Into`], which includes the identity conversion.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_enums)]
pub enum Convert {}

impl<T, R> Adapt<T, R> for Convert
where
    T: Into<R>,
{
    #[inline]
    fn adapt(value: T) -> R {
        value.into()
    }
}

impl<T> AdaptNoUnwind<T, T> for Convert {}

macro_rules! lossless_conversions {
    ($($from:ty => $($to:ty),+;)*) => {$($(
        impl AdaptNoUnwind<$from, $to> for Convert {}
    )+)*};
}

lossless_conversions! {
    bool => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize;
    u8 => u16, u32, u64, u128, usize, i16, i32, i64, i128, isize, f32, f64, char;
    u16 => u32, u64, u128, usize, i32, i64, i128, f32, f64;
    u32 => u64, u128, i64, i128, f64;
    u64 => u128, i128;
    i8 => i16, i32, i64, i128, isize, f32, f64;
    i16 => i32, i64, i128, isize, f32, f64;
    i32 => i64, i128, f64;
    i64 => i128;
    f32 => f64;
    char => u32, u64, u128;
}

/// Computes the natural result and drops it, producing `()`.
///
/// Any natural result type can be discarded, including `()` itself.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_enums)]
pub enum Discard {}

impl<T> Adapt<T, ()> for Discard {
    #[inline]
    fn adapt(value: T) {
        let _ = value;
    }
}

impl<T> AdaptNoUnwind<T, ()> for Discard {}
