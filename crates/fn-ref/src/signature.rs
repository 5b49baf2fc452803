use crate::raw::Handle;
use fnsig_invoke::{BindMode, Invocable};

/// Expands to the type of the trampoline used by a [`FnRef`] with the given parameter and
/// result types.
///
/// # Example
///
/// ```
/// use fnsig_ref::{trampoline, Signature};
///
/// fn same<T>(_: T, _: T) {}
///
/// let expected: Option<trampoline!((u8, &'static str) -> bool)> = None;
/// let actual: Option<<fn(u8, &'static str) -> bool as Signature>::Trampoline> = None;
/// same(expected, actual);
/// ```
///
/// [`FnRef`]: crate::FnRef
#[macro_export]
macro_rules! trampoline {
    (($($parameter:ty),*) -> $result:ty) => {
        unsafe fn($crate::raw::Handle $(, $parameter)*) -> $result
    };
}

mod sealed {
    #[allow(unreachable_pub)]
    pub trait Sealed {}
}

/// Describes the parameter and result types of a [`FnRef`].
///
/// This trait is implemented for [function pointer] types with up to eight parameters, which
/// serve only as a type-level key. A `FnRef<'a, fn(A0, A1) -> R>` refers to something that can
/// be called with an `A0` and an `A1`, producing an `R`.
///
/// Higher-ranked function pointer types such as `fn(&str)` do not implement this trait, so
/// lifetimes in parameter types must be named, as in `fn(&'s str)`.
///
/// This trait is sealed.
///
/// [`FnRef`]: crate::FnRef
/// [function pointer]: fn
pub trait Signature: sealed::Sealed {
    /// The parameter types, as a tuple.
    type Args;

    /// The result type.
    type Output;

    /// The function pointer type of trampolines, `unsafe fn(Handle, A0, A1, ...) -> R`.
    ///
    /// See the [`trampoline!`] macro.
    type Trampoline: Copy;

    /// Gets the trampoline that calls an `F` through the binding mode `M`, adapting the result
    /// with the strategy `A`.
    fn trampoline<F, M, A>() -> Self::Trampoline
    where
        F: Invocable<Self::Args, Self::Output, A>,
        M: BindMode;

    /// Calls the `trampoline` with the `handle` and the `args`.
    ///
    /// # Safety
    ///
    /// The `trampoline` must be safe to call with the `handle`.
    unsafe fn call(trampoline: Self::Trampoline, handle: Handle, args: Self::Args)
        -> Self::Output;

    /// Gets the address of the `trampoline`, used for comparisons and [`Debug`] output.
    ///
    /// [`Debug`]: core::fmt::Debug
    fn trampoline_addr(trampoline: Self::Trampoline) -> *const ();
}

macro_rules! define_signature {
    (($($argument:ident: $parameter:ident),*); $number:literal) => {
        impl<$($parameter,)* R> sealed::Sealed for fn($($parameter),*) -> R {}

        impl<$($parameter,)* R> Signature for fn($($parameter),*) -> R {
            type Args = ($($parameter,)*);
            type Output = R;
            type Trampoline = crate::trampoline!(($($parameter),*) -> R);

            #[inline]
            fn trampoline<F, M, A>() -> Self::Trampoline
            where
                F: Invocable<Self::Args, Self::Output, A>,
                M: BindMode,
            {
                paste::paste! {
                    crate::raw::trampoline::[<trampoline_ $number>]::<F, M, A, $($parameter,)* R>
                }
            }

            #[inline]
            unsafe fn call(
                trampoline: Self::Trampoline,
                handle: Handle,
                ($($argument,)*): Self::Args,
            ) -> R {
                // SAFETY: ensured by caller.
                unsafe { trampoline(handle $(, $argument)*) }
            }

            fn trampoline_addr(trampoline: Self::Trampoline) -> *const () {
                trampoline as *const ()
            }
        }
    };
}

fnsig_invoke::with_parameters!(define_signature);
