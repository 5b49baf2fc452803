//! Non-owning references to anything that can be called with a given signature.
//!
//! A [`FnRef`] such as `FnRef<'a, fn(A0, A1) -> R>` refers to a closure, function, [member] or
//! other [`Callable`] borrowed for `'a`, and calls it with an `A0` and an `A1` to produce an `R`.
//! It is two words large, implements [`Copy`], never allocates, and costs one indirect call to
//! invoke.
//!
//! ```
//! use fnsig_ref::FnRef;
//!
//! fn apply(f: FnRef<'_, fn(i32) -> i64>, x: i32) -> i64 {
//!     f.call(x) * 2
//! }
//!
//! let offset = 10;
//! let add = |x: i32| x + offset;
//! assert_eq!(apply(FnRef::new(&add), 5), 30);
//! assert_eq!(apply(FnRef::new(&i32::wrapping_neg), 5), -10);
//! ```
//!
//! The [`NoUnwindFnRef`] refinement only refers to callables that never unwind, and can be used
//! anywhere a [`FnRef`] is expected.
//!
//! [member]: fnsig_invoke::member
//! [`Callable`]: fnsig_invoke::Callable

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

mod capture;
mod no_unwind;
mod signature;

pub mod raw;

pub use capture::{mutable, shared, shared_transient, transient, Bind, Capture};
pub use no_unwind::NoUnwindFnRef;
pub use raw::RawFnRef;
pub use signature::Signature;

use fnsig_invoke::{Callable, Convert, Discard, Invocable};
use raw::Handle;

/// A non-owning reference to a callable with the [`Signature`] `S`.
///
/// The referenced callable is borrowed for the lifetime `'a`. Its binding mode and the way its
/// result is adapted to `S::Output` are chosen when the [`FnRef`] is created, see [`Bind`] and
/// [`FnRef::with_adaptation()`].
///
/// A [`FnRef`] cannot refer to nothing, so `Option<FnRef>` is used for optional references.
///
/// [`FnRef`]s are neither [`Send`] nor [`Sync`], as the type of the referenced callable is
/// erased.
pub struct FnRef<'a, S: Signature> {
    raw: RawFnRef<S>,
    _lifetime: core::marker::PhantomData<&'a ()>,
}

impl<'a, S: Signature> FnRef<'a, S> {
    /// Creates a [`FnRef`] referring to the given callable, converting its result to
    /// `S::Output` with [`Into`].
    ///
    /// # Example
    ///
    /// ```
    /// use fnsig_ref::FnRef;
    ///
    /// let f = |x: u8| x;
    /// let widened = FnRef::<fn(u8) -> u32>::new(&f);
    /// assert_eq!(widened.call(7), 7u32);
    /// ```
    #[inline]
    pub fn new<C>(callable: C) -> Self
    where
        C: Bind<'a>,
        C::Callable: Invocable<S::Args, S::Output>,
    {
        Self::with_adaptation::<Convert, C>(callable)
    }

    /// Creates a [`FnRef`] referring to the given callable, adapting its result to `S::Output`
    /// with the [`Adapt`] strategy `A`.
    ///
    /// [`Adapt`]: fnsig_invoke::Adapt
    pub fn with_adaptation<A, C>(callable: C) -> Self
    where
        C: Bind<'a>,
        C::Callable: Invocable<S::Args, S::Output, A>,
    {
        let captured = callable.capture();
        let raw = RawFnRef::new(
            Handle::from_ref(captured.get()),
            S::trampoline::<C::Callable, C::Mode, A>(),
        );

        // SAFETY: the trampoline was instantiated for `C::Callable`, and the handle refers to a
        // `C::Callable` borrowed for `'a`.
        unsafe { Self::from_raw(raw) }
    }

    /// Creates a [`FnRef`] from a [`RawFnRef`].
    ///
    /// # Safety
    ///
    /// Calling the [`RawFnRef::trampoline()`] with the [`RawFnRef::handle()`] must be safe for
    /// the entire lifetime `'a`.
    pub const unsafe fn from_raw(raw: RawFnRef<S>) -> Self {
        Self {
            raw,
            _lifetime: core::marker::PhantomData,
        }
    }

    /// Gets the underlying [`RawFnRef`].
    pub fn into_raw(self) -> RawFnRef<S> {
        self.raw
    }

    /// Calls the referenced callable with a tuple of arguments.
    ///
    /// Any panics from the callable propagate to the caller.
    #[inline]
    pub fn call_with(&self, args: S::Args) -> S::Output {
        // SAFETY: `from_raw()` ensures the trampoline can be called with the handle.
        unsafe { S::call(self.raw.trampoline(), self.raw.handle(), args) }
    }

    /// Returns `true` if this [`FnRef`] refers to the given `callable`.
    ///
    /// ```
    /// # use fnsig_ref::{shared, FnRef};
    /// let f = || ();
    /// let g = || ();
    /// let f_ref = FnRef::<fn()>::new(shared(&f));
    /// assert!(f_ref.refers_to(&f));
    /// assert!(!f_ref.refers_to(&g));
    /// ```
    pub fn refers_to<F>(&self, callable: &F) -> bool {
        self.raw.handle() == Handle::from_ref(callable)
    }

    /// Returns `true` if both [`FnRef`]s refer to the same address, and call it in the same way.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        this.raw == other.raw
    }
}

impl<'a, S: Signature<Output = ()>> FnRef<'a, S> {
    /// Creates a [`FnRef`] referring to the given callable, discarding its result.
    ///
    /// Any callable that accepts the arguments can be referred to, regardless of what it
    /// returns.
    ///
    /// ```
    /// use fnsig_ref::FnRef;
    ///
    /// let f = |s: &str| s.len();
    /// FnRef::<fn(&'static str)>::discarding(&f).call("ignored");
    /// ```
    #[inline]
    pub fn discarding<C>(callable: C) -> Self
    where
        C: Bind<'a>,
        C::Callable: Callable<S::Args>,
    {
        Self::with_adaptation::<Discard, C>(callable)
    }
}

macro_rules! define_call {
    (($($argument:ident: $parameter:ident),*); $number:literal) => {
        impl<'a, $($parameter,)* R> FnRef<'a, fn($($parameter),*) -> R> {
            /// Calls the referenced callable.
            ///
            /// Any panics from the callable propagate to the caller.
            #[inline]
            #[allow(clippy::too_many_arguments)]
            pub fn call(&self $(, $argument: $parameter)*) -> R {
                // SAFETY: `from_raw()` ensures the trampoline can be called with the handle.
                unsafe { (self.raw.trampoline())(self.raw.handle() $(, $argument)*) }
            }
        }
    };
}

fnsig_invoke::with_parameters!(define_call);

impl<S: Signature> Clone for FnRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Signature> Copy for FnRef<'_, S> {}

/// A [`FnRef`] can itself be referred to by a [`FnRef`] with a different [`Signature`], or be
/// passed to [`invoke()`](fnsig_invoke::invoke).
///
/// ```
/// use fnsig_ref::FnRef;
///
/// let f = || 5i32;
/// let narrow = FnRef::<fn() -> i32>::new(&f);
/// let wide = FnRef::<fn() -> i64>::new(&narrow);
/// assert_eq!(wide.call(), 5i64);
/// ```
///
/// Copying a [`FnRef`] to one of the same [`Signature`] should be done with [`Copy`] instead,
/// which does not add an indirection.
impl<S: Signature> Callable<S::Args> for FnRef<'_, S> {
    type Output = S::Output;

    #[inline]
    fn call(&self, args: S::Args) -> S::Output {
        FnRef::call_with(self, args)
    }
}

impl<S: Signature> core::fmt::Debug for FnRef<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnRef")
            .field("signature", &core::any::type_name::<S>())
            .field("handle", &self.raw.handle())
            .field("trampoline", &S::trampoline_addr(self.raw.trampoline()))
            .finish()
    }
}

mod sealed {
    #[allow(unreachable_pub)]
    pub trait Sealed {}

    impl<S: crate::Signature> Sealed for crate::FnRef<'_, S> {}
    impl<S: crate::Signature> Sealed for crate::NoUnwindFnRef<'_, S> {}
}

/// Trait implemented by [`FnRef`] and [`NoUnwindFnRef`], allowing generic code to accept either.
///
/// Whether calls may unwind is known at compile time:
///
/// ```
/// use fnsig_ref::{FnRef, FnRefKind, NoUnwindFnRef};
///
/// const _: () = assert!(<NoUnwindFnRef<'static, fn()> as FnRefKind<'static>>::NO_UNWIND);
/// const _: () = assert!(!<FnRef<'static, fn()> as FnRefKind<'static>>::NO_UNWIND);
/// ```
///
/// This trait is sealed.
pub trait FnRefKind<'a>: sealed::Sealed + Copy + core::fmt::Debug {
    /// The [`Signature`] of the referenced callable.
    type Signature: Signature;

    /// `true` if calls to the referenced callable never unwind.
    const NO_UNWIND: bool;

    /// Calls the referenced callable with a tuple of arguments.
    fn call_with(
        &self,
        args: <Self::Signature as Signature>::Args,
    ) -> <Self::Signature as Signature>::Output;

    /// Converts `self` into a [`FnRef`], forgetting any additional guarantees.
    fn into_fn_ref(self) -> FnRef<'a, Self::Signature>;
}

impl<'a, S: Signature> FnRefKind<'a> for FnRef<'a, S> {
    type Signature = S;

    const NO_UNWIND: bool = false;

    #[inline]
    fn call_with(&self, args: S::Args) -> S::Output {
        FnRef::call_with(self, args)
    }

    #[inline]
    fn into_fn_ref(self) -> Self {
        self
    }
}
