use crate::{Bind, FnRef, FnRefKind, Signature};
use fnsig_invoke::{
    abort_on_unwind, Callable, CallableNoUnwind, Convert, Discard, NoUnwindInvocable,
};

/// A [`FnRef`] whose calls never unwind.
///
/// A [`NoUnwindFnRef`] can only be created from callables that are [`NoUnwindInvocable`], such
/// as closures wrapped in a [`NoUnwind`]. It has the same layout as a [`FnRef`], and can be used
/// as one through [`Deref`], [`as_fn_ref()`] or [`From`]:
///
/// ```
/// use fnsig_invoke::NoUnwind;
/// use fnsig_ref::{FnRef, NoUnwindFnRef};
///
/// fn call_twice(f: &FnRef<'_, fn(u8) -> u8>) -> u8 {
///     f.call(f.call(1))
/// }
///
/// let double = NoUnwind::new(|x: u8| x * 2);
/// let no_unwind = NoUnwindFnRef::<fn(u8) -> u8>::new(&double);
/// assert_eq!(call_twice(&no_unwind), 4);
///
/// let general: FnRef<'_, fn(u8) -> u8> = no_unwind.into();
/// assert_eq!(general.call(5), 10);
/// ```
///
/// The reverse is not possible, a [`FnRef`] cannot be turned into or referred to by a
/// [`NoUnwindFnRef`]:
///
/// ```compile_fail
/// use fnsig_ref::{FnRef, NoUnwindFnRef};
///
/// let f = || 1;
/// let general = FnRef::<fn() -> i32>::new(&f);
/// let refined: NoUnwindFnRef<'_, fn() -> i32> = general.into();
/// ```
///
/// ```compile_fail
/// use fnsig_ref::{FnRef, NoUnwindFnRef};
///
/// let f = || 1;
/// let general = FnRef::<fn() -> i32>::new(&f);
/// let refined = NoUnwindFnRef::<fn() -> i32>::new(&general);
/// ```
///
/// Callables that may unwind are rejected:
///
/// ```compile_fail
/// use fnsig_ref::NoUnwindFnRef;
///
/// let may_panic = |x: u8| x.checked_add(1).unwrap();
/// let refined = NoUnwindFnRef::<fn(u8) -> u8>::new(&may_panic);
/// ```
///
/// [`NoUnwind`]: fnsig_invoke::NoUnwind
/// [`Deref`]: core::ops::Deref
/// [`as_fn_ref()`]: NoUnwindFnRef::as_fn_ref()
#[repr(transparent)]
pub struct NoUnwindFnRef<'a, S: Signature>(FnRef<'a, S>);

impl<'a, S: Signature> NoUnwindFnRef<'a, S> {
    /// Creates a [`NoUnwindFnRef`] referring to the given callable, whose result is already an
    /// `S::Output`.
    #[inline]
    pub fn new<C>(callable: C) -> Self
    where
        C: Bind<'a>,
        C::Callable: NoUnwindInvocable<S::Args, S::Output>,
    {
        Self::with_adaptation::<Convert, C>(callable)
    }

    /// Creates a [`NoUnwindFnRef`] referring to the given callable, adapting its result with the
    /// strategy `A`, which must also never unwind.
    pub fn with_adaptation<A, C>(callable: C) -> Self
    where
        C: Bind<'a>,
        C::Callable: NoUnwindInvocable<S::Args, S::Output, A>,
    {
        Self(FnRef::with_adaptation::<A, C>(callable))
    }

    /// Gets a reference to the underlying [`FnRef`].
    pub const fn as_fn_ref(&self) -> &FnRef<'a, S> {
        &self.0
    }

    /// Converts this into a [`FnRef`].
    pub fn into_fn_ref(self) -> FnRef<'a, S> {
        self.0
    }

    /// Calls the referenced callable with a tuple of arguments.
    ///
    /// If the callable unwinds despite its guarantee, the process is aborted.
    #[inline]
    pub fn call_with(&self, args: S::Args) -> S::Output {
        abort_on_unwind(|| self.0.call_with(args))
    }
}

impl<'a, S: Signature<Output = ()>> NoUnwindFnRef<'a, S> {
    /// Creates a [`NoUnwindFnRef`] referring to the given callable, discarding its result.
    #[inline]
    pub fn discarding<C>(callable: C) -> Self
    where
        C: Bind<'a>,
        C::Callable: CallableNoUnwind<S::Args>,
    {
        Self::with_adaptation::<Discard, C>(callable)
    }
}

macro_rules! define_call {
    (($($argument:ident: $parameter:ident),*); $number:literal) => {
        impl<'a, $($parameter,)* R> NoUnwindFnRef<'a, fn($($parameter),*) -> R> {
            /// Calls the referenced callable.
            ///
            /// If the callable unwinds despite its guarantee, the process is aborted.
            #[inline]
            #[allow(clippy::too_many_arguments)]
            pub fn call(&self $(, $argument: $parameter)*) -> R {
                abort_on_unwind(|| self.0.call($($argument),*))
            }
        }
    };
}

fnsig_invoke::with_parameters!(define_call);

impl<'a, S: Signature> core::ops::Deref for NoUnwindFnRef<'a, S> {
    type Target = FnRef<'a, S>;

    fn deref(&self) -> &FnRef<'a, S> {
        &self.0
    }
}

impl<'a, S: Signature> From<NoUnwindFnRef<'a, S>> for FnRef<'a, S> {
    fn from(no_unwind: NoUnwindFnRef<'a, S>) -> Self {
        no_unwind.0
    }
}

impl<S: Signature> Clone for NoUnwindFnRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Signature> Copy for NoUnwindFnRef<'_, S> {}

impl<S: Signature> Callable<S::Args> for NoUnwindFnRef<'_, S> {
    type Output = S::Output;

    #[inline]
    fn call(&self, args: S::Args) -> S::Output {
        NoUnwindFnRef::call_with(self, args)
    }
}

impl<S: Signature> CallableNoUnwind<S::Args> for NoUnwindFnRef<'_, S> {}

impl<S: Signature> core::fmt::Debug for NoUnwindFnRef<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("NoUnwindFnRef").field(&self.0).finish()
    }
}

impl<'a, S: Signature> FnRefKind<'a> for NoUnwindFnRef<'a, S> {
    type Signature = S;

    const NO_UNWIND: bool = true;

    #[inline]
    fn call_with(&self, args: S::Args) -> S::Output {
        NoUnwindFnRef::call_with(self, args)
    }

    #[inline]
    fn into_fn_ref(self) -> FnRef<'a, S> {
        self.0
    }
}
