//! Capturing a callable together with its [`BindMode`].

use fnsig_invoke::mode::{self, BindKind, BindMode};

/// A reference to a callable, tagged with the [`BindMode`] a [`FnRef`] uses to call it.
///
/// A [`Capture`] is unwrapped when a [`FnRef`] is created from it, so the [`FnRef`] refers to the
/// original callable rather than to the [`Capture`].
///
/// ```
/// use fnsig_ref::{shared_transient, FnRef};
///
/// let f = || 5;
/// let f_ref = FnRef::<fn() -> i32>::new(shared_transient(&f));
/// assert!(f_ref.refers_to(&f));
/// assert_eq!(f_ref.call(), 5);
/// ```
///
/// [`FnRef`]: crate::FnRef
pub struct Capture<'a, F, M> {
    callable: &'a F,
    _mode: core::marker::PhantomData<M>,
}

impl<'a, F, M: BindMode> Capture<'a, F, M> {
    const fn new(callable: &'a F) -> Self {
        Self {
            callable,
            _mode: core::marker::PhantomData,
        }
    }

    /// Gets the captured callable.
    pub const fn get(&self) -> &'a F {
        self.callable
    }

    /// Gets the runtime description of the binding mode.
    pub const fn kind(&self) -> BindKind {
        M::KIND
    }
}

impl<F, M: BindMode> Clone for Capture<'_, F, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, M: BindMode> Copy for Capture<'_, F, M> {}

impl<F, M: BindMode> core::fmt::Debug for Capture<'_, F, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Capture")
            .field("type_name", &core::any::type_name::<F>())
            .field("mode", &M::KIND)
            .field("address", &(self.callable as *const F))
            .finish()
    }
}

/// Captures a callable from a place the caller could mutate.
///
/// The exclusive borrow lasts as long as the [`Capture`], but calls only ever access the callable
/// through a shared reference.
pub fn mutable<F>(callable: &mut F) -> Capture<'_, F, mode::Mutable> {
    Capture::new(callable)
}

/// Captures a callable from a read-only place.
pub const fn shared<F>(callable: &F) -> Capture<'_, F, mode::Shared> {
    Capture::new(callable)
}

/// Captures a callable that the caller is giving up, such as a temporary.
///
/// The resulting [`FnRef`] can still be called any number of times.
///
/// [`FnRef`]: crate::FnRef
pub fn transient<F>(callable: &mut F) -> Capture<'_, F, mode::Transient> {
    Capture::new(callable)
}

/// Captures a read-only callable that the caller is giving up.
pub const fn shared_transient<F>(callable: &F) -> Capture<'_, F, mode::SharedTransient> {
    Capture::new(callable)
}

/// Trait for values that a [`FnRef`] can be created from.
///
/// | Value | Binding mode |
/// |-------|--------------|
/// | `&'a F` | [`Shared`] |
/// | `&'a mut F` | [`Mutable`] |
/// | [`Capture<'a, F, M>`] | `M` |
///
/// [`FnRef`]: crate::FnRef
/// [`Shared`]: mode::Shared
/// [`Mutable`]: mode::Mutable
pub trait Bind<'a> {
    /// The type of the referenced callable.
    type Callable: 'a;

    /// The binding mode used to call the callable.
    type Mode: BindMode;

    /// Converts `self` into a [`Capture`].
    fn capture(self) -> Capture<'a, Self::Callable, Self::Mode>;
}

impl<'a, F> Bind<'a> for &'a F {
    type Callable = F;
    type Mode = mode::Shared;

    #[inline]
    fn capture(self) -> Capture<'a, F, mode::Shared> {
        shared(self)
    }
}

impl<'a, F> Bind<'a> for &'a mut F {
    type Callable = F;
    type Mode = mode::Mutable;

    #[inline]
    fn capture(self) -> Capture<'a, F, mode::Mutable> {
        mutable(self)
    }
}

impl<'a, F, M: BindMode> Bind<'a> for Capture<'a, F, M> {
    type Callable = F;
    type Mode = M;

    #[inline]
    fn capture(self) -> Self {
        self
    }
}
