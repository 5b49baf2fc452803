use crate::{Callable, CallableNoUnwind};

struct AbortOnUnwind;

impl Drop for AbortOnUnwind {
    #[cold]
    fn drop(&mut self) {
        // Only reached while unwinding, the guard is forgotten otherwise.
        #[cfg(feature = "std")]
        {
            std::eprintln!("fatal: a call that must not unwind panicked, aborting");
            std::process::abort();
        }

        #[cfg(not(feature = "std"))]
        panic!("a call that must not unwind panicked, aborting");
    }
}

/// Calls `f`, aborting the process if it panics.
///
/// With the `std` feature, a message is written to standard error before calling
/// [`std::process::abort()`]. Otherwise, the abort is caused by panicking during unwinding.
#[inline]
pub fn abort_on_unwind<R, F: FnOnce() -> R>(f: F) -> R {
    let guard = AbortOnUnwind;
    let result = f();
    core::mem::forget(guard);
    result
}

/// Declares that calls to a callable never unwind.
///
/// Every call runs under [`abort_on_unwind()`], so the declaration holds even if the callable
/// does panic. This is how closures and other callables are made [`CallableNoUnwind`].
///
/// # Example
///
/// ```
/// use fnsig_invoke::{invoke_r, NoUnwindInvocable, NoUnwind};
///
/// fn assert_no_unwind<F: NoUnwindInvocable<(), u8>>(f: &F) -> u8 {
///     invoke_r(f, ())
/// }
///
/// let f = NoUnwind::new(|| 42u8);
/// assert_eq!(assert_no_unwind(&f), 42);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct NoUnwind<F>(F);

impl<F> NoUnwind<F> {
    /// Wraps the given callable.
    pub const fn new(callable: F) -> Self {
        Self(callable)
    }

    /// Gets a reference to the wrapped callable.
    pub const fn get_ref(&self) -> &F {
        &self.0
    }

    /// Returns the wrapped callable.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F, Args> Callable<Args> for NoUnwind<F>
where
    F: Callable<Args>,
{
    type Output = F::Output;

    #[inline]
    fn call(&self, args: Args) -> Self::Output {
        abort_on_unwind(|| self.0.call(args))
    }

    #[inline]
    fn call_mutable(&self, args: Args) -> Self::Output {
        abort_on_unwind(|| self.0.call_mutable(args))
    }

    #[inline]
    fn call_transient(&self, args: Args) -> Self::Output {
        abort_on_unwind(|| self.0.call_transient(args))
    }

    #[inline]
    fn call_shared_transient(&self, args: Args) -> Self::Output {
        abort_on_unwind(|| self.0.call_shared_transient(args))
    }
}

impl<F, Args> CallableNoUnwind<Args> for NoUnwind<F> where F: Callable<Args> {}
