//! Provides the capability checks and the uniform invocation operation that the other `fnsig-*`
//! crates build on.
//!
//! A *callable* is any type implementing [`Callable`] for a tuple of argument types. Closures,
//! function items and function pointers are callables through a blanket implementation, and the
//! [`member`] module provides callables for fields and methods, which apply the member to their
//! first argument and forward the rest.
//!
//! Whether a callable can be used where a given result type is required is answered by the
//! [`Invocable`] trait, and whether doing so can never fail is answered by
//! [`NoUnwindInvocable`]. Both are ordinary trait bounds, so generic code can use them directly:
//!
//! ```
//! use fnsig_invoke::{invoke_r, Invocable};
//!
//! fn twice<F: Invocable<(u32,), u64>>(f: &F, x: u32) -> u64 {
//!     invoke_r(f, (x,)) * 2
//! }
//!
//! assert_eq!(twice(&|x: u32| x + 1, 4), 10);
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::exhaustive_structs)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

mod closure;
mod error;
mod exclusive;
mod no_unwind;

pub mod adapt;
pub mod member;
pub mod mode;

pub use adapt::{Adapt, AdaptNoUnwind, Convert, Discard};
pub use error::ReentrantCallError;
pub use exclusive::Exclusive;
pub use mode::{BindKind, BindMode};
pub use no_unwind::{abort_on_unwind, NoUnwind};

/// Invokes `$m!` once for every supported number of parameters, from zero to eight.
///
/// Each invocation receives the parameter list as `(a0: A0, a1: A1, ...)` followed by the number
/// of parameters.
#[doc(hidden)]
#[macro_export]
macro_rules! with_parameters {
    ($m:ident) => {
        $m!((); 0);
        $m!((a0: A0); 1);
        $m!((a0: A0, a1: A1); 2);
        $m!((a0: A0, a1: A1, a2: A2); 3);
        $m!((a0: A0, a1: A1, a2: A2, a3: A3); 4);
        $m!((a0: A0, a1: A1, a2: A2, a3: A3, a4: A4); 5);
        $m!((a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5); 6);
        $m!((a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6); 7);
        $m!((a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7); 8);
    };
}

/// Trait for values that can be called with the arguments `Args`, given as a tuple.
///
/// There is one method per [`BindMode`]. A reference wrapper records the mode its callable was
/// captured with and always calls the corresponding method, so a type can behave differently
/// depending on how it was captured. Only [`call()`] is required; the other methods fall back to
/// it.
///
/// Every method takes `&self`. Callables that need to mutate state should use interior
/// mutability, or be wrapped in an [`Exclusive`].
///
/// # Example
///
/// ```
/// use fnsig_invoke::{invoke_in, mode, Callable};
///
/// struct Greeting;
///
/// impl Callable<(&'static str,)> for Greeting {
///     type Output = &'static str;
///
///     fn call(&self, (name,): (&'static str,)) -> &'static str {
///         name
///     }
///
///     fn call_transient(&self, _: (&'static str,)) -> &'static str {
///         "someone"
///     }
/// }
///
/// assert_eq!(invoke_in::<mode::Shared, _, _>(&Greeting, ("world",)), "world");
/// assert_eq!(invoke_in::<mode::Transient, _, _>(&Greeting, ("world",)), "someone");
/// ```
///
/// [`call()`]: Callable::call()
pub trait Callable<Args> {
    /// The natural result of a call.
    type Output;

    /// Calls the value through a [`Shared`] binding.
    ///
    /// [`Shared`]: mode::Shared
    fn call(&self, args: Args) -> Self::Output;

    /// Calls the value through a [`Mutable`] binding.
    ///
    /// [`Mutable`]: mode::Mutable
    fn call_mutable(&self, args: Args) -> Self::Output {
        self.call(args)
    }

    /// Calls the value through a [`Transient`] binding.
    ///
    /// [`Transient`]: mode::Transient
    fn call_transient(&self, args: Args) -> Self::Output {
        self.call(args)
    }

    /// Calls the value through a [`SharedTransient`] binding.
    ///
    /// [`SharedTransient`]: mode::SharedTransient
    fn call_shared_transient(&self, args: Args) -> Self::Output {
        self.call(args)
    }
}

/// Marker trait for [`Callable`]s whose calls never unwind, in any [`BindMode`].
///
/// Closures cannot implement this trait directly; wrap them in a [`NoUnwind`], which aborts the
/// process if a panic escapes the call.
pub trait CallableNoUnwind<Args>: Callable<Args> {}

/// Holds when a `Self` can be called with `Args`, and its result adapted to `R` with the
/// [`Adapt`] strategy `A`.
///
/// With the default [`Convert`] strategy, the natural result must implement [`Into<R>`]. With
/// [`Discard`], `R` is `()` and this holds for every callable.
///
/// This trait is implemented automatically and cannot be implemented manually.
pub trait Invocable<Args, R, A = Convert>: Callable<Args> {
    /// Calls `self` through the binding mode `M`, then adapts the result.
    fn invoke_as<M: BindMode>(&self, args: Args) -> R;
}

impl<F, Args, R, A> Invocable<Args, R, A> for F
where
    F: Callable<Args> + ?Sized,
    A: Adapt<F::Output, R>,
{
    #[inline]
    fn invoke_as<M: BindMode>(&self, args: Args) -> R {
        A::adapt(M::call(self, args))
    }
}

/// Holds when an [`Invocable`] call, including the adaptation of its result, can never unwind.
///
/// This trait is implemented automatically and cannot be implemented manually.
pub trait NoUnwindInvocable<Args, R, A = Convert>:
    Invocable<Args, R, A> + CallableNoUnwind<Args>
{
}

impl<F, Args, R, A> NoUnwindInvocable<Args, R, A> for F
where
    F: CallableNoUnwind<Args> + ?Sized,
    A: AdaptNoUnwind<F::Output, R>,
{
}

/// Calls `f` with the given `args` through a [`Shared`] binding, returning its natural result.
///
/// [`Shared`]: mode::Shared
#[inline]
pub fn invoke<F, Args>(f: &F, args: Args) -> F::Output
where
    F: Callable<Args> + ?Sized,
{
    f.call(args)
}

/// Calls `f` with the given `args` through the binding mode `M`.
#[inline]
pub fn invoke_in<M, F, Args>(f: &F, args: Args) -> F::Output
where
    M: BindMode,
    F: Callable<Args> + ?Sized,
{
    M::call(f, args)
}

/// Calls `f` with the given `args`, then converts the natural result into an `R`.
///
/// Any panic raised by `f` propagates unchanged.
#[inline]
pub fn invoke_r<R, F, Args>(f: &F, args: Args) -> R
where
    F: Invocable<Args, R> + ?Sized,
{
    f.invoke_as::<mode::Shared>(args)
}

/// Calls `f` with the given `args` and discards the natural result.
///
/// The result is still computed, so any side effects or panics occur as usual.
#[inline]
pub fn invoke_discarding<F, Args>(f: &F, args: Args)
where
    F: Callable<Args> + ?Sized,
{
    Invocable::<Args, (), Discard>::invoke_as::<mode::Shared>(f, args)
}

/// Calls `f` through the binding mode `M` and adapts the result to `R` with the strategy `A`.
///
/// This is the most general form of invocation, and is what reference wrappers use.
#[inline]
pub fn invoke_adapted<M, A, R, F, Args>(f: &F, args: Args) -> R
where
    M: BindMode,
    F: Invocable<Args, R, A> + ?Sized,
{
    f.invoke_as::<M>(args)
}
