//! Lightweight, non-owning references to plain functions, closures, [members] and anything else
//! that can be called with a given signature.
//!
//! ```
//! use fnsig::FnRef;
//!
//! fn sum_with(f: FnRef<'_, fn(u32) -> u32>, values: &[u32]) -> u32 {
//!     values.iter().map(|value| f.call(*value)).sum()
//! }
//!
//! let square = |x: u32| x * x;
//! assert_eq!(sum_with(FnRef::new(&square), &[1, 2, 3]), 14);
//! ```
//!
//! # Related Crates
//!
//! The implementation for [`fnsig`](crate) is actually split into multiple component crates,
//! which are:
//! - [`fnsig_invoke`], which decides whether a callable can be called with some arguments, and
//!   calls plain functions and members in a uniform way. Its contents are re-exported in the
//!   crate root, and its modules are re-exported as the [`adapt`], [`member`] and [`mode`]
//!   modules.
//! - [`fnsig_ref`], which provides the [`FnRef`] and [`NoUnwindFnRef`] types. Its contents are
//!   re-exported in the crate root, and its [`raw`] module is re-exported as is.
//!
//! # Feature Flags
//!
//! By default, the [`std`](crate#std) flag is enabled.
//!
//! ## [`std`]
//!
//! Enables a dependency on the [Rust standard library](std). This implements
//! [`std::error::Error`] for [`ReentrantCallError`], and makes callables that unwind despite
//! being [`NoUnwind`] print a message before calling [`std::process::abort()`].
//!
//! - Enabled by: [`default`](crate#feature-flags)
//!
//! [members]: member

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)] // Unsafe code present in dependencies
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::exhaustive_enums)]

#[cfg(feature = "std")]
extern crate std;

pub use fnsig_invoke::{adapt, member, mode};
pub use fnsig_ref::raw;

pub use fnsig_invoke::{
    abort_on_unwind, field, field_ref, invoke, invoke_adapted, invoke_discarding, invoke_in,
    invoke_r, Adapt, AdaptNoUnwind, BindKind, BindMode, Callable, CallableNoUnwind, Convert,
    Discard, Exclusive, Invocable, NoUnwind, NoUnwindInvocable, ReentrantCallError,
};

pub use fnsig_ref::{
    mutable, shared, shared_transient, trampoline, transient, Bind, Capture, FnRef, FnRefKind,
    NoUnwindFnRef, RawFnRef, Signature,
};
