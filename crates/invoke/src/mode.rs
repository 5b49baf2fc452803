//! Binding modes, which record how a callable was captured.
//!
//! A binding mode is chosen once, when a callable is captured, and decides which method of
//! [`Callable`] is used for every later call. Since a captured callable is only ever accessed
//! through a shared reference, the modes do not change what a call may do with the callable;
//! they only let a type distinguish the context it was captured in.
//!
//! | Mode | Captured from | Method |
//! |------|---------------|--------|
//! | [`Mutable`] | a place the caller could mutate | [`Callable::call_mutable()`] |
//! | [`Shared`] | a read-only place | [`Callable::call()`] |
//! | [`Transient`] | a value the caller is giving up | [`Callable::call_transient()`] |
//! | [`SharedTransient`] | a read-only value the caller is giving up | [`Callable::call_shared_transient()`] |
//!
//! A [`Transient`] binding may still be called any number of times.

use crate::Callable;

mod sealed {
    #[allow(unreachable_pub)]
    pub trait Sealed {}

    impl Sealed for super::Mutable {}
    impl Sealed for super::Shared {}
    impl Sealed for super::Transient {}
    impl Sealed for super::SharedTransient {}
}

/// Runtime description of a [`BindMode`], used for diagnostics.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_enums)]
pub enum BindKind {
    /// See [`Mutable`].
    Mutable,
    /// See [`Shared`].
    Shared,
    /// See [`Transient`].
    Transient,
    /// See [`SharedTransient`].
    SharedTransient,
}

impl BindKind {
    /// Returns `true` for the modes capturing read-only places or values.
    pub const fn is_shared(self) -> bool {
        matches!(self, Self::Shared | Self::SharedTransient)
    }

    /// Returns `true` for the modes capturing values the caller is giving up.
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Transient | Self::SharedTransient)
    }
}

impl core::fmt::Display for BindKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Mutable => "mutable",
            Self::Shared => "shared",
            Self::Transient => "transient",
            Self::SharedTransient => "shared transient",
        })
    }
}

/// Type-level tag selecting one of the methods of [`Callable`].
///
/// This trait is sealed, and is implemented by [`Mutable`], [`Shared`], [`Transient`] and
/// [`SharedTransient`].
pub trait BindMode:
    sealed::Sealed + Clone + Copy + core::fmt::Debug + Default + Send + Sync + 'static
{
    /// The runtime description of this mode.
    const KIND: BindKind;

    /// Calls `f` with the method corresponding to this mode.
    fn call<F, Args>(f: &F, args: Args) -> F::Output
    where
        F: Callable<Args> + ?Sized;
}

macro_rules! bind_modes {
    ($(
        $(#[$meta:meta])*
        $name:ident => $method:ident;
    )*) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        #[allow(clippy::exhaustive_structs)]
        pub struct $name;

        impl BindMode for $name {
            const KIND: BindKind = BindKind::$name;

            #[inline]
            fn call<F, Args>(f: &F, args: Args) -> F::Output
            where
                F: Callable<Args> + ?Sized,
            {
                f.$method(args)
            }
        }
    )*};
}

bind_modes! {
    /// The callable was captured from a place the caller could mutate, such as `&mut f`.
    Mutable => call_mutable;
    /// The callable was captured from a read-only place, such as `&f`.
    Shared => call;
    /// The callable was captured from a value the caller is giving up, such as a temporary.
    Transient => call_transient;
    /// The callable was captured from a read-only value the caller is giving up.
    SharedTransient => call_shared_transient;
}
