//! Types for describing the underlying representation of [`FnRef`]s.
//!
//! [`FnRef`]: crate::FnRef

mod handle;

pub(crate) mod trampoline;

pub use handle::Handle;

use crate::Signature;

/// The two words making up a [`FnRef`]: a [`Handle`] to the referenced callable, and the
/// trampoline used to call it.
///
/// [`FnRef`]: crate::FnRef
pub struct RawFnRef<S: Signature> {
    handle: Handle,
    trampoline: S::Trampoline,
}

impl<S: Signature> RawFnRef<S> {
    /// Creates a new [`RawFnRef`] from a `handle` and a `trampoline`.
    ///
    /// Creating a [`RawFnRef`] is always safe, but turning it into a [`FnRef`] requires that the
    /// `trampoline` can be called with the `handle`. See [`FnRef::from_raw()`] for more
    /// information.
    ///
    /// [`FnRef`]: crate::FnRef
    /// [`FnRef::from_raw()`]: crate::FnRef::from_raw()
    pub const fn new(handle: Handle, trampoline: S::Trampoline) -> Self {
        Self { handle, trampoline }
    }

    /// Gets the [`Handle`] to the referenced callable.
    pub const fn handle(&self) -> Handle {
        self.handle
    }

    /// Gets the trampoline that the [`handle()`] is passed to.
    ///
    /// [`handle()`]: RawFnRef::handle()
    pub const fn trampoline(&self) -> S::Trampoline {
        self.trampoline
    }
}

impl<S: Signature> Clone for RawFnRef<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Signature> Copy for RawFnRef<S> {}

impl<S: Signature> PartialEq for RawFnRef<S> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
            && S::trampoline_addr(self.trampoline) == S::trampoline_addr(other.trampoline)
    }
}

impl<S: Signature> Eq for RawFnRef<S> {}

impl<S: Signature> core::fmt::Debug for RawFnRef<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawFnRef")
            .field("handle", &self.handle)
            .field("trampoline", &S::trampoline_addr(self.trampoline))
            .finish()
    }
}
