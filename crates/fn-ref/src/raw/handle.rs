use core::ptr::NonNull;

/// The type-erased address of a referenced callable.
///
/// A [`Handle`] is never null, which allows `Option<FnRef>` to be the same size as a [`FnRef`].
///
/// [`FnRef`]: crate::FnRef
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Handle(NonNull<()>);

impl Handle {
    /// Gets a [`Handle`] to the given `callable`.
    #[inline]
    pub fn from_ref<F>(callable: &F) -> Self {
        Self(NonNull::from(callable).cast())
    }

    /// Gets the address the [`Handle`] refers to.
    pub const fn as_ptr(self) -> *const () {
        self.0.as_ptr()
    }

    /// Recovers a reference to the callable the [`Handle`] was created from.
    ///
    /// # Safety
    ///
    /// The [`Handle`] must have been created by a call to [`Handle::from_ref::<F>()`], and the
    /// referenced `F` must still be valid for the lifetime `'a`.
    ///
    /// [`Handle::from_ref::<F>()`]: Handle::from_ref()
    #[inline]
    pub unsafe fn as_ref<'a, F>(self) -> &'a F {
        // SAFETY: caller ensures the pointer refers to a live `F`.
        unsafe { self.0.cast::<F>().as_ref() }
    }
}

impl core::fmt::Debug for Handle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Pointer::fmt(&self.0, f)
    }
}
