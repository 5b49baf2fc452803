/// Error type used when an [`Exclusive`] callable is called again while a previous call to it has
/// not yet returned.
///
/// [`Exclusive`]: crate::Exclusive
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ReentrantCallError {
    type_name: &'static str,
}

impl ReentrantCallError {
    pub(crate) fn new<F>() -> Self {
        Self {
            type_name: core::any::type_name::<F>(),
        }
    }

    /// Gets the name of the type of the callable that was called reentrantly.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl core::fmt::Debug for ReentrantCallError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReentrantCallError")
            .field("type_name", &self.type_name)
            .finish()
    }
}

impl core::fmt::Display for ReentrantCallError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("exclusive callable was called again before its previous call returned")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReentrantCallError {}
