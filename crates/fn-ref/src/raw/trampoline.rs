//! The functions that a [`FnRef`] calls, which recover the callable from its [`Handle`].
//!
//! [`FnRef`]: crate::FnRef

use crate::raw::Handle;
use fnsig_invoke::{BindMode, Invocable};

macro_rules! define_trampoline {
    (($($argument:ident: $parameter:ident),*); $number:literal) => {
        paste::paste! {
            /// Calls the `F` referred to by the `handle` through the binding mode `M`, adapting
            /// its result with `A`.
            ///
            /// # Safety
            ///
            /// The `handle` must refer to a live `F`.
            #[inline]
            #[allow(clippy::too_many_arguments)]
            pub(crate) unsafe fn [<trampoline_ $number>]<F, M, A, $($parameter,)* R>(
                handle: Handle
                $(, $argument: $parameter)*
            ) -> R
            where
                F: Invocable<($($parameter,)*), R, A>,
                M: BindMode,
            {
                // SAFETY: ensured by caller.
                let callable = unsafe { handle.as_ref::<F>() };
                fnsig_invoke::invoke_adapted::<M, A, R, F, ($($parameter,)*)>(
                    callable,
                    ($($argument,)*),
                )
            }
        }
    };
}

fnsig_invoke::with_parameters!(define_trampoline);
