use crate::Callable;

macro_rules! callable_closure {
    (($($argument:ident: $parameter:ident),*); $number:literal) => {
        impl<F, $($parameter,)* O> Callable<($($parameter,)*)> for F
        where
            F: Fn($($parameter),*) -> O + ?Sized,
        {
            type Output = O;

            #[inline]
            fn call(&self, ($($argument,)*): ($($parameter,)*)) -> O {
                self($($argument),*)
            }
        }
    };
}

crate::with_parameters!(callable_closure);
