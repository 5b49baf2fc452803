use crate::{Callable, ReentrantCallError};
use core::cell::RefCell;

/// Allows calling an [`FnMut`] closure through a shared reference.
///
/// The closure is kept in a [`RefCell`], and every call borrows it mutably for the duration of
/// the call. A call made while another call is still running, such as a closure that ends up
/// calling itself, returns a [`ReentrantCallError`] instead of running.
///
/// # Example
///
/// ```
/// use fnsig_invoke::{invoke, Exclusive};
///
/// let mut total = 0;
/// let add = Exclusive::new(|amount: i32| {
///     total += amount;
///     total
/// });
///
/// assert_eq!(invoke(&add, (3,)), Ok(3));
/// assert_eq!(invoke(&add, (4,)), Ok(7));
/// drop(add);
/// assert_eq!(total, 7);
/// ```
pub struct Exclusive<F> {
    callable: RefCell<F>,
}

impl<F> Exclusive<F> {
    /// Wraps the given closure.
    pub const fn new(callable: F) -> Self {
        Self {
            callable: RefCell::new(callable),
        }
    }

    /// Returns `true` if a call to the closure is currently running.
    pub fn is_running(&self) -> bool {
        self.callable.try_borrow_mut().is_err()
    }

    /// Gets a mutable reference to the closure.
    pub fn get_mut(&mut self) -> &mut F {
        self.callable.get_mut()
    }

    /// Returns the closure.
    pub fn into_inner(self) -> F {
        self.callable.into_inner()
    }
}

impl<F> core::fmt::Debug for Exclusive<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Exclusive")
            .field("type_name", &core::any::type_name::<F>())
            .field("running", &self.is_running())
            .finish()
    }
}

macro_rules! callable_exclusive {
    (($($argument:ident: $parameter:ident),*); $number:literal) => {
        impl<F, $($parameter,)* O> Callable<($($parameter,)*)> for Exclusive<F>
        where
            F: FnMut($($parameter),*) -> O,
        {
            type Output = Result<O, ReentrantCallError>;

            fn call(&self, ($($argument,)*): ($($parameter,)*)) -> Self::Output {
                let mut borrowed = self
                    .callable
                    .try_borrow_mut()
                    .map_err(|_| ReentrantCallError::new::<F>())?;

                let callable: &mut F = &mut borrowed;
                Ok(callable($($argument),*))
            }
        }
    };
}

crate::with_parameters!(callable_exclusive);
