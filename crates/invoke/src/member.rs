//! Callables for the members of a type.
//!
//! A member callable applies its member to the *first* argument of a call, and forwards the
//! remaining arguments. The first argument can be anything that [borrows] as the member's owner,
//! so a value, a reference, or a smart pointer all work the same way:
//!
//! ```
//! use fnsig_invoke::{field, invoke, member::Method};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Point {
//!     fn offset(&self, by: i32) -> i32 {
//!         self.x + self.y + by
//!     }
//! }
//!
//! let point = Point { x: 1, y: 2 };
//! assert_eq!(invoke(&field!(Point, y), (&point,)), 2);
//! assert_eq!(invoke(&Method::<Point, _>::new(Point::offset), (&point, 10)), 13);
//! assert_eq!(invoke(&Method::<Point, _>::new(Point::offset), (point, 20)), 23);
//! ```
//!
//! [borrows]: core::borrow::Borrow

use crate::{Callable, CallableNoUnwind};
use core::borrow::{Borrow, BorrowMut};

/// Builds a [`Field`] callable for the field `$name` of the type `$owner`.
///
/// ```
/// # use fnsig_invoke::{field, invoke};
/// struct Pair(u8, char);
///
/// assert_eq!(invoke(&field!(Pair, 1), (Pair(0, 'z'),)), 'z');
/// ```
#[macro_export]
macro_rules! field {
    ($owner:ty, $name:tt) => {
        $crate::member::Field::<$owner, _>::new(|owner: &$owner| &owner.$name)
    };
}

/// Builds a [`FieldRef`] callable for the field `$name` of the type `$owner`.
///
/// ```
/// # use fnsig_invoke::{field_ref, invoke};
/// struct Named {
///     name: String,
/// }
///
/// let named = Named { name: String::from("fnsig") };
/// let name: &String = invoke(&field_ref!(Named, name), (&named,));
/// assert!(core::ptr::eq(name, &named.name));
/// ```
#[macro_export]
macro_rules! field_ref {
    ($owner:ty, $name:tt) => {
        $crate::member::FieldRef::<$owner, _>::new(|owner: &$owner| &owner.$name)
    };
}

/// A callable that reads a field out of its only argument.
///
/// The field is described by a projection from the owner to the field, usually written with the
/// [`field!`] macro. A call produces a clone of the field, use a [`FieldRef`] to borrow it
/// instead.
///
/// When the field is [`Copy`], calls with a receiver of type `T`, `&T` or `&mut T` can never
/// fail, so the [`Field`] is also [`CallableNoUnwind`] for them.
pub struct Field<T: ?Sized, V> {
    project: fn(&T) -> &V,
}

impl<T: ?Sized, V> Field<T, V> {
    /// Creates a [`Field`] from a projection.
    pub const fn new(project: fn(&T) -> &V) -> Self {
        Self { project }
    }

    /// Borrows the field out of the `owner`.
    #[inline]
    pub fn get<'a>(&self, owner: &'a T) -> &'a V {
        (self.project)(owner)
    }

    /// Gets a [`FieldRef`] for the same field, whose calls borrow the field instead of cloning
    /// it.
    pub fn by_ref(self) -> FieldRef<T, V> {
        FieldRef::new(self.project)
    }
}

impl<T: ?Sized, V> Clone for Field<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized, V> Copy for Field<T, V> {}

impl<T: ?Sized, V> core::fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Field")
            .field("owner", &core::any::type_name::<T>())
            .field("type", &core::any::type_name::<V>())
            .finish()
    }
}

impl<T, V, P> Callable<(P,)> for Field<T, V>
where
    T: ?Sized,
    V: Clone,
    P: Borrow<T>,
{
    type Output = V;

    #[inline]
    fn call(&self, (receiver,): (P,)) -> V {
        self.get(Borrow::<T>::borrow(&receiver)).clone()
    }
}

impl<T, V: Copy> CallableNoUnwind<(T,)> for Field<T, V> {}

impl<'a, T: ?Sized, V: Copy> CallableNoUnwind<(&'a T,)> for Field<T, V> {}

impl<'a, T: ?Sized, V: Copy> CallableNoUnwind<(&'a mut T,)> for Field<T, V> {}

/// A callable that borrows a field out of its only argument, which must be a `&T`.
///
/// Unlike a [`Field`], the field does not need to be [`Clone`], and calls never fail.
pub struct FieldRef<T: ?Sized, V: ?Sized> {
    project: fn(&T) -> &V,
}

impl<T: ?Sized, V: ?Sized> FieldRef<T, V> {
    /// Creates a [`FieldRef`] from a projection.
    pub const fn new(project: fn(&T) -> &V) -> Self {
        Self { project }
    }

    /// Borrows the field out of the `owner`.
    #[inline]
    pub fn get<'a>(&self, owner: &'a T) -> &'a V {
        (self.project)(owner)
    }
}

impl<T: ?Sized, V: ?Sized> Clone for FieldRef<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized, V: ?Sized> Copy for FieldRef<T, V> {}

impl<T: ?Sized, V: ?Sized> core::fmt::Debug for FieldRef<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldRef")
            .field("owner", &core::any::type_name::<T>())
            .field("type", &core::any::type_name::<V>())
            .finish()
    }
}

impl<'a, T, V> Callable<(&'a T,)> for FieldRef<T, V>
where
    T: ?Sized + 'a,
    V: ?Sized + 'a,
{
    type Output = &'a V;

    #[inline]
    fn call(&self, (owner,): (&'a T,)) -> &'a V {
        self.get(owner)
    }
}

impl<'a, T: ?Sized + 'a, V: ?Sized + 'a> CallableNoUnwind<(&'a T,)> for FieldRef<T, V> {}

/// A callable for a method whose receiver is `&T`.
///
/// The first argument of a call must [borrow] as a `T`.
///
/// [borrow]: Borrow
pub struct Method<T: ?Sized, F> {
    method: F,
    _receiver: core::marker::PhantomData<fn(&T)>,
}

/// A callable for a method whose receiver is `&mut T`.
///
/// The first argument of a call is taken by value and must [mutably borrow] as a `T`, so it is
/// either an owned `T` (which is dropped after the call) or a `&mut T`.
///
/// [mutably borrow]: BorrowMut
pub struct MethodMut<T: ?Sized, F> {
    method: F,
    _receiver: core::marker::PhantomData<fn(&mut T)>,
}

macro_rules! method_common {
    ($($name:ident),*) => {$(
        impl<T: ?Sized, F> $name<T, F> {
            #[doc = concat!("Creates a [`", stringify!($name), "`] from a method or function.")]
            pub const fn new(method: F) -> Self {
                Self {
                    method,
                    _receiver: core::marker::PhantomData,
                }
            }

            /// Returns the underlying method.
            pub fn into_inner(self) -> F {
                self.method
            }
        }

        impl<T: ?Sized, F: Clone> Clone for $name<T, F> {
            fn clone(&self) -> Self {
                Self::new(self.method.clone())
            }
        }

        impl<T: ?Sized, F: Copy> Copy for $name<T, F> {}

        impl<T: ?Sized, F> core::fmt::Debug for $name<T, F> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("receiver", &core::any::type_name::<T>())
                    .field("method", &core::any::type_name::<F>())
                    .finish()
            }
        }
    )*};
}

method_common!(Method, MethodMut);

macro_rules! callable_method {
    (($($argument:ident: $parameter:ident),*); $number:literal) => {
        impl<T, F, P, $($parameter,)* R> Callable<(P, $($parameter,)*)> for Method<T, F>
        where
            T: ?Sized,
            F: Fn(&T $(, $parameter)*) -> R,
            P: Borrow<T>,
        {
            type Output = R;

            #[inline]
            fn call(&self, (receiver, $($argument,)*): (P, $($parameter,)*)) -> R {
                (self.method)(Borrow::<T>::borrow(&receiver) $(, $argument)*)
            }
        }

        impl<T, F, P, $($parameter,)* R> Callable<(P, $($parameter,)*)> for MethodMut<T, F>
        where
            T: ?Sized,
            F: Fn(&mut T $(, $parameter)*) -> R,
            P: BorrowMut<T>,
        {
            type Output = R;

            #[inline]
            fn call(&self, (mut receiver, $($argument,)*): (P, $($parameter,)*)) -> R {
                (self.method)(BorrowMut::<T>::borrow_mut(&mut receiver) $(, $argument)*)
            }
        }
    };
}

crate::with_parameters!(callable_method);
