use core::marker::PhantomData;

use crate::nat::{Nat, S, Z};
use crate::sealed::Sealed;

/// The empty list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// A list node holding the element `H` in front of the list `T`.
///
/// `Cons` itself accepts any `T`; only a `T` that is a [`TypeList`] makes the
/// node a list.
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

/// Membership predicate: implemented exactly for `Nil` and for `Cons<H, T>`
/// whose rest `T` is itself a list.
pub trait TypeList: Sealed {
    /// Number of elements.
    const LEN: usize;

    /// The length as a Peano natural, for arithmetic on counts.
    type Length: Nat;
}

impl Sealed for Nil {}

impl TypeList for Nil {
    const LEN: usize = 0;
    type Length = Z;
}

impl<H, T: TypeList> Sealed for Cons<H, T> {}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = T::LEN + 1;
    type Length = S<T::Length>;
}

/// Length of `L` as a Peano natural.
pub type Len<L> = <L as TypeList>::Length;

/// Number of elements in `L`.
pub const fn length<L: TypeList>() -> usize {
    L::LEN
}
