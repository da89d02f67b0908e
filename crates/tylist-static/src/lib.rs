//! Type lists resolved by the Rust type checker.
//!
//! A list is a type built from [`Nil`] and [`Cons`]. Every operation is a
//! trait with an associated `Output` type, paired with a type alias that
//! projects it, so a list expression is resolved while the compiler checks
//! the program and costs nothing at runtime.
//!
//! ```
//! use tylist_static::{Intersperse, Last, Reverse, U2, assert_type_eq, pack};
//!
//! struct A;
//! struct B;
//! struct C;
//! struct Sep;
//!
//! assert_type_eq::<Reverse<pack![A, B, C]>, pack![C, B, A]>();
//! assert_type_eq::<Last<U2, pack![A, B, C]>, pack![B, C]>();
//! assert_type_eq::<Intersperse<Sep, pack![A, B]>, pack![A, Sep, B]>();
//! ```
//!
//! Terms that are not lists do not implement [`TypeList`], so any operation on
//! them fails to resolve:
//!
//! ```compile_fail
//! use tylist_static::{Cons, Reverse, TypeList};
//!
//! const LEN: usize = <Reverse<Cons<u8, u16>> as TypeList>::LEN;
//! ```
//!
//! Counts larger than the list are rejected the same way, for both
//! [`First`] and [`Last`]:
//!
//! ```compile_fail
//! use tylist_static::{First, TypeList, U3, pack};
//!
//! const LEN: usize = <First<U3, pack![u8, u16]> as TypeList>::LEN;
//! ```
//!
//! ```compile_fail
//! use tylist_static::{Last, TypeList, U3, pack};
//!
//! const LEN: usize = <Last<U3, pack![u8, u16]> as TypeList>::LEN;
//! ```

#![no_std]

mod list;
mod nat;
mod ops;

pub use list::{Cons, Len, Nil, TypeList, length};
pub use nat::{
    Diff, Nat, NatSub, S, U0, U1, U2, U3, U4, U5, U6, U7, U8, U9, U10, U11, U12, U13, U14, U15,
    U16, Z,
};
pub use ops::{
    AppendBack, AppendFront, Concat, Concatenate, DropFirst, First, Head, HeadOf, Identity,
    Intersperse, IntersperseWith, Last, Map, MapWith, PushBack, PushFront, Reverse, ReverseOnto,
    SkipFirst, Tail, TailOf, TakeFirst, TakeLast, ToPointer, TypeFn,
};

mod sealed {
    pub trait Sealed {}
}

/// Builds a list type from a sequence of element types.
///
/// `pack![A, B, C]` is `Cons<A, Cons<B, Cons<C, Nil>>>` and `pack![]` is
/// [`Nil`].
#[macro_export]
macro_rules! pack {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::pack![$($tail),*]>
    };
}

/// Implemented only when both parameters are the same type.
pub trait Same<T: ?Sized> {}

impl<T: ?Sized> Same<T> for T {}

/// Compiles only if `A` and `B` are the same type.
pub fn assert_type_eq<A, B>()
where
    A: Same<B> + ?Sized,
    B: ?Sized,
{
}
