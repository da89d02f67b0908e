//! Peano naturals for element counts.

use core::marker::PhantomData;

use crate::sealed::Sealed;

/// Zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Z;

/// Successor of `N`.
pub struct S<N>(PhantomData<fn() -> N>);

/// A type-level natural number.
pub trait Nat: Sealed {
    const VALUE: usize;
}

impl Sealed for Z {}

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Sealed for S<N> {}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Subtraction that only resolves when `Rhs <= Self`.
pub trait NatSub<Rhs: Nat>: Nat {
    type Output: Nat;
}

impl<N: Nat> NatSub<Z> for N {
    type Output = N;
}

impl<A, B> NatSub<S<B>> for S<A>
where
    A: NatSub<B>,
    B: Nat,
{
    type Output = <A as NatSub<B>>::Output;
}

/// `A - B`.
pub type Diff<A, B> = <A as NatSub<B>>::Output;

pub type U0 = Z;
pub type U1 = S<U0>;
pub type U2 = S<U1>;
pub type U3 = S<U2>;
pub type U4 = S<U3>;
pub type U5 = S<U4>;
pub type U6 = S<U5>;
pub type U7 = S<U6>;
pub type U8 = S<U7>;
pub type U9 = S<U8>;
pub type U10 = S<U9>;
pub type U11 = S<U10>;
pub type U12 = S<U11>;
pub type U13 = S<U12>;
pub type U14 = S<U13>;
pub type U15 = S<U14>;
pub type U16 = S<U15>;
