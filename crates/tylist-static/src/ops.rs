//! Operations over [`TypeList`]s.
//!
//! Each operation is a trait with an `Output` associated type and an alias
//! that projects it. The traits recurse structurally on `Cons` and stop at
//! `Nil`, so a missing impl is how an invalid request fails to resolve.

use crate::list::{Cons, Nil, TypeList};
use crate::nat::{Nat, NatSub, S, Z};

// =============================================================================
// Accessors
// =============================================================================

pub trait HeadOf: TypeList {
    type Output;
}

impl HeadOf for Nil {
    type Output = Nil;
}

impl<H, T: TypeList> HeadOf for Cons<H, T> {
    type Output = H;
}

/// First element of `L`, or `Nil` when `L` is empty.
pub type Head<L> = <L as HeadOf>::Output;

pub trait TailOf: TypeList {
    type Output: TypeList;
}

impl TailOf for Nil {
    type Output = Nil;
}

impl<H, T: TypeList> TailOf for Cons<H, T> {
    type Output = T;
}

/// `L` without its first element; `Nil` stays `Nil`.
pub type Tail<L> = <L as TailOf>::Output;

// =============================================================================
// Constructors
// =============================================================================

pub trait PushFront<X>: TypeList {
    type Output: TypeList;
}

impl<X, L: TypeList> PushFront<X> for L {
    type Output = Cons<X, L>;
}

/// `L` with `X` in front.
pub type AppendFront<X, L> = <L as PushFront<X>>::Output;

pub trait PushBack<X>: TypeList {
    type Output: TypeList;
}

impl<X> PushBack<X> for Nil {
    type Output = Cons<X, Nil>;
}

impl<X, H, T> PushBack<X> for Cons<H, T>
where
    T: PushBack<X>,
{
    type Output = Cons<H, <T as PushBack<X>>::Output>;
}

/// `L` with `X` after its last element.
pub type AppendBack<X, L> = <L as PushBack<X>>::Output;

// =============================================================================
// Derived algorithms
// =============================================================================

pub trait Concat<R: TypeList>: TypeList {
    type Output: TypeList;
}

impl<R: TypeList> Concat<R> for Nil {
    type Output = R;
}

impl<H, T, R> Concat<R> for Cons<H, T>
where
    T: Concat<R>,
    R: TypeList,
{
    type Output = Cons<H, <T as Concat<R>>::Output>;
}

/// Elements of `A` followed by elements of `B`.
pub type Concatenate<A, B> = <A as Concat<B>>::Output;

/// Prepends the elements of `Self`, one at a time, onto `Acc`.
pub trait ReverseOnto<Acc: TypeList>: TypeList {
    type Output: TypeList;
}

impl<Acc: TypeList> ReverseOnto<Acc> for Nil {
    type Output = Acc;
}

impl<H, T, Acc> ReverseOnto<Acc> for Cons<H, T>
where
    T: ReverseOnto<Cons<H, Acc>>,
    Acc: TypeList,
{
    type Output = <T as ReverseOnto<Cons<H, Acc>>>::Output;
}

pub type Reverse<L> = <L as ReverseOnto<Nil>>::Output;

/// A type-to-type function usable with [`Map`].
pub trait TypeFn<T> {
    type Output;
}

/// Maps every type to itself.
pub struct Identity;

impl<T> TypeFn<T> for Identity {
    type Output = T;
}

/// Maps `T` to `*const T`.
pub struct ToPointer;

impl<T> TypeFn<T> for ToPointer {
    type Output = *const T;
}

pub trait MapWith<F>: TypeList {
    type Output: TypeList;
}

impl<F> MapWith<F> for Nil {
    type Output = Nil;
}

impl<F, H, T> MapWith<F> for Cons<H, T>
where
    F: TypeFn<H>,
    T: MapWith<F>,
{
    type Output = Cons<<F as TypeFn<H>>::Output, <T as MapWith<F>>::Output>;
}

/// `F` applied to every element of `L`, order preserved.
pub type Map<F, L> = <L as MapWith<F>>::Output;

pub trait IntersperseWith<Sep>: TypeList {
    type Output: TypeList;
}

impl<Sep> IntersperseWith<Sep> for Nil {
    type Output = Nil;
}

impl<Sep, H> IntersperseWith<Sep> for Cons<H, Nil> {
    type Output = Cons<H, Nil>;
}

impl<Sep, H, H2, T> IntersperseWith<Sep> for Cons<H, Cons<H2, T>>
where
    Cons<H2, T>: IntersperseWith<Sep>,
    T: TypeList,
{
    type Output = Cons<H, Cons<Sep, <Cons<H2, T> as IntersperseWith<Sep>>::Output>>;
}

/// `Sep` between every adjacent pair of elements of `L`.
pub type Intersperse<Sep, L> = <L as IntersperseWith<Sep>>::Output;

// =============================================================================
// Slicing
// =============================================================================

pub trait TakeFirst<N: Nat>: TypeList {
    type Output: TypeList;
}

impl<L: TypeList> TakeFirst<Z> for L {
    type Output = Nil;
}

impl<N, H, T> TakeFirst<S<N>> for Cons<H, T>
where
    N: Nat,
    T: TakeFirst<N>,
{
    type Output = Cons<H, <T as TakeFirst<N>>::Output>;
}

/// The first `N` elements of `L`. Does not resolve when `N` exceeds the
/// length of `L`.
pub type First<N, L> = <L as TakeFirst<N>>::Output;

pub trait SkipFirst<N: Nat>: TypeList {
    type Output: TypeList;
}

impl<L: TypeList> SkipFirst<Z> for L {
    type Output = L;
}

impl<N, H, T> SkipFirst<S<N>> for Cons<H, T>
where
    N: Nat,
    T: SkipFirst<N>,
{
    type Output = <T as SkipFirst<N>>::Output;
}

/// `L` without its first `N` elements.
pub type DropFirst<N, L> = <L as SkipFirst<N>>::Output;

/// Drops `Length - N` elements; resolves only when `N <= Length`.
pub trait TakeLast<N: Nat>: TypeList {
    type Output: TypeList;
}

impl<N, L> TakeLast<N> for L
where
    N: Nat,
    L: TypeList,
    <L as TypeList>::Length: NatSub<N>,
    L: SkipFirst<<<L as TypeList>::Length as NatSub<N>>::Output>,
{
    type Output = <L as SkipFirst<<<L as TypeList>::Length as NatSub<N>>::Output>>::Output;
}

/// The last `N` elements of `L`.
pub type Last<N, L> = <L as TakeLast<N>>::Output;
