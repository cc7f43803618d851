//! Key ordering capabilities for skipmap.
//!
//! A skip list only ever asks one question of its keys: does `left` sort
//! strictly before `right`? [`Comparator`] captures that question. Three
//! families of comparators are provided:
//!
//! - [`Natural`] for any `K: Ord` (integers, strings, tuples, ...)
//! - [`ByLessThan`] for keys implementing the [`LessThan`] capability
//! - any closure `Fn(&K, &K) -> bool` for a caller-supplied order
//!
//! Comparators must be pure and define a strict total order. Nothing here
//! checks that; a broken comparator corrupts the container that uses it.

/// A strict total order over `K`.
pub trait Comparator<K: ?Sized> {
    /// Returns `true` when `left` sorts strictly before `right`.
    fn less_than(&self, left: &K, right: &K) -> bool;

    /// Returns `true` when neither key sorts before the other.
    fn equivalent(&self, left: &K, right: &K) -> bool {
        !self.less_than(left, right) && !self.less_than(right, left)
    }
}

/// Orders keys by their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    #[inline]
    fn less_than(&self, left: &K, right: &K) -> bool {
        left < right
    }
}

/// Keys that can be linearly ordered by a single less-than test.
///
/// Useful for key types that have an order but no sensible `Eq`/`Ord`
/// implementation of their own.
pub trait LessThan {
    fn less_than(&self, other: &Self) -> bool;
}

/// Orders keys through their [`LessThan`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByLessThan;

impl<K: LessThan + ?Sized> Comparator<K> for ByLessThan {
    #[inline]
    fn less_than(&self, left: &K, right: &K) -> bool {
        LessThan::less_than(left, right)
    }
}

/// Inverts another comparator, producing a descending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for Reversed<C> {
    #[inline]
    fn less_than(&self, left: &K, right: &K) -> bool {
        self.0.less_than(right, left)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less_than(&self, left: &K, right: &K) -> bool {
        self(left, right)
    }
}

/// Returns `true` when `candidate` sorts strictly before `key`.
///
/// A missing candidate stands for "past the last element" and is the maximum
/// of every order, so it never precedes anything. This is the only place the
/// rule is spelled out; search loops call it instead of special-casing the
/// end of a level.
#[inline]
pub fn precedes<K, C>(comparator: &C, candidate: Option<&K>, key: &K) -> bool
where
    K: ?Sized,
    C: Comparator<K> + ?Sized,
{
    match candidate {
        Some(candidate) => comparator.less_than(candidate, key),
        None => false,
    }
}
