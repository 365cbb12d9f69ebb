//! Chainable sequence pipeline.
//!
//! Every intermediate stage consumes the previous one and allocates a new sequence.
//! The caller's original data is never mutated; borrow it (`collection(items.iter())`)
//! to keep it around.

use std::iter::Sum;

/// Ordered sequence wrapper with chainable transforms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collection<T> {
    items: Vec<T>,
}

/// Start a pipeline from any iterable.
pub fn collection<T>(items: impl IntoIterator<Item = T>) -> Collection<T> {
    Collection::new(items.into_iter().collect())
}

impl<T> Collection<T> {
    /// Wrap an owned vector.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of elements in the current stage.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the current stage is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrowing iterator over the current stage.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Element-wise transform. Same length, same order.
    pub fn map<U, F>(self, f: F) -> Collection<U>
    where
        F: FnMut(T) -> U,
    {
        Collection::new(self.items.into_iter().map(f).collect())
    }

    /// Keep elements satisfying `predicate`, preserving order.
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::new(self.items.into_iter().filter(|x| predicate(x)).collect())
    }

    /// Split into `(matching, rest)` in one pass; both halves keep relative order.
    pub fn partition<P>(self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let (l_matching, l_rest): (Vec<T>, Vec<T>) =
            self.items.into_iter().partition(|x| predicate(x));
        (Self::new(l_matching), Self::new(l_rest))
    }

    /// Drop elements equivalent to an already kept element.
    ///
    /// The first occurrence wins. Each candidate is compared pairwise against the kept list
    /// only (O(n²)), so for a non-transitive `equivalence` an element is dropped solely when it
    /// matches a survivor; no transitive-closure merging happens. Applying this twice yields
    /// the same sequence as applying it once.
    pub fn uniq_with<F>(self, mut equivalence: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut l_kept: Vec<T> = Vec::with_capacity(self.items.len());
        for item in self.items {
            if !l_kept.iter().any(|kept| equivalence(kept, &item)) {
                l_kept.push(item);
            }
        }
        Self::new(l_kept)
    }

    /// Stable ascending sort by the projected key.
    pub fn sort_by_key<K, F>(self, f: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut l_items = self.items;
        l_items.sort_by_key(f);
        Self::new(l_items)
    }

    /// Sum of `projection` over all elements; zero for an empty stage.
    pub fn sum_by<N, F>(self, projection: F) -> N
    where
        N: Sum<N>,
        F: FnMut(&T) -> N,
    {
        self.items.iter().map(projection).sum()
    }

    /// Materialize the current stage.
    pub fn value(self) -> Vec<T> {
        self.items
    }
}

impl<T: Sum<T>> Collection<T> {
    /// Sum of all elements; zero for an empty stage.
    pub fn sum(self) -> T {
        self.items.into_iter().sum()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{Collection, collection};

    #[test]
    fn map_filter_keep_order() {
        let l_out = collection(vec![1, 2, 3, 4, 5])
            .filter(|n| n % 2 == 1)
            .map(|n| n * 10)
            .value();

        assert_eq!(l_out, vec![10, 30, 50]);
    }

    #[test]
    fn partition_splits_in_order() {
        let (odd, even) = collection(vec![5, 2, 3, 8, 1]).partition(|n| n % 2 == 1);

        assert_eq!(odd.value(), vec![5, 3, 1]);
        assert_eq!(even.value(), vec![2, 8]);
    }

    #[test]
    fn uniq_with_keeps_first_occurrence() {
        let l_out = collection(vec![("a", 1), ("b", 2), ("a", 3), ("c", 4), ("b", 5)])
            .uniq_with(|x, y| x.0 == y.0)
            .value();

        assert_eq!(l_out, vec![("a", 1), ("b", 2), ("c", 4)]);
    }

    #[test]
    fn uniq_with_non_transitive_relation_compares_against_survivors() {
        // |x - y| <= 1 is not transitive: 1 ~ 2 and 2 ~ 3, but 1 !~ 3.
        let l_out = collection(vec![1, 2, 3])
            .uniq_with(|x: &i32, y: &i32| (x - y).abs() <= 1)
            .value();

        assert_eq!(l_out, vec![1, 3]);
    }

    #[test]
    fn sort_by_key_is_stable() {
        let l_out = collection(vec![("b", 1), ("a", 2), ("b", 3), ("a", 4)])
            .sort_by_key(|x| x.0)
            .value();

        assert_eq!(l_out, vec![("a", 2), ("a", 4), ("b", 1), ("b", 3)]);
    }

    #[test]
    fn sum_of_empty_is_zero() {
        assert_eq!(Collection::<i64>::default().sum(), 0);
        assert_eq!(collection(Vec::<(i64, i64)>::new()).sum_by(|x| x.1), 0);
        assert_eq!(collection(vec![(1, 4), (2, 6)]).sum_by(|x| x.1), 10);
    }

    #[test]
    fn source_vector_is_untouched_when_borrowed() {
        let l_src = vec![3, 1, 2];

        let l_sorted = collection(l_src.iter()).sort_by_key(|n| **n).map(|n| *n).value();

        assert_eq!(l_sorted, vec![1, 2, 3]);
        assert_eq!(l_src, vec![3, 1, 2]);
    }

    proptest! {
        #[test]
        fn prop_uniq_with_is_idempotent(l_items in prop::collection::vec(0u8..6, 0..40)) {
            let once = collection(l_items).uniq_with(|x, y| x == y);
            let twice = once.clone().uniq_with(|x, y| x == y);

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_sort_by_key_non_decreasing_and_stable(
            l_keys in prop::collection::vec(0u8..5, 0..40)
        ) {
            let l_tagged: Vec<(u8, usize)> =
                l_keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect();

            let l_sorted = collection(l_tagged).sort_by_key(|x| x.0).value();

            for pair in l_sorted.windows(2) {
                prop_assert!(pair[0].0 <= pair[1].0);
                if pair[0].0 == pair[1].0 {
                    prop_assert!(pair[0].1 < pair[1].1);
                }
            }
        }

        #[test]
        fn prop_partition_is_complete_and_disjoint(
            l_items in prop::collection::vec(any::<i32>(), 0..40)
        ) {
            let l_tagged: Vec<(usize, i32)> = l_items.into_iter().enumerate().collect();

            let (yes, no) = collection(l_tagged.clone()).partition(|x| x.1 % 3 == 0);
            let (l_yes, l_no) = (yes.value(), no.value());

            let mut l_rejoined: Vec<(usize, i32)> =
                l_yes.iter().chain(l_no.iter()).copied().collect();
            l_rejoined.sort();
            let mut l_expected = l_tagged.clone();
            l_expected.sort();
            prop_assert_eq!(l_rejoined, l_expected);
            prop_assert!(l_yes.iter().all(|x| x.1 % 3 == 0));
            prop_assert!(l_no.iter().all(|x| x.1 % 3 != 0));
            prop_assert!(l_yes.windows(2).all(|p| p[0].0 < p[1].0));
            prop_assert!(l_no.windows(2).all(|p| p[0].0 < p[1].0));
        }
    }
}
