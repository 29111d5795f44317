use core::hash::{BuildHasher, Hash};
use std::collections::{HashSet, hash_map::RandomState};

/// Yields the first occurrence of each distinct value, in input order
#[derive(Debug, Clone)]
pub struct Unique<I: Iterator, S = RandomState> {
    iter: I,
    seen: HashSet<I::Item, S>,
}
impl<I: Iterator, S> Unique<I, S> {
    #[must_use]
    pub fn with_hasher(iter: I, hasher: S) -> Self {
        Self {
            iter,
            seen: HashSet::with_hasher(hasher),
        }
    }
}
impl<I, S> Iterator for Unique<I, S>
where
    I: Iterator,
    I::Item: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let seen = &mut self.seen;
        self.iter.find(|item| first_sight(seen, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// Yields every occurrence after the first of each value, in input order
#[derive(Debug, Clone)]
pub struct Duplicates<I: Iterator, S = RandomState> {
    iter: I,
    seen: HashSet<I::Item, S>,
}
impl<I: Iterator, S> Duplicates<I, S> {
    #[must_use]
    pub fn with_hasher(iter: I, hasher: S) -> Self {
        Self {
            iter,
            seen: HashSet::with_hasher(hasher),
        }
    }
}
impl<I, S> Iterator for Duplicates<I, S>
where
    I: Iterator,
    I::Item: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let seen = &mut self.seen;
        self.iter.find(|item| !first_sight(seen, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// Only clones on the first sight of a value
fn first_sight<T, S>(seen: &mut HashSet<T, S>, item: &T) -> bool
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    if seen.contains(item) {
        return false;
    }
    seen.insert(item.clone());
    true
}

/// # Example
///
/// ```rust
/// use seq_tools::iter::unique::UniqueExt;
///
/// let v = [1, 2, 2, 3, 1];
/// assert_eq!(v.iter().unique().collect::<Vec<_>>(), [&1, &2, &3]);
/// assert_eq!(v.iter().duplicates().collect::<Vec<_>>(), [&2, &1]);
/// ```
pub trait UniqueExt: Iterator + Sized {
    fn unique(self) -> Unique<Self>
    where
        Self::Item: Hash + Eq + Clone,
    {
        Unique::with_hasher(self, RandomState::new())
    }
    fn unique_with_hasher<S>(self, hasher: S) -> Unique<Self, S>
    where
        Self::Item: Hash + Eq + Clone,
        S: BuildHasher,
    {
        Unique::with_hasher(self, hasher)
    }
    fn duplicates(self) -> Duplicates<Self>
    where
        Self::Item: Hash + Eq + Clone,
    {
        Duplicates::with_hasher(self, RandomState::new())
    }
    fn duplicates_with_hasher<S>(self, hasher: S) -> Duplicates<Self, S>
    where
        Self::Item: Hash + Eq + Clone,
        S: BuildHasher,
    {
        Duplicates::with_hasher(self, hasher)
    }
    /// `(unique, duplicates)` in one pass
    fn partition_unique(self) -> (Vec<Self::Item>, Vec<Self::Item>)
    where
        Self::Item: Hash + Eq + Clone,
    {
        let mut seen = HashSet::new();
        let mut unique = vec![];
        let mut duplicates = vec![];
        for item in self {
            if first_sight(&mut seen, &item) {
                unique.push(item);
            } else {
                duplicates.push(item);
            }
        }
        (unique, duplicates)
    }
}
impl<I: Iterator> UniqueExt for I {}

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_unique() {
        let v = [1, 2, 2, 3, 1];
        assert_eq!(v.into_iter().unique().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(v.into_iter().duplicates().collect::<Vec<_>>(), [2, 1]);
    }

    #[test]
    fn test_unique_repeats() {
        let v = ["x", "x", "x", "y", "x"];
        assert_eq!(v.into_iter().unique().collect::<Vec<_>>(), ["x", "y"]);
        assert_eq!(
            v.into_iter().duplicates().collect::<Vec<_>>(),
            ["x", "x", "x"]
        );
    }

    #[test]
    fn test_unique_with_hasher() {
        let v = vec![String::from("a"), String::from("b"), String::from("a")];
        let unique = v
            .iter()
            .unique_with_hasher(ahash::RandomState::new())
            .collect::<Vec<_>>();
        assert_eq!(unique, [&v[0], &v[1]]);
        let duplicates = v
            .iter()
            .duplicates_with_hasher(ahash::RandomState::new())
            .collect::<Vec<_>>();
        assert_eq!(duplicates, [&v[2]]);
    }

    #[test]
    fn test_partition_unique() {
        let (unique, duplicates) = [1, 2, 2, 3, 1].into_iter().partition_unique();
        assert_eq!(unique, [1, 2, 3]);
        assert_eq!(duplicates, [2, 1]);
    }

    proptest! {
        #[test]
        fn matches_index_set(values: Vec<u8>) {
            let unique = values.iter().copied().unique().collect::<Vec<_>>();
            let oracle = values.iter().copied().collect::<IndexSet<_>>();
            prop_assert!(unique.iter().eq(oracle.iter()));
        }

        #[test]
        fn partitions_input(values: Vec<u8>) {
            let unique = values.iter().copied().unique().collect::<Vec<_>>();
            let duplicates = values.iter().copied().duplicates().collect::<Vec<_>>();
            prop_assert_eq!(unique.len() + duplicates.len(), values.len());
            let mut merged = [unique.clone(), duplicates.clone()].concat();
            let mut sorted = values.clone();
            merged.sort_unstable();
            sorted.sort_unstable();
            prop_assert_eq!(merged, sorted);
            prop_assert_eq!(values.into_iter().partition_unique(), (unique, duplicates));
        }
    }
}
