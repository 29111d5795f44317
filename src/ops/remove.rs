use std::collections::{LinkedList, VecDeque};

/// In-place removal of every element equal to a given value
///
/// Survivors keep their relative order. Removal is a single compaction pass, so
/// adjacent or repeated matches are never skipped.
///
/// # Example
///
/// ```rust
/// use seq_tools::ops::remove::RemoveAll;
///
/// let mut v = vec![1, 2, 3, 2, 1];
/// assert_eq!(v.remove_all(&2), 2);
/// assert_eq!(v, [1, 3, 1]);
/// ```
pub trait RemoveAll<T: PartialEq> {
    /// Returns the number of removed elements
    fn remove_all(&mut self, element: &T) -> usize;
}

impl<T: PartialEq> RemoveAll<T> for Vec<T> {
    fn remove_all(&mut self, element: &T) -> usize {
        let before = self.len();
        self.retain(|x| x != element);
        before - self.len()
    }
}
impl<T: PartialEq> RemoveAll<T> for VecDeque<T> {
    fn remove_all(&mut self, element: &T) -> usize {
        let before = self.len();
        self.retain(|x| x != element);
        before - self.len()
    }
}
impl<T: PartialEq> RemoveAll<T> for LinkedList<T> {
    fn remove_all(&mut self, element: &T) -> usize {
        let before = self.len();
        let kept = core::mem::take(self);
        self.extend(kept.into_iter().filter(|x| x != element));
        before - self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_all() {
        let mut v = vec![1, 2, 3, 2, 1];
        assert_eq!(v.remove_all(&2), 2);
        assert_eq!(v, [1, 3, 1]);
        assert_eq!(v.remove_all(&4), 0);
        assert_eq!(v, [1, 3, 1]);
    }

    #[test]
    fn test_remove_all_adjacent() {
        let mut v = vec![2, 2, 2, 1, 2, 2];
        assert_eq!(v.remove_all(&2), 5);
        assert_eq!(v, [1]);
        assert_eq!(v.remove_all(&1), 1);
        assert!(v.is_empty());
    }

    #[test]
    fn test_remove_all_deque() {
        let mut q = VecDeque::from(["a", "b", "a", "c"]);
        q.push_front("a");
        assert_eq!(q.remove_all(&"a"), 3);
        assert_eq!(q, ["b", "c"]);
    }

    #[test]
    fn test_remove_all_linked_list() {
        let mut l = LinkedList::from([3, 3, 1, 3, 2]);
        assert_eq!(l.remove_all(&3), 3);
        assert!(l.iter().eq([1, 2].iter()));
    }
}
