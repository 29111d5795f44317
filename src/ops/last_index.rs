use crate::error::SeqError;

use super::len::Len;

pub trait LastIndex: Len {
    /// Position of the final element
    fn last_index(&self) -> Result<usize, SeqError> {
        self.len().checked_sub(1).ok_or(SeqError::EmptyCollection)
    }
}
impl<T: Len + ?Sized> LastIndex for T {}

#[cfg(test)]
mod tests {
    use std::collections::{LinkedList, VecDeque};

    use super::*;

    #[test]
    fn test_last_index() {
        let v = vec!['a', 'b', 'c'];
        let i = v.last_index().unwrap();
        assert_eq!(i, 2);
        assert_eq!(Some(&v[i]), v.iter().last());

        let q = VecDeque::from([7]);
        assert_eq!(q.last_index().unwrap(), 0);

        let l = LinkedList::from([1, 2]);
        assert_eq!(l.last_index().unwrap(), 1);

        let a = [0_u8; 5];
        assert_eq!(a.last_index().unwrap(), 4);
        assert_eq!(a[..3].last_index().unwrap(), 2);
    }

    #[test]
    fn test_last_index_empty() {
        let v: Vec<u8> = vec![];
        assert_eq!(v.last_index(), Err(SeqError::EmptyCollection));
        let s: &[u8] = &[];
        assert_eq!(s.last_index(), Err(SeqError::EmptyCollection));
    }
}
