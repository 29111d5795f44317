use std::collections::{LinkedList, VecDeque};

#[allow(clippy::len_without_is_empty)]
pub trait Len {
    #[must_use]
    fn len(&self) -> usize;
}
pub trait LenExt: Len {
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
impl<T: Len + ?Sized> LenExt for T {}

impl<T> Len for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }
}
impl<T> Len for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
}
impl<T> Len for LinkedList<T> {
    fn len(&self) -> usize {
        self.len()
    }
}
impl<T> Len for [T] {
    fn len(&self) -> usize {
        self.len()
    }
}
impl<T, const N: usize> Len for [T; N] {
    fn len(&self) -> usize {
        N
    }
}
impl<T> Len for Box<[T]> {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}
