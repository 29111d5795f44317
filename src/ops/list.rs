use core::ops::{Index, IndexMut};
use std::collections::VecDeque;

use super::len::Len;

/// Positional access by `usize` over `0..len`
pub trait List<T>: Index<usize, Output = T> + Len {}
pub trait ListMut<T>: List<T> + IndexMut<usize, Output = T> {}

impl<T> List<T> for Vec<T> {}
impl<T> ListMut<T> for Vec<T> {}
impl<T> List<T> for VecDeque<T> {}
impl<T> ListMut<T> for VecDeque<T> {}
impl<T> List<T> for [T] {}
impl<T> ListMut<T> for [T] {}
impl<T, const N: usize> List<T> for [T; N] {}
impl<T, const N: usize> ListMut<T> for [T; N] {}
