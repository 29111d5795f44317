use rand::Rng;

use crate::{
    error::SeqError,
    ops::list::{List, ListMut},
};

/// Uniform random position and element access
///
/// The random source is always supplied by the caller: a seeded generator for
/// reproducible runs, or [`rand::rng`] whose state is thread-local.
///
/// # Example
///
/// ```rust
/// use rand::{SeedableRng, rngs::StdRng};
/// use seq_tools::random::RandomIndex;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let v = vec!['a', 'b', 'c'];
/// assert!(v.random_index(&mut rng).unwrap() < v.len());
/// assert!(v.random(&mut rng).is_some());
/// assert!(Vec::<char>::new().random(&mut rng).is_none());
/// ```
pub trait RandomIndex<T>: List<T> {
    /// Drawn from `0..len` without modulo bias
    fn random_index<R: Rng>(&self, rng: &mut R) -> Result<usize, SeqError> {
        let len = self.len();
        if len == 0 {
            return Err(SeqError::EmptyCollection);
        }
        Ok(rng.random_range(0..len))
    }

    #[must_use]
    fn random<'a, R: Rng>(&'a self, rng: &mut R) -> Option<&'a T>
    where
        T: 'a,
    {
        let index = self.random_index(rng).ok()?;
        Some(&self[index])
    }
}
impl<L, T> RandomIndex<T> for L where L: List<T> + ?Sized {}

pub trait RandomIndexMut<T>: ListMut<T> + RandomIndex<T> {
    #[must_use]
    fn random_mut<'a, R: Rng>(&'a mut self, rng: &mut R) -> Option<&'a mut T>
    where
        T: 'a,
    {
        let index = self.random_index(rng).ok()?;
        Some(&mut self[index])
    }
}
impl<L, T> RandomIndexMut<T> for L where L: ListMut<T> + ?Sized {}
