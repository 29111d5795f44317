use crate::error::SeqError;

use super::list::List;

/// Elements at caller-given positions, in the order the positions are given
///
/// # Example
///
/// ```rust
/// use seq_tools::ops::scatter::Scatter;
///
/// let v = vec!["a", "b", "c"];
/// assert_eq!(v.scatter([2, 0, 1]).unwrap(), ["c", "a", "b"]);
/// assert!(v.scatter([3]).is_err());
/// ```
pub trait Scatter<T>: List<T> {
    /// Fails on the first position outside `0..len` without producing any output
    fn scatter_ref<'a>(
        &'a self,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<Vec<&'a T>, SeqError>
    where
        T: 'a,
    {
        let len = self.len();
        indices
            .into_iter()
            .map(|index| {
                if len <= index {
                    return Err(SeqError::OutOfBounds { index, len });
                }
                Ok(&self[index])
            })
            .collect()
    }

    fn scatter(&self, indices: impl IntoIterator<Item = usize>) -> Result<Vec<T>, SeqError>
    where
        T: Clone,
    {
        let picked = self.scatter_ref(indices)?;
        Ok(picked.into_iter().cloned().collect())
    }
}
impl<L, T> Scatter<T> for L where L: List<T> + ?Sized {}
