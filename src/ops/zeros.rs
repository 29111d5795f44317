use std::collections::{LinkedList, VecDeque};

use num_traits::Zero;

use crate::error::SeqError;

/// Containers that can be built from `count` copies of zero
///
/// # Example
///
/// ```rust
/// use seq_tools::ops::zeros::Zeros;
///
/// let v: Vec<f64> = Zeros::zeros(3);
/// assert_eq!(v, [0., 0., 0.]);
/// assert!(Vec::<u8>::try_zeros(-1).is_err());
/// ```
pub trait Zeros: Sized {
    #[must_use]
    fn zeros(count: usize) -> Self;

    /// Negative `count` is rejected instead of clamped
    fn try_zeros(count: isize) -> Result<Self, SeqError> {
        let Ok(len) = usize::try_from(count) else {
            return Err(SeqError::InvalidArgument { count });
        };
        Ok(Self::zeros(len))
    }
}

macro_rules! impl_zeros {
    ($container: ident) => {
        impl<T> Zeros for $container<T>
        where
            T: Zero + Clone,
        {
            fn zeros(count: usize) -> Self {
                core::iter::repeat_n(T::zero(), count).collect()
            }
        }
    };
}
impl_zeros!(Vec);
impl_zeros!(VecDeque);
impl_zeros!(LinkedList);

impl<T> Zeros for Box<[T]>
where
    T: Zero + Clone,
{
    fn zeros(count: usize) -> Self {
        core::iter::repeat_n(T::zero(), count).collect()
    }
}
