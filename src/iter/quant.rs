/// Short-circuiting quantifiers over a sequence
///
/// The `_match` suffix keeps them apart from [`Iterator::any`] and [`Iterator::all`].
///
/// # Example
///
/// ```rust
/// use seq_tools::iter::quant::Quantifier;
///
/// let v = [1, 3, 5];
/// assert!(v.iter().all_match(|x| x % 2 == 1));
/// assert!(v.iter().none_match(|x| *x > 5));
/// assert!(!core::iter::empty::<i32>().any_match(|_| true));
/// ```
pub trait Quantifier: Iterator + Sized {
    /// `false` on an empty sequence
    fn any_match(self, mut predicate: impl FnMut(Self::Item) -> bool) -> bool {
        for item in self {
            if predicate(item) {
                return true;
            }
        }
        false
    }
    /// `true` on an empty sequence
    fn all_match(self, mut predicate: impl FnMut(Self::Item) -> bool) -> bool {
        for item in self {
            if !predicate(item) {
                return false;
            }
        }
        true
    }
    /// `true` on an empty sequence
    fn none_match(self, predicate: impl FnMut(Self::Item) -> bool) -> bool {
        !self.any_match(predicate)
    }
}
impl<I: Iterator> Quantifier for I {}
