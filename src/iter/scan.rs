/// Inclusive running fold: the `i`-th output is `combine` applied to the `(i - 1)`-th
/// output (or `initial`) and the `i`-th input
///
/// # Example
///
/// ```rust
/// use seq_tools::iter::scan::Scan;
///
/// let sums = [1, 2, 3, 4].into_iter().prefix_scan(0, |acc, x| acc + x);
/// assert_eq!(sums.collect::<Vec<_>>(), [1, 3, 6, 10]);
/// ```
#[derive(Debug, Clone)]
pub struct PrefixScan<I, U, F> {
    iter: I,
    acc: U,
    combine: F,
}
impl<I, U, F> PrefixScan<I, U, F> {
    #[must_use]
    pub const fn new(iter: I, initial: U, combine: F) -> Self {
        Self {
            iter,
            acc: initial,
            combine,
        }
    }
}
impl<I, U, F> Iterator for PrefixScan<I, U, F>
where
    I: Iterator,
    U: Clone,
    F: FnMut(&U, I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        self.acc = (self.combine)(&self.acc, item);
        Some(self.acc.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// [`PrefixScan`] with a fallible `combine`
///
/// Yields the first error and then nothing; `combine` is never called again.
#[derive(Debug, Clone)]
pub struct TryPrefixScan<I, U, F> {
    iter: I,
    acc: U,
    combine: F,
    failed: bool,
}
impl<I, U, F> TryPrefixScan<I, U, F> {
    #[must_use]
    pub const fn new(iter: I, initial: U, combine: F) -> Self {
        Self {
            iter,
            acc: initial,
            combine,
            failed: false,
        }
    }
}
impl<I, U, E, F> Iterator for TryPrefixScan<I, U, F>
where
    I: Iterator,
    U: Clone,
    F: FnMut(&U, I::Item) -> Result<U, E>,
{
    type Item = Result<U, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.iter.next()?;
        match (self.combine)(&self.acc, item) {
            Ok(acc) => {
                self.acc = acc;
                Some(Ok(self.acc.clone()))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

pub trait Scan: Iterator + Sized {
    fn prefix_scan<U, F>(self, initial: U, combine: F) -> PrefixScan<Self, U, F>
    where
        F: FnMut(&U, Self::Item) -> U,
    {
        PrefixScan::new(self, initial, combine)
    }
    fn try_prefix_scan_iter<U, E, F>(self, initial: U, combine: F) -> TryPrefixScan<Self, U, F>
    where
        F: FnMut(&U, Self::Item) -> Result<U, E>,
    {
        TryPrefixScan::new(self, initial, combine)
    }
    /// The error from `combine` is returned unchanged and no partial output escapes.
    fn try_prefix_scan<U, E, F>(self, initial: U, combine: F) -> Result<Vec<U>, E>
    where
        U: Clone,
        F: FnMut(&U, Self::Item) -> Result<U, E>,
    {
        self.try_prefix_scan_iter(initial, combine).collect()
    }
}
impl<I: Iterator> Scan for I {}
