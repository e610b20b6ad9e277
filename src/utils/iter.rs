//! Iterator utilities.
use std::cmp::Ordering;

/// The index of a maximal element in a collection, according to a comparison function.
///
/// # Example
/// Get the argmax of an iterator of floats and panic if any are NaN:
///
/// ```
/// use bandit_regret::utils::iter::ArgMaxBy;
///
/// let v = vec![1.0, 2.5, -3.0, 2.5];
/// let argmax = v.into_iter().argmax_by(|a, b| a.partial_cmp(b).unwrap());
/// assert_eq!(argmax, Some(1));
/// ```
pub trait ArgMaxBy {
    type Item;

    /// The index of an element that gives the maximum value from the specified function.
    ///
    /// If several elements are equally maximum, the first index is returned.
    /// If the iterator is empty, None is returned.
    fn argmax_by<F>(self, compare: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering;
}

impl<I: Iterator> ArgMaxBy for I {
    type Item = <Self as Iterator>::Item;

    fn argmax_by<F>(self, mut compare: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        // Iterator::max_by keeps the last of equal elements so fold manually
        self.enumerate()
            .fold(None, |best: Option<(usize, Self::Item)>, (i, x)| match best {
                Some((j, y)) if compare(&x, &y) != Ordering::Greater => Some((j, y)),
                _ => Some((i, x)),
            })
            .map(|(i, _)| i)
    }
}

/// Index of the largest float, taking the first of any ties.
///
/// # Panics
/// If any pair of compared values is incomparable (NaN).
pub fn argmax_f64<I: IntoIterator<Item = f64>>(values: I) -> Option<usize> {
    values
        .into_iter()
        .argmax_by(|a, b| a.partial_cmp(b).expect("NaN in argmax"))
}
