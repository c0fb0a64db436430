use std::num::NonZeroU64;

use crate::heap::BinaryHeap;

mod sealed {
    pub trait Sealed {}
}

/// Integer types a [`MedianFinder`] accepts. Limited to at most 64 bits so
/// the `i128` median sum has room to grow.
///
/// ```compile_fail
/// use heap_median::MedianFinder;
///
/// let _finder: MedianFinder<i128> = MedianFinder::new();
/// ```
pub trait MedianValue: Ord + Copy + sealed::Sealed {
    fn widen(self) -> i128;
}

macro_rules! impl_median_value {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl MedianValue for $ty {
            #[inline]
            fn widen(self) -> i128 {
                self as i128
            }
        }
    )*};
}

impl_median_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Running median over a stream of integers.
///
/// The lower half of the stream sits in a max-heap and the upper half in a
/// min-heap. Sizes never differ by more than one, and when they are equal
/// the lower root is reported, so the median of an even-length stream is
/// the lower of the two middle values.
///
/// Every reported median is added into an `i128` accumulator. Values are at
/// most 64 bits wide, so the sum cannot overflow before 2^63 insertions.
#[derive(Debug, Clone)]
pub struct MedianFinder<T = i64> {
    lower: BinaryHeap<T>, // Max-heap for the lower half
    upper: BinaryHeap<T>, // Min-heap for the upper half
    median: Option<T>,
    median_sum: i128,
}

impl<T> MedianFinder<T>
where
    T: MedianValue,
{
    pub fn new() -> Self {
        Self {
            lower: BinaryHeap::max(),
            upper: BinaryHeap::min(),
            median: None,
            median_sum: 0,
        }
    }

    /// Adds one stream element and folds the resulting median into the sum.
    pub fn insert(&mut self, value: T) {
        if self.lower.peek().map_or(true, |top| value <= *top) {
            self.lower.insert(value);
        } else {
            self.upper.insert(value);
        }

        self.rebalance();

        let median = if self.lower.len() >= self.upper.len() {
            self.lower.peek()
        } else {
            self.upper.peek()
        };
        // At least one value has been inserted, so one of the halves is non-empty.
        if let Some(&median) = median {
            self.median = Some(median);
            self.median_sum += median.widen();
        }
    }

    // A single insertion moves one size by one, so one transfer is enough.
    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(top) = self.lower.extract() {
                self.upper.insert(top);
                tracing::trace!(
                    lower = self.lower.len(),
                    upper = self.upper.len(),
                    "moved lower root to upper half"
                );
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(top) = self.upper.extract() {
                self.lower.insert(top);
                tracing::trace!(
                    lower = self.lower.len(),
                    upper = self.upper.len(),
                    "moved upper root to lower half"
                );
            }
        }
    }

    /// Median after the most recent insertion, `None` before the first one.
    pub fn current_median(&self) -> Option<T> {
        self.median
    }

    pub fn median_sum(&self) -> i128 {
        self.median_sum
    }

    /// Sum of all medians reduced into `[0, modulus)`.
    pub fn sum_modulo(&self, modulus: NonZeroU64) -> u64 {
        // rem_euclid keeps the result non-negative and below `modulus`.
        self.median_sum.rem_euclid(i128::from(modulus.get())) as u64
    }

    /// Number of values inserted so far.
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.median.is_none()
    }
}

impl<T> Default for MedianFinder<T>
where
    T: MedianValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for MedianFinder<T>
where
    T: MedianValue,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
