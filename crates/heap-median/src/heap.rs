/// Direction of a [`BinaryHeap`], fixed when the heap is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapMode {
    /// Smallest value at the root.
    Min,
    /// Largest value at the root.
    Max,
}

impl HeapMode {
    /// Whether `a` belongs strictly above `b` under this mode.
    #[inline]
    fn prefers<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            HeapMode::Min => a < b,
            HeapMode::Max => a > b,
        }
    }
}

/// Array-backed binary heap. Index 0 is the root, children of `i` live at
/// `2i + 1` and `2i + 2`.
///
/// Every parent is ordered before its children according to [`HeapMode`]
/// once a public method returns.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T> {
    storage: Vec<T>,
    mode: HeapMode,
}

impl<T: Ord> BinaryHeap<T> {
    pub fn new(mode: HeapMode) -> Self {
        Self {
            storage: Vec::new(),
            mode,
        }
    }

    pub fn with_capacity(mode: HeapMode, capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            mode,
        }
    }

    pub fn min() -> Self {
        Self::new(HeapMode::Min)
    }

    pub fn max() -> Self {
        Self::new(HeapMode::Max)
    }

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Appends `value` as the last leaf and bubbles it up. O(log n).
    pub fn insert(&mut self, value: T) {
        self.storage.push(value);
        self.bubble_up(self.storage.len() - 1);
    }

    /// The root without removing it, or `None` when the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Removes and returns the root. The last leaf takes its place and is
    /// bubbled down. An empty heap is left untouched and yields `None`.
    pub fn extract(&mut self) -> Option<T> {
        if self.storage.is_empty() {
            return None;
        }

        let root = self.storage.swap_remove(0);
        if !self.storage.is_empty() {
            self.bubble_down(0);
        }
        Some(root)
    }

    /// Drains the heap in extraction order: ascending for `Min`,
    /// descending for `Max`.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.extract() {
            sorted.push(value);
        }
        sorted
    }

    fn bubble_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.mode.prefers(&self.storage[idx], &self.storage[parent]) {
                self.storage.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn bubble_down(&mut self, mut idx: usize) {
        let len = self.storage.len();
        loop {
            let (left, right) = (2 * idx + 1, 2 * idx + 2);
            let mut top = idx;

            if left < len && self.mode.prefers(&self.storage[left], &self.storage[top]) {
                top = left;
            }
            if right < len && self.mode.prefers(&self.storage[right], &self.storage[top]) {
                top = right;
            }

            if top == idx {
                break;
            }
            self.storage.swap(idx, top);
            idx = top;
        }
    }
}

impl<T: Ord> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(test)]
pub(crate) fn holds_invariant<T: Ord>(heap: &BinaryHeap<T>) -> bool {
    let storage = &heap.storage;
    (1..storage.len()).all(|child| {
        let parent = (child - 1) / 2;
        !heap.mode.prefers(&storage[child], &storage[parent])
    })
}
