//! Array-backed binary heap
//!
//! The heap is a complete binary tree stored compactly in a `Vec<i64>`,
//! using the classic 0-based index arithmetic:
//!
//! - `parent(i) = (i - 1) / 2`
//! - `left(i) = 2 * i + 1`
//! - `right(i) = 2 * i + 2`
//!
//! The ordering direction is chosen at construction via [`Order`] and fixed
//! for the lifetime of the heap: a [`Order::Min`] heap pops the smallest key
//! first, a [`Order::Max`] heap the largest.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `push`           | O(log n)   |
//! | `pop`            | O(log n)   |
//! | `peek`           | O(1)       |
//! | `from_unordered` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use array_heap::{ArrayHeap, Order};
//!
//! let mut heap = ArrayHeap::with_capacity(4, Order::Min);
//! for value in [10, 15, 20, 25, 30, 35, 18] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.peek(), Some(10));
//! assert_eq!(heap.pop(), Some(10));
//! assert_eq!(heap.pop(), Some(15));
//! assert_eq!(heap.pop(), Some(18));
//! ```

/// Ordering direction of a heap, fixed at construction
///
/// Determines which parent/child relation the heap maintains: in a `Min`
/// heap every parent is ≤ its children and `pop` returns the smallest key;
/// in a `Max` heap every parent is ≥ its children and `pop` returns the
/// largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Smallest key at the root
    Min,
    /// Largest key at the root
    Max,
}

impl Order {
    /// Returns true if `a` must sort strictly before `b` under this order
    ///
    /// Equal keys never sort before each other, so swaps only happen on
    /// actual violations and duplicate keys settle in arbitrary relative
    /// positions.
    #[inline]
    fn sorts_before(self, a: i64, b: i64) -> bool {
        match self {
            Order::Min => a < b,
            Order::Max => a > b,
        }
    }
}

/// Restore the heap property at `i`, treating only `data[..size]` as live.
///
/// Walks toward the leaves: at each step the winning child (smaller for Min,
/// larger for Max) is chosen among children with index `< size`, and swapped
/// upward if it sorts before the current element. The explicit `size` bound
/// lets heapsort shrink the logical heap without touching the slice length.
pub(crate) fn sift_down(data: &mut [i64], size: usize, mut i: usize, order: Order) {
    loop {
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        let mut winner = i;

        if left < size && order.sorts_before(data[left], data[winner]) {
            winner = left;
        }
        if right < size && order.sorts_before(data[right], data[winner]) {
            winner = right;
        }

        if winner == i {
            break;
        }
        data.swap(i, winner);
        i = winner;
    }
}

/// An array-backed binary heap over `i64` keys
///
/// The backing `Vec` grows by amortized doubling on `push`, so a heap
/// created with any initial capacity (including zero) absorbs an unbounded
/// number of inserts. It never shrinks automatically.
///
/// The heap property holds over the whole backing array whenever control is
/// outside a method call; [`as_slice`](ArrayHeap::as_slice) exposes the
/// array for inspection.
#[derive(Debug, Clone)]
pub struct ArrayHeap {
    /// Backing storage; the logical heap is the entire vector
    data: Vec<i64>,
    order: Order,
}

impl ArrayHeap {
    /// Creates an empty heap with the given ordering direction
    pub fn new(order: Order) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap with at least `capacity` preallocated slots
    ///
    /// A capacity of zero is legal and equivalent to [`ArrayHeap::new`].
    pub fn with_capacity(capacity: usize, order: Order) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Builds a heap from an arbitrary unordered vector in O(n)
    ///
    /// Heapifies bottom-up: sift-down at every internal node from
    /// `len / 2 - 1` back to the root. This is asymptotically cheaper than
    /// pushing the elements one at a time, which costs O(n log n).
    ///
    /// # Example
    ///
    /// ```rust
    /// use array_heap::{ArrayHeap, Order};
    ///
    /// let mut heap = ArrayHeap::from_unordered(vec![9, 2, 7, 4], Order::Min);
    /// assert_eq!(heap.pop(), Some(2));
    /// assert_eq!(heap.pop(), Some(4));
    /// ```
    pub fn from_unordered(values: Vec<i64>, order: Order) -> Self {
        let mut heap = Self {
            data: values,
            order,
        };
        let size = heap.data.len();
        // Leaves are one-element heaps already; start at the last parent.
        for i in (0..size / 2).rev() {
            sift_down(&mut heap.data, size, i, heap.order);
        }
        heap
    }

    /// Returns the ordering direction fixed at construction
    pub fn order(&self) -> Order {
        self.order
    }

    /// Returns true if the heap contains no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of elements the backing array can hold without
    /// reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the backing array in heap order
    ///
    /// The root is at index 0; for every index `i > 0` the element at
    /// `(i - 1) / 2` sorts no later than the element at `i`.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Inserts a key into the heap
    ///
    /// Appends at the end of the array, then sifts up until the new element
    /// no longer sorts before its parent. Grows the backing array if full,
    /// which invalidates nothing observable but may move the storage.
    ///
    /// # Time Complexity
    /// O(log n), amortized O(1) for the append itself.
    pub fn push(&mut self, value: i64) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the root key without removing it, or `None` if empty
    ///
    /// # Time Complexity
    /// O(1)
    pub fn peek(&self) -> Option<i64> {
        self.data.first().copied()
    }

    /// Removes and returns the root key, or `None` if empty
    ///
    /// The last element moves into the root slot and sifts down until the
    /// heap property is restored over the remaining elements.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<i64> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let root = self.data.pop();

        if !self.data.is_empty() {
            let size = self.data.len();
            sift_down(&mut self.data, size, 0, self.order);
        }

        root
    }

    /// Move element at `i` toward the root to maintain the heap property
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.order.sorts_before(self.data[i], self.data[parent]) {
                self.data.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }
}
