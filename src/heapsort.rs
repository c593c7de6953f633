//! In-place heapsort
//!
//! Heapsort runs in two phases over the same array:
//!
//! 1. Build a max-heap bottom-up with sift-down at every internal node,
//!    from the last parent back to the root. O(n) total.
//! 2. Repeatedly swap the root (current maximum) with the last element of
//!    the shrinking logical heap, then sift down from the root bounded by
//!    the reduced size. O(n log n) total.
//!
//! The result is ascending regardless of input order. The sort is in place
//! with O(1) auxiliary space, and it is NOT stable: equal keys may change
//! relative order.
//!
//! # Example
//!
//! ```rust
//! use array_heap::heapsort::heap_sort;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! heap_sort(&mut data);
//! assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
//! ```

use crate::binary::{sift_down, Order};

/// Sorts the slice ascending in place via build-max-heap + root extraction
///
/// Always O(n log n) time, O(1) extra space, independent of input order.
/// Uses a max ordering internally so each extracted root lands directly in
/// its final position at the back of the slice.
pub fn heap_sort(data: &mut [i64]) {
    let n = data.len();

    // Phase 1: max-heapify the whole slice bottom-up.
    for i in (0..n / 2).rev() {
        sift_down(data, n, i, Order::Max);
    }

    // Phase 2: the root is the maximum of data[..end + 1]; park it at
    // data[end] and repair the heap over the shrunk prefix.
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, end, 0, Order::Max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_example() {
        let mut data = vec![5, 3, 8, 1, 9, 2];
        heap_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i64> = Vec::new();
        heap_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        heap_sort(&mut single);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_already_sorted() {
        let mut data: Vec<i64> = (0..32).collect();
        heap_sort(&mut data);
        assert_eq!(data, (0..32).collect::<Vec<i64>>());
    }

    #[test]
    fn test_reverse_sorted() {
        let mut data: Vec<i64> = (0..32).rev().collect();
        heap_sort(&mut data);
        assert_eq!(data, (0..32).collect::<Vec<i64>>());
    }

    #[test]
    fn test_duplicates() {
        let mut data = vec![3, 1, 3, 1, 3, 1, 2, 2];
        heap_sort(&mut data);
        assert_eq!(data, vec![1, 1, 1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_permutation_of_input() {
        let original = vec![7, -2, 0, 7, 13, -2, 5];
        let mut data = original.clone();
        heap_sort(&mut data);

        assert_eq!(data.len(), original.len());
        let mut expected = original;
        expected.sort_unstable();
        assert_eq!(data, expected);
    }

    #[test]
    fn test_negative_and_extreme_keys() {
        let mut data = vec![i64::MAX, -1, i64::MIN, 0, 1];
        heap_sort(&mut data);
        assert_eq!(data, vec![i64::MIN, -1, 0, 1, i64::MAX]);
    }
}
