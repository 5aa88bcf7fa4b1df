// src/heap/max_heap.rs
//! Array-backed binary max-heap of `i64`.
//!
//! Uses the 1-based layout: slot 0 of the backing vector is a fixed
//! placeholder, the root lives at index 1, and the children of `i` are
//! `2i` and `2i + 1`.

use crate::error::{CollectionError, Result};
use zeroize::Zeroize;

/// Index of the root slot.
const ROOT: usize = 1;

/// A max-priority heap of integers.
///
/// The backing memory is securely zeroed on drop.
///
/// # Examples
///
/// ```
/// use seccollections::prelude::*;
///
/// let mut heap = MaxHeap::new();
/// for value in [5, 10, 20, 7] {
///     heap.insert(value);
/// }
///
/// assert_eq!(heap.peek()?, 20);
/// assert_eq!(heap.delete()?, 20);
/// assert_eq!(heap.delete()?, 10);
/// # Ok::<(), CollectionError>(())
/// ```
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct MaxHeap {
    /// Backing storage, `data[0]` is the placeholder
    data: Vec<i64>,
    /// Number of elements, excluding the placeholder
    size: usize,
}

impl MaxHeap {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            data: vec![0],
            size: 0,
        }
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the heap holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the backing slice, placeholder slot included.
    ///
    /// # Examples
    ///
    /// ```
    /// use seccollections::MaxHeap;
    ///
    /// let mut heap = MaxHeap::new();
    /// heap.insert(5);
    /// heap.insert(10);
    /// assert_eq!(heap.as_slice(), &[0, 10, 5]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Returns the largest element without removing it.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::HeapEmpty` if the heap is empty.
    pub fn peek(&self) -> Result<i64> {
        if self.size == 0 {
            return Err(CollectionError::HeapEmpty);
        }
        Ok(self.data[ROOT])
    }

    /// Adds an element, restoring heap order by sifting it up.
    pub fn insert(&mut self, value: i64) {
        self.data.push(value);
        self.size += 1;
        self.sift_up(self.size);
    }

    /// Removes and returns the largest element.
    ///
    /// The last element takes the root slot and is sifted down.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::HeapEmpty` if the heap is empty.
    pub fn delete(&mut self) -> Result<i64> {
        if self.size == 0 {
            return Err(CollectionError::HeapEmpty);
        }

        let max = self.data.swap_remove(ROOT);
        self.size -= 1;
        self.sift_down(ROOT);
        Ok(max)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.truncate(ROOT);
        self.size = 0;
    }

    /// Securely zeroes the backing memory, then clears the heap.
    pub fn burn(&mut self) {
        self.data.zeroize();
        self.data.push(0);
        self.size = 0;
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > ROOT {
            let parent = child / 2;
            if self.data[child] <= self.data[parent] {
                break;
            }
            self.data.swap(child, parent);
            child = parent;
        }
    }

    // On equal children the left one wins.
    fn sift_down(&mut self, mut parent: usize) {
        loop {
            let left = parent * 2;
            if left > self.size {
                break;
            }

            let right = left + 1;
            let larger = if right <= self.size && self.data[right] > self.data[left] {
                right
            } else {
                left
            };

            if self.data[larger] <= self.data[parent] {
                break;
            }
            self.data.swap(parent, larger);
            parent = larger;
        }
    }
}

impl Default for MaxHeap {
    fn default() -> Self {
        Self::new()
    }
}
