//! Growable array list and circular doubly linked list behind a shared list contract.
//!
//! # Containers
//! - [`DynamicArray`]: index-addressable sequence backed by a contiguous buffer that doubles its
//!   capacity on overflow and never shrinks.
//! - [`CircularList`]: node-based sequence kept as a circular ring (the tail's successor is the
//!   head) whose nodes live in an index arena. Values are appended at the front and removed from
//!   the tail.
//!
//! # Contract
//! Both containers implement [`List`] and [`MutableList`]. Only array-backed stores implement
//! [`Capacity`]; a node-based list has no capacity to manage so the facet is simply absent.
//!
//! The contract is also implemented for [`Vec`] and, behind the features of the same name, for
//! `arrayvec::ArrayVec` and `smallvec::SmallVec`.
//!
//! ```
//! use seq_collections::{CircularList, DynamicArray, List, MutableList};
//!
//! fn fill<L: MutableList<&'static str>>(list: &mut L) {
//!     for word in ["a", "b", "c"] {
//!         list.append(word);
//!     }
//! }
//!
//! let mut array = DynamicArray::new();
//! fill(&mut array);
//! assert_eq!(array.index_of(&"c"), Some(2));
//!
//! let mut ring = CircularList::new();
//! fill(&mut ring);
//! assert_eq!(List::index_of(&ring, &"c"), Some(0));
//! ```
//!
//! # Crate Features
//! All features are enabled by default.
//! - `arrayvec`: contract implementation for `arrayvec::ArrayVec`
//! - `smallvec`: contract implementation for `smallvec::SmallVec`

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "arrayvec")]
mod arrayvec;
mod circular;
mod dynamic_array;
mod error;
mod kind;
#[cfg(feature = "smallvec")]
mod smallvec;
mod vec;

pub use self::{
    circular::{CircularList, NodeId},
    dynamic_array::{DynamicArray, DEFAULT_CAPACITY},
    error::Error,
    kind::{Kind, Kinded, Typed, Value},
};

/// Iterators over list contents.
pub mod iter {
    pub use crate::{
        circular::{IntoIter as CircularIntoIter, Iter as CircularIter, IterRev as CircularIterRev},
        dynamic_array::{IntoIter as ArrayIntoIter, Iter as ArrayIter},
    };
}

/// Read-only facet of an ordered sequence.
pub trait List<T> {
    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns true if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at position `idx`, or `None` when out of range.
    fn get(&self, idx: usize) -> Option<&T>;

    /// Returns the position of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.len()).find(|&idx| self.get(idx) == Some(value))
    }

    /// Returns true if any element is equal to `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }
}

/// Mutation facet of an ordered sequence.
pub trait MutableList<T>: List<T> {
    /// Adds an element at the list's natural insertion point.
    ///
    /// Array-backed lists insert at the end; [`CircularList`] inserts at the front.
    fn append(&mut self, element: T);

    /// Returns a mutable reference to the element at position `idx`, or `None` when out of range.
    fn get_mut(&mut self, idx: usize) -> Option<&mut T>;

    /// Removes every element.
    fn clear(&mut self);
}

/// Capacity-management facet of an array-backed sequence.
pub trait Capacity<T>: List<T> {
    /// Returns the number of allocated slots.
    fn capacity(&self) -> usize;

    /// Returns true if the next insertion would need more slots.
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_to_vec<L: List<u32>>(list: &L) -> Vec<u32> {
        (0..list.len()).filter_map(|idx| list.get(idx)).copied().collect()
    }

    #[test]
    fn contract_default_methods() {
        let mut array = DynamicArray::with_capacity(2);
        MutableList::append(&mut array, 4);
        MutableList::append(&mut array, 5);

        assert!(!List::is_empty(&array));
        assert!(Capacity::is_full(&array));
        assert_eq!(List::index_of(&array, &5), Some(1));
        assert!(!List::contains(&array, &6));
        assert_eq!(drain_to_vec(&array), [4, 5]);

        let mut ring = CircularList::new();
        MutableList::append(&mut ring, 4);
        MutableList::append(&mut ring, 5);
        assert_eq!(drain_to_vec(&ring), [5, 4]);

        MutableList::clear(&mut ring);
        assert!(List::is_empty(&ring));
    }
}
