//! Growable array-backed list.
//!
//! See [`DynamicArray`] docs.

use std::{cmp::Ordering, fmt, io, iter::FusedIterator, mem, slice, vec};

use crate::{Capacity, Error, Kinded, List, MutableList, Typed};

const TARGET: &str = module_path!();

/// Capacity used by [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// An index-addressable list backed by a contiguous buffer.
///
/// Capacity doubles exactly when an element is inserted while the buffer is full. It never grows
/// ahead of time and never shrinks, not even on [`clear`](Self::clear).
///
/// Slots past the live prefix hold no value; removing an element drops the list's ownership of it
/// straight away.
///
/// # Examples
/// ```
/// use seq_collections::DynamicArray;
///
/// let mut list = DynamicArray::new();
/// list.append("a");
/// list.append("b");
/// list.append("c");
/// assert_eq!(list.get(1), Ok(&"b"));
///
/// assert_eq!(list.remove_at(0), Ok("a"));
/// assert_eq!(list.index_of(&"c"), Some(1));
///
/// list.reverse();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["c", "b"]);
/// ```
pub struct DynamicArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Constructs an empty list with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs an empty list with `capacity` slots.
    ///
    /// A zero-capacity list grows to one slot on its first insertion.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
        }
    }

    /// Returns the number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Doubles the capacity if the list is full; otherwise does nothing.
    pub fn ensure_capacity(&mut self) {
        if !self.is_full() {
            return;
        }

        let old_capacity = self.capacity();
        let new_capacity = (old_capacity * 2).max(1);

        let mut slots = mem::take(&mut self.slots).into_vec();
        slots.resize_with(new_capacity, || None);
        self.slots = slots.into_boxed_slice();

        tracing::trace!(
            target: TARGET,
            "grew capacity from {old_capacity} to {new_capacity} slots"
        );
    }

    /// Adds `value` after the last element.
    pub fn append(&mut self, value: T) {
        self.ensure_capacity();
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Inserts `value` at position `pos`, shifting later elements one slot to the right.
    ///
    /// Positions past the end of the list are ignored: the value is dropped, nothing changes and
    /// `false` is returned. This is not reported as an error.
    pub fn insert(&mut self, pos: usize, value: T) -> bool {
        if pos > self.len {
            return false;
        }

        self.ensure_capacity();

        // slot at `len` is vacant so rotating moves the vacancy to `pos`
        self.slots[pos..=self.len].rotate_right(1);
        self.slots[pos] = Some(value);
        self.len += 1;

        true
    }

    /// Inserts `value` before the first element.
    pub fn append_start(&mut self, value: T) {
        self.insert(0, value);
    }

    /// Adds `value` after the last element. Alias of [`append`](Self::append).
    pub fn append_end(&mut self, value: T) {
        self.append(value);
    }

    /// Appends every value in order.
    pub fn append_all(&mut self, values: impl IntoIterator<Item = T>) {
        for value in values {
            self.append(value);
        }
    }

    /// Removes and returns the element at `idx`, shifting later elements to the left.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `idx` is not less than the length.
    pub fn remove_at(&mut self, idx: usize) -> Result<T, Error> {
        Error::check_index(idx, self.len)?;

        let value = self.slots[idx].take();
        self.slots[idx..self.len].rotate_left(1);
        self.len -= 1;

        Ok(occupied(value))
    }

    /// Removes the first element equal to `value`. Returns true if one was removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(idx) => self.remove_at(idx).is_ok(),
            None => false,
        }
    }

    /// Drops every element. Capacity is retained.
    pub fn clear(&mut self) {
        tracing::trace!(target: TARGET, "clearing {} elements", self.len);

        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }

        self.len = 0;
    }

    /// Returns true if any element is equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns the position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Returns a reference to the element at `idx`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `idx` is not less than the length.
    pub fn get(&self, idx: usize) -> Result<&T, Error> {
        Error::check_index(idx, self.len)?;
        Ok(occupied(self.slots[idx].as_ref()))
    }

    /// Returns a mutable reference to the element at `idx`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `idx` is not less than the length.
    pub fn get_mut(&mut self, idx: usize) -> Result<&mut T, Error> {
        Error::check_index(idx, self.len)?;
        Ok(occupied(self.slots[idx].as_mut()))
    }

    /// Replaces the element at `idx`, returning the previous one.
    ///
    /// Only live positions can be written; this never extends the list.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `idx` is not less than the length.
    pub fn set(&mut self, idx: usize, value: T) -> Result<T, Error> {
        Error::check_index(idx, self.len)?;
        Ok(occupied(self.slots[idx].replace(value)))
    }

    /// Sorts the live elements with `comparator`.
    ///
    /// The sort is stable. Slots past the live prefix are untouched.
    ///
    /// # Errors
    /// Returns [`Error::MissingComparator`], without touching the list, if `comparator` is `None`.
    pub fn sort<F>(&mut self, comparator: Option<F>) -> Result<(), Error>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let compare = comparator.ok_or(Error::MissingComparator)?;
        self.sort_by(compare);
        Ok(())
    }

    /// Sorts the live elements with `compare`. The sort is stable.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.slots[..self.len]
            .sort_by(|a, b| compare(occupied(a.as_ref()), occupied(b.as_ref())));
    }

    /// Reverses the order of the live elements in place.
    pub fn reverse(&mut self) {
        self.slots[..self.len].reverse();
    }

    /// Returns an iterator over the live elements, first to last.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots[..self.len].iter(),
        }
    }

    /// Writes each element on its own line, first to last.
    pub fn show_to<W: io::Write>(&self, mut out: W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        for item in self {
            writeln!(out, "{item}")?;
        }

        Ok(())
    }

    /// Writes each element on its own line, last to first.
    pub fn reverse_show_to<W: io::Write>(&self, mut out: W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        for slot in self.slots[..self.len].iter().rev() {
            writeln!(out, "{}", occupied(slot.as_ref()))?;
        }

        Ok(())
    }

    /// Prints each element to stdout on its own line, first to last.
    pub fn show(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.show_to(io::stdout().lock())
    }

    /// Prints each element to stdout on its own line, last to first.
    pub fn reverse_show(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.reverse_show_to(io::stdout().lock())
    }

    /// Returns a display adapter that annotates each element with its [`Kind`](crate::Kind).
    pub fn typed(&self) -> Typed<Iter<'_, T>>
    where
        T: Kinded + fmt::Display,
    {
        Typed::new(self.iter())
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

/// Unwraps a slot from the live prefix.
fn occupied<T>(slot: Option<T>) -> T {
    slot.expect("slots within the live prefix are occupied")
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut cloned = Self::with_capacity(self.capacity());
        cloned.extend(self.iter().cloned());
        cloned
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self {
            writeln!(f, "{item}")?;
        }

        Ok(())
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.append_all(iter);
        list
    }
}

impl<T> List<T> for DynamicArray<T> {
    fn len(&self) -> usize {
        DynamicArray::len(self)
    }

    fn get(&self, idx: usize) -> Option<&T> {
        DynamicArray::get(self, idx).ok()
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        DynamicArray::index_of(self, value)
    }
}

impl<T> MutableList<T> for DynamicArray<T> {
    fn append(&mut self, element: T) {
        DynamicArray::append(self, element);
    }

    fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        DynamicArray::get_mut(self, idx).ok()
    }

    fn clear(&mut self) {
        DynamicArray::clear(self);
    }
}

impl<T> Capacity<T> for DynamicArray<T> {
    fn capacity(&self) -> usize {
        DynamicArray::capacity(self)
    }
}

/// Iterator over the live elements of a [`DynamicArray`].
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|slot| occupied(slot.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the elements of a [`DynamicArray`].
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(occupied)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut slots = self.slots.into_vec();
        slots.truncate(self.len);

        IntoIter {
            slots: slots.into_iter(),
        }
    }
}
