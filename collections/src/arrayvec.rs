use arrayvec::ArrayVec;

use super::{Capacity, List, MutableList};

impl<T, const CAP: usize> List<T> for ArrayVec<T, CAP> {
    fn len(&self) -> usize {
        ArrayVec::len(self)
    }

    fn get(&self, idx: usize) -> Option<&T> {
        <[_]>::get(self, idx)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }
}

impl<T, const CAP: usize> MutableList<T> for ArrayVec<T, CAP> {
    /// Pushes `element` onto the end.
    ///
    /// # Panics
    /// Panics if the `ArrayVec` is full; it cannot grow.
    fn append(&mut self, element: T) {
        self.push(element);
    }

    fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        <[_]>::get_mut(self, idx)
    }

    fn clear(&mut self) {
        ArrayVec::clear(self);
    }
}

impl<T, const CAP: usize> Capacity<T> for ArrayVec<T, CAP> {
    fn capacity(&self) -> usize {
        CAP
    }

    fn is_full(&self) -> bool {
        ArrayVec::is_full(self)
    }
}
