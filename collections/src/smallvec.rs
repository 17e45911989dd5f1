use smallvec::{Array, SmallVec};

use super::{Capacity, List, MutableList};

impl<A: Array> List<A::Item> for SmallVec<A> {
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    fn get(&self, idx: usize) -> Option<&A::Item> {
        <[_]>::get(self, idx)
    }

    fn index_of(&self, value: &A::Item) -> Option<usize>
    where
        A::Item: PartialEq,
    {
        self.iter().position(|item| item == value)
    }
}

impl<A: Array> MutableList<A::Item> for SmallVec<A> {
    fn append(&mut self, element: A::Item) {
        self.push(element);
    }

    fn get_mut(&mut self, idx: usize) -> Option<&mut A::Item> {
        <[_]>::get_mut(self, idx)
    }

    fn clear(&mut self) {
        SmallVec::clear(self);
    }
}

impl<A: Array> Capacity<A::Item> for SmallVec<A> {
    fn capacity(&self) -> usize {
        SmallVec::capacity(self)
    }
}
