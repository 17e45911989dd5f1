use super::{Capacity, List, MutableList};

impl<T> List<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
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

impl<T> MutableList<T> for Vec<T> {
    fn append(&mut self, element: T) {
        self.push(element);
    }

    fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        <[_]>::get_mut(self, idx)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<T> Capacity<T> for Vec<T> {
    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }
}
