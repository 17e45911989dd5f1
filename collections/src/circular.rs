//! Circular doubly linked list.
//!
//! See [`CircularList`] docs.

use std::{fmt, io, iter::FusedIterator, mem, vec};

use crate::{Kinded, List, MutableList, Typed};

const TARGET: &str = module_path!();

/// Handle to a node of a [`CircularList`].
///
/// Handles stay valid until their node is removed. A stale handle never resolves to a node that
/// later reuses the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: NodeId,
    prev: NodeId,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

#[derive(Debug, Clone)]
enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// A doubly linked list kept as a ring: the tail's successor is the head and the head's
/// predecessor is the tail.
///
/// Values are appended at the front (head side) and [`remove`](Self::remove) takes from the back
/// (tail side), so the list behaves as a FIFO queue. Traversals stop after [`len`](Self::len)
/// steps since the ring has no end marker.
///
/// Nodes live in an arena and link to each other through [`NodeId`] handles. Slots of removed
/// nodes are reused by later appends.
///
/// # Examples
/// ```
/// use seq_collections::CircularList;
///
/// let mut list = CircularList::new();
/// list.append(1);
/// list.append(2);
/// list.append(3);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
///
/// assert_eq!(list.remove(), Some(1));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 2]);
/// assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), [2, 3]);
/// ```
pub struct CircularList<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> CircularList<T> {
    /// Constructs an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` at the front of the list.
    pub fn append(&mut self, value: T) {
        let id = self.vacant_id();

        let (next, prev) = match (self.head, self.tail) {
            (Some(head), Some(tail)) => (head, tail),

            // first node is its own neighbor
            _ => (id, id),
        };

        self.occupy(id, Node { value, next, prev });

        if self.len == 0 {
            self.tail = Some(id);
        } else {
            self.node_mut(next).prev = id;
            self.node_mut(prev).next = id;
        }

        self.head = Some(id);
        self.len += 1;
    }

    /// Front-inserts every value in order.
    pub fn append_all(&mut self, values: impl IntoIterator<Item = T>) {
        for value in values {
            self.append(value);
        }
    }

    /// Removes and returns the value at the back of the list.
    ///
    /// The tail's predecessor becomes the new tail and is linked back to the head. Returns `None`
    /// on an empty list.
    pub fn remove(&mut self) -> Option<T> {
        let tail = self.tail?;

        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let head = self.head?;
            let new_tail = self.node(tail).prev;

            self.node_mut(new_tail).next = head;
            self.node_mut(head).prev = new_tail;
            self.tail = Some(new_tail);
        }

        self.len -= 1;

        Some(self.release(tail))
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        tracing::trace!(target: TARGET, "clearing {} nodes", self.len);

        // rebuild the free chain in index order, retiring the handles of live nodes
        self.free = None;

        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if let Entry::Occupied(_) = slot.entry {
                slot.generation = slot.generation.wrapping_add(1);
            }

            slot.entry = Entry::Vacant {
                next_free: self.free,
            };
            self.free = Some(index);
        }

        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns the value at the front of the list.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.node(id).value)
    }

    /// Returns the value at the back of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| &self.node(id).value)
    }

    /// Returns true if any value is equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns the position, counted from the front, of the first value equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Returns the handle of the front node.
    pub fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    /// Returns the handle of the back node.
    pub fn tail_id(&self) -> Option<NodeId> {
        self.tail
    }

    /// Returns the successor of node `id`, or `None` if `id` is stale.
    pub fn next_id(&self, id: NodeId) -> Option<NodeId> {
        self.try_node(id).map(|node| node.next)
    }

    /// Returns the predecessor of node `id`, or `None` if `id` is stale.
    pub fn prev_id(&self, id: NodeId) -> Option<NodeId> {
        self.try_node(id).map(|node| node.prev)
    }

    /// Returns the value of node `id`, or `None` if `id` is stale.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.try_node(id).map(|node| &node.value)
    }

    /// Returns an iterator from front to back, following successor links.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Returns an iterator from back to front, following predecessor links from the head's
    /// predecessor.
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        IterRev {
            list: self,
            cursor: self.head.map(|id| self.node(id).prev),
            remaining: self.len,
        }
    }

    /// Writes each value on its own line, front to back.
    pub fn show_to<W: io::Write>(&self, mut out: W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        for item in self {
            writeln!(out, "{item}")?;
        }

        Ok(())
    }

    /// Writes each value on its own line, back to front.
    pub fn reverse_show_to<W: io::Write>(&self, mut out: W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        for item in self.iter_rev() {
            writeln!(out, "{item}")?;
        }

        Ok(())
    }

    /// Prints each value to stdout on its own line, front to back.
    pub fn show(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.show_to(io::stdout().lock())
    }

    /// Prints each value to stdout on its own line, back to front.
    pub fn reverse_show(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.reverse_show_to(io::stdout().lock())
    }

    /// Returns a display adapter that annotates each value with its [`Kind`](crate::Kind).
    pub fn typed(&self) -> Typed<Iter<'_, T>>
    where
        T: Kinded + fmt::Display,
    {
        Typed::new(self.iter())
    }

    fn try_node(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.index)? {
            Slot {
                generation,
                entry: Entry::Occupied(node),
            } if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        self.try_node(id).expect("linked handles refer to live nodes")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots.get_mut(id.index) {
            Some(Slot {
                generation,
                entry: Entry::Occupied(node),
            }) if *generation == id.generation => node,
            _ => panic!("linked handles refer to live nodes"),
        }
    }

    /// Walks `idx` steps from the head.
    fn id_at(&self, idx: usize) -> Option<NodeId> {
        if idx >= self.len {
            return None;
        }

        let mut id = self.head?;
        for _ in 0..idx {
            id = self.node(id).next;
        }

        Some(id)
    }

    /// Returns the handle the next call to `occupy` should use.
    fn vacant_id(&self) -> NodeId {
        match self.free {
            Some(index) => NodeId {
                index,
                generation: self.slots[index].generation,
            },
            None => NodeId {
                index: self.slots.len(),
                generation: 0,
            },
        }
    }

    fn occupy(&mut self, id: NodeId, node: Node<T>) {
        if id.index == self.slots.len() {
            tracing::trace!(target: TARGET, "growing arena to {} slots", id.index + 1);

            self.slots.push(Slot {
                generation: id.generation,
                entry: Entry::Occupied(node),
            });
            return;
        }

        tracing::trace!(target: TARGET, "reusing arena slot {}", id.index);

        let slot = &mut self.slots[id.index];
        let Entry::Vacant { next_free } = mem::replace(&mut slot.entry, Entry::Occupied(node))
        else {
            panic!("only vacant slots are reused");
        };
        self.free = next_free;
    }

    fn release(&mut self, id: NodeId) -> T {
        let slot = &mut self.slots[id.index];
        let entry = mem::replace(
            &mut slot.entry,
            Entry::Vacant {
                next_free: self.free,
            },
        );
        slot.generation = slot.generation.wrapping_add(1);
        self.free = Some(id.index);

        match entry {
            Entry::Occupied(node) => node.value,
            Entry::Vacant { .. } => panic!("released handle referred to a vacant slot"),
        }
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularList<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            free: self.free,
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self {
            writeln!(f, "{item}")?;
        }

        Ok(())
    }
}

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.append_all(iter);
        list
    }
}

impl<T> List<T> for CircularList<T> {
    fn len(&self) -> usize {
        CircularList::len(self)
    }

    fn get(&self, idx: usize) -> Option<&T> {
        self.id_at(idx).map(|id| &self.node(id).value)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        CircularList::index_of(self, value)
    }
}

impl<T> MutableList<T> for CircularList<T> {
    fn append(&mut self, element: T) {
        CircularList::append(self, element);
    }

    fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        let id = self.id_at(idx)?;
        Some(&mut self.node_mut(id).value)
    }

    fn clear(&mut self) {
        CircularList::clear(self);
    }
}

/// Front-to-back iterator over a [`CircularList`].
pub struct Iter<'a, T> {
    list: &'a CircularList<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            cursor: self.cursor,
            remaining: self.remaining,
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
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.node(self.cursor?);
        self.cursor = Some(node.next);
        self.remaining -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Back-to-front iterator over a [`CircularList`].
pub struct IterRev<'a, T> {
    list: &'a CircularList<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<T: fmt::Debug> fmt::Debug for IterRev<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterRev")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<'a, T> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.node(self.cursor?);
        self.cursor = Some(node.prev);
        self.remaining -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterRev<'_, T> {}

impl<T> FusedIterator for IterRev<'_, T> {}

/// Owning front-to-back iterator over a [`CircularList`].
#[derive(Debug)]
pub struct IntoIter<T> {
    values: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for CircularList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut values = Vec::with_capacity(self.len);
        let mut cursor = self.head;

        for _ in 0..self.len {
            let Some(id) = cursor else { break };
            cursor = Some(self.node(id).next);
            values.push(self.release(id));
        }

        IntoIter {
            values: values.into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(CircularList<String>: Send, Sync, Clone);

    impl<T> CircularList<T> {
        /// Checks both ring links and that successor and predecessor walks mirror each other.
        fn assert_ring(&self) {
            let (Some(head), Some(tail)) = (self.head, self.tail) else {
                assert_eq!(self.len, 0);
                assert!(self.head.is_none() && self.tail.is_none());
                return;
            };

            assert_eq!(self.next_id(tail), Some(head), "tail's successor is head");
            assert_eq!(self.prev_id(head), Some(tail), "head's predecessor is tail");

            let mut forward = vec![head];
            for _ in 1..self.len {
                forward.push(self.node(*forward.last().unwrap()).next);
            }
            assert_eq!(forward.last(), Some(&tail));
            assert_eq!(self.node(tail).next, head);

            let mut backward = vec![tail];
            for _ in 1..self.len {
                backward.push(self.node(*backward.last().unwrap()).prev);
            }
            backward.reverse();
            assert_eq!(forward, backward);

            let live = self
                .slots
                .iter()
                .filter(|slot| matches!(slot.entry, Entry::Occupied(_)))
                .count();
            assert_eq!(live, self.len);
        }
    }

    fn forward<T: Clone>(list: &CircularList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    fn backward<T: Clone>(list: &CircularList<T>) -> Vec<T> {
        list.iter_rev().cloned().collect()
    }

    #[test]
    fn front_insertion_order() {
        let mut list = CircularList::new();
        list.assert_ring();

        list.append(1);
        assert_eq!(list.head_id(), list.tail_id());
        list.assert_ring();

        list.append(2);
        list.append(3);
        list.assert_ring();

        assert_eq!(list.len(), 3);
        assert_eq!(forward(&list), [3, 2, 1]);
        assert_eq!(backward(&list), [1, 2, 3]);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&1));
    }

    #[test]
    fn remove_takes_tail_and_advances_it() {
        let mut list: CircularList<_> = [1, 2, 3].into_iter().collect();
        let old_tail = list.tail_id().unwrap();

        assert_eq!(list.remove(), Some(1));
        list.assert_ring();

        assert_eq!(list.len(), 2);
        assert_eq!(list.back(), Some(&2));
        assert_eq!(list.value(list.tail_id().unwrap()), Some(&2));
        assert_eq!(forward(&list), [3, 2]);
        assert_eq!(backward(&list), [2, 3]);

        // removed node is unreachable through its old handle
        assert_ne!(list.tail_id(), Some(old_tail));
        assert_eq!(list.value(old_tail), None);
        assert_eq!(list.next_id(old_tail), None);
    }

    #[test]
    fn remove_down_to_empty() {
        let mut list: CircularList<_> = ["x", "y"].into_iter().collect();

        assert_eq!(list.remove(), Some("x"));
        list.assert_ring();
        assert_eq!(list.head_id(), list.tail_id());
        assert_eq!(list.next_id(list.head_id().unwrap()), list.head_id());

        assert_eq!(list.remove(), Some("y"));
        list.assert_ring();
        assert!(list.is_empty());
        assert_eq!(list.head_id(), None);
        assert_eq!(list.tail_id(), None);

        assert_eq!(list.remove(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn append_then_remove_is_fifo() {
        let mut list: CircularList<_> = [10, 20].into_iter().collect();

        list.append(30);
        assert_eq!(list.remove(), Some(10));
        assert_eq!(forward(&list), [30, 20]);
        list.assert_ring();
    }

    #[test]
    fn slots_are_reused_with_fresh_handles() {
        let mut list = CircularList::new();
        list.append('a');
        list.append('b');

        let stale = list.tail_id().unwrap();
        assert_eq!(list.remove(), Some('a'));

        list.append('c');
        assert_eq!(list.slots.len(), 2);

        let reused = list.head_id().unwrap();
        assert_eq!(reused.index, stale.index);
        assert_ne!(reused, stale);
        assert_eq!(list.value(stale), None);
        assert_eq!(list.value(reused), Some(&'c'));
        assert_eq!(forward(&list), ['c', 'b']);
        list.assert_ring();
    }

    #[test]
    fn interleaved_operations_keep_ring() {
        let mut list = CircularList::new();
        let mut model = std::collections::VecDeque::new();

        for step in 0..200_u32 {
            if step % 3 == 2 {
                assert_eq!(list.remove(), model.pop_back());
            } else {
                list.append(step);
                model.push_front(step);
            }

            list.assert_ring();
            assert_eq!(forward(&list), model.iter().copied().collect::<Vec<_>>());
        }
    }

    #[test]
    fn clear_retires_handles() {
        let mut list: CircularList<_> = (0..4).collect();
        let head = list.head_id().unwrap();

        list.clear();
        list.assert_ring();
        assert!(list.is_empty());
        assert_eq!(list.value(head), None);
        assert_eq!(forward(&list), Vec::<i32>::new());

        list.append(9);
        list.assert_ring();
        assert_eq!(list.value(head), None);
        assert_eq!(forward(&list), [9]);
    }

    #[test]
    fn indexed_access() {
        let mut list: CircularList<_> = ["c", "b", "a"].into_iter().collect();

        assert_eq!(List::get(&list, 0), Some(&"a"));
        assert_eq!(List::get(&list, 2), Some(&"c"));
        assert_eq!(List::get(&list, 3), None);

        *MutableList::get_mut(&mut list, 1).unwrap() = "B";
        assert_eq!(forward(&list), ["a", "B", "c"]);
        assert_eq!(list.index_of(&"c"), Some(2));
        assert!(list.contains(&"B"));
        assert!(!list.contains(&"b"));
    }

    #[test]
    fn absent_values_compare_equal() {
        let list: CircularList<_> = [None, Some(1), None].into_iter().collect();
        assert_eq!(list.index_of(&None), Some(0));
        assert_eq!(list.index_of(&Some(1)), Some(1));
    }

    #[test]
    fn show_writes_lines() {
        let list: CircularList<_> = [1, 2, 3].into_iter().collect();

        let mut out = Vec::new();
        list.show_to(&mut out).unwrap();
        assert_eq!(out, b"3\n2\n1\n");

        let mut out = Vec::new();
        list.reverse_show_to(&mut out).unwrap();
        assert_eq!(out, b"1\n2\n3\n");

        assert_eq!(list.to_string(), "3\n2\n1\n");
        assert_eq!(format!("{list:?}"), "[3, 2, 1]");
    }

    #[test]
    fn owned_iteration_and_clone() {
        let mut list: CircularList<_> = (1..=3).map(|n| n.to_string()).collect();
        list.remove();

        let cloned = list.clone();
        assert_eq!(cloned, list);
        cloned.assert_ring();

        let iter = list.into_iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), ["3", "2"]);
        assert_eq!(forward(&cloned), ["3", "2"]);
    }
}
