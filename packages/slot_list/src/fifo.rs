use std::fmt::Debug;

use crate::{Cursor, Iter, LinkedSlots};

/// A singly-linked queue of slots, yielding them in insertion order.
///
/// The queue itself is only a pair of handles; the chain lives in the link fields of the
/// storage's slots, so enqueueing and dequeueing move no data and allocate nothing. A cached
/// tail handle makes both [`push_back()`][Self::push_back] and
/// [`pop_front()`][Self::pop_front] O(1).
///
/// Only the `next` direction of each [`Links`][crate::Links] field is used; there is no
/// arbitrary-position removal. When elements must leave the middle of a list, use
/// [`DoublyLinkedList`][crate::DoublyLinkedList] instead.
///
/// # Contract
///
/// A slot may be in at most one list at a time, and all operations on one queue must use the
/// same storage.
///
/// # Examples
///
/// ```
/// use slot_list::{FifoQueue, LinkedSlots, Links};
///
/// struct Arena {
///     links: Vec<Links<usize>>,
/// }
///
/// impl LinkedSlots for Arena {
///     type Handle = usize;
///
///     fn links(&self, handle: usize) -> &Links<usize> {
///         &self.links[handle]
///     }
///
///     fn links_mut(&mut self, handle: usize) -> &mut Links<usize> {
///         &mut self.links[handle]
///     }
/// }
///
/// let mut arena = Arena {
///     links: vec![Links::default(); 3],
/// };
///
/// let mut queue = FifoQueue::new();
/// queue.push_back(&mut arena, 0);
/// queue.push_back(&mut arena, 1);
/// queue.push_back(&mut arena, 2);
///
/// // Oldest first.
/// assert_eq!(queue.pop_front(&mut arena), Some(0));
/// assert_eq!(queue.pop_front(&mut arena), Some(1));
/// assert_eq!(queue.pop_front(&mut arena), Some(2));
/// assert_eq!(queue.pop_front(&mut arena), None);
/// ```
#[derive(Debug)]
pub struct FifoQueue<H> {
    /// Handle of the oldest element; `None` when the queue is empty.
    first: Option<H>,

    /// Handle of the most recently inserted element. Meaningful only while `first` is `Some`;
    /// kept so tail insertion does not walk the chain.
    last: Option<H>,
}

impl<H: Copy + Eq + Debug> FifoQueue<H> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            first: None,
            last: None,
        }
    }

    /// Returns `true` if the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Returns the handle of the oldest element without removing it.
    #[must_use]
    pub fn front(&self) -> Option<H> {
        self.first
    }

    /// Appends an element at the back of the queue.
    ///
    /// The handle must not currently be in any list.
    ///
    /// # Panics
    ///
    /// Panics if the storage does not contain the handle's slot.
    pub fn push_back(&mut self, slots: &mut impl LinkedSlots<Handle = H>, handle: H) {
        slots.links_mut(handle).clear();

        match self.last {
            Some(last) => slots.links_mut(last).set_next(Some(handle)),
            None => self.first = Some(handle),
        }

        self.last = Some(handle);
    }

    /// Removes and returns the oldest element, or `None` if the queue is empty.
    ///
    /// The removed element's link field is left detached.
    ///
    /// # Panics
    ///
    /// Panics if the storage does not contain the front slot.
    pub fn pop_front(&mut self, slots: &mut impl LinkedSlots<Handle = H>) -> Option<H> {
        let handle = self.first?;

        self.first = slots.links(handle).next();

        if self.first.is_none() {
            self.last = None;
        }

        slots.links_mut(handle).clear();

        Some(handle)
    }

    /// Returns a removal-tolerant forward traversal over the queue.
    #[must_use]
    pub fn cursor(&self) -> Cursor<H> {
        Cursor::starting_at(self.first)
    }

    /// Returns an iterator over the queue's handles, front to back.
    pub fn iter<'s, S>(&self, slots: &'s S) -> Iter<'s, S>
    where
        S: LinkedSlots<Handle = H>,
    {
        Iter::starting_at(slots, self.first)
    }
}

impl<H: Copy + Eq + Debug> Default for FifoQueue<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::test_arena::TestArena;

    assert_impl_all!(FifoQueue<usize>: Send, Sync);

    #[test]
    fn new_queue_is_empty() {
        let queue = FifoQueue::<usize>::new();

        assert!(queue.is_empty());
        assert_eq!(queue.front(), None);
    }

    #[test]
    fn pops_in_insertion_order() {
        let mut arena = TestArena::with_slots(3);
        let mut queue = FifoQueue::new();

        queue.push_back(&mut arena, 2);
        queue.push_back(&mut arena, 0);
        queue.push_back(&mut arena, 1);

        assert_eq!(queue.pop_front(&mut arena), Some(2));
        assert_eq!(queue.pop_front(&mut arena), Some(0));
        assert_eq!(queue.pop_front(&mut arena), Some(1));
        assert_eq!(queue.pop_front(&mut arena), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn front_peeks_without_removing() {
        let mut arena = TestArena::with_slots(2);
        let mut queue = FifoQueue::new();

        queue.push_back(&mut arena, 1);
        queue.push_back(&mut arena, 0);

        assert_eq!(queue.front(), Some(1));
        assert_eq!(queue.front(), Some(1));
        assert_eq!(queue.pop_front(&mut arena), Some(1));
        assert_eq!(queue.front(), Some(0));
    }

    #[test]
    fn interleaved_pushes_and_pops_preserve_order() {
        let mut arena = TestArena::with_slots(4);
        let mut queue = FifoQueue::new();

        queue.push_back(&mut arena, 0);
        queue.push_back(&mut arena, 1);

        assert_eq!(queue.pop_front(&mut arena), Some(0));

        queue.push_back(&mut arena, 2);
        queue.push_back(&mut arena, 3);

        assert_eq!(queue.pop_front(&mut arena), Some(1));
        assert_eq!(queue.pop_front(&mut arena), Some(2));
        assert_eq!(queue.pop_front(&mut arena), Some(3));
        assert_eq!(queue.pop_front(&mut arena), None);
    }

    #[test]
    fn popped_elements_can_be_reinserted() {
        let mut arena = TestArena::with_slots(2);
        let mut queue = FifoQueue::new();

        queue.push_back(&mut arena, 0);
        queue.push_back(&mut arena, 1);

        let recycled = queue.pop_front(&mut arena).unwrap();
        queue.push_back(&mut arena, recycled);

        assert_eq!(queue.pop_front(&mut arena), Some(1));
        assert_eq!(queue.pop_front(&mut arena), Some(0));
        assert_eq!(queue.pop_front(&mut arena), None);
    }

    #[test]
    fn draining_resets_the_queue_for_reuse() {
        let mut arena = TestArena::with_slots(2);
        let mut queue = FifoQueue::new();

        queue.push_back(&mut arena, 0);
        assert_eq!(queue.pop_front(&mut arena), Some(0));
        assert!(queue.is_empty());

        queue.push_back(&mut arena, 1);
        assert_eq!(queue.front(), Some(1));
        assert_eq!(queue.pop_front(&mut arena), Some(1));
    }

    #[test]
    fn popped_element_is_detached() {
        let mut arena = TestArena::with_slots(2);
        let mut queue = FifoQueue::new();

        queue.push_back(&mut arena, 0);
        queue.push_back(&mut arena, 1);
        queue.pop_front(&mut arena);

        assert_eq!(arena.links(0).next(), None);
        assert_eq!(arena.links(0).prev(), None);
    }
}
