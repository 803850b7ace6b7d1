use std::fmt::Debug;

use crate::{Cursor, Iter, LinkedSlots};

/// A doubly-linked list of slots with O(1) insertion and removal at arbitrary positions.
///
/// The list itself is only an anchor; the chain lives in the link fields of the storage's
/// slots. `None` in a link field stands for the anchor, so the conceptual structure is
/// circular: the front element's `prev` and the back element's `next` both designate the
/// anchor, and an empty list is one whose anchor refers only to itself.
///
/// Because every element knows both neighbors, [`remove()`][Self::remove] detaches any linked
/// element in constant time without searching. This is the structure to use for free lists
/// with newest-first reuse and for the "active element" bookkeeping lists that hosts maintain
/// alongside a pool.
///
/// # Contract
///
/// A slot may be in at most one list at a time. [`remove()`][Self::remove],
/// [`insert_before()`][Self::insert_before] and [`insert_after()`][Self::insert_after] require
/// that the named neighbor currently be linked in *this* list; handing them an element of
/// another list corrupts both. All operations on one list must use the same storage.
///
/// # Examples
///
/// ```
/// use slot_list::{DoublyLinkedList, LinkedSlots, Links};
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
/// let mut list = DoublyLinkedList::new();
/// list.push_back(&mut arena, 0);
/// list.push_back(&mut arena, 1);
/// list.push_back(&mut arena, 2);
///
/// // Unlink the middle element directly.
/// list.remove(&mut arena, 1);
///
/// assert_eq!(list.front(), Some(0));
/// assert_eq!(list.back(), Some(2));
/// ```
#[derive(Debug)]
pub struct DoublyLinkedList<H> {
    /// Handle of the front element; `None` when the list is empty.
    first: Option<H>,

    /// Handle of the back element; `None` when the list is empty.
    last: Option<H>,
}

impl<H: Copy + Eq + Debug> DoublyLinkedList<H> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            first: None,
            last: None,
        }
    }

    /// Returns `true` if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Returns the handle of the front element, or `None` if the list is empty.
    #[must_use]
    pub fn front(&self) -> Option<H> {
        self.first
    }

    /// Returns the handle of the back element, or `None` if the list is empty.
    #[must_use]
    pub fn back(&self) -> Option<H> {
        self.last
    }

    /// Inserts an element at the front of the list.
    ///
    /// The handle must not currently be in any list.
    ///
    /// # Panics
    ///
    /// Panics if the storage does not contain the slots involved.
    pub fn push_front(&mut self, slots: &mut impl LinkedSlots<Handle = H>, handle: H) {
        let first = self.first;

        {
            let links = slots.links_mut(handle);
            links.set_prev(None);
            links.set_next(first);
        }

        match first {
            Some(first) => slots.links_mut(first).set_prev(Some(handle)),
            None => self.last = Some(handle),
        }

        self.first = Some(handle);
    }

    /// Inserts an element at the back of the list.
    ///
    /// The handle must not currently be in any list.
    ///
    /// # Panics
    ///
    /// Panics if the storage does not contain the slots involved.
    pub fn push_back(&mut self, slots: &mut impl LinkedSlots<Handle = H>, handle: H) {
        let last = self.last;

        {
            let links = slots.links_mut(handle);
            links.set_prev(last);
            links.set_next(None);
        }

        match last {
            Some(last) => slots.links_mut(last).set_next(Some(handle)),
            None => self.first = Some(handle),
        }

        self.last = Some(handle);
    }

    /// Inserts an element immediately before a currently linked neighbor.
    ///
    /// # Panics
    ///
    /// Panics if the storage does not contain the slots involved.
    pub fn insert_before(
        &mut self,
        slots: &mut impl LinkedSlots<Handle = H>,
        neighbor: H,
        handle: H,
    ) {
        debug_assert!(
            handle != neighbor,
            "insert_before({neighbor:?}) cannot insert an element relative to itself"
        );

        let prev = slots.links(neighbor).prev();

        {
            let links = slots.links_mut(handle);
            links.set_prev(prev);
            links.set_next(Some(neighbor));
        }

        slots.links_mut(neighbor).set_prev(Some(handle));

        match prev {
            Some(prev) => slots.links_mut(prev).set_next(Some(handle)),
            None => self.first = Some(handle),
        }
    }

    /// Inserts an element immediately after a currently linked neighbor.
    ///
    /// # Panics
    ///
    /// Panics if the storage does not contain the slots involved.
    pub fn insert_after(
        &mut self,
        slots: &mut impl LinkedSlots<Handle = H>,
        neighbor: H,
        handle: H,
    ) {
        debug_assert!(
            handle != neighbor,
            "insert_after({neighbor:?}) cannot insert an element relative to itself"
        );

        let next = slots.links(neighbor).next();

        {
            let links = slots.links_mut(handle);
            links.set_prev(Some(neighbor));
            links.set_next(next);
        }

        slots.links_mut(neighbor).set_next(Some(handle));

        match next {
            Some(next) => slots.links_mut(next).set_prev(Some(handle)),
            None => self.last = Some(handle),
        }
    }

    /// Detaches a currently linked element, leaving its link field detached.
    ///
    /// This is O(1) and does not search: the element's own link field names its neighbors.
    ///
    /// # Panics
    ///
    /// Panics if the storage does not contain the slots involved.
    pub fn remove(&mut self, slots: &mut impl LinkedSlots<Handle = H>, handle: H) {
        let prev = slots.links(handle).prev();
        let next = slots.links(handle).next();

        if prev.is_none() {
            debug_assert!(
                self.first == Some(handle),
                "remove({handle:?}) element has no predecessor yet is not at the front of this list"
            );
        }

        if next.is_none() {
            debug_assert!(
                self.last == Some(handle),
                "remove({handle:?}) element has no successor yet is not at the back of this list"
            );
        }

        match prev {
            Some(prev) => slots.links_mut(prev).set_next(next),
            None => self.first = next,
        }

        match next {
            Some(next) => slots.links_mut(next).set_prev(prev),
            None => self.last = prev,
        }

        slots.links_mut(handle).clear();
    }

    /// Removes and returns the front element, or `None` if the list is empty.
    ///
    /// # Panics
    ///
    /// Panics if the storage does not contain the slots involved.
    pub fn pop_front(&mut self, slots: &mut impl LinkedSlots<Handle = H>) -> Option<H> {
        let handle = self.first?;
        self.remove(slots, handle);
        Some(handle)
    }

    /// Removes and returns the back element, or `None` if the list is empty.
    ///
    /// # Panics
    ///
    /// Panics if the storage does not contain the slots involved.
    pub fn pop_back(&mut self, slots: &mut impl LinkedSlots<Handle = H>) -> Option<H> {
        let handle = self.last?;
        self.remove(slots, handle);
        Some(handle)
    }

    /// Returns a removal-tolerant forward traversal over the list.
    #[must_use]
    pub fn cursor(&self) -> Cursor<H> {
        Cursor::starting_at(self.first)
    }

    /// Returns an iterator over the list's handles, front to back.
    pub fn iter<'s, S>(&self, slots: &'s S) -> Iter<'s, S>
    where
        S: LinkedSlots<Handle = H>,
    {
        Iter::starting_at(slots, self.first)
    }
}

impl<H: Copy + Eq + Debug> Default for DoublyLinkedList<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::test_arena::{TestArena, assert_list_is};

    assert_impl_all!(DoublyLinkedList<usize>: Send, Sync);

    #[test]
    fn new_list_is_empty() {
        let list = DoublyLinkedList::<usize>::new();

        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn push_front_prepends() {
        let mut arena = TestArena::with_slots(3);
        let mut list = DoublyLinkedList::new();

        list.push_front(&mut arena, 0);
        assert_list_is(&list, &arena, &[0]);

        list.push_front(&mut arena, 1);
        assert_list_is(&list, &arena, &[1, 0]);

        list.push_front(&mut arena, 2);
        assert_list_is(&list, &arena, &[2, 1, 0]);
    }

    #[test]
    fn push_back_appends() {
        let mut arena = TestArena::with_slots(3);
        let mut list = DoublyLinkedList::new();

        list.push_back(&mut arena, 0);
        list.push_back(&mut arena, 1);
        list.push_back(&mut arena, 2);

        assert_list_is(&list, &arena, &[0, 1, 2]);
    }

    #[test]
    fn insert_before_every_position() {
        let mut arena = TestArena::with_slots(5);
        let mut list = DoublyLinkedList::new();

        list.push_back(&mut arena, 0);
        list.push_back(&mut arena, 1);

        // Before the front element.
        list.insert_before(&mut arena, 0, 2);
        assert_list_is(&list, &arena, &[2, 0, 1]);

        // Before a middle element.
        list.insert_before(&mut arena, 0, 3);
        assert_list_is(&list, &arena, &[2, 3, 0, 1]);

        // Before the back element.
        list.insert_before(&mut arena, 1, 4);
        assert_list_is(&list, &arena, &[2, 3, 0, 4, 1]);
    }

    #[test]
    fn insert_after_every_position() {
        let mut arena = TestArena::with_slots(5);
        let mut list = DoublyLinkedList::new();

        list.push_back(&mut arena, 0);
        list.push_back(&mut arena, 1);

        // After the back element.
        list.insert_after(&mut arena, 1, 2);
        assert_list_is(&list, &arena, &[0, 1, 2]);

        // After a middle element.
        list.insert_after(&mut arena, 1, 3);
        assert_list_is(&list, &arena, &[0, 1, 3, 2]);

        // After the front element.
        list.insert_after(&mut arena, 0, 4);
        assert_list_is(&list, &arena, &[0, 4, 1, 3, 2]);
    }

    #[test]
    fn remove_from_every_position() {
        let mut arena = TestArena::with_slots(4);
        let mut list = DoublyLinkedList::new();

        for handle in 0..4 {
            list.push_back(&mut arena, handle);
        }

        list.remove(&mut arena, 0);
        assert_list_is(&list, &arena, &[1, 2, 3]);

        list.remove(&mut arena, 2);
        assert_list_is(&list, &arena, &[1, 3]);

        list.remove(&mut arena, 3);
        assert_list_is(&list, &arena, &[1]);

        list.remove(&mut arena, 1);
        assert_list_is(&list, &arena, &[]);
        assert!(list.is_empty());
    }

    #[test]
    fn removed_element_is_detached() {
        let mut arena = TestArena::with_slots(3);
        let mut list = DoublyLinkedList::new();

        for handle in 0..3 {
            list.push_back(&mut arena, handle);
        }

        list.remove(&mut arena, 1);

        assert_eq!(arena.links(1).next(), None);
        assert_eq!(arena.links(1).prev(), None);
    }

    #[test]
    fn removed_element_can_be_reinserted() {
        let mut arena = TestArena::with_slots(3);
        let mut list = DoublyLinkedList::new();

        for handle in 0..3 {
            list.push_back(&mut arena, handle);
        }

        list.remove(&mut arena, 1);
        list.push_back(&mut arena, 1);

        assert_list_is(&list, &arena, &[0, 2, 1]);
    }

    #[test]
    fn pop_front_and_pop_back_take_from_opposite_ends() {
        let mut arena = TestArena::with_slots(4);
        let mut list = DoublyLinkedList::new();

        for handle in 0..4 {
            list.push_back(&mut arena, handle);
        }

        assert_eq!(list.pop_front(&mut arena), Some(0));
        assert_eq!(list.pop_back(&mut arena), Some(3));
        assert_list_is(&list, &arena, &[1, 2]);

        assert_eq!(list.pop_front(&mut arena), Some(1));
        assert_eq!(list.pop_back(&mut arena), Some(2));
        assert_eq!(list.pop_front(&mut arena), None);
        assert_eq!(list.pop_back(&mut arena), None);
    }

    #[test]
    fn arbitrary_interleaving_preserves_invariants() {
        let mut arena = TestArena::with_slots(6);
        let mut list = DoublyLinkedList::new();

        list.push_back(&mut arena, 0);
        list.push_front(&mut arena, 1);
        list.insert_after(&mut arena, 1, 2);
        assert_list_is(&list, &arena, &[1, 2, 0]);

        list.remove(&mut arena, 2);
        list.insert_before(&mut arena, 0, 3);
        assert_list_is(&list, &arena, &[1, 3, 0]);

        list.pop_front(&mut arena);
        list.push_back(&mut arena, 4);
        list.insert_after(&mut arena, 3, 5);
        assert_list_is(&list, &arena, &[3, 5, 0, 4]);

        list.remove(&mut arena, 0);
        list.remove(&mut arena, 4);
        assert_list_is(&list, &arena, &[3, 5]);
    }
}
