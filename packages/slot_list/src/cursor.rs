use std::fmt;
use std::fmt::Debug;

use crate::LinkedSlots;

/// Forward traversal state that tolerates removal of the element it last returned.
///
/// The cursor captures the successor of an element before handing that element to the caller,
/// so unlinking the returned element between [`advance()`][Cursor::advance] calls does not
/// derail the walk. This is the traversal to use when visiting a list in order to selectively
/// remove elements from it.
///
/// Removing or relinking any element the cursor has *not* yet returned invalidates the cursor;
/// continuing to advance it afterwards walks stale links.
///
/// Unlike [`Iter`], a cursor borrows nothing, which is what leaves the storage free to be
/// mutated between steps.
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
/// // Remove every visited element without losing our place.
/// let mut cursor = list.cursor();
/// while let Some(handle) = cursor.advance(&arena) {
///     list.remove(&mut arena, handle);
/// }
///
/// assert!(list.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<H> {
    /// The element the next `advance()` call will return.
    upcoming: Option<H>,
}

impl<H: Copy + Eq + Debug> Cursor<H> {
    pub(crate) fn starting_at(first: Option<H>) -> Self {
        Self { upcoming: first }
    }

    /// Returns the next element of the walk, or `None` once the list end has been passed.
    ///
    /// The successor of the returned element is captured before this call returns, so the
    /// caller may immediately unlink the returned element.
    ///
    /// # Panics
    ///
    /// Panics if the storage does not contain the slots the walk passes through.
    pub fn advance(&mut self, slots: &impl LinkedSlots<Handle = H>) -> Option<H> {
        let current = self.upcoming?;
        self.upcoming = slots.links(current).next();
        Some(current)
    }
}

/// Borrowing forward iterator over the handles of a list.
///
/// Yields handles front to back. The iterator holds a shared borrow of the storage for its
/// entire life, so the list cannot change mid-walk; use a [`Cursor`] when elements must be
/// removed while visiting them.
pub struct Iter<'s, S: LinkedSlots> {
    slots: &'s S,
    upcoming: Option<S::Handle>,
}

impl<'s, S: LinkedSlots> Iter<'s, S> {
    pub(crate) fn starting_at(slots: &'s S, first: Option<S::Handle>) -> Self {
        Self {
            slots,
            upcoming: first,
        }
    }
}

impl<S: LinkedSlots> Iterator for Iter<'_, S> {
    type Item = S::Handle;

    fn next(&mut self) -> Option<S::Handle> {
        let current = self.upcoming?;
        self.upcoming = self.slots.links(current).next();
        Some(current)
    }
}

impl<S: LinkedSlots> fmt::Debug for Iter<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("upcoming", &self.upcoming)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::test_arena::TestArena;
    use crate::{DoublyLinkedList, FifoQueue};

    assert_impl_all!(Cursor<usize>: Clone, Send, Sync);

    #[test]
    fn cursor_over_empty_list_yields_nothing() {
        let arena = TestArena::with_slots(1);
        let list = DoublyLinkedList::<usize>::new();

        let mut cursor = list.cursor();

        assert_eq!(cursor.advance(&arena), None);
        assert_eq!(cursor.advance(&arena), None);
    }

    #[test]
    fn cursor_visits_fifo_elements_in_order() {
        let mut arena = TestArena::with_slots(3);
        let mut queue = FifoQueue::new();

        queue.push_back(&mut arena, 0);
        queue.push_back(&mut arena, 1);
        queue.push_back(&mut arena, 2);

        let mut cursor = queue.cursor();
        let mut visited = Vec::new();

        while let Some(handle) = cursor.advance(&arena) {
            visited.push(handle);
        }

        assert_eq!(visited, vec![0, 1, 2]);
    }

    #[test]
    fn cursor_survives_removal_of_the_current_element() {
        let mut arena = TestArena::with_slots(4);
        let mut list = DoublyLinkedList::new();

        for handle in 0..4 {
            list.push_back(&mut arena, handle);
        }

        // Drop the odd elements as we pass them.
        let mut cursor = list.cursor();
        while let Some(handle) = cursor.advance(&arena) {
            if handle == 1 || handle == 3 {
                list.remove(&mut arena, handle);
            }
        }

        let remaining: Vec<_> = list.iter(&arena).collect();
        assert_eq!(remaining, vec![0, 2]);
    }

    #[test]
    fn cursor_survives_removal_of_every_element() {
        let mut arena = TestArena::with_slots(3);
        let mut list = DoublyLinkedList::new();

        for handle in 0..3 {
            list.push_back(&mut arena, handle);
        }

        let mut cursor = list.cursor();
        while let Some(handle) = cursor.advance(&arena) {
            list.remove(&mut arena, handle);
        }

        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn iter_yields_handles_front_to_back() {
        let mut arena = TestArena::with_slots(3);
        let mut list = DoublyLinkedList::new();

        list.push_back(&mut arena, 2);
        list.push_front(&mut arena, 0);
        list.insert_after(&mut arena, 0, 1);

        let collected: Vec<_> = list.iter(&arena).collect();
        assert_eq!(collected, vec![0, 1, 2]);
    }
}
