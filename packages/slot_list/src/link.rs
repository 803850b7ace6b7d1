/// The navigation field embedded in every slot of a linked storage.
///
/// A slot that participates in a [`FifoQueue`][crate::FifoQueue] or a
/// [`DoublyLinkedList`][crate::DoublyLinkedList] must carry one of these fields. The list
/// operations rewire the field; the storage merely keeps it in place. `None` designates the
/// anchor position, so a detached slot has both pointers set to `None`.
///
/// Only the singly-linked discipline leaves `prev` untouched; everything else maintains both
/// directions.
///
/// # Examples
///
/// ```
/// use slot_list::Links;
///
/// let links = Links::<usize>::default();
///
/// // A freshly created link field is detached.
/// assert_eq!(links.next(), None);
/// assert_eq!(links.prev(), None);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Links<H> {
    /// Handle of the following slot, or `None` when this slot is at the back (or detached).
    next: Option<H>,

    /// Handle of the preceding slot, or `None` when this slot is at the front (or detached).
    prev: Option<H>,
}

impl<H> Default for Links<H> {
    fn default() -> Self {
        Self {
            next: None,
            prev: None,
        }
    }
}

impl<H: Copy> Links<H> {
    /// Returns the handle of the slot that follows this one in its list, if any.
    #[must_use]
    pub fn next(&self) -> Option<H> {
        self.next
    }

    /// Returns the handle of the slot that precedes this one in its list, if any.
    #[must_use]
    pub fn prev(&self) -> Option<H> {
        self.prev
    }

    pub(crate) fn set_next(&mut self, next: Option<H>) {
        self.next = next;
    }

    pub(crate) fn set_prev(&mut self, prev: Option<H>) {
        self.prev = prev;
    }

    pub(crate) fn clear(&mut self) {
        self.next = None;
        self.prev = None;
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Links<usize>: Copy, Send, Sync);

    #[test]
    fn default_is_detached() {
        let links = Links::<usize>::default();

        assert_eq!(links.next(), None);
        assert_eq!(links.prev(), None);
    }

    #[test]
    fn set_and_clear() {
        let mut links = Links::<usize>::default();

        links.set_next(Some(7));
        links.set_prev(Some(3));

        assert_eq!(links.next(), Some(7));
        assert_eq!(links.prev(), Some(3));

        links.clear();

        assert_eq!(links.next(), None);
        assert_eq!(links.prev(), None);
    }
}
