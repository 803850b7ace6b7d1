use slot_list::{DoublyLinkedList, FifoQueue};

use crate::{RecordHandle, RecycleDiscipline, SlabTable};

/// The pool's list of idle records, threaded through the link fields of the records themselves.
///
/// The variant chosen at pool creation time determines which end of the list satisfies the next
/// borrow. Both variants accept returned records in O(1) and hand out idle records in O(1).
#[derive(Debug)]
pub(crate) enum FreeList {
    /// Records come back out in the order they were put in.
    Fifo(FifoQueue<RecordHandle>),

    /// The most recently returned record comes back out first.
    Lifo(DoublyLinkedList<RecordHandle>),
}

impl FreeList {
    pub(crate) fn new(discipline: RecycleDiscipline) -> Self {
        match discipline {
            RecycleDiscipline::Fifo => Self::Fifo(FifoQueue::new()),
            RecycleDiscipline::Lifo => Self::Lifo(DoublyLinkedList::new()),
        }
    }

    #[must_use]
    pub(crate) fn discipline(&self) -> RecycleDiscipline {
        match self {
            Self::Fifo(_) => RecycleDiscipline::Fifo,
            Self::Lifo(_) => RecycleDiscipline::Lifo,
        }
    }

    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Self::Fifo(queue) => queue.is_empty(),
            Self::Lifo(list) => list.is_empty(),
        }
    }

    /// Adds an idle record to the list.
    pub(crate) fn give<T>(&mut self, slots: &mut SlabTable<T>, handle: RecordHandle) {
        match self {
            Self::Fifo(queue) => queue.push_back(slots, handle),
            Self::Lifo(list) => list.push_front(slots, handle),
        }
    }

    /// Takes an idle record from the list, if any remain.
    pub(crate) fn take<T>(&mut self, slots: &mut SlabTable<T>) -> Option<RecordHandle> {
        match self {
            Self::Fifo(queue) => queue.pop_front(slots),
            Self::Lifo(list) => list.pop_front(slots),
        }
    }

    /// Returns a removal-safe cursor positioned at the head of the list.
    #[cfg(debug_assertions)]
    pub(crate) fn cursor(&self) -> slot_list::Cursor<RecordHandle> {
        match self {
            Self::Fifo(queue) => queue.cursor(),
            Self::Lifo(list) => list.cursor(),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::indexing_slicing,
    reason = "test code doesn't need the same safety rigor as production code"
)]
mod tests {
    use new_zealand::nz;

    use super::*;
    use crate::Slab;

    fn table_with_slots(count: usize) -> (SlabTable<u32>, Vec<RecordHandle>) {
        let mut table = SlabTable::new();
        table
            .try_push(Slab::new(nz!(8)).unwrap())
            .expect("test table setup must succeed");

        let handles = (0..count)
            .map(|index_in_slab| RecordHandle {
                slab_index: 0,
                index_in_slab,
            })
            .collect();

        (table, handles)
    }

    #[test]
    fn fifo_returns_in_insertion_order() {
        let (mut table, handles) = table_with_slots(3);
        let mut free = FreeList::new(RecycleDiscipline::Fifo);

        for &handle in &handles {
            free.give(&mut table, handle);
        }

        assert_eq!(free.take(&mut table), Some(handles[0]));
        assert_eq!(free.take(&mut table), Some(handles[1]));
        assert_eq!(free.take(&mut table), Some(handles[2]));
        assert_eq!(free.take(&mut table), None);
    }

    #[test]
    fn lifo_returns_most_recent_first() {
        let (mut table, handles) = table_with_slots(3);
        let mut free = FreeList::new(RecycleDiscipline::Lifo);

        for &handle in &handles {
            free.give(&mut table, handle);
        }

        assert_eq!(free.take(&mut table), Some(handles[2]));
        assert_eq!(free.take(&mut table), Some(handles[1]));
        assert_eq!(free.take(&mut table), Some(handles[0]));
        assert_eq!(free.take(&mut table), None);
    }

    #[test]
    fn reports_discipline_and_emptiness() {
        let (mut table, handles) = table_with_slots(1);
        let mut free = FreeList::new(RecycleDiscipline::Fifo);

        assert_eq!(free.discipline(), RecycleDiscipline::Fifo);
        assert!(free.is_empty());

        free.give(&mut table, handles[0]);
        assert!(!free.is_empty());

        _ = free.take(&mut table);
        assert!(free.is_empty());
    }
}
