//! Vec-backed storage used by the tests of this crate.

#![allow(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "test code doesn't need the same safety rigor as production code"
)]

use crate::{DoublyLinkedList, LinkedSlots, Links};

/// The simplest possible linked storage: a Vec of bare link fields, addressed by index.
#[derive(Debug)]
pub(crate) struct TestArena {
    links: Vec<Links<usize>>,
}

impl TestArena {
    pub(crate) fn with_slots(count: usize) -> Self {
        Self {
            links: vec![Links::default(); count],
        }
    }
}

impl LinkedSlots for TestArena {
    type Handle = usize;

    fn links(&self, handle: usize) -> &Links<usize> {
        self.links
            .get(handle)
            .expect("handle is out of bounds for this arena")
    }

    fn links_mut(&mut self, handle: usize) -> &mut Links<usize> {
        self.links
            .get_mut(handle)
            .expect("handle is out of bounds for this arena")
    }
}

/// Asserts that the list contains exactly `expected`, in order, and that every structural
/// invariant holds: the forward and backward walks agree, and each element's neighbors point
/// back at it.
pub(crate) fn assert_list_is(
    list: &DoublyLinkedList<usize>,
    arena: &TestArena,
    expected: &[usize],
) {
    assert_eq!(list.is_empty(), expected.is_empty());
    assert_eq!(list.front(), expected.first().copied());
    assert_eq!(list.back(), expected.last().copied());

    let forward: Vec<_> = list.iter(arena).collect();
    assert_eq!(forward, expected, "forward walk does not match");

    let mut backward = Vec::new();
    let mut current = list.back();
    while let Some(handle) = current {
        backward.push(handle);
        current = arena.links(handle).prev();
    }
    backward.reverse();
    assert_eq!(backward, expected, "backward walk does not match");

    for (position, &handle) in expected.iter().enumerate() {
        let links = arena.links(handle);

        let expected_prev = position.checked_sub(1).map(|p| expected[p]);
        let expected_next = expected.get(position + 1).copied();

        assert_eq!(
            links.prev(),
            expected_prev,
            "element {handle} disagrees about its predecessor"
        );
        assert_eq!(
            links.next(),
            expected_next,
            "element {handle} disagrees about its successor"
        );
    }
}
