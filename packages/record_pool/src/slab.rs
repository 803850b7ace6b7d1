use std::alloc::{Layout, alloc, dealloc};
use std::fmt;
use std::num::NonZero;
use std::ptr;
use std::ptr::NonNull;

use slot_list::Links;

use crate::{Error, RecordHandle, Result};

/// Alignment of every slab allocation. Matches the cache line size of mainstream processors
/// so records handed to independent consumers do not share a line with a neighboring slab.
const SLAB_ALIGNMENT: usize = 64;

/// Whether a record is currently in the free list or on loan to the caller.
///
/// This tag exists only in debug builds. Release builds track nothing per record beyond
/// free-list membership.
#[cfg(debug_assertions)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SlotState {
    Free,
    Borrowed,
}

/// One record slot: the embedded link field, the payload, and (in debug builds) the loan
/// state tag.
pub(crate) struct Slot<T> {
    /// Free-list and caller-list membership both run through this field.
    pub(crate) links: Links<RecordHandle>,

    #[cfg(debug_assertions)]
    state: SlotState,

    /// The caller-visible record payload.
    pub(crate) value: T,
}

impl<T> Slot<T> {
    fn new(value: T) -> Self {
        Self {
            links: Links::default(),
            #[cfg(debug_assertions)]
            state: SlotState::Free,
            value,
        }
    }

    #[cfg(debug_assertions)]
    pub(crate) fn state(&self) -> SlotState {
        self.state
    }

    #[cfg(debug_assertions)]
    pub(crate) fn set_state(&mut self, state: SlotState) {
        self.state = state;
    }
}

/// Stores a fixed number of record slots in one contiguous, cache-line-aligned allocation.
///
/// A slab is allocated once, never resized, and owned by its pool for the pool's entire
/// lifetime. Every slot is initialized at allocation time, so the pool can hand out any of
/// them without further construction work.
pub(crate) struct Slab<T> {
    /// Number of slots in the slab.
    capacity: NonZero<usize>,

    /// The layout the backing memory was allocated with, needed again at deallocation.
    array_layout: Layout,

    /// Base of the contiguous slot array.
    first_slot_ptr: NonNull<Slot<T>>,
}

impl<T> Slab<T> {
    /// Allocates a slab of `capacity` default-constructed slots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the backing memory cannot be obtained or the
    /// requested capacity does not fit in a single allocation.
    pub(crate) fn new(capacity: NonZero<usize>) -> Result<Self>
    where
        T: Default,
    {
        let Ok(array_layout) = Layout::array::<Slot<T>>(capacity.get()) else {
            return Err(Error::AllocationFailed {
                records: capacity.get(),
            });
        };

        let Ok(array_layout) = array_layout.align_to(SLAB_ALIGNMENT) else {
            return Err(Error::AllocationFailed {
                records: capacity.get(),
            });
        };

        // SAFETY: array_layout has nonzero size because Slot embeds a link field, so even a
        // zero-sized payload yields nonzero slots, and capacity is nonzero.
        let allocation = unsafe { alloc(array_layout) };

        let Some(first_slot_ptr) = NonNull::new(allocation) else {
            return Err(Error::AllocationFailed {
                records: capacity.get(),
            });
        };

        let first_slot_ptr = first_slot_ptr.cast::<Slot<T>>();

        for index in 0..capacity.get() {
            // SAFETY: index is bounded by capacity, for which we allocated room above.
            let slot_ptr = unsafe { first_slot_ptr.add(index) };

            // SAFETY: slot_ptr points into our fresh allocation, properly aligned for
            // Slot<T> by the array layout and holding no initialized value yet.
            unsafe {
                ptr::write(slot_ptr.as_ptr(), Slot::new(T::default()));
            }
        }

        Ok(Self {
            capacity,
            array_layout,
            first_slot_ptr,
        })
    }

    /// Returns the number of slots in the slab.
    #[must_use]
    pub(crate) fn capacity(&self) -> NonZero<usize> {
        self.capacity
    }

    /// Returns the slot at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub(crate) fn slot(&self, index: usize) -> &Slot<T> {
        assert!(
            index < self.capacity.get(),
            "slot index {index} out of bounds in slab of capacity {}",
            self.capacity.get()
        );

        // SAFETY: The index is bounds-checked above, so the pointer stays within our
        // allocation.
        let slot_ptr = unsafe { self.first_slot_ptr.add(index) };

        // SAFETY: Every slot was initialized in new() and stays valid until the slab is
        // dropped. The returned lifetime is tied to &self, upholding aliasing rules.
        unsafe { slot_ptr.as_ref() }
    }

    /// Returns the slot at the given index for modification.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[expect(clippy::needless_pass_by_ref_mut, reason = "false positive")]
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Slot<T> {
        assert!(
            index < self.capacity.get(),
            "slot index {index} out of bounds in slab of capacity {}",
            self.capacity.get()
        );

        // SAFETY: The index is bounds-checked above, so the pointer stays within our
        // allocation.
        let mut slot_ptr = unsafe { self.first_slot_ptr.add(index) };

        // SAFETY: Every slot was initialized in new() and stays valid until the slab is
        // dropped. We hold &mut self, so the exclusive borrow is unique.
        unsafe { slot_ptr.as_mut() }
    }
}

impl<T> Drop for Slab<T> {
    fn drop(&mut self) {
        for index in 0..self.capacity.get() {
            // SAFETY: index is bounded by capacity, so the pointer stays within our
            // allocation.
            let slot_ptr = unsafe { self.first_slot_ptr.add(index) };

            // SAFETY: Every slot was initialized in new() and has not been dropped yet;
            // each is dropped exactly once here, before the memory is released.
            unsafe {
                ptr::drop_in_place(slot_ptr.as_ptr());
            }
        }

        // SAFETY: The memory was allocated in new() with this same layout and has not been
        // deallocated yet.
        unsafe {
            dealloc(self.first_slot_ptr.as_ptr().cast(), self.array_layout);
        }
    }
}

impl<T> fmt::Debug for Slab<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slab")
            .field("capacity", &self.capacity)
            .field("array_layout", &self.array_layout)
            .field("first_slot_ptr", &self.first_slot_ptr)
            .finish()
    }
}

// SAFETY: Slab owns its allocation outright; the raw pointer is never shared outside the
// slab and all access flows through &self/&mut self methods, so Rust's borrowing rules
// govern every touch of the memory. Moving a slab to another thread is therefore safe
// whenever its items may move.
unsafe impl<T: Send> Send for Slab<T> {}

#[cfg(test)]
#[allow(
    clippy::arithmetic_side_effects,
    clippy::modulo_arithmetic,
    reason = "test code doesn't need the same safety rigor as production code"
)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use new_zealand::nz;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    assert_impl_all!(Slab<u64>: Send);
    assert_not_impl_any!(Slab<u64>: Sync);
    assert_not_impl_any!(Slab<Rc<u64>>: Send);

    #[test]
    fn slots_start_default_constructed_and_detached() {
        let slab = Slab::<u64>::new(nz!(3)).unwrap();

        for index in 0..3 {
            let slot = slab.slot(index);

            assert_eq!(slot.value, 0);
            assert_eq!(slot.links.next(), None);
            assert_eq!(slot.links.prev(), None);
        }
    }

    #[test]
    fn slot_modifications_persist() {
        let mut slab = Slab::<u64>::new(nz!(2)).unwrap();

        slab.slot_mut(0).value = 42;
        slab.slot_mut(1).value = 43;

        assert_eq!(slab.slot(0).value, 42);
        assert_eq!(slab.slot(1).value, 43);
    }

    #[test]
    fn allocation_is_cache_line_aligned() {
        let slab = Slab::<u64>::new(nz!(1)).unwrap();

        let address = slab.first_slot_ptr.addr().get();
        assert_eq!(address % SLAB_ALIGNMENT, 0);
    }

    #[test]
    fn capacity_reports_the_requested_size() {
        let slab = Slab::<u64>::new(nz!(17)).unwrap();

        assert_eq!(slab.capacity(), nz!(17));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_slot_panics() {
        let slab = Slab::<u64>::new(nz!(2)).unwrap();

        _ = slab.slot(2);
    }

    #[test]
    fn dropping_the_slab_drops_every_slot() {
        #[derive(Default)]
        struct CountsDrops {
            drops: Option<Rc<Cell<usize>>>,
        }

        impl Drop for CountsDrops {
            fn drop(&mut self) {
                if let Some(drops) = &self.drops {
                    drops.set(drops.get() + 1);
                }
            }
        }

        let drops = Rc::new(Cell::new(0));

        let mut slab = Slab::<CountsDrops>::new(nz!(4)).unwrap();
        for index in 0..4 {
            slab.slot_mut(index).value.drops = Some(Rc::clone(&drops));
        }

        drop(slab);

        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn zero_sized_payloads_are_supported() {
        let slab = Slab::<()>::new(nz!(8)).unwrap();

        assert_eq!(slab.capacity(), nz!(8));
        assert_eq!(slab.slot(7).links.next(), None);
    }
}
