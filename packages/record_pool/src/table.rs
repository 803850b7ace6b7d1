use std::fmt;

use slot_list::{LinkedSlots, Links};

use crate::{Error, RecordHandle, Result, Slab, Slot};

/// Growable directory of the slabs a pool owns.
///
/// Record handles are two-level coordinates into this directory: the slab, then the slot
/// within it. Slabs are only ever appended, so coordinates handed out once stay valid for the
/// pool's entire lifetime. The directory itself grows by the usual amortized doubling of its
/// backing storage; only the reservation step can fail, and it fails without losing anything.
pub(crate) struct SlabTable<T> {
    slabs: Vec<Slab<T>>,
}

impl<T> SlabTable<T> {
    pub(crate) fn new() -> Self {
        Self { slabs: Vec::new() }
    }

    /// Returns the number of slabs in the directory.
    #[must_use]
    pub(crate) fn slab_count(&self) -> usize {
        self.slabs.len()
    }

    /// Returns the total number of record slots across all slabs.
    #[cfg(debug_assertions)]
    #[must_use]
    pub(crate) fn total_capacity(&self) -> usize {
        self.slabs.iter().map(|slab| slab.capacity().get()).sum()
    }

    /// Appends a slab to the directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the directory cannot reserve room for the new
    /// entry. The slab is discarded and the directory is unchanged.
    pub(crate) fn try_push(&mut self, slab: Slab<T>) -> Result<()> {
        if self.slabs.try_reserve(1).is_err() {
            return Err(Error::AllocationFailed {
                records: slab.capacity().get(),
            });
        }

        self.slabs.push(slab);

        Ok(())
    }

    /// Resolves a handle to its slot.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not name a slot of this directory.
    pub(crate) fn slot(&self, handle: RecordHandle) -> &Slot<T> {
        self.slabs
            .get(handle.slab_index)
            .unwrap_or_else(|| panic!("{handle:?} does not name a slab of this pool"))
            .slot(handle.index_in_slab)
    }

    /// Resolves a handle to its slot for modification.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not name a slot of this directory.
    pub(crate) fn slot_mut(&mut self, handle: RecordHandle) -> &mut Slot<T> {
        self.slabs
            .get_mut(handle.slab_index)
            .unwrap_or_else(|| panic!("{handle:?} does not name a slab of this pool"))
            .slot_mut(handle.index_in_slab)
    }
}

impl<T> LinkedSlots for SlabTable<T> {
    type Handle = RecordHandle;

    fn links(&self, handle: RecordHandle) -> &Links<RecordHandle> {
        &self.slot(handle).links
    }

    fn links_mut(&mut self, handle: RecordHandle) -> &mut Links<RecordHandle> {
        &mut self.slot_mut(handle).links
    }
}

impl<T> fmt::Debug for SlabTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlabTable")
            .field("slabs", &self.slabs)
            .finish()
    }
}
