use std::fmt::Debug;

use crate::Links;

/// Storage whose slots embed a [`Links`] field, making them eligible for membership in the
/// list types of this crate.
///
/// The lists in this crate do not own any nodes. They record handles into a storage that the
/// caller owns, and every list operation receives that storage as an argument so it can read
/// and rewire the link fields of the slots involved. A handle is whatever the storage uses to
/// identify a slot, typically an index.
///
/// # Contract
///
/// * [`links()`][Self::links] must resolve the same handle to the same field every time; the
///   mapping is structural and side-effect free.
/// * All operations on any one list must be given the same storage that its slots live in.
///   Mixing storages corrupts both lists involved.
///
/// # Examples
///
/// ```
/// use slot_list::{LinkedSlots, Links};
///
/// /// Storage where every slot is a name plus its link field.
/// struct Roster {
///     slots: Vec<(String, Links<usize>)>,
/// }
///
/// impl LinkedSlots for Roster {
///     type Handle = usize;
///
///     fn links(&self, handle: usize) -> &Links<usize> {
///         &self.slots[handle].1
///     }
///
///     fn links_mut(&mut self, handle: usize) -> &mut Links<usize> {
///         &mut self.slots[handle].1
///     }
/// }
/// ```
pub trait LinkedSlots {
    /// Identifies one slot of the storage. Handles are plain values; copying or forgetting
    /// them has no effect on the slots they name.
    type Handle: Copy + Eq + Debug;

    /// Returns the link field of the identified slot.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not identify a slot of this storage.
    fn links(&self, handle: Self::Handle) -> &Links<Self::Handle>;

    /// Returns the link field of the identified slot for rewiring.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not identify a slot of this storage.
    fn links_mut(&mut self, handle: Self::Handle) -> &mut Links<Self::Handle>;
}
