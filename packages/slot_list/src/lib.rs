//! Linked-list primitives that keep their state inside the caller's own slot storage.
//!
//! The lists in this crate never allocate nodes. Each participating slot embeds a
//! [`Links`] field; a list is just an anchor naming the front and back slots, and every
//! operation receives the storage (anything implementing [`LinkedSlots`]) so it can rewire
//! those embedded fields. Handles are plain values, typically indices, so there are no
//! interior pointers to invalidate when the storage moves or is torn down.
//!
//! Two disciplines are provided:
//!
//! - [`FifoQueue`]: singly-linked, insertion order, O(1) append and O(1) removal at the
//!   front only. The shape to use for oldest-first recycling.
//! - [`DoublyLinkedList`]: doubly-linked with O(1) insertion and removal at any position,
//!   including relative to a neighbor. The shape to use for newest-first recycling and for
//!   bookkeeping lists that elements leave in arbitrary order.
//!
//! Both support traversal via a borrowing [`Iter`] and via a [`Cursor`] that pre-captures
//! each element's successor, so the element just visited can be unlinked without derailing
//! the walk.
//!
//! # Examples
//!
//! ```
//! use slot_list::{DoublyLinkedList, FifoQueue, LinkedSlots, Links};
//!
//! /// Task slots with an embedded link field each.
//! struct Tasks {
//!     slots: Vec<(String, Links<usize>)>,
//! }
//!
//! impl LinkedSlots for Tasks {
//!     type Handle = usize;
//!
//!     fn links(&self, handle: usize) -> &Links<usize> {
//!         &self.slots[handle].1
//!     }
//!
//!     fn links_mut(&mut self, handle: usize) -> &mut Links<usize> {
//!         &mut self.slots[handle].1
//!     }
//! }
//!
//! let mut tasks = Tasks {
//!     slots: vec![
//!         ("compile".to_string(), Links::default()),
//!         ("link".to_string(), Links::default()),
//!         ("package".to_string(), Links::default()),
//!     ],
//! };
//!
//! // Queue the tasks in submission order.
//! let mut pending = FifoQueue::new();
//! pending.push_back(&mut tasks, 0);
//! pending.push_back(&mut tasks, 1);
//! pending.push_back(&mut tasks, 2);
//!
//! // Move them onto an "in progress" list as they start.
//! let mut in_progress = DoublyLinkedList::new();
//! while let Some(task) = pending.pop_front(&mut tasks) {
//!     in_progress.push_back(&mut tasks, task);
//! }
//!
//! // The middle task finishes first; unlink it directly.
//! in_progress.remove(&mut tasks, 1);
//!
//! let order: Vec<_> = in_progress.iter(&tasks).collect();
//! assert_eq!(order, vec![0, 2]);
//! ```
//!
//! # Thread safety
//!
//! Lists and cursors are plain data; they are as thread-mobile as their handles. There is no
//! internal synchronization, so a list and its storage must be confined to one thread or
//! guarded externally as a unit.

mod cursor;
mod doubly;
mod fifo;
mod link;
mod storage;

pub use cursor::*;
pub use doubly::*;
pub use fifo::*;
pub use link::*;
pub use storage::*;

#[cfg(test)]
mod test_arena;
