//! A growable pool of reusable fixed-size records with configurable exhaustion and
//! recycling behavior.
//!
//! This crate provides [`RecordPool`], an object pool that allocates records of type `T` in
//! bulk and recycles them through borrow/return cycles instead of allocating and freeing per
//! use. Records live at stable addresses in cache-line-aligned slabs, and borrowed records
//! can be threaded onto caller-owned [`slot_list`] lists without any extra allocation.
//!
//! # Key Features
//!
//! - **O(1) borrow and return**: Both operations are constant-time list manipulation
//! - **Stable storage**: Records never move, no matter how much the pool grows
//! - **Exhaustion policies**: Refuse, double, or grow by a fixed step via [`OomPolicy`]
//! - **Recycling order**: Hot reuse (LIFO) or even wear (FIFO) via [`RecycleDiscipline`]
//! - **Reset hook**: Optional reinitialization of every record before it can be borrowed
//! - **Caller-side lists**: The pool implements [`slot_list::LinkedSlots`] for its borrowed
//!   records
//! - **Drop policies**: Configure behavior when the pool is dropped with records on loan
//! - **Thread mobility**: The pool can be moved between threads (but not shared without
//!   synchronization)
//!
//! # Borrowing and returning
//!
//! ```rust
//! use record_pool::RecordPool;
//!
//! let mut pool = RecordPool::<String>::builder().build().unwrap();
//!
//! let handle = pool.acquire().expect("a new pool starts with free records");
//!
//! pool.get_mut(handle).push_str("in flight");
//! assert_eq!(pool.get(handle), "in flight");
//!
//! pool.release(handle);
//! ```
//!
//! # Choosing a policy
//!
//! ```rust
//! use new_zealand::nz;
//! use record_pool::{OomPolicy, RecordPool};
//!
//! // A hard budget of four records: the fifth borrow is refused.
//! let mut pool = RecordPool::<u64>::builder()
//!     .initial_capacity(nz!(4))
//!     .oom_policy(OomPolicy::None)
//!     .build()
//!     .unwrap();
//!
//! let handles: Vec<_> = (0..4).map(|_| pool.acquire().unwrap()).collect();
//! assert_eq!(pool.acquire(), None);
//!
//! for handle in handles {
//!     pool.release(handle);
//! }
//! ```
//!
//! # Keeping borrowed records on a list
//!
//! The pool hands out [`RecordHandle`] values rather than references, so the caller decides
//! how long a borrow lasts and how borrowed records are organized. Threading them onto a
//! [`slot_list::DoublyLinkedList`] costs nothing beyond the link fields the records already
//! carry:
//!
//! ```rust
//! use record_pool::RecordPool;
//! use slot_list::DoublyLinkedList;
//!
//! let mut pool = RecordPool::<u64>::builder().build().unwrap();
//! let mut active = DoublyLinkedList::new();
//!
//! let handle = pool.acquire().unwrap();
//! active.push_back(&mut pool, handle);
//!
//! // Later, once the record's work is done.
//! let finished = active.pop_front(&mut pool).unwrap();
//! pool.release(finished);
//! ```

mod builder;
mod drop_policy;
mod error;
mod free_list;
mod handle;
mod policy;
mod pool;
mod slab;
mod table;

pub use builder::*;
pub use drop_policy::*;
pub use error::*;
pub(crate) use free_list::*;
pub use handle::*;
pub use policy::*;
pub(crate) use pool::DEFAULT_INITIAL_CAPACITY;
pub use pool::RecordPool;
pub(crate) use slab::*;
pub(crate) use table::*;
