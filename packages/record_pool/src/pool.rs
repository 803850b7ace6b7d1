use std::any::type_name;
use std::fmt;
use std::num::NonZero;
use std::thread;

use new_zealand::nz;
use slot_list::{LinkedSlots, Links};

use crate::{
    DropPolicy, FreeList, OomPolicy, RecordHandle, RecordPoolBuilder, RecycleDiscipline, ResetHook,
    Result, Slab, SlabTable,
};

#[cfg(debug_assertions)]
use crate::SlotState;

/// A growable pool of reusable records of type `T`.
///
/// The pool allocates records in bulk, hands them out one at a time via
/// [`acquire()`](Self::acquire) and takes them back via [`release()`](Self::release). Records
/// are never deallocated individually; a released record is recycled to satisfy a later
/// borrow, and all backing memory is returned to the system at once when the pool is dropped.
///
/// # Key features
///
/// - **O(1) borrow and return**: both operations are constant-time list manipulation.
/// - **Stable storage**: a record never moves, no matter how much the pool grows.
/// - **Configurable exhaustion behavior**: refuse, double, or grow by a fixed step via
///   [`OomPolicy`].
/// - **Configurable recycling order**: hot reuse or even wear via [`RecycleDiscipline`].
/// - **Reset hook**: an optional function that reinitializes every record before it becomes
///   available for borrowing.
/// - **Caller-side lists**: borrowed records can be threaded onto caller-owned [`slot_list`]
///   lists, with the pool serving as the link storage.
///
/// # Memory management
///
/// Records live in cache-line-aligned slabs that are allocated whole and never resized.
/// Growing the pool adds a slab; nothing shrinks until the pool is dropped. How records
/// still on loan at drop time are treated is governed by the pool's [`DropPolicy`].
///
/// # Examples
///
/// Borrow a record, work with it, return it:
///
/// ```rust
/// use record_pool::RecordPool;
///
/// let mut pool = RecordPool::<String>::builder().build().unwrap();
///
/// let handle = pool.acquire().expect("a new pool starts with free records");
///
/// pool.get_mut(handle).push_str("hello");
/// assert_eq!(pool.get(handle), "hello");
///
/// pool.release(handle);
/// ```
///
/// Thread borrowed records onto a caller-owned list. The pool implements
/// [`LinkedSlots`], so it can serve directly as the link storage of the companion
/// [`slot_list`] crate:
///
/// ```rust
/// use record_pool::RecordPool;
/// use slot_list::DoublyLinkedList;
///
/// let mut pool = RecordPool::<u64>::builder().build().unwrap();
/// let mut active = DoublyLinkedList::new();
///
/// for value in 0..3 {
///     let handle = pool.acquire().expect("pool grows on demand by default");
///     *pool.get_mut(handle) = value;
///     active.push_back(&mut pool, handle);
/// }
///
/// let mut total = 0;
/// for handle in active.iter(&pool) {
///     total += *pool.get(handle);
/// }
/// assert_eq!(total, 3);
///
/// while let Some(handle) = active.pop_front(&mut pool) {
///     pool.release(handle);
/// }
/// ```
///
/// # Thread safety
///
/// The pool is thread-mobile ([`Send`]) when `T` is, and can be moved between threads, but
/// it is not thread-safe ([`Sync`]) and cannot be shared between threads without external
/// synchronization.
pub struct RecordPool<T> {
    /// Directory of the slabs that own the record storage.
    table: SlabTable<T>,

    /// The idle records, threaded through the link fields embedded in the records themselves.
    free: FreeList,

    /// Number of records currently in the free list.
    free_count: usize,

    /// Number of record slots across all slabs. We track this explicitly to avoid summing
    /// over the slabs every time the capacity is requested.
    total_count: usize,

    /// How the pool reacts when a borrow finds the free list empty.
    oom_policy: OomPolicy,

    /// Number of records the next growth attempt adds. Always set while the policy allows
    /// growth; never consulted otherwise.
    increment: Option<NonZero<usize>>,

    /// Applied to every record when its slab is allocated and again on every release.
    reset_hook: Option<ResetHook<T>>,

    /// Drop policy that determines how the pool handles records still on loan when dropped.
    drop_policy: DropPolicy,
}

/// Number of records in the first slab when the builder is not told otherwise.
///
/// Growth may add differently sized slabs later; this is only the starting point. The value
/// is not part of the public API and may change in a future version.
#[cfg(not(miri))]
pub(crate) const DEFAULT_INITIAL_CAPACITY: NonZero<usize> = nz!(128);

// Under Miri, we use a smaller default capacity because Miri test runtime scales by memory usage.
#[cfg(miri)]
pub(crate) const DEFAULT_INITIAL_CAPACITY: NonZero<usize> = nz!(16);

impl<T> RecordPool<T> {
    /// Creates a builder for configuring and constructing a [`RecordPool`].
    ///
    /// All configuration is optional; `RecordPool::<T>::builder().build()` yields a pool of
    /// [default capacity][crate::RecordPoolBuilder::initial_capacity] that doubles when
    /// exhausted and recycles the most recently released record first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use record_pool::{OomPolicy, RecordPool};
    ///
    /// let pool = RecordPool::<u64>::builder()
    ///     .oom_policy(OomPolicy::Error)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(pool.len(), 0);
    /// assert!(pool.available() > 0);
    /// ```
    #[inline]
    pub fn builder() -> RecordPoolBuilder<T> {
        RecordPoolBuilder::new()
    }

    /// Creates a new [`RecordPool`] with the specified configuration.
    ///
    /// This method is used internally by the builder to construct the actual pool.
    pub(crate) fn new_inner(builder: RecordPoolBuilder<T>) -> Result<Self>
    where
        T: Default,
    {
        let increment = match builder.oom_policy {
            OomPolicy::None | OomPolicy::Error => None,
            OomPolicy::Double => Some(
                builder
                    .growth_increment
                    .unwrap_or(builder.initial_capacity),
            ),
            OomPolicy::Incremental => Some(
                builder
                    .growth_increment
                    .expect("the builder validated that the increment is present"),
            ),
        };

        let mut pool = Self {
            table: SlabTable::new(),
            free: FreeList::new(builder.recycle_discipline),
            free_count: 0,
            total_count: 0,
            oom_policy: builder.oom_policy,
            increment,
            reset_hook: builder.reset_hook,
            drop_policy: builder.drop_policy,
        };

        pool.grow(builder.initial_capacity)?;

        Ok(pool)
    }

    /// Borrows a record from the pool.
    ///
    /// The returned handle stays valid until it is passed to [`release()`](Self::release),
    /// no matter how much the pool grows in between. Which free record satisfies the borrow
    /// is determined by the pool's [`RecycleDiscipline`].
    ///
    /// If no record is free, the pool's [`OomPolicy`] is applied exactly once: it either
    /// refuses or attempts to grow by one slab. Returns `None` when the policy refuses and
    /// when the growth attempt fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use new_zealand::nz;
    /// use record_pool::{OomPolicy, RecordPool};
    ///
    /// let mut pool = RecordPool::<u32>::builder()
    ///     .initial_capacity(nz!(2))
    ///     .oom_policy(OomPolicy::None)
    ///     .build()
    ///     .unwrap();
    ///
    /// let first = pool.acquire().unwrap();
    /// let second = pool.acquire().unwrap();
    ///
    /// // This policy does not allow the pool to grow past its initial two records.
    /// assert_eq!(pool.acquire(), None);
    ///
    /// pool.release(first);
    /// assert!(pool.acquire().is_some());
    /// # pool.release(second);
    /// ```
    #[must_use]
    pub fn acquire(&mut self) -> Option<RecordHandle>
    where
        T: Default,
    {
        if self.free.is_empty() {
            self.apply_growth_policy();
        }

        let handle = self.free.take(&mut self.table)?;

        // Cannot underflow because the free list just yielded a record, so at least
        // one record was counted free.
        self.free_count = self.free_count.wrapping_sub(1);

        #[cfg(debug_assertions)]
        self.table.slot_mut(handle).set_state(SlotState::Borrowed);

        Some(handle)
    }

    /// Returns a borrowed record to the pool.
    ///
    /// The reset hook, if one was configured, runs against the record before it rejoins the
    /// free records. The handle must not be used again after this call; the next
    /// [`acquire()`](Self::acquire) may hand the same record to somebody else.
    ///
    /// # Example
    ///
    /// ```rust
    /// use record_pool::RecordPool;
    ///
    /// let mut pool = RecordPool::<Vec<u8>>::builder()
    ///     .reset_hook(|buffer| buffer.clear())
    ///     .build()
    ///     .unwrap();
    ///
    /// let handle = pool.acquire().unwrap();
    /// pool.get_mut(handle).extend_from_slice(b"scratch");
    ///
    /// // The hook clears the buffer before anyone can borrow it again.
    /// pool.release(handle);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the handle does not name a record slot of this pool. Debug builds also
    /// panic if the record is not currently on loan, which catches double releases.
    pub fn release(&mut self, handle: RecordHandle) {
        let slot = self.table.slot_mut(handle);

        #[cfg(debug_assertions)]
        assert!(
            matches!(slot.state(), SlotState::Borrowed),
            "{handle:?} refers to a record that is not currently on loan"
        );

        if let Some(reset) = self.reset_hook.as_mut() {
            reset(&mut slot.value);
        }

        #[cfg(debug_assertions)]
        slot.set_state(SlotState::Free);

        self.free.give(&mut self.table, handle);

        // Cannot overflow because the free list never holds more records than exist.
        self.free_count = self.free_count.wrapping_add(1);
    }

    /// Returns a shared reference to a borrowed record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use record_pool::RecordPool;
    ///
    /// let mut pool = RecordPool::<u64>::builder().build().unwrap();
    ///
    /// let handle = pool.acquire().unwrap();
    /// *pool.get_mut(handle) = 1234;
    ///
    /// assert_eq!(*pool.get(handle), 1234);
    /// # pool.release(handle);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the handle does not name a record slot of this pool. Debug builds also
    /// panic if the record is not currently on loan.
    #[must_use]
    pub fn get(&self, handle: RecordHandle) -> &T {
        let slot = self.table.slot(handle);

        #[cfg(debug_assertions)]
        assert!(
            matches!(slot.state(), SlotState::Borrowed),
            "{handle:?} refers to a record that is not currently on loan"
        );

        &slot.value
    }

    /// Returns an exclusive reference to a borrowed record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use record_pool::RecordPool;
    ///
    /// let mut pool = RecordPool::<String>::builder().build().unwrap();
    ///
    /// let handle = pool.acquire().unwrap();
    /// pool.get_mut(handle).push_str("in progress");
    /// # pool.release(handle);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the handle does not name a record slot of this pool. Debug builds also
    /// panic if the record is not currently on loan.
    #[must_use]
    pub fn get_mut(&mut self, handle: RecordHandle) -> &mut T {
        let slot = self.table.slot_mut(handle);

        #[cfg(debug_assertions)]
        assert!(
            matches!(slot.state(), SlotState::Borrowed),
            "{handle:?} refers to a record that is not currently on loan"
        );

        &mut slot.value
    }

    /// The number of records currently on loan.
    ///
    /// # Example
    ///
    /// ```rust
    /// use record_pool::RecordPool;
    ///
    /// let mut pool = RecordPool::<u32>::builder().build().unwrap();
    /// assert_eq!(pool.len(), 0);
    ///
    /// let handle = pool.acquire().unwrap();
    /// assert_eq!(pool.len(), 1);
    ///
    /// pool.release(handle);
    /// assert_eq!(pool.len(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        // Cannot underflow because the free count never exceeds the total count.
        self.total_count.wrapping_sub(self.free_count)
    }

    /// Whether the pool has no records on loan.
    ///
    /// An empty pool still holds its full record capacity, ready to be borrowed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use record_pool::RecordPool;
    ///
    /// let mut pool = RecordPool::<String>::builder().build().unwrap();
    /// assert!(pool.is_empty());
    ///
    /// let handle = pool.acquire().unwrap();
    /// assert!(!pool.is_empty());
    ///
    /// pool.release(handle);
    /// assert!(pool.is_empty());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The total number of records the pool holds, on loan or free.
    ///
    /// The capacity grows when a borrow exhausts the pool under a growth-permitting
    /// [`OomPolicy`] and when [`reserve()`](Self::reserve) asks for more records. It never
    /// shrinks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use new_zealand::nz;
    /// use record_pool::RecordPool;
    ///
    /// let pool = RecordPool::<u32>::builder()
    ///     .initial_capacity(nz!(16))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(pool.capacity(), 16);
    /// ```
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        #[cfg(debug_assertions)]
        assert_eq!(self.total_count, self.table.total_capacity());

        self.total_count
    }

    /// The number of records that can be borrowed without growing the pool.
    ///
    /// # Example
    ///
    /// ```rust
    /// use record_pool::RecordPool;
    ///
    /// let mut pool = RecordPool::<u32>::builder().build().unwrap();
    /// assert_eq!(pool.available(), pool.capacity());
    ///
    /// let handle = pool.acquire().unwrap();
    /// assert_eq!(pool.available(), pool.capacity() - 1);
    /// # pool.release(handle);
    /// ```
    #[must_use]
    #[inline]
    pub fn available(&self) -> usize {
        self.free_count
    }

    /// Ensures that at least `additional` records are free to borrow, growing the pool by
    /// the shortfall if there are fewer.
    ///
    /// This is explicit capacity management and ignores the pool's [`OomPolicy`] entirely:
    /// it neither consults the policy nor alters the growth step the policy will use later.
    /// Does nothing if enough records are already free.
    ///
    /// # Example
    ///
    /// ```rust
    /// use record_pool::{OomPolicy, RecordPool};
    ///
    /// let mut pool = RecordPool::<u32>::builder()
    ///     .oom_policy(OomPolicy::None)
    ///     .build()
    ///     .unwrap();
    ///
    /// // The policy never grows the pool on demand, but an explicit reservation may.
    /// pool.reserve(500).unwrap();
    ///
    /// assert!(pool.available() >= 500);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`][crate::Error::AllocationFailed] if backing
    /// memory for the shortfall cannot be obtained. The pool is unchanged in that case.
    pub fn reserve(&mut self, additional: usize) -> Result<()>
    where
        T: Default,
    {
        let shortfall = additional.saturating_sub(self.free_count);

        let Some(shortfall) = NonZero::new(shortfall) else {
            return Ok(());
        };

        self.grow(shortfall)
    }

    /// The exhaustion policy the pool was configured with.
    #[must_use]
    #[inline]
    pub fn oom_policy(&self) -> OomPolicy {
        self.oom_policy
    }

    /// The recycling order the pool was configured with.
    #[must_use]
    #[inline]
    pub fn recycle_discipline(&self) -> RecycleDiscipline {
        self.free.discipline()
    }

    /// Reacts to an exhausted borrow according to the configured policy.
    ///
    /// Runs at most one growth attempt. Whether the attempt succeeded is visible to the
    /// caller only through the free list no longer being empty.
    fn apply_growth_policy(&mut self)
    where
        T: Default,
    {
        match self.oom_policy {
            OomPolicy::None | OomPolicy::Error => {}
            OomPolicy::Double => {
                let increment = self
                    .increment
                    .expect("the increment is always set while the policy allows growth");

                if self.grow(increment).is_ok() {
                    self.increment = Some(increment.saturating_mul(nz!(2)));
                }
            }
            OomPolicy::Incremental => {
                let increment = self
                    .increment
                    .expect("the increment is always set while the policy allows growth");

                // Growth failure is not an acquire error; the caller just finds the pool
                // still exhausted.
                _ = self.grow(increment);
            }
        }
    }

    /// Adds one slab of `additional` records, all of them free.
    ///
    /// Every new record is default-constructed, passed to the reset hook if one is
    /// configured, and given to the free list in slot order. On failure nothing observable
    /// changes.
    fn grow(&mut self, additional: NonZero<usize>) -> Result<()>
    where
        T: Default,
    {
        let slab = Slab::new(additional)?;

        let slab_index = self.table.slab_count();
        self.table.try_push(slab)?;

        for index_in_slab in 0..additional.get() {
            let handle = RecordHandle {
                slab_index,
                index_in_slab,
            };

            if let Some(reset) = self.reset_hook.as_mut() {
                reset(&mut self.table.slot_mut(handle).value);
            }

            self.free.give(&mut self.table, handle);
        }

        // Cannot overflow because we just allocated this many record slots in one slab.
        self.free_count = self.free_count.wrapping_add(additional.get());
        self.total_count = self.total_count.wrapping_add(additional.get());

        #[cfg(debug_assertions)]
        self.integrity_check();

        Ok(())
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    /// Verifies that the free list and the per-record state tags agree with the counters.
    ///
    /// This method is only available in debug builds; it runs after every growth and is
    /// called from tests.
    #[allow(
        clippy::arithmetic_side_effects,
        reason = "integrity check counts what it walks"
    )]
    pub(crate) fn integrity_check(&self) {
        let mut reachable = 0_usize;
        let mut previous: Option<RecordHandle> = None;
        let mut cursor = self.free.cursor();

        while let Some(handle) = cursor.advance(&self.table) {
            reachable += 1;

            assert!(
                matches!(self.table.slot(handle).state(), SlotState::Free),
                "{handle:?} is reachable through the free list but is not tagged free"
            );

            if matches!(self.free, FreeList::Lifo(_)) {
                assert!(
                    self.table.links(handle).prev() == previous,
                    "{handle:?} disagrees with its predecessor about the list order"
                );
            }

            previous = Some(handle);
        }

        assert!(
            reachable == self.free_count,
            "the free list reaches {reachable} records but the pool counts {} free",
            self.free_count
        );

        assert!(
            self.free_count <= self.total_count,
            "the pool counts more free records ({}) than exist ({})",
            self.free_count,
            self.total_count
        );

        assert!(
            self.total_count == self.table.total_capacity(),
            "the pool counts {} record slots but the slabs hold {}",
            self.total_count,
            self.table.total_capacity()
        );
    }
}

/// Lets callers thread records they have borrowed onto their own [`slot_list`] lists,
/// with the pool itself serving as the link storage.
///
/// Only records currently on loan may be linked this way; debug builds verify this. A record
/// must be unlinked from any caller-owned list before it is released.
impl<T> LinkedSlots for RecordPool<T> {
    type Handle = RecordHandle;

    fn links(&self, handle: RecordHandle) -> &Links<RecordHandle> {
        let slot = self.table.slot(handle);

        #[cfg(debug_assertions)]
        assert!(
            matches!(slot.state(), SlotState::Borrowed),
            "{handle:?} must be on loan to be linked into a caller's list"
        );

        &slot.links
    }

    fn links_mut(&mut self, handle: RecordHandle) -> &mut Links<RecordHandle> {
        let slot = self.table.slot_mut(handle);

        #[cfg(debug_assertions)]
        assert!(
            matches!(slot.state(), SlotState::Borrowed),
            "{handle:?} must be on loan to be linked into a caller's list"
        );

        &mut slot.links
    }
}

impl<T> Drop for RecordPool<T> {
    fn drop(&mut self) {
        // If we are already panicking, we do not want to panic again because that will
        // simply obscure whatever the original panic was, leading to debug difficulties.
        if !thread::panicking() && matches!(self.drop_policy, DropPolicy::MustNotDropItems) {
            assert!(
                self.is_empty(),
                "dropped a RecordPool of {} with {} records on loan - this is forbidden by DropPolicy::MustNotDropItems",
                type_name::<T>(),
                self.len()
            );
        }
    }
}

impl<T> fmt::Debug for RecordPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordPool")
            .field("record_type", &format_args!("{}", type_name::<T>()))
            .field("capacity", &self.total_count)
            .field("available", &self.free_count)
            .field("oom_policy", &self.oom_policy)
            .field("increment", &self.increment)
            .field("drop_policy", &self.drop_policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(
    clippy::arithmetic_side_effects,
    reason = "tests focus on succinct code and do not need to tick all the boxes"
)]
mod tests {
    use std::rc::Rc;

    use new_zealand::nz;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    assert_impl_all!(RecordPool<u32>: Send);
    assert_not_impl_any!(RecordPool<u32>: Sync);
    assert_not_impl_any!(RecordPool<Rc<u8>>: Send);

    #[test]
    fn smoke_test() {
        let mut pool = RecordPool::<String>::builder().build().unwrap();

        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();

        pool.get_mut(a).push_str("first");
        pool.get_mut(b).push_str("second");

        assert_eq!(pool.len(), 2);
        assert!(!pool.is_empty());

        assert_eq!(pool.get(a), "first");
        assert_eq!(pool.get(b), "second");

        pool.release(a);
        assert_eq!(pool.len(), 1);

        pool.release(b);
        assert!(pool.is_empty());
    }

    #[test]
    fn starts_with_default_capacity() {
        let pool = RecordPool::<u8>::builder().build().unwrap();

        assert_eq!(pool.capacity(), DEFAULT_INITIAL_CAPACITY.get());
        assert_eq!(pool.available(), DEFAULT_INITIAL_CAPACITY.get());
        assert_eq!(pool.len(), 0);
        assert!(pool.is_empty());
    }

    #[test]
    fn exhaustion_without_growth_yields_none() {
        let mut pool = RecordPool::<u32>::builder()
            .initial_capacity(nz!(2))
            .oom_policy(OomPolicy::None)
            .build()
            .unwrap();

        let first = pool.acquire().unwrap();
        let _second = pool.acquire().unwrap();

        assert_eq!(pool.acquire(), None);
        assert_eq!(pool.capacity(), 2);

        pool.release(first);
        assert!(pool.acquire().is_some());
    }

    #[test]
    fn grows_when_exhausted_by_default() {
        let mut pool = RecordPool::<u32>::builder()
            .initial_capacity(nz!(1))
            .build()
            .unwrap();

        let _first = pool.acquire().unwrap();
        let second = pool.acquire();

        assert!(second.is_some());
        assert_eq!(pool.capacity(), 2);
    }

    #[test]
    fn values_survive_growth() {
        let mut pool = RecordPool::<u32>::builder()
            .initial_capacity(nz!(1))
            .build()
            .unwrap();

        let first = pool.acquire().unwrap();
        *pool.get_mut(first) = 7;

        let mut handles = Vec::new();
        for _ in 0..10 {
            handles.push(pool.acquire().unwrap());
        }

        assert_eq!(*pool.get(first), 7);
        assert!(pool.capacity() > 1);
    }

    #[test]
    fn reserve_makes_records_available_regardless_of_policy() {
        let mut pool = RecordPool::<u32>::builder()
            .initial_capacity(nz!(2))
            .oom_policy(OomPolicy::None)
            .build()
            .unwrap();

        pool.reserve(10).unwrap();

        assert!(pool.available() >= 10);

        for _ in 0..10 {
            assert!(pool.acquire().is_some());
        }
    }

    #[test]
    fn reserve_with_sufficient_capacity_does_nothing() {
        let mut pool = RecordPool::<u32>::builder()
            .initial_capacity(nz!(4))
            .build()
            .unwrap();

        pool.reserve(3).unwrap();
        assert_eq!(pool.capacity(), 4);

        pool.reserve(0).unwrap();
        assert_eq!(pool.capacity(), 4);
    }

    #[test]
    fn reserve_counts_only_free_records() {
        let mut pool = RecordPool::<u32>::builder()
            .initial_capacity(nz!(4))
            .build()
            .unwrap();

        let _loaned = pool.acquire().unwrap();

        pool.reserve(4).unwrap();

        assert!(pool.available() >= 4);
        assert_eq!(pool.capacity(), 5);
    }

    #[test]
    fn reports_configuration() {
        let pool = RecordPool::<u32>::builder()
            .oom_policy(OomPolicy::Incremental)
            .growth_increment(nz!(3))
            .recycle_discipline(RecycleDiscipline::Fifo)
            .build()
            .unwrap();

        assert_eq!(pool.oom_policy(), OomPolicy::Incremental);
        assert_eq!(pool.recycle_discipline(), RecycleDiscipline::Fifo);
    }

    #[test]
    fn zero_sized_records_work() {
        let mut pool = RecordPool::<()>::builder()
            .initial_capacity(nz!(2))
            .build()
            .unwrap();

        let first = pool.acquire().unwrap();
        let second = pool.acquire().unwrap();

        assert_ne!(first, second);

        pool.release(first);
        pool.release(second);
    }

    #[test]
    #[should_panic(expected = "does not name a slab")]
    fn unknown_handle_panics() {
        let pool = RecordPool::<u32>::builder().build().unwrap();

        let bogus = RecordHandle {
            slab_index: 100,
            index_in_slab: 0,
        };

        _ = pool.get(bogus);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "not currently on loan")]
    fn double_release_panics() {
        let mut pool = RecordPool::<u32>::builder().build().unwrap();

        let handle = pool.acquire().unwrap();

        pool.release(handle);
        pool.release(handle);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "not currently on loan")]
    fn get_of_free_record_panics() {
        let mut pool = RecordPool::<u32>::builder().build().unwrap();

        let handle = pool.acquire().unwrap();
        pool.release(handle);

        _ = pool.get(handle);
    }

    #[test]
    #[should_panic(expected = "forbidden by DropPolicy")]
    fn drop_loaned_with_forbidden_to_drop_policy_panics() {
        let mut pool = RecordPool::<u32>::builder()
            .drop_policy(DropPolicy::MustNotDropItems)
            .build()
            .unwrap();

        _ = pool.acquire().unwrap();
    }

    #[test]
    fn drop_idle_with_forbidden_to_drop_policy_ok() {
        let mut pool = RecordPool::<u32>::builder()
            .drop_policy(DropPolicy::MustNotDropItems)
            .build()
            .unwrap();

        let handle = pool.acquire().unwrap();
        pool.release(handle);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn integrity_holds_after_mixed_operations() {
        let mut pool = RecordPool::<u32>::builder()
            .initial_capacity(nz!(4))
            .recycle_discipline(RecycleDiscipline::Lifo)
            .build()
            .unwrap();

        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        pool.release(a);
        let _c = pool.acquire().unwrap();
        pool.release(b);

        pool.integrity_check();
    }

    #[test]
    fn debug_output_names_the_record_type() {
        let pool = RecordPool::<u64>::builder().build().unwrap();

        let output = format!("{pool:?}");
        assert!(output.contains("u64"));
    }
}
