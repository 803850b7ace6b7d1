use std::any::type_name;
use std::fmt;
use std::num::NonZero;

use crate::{
    DEFAULT_INITIAL_CAPACITY, DropPolicy, OomPolicy, RecordPool, RecycleDiscipline, Result,
};

/// Reinitializer applied to a record when its slab is allocated and again on every release.
pub(crate) type ResetHook<T> = Box<dyn FnMut(&mut T) + Send>;

/// Builder for creating an instance of [`RecordPool`].
///
/// All configuration is optional. The default pool holds
/// [128 records][RecordPool::capacity], doubles when exhausted, recycles the most recently
/// released record first, and tolerates being dropped with records still on loan.
///
/// # Examples
///
/// ```
/// use new_zealand::nz;
/// use record_pool::{OomPolicy, RecordPool, RecycleDiscipline};
///
/// let pool = RecordPool::<u64>::builder()
///     .initial_capacity(nz!(32))
///     .oom_policy(OomPolicy::Incremental)
///     .growth_increment(nz!(16))
///     .recycle_discipline(RecycleDiscipline::Fifo)
///     .build()
///     .unwrap();
///
/// assert_eq!(pool.capacity(), 32);
/// ```
#[must_use]
pub struct RecordPoolBuilder<T> {
    pub(crate) initial_capacity: NonZero<usize>,
    pub(crate) oom_policy: OomPolicy,
    pub(crate) growth_increment: Option<NonZero<usize>>,
    pub(crate) recycle_discipline: RecycleDiscipline,
    pub(crate) reset_hook: Option<ResetHook<T>>,
    pub(crate) drop_policy: DropPolicy,
}

impl<T> RecordPoolBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            oom_policy: OomPolicy::default(),
            growth_increment: None,
            recycle_discipline: RecycleDiscipline::default(),
            reset_hook: None,
            drop_policy: DropPolicy::default(),
        }
    }

    /// Sets the number of records the pool starts with.
    ///
    /// # Examples
    ///
    /// ```
    /// use new_zealand::nz;
    /// use record_pool::RecordPool;
    ///
    /// let pool = RecordPool::<u32>::builder()
    ///     .initial_capacity(nz!(4))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(pool.capacity(), 4);
    /// ```
    pub fn initial_capacity(mut self, capacity: NonZero<usize>) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the [exhaustion policy][OomPolicy] for the pool. This governs whether and how
    /// the pool grows when a borrow finds no free record.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_pool::{OomPolicy, RecordPool};
    ///
    /// let pool = RecordPool::<u32>::builder()
    ///     .oom_policy(OomPolicy::None)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(pool.oom_policy(), OomPolicy::None);
    /// ```
    pub fn oom_policy(mut self, policy: OomPolicy) -> Self {
        self.oom_policy = policy;
        self
    }

    /// Sets the number of records added per growth event.
    ///
    /// [`OomPolicy::Incremental`] requires this value and grows by exactly this many records
    /// every time. For [`OomPolicy::Double`] it overrides the first growth step, which
    /// otherwise equals the initial capacity; later steps double as usual. The other
    /// policies never consult it.
    ///
    /// # Examples
    ///
    /// ```
    /// use new_zealand::nz;
    /// use record_pool::{OomPolicy, RecordPool};
    ///
    /// let pool = RecordPool::<u32>::builder()
    ///     .oom_policy(OomPolicy::Incremental)
    ///     .growth_increment(nz!(64))
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn growth_increment(mut self, increment: NonZero<usize>) -> Self {
        self.growth_increment = Some(increment);
        self
    }

    /// Sets the [recycling order][RecycleDiscipline] for the pool. This governs which free
    /// record the next borrow receives.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_pool::{RecordPool, RecycleDiscipline};
    ///
    /// let pool = RecordPool::<u32>::builder()
    ///     .recycle_discipline(RecycleDiscipline::Fifo)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(pool.recycle_discipline(), RecycleDiscipline::Fifo);
    /// ```
    pub fn recycle_discipline(mut self, discipline: RecycleDiscipline) -> Self {
        self.recycle_discipline = discipline;
        self
    }

    /// Sets a hook that reinitializes records before they become available for borrowing.
    ///
    /// The hook runs against every record of a freshly allocated slab and against every
    /// record passed to [`release()`][RecordPool::release]. A borrow therefore always
    /// receives a record the hook has seen since its last use.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_pool::RecordPool;
    ///
    /// let mut pool = RecordPool::<Vec<u8>>::builder()
    ///     .reset_hook(|buffer| buffer.clear())
    ///     .build()
    ///     .unwrap();
    ///
    /// let handle = pool.acquire().unwrap();
    /// assert!(pool.get(handle).is_empty());
    /// ```
    pub fn reset_hook(mut self, hook: impl FnMut(&mut T) + Send + 'static) -> Self {
        self.reset_hook = Some(Box::new(hook));
        self
    }

    /// Sets the [drop policy][DropPolicy] for the pool. This governs how to treat records
    /// still on loan when the pool is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_pool::{DropPolicy, RecordPool};
    ///
    /// let pool = RecordPool::<u32>::builder()
    ///     .drop_policy(DropPolicy::MustNotDropItems)
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Builds the record pool with the specified configuration.
    ///
    /// The initial slab is allocated eagerly: every record is default-constructed, passed
    /// to the reset hook if one is configured, and placed in the free records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`][crate::Error::AllocationFailed] if the initial
    /// slab cannot be allocated.
    ///
    /// # Panics
    ///
    /// Panics if [`OomPolicy::Incremental`] was selected without a growth increment.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_pool::RecordPool;
    ///
    /// let pool = RecordPool::<String>::builder().build().unwrap();
    ///
    /// assert!(pool.available() > 0);
    /// ```
    pub fn build(self) -> Result<RecordPool<T>>
    where
        T: Default,
    {
        assert!(
            !(matches!(self.oom_policy, OomPolicy::Incremental) && self.growth_increment.is_none()),
            "OomPolicy::Incremental requires growth_increment to be set"
        );

        RecordPool::new_inner(self)
    }
}

impl<T> fmt::Debug for RecordPoolBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordPoolBuilder")
            .field("record_type", &format_args!("{}", type_name::<T>()))
            .field("initial_capacity", &self.initial_capacity)
            .field("oom_policy", &self.oom_policy)
            .field("growth_increment", &self.growth_increment)
            .field("recycle_discipline", &self.recycle_discipline)
            .field("drop_policy", &self.drop_policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use new_zealand::nz;
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(RecordPoolBuilder<u32>: Send, Debug);

    #[test]
    fn defaults_are_applied() {
        let pool = RecordPool::<u32>::builder().build().unwrap();

        assert_eq!(pool.capacity(), DEFAULT_INITIAL_CAPACITY.get());
        assert_eq!(pool.oom_policy(), OomPolicy::Double);
        assert_eq!(pool.recycle_discipline(), RecycleDiscipline::Lifo);
    }

    #[test]
    #[should_panic(expected = "requires growth_increment")]
    fn incremental_without_increment_panics() {
        drop(
            RecordPool::<u32>::builder()
                .oom_policy(OomPolicy::Incremental)
                .build(),
        );
    }

    #[test]
    fn reset_hook_runs_at_allocation() {
        let mut pool = RecordPool::<u32>::builder()
            .initial_capacity(nz!(2))
            .reset_hook(|value| *value = 42)
            .build()
            .unwrap();

        let handle = pool.acquire().unwrap();
        assert_eq!(*pool.get(handle), 42);
    }

    #[test]
    fn debug_output_names_the_record_type() {
        let builder = RecordPool::<String>::builder();

        let output = format!("{builder:?}");
        assert!(output.contains("String"));
    }
}
