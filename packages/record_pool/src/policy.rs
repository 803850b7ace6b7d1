/// Determines how a pool reacts when a borrow finds the free list empty.
///
/// The policy is consulted exactly once per exhausted [`acquire()`][crate::RecordPool::acquire]
/// call: either the pool refuses, or it attempts to grow by one slab and then hands out a
/// record if it can. There is no retry loop and no persistent exhaustion state.
///
/// # Examples
///
/// ```
/// use record_pool::{OomPolicy, RecordPool};
///
/// let pool = RecordPool::<u64>::builder()
///     .oom_policy(OomPolicy::Error)
///     .build()
///     .unwrap();
///
/// assert_eq!(pool.oom_policy(), OomPolicy::Error);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum OomPolicy {
    /// The pool never grows past its initial capacity; an exhausted borrow yields `None`.
    ///
    /// Use this when the initial capacity is a deliberate hard budget.
    None,

    /// Behaves exactly like [`None`][Self::None]: no growth, an exhausted borrow yields
    /// `None`. The separate name records that the caller treats exhaustion as an error
    /// condition rather than an expected budget limit.
    Error,

    /// The pool grows geometrically. The first growth adds as many records as the configured
    /// growth increment (by default, the initial capacity), and each successful growth
    /// doubles the increment for the next exhaustion event. This is the default.
    ///
    /// Geometric growth keeps the number of slabs, and therefore the amortized cost of
    /// borrowing, logarithmic in the total record count.
    #[default]
    Double,

    /// The pool grows by a fixed number of records, the configured growth increment, on
    /// every exhaustion event. Growth failure is not surfaced; the borrow simply yields
    /// `None` as if the pool were not allowed to grow.
    ///
    /// The increment is mandatory for this policy;
    /// [`build()`][crate::RecordPoolBuilder::build] panics if it is missing.
    Incremental,
}

/// Determines which free record a borrow hands out when several are available.
///
/// # Examples
///
/// ```
/// use record_pool::{RecordPool, RecycleDiscipline};
///
/// let pool = RecordPool::<u64>::builder()
///     .recycle_discipline(RecycleDiscipline::Fifo)
///     .build()
///     .unwrap();
///
/// assert_eq!(pool.recycle_discipline(), RecycleDiscipline::Fifo);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum RecycleDiscipline {
    /// The record released longest ago is borrowed first. Evens wear across records and
    /// maximizes the time between a release and the next reuse of the same memory.
    Fifo,

    /// The record released most recently is borrowed first. Favors cache locality for hot
    /// borrow/release cycles. This is the default.
    #[default]
    Lifo,
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(OomPolicy: Copy, Send, Sync);
    assert_impl_all!(RecycleDiscipline: Copy, Send, Sync);

    #[test]
    fn growth_is_the_default_policy() {
        assert_eq!(OomPolicy::default(), OomPolicy::Double);
    }

    #[test]
    fn hot_reuse_is_the_default_discipline() {
        assert_eq!(RecycleDiscipline::default(), RecycleDiscipline::Lifo);
    }
}
