/// Determines how a pool treats records still on loan when the pool is dropped.
///
/// By default, dropping the pool reclaims everything, including records the caller never
/// released; their handles simply become inert values.
///
/// # Examples
///
/// ```
/// use record_pool::{DropPolicy, RecordPool};
///
/// // The drop policy is set at pool creation time.
/// let pool = RecordPool::<u64>::builder()
///     .drop_policy(DropPolicy::MustNotDropItems)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropPolicy {
    /// The pool reclaims all records when it is dropped, whether or not they have been
    /// released. This is the default.
    #[default]
    MayDropItems,

    /// The pool panics if any record is still on loan when it is dropped.
    ///
    /// This may be valuable when loaned records are referenced from structures that outlive
    /// individual operations, where dropping the pool early would silently invalidate them.
    /// The check is suppressed while a panic is already unwinding.
    MustNotDropItems,
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(DropPolicy: Copy, Send, Sync);

    #[test]
    fn dropping_items_is_allowed_by_default() {
        assert_eq!(DropPolicy::default(), DropPolicy::MayDropItems);
    }
}
