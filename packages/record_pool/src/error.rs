use thiserror::Error;

/// Errors that can occur when creating or growing a record pool.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Backing memory for the requested number of records could not be obtained, either for
    /// the records themselves or for the directory entry that tracks them.
    ///
    /// The pool is unchanged; the caller may retry, shed load, or continue with whatever
    /// records are still available.
    #[error("failed to allocate backing memory for {records} records")]
    AllocationFailed {
        /// Number of records in the allocation request that could not be satisfied.
        records: usize,
    },
}

/// A specialized `Result` type for record pool operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn allocation_failure_is_error() {
        let error = Error::AllocationFailed { records: 128 };

        // Verify it is a valid Error that can be used in Result context.
        let result: Result<()> = Err(error);
        assert!(result.is_err());
    }

    #[test]
    fn allocation_failure_names_the_request_size() {
        let error = Error::AllocationFailed { records: 64 };

        assert!(error.to_string().contains("64"));
    }
}
