/// Identifies one record on loan from a [`RecordPool`][crate::RecordPool].
///
/// Handles are plain values: copying one or letting it go out of scope has no effect on the
/// record it names. The record stays on loan until the handle is passed to
/// [`release()`][crate::RecordPool::release], and its slot in the pool never moves, so a
/// handle observed once stays valid across pool growth.
///
/// A handle may only be used with the pool that issued it, and only while its record is on
/// loan. Both are caller contracts; violations panic where they are detectable at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RecordHandle {
    /// Which slab of the pool the record lives in.
    pub(crate) slab_index: usize,

    /// Position of the record within that slab.
    pub(crate) index_in_slab: usize,
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(RecordHandle: Copy, Send, Sync);

    #[test]
    fn handles_compare_by_position() {
        let a = RecordHandle {
            slab_index: 0,
            index_in_slab: 1,
        };
        let b = RecordHandle {
            slab_index: 0,
            index_in_slab: 1,
        };
        let c = RecordHandle {
            slab_index: 1,
            index_in_slab: 1,
        };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
