use core::ptr;

use super::RingBuffer;
use crate::utils::{self, assume_init_mut, assume_init_ref};

impl<T> RingBuffer<T> {
    #[inline]
    pub(super) fn increment(&self, index: usize) -> usize {
        utils::increment(index, self.capacity())
    }

    #[inline]
    pub(super) fn decrement(&self, index: usize) -> usize {
        utils::decrement(index, self.capacity())
    }

    /// Branch form of the logical to physical translation.
    #[inline]
    pub(super) fn physical(&self, logical: usize) -> usize {
        utils::physical(self.start, logical, self.capacity())
    }

    /// Modulus form of the logical to physical translation.
    #[inline]
    pub(super) fn wrapped(&self, offset: usize) -> usize {
        utils::wrap_add(self.start, offset, self.capacity())
    }

    /// Physical runs covering the logical range `from..to`.
    #[inline]
    pub(super) fn runs(&self, from: usize, to: usize) -> ((usize, usize), (usize, usize)) {
        debug_assert!(from <= to, "runs from={} to={}", from, to);
        debug_assert!(to <= self.len, "runs to={} len={}", to, self.len);
        utils::runs(self.wrapped(from), to - from, self.capacity())
    }

    #[inline]
    fn ptr(&self) -> *const T {
        self.xs.as_ptr() as *const T
    }

    #[inline]
    fn ptr_mut(&mut self) -> *mut T {
        self.xs.as_mut_ptr() as *mut T
    }

    /// Caller must guarantee `from..to` only covers live slots.
    #[inline]
    pub(super) unsafe fn live(&self, (from, to): (usize, usize)) -> &[T] {
        assume_init_ref(&self.xs[from..to])
    }

    /// Borrows two disjoint runs mutably. The second run must end at or
    /// before the first one starts, which `runs` guarantees.
    #[inline]
    pub(super) unsafe fn live_pair_mut(
        &mut self,
        first: (usize, usize),
        second: (usize, usize),
    ) -> (&mut [T], &mut [T]) {
        debug_assert!(second.1 <= first.0 || second.0 == second.1,
                      "overlapping runs first={:?} second={:?}",
                      first,
                      second);
        let (left, right) = self.xs.split_at_mut(first.0);
        (assume_init_mut(&mut right[..first.1 - first.0]),
         assume_init_mut(&mut left[second.0..second.1]))
    }

    /// Raw pointer to a run, for dropping its elements in place.
    #[inline]
    pub(super) unsafe fn raw_run(&mut self, (from, to): (usize, usize)) -> *mut [T] {
        debug_assert!(from <= to && to <= self.capacity());
        ptr::slice_from_raw_parts_mut(self.ptr_mut().add(from), to - from)
    }

    #[inline]
    pub(super) unsafe fn buffer_ref(&self, offset: usize) -> &T {
        &*self.ptr().add(offset)
    }

    #[inline]
    pub(super) unsafe fn buffer_mut(&mut self, offset: usize) -> &mut T {
        &mut *self.ptr_mut().add(offset)
    }

    #[inline]
    pub(super) unsafe fn buffer_read(&mut self, offset: usize) -> T {
        ptr::read(self.ptr().add(offset))
    }

    #[inline]
    pub(super) unsafe fn buffer_write(&mut self, offset: usize, element: T) {
        ptr::write(self.ptr_mut().add(offset), element);
    }

    #[inline]
    pub(super) unsafe fn buffer_replace(&mut self, offset: usize, element: T) -> T {
        ptr::replace(self.ptr_mut().add(offset), element)
    }
}
