use core::cmp;
use core::mem::MaybeUninit;

#[inline]
pub fn increment(index: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    (index + 1) % capacity
}

#[inline]
pub fn decrement(index: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    if index == 0 {
        capacity - 1
    } else {
        index - 1
    }
}

/// Physical slot of `logical` counted from `start`, without a division.
#[inline]
pub fn physical(start: usize, logical: usize, capacity: usize) -> usize {
    debug_assert!(start < capacity);
    debug_assert!(logical < capacity);
    if logical < capacity - start {
        start + logical
    } else {
        logical - (capacity - start)
    }
}

#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

/// Physical bounds of the two runs holding `count` slots from `from`.
///
/// The second run is empty unless the slots wrap past the end of the storage.
#[inline]
pub fn runs(from: usize, count: usize, capacity: usize) -> ((usize, usize), (usize, usize)) {
    debug_assert!(from < capacity);
    debug_assert!(count <= capacity);
    let first = cmp::min(count, capacity - from);
    ((from, from + first), (0, count - first))
}

/// # Safety
///
/// Every slot in `slots` must be initialized.
#[inline]
pub unsafe fn assume_init_ref<T>(slots: &[MaybeUninit<T>]) -> &[T] {
    &*(slots as *const [MaybeUninit<T>] as *const [T])
}

/// # Safety
///
/// Every slot in `slots` must be initialized.
#[inline]
pub unsafe fn assume_init_mut<T>(slots: &mut [MaybeUninit<T>]) -> &mut [T] {
    &mut *(slots as *mut [MaybeUninit<T>] as *mut [T])
}
