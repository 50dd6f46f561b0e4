use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem::MaybeUninit;
use core::slice;

use tracing::{debug, trace};

use crate::error::{Error, OutOfRange, Result};
use crate::RangeArgument;

mod internal;
mod iterator_impls;
mod trait_impls;

/// `RingBuffer` is a double-ended ring buffer with a fixed capacity.
///
/// Elements are addressed by logical index: index `0` is the head and index
/// `len() - 1` is the tail. Pushing onto a full buffer evicts the element at
/// the opposite end, so pushes never fail.
///
/// Used with `push_tail` and `pop_head` it is a FIFO queue. Used with
/// `push_head` alone it keeps the most recent `capacity()` items, newest
/// first.
///
/// The buffer is not synchronized. See [`SyncRingBuffer`] for a variant
/// guarded by a mutex.
///
/// [`SyncRingBuffer`]: crate::SyncRingBuffer
pub struct RingBuffer<T> {
    xs: Box<[MaybeUninit<T>]>,
    start: usize,
    end: usize,
    len: usize,
}

/// `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    first: slice::Iter<'a, T>,
    second: slice::Iter<'a, T>,
}

/// `RingBuffer` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    first: slice::IterMut<'a, T>,
    second: slice::IterMut<'a, T>,
}

/// A by-value `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: RingBuffer<T>,
}

impl<T> RingBuffer<T> {
    /// Creates an empty `RingBuffer` holding at most `capacity` elements.
    ///
    /// Returns `Error::InvalidArgument` if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, RingBuffer};
    ///
    /// let buffer: RingBuffer<u32> = RingBuffer::new(3).unwrap();
    /// assert_eq!(buffer.capacity(), 3);
    ///
    /// assert_eq!(RingBuffer::<u32>::new(0).err(),
    ///            Some(Error::InvalidArgument { capacity: 0 }));
    /// ```
    pub fn new(capacity: usize) -> Result<RingBuffer<T>> {
        if capacity < 1 {
            return Err(Error::InvalidArgument { capacity });
        }
        debug!(capacity, "created ring buffer");
        Ok(RingBuffer::allocate(capacity))
    }

    fn allocate(capacity: usize) -> RingBuffer<T> {
        debug_assert!(capacity >= 1);
        let xs = (0..capacity).map(|_| MaybeUninit::uninit()).collect();
        RingBuffer {
            xs,
            start: 0,
            end: 0,
            len: 0,
        }
    }

    /// Returns the maximum number of elements the buffer holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.xs.len()
    }

    /// Returns the number of elements in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(2).unwrap();
    /// assert_eq!(buffer.len(), 0);
    /// buffer.push_tail(1);
    /// buffer.push_tail(2);
    /// buffer.push_tail(3);
    /// assert_eq!(buffer.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every slot holds an element.
    ///
    /// The next push on a full buffer evicts an element.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Adds an element at the head, evicting the tail if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```text
    /// 1 -(+)-> [_, _, _] => [1, _, _]
    /// 2 -(+)-> [1, _, _] => [2, 1, _]
    /// 3 -(+)-> [2, 1, _] => [3, 2, 1]
    /// 4 -(+)-> [3, 2, 1] => [4, 3, 2]
    /// ```
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(3).unwrap();
    /// for i in 1..5 {
    ///     buffer.push_head(i);
    /// }
    /// assert_eq!(buffer.to_array_head_first(), vec![4, 3, 2]);
    /// ```
    #[inline]
    pub fn push_head(&mut self, element: T) {
        self.push_head_and_evict_tail(element);
    }

    /// Adds an element at the tail, evicting the head if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```text
    /// [_, _, _] <-(+)- 1 => [1, _, _]
    /// [1, _, _] <-(+)- 2 => [1, 2, _]
    /// [1, 2, _] <-(+)- 3 => [1, 2, 3]
    /// [1, 2, 3] <-(+)- 4 => [2, 3, 4]
    /// ```
    #[inline]
    pub fn push_tail(&mut self, element: T) {
        self.push_tail_and_evict_head(element);
    }

    /// Adds an element at the head.
    ///
    /// Returns `None` if the buffer still had room, or `Some(evicted)` if it
    /// was full, where `evicted` is the former tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(2).unwrap();
    /// assert_eq!(buffer.push_head_and_evict_tail(1), None);
    /// assert_eq!(buffer.push_head_and_evict_tail(2), None);
    /// assert_eq!(buffer.push_head_and_evict_tail(3), Some(1));
    /// assert_eq!(buffer.peek_tail(), Ok(&2));
    /// ```
    pub fn push_head_and_evict_tail(&mut self, element: T) -> Option<T> {
        let start = self.decrement(self.start);
        self.start = start;
        if self.is_full() {
            // the slot before the old head holds the tail
            self.end = start;
            trace!(capacity = self.capacity(), "push_head evicted the tail");
            unsafe { Some(self.buffer_replace(start, element)) }
        } else {
            unsafe { self.buffer_write(start, element) }
            self.len += 1;
            None
        }
    }

    /// Adds an element at the tail.
    ///
    /// Returns `None` if the buffer still had room, or `Some(evicted)` if it
    /// was full, where `evicted` is the former head.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(2).unwrap();
    /// buffer.push_tail(1);
    /// buffer.push_tail(2);
    /// assert_eq!(buffer.push_tail_and_evict_head(3), Some(1));
    /// assert_eq!(buffer.peek_head(), Ok(&2));
    /// ```
    pub fn push_tail_and_evict_head(&mut self, element: T) -> Option<T> {
        let end = self.end;
        self.end = self.increment(end);
        if self.is_full() {
            self.start = self.end;
            trace!(capacity = self.capacity(), "push_tail evicted the head");
            unsafe { Some(self.buffer_replace(end, element)) }
        } else {
            unsafe { self.buffer_write(end, element) }
            self.len += 1;
            None
        }
    }

    /// Removes the head element and returns it.
    ///
    /// Returns `Error::EmptyBuffer` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, RingBuffer};
    ///
    /// let mut buffer = RingBuffer::new(3).unwrap();
    /// buffer.push_tail(1);
    /// buffer.push_tail(2);
    ///
    /// assert_eq!(buffer.pop_head(), Ok(1));
    /// assert_eq!(buffer.pop_head(), Ok(2));
    /// assert_eq!(buffer.pop_head(), Err(Error::EmptyBuffer));
    /// ```
    pub fn pop_head(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        let start = self.start;
        self.start = self.increment(start);
        self.len -= 1;
        unsafe { Ok(self.buffer_read(start)) }
    }

    /// Removes the tail element and returns it.
    ///
    /// Returns `Error::EmptyBuffer` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(3).unwrap();
    /// buffer.push_tail(1);
    /// buffer.push_tail(3);
    /// assert_eq!(buffer.pop_tail(), Ok(3));
    /// ```
    pub fn pop_tail(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        let end = self.decrement(self.end);
        self.end = end;
        self.len -= 1;
        unsafe { Ok(self.buffer_read(end)) }
    }

    /// Returns a reference to the head element.
    ///
    /// Returns `Error::EmptyBuffer` if the buffer is empty.
    #[inline]
    pub fn peek_head(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        unsafe { Ok(self.buffer_ref(self.start)) }
    }

    /// Returns a reference to the tail element.
    ///
    /// Returns `Error::EmptyBuffer` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(2).unwrap();
    /// buffer.push_head(1);
    /// buffer.push_head(2);
    ///
    /// assert_eq!(buffer.peek_head(), Ok(&2));
    /// assert_eq!(buffer.peek_tail(), Ok(&1));
    /// ```
    #[inline]
    pub fn peek_tail(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        unsafe { Ok(self.buffer_ref(self.decrement(self.end))) }
    }

    /// Returns a reference to the element `offset` positions after the head.
    ///
    /// Same result as [`get`](#method.get); the physical slot is found with
    /// a modulus instead of a branch.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Result<&T> {
        OutOfRange::check(offset, self.len)?;
        unsafe { Ok(self.buffer_ref(self.wrapped(offset))) }
    }

    /// Retrieves an element by logical index.
    ///
    /// Element at index 0 is the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, OutOfRange, RingBuffer};
    ///
    /// let mut buffer = RingBuffer::new(4).unwrap();
    /// buffer.push_tail(3);
    /// buffer.push_tail(4);
    /// buffer.push_tail(5);
    /// assert_eq!(buffer.get(1), Ok(&4));
    /// assert_eq!(buffer.get(3),
    ///            Err(Error::IndexOutOfRange(OutOfRange::BeyondCount { index: 3, len: 3 })));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        OutOfRange::check(index, self.len)?;
        unsafe { Ok(self.buffer_ref(self.physical(index))) }
    }

    /// Retrieves an element mutably by logical index.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        OutOfRange::check(index, self.len)?;
        let idx = self.physical(index);
        unsafe { Ok(self.buffer_mut(idx)) }
    }

    /// Replaces the element at logical index `index`, dropping the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(2).unwrap();
    /// buffer.push_tail("a");
    /// buffer.push_tail("b");
    /// buffer.set(1, "c").unwrap();
    /// assert_eq!(buffer[1], "c");
    /// assert!(buffer.set(2, "d").is_err());
    /// ```
    pub fn set(&mut self, index: usize, element: T) -> Result<()> {
        *self.get_mut(index)? = element;
        Ok(())
    }

    /// Overwrites the head element in place.
    ///
    /// Returns `Error::InvalidOperation` if the buffer is empty.
    pub fn update_head(&mut self, element: T) -> Result<()> {
        if self.is_empty() {
            return Err(Error::InvalidOperation);
        }
        let start = self.start;
        unsafe { *self.buffer_mut(start) = element }
        Ok(())
    }

    /// Clears the buffer, dropping all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(4).unwrap();
    /// buffer.push_tail(1);
    /// buffer.clear();
    /// assert!(buffer.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let len = self.len;
        let (first, second) = self.runs(0, len);
        // reset first so a panicking destructor leaks instead of double dropping
        self.start = 0;
        self.end = 0;
        self.len = 0;
        if len == 0 {
            return;
        }
        unsafe {
            let first = self.raw_run(first);
            let second = self.raw_run(second);
            core::ptr::drop_in_place(first);
            core::ptr::drop_in_place(second);
        }
        debug!(dropped = len, capacity = self.capacity(), "cleared ring buffer");
    }

    /// Returns `true` if the buffer contains an element equal to the
    /// given value.
    pub fn contains(&self, x: &T) -> bool
        where T: PartialEq<T>
    {
        let (a, b) = self.to_segments();
        a.contains(x) || b.contains(x)
    }

    /// Returns the run of live elements starting at the head and ending at
    /// the tail or at the end of the storage, whichever comes first.
    #[inline]
    pub fn first_segment(&self) -> &[T] {
        self.to_segments().0
    }

    /// Returns the run of live elements that wrapped around to the start of
    /// the storage. Empty when the contents do not wrap.
    #[inline]
    pub fn second_segment(&self) -> &[T] {
        self.to_segments().1
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// buffer from head to tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(5).unwrap();
    ///
    /// buffer.push_tail(0);
    /// buffer.push_tail(1);
    /// buffer.push_tail(2);
    ///
    /// assert_eq!(buffer.to_segments(), (&[0, 1, 2][..], &[][..]));
    ///
    /// buffer.push_head(10);
    /// buffer.push_head(9);
    ///
    /// assert_eq!(buffer.to_segments(), (&[9, 10][..], &[0, 1, 2][..]));
    /// ```
    #[inline]
    pub fn to_segments(&self) -> (&[T], &[T]) {
        let (first, second) = self.runs(0, self.len);
        unsafe { (self.live(first), self.live(second)) }
    }

    /// Returns a pair of mutable slices which contain, in order, the
    /// contents of the buffer from head to tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(4).unwrap();
    ///
    /// buffer.push_tail(0);
    /// buffer.push_tail(1);
    /// buffer.push_head(10);
    /// buffer.push_head(9);
    ///
    /// buffer.to_segments_mut().0[0] = 42;
    /// buffer.to_segments_mut().1[0] = 24;
    /// assert_eq!(buffer.to_segments(), (&[42, 10][..], &[24, 1][..]));
    /// ```
    #[inline]
    pub fn to_segments_mut(&mut self) -> (&mut [T], &mut [T]) {
        let (first, second) = self.runs(0, self.len);
        unsafe { self.live_pair_mut(first, second) }
    }

    /// Returns the pair of slices holding the logical range `range`, in
    /// order from head to tail.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(4).unwrap();
    /// buffer.extend(0..6);
    ///
    /// assert_eq!(buffer.range_segments(1..3), (&[3][..], &[4][..]));
    /// assert_eq!(buffer.range_segments(..1), (&[2][..], &[][..]));
    /// ```
    pub fn range_segments<R>(&self, range: R) -> (&[T], &[T])
        where R: RangeArgument<usize>
    {
        let (from, to) = self.logical_range(range);
        let (first, second) = self.runs(from, to);
        unsafe { (self.live(first), self.live(second)) }
    }

    /// Copies the contents into a new `Vec`, head first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(3).unwrap();
    /// buffer.push_tail(1);
    /// buffer.push_tail(2);
    /// buffer.push_head(0);
    ///
    /// assert_eq!(buffer.to_array_head_first(), vec![0, 1, 2]);
    /// assert_eq!(buffer.to_array_tail_first(), vec![2, 1, 0]);
    /// ```
    pub fn to_array_head_first(&self) -> Vec<T>
        where T: Clone
    {
        let (a, b) = self.to_segments();
        let mut array = Vec::with_capacity(self.len);
        array.extend_from_slice(a);
        array.extend_from_slice(b);
        array
    }

    /// Copies the contents into a new `Vec`, tail first.
    pub fn to_array_tail_first(&self) -> Vec<T>
        where T: Clone
    {
        self.iter().rev().cloned().collect()
    }

    /// Returns a front-to-back iterator over the two segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(3).unwrap();
    /// buffer.push_tail(5);
    /// buffer.push_tail(3);
    /// buffer.push_tail(4);
    ///
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = buffer.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.to_segments();
        Iter {
            first: first.iter(),
            second: second.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, second) = self.to_segments_mut();
        IterMut {
            first: first.iter_mut(),
            second: second.iter_mut(),
        }
    }

    /// Returns an iterator over the logical range `range`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as
    /// [`range_segments`](#method.range_segments).
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(4).unwrap();
    /// buffer.extend(0..5);
    ///
    /// let middle: Vec<_> = buffer.range(1..3).cloned().collect();
    /// assert_eq!(middle, vec![2, 3]);
    /// ```
    pub fn range<R>(&self, range: R) -> Iter<'_, T>
        where R: RangeArgument<usize>
    {
        let (first, second) = self.range_segments(range);
        Iter {
            first: first.iter(),
            second: second.iter(),
        }
    }

    fn logical_range<R>(&self, range: R) -> (usize, usize)
        where R: RangeArgument<usize>
    {
        let len = self.len();
        let from = RangeArgument::start(&range).unwrap_or(0);
        let to = RangeArgument::end(&range).unwrap_or(len);
        assert!(from <= to, "range lower bound was too large");
        assert!(to <= len, "range upper bound was too large");
        (from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use proptest::prelude::*;

    fn buffer<T>(capacity: usize) -> RingBuffer<T> {
        RingBuffer::new(capacity).unwrap()
    }

    #[test]
    fn test_new() {
        let tester: RingBuffer<i32> = buffer(3);
        assert_eq!(tester.capacity(), 3);
        assert_eq!(tester.len(), 0);
        assert!(tester.is_empty());
        assert!(!tester.is_full());

        assert_eq!(RingBuffer::<i32>::new(0).err(),
                   Some(Error::InvalidArgument { capacity: 0 }));
        assert!(RingBuffer::<i32>::new(1).is_ok());
    }

    #[test]
    fn test_fifo() {
        let mut tester = buffer(8);
        tester.push_tail(1);
        tester.push_tail(2);
        tester.push_tail(3);
        tester.push_tail(4);
        assert_eq!(tester.len(), 4);

        assert_eq!(tester.pop_head(), Ok(1));
        assert_eq!(tester.pop_head(), Ok(2));
        assert_eq!(tester.len(), 2);
        assert_eq!(tester.pop_head(), Ok(3));
        assert_eq!(tester.pop_head(), Ok(4));
        assert_eq!(tester.pop_head(), Err(Error::EmptyBuffer));
    }

    #[test]
    fn test_stack() {
        let mut tester = buffer(4);
        for i in 0..4 {
            tester.push_head(i);
        }
        assert_eq!(tester.pop_head(), Ok(3));
        assert_eq!(tester.pop_head(), Ok(2));
        assert_eq!(tester.pop_head(), Ok(1));
        assert_eq!(tester.pop_head(), Ok(0));
        assert_eq!(tester.pop_head(), Err(Error::EmptyBuffer));
    }

    #[test]
    fn test_fifo_reversely() {
        let mut tester = buffer(8);
        tester.push_head(1);
        tester.push_head(2);
        tester.push_head(3);
        assert_eq!(tester.pop_tail(), Ok(1));
        assert_eq!(tester.pop_tail(), Ok(2));
        assert_eq!(tester.pop_tail(), Ok(3));
        assert_eq!(tester.pop_tail(), Err(Error::EmptyBuffer));
    }

    #[test]
    fn test_push_tail_evicts_head() {
        let mut tester = buffer(3);
        tester.push_tail(1);
        tester.push_tail(2);
        tester.push_tail(3);
        tester.push_tail(4);
        assert_eq!(tester.len(), 3);
        assert_eq!(tester.to_array_head_first(), vec![2, 3, 4]);
        assert!(!tester.contains(&1));
    }

    #[test]
    fn test_push_head_evicts_tail() {
        let mut tester = buffer(3);
        assert_eq!(tester.push_head_and_evict_tail(1), None);
        assert_eq!(tester.push_head_and_evict_tail(2), None);
        assert_eq!(tester.push_head_and_evict_tail(3), None);
        assert_eq!(tester.push_head_and_evict_tail(4), Some(1));
        assert_eq!(tester.push_head_and_evict_tail(5), Some(2));
        assert_eq!(tester.to_array_head_first(), vec![5, 4, 3]);
    }

    #[test]
    fn test_mixed_ends() {
        let mut tester = buffer(4);
        tester.push_tail(10);
        tester.push_tail(20);
        tester.push_head(5);
        assert_eq!(tester.pop_tail(), Ok(20));
        assert_eq!(tester.to_array_head_first(), vec![5, 10]);
    }

    #[test]
    fn test_capacity_one() {
        let mut tester = buffer(1);
        tester.push_tail(1);
        assert!(tester.is_full());
        assert_eq!(tester.push_tail_and_evict_head(2), Some(1));
        assert_eq!(tester.push_head_and_evict_tail(3), Some(2));
        assert_eq!(tester.peek_head(), Ok(&3));
        assert_eq!(tester.peek_tail(), Ok(&3));
        assert_eq!(tester.to_segments(), (&[3][..], &[][..]));
        assert_eq!(tester.pop_tail(), Ok(3));
        assert!(tester.is_empty());
    }

    #[test]
    fn test_empty_errors() {
        let mut tester: RingBuffer<i32> = buffer(3);
        for _ in 0..2 {
            assert_eq!(tester.pop_head(), Err(Error::EmptyBuffer));
            assert_eq!(tester.pop_tail(), Err(Error::EmptyBuffer));
            assert_eq!(tester.peek_head(), Err(Error::EmptyBuffer));
            assert_eq!(tester.peek_tail(), Err(Error::EmptyBuffer));
            assert_eq!(tester.update_head(1), Err(Error::InvalidOperation));
            assert_eq!(tester.get(0),
                       Err(Error::IndexOutOfRange(OutOfRange::Empty { index: 0 })));
            assert_eq!(tester.peek_at(0),
                       Err(Error::IndexOutOfRange(OutOfRange::Empty { index: 0 })));

            tester.push_tail(1);
            tester.push_tail(2);
            tester.clear();
        }
    }

    #[test]
    fn test_index() {
        let mut tester = buffer(4);
        tester.push_tail(1);
        tester.push_tail(2);
        tester.push_tail(3);
        tester.push_tail(4);
        tester.push_tail(5);
        assert_eq!(tester[0], 2);
        assert_eq!(tester[3], 5);

        for i in 0..tester.len() {
            assert_eq!(tester.get(i), tester.peek_at(i));
            assert_eq!(tester.get(i), Ok(&tester[i]));
        }

        tester.set(2, 40).unwrap();
        tester[0] = 20;
        assert_eq!(tester.get(2), Ok(&40));
        assert_eq!(tester.to_array_head_first(), vec![20, 3, 40, 5]);

        assert_eq!(tester.set(4, 0),
                   Err(Error::IndexOutOfRange(OutOfRange::BeyondCount { index: 4, len: 4 })));
    }

    #[test]
    #[should_panic(expected = "the len is 2 but the index is 2")]
    fn test_index_overflow() {
        let mut tester = buffer(4);
        tester.push_tail(1);
        tester.push_tail(2);
        tester[2];
    }

    #[test]
    fn test_update_head() {
        let mut tester = buffer(3);
        tester.push_tail(1);
        tester.push_tail(2);
        tester.update_head(7).unwrap();
        assert_eq!(tester.to_array_head_first(), vec![7, 2]);
    }

    #[test]
    fn test_segments() {
        let mut tester = buffer(4);
        assert_eq!(tester.first_segment(), &[][..]);
        assert_eq!(tester.second_segment(), &[][..]);

        tester.extend(0..4);
        assert_eq!(tester.first_segment(), &[0, 1, 2, 3][..]);
        assert_eq!(tester.second_segment(), &[][..]);

        tester.push_tail(4);
        tester.push_tail(5);
        assert_eq!(tester.first_segment(), &[2, 3][..]);
        assert_eq!(tester.second_segment(), &[4, 5][..]);

        assert_eq!(tester.pop_head(), Ok(2));
        assert_eq!(tester.pop_head(), Ok(3));
        assert_eq!(tester.to_segments(), (&[4, 5][..], &[][..]));
    }

    #[test]
    fn test_range_segments() {
        let mut tester = buffer(5);
        tester.extend(0..8);
        // storage is [5, 6, 7, 3, 4]
        assert_eq!(tester.range_segments(..), (&[3, 4][..], &[5, 6, 7][..]));
        assert_eq!(tester.range_segments(2..), (&[5, 6, 7][..], &[][..]));
        assert_eq!(tester.range_segments(1..4), (&[4][..], &[5, 6][..]));
        assert_eq!(tester.range_segments(5..), (&[][..], &[][..]));

        let tail: Vec<_> = tester.range(3..).cloned().collect();
        assert_eq!(tail, vec![6, 7]);
    }

    #[test]
    #[should_panic(expected = "range upper bound was too large")]
    fn test_range_too_large() {
        let mut tester = buffer(3);
        tester.push_tail(1);
        tester.range_segments(0..2);
    }

    #[test]
    #[should_panic(expected = "range lower bound was too large")]
    fn test_range_inverted() {
        let mut tester: RingBuffer<i32> = buffer(4);
        tester.extend(0..3);
        tester.range_segments(2..1);
    }

    #[test]
    fn test_to_array() {
        let mut tester = buffer(5);
        tester.extend(0..3);
        tester.push_head(-1);
        tester.push_head(-2);
        tester.push_head(-3);
        assert_eq!(tester.to_array_head_first(), vec![-3, -2, -1, 0, 1]);
        assert_eq!(tester.to_array_tail_first(), vec![1, 0, -1, -2, -3]);
    }

    #[test]
    fn test_clear() {
        let mut tester = buffer(3);
        tester.clear();
        assert!(tester.is_empty());

        tester.extend(0..5);
        tester.clear();
        assert_eq!(tester.len(), 0);
        assert_eq!(tester.to_segments(), (&[][..], &[][..]));

        tester.push_tail(9);
        assert_eq!(tester.peek_head(), Ok(&9));
        assert_eq!(tester.first_segment(), &[9][..]);
    }

    #[derive(Debug)]
    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_drop() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut tester = buffer(3);
            for _ in 0..5 {
                tester.push_tail(Tracked(drops.clone()));
            }
            assert_eq!(drops.get(), 2);

            drop(tester.pop_head());
            assert_eq!(drops.get(), 3);

            tester.update_head(Tracked(drops.clone())).unwrap();
            assert_eq!(drops.get(), 4);

            tester.set(1, Tracked(drops.clone())).unwrap();
            assert_eq!(drops.get(), 5);

            tester.clear();
            assert_eq!(drops.get(), 7);

            tester.push_head(Tracked(drops.clone()));
            tester.push_head(Tracked(drops.clone()));
        }
        assert_eq!(drops.get(), 9);
    }

    #[derive(Debug, Clone)]
    enum Op {
        PushHead(i32),
        PushTail(i32),
        PopHead,
        PopTail,
        Set(usize, i32),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i32>().prop_map(Op::PushHead),
            any::<i32>().prop_map(Op::PushTail),
            Just(Op::PopHead),
            Just(Op::PopTail),
            (0..8usize, any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
            Just(Op::Clear),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_matches_vecdeque(capacity in 1..8usize,
                                 ops in prop::collection::vec(op(), 1..200)) {
            let mut tester = buffer(capacity);
            let mut model: VecDeque<i32> = VecDeque::with_capacity(capacity);

            for op in ops {
                match op {
                    Op::PushHead(v) => {
                        let evicted = if model.len() == capacity { model.pop_back() } else { None };
                        model.push_front(v);
                        prop_assert_eq!(tester.push_head_and_evict_tail(v), evicted);
                    }
                    Op::PushTail(v) => {
                        let evicted = if model.len() == capacity { model.pop_front() } else { None };
                        model.push_back(v);
                        prop_assert_eq!(tester.push_tail_and_evict_head(v), evicted);
                    }
                    Op::PopHead => {
                        prop_assert_eq!(tester.pop_head().ok(), model.pop_front());
                    }
                    Op::PopTail => {
                        prop_assert_eq!(tester.pop_tail().ok(), model.pop_back());
                    }
                    Op::Set(i, v) => {
                        let expected = i < model.len();
                        prop_assert_eq!(tester.set(i, v).is_ok(), expected);
                        if expected {
                            model[i] = v;
                        }
                    }
                    Op::Clear => {
                        tester.clear();
                        model.clear();
                    }
                }

                prop_assert!(tester.len() <= tester.capacity());
                prop_assert_eq!(tester.len(), model.len());
                prop_assert_eq!(tester.peek_head().ok(), model.front());
                prop_assert_eq!(tester.peek_tail().ok(), model.back());

                let head_first = tester.to_array_head_first();
                let (a, b) = tester.to_segments();
                prop_assert_eq!(&head_first[..], &[a, b].concat()[..]);
                prop_assert_eq!(&head_first, &model.iter().cloned().collect::<Vec<_>>());

                let mut reversed = head_first.clone();
                reversed.reverse();
                prop_assert_eq!(tester.to_array_tail_first(), reversed);

                for i in 0..tester.len() {
                    prop_assert_eq!(tester.get(i), tester.peek_at(i));
                }
            }
        }
    }
}
