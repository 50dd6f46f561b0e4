use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use super::*;

impl<T> Clone for RingBuffer<T>
    where T: Clone
{
    fn clone(&self) -> RingBuffer<T> {
        let mut buffer = RingBuffer::allocate(self.capacity());
        buffer.extend(self.iter().cloned());
        buffer
    }
}

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Buffers are equal when they hold equal elements in the same logical
/// order; capacity and physical layout are not compared.
impl<T> PartialEq for RingBuffer<T>
    where T: PartialEq
{
    fn eq(&self, other: &RingBuffer<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for RingBuffer<T> where T: Eq {}

impl<T> PartialOrd for RingBuffer<T>
    where T: PartialOrd
{
    fn partial_cmp(&self, other: &RingBuffer<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T> Ord for RingBuffer<T>
    where T: Ord
{
    #[inline]
    fn cmp(&self, other: &RingBuffer<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Hash for RingBuffer<T>
    where T: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        // element by element, so the hash ignores where the contents wrap
        self.len().hash(state);
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Extend the `RingBuffer` by pushing each item at the tail.
///
/// Once the buffer is full every further item evicts the head, so only the
/// last `capacity()` items are kept.
impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push_tail(elt);
        }
    }
}

impl<'a, T> Extend<&'a T> for RingBuffer<T>
    where T: Copy + 'a
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> fmt::Debug for RingBuffer<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
