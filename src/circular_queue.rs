use std::collections::VecDeque;
use std::fmt;

/// Fixed-capacity FIFO. Pushing at capacity evicts the oldest element,
/// so the queue always holds the most recent `capacity` items in
/// insertion order.
pub struct CircularQueue<T> {
    deque: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> Clone for CircularQueue<T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque.clone(),
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.deque.fmt(f)
    }
}

impl<T: PartialEq> PartialEq for CircularQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deque == other.deque
    }
}

impl<T> CircularQueue<T> {
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            deque: VecDeque::with_capacity(cap),
            capacity: cap,
        }
    }

    /// Appends an item, returning the evicted oldest one when full.
    /// A zero-capacity queue holds nothing; the item bounces straight
    /// back as the evictee.
    #[inline]
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }

        let popped = if self.is_full() {
            self.deque.pop_front()
        } else {
            None
        };

        self.deque.push_back(item);

        popped
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.deque.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn oldest(&self) -> Option<&T> {
        self.deque.front()
    }

    #[inline]
    pub fn newest(&self) -> Option<&T> {
        self.deque.back()
    }

    /// Oldest to newest.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'_ T> {
        self.deque.iter()
    }
}
