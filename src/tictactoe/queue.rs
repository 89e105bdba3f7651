//! Per-player window of live marks

use std::hash::{Hash, Hasher};

use crate::types::Position;

/// Maximum number of marks a player may have on the board at once.
pub const MAX_MARKS: usize = 3;

/// Fixed-capacity ring buffer of the positions a player currently occupies,
/// oldest first.
///
/// Pushing onto a full queue evicts and returns the oldest position.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkQueue {
    slots: [Option<Position>; MAX_MARKS],
    head: usize,
    len: usize,
}

impl MarkQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == MAX_MARKS
    }

    /// The position that leaves first on overflow.
    pub fn oldest(&self) -> Option<Position> {
        self.nth(0)
    }

    fn nth(&self, i: usize) -> Option<Position> {
        if i < self.len {
            self.slots[(self.head + i) % MAX_MARKS]
        } else {
            None
        }
    }

    /// Oldest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len).filter_map(|i| self.nth(i))
    }

    /// Append a position, evicting the oldest one if the queue was full.
    pub fn push(&mut self, pos: Position) -> Option<Position> {
        let evicted = if self.is_full() { self.pop_oldest() } else { None };
        let tail = (self.head + self.len) % MAX_MARKS;
        self.slots[tail] = Some(pos);
        self.len += 1;
        evicted
    }

    pub fn pop_oldest(&mut self) -> Option<Position> {
        if self.is_empty() {
            return None;
        }
        let oldest = self.slots[self.head].take();
        self.head = (self.head + 1) % MAX_MARKS;
        self.len -= 1;
        oldest
    }

    /// Remove the last occurrence of `pos`, scanning from the newest end.
    ///
    /// Returns whether anything was removed. Later entries shift down one slot
    /// so relative order is preserved.
    pub fn remove_last(&mut self, pos: Position) -> bool {
        let Some(i) = (0..self.len).rev().find(|&i| self.nth(i) == Some(pos)) else {
            return false;
        };
        for j in i..self.len - 1 {
            self.slots[(self.head + j) % MAX_MARKS] = self.nth(j + 1);
        }
        self.slots[(self.head + self.len - 1) % MAX_MARKS] = None;
        self.len -= 1;
        true
    }
}

// Equality is by live content; the ring offset is an implementation detail.
impl PartialEq for MarkQueue {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for MarkQueue {}

impl Hash for MarkQueue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for pos in self.iter() {
            pos.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(i: usize) -> Position {
        Position::new(i).unwrap()
    }

    /// Push each index in turn; evictions are discarded.
    fn pushed(indices: &[usize]) -> MarkQueue {
        let mut queue = MarkQueue::new();
        for &i in indices {
            queue.push(pos(i));
        }
        queue
    }

    fn values(queue: &MarkQueue) -> Vec<usize> {
        queue.iter().map(|p| p.value()).collect()
    }

    #[test]
    fn test_push_until_full() {
        let mut queue = MarkQueue::new();
        assert_eq!(queue.push(pos(0)), None);
        assert_eq!(queue.push(pos(1)), None);
        assert_eq!(queue.push(pos(2)), None);
        assert!(queue.is_full());
        assert_eq!(queue.oldest(), Some(pos(0)));
        assert_eq!(values(&queue), vec![0, 1, 2]);
    }

    #[test]
    fn test_push_on_full_evicts_oldest() {
        let mut queue = pushed(&[0, 1, 2]);
        assert_eq!(queue.push(pos(3)), Some(pos(0)));
        assert_eq!(values(&queue), vec![1, 2, 3]);
        assert_eq!(queue.push(pos(4)), Some(pos(1)));
        assert_eq!(values(&queue), vec![2, 3, 4]);
        assert_eq!(queue.len(), MAX_MARKS);
    }

    #[test]
    fn test_remove_last_after_wraparound() {
        let mut queue = pushed(&[0, 1, 2, 3, 4]);
        assert_eq!(values(&queue), vec![2, 3, 4]);

        assert!(queue.remove_last(pos(3)));
        assert_eq!(values(&queue), vec![2, 4]);
        assert!(!queue.remove_last(pos(3)));

        assert_eq!(queue.push(pos(5)), None);
        assert_eq!(values(&queue), vec![2, 4, 5]);
    }

    #[test]
    fn test_remove_newest_and_oldest() {
        let mut queue = pushed(&[6, 7, 8]);
        assert!(queue.remove_last(pos(8)));
        assert!(queue.remove_last(pos(6)));
        assert_eq!(values(&queue), vec![7]);
        assert_eq!(queue.pop_oldest(), Some(pos(7)));
        assert!(queue.is_empty());
        assert_eq!(queue.pop_oldest(), None);
    }

    #[test]
    fn test_equal_content_after_different_histories() {
        // Same live marks, different internal head offsets.
        let a = pushed(&[1, 2]);
        let mut b = pushed(&[0, 1, 2]);
        b.pop_oldest();
        assert_eq!(a, b);
    }
}
