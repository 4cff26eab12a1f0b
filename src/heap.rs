//! Min-ordered priority structure for tree construction
//!
//! Wraps [`std::collections::BinaryHeap`] behind a min-order with an explicit
//! total order: frequency first, insertion sequence second. The sequence key
//! makes tree construction reproducible when frequencies tie — the first
//! node inserted wins the tie.

use crate::error::{HuffError, Result};
use crate::tree::HuffmanNode;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

struct HeapEntry {
    frequency: u64,
    seq: u64,
    node: HuffmanNode,
}

impl HeapEntry {
    fn key(&self) -> (u64, u64) {
        (self.frequency, self.seq)
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-heap of Huffman tree nodes, ordered by (frequency, insertion order).
///
/// Each tree build owns its own heap instance; the structure is emptied by
/// the time construction finishes.
pub struct NodeHeap {
    entries: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
}

impl NodeHeap {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            entries: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Create an empty heap with capacity for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Insert a node, restoring min-order. O(log n).
    pub fn insert(&mut self, node: HuffmanNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Reverse(HeapEntry {
            frequency: node.frequency(),
            seq,
            node,
        }));
    }

    /// Remove and return the node with the smallest frequency. O(log n).
    pub fn extract_min(&mut self) -> Result<HuffmanNode> {
        match self.entries.pop() {
            Some(Reverse(entry)) => Ok(entry.node),
            None => Err(HuffError::EmptyHeap),
        }
    }

    /// Number of nodes currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the heap holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all nodes. The insertion sequence counter is reset as well.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_seq = 0;
    }
}

impl Default for NodeHeap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(symbol: u8, frequency: u64) -> HuffmanNode {
        HuffmanNode::Leaf { symbol, frequency }
    }

    #[test]
    fn test_extract_in_frequency_order() {
        let mut heap = NodeHeap::new();
        heap.insert(leaf(b'a', 5));
        heap.insert(leaf(b'b', 1));
        heap.insert(leaf(b'c', 3));

        assert_eq!(heap.extract_min().unwrap().frequency(), 1);
        assert_eq!(heap.extract_min().unwrap().frequency(), 3);
        assert_eq!(heap.extract_min().unwrap().frequency(), 5);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_tie_break_is_insertion_order() {
        let mut heap = NodeHeap::new();
        heap.insert(leaf(b'x', 7));
        heap.insert(leaf(b'y', 7));
        heap.insert(leaf(b'z', 7));

        let order: Vec<u8> = (0..3)
            .map(|_| match heap.extract_min().unwrap() {
                HuffmanNode::Leaf { symbol, .. } => symbol,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(order, vec![b'x', b'y', b'z']);
    }

    #[test]
    fn test_extract_from_empty_fails() {
        let mut heap = NodeHeap::new();
        assert!(matches!(heap.extract_min(), Err(HuffError::EmptyHeap)));
    }

    #[test]
    fn test_len_and_clear() {
        let mut heap = NodeHeap::new();
        assert_eq!(heap.len(), 0);
        heap.insert(leaf(b'a', 1));
        heap.insert(leaf(b'b', 2));
        assert_eq!(heap.len(), 2);

        heap.clear();
        assert!(heap.is_empty());
        assert!(heap.extract_min().is_err());
    }
}
