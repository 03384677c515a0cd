use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

/// An edge leaving the tree: `from` is already admitted, `to` may not be.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<W> {
    pub weight: W,
    pub from: usize,
    pub to: usize,
    seq: u64,
}

// Weights must be comparable with themselves; the builder rejects NaN before
// anything is pushed. Equal weights pop in insertion order.
impl<W: PartialOrd> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .partial_cmp(&other.weight)
            .unwrap_or(Ordering::Equal)
            .then(self.seq.cmp(&other.seq))
    }
}

impl<W: PartialOrd> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for Candidate<W> {}

/// Min-heap of candidate edges with lazy deletion: entries pointing at an
/// admitted vertex stay in the heap and are dropped by the caller on pop.
pub struct Frontier<W> {
    heap: BinaryHeap<Reverse<Candidate<W>>>,
    seq: u64,
}

impl<W: Copy + PartialOrd> Frontier<W> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub fn push(&mut self, weight: W, from: usize, to: usize) {
        self.heap.push(Reverse(Candidate {
            weight,
            from,
            to,
            seq: self.seq,
        }));
        self.seq += 1;
    }

    pub fn pop(&mut self) -> Option<Candidate<W>> {
        self.heap.pop().map(|Reverse(candidate)| candidate)
    }

    /// Total number of pushes since creation.
    pub fn pushed(&self) -> u64 {
        self.seq
    }
}

impl<W: Copy + PartialOrd> Extend<(W, usize, usize)> for Frontier<W> {
    fn extend<I: IntoIterator<Item = (W, usize, usize)>>(&mut self, iter: I) {
        for (weight, from, to) in iter {
            self.push(weight, from, to);
        }
    }
}
