use grid_util::point::Point;
use std::collections::VecDeque;

/// A pending expansion candidate. `node` is the candidate's own index in the
/// [SearchTree](crate::search_tree::SearchTree), which also records its parent.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontierEntry<K> {
    pub position: Point,
    pub key: K,
    pub node: usize,
}

/// Ordered pending candidates. Each strategy picks its own discipline: push/pop at the back
/// for a stack, pop at the front for a queue, plus a stable [sort](Self::sort) for priority
/// ordering.
#[derive(Clone, Debug)]
pub struct Frontier<K> {
    entries: VecDeque<FrontierEntry<K>>,
}

impl<K> Default for Frontier<K> {
    fn default() -> Self {
        Frontier {
            entries: VecDeque::new(),
        }
    }
}

impl<K> Frontier<K> {
    pub fn new() -> Frontier<K> {
        Frontier::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: FrontierEntry<K>) {
        self.entries.push_back(entry);
    }

    pub fn pop_back(&mut self) -> Option<FrontierEntry<K>> {
        self.entries.pop_back()
    }

    pub fn pop_front(&mut self) -> Option<FrontierEntry<K>> {
        self.entries.pop_front()
    }

    /// Drops every pending entry at `position`, returning how many were removed.
    pub fn suppress(&mut self, position: Point) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.position != position);
        before - self.entries.len()
    }
}

impl<K: Ord> Frontier<K> {
    /// Stable ascending sort on the keys, so equal keys keep their insertion order.
    pub fn sort(&mut self) {
        self.entries.make_contiguous().sort_by(|a, b| a.key.cmp(&b.key));
    }
}
