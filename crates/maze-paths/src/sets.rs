//! Open and closed sets of an A* search.

use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use maze_core::Coord;

use crate::node::SearchNode;

// ---------------------------------------------------------------------------
// OpenSet
// ---------------------------------------------------------------------------

/// Frontier of discovered but not yet finalized nodes.
///
/// Superseded nodes are left in the heap and skipped when popped; `best`
/// holds the `f` of the one live node per cell.
#[derive(Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<SearchNode>,
    best: HashMap<Coord, usize>,
}

impl OpenSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert `node` unless its cell is already open with an equal or lower
    /// `f`. Returns whether the node was accepted.
    pub(crate) fn offer(&mut self, node: SearchNode) -> bool {
        let f = node.f();
        match self.best.entry(node.coord) {
            Entry::Occupied(mut e) => {
                if f >= *e.get() {
                    return false;
                }
                e.insert(f);
            }
            Entry::Vacant(e) => {
                e.insert(f);
            }
        }
        self.heap.push(node);
        true
    }

    /// Remove and return the live node with the lowest priority key.
    pub(crate) fn pop(&mut self) -> Option<SearchNode> {
        while let Some(node) = self.heap.pop() {
            if self.best.get(&node.coord) == Some(&node.f()) {
                self.best.remove(&node.coord);
                return Some(node);
            }
        }
        None
    }

    /// Number of live (non-superseded) nodes.
    pub(crate) fn len(&self) -> usize {
        self.best.len()
    }
}

// ---------------------------------------------------------------------------
// ClosedSet
// ---------------------------------------------------------------------------

/// Finalized nodes keyed by cell.
#[derive(Default)]
pub(crate) struct ClosedSet {
    nodes: HashMap<Coord, SearchNode>,
}

impl ClosedSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, node: SearchNode) {
        self.nodes.insert(node.coord, node);
    }

    pub(crate) fn contains(&self, c: Coord) -> bool {
        self.nodes.contains_key(&c)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walk parent links back from `last` and return the path in
    /// start-to-`last` order.
    ///
    /// Every parent of a node is a closed node, since a node's parent is the
    /// node being expanded when it was discovered.
    pub(crate) fn path_to(&self, last: SearchNode) -> Vec<Coord> {
        let mut path = Vec::with_capacity(last.g + 1);
        path.push(last.coord);
        let mut parent = last.parent;
        while let Some(p) = parent {
            path.push(p);
            parent = self.nodes.get(&p).and_then(|n| n.parent);
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(r: usize, c: usize, g: usize, h: usize, parent: Option<Coord>) -> SearchNode {
        SearchNode::new(Coord::new(r, c), g, h, parent)
    }

    #[test]
    fn offer_keeps_only_strict_improvements() {
        let mut open = OpenSet::new();
        assert!(open.offer(node(1, 1, 3, 2, None)));
        assert!(!open.offer(node(1, 1, 3, 2, None)));
        assert!(!open.offer(node(1, 1, 4, 2, None)));
        assert!(open.offer(node(1, 1, 2, 2, Some(Coord::new(0, 1)))));
        assert_eq!(open.len(), 1);

        let best = open.pop().unwrap();
        assert_eq!(best.g, 2);
        assert_eq!(best.parent, Some(Coord::new(0, 1)));
        // The superseded entry is skipped.
        assert_eq!(open.pop(), None);
        assert_eq!(open.len(), 0);
    }

    #[test]
    fn path_follows_parents() {
        let mut closed = ClosedSet::new();
        closed.insert(node(0, 0, 0, 2, None));
        closed.insert(node(0, 1, 1, 1, Some(Coord::new(0, 0))));
        let goal = node(1, 1, 2, 0, Some(Coord::new(0, 1)));
        assert!(closed.contains(Coord::new(0, 1)));
        assert!(!closed.contains(Coord::new(1, 1)));
        assert_eq!(
            closed.path_to(goal),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }
}
