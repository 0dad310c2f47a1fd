//! Append-only arena holding the spanning tree discovered by one search. Nodes refer to their
//! parent by index, so the tree never owns references into itself and is dropped whole once
//! the search returns.
use grid_util::point::Point;
use std::iter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub position: Point,
    /// `None` only for the root.
    pub parent: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct SearchTree {
    nodes: Vec<TreeNode>,
}

impl SearchTree {
    /// Creates a tree whose root, at index 0, is `start`.
    pub fn new(start: Point) -> SearchTree {
        SearchTree {
            nodes: vec![TreeNode {
                position: start,
                parent: None,
            }],
        }
    }

    pub fn root(&self) -> usize {
        0
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, index: usize) -> Option<&TreeNode> {
        self.nodes.get(index)
    }

    /// Appends a child of `parent` and returns its index.
    pub fn push(&mut self, position: Point, parent: usize) -> usize {
        debug_assert!(parent < self.nodes.len());
        self.nodes.push(TreeNode {
            position,
            parent: Some(parent),
        });
        self.nodes.len() - 1
    }

    /// Positions from `index` back to the root, both inclusive.
    pub fn ancestors(&self, index: usize) -> impl Iterator<Item = Point> + '_ {
        iter::successors(self.nodes.get(index), |node| {
            node.parent.and_then(|p| self.nodes.get(p))
        })
        .map(|node| node.position)
    }

    /// Whether `position` lies on the path from `index` to the root.
    pub fn on_path_to_root(&self, index: usize, position: Point) -> bool {
        self.ancestors(index).any(|p| p == position)
    }

    /// Number of nodes from `index` to the root, both inclusive.
    pub fn depth(&self, index: usize) -> usize {
        self.ancestors(index).count()
    }

    /// The route from the root to `index`.
    pub fn reconstruct(&self, index: usize) -> Vec<Point> {
        let mut path = self.ancestors(index).collect::<Vec<Point>>();
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> (SearchTree, usize, usize) {
        // (0,0) -> (1,0) -> (1,1)
        //       \-> (0,1)
        let mut tree = SearchTree::new(Point::new(0, 0));
        let a = tree.push(Point::new(1, 0), tree.root());
        let b = tree.push(Point::new(1, 1), a);
        let c = tree.push(Point::new(0, 1), tree.root());
        assert_eq!(tree.len(), 4);
        (tree, b, c)
    }

    #[test]
    fn reconstruct_runs_root_to_leaf() {
        let (tree, leaf, _) = chain();
        assert_eq!(
            tree.reconstruct(leaf),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
        );
        assert_eq!(tree.reconstruct(tree.root()), vec![Point::new(0, 0)]);
    }

    #[test]
    fn ancestor_chain_ignores_siblings() {
        let (tree, leaf, sibling) = chain();
        assert!(tree.on_path_to_root(leaf, Point::new(1, 1)));
        assert!(tree.on_path_to_root(leaf, Point::new(0, 0)));
        assert!(!tree.on_path_to_root(leaf, Point::new(0, 1)));
        assert!(!tree.on_path_to_root(sibling, Point::new(1, 0)));
        assert_eq!(tree.depth(leaf), 3);
        assert_eq!(tree.depth(sibling), 2);
    }

    #[test]
    fn same_position_may_appear_twice() {
        let (mut tree, leaf, sibling) = chain();
        let again = tree.push(Point::new(1, 1), sibling);
        assert_ne!(again, leaf);
        assert_eq!(tree.get(again).unwrap().parent, Some(sibling));
        assert_eq!(tree.depth(again), 3);
    }
}
