//! A Binary Search Tree over unique `i64` values, owned through boxed
//! optional child links. The tree is built at minimal height from unsorted
//! input and mutated in place.
//!
//! # Examples
//!
//! ```
//! use bstree::tree::Tree;
//!
//! let mut tree = Tree::build(&[3, 7, 25, 9, 2, 67, 54]).unwrap();
//!
//! // Construction sorts, dedups, and balances.
//! assert_eq!(tree.in_order(), vec![2, 3, 7, 9, 25, 54, 67]);
//! assert!(tree.is_balanced());
//!
//! // Point mutations keep ordering but not balance.
//! tree.insert(100);
//! tree.insert(200);
//! tree.insert(300);
//! assert!(!tree.is_balanced());
//!
//! // A rebalance rebuilds the tree at minimal height.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

use log::debug;

use crate::error::{TreeError, TreeResult};

/// A node in a [`Tree`]: one value plus two optional owned children.
///
/// A node owns its entire subtree. No node is reachable through more than
/// one path, so there is no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: i64,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    /// Construct a new `Node` with the given value and children.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Node;
    ///
    /// let leaf = Node::new(7, None, None);
    /// assert_eq!(leaf.value(), 7);
    /// assert_eq!(leaf.height(), 0);
    /// ```
    pub fn new(value: i64, left: Option<Box<Node>>, right: Option<Box<Node>>) -> Self {
        Self { value, left, right }
    }

    /// The value stored in this node.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// This node's left child, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// This node's right child, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// The height of the subtree rooted at this node: the number of edges on
    /// the longest downward path. A leaf has height 0.
    pub fn height(&self) -> i32 {
        1 + height_of(self.left()).max(height_of(self.right()))
    }
}

/// The height of an optional subtree. An empty subtree has height **-1**,
/// which makes a leaf's height come out to 0.
///
/// [`Tree::is_balanced`] leans on this convention: a node with one leaf
/// child and one empty child is one level lopsided, not two.
///
/// # Examples
///
/// ```
/// use bstree::tree::{height_of, Tree};
///
/// let tree = Tree::build(&[1, 2, 3]).unwrap();
/// let root = tree.root().unwrap();
///
/// assert_eq!(height_of(None), -1);
/// assert_eq!(height_of(root.left()), 0);
/// assert_eq!(height_of(Some(root)), 1);
/// ```
pub fn height_of(node: Option<&Node>) -> i32 {
    match node {
        Some(node) => node.height(),
        None => -1,
    }
}

/// A Binary Search Tree over unique `i64` values. This can be used for
/// inserting, finding, and removing values, walking the tree in the four
/// classical orders, and diagnosing and repairing lost balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Option<Box<Node>>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a height-balanced tree from an unsorted slice of values.
    ///
    /// The input is sorted numerically, duplicates are collapsed, and the
    /// tree is assembled by recursively taking the (lower) median of each
    /// remaining range as the subtree root. The resulting height is
    /// `ceil(log2(n + 1)) - 1` for `n` unique values, the minimum possible.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyInput`] when `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let tree = Tree::build(&[5, 5, 5, 3]).unwrap();
    /// assert_eq!(tree.in_order(), vec![3, 5]);
    ///
    /// let tree = Tree::build(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
    /// assert_eq!(tree.height(), 2);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn build(values: &[i64]) -> TreeResult<Self> {
        if values.is_empty() {
            return Err(TreeError::EmptyInput);
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        debug!("building tree over {} unique values", sorted.len());

        Ok(Self {
            root: from_sorted(&sorted),
        })
    }

    /// The root node, if the tree is non-empty.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` at the first empty position the ordered descent
    /// reaches. Inserting a value already in the tree is a silent no-op:
    /// duplicates are dropped, not stored twice. No rebalancing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::build(&[1, 2, 3]).unwrap();
    /// tree.insert(4);
    /// assert_eq!(tree.in_order(), vec![1, 2, 3, 4]);
    ///
    /// // A duplicate changes nothing.
    /// tree.insert(2);
    /// assert_eq!(tree.in_order(), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, value: i64) {
        let root = self.root.take();
        self.root = Some(insert_at(root, value));
    }

    /// Removes the node holding `value`, if present. Removing an absent
    /// value is a silent no-op.
    ///
    /// A leaf is detached; a node with one child is replaced by that child's
    /// subtree; a node with two children takes its in-order successor's
    /// value (the leftmost value of its right subtree) and the successor is
    /// then removed from the right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::build(&[1, 2, 3, 4, 5]).unwrap();
    /// tree.remove(3);
    /// assert_eq!(tree.in_order(), vec![1, 2, 4, 5]);
    ///
    /// // Removing an absent value leaves the tree unchanged.
    /// tree.remove(42);
    /// assert_eq!(tree.in_order(), vec![1, 2, 4, 5]);
    /// ```
    pub fn remove(&mut self, value: i64) {
        let root = self.root.take();
        self.root = remove_at(root, value);
    }

    /// Finds the node holding the queried value by strict ordered descent.
    ///
    /// The query itself is optional so that "nothing to search for" stays
    /// distinguishable from "searched and missed".
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidQuery`] when `query` is `None`;
    /// [`TreeError::EmptyTree`] when the descent reaches an empty subtree
    /// without matching, which includes searching an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::error::TreeError;
    /// use bstree::tree::Tree;
    ///
    /// let tree = Tree::build(&[2, 1, 3]).unwrap();
    ///
    /// assert_eq!(tree.find(Some(3)).unwrap().value(), 3);
    /// assert_eq!(tree.find(Some(42)), Err(TreeError::EmptyTree(42)));
    /// assert_eq!(tree.find(None), Err(TreeError::InvalidQuery));
    /// ```
    pub fn find(&self, query: Option<i64>) -> TreeResult<&Node> {
        let value = query.ok_or(TreeError::InvalidQuery)?;

        let mut current = self.root();
        loop {
            let node = current.ok_or(TreeError::EmptyTree(value))?;
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Ok(node),
            }
        }
    }

    /// Collects the values in breadth-first, left-to-right order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let tree = Tree::build(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
    /// assert_eq!(tree.level_order(), vec![4, 2, 6, 1, 3, 5, 7]);
    /// ```
    pub fn level_order(&self) -> Vec<i64> {
        let mut values = Vec::new();
        self.level_order_with(|node| values.push(node.value));
        values
    }

    /// Walks the tree breadth-first, invoking `visitor` on every node in
    /// left-to-right level order. Nothing is collected; use
    /// [`level_order`](Self::level_order) for that.
    ///
    /// The walk is iterative over an explicit queue, so arbitrarily deep
    /// trees cannot exhaust the call stack here.
    pub fn level_order_with(&self, mut visitor: impl FnMut(&Node)) {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root() {
            queue.push_back(root);
        }

        while let Some(node) = queue.pop_front() {
            visitor(node);
            if let Some(left) = node.left() {
                queue.push_back(left);
            }
            if let Some(right) = node.right() {
                queue.push_back(right);
            }
        }
    }

    /// Collects the values in ascending order (left, node, right).
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let tree = Tree::build(&[4, 1, 3, 2]).unwrap();
    /// assert_eq!(tree.in_order(), vec![1, 2, 3, 4]);
    /// ```
    pub fn in_order(&self) -> Vec<i64> {
        let mut values = Vec::new();
        self.in_order_with(|node| values.push(node.value));
        values
    }

    /// Walks the tree in order (left, node, right), invoking `visitor` on
    /// every node instead of collecting.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let tree = Tree::build(&[2, 1, 3]).unwrap();
    /// let mut doubled = Vec::new();
    /// tree.in_order_with(|node| doubled.push(node.value() * 2));
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    pub fn in_order_with(&self, mut visitor: impl FnMut(&Node)) {
        fn walk(link: Option<&Node>, visitor: &mut impl FnMut(&Node)) {
            if let Some(node) = link {
                walk(node.left(), visitor);
                visitor(node);
                walk(node.right(), visitor);
            }
        }
        walk(self.root(), &mut visitor);
    }

    /// Collects the values in pre-order (node, left, right).
    pub fn pre_order(&self) -> Vec<i64> {
        let mut values = Vec::new();
        self.pre_order_with(|node| values.push(node.value));
        values
    }

    /// Walks the tree in pre-order (node, left, right), invoking `visitor`
    /// on every node instead of collecting.
    pub fn pre_order_with(&self, mut visitor: impl FnMut(&Node)) {
        fn walk(link: Option<&Node>, visitor: &mut impl FnMut(&Node)) {
            if let Some(node) = link {
                visitor(node);
                walk(node.left(), visitor);
                walk(node.right(), visitor);
            }
        }
        walk(self.root(), &mut visitor);
    }

    /// Collects the values in post-order (left, right, node).
    pub fn post_order(&self) -> Vec<i64> {
        let mut values = Vec::new();
        self.post_order_with(|node| values.push(node.value));
        values
    }

    /// Walks the tree in post-order (left, right, node), invoking `visitor`
    /// on every node instead of collecting.
    pub fn post_order_with(&self, mut visitor: impl FnMut(&Node)) {
        fn walk(link: Option<&Node>, visitor: &mut impl FnMut(&Node)) {
            if let Some(node) = link {
                walk(node.left(), visitor);
                walk(node.right(), visitor);
                visitor(node);
            }
        }
        walk(self.root(), &mut visitor);
    }

    /// The height of the whole tree: `-1` when empty, otherwise the root
    /// node's [`height`](Node::height).
    pub fn height(&self) -> i32 {
        height_of(self.root())
    }

    /// The number of steps from the root down to `target`.
    ///
    /// The descent is iterative, choosing a direction by comparing values,
    /// and stops as soon as the current node *is* `target` or holds an equal
    /// value. Comparison is by value, not identity: a distinct node instance
    /// holding a value present on the search path reports that value's depth.
    /// Values are unique within a tree, so this only shows for nodes
    /// borrowed from a different tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::NodeNotFound`] when the descent runs off the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let tree = Tree::build(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
    /// let node = tree.find(Some(5)).unwrap();
    ///
    /// assert_eq!(tree.depth(tree.root().unwrap()), Ok(0));
    /// assert_eq!(tree.depth(node), Ok(2));
    /// ```
    pub fn depth(&self, target: &Node) -> TreeResult<usize> {
        let mut current = self.root();
        let mut steps = 0;

        while let Some(node) = current {
            if std::ptr::eq(node, target) {
                return Ok(steps);
            }
            match node.value.cmp(&target.value) {
                Ordering::Less => current = node.right(),
                Ordering::Greater => current = node.left(),
                Ordering::Equal => return Ok(steps),
            }
            steps += 1;
        }

        Err(TreeError::NodeNotFound(target.value))
    }

    /// Whether every node's left and right subtree heights differ by at
    /// most 1. The empty tree is balanced.
    ///
    /// This is balance in the AVL sense, not completeness: a balanced tree
    /// may still have gaps in its bottom level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// assert!(Tree::new().is_balanced());
    ///
    /// let mut tree = Tree::build(&[1, 2, 3]).unwrap();
    /// tree.insert(4);
    /// tree.insert(5);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        balanced_at(self.root())
    }

    /// Rebuilds the tree at minimal height, replacing the root in place.
    ///
    /// The values are collected by an in-order walk (already ascending and
    /// unique) and re-assembled with the same median construction as
    /// [`build`](Self::build). Rebalancing twice in a row yields the same
    /// structure both times; rebalancing an empty tree leaves it empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::build(&[1, 2, 3]).unwrap();
    /// for value in [10, 20, 30, 40] {
    ///     tree.insert(value);
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.in_order(), vec![1, 2, 3, 10, 20, 30, 40]);
    /// ```
    pub fn rebalance(&mut self) {
        let values = self.in_order();
        debug!("rebalancing tree over {} values", values.len());
        self.root = from_sorted(&values);
    }
}

/// Builds a subtree over a sorted, deduplicated slice by lifting the lower
/// median to the root and recursing on the two remaining halves.
fn from_sorted(values: &[i64]) -> Option<Box<Node>> {
    if values.is_empty() {
        return None;
    }

    // Lower median on even lengths: floor((start + end) / 2).
    let mid = (values.len() - 1) / 2;
    Some(Box::new(Node {
        value: values[mid],
        left: from_sorted(&values[..mid]),
        right: from_sorted(&values[mid + 1..]),
    }))
}

/// Inserts `value` into the subtree, returning the replacement subtree root.
fn insert_at(link: Option<Box<Node>>, value: i64) -> Box<Node> {
    match link {
        None => Box::new(Node::new(value, None, None)),
        Some(mut node) => {
            match value.cmp(&node.value) {
                Ordering::Less => node.left = Some(insert_at(node.left.take(), value)),
                Ordering::Greater => node.right = Some(insert_at(node.right.take(), value)),
                // Equal: the value is already present, drop the duplicate.
                Ordering::Equal => {}
            }
            node
        }
    }
}

/// Removes `value` from the subtree, returning the replacement subtree root.
fn remove_at(link: Option<Box<Node>>, value: i64) -> Option<Box<Node>> {
    let mut node = link?;
    match value.cmp(&node.value) {
        Ordering::Less => node.left = remove_at(node.left.take(), value),
        Ordering::Greater => node.right = remove_at(node.right.take(), value),
        Ordering::Equal => {
            return match (node.left.take(), node.right.take()) {
                (None, None) => None,
                (None, Some(right)) => Some(right),
                (Some(left), None) => Some(left),
                (Some(left), Some(right)) => {
                    // Two children: take the in-order successor's value,
                    // then remove the successor from the right subtree,
                    // where it has at most one child.
                    let successor = min_value(&right);
                    node.value = successor;
                    node.left = Some(left);
                    node.right = remove_at(Some(right), successor);
                    Some(node)
                }
            };
        }
    }
    Some(node)
}

/// The smallest value in a subtree: the leftmost node's.
fn min_value(node: &Node) -> i64 {
    match node.left() {
        Some(left) => min_value(left),
        None => node.value,
    }
}

fn balanced_at(link: Option<&Node>) -> bool {
    match link {
        None => true,
        Some(node) => {
            let skew = height_of(node.left()) - height_of(node.right());
            skew.abs() <= 1 && balanced_at(node.left()) && balanced_at(node.right())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sorts_and_dedups() {
        let tree = Tree::build(&[5, 5, 5, 3]).unwrap();

        assert_eq!(tree.in_order(), vec![3, 5]);
        assert_eq!(tree.level_order(), vec![3, 5]);
    }

    #[test]
    fn test_build_empty_input() {
        assert_eq!(Tree::build(&[]), Err(TreeError::EmptyInput));
    }

    #[test]
    fn test_build_single_value() {
        let tree = Tree::build(&[7]).unwrap();

        assert_eq!(tree.height(), 0);
        assert_eq!(tree.level_order(), vec![7]);
    }

    #[test]
    fn test_build_lower_median_on_ties() {
        // Even range: the lower of the two middle values becomes the root.
        let tree = Tree::build(&[1, 2]).unwrap();

        assert_eq!(tree.root().unwrap().value(), 1);
        assert_eq!(tree.level_order(), vec![1, 2]);
    }

    #[test]
    fn test_build_complete_tree_layout() {
        let tree = Tree::build(&[1, 2, 3, 4, 5, 6, 7]).unwrap();

        assert_eq!(tree.level_order(), vec![4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(tree.height(), 2);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_insert_descends_to_first_gap() {
        let mut tree = Tree::build(&[1, 2, 3]).unwrap();

        tree.insert(5);
        tree.insert(4);

        assert_eq!(tree.level_order(), vec![2, 1, 3, 5, 4]);
    }

    #[test]
    fn test_insert_duplicate_is_noop() {
        let mut tree = Tree::build(&[1, 2, 3]).unwrap();
        let before = tree.level_order();

        tree.insert(2);

        assert_eq!(tree.level_order(), before);
    }

    #[test]
    fn test_insert_into_empty_tree() {
        let mut tree = Tree::new();

        tree.insert(9);

        assert_eq!(tree.level_order(), vec![9]);
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = Tree::build(&[1, 2, 3]).unwrap();

        tree.remove(1);

        assert_eq!(tree.level_order(), vec![2, 3]);
    }

    #[test]
    fn test_remove_node_with_one_child() {
        let mut tree = Tree::build(&[1, 2, 3]).unwrap();

        tree.insert(4);
        tree.remove(3);

        assert_eq!(tree.level_order(), vec![2, 1, 4]);
    }

    #[test]
    fn test_remove_node_with_two_children() {
        let mut tree = Tree::build(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(tree.level_order(), vec![3, 1, 4, 2, 5]);

        // The root has two children: its in-order successor (4) replaces it.
        tree.remove(3);

        assert_eq!(tree.in_order(), vec![1, 2, 4, 5]);
        assert_eq!(tree.root().unwrap().value(), 4);
    }

    #[test]
    fn test_remove_root_leaf_empties_tree() {
        let mut tree = Tree::build(&[7]).unwrap();

        tree.remove(7);

        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut tree = Tree::build(&[1, 2, 3]).unwrap();
        let before = tree.clone();

        tree.remove(42);

        assert_eq!(tree, before);
    }

    #[test]
    fn test_find_hits_and_misses() {
        let mut tree = Tree::build(&[2, 1, 3]).unwrap();

        assert_eq!(tree.find(Some(1)).unwrap().value(), 1);
        assert_eq!(tree.find(Some(42)), Err(TreeError::EmptyTree(42)));

        // A freshly emptied tree reports the same error kind.
        tree.remove(1);
        tree.remove(2);
        tree.remove(3);
        assert_eq!(tree.find(Some(1)), Err(TreeError::EmptyTree(1)));
    }

    #[test]
    fn test_find_without_query_value() {
        let tree = Tree::build(&[1]).unwrap();

        assert_eq!(tree.find(None), Err(TreeError::InvalidQuery));
    }

    #[test]
    fn test_traversal_orders() {
        let tree = Tree::build(&[1, 2, 3, 4, 5, 6, 7]).unwrap();

        assert_eq!(tree.pre_order(), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.post_order(), vec![1, 3, 2, 5, 7, 6, 4]);
        assert_eq!(tree.level_order(), vec![4, 2, 6, 1, 3, 5, 7]);
    }

    #[test]
    fn test_traversals_on_empty_tree() {
        let tree = Tree::new();

        assert!(tree.level_order().is_empty());
        assert!(tree.pre_order().is_empty());
        assert!(tree.in_order().is_empty());
        assert!(tree.post_order().is_empty());
    }

    #[test]
    fn test_visitors_see_every_node() {
        let tree = Tree::build(&[1, 2, 3, 4, 5]).unwrap();

        let mut seen = Vec::new();
        tree.post_order_with(|node| seen.push(node.value()));
        assert_eq!(seen, tree.post_order());

        let mut count = 0;
        tree.level_order_with(|_| count += 1);
        assert_eq!(count, 5);
    }

    #[test]
    fn test_height_conventions() {
        let tree = Tree::build(&[1, 2, 3]).unwrap();
        let root = tree.root().unwrap();

        assert_eq!(height_of(None), -1);
        assert_eq!(root.left().unwrap().height(), 0);
        assert_eq!(root.height(), 1);
        assert_eq!(Tree::new().height(), -1);
    }

    #[test]
    fn test_depth_of_nodes_in_tree() {
        let tree = Tree::build(&[1, 2, 3, 4, 5, 6, 7]).unwrap();

        let root = tree.root().unwrap();
        assert_eq!(tree.depth(root), Ok(0));

        let leaf = tree.find(Some(7)).unwrap();
        assert_eq!(tree.depth(leaf), Ok(2));
    }

    #[test]
    fn test_depth_of_foreign_node() {
        let tree = Tree::build(&[1, 2, 3]).unwrap();
        let stray = Node::new(99, None, None);

        assert_eq!(tree.depth(&stray), Err(TreeError::NodeNotFound(99)));
    }

    #[test]
    fn test_depth_matches_by_value_on_the_path() {
        // The descent compares values, so a node instance from a different
        // tree holding a value present here reports that value's depth.
        let other = Tree::build(&[2]).unwrap();
        let foreign = other.root().unwrap();

        let tree = Tree::build(&[1, 2, 3]).unwrap();
        assert_eq!(tree.depth(foreign), Ok(0));
    }

    #[test]
    fn test_balance_diagnosis() {
        let mut tree = Tree::build(&[1, 2, 3]).unwrap();
        assert!(tree.is_balanced());

        tree.insert(4);
        assert!(tree.is_balanced());

        tree.insert(5);
        assert!(!tree.is_balanced());
    }

    #[test]
    fn test_rebalance_restores_minimal_height() {
        let mut tree = Tree::build(&[1]).unwrap();
        for value in 2..=7 {
            tree.insert(value);
        }
        assert_eq!(tree.height(), 6);

        tree.rebalance();

        assert_eq!(tree.height(), 2);
        assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_rebalance_is_idempotent() {
        let mut tree = Tree::build(&[1]).unwrap();
        for value in [9, 4, 6, 2, 8, 3] {
            tree.insert(value);
        }

        tree.rebalance();
        let once = tree.clone();
        tree.rebalance();

        assert_eq!(tree, once);
        assert_eq!(tree.level_order(), once.level_order());
    }

    #[test]
    fn test_rebalance_empty_tree() {
        let mut tree = Tree::new();

        tree.rebalance();

        assert!(tree.is_empty());
    }
}

#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`. This way we
    /// can ensure that after a random smattering of inserts, removes, and
    /// rebalances we hold the same set of values as the model.
    fn do_ops(ops: &[Op], tree: &mut Tree, set: &mut BTreeSet<i64>) {
        for op in ops {
            match op {
                Op::Insert(value) => {
                    tree.insert(*value);
                    set.insert(*value);
                }
                Op::Remove(value) => {
                    tree.remove(*value);
                    set.remove(value);
                }
                Op::Rebalance => tree.rebalance(),
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_matches_model(ops: Vec<Op>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.in_order() == set.iter().copied().collect::<Vec<_>>()
        }

        fn fuzz_in_order_strictly_ascending(ops: Vec<Op>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.in_order().windows(2).all(|pair| pair[0] < pair[1])
        }

        fn fuzz_find_agrees_with_model(ops: Vec<Op>, probes: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            probes.iter().map(|probe| *probe as i64).all(|probe| {
                tree.find(Some(probe)).is_ok() == set.contains(&probe)
            })
        }
    }
}
