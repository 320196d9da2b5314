//! This crate implements an in-memory Binary Search Tree (BST) over
//! unique numeric keys, built from unsorted input.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching the tree takes `O(height)` (where `height` is the longest path
//! from the root `Node` to a leaf `Node`) and an in-order walk visits the
//! values in ascending order.
//!
//! ## This tree
//!
//! [`Tree::build`](tree::Tree::build) sorts and deduplicates its input and
//! assembles a tree of minimal height. Point [`insert`](tree::Tree::insert)s
//! and [`remove`](tree::Tree::remove)s keep the ordering invariants but make
//! no attempt to stay balanced; [`is_balanced`](tree::Tree::is_balanced)
//! diagnoses the damage and [`rebalance`](tree::Tree::rebalance) rebuilds the
//! tree at minimal height again. The four classical traversal orders (level,
//! pre, in, post) are available both as collecting calls and as visitor
//! walks, and [`render`](tree::Tree::render) draws the structure sideways for
//! the terminal.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod render;
pub mod tree;

#[cfg(test)]
mod test;
