//! Console rendering of a [`Tree`](crate::tree::Tree).
//!
//! The tree is drawn sideways: a node's right subtree appears above it and
//! its left subtree below, so reading top to bottom walks the values in
//! descending order. Branch glyphs (`┌── `, `└── `, `│`) connect each node
//! to its parent. This is a debugging aid, not a stable output format.
//!
//! ```text
//! │       ┌── 67
//! │   ┌── 54
//! │   │   └── 25
//! └── 9
//!     │   ┌── 7
//!     └── 3
//!         └── 2
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

impl Tree {
    /// Renders the whole tree as a multi-line string. An empty tree renders
    /// as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let tree = Tree::build(&[1, 2, 3]).unwrap();
    /// assert_eq!(tree.render(), "│   ┌── 3\n└── 2\n    └── 1\n");
    /// ```
    pub fn render(&self) -> String {
        match self.root() {
            Some(root) => render_node(root),
            None => String::new(),
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Renders the subtree rooted at `node`.
pub fn render_node(node: &Node) -> String {
    let mut out = String::new();
    render_into(&mut out, node, "", true);
    out
}

fn render_into(out: &mut String, node: &Node, prefix: &str, is_left: bool) {
    if let Some(right) = node.right() {
        let above = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        render_into(out, right, &above, false);
    }

    out.push_str(prefix);
    out.push_str(if is_left { "└── " } else { "┌── " });
    out.push_str(&node.value().to_string());
    out.push('\n');

    if let Some(left) = node.left() {
        let below = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        render_into(out, left, &below, true);
    }
}
