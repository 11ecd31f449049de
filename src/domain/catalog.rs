//! Ordered course catalog backed by an arena-allocated binary search tree.
//!
//! Nodes live in a `generational_arena::Arena`; child links are arena indices.
//! Every index is referenced from exactly one place (a parent slot or the root),
//! so each node exclusively owns its subtrees and dropping the catalog drops
//! the whole tree with the arena.

use std::cmp::Ordering;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::{debug, instrument};

/// Single course code stored in the tree.
#[derive(Debug)]
pub struct CourseNode {
    /// Course code, e.g. "CS101"
    pub code: String,
    /// Subtree of codes ordering before `code`
    pub left: Option<Index>,
    /// Subtree of codes ordering after `code`
    pub right: Option<Index>,
}

impl CourseNode {
    fn new(code: String) -> Self {
        Self {
            code,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree of course codes in lexicographic order.
///
/// No deletion and no rebalancing: inserting already sorted codes degrades
/// the tree into a list, which [`CourseCatalog::depth`] makes visible.
#[derive(Debug)]
pub struct CourseCatalog {
    arena: Arena<CourseNode>,
    root: Option<Index>,
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts `code` at its ordered position.
    ///
    /// Returns `false` when an equal code is already stored; the tree is left
    /// untouched in that case.
    #[instrument(level = "debug", skip(self, code))]
    pub fn insert(&mut self, code: impl Into<String>) -> bool {
        let code = code.into();
        let Some(mut current) = self.root else {
            debug!("insert: root {}", code);
            self.root = Some(self.arena.insert(CourseNode::new(code)));
            return true;
        };

        loop {
            let Some(node) = self.arena.get(current) else {
                return false;
            };
            let next = match code.as_str().cmp(node.code.as_str()) {
                Ordering::Equal => {
                    debug!("insert: {} already present", code);
                    return false;
                }
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            match next {
                Some(child) => current = child,
                None => break,
            }
        }

        let goes_left = self
            .arena
            .get(current)
            .map(|parent| code < parent.code)
            .unwrap_or(false);
        debug!("insert: {} below {:?} (left: {})", code, current, goes_left);
        let idx = self.arena.insert(CourseNode::new(code));
        if let Some(parent) = self.arena.get_mut(current) {
            if goes_left {
                parent.left = Some(idx);
            } else {
                parent.right = Some(idx);
            }
        }
        true
    }

    /// All course codes in ascending order.
    #[instrument(level = "debug", skip(self))]
    pub fn list_all(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    /// Borrowing in-order iterator over the stored codes.
    pub fn iter(&self) -> InOrderIter<'_> {
        InOrderIter::new(self)
    }

    pub fn contains(&self, code: &str) -> bool {
        let mut current = self.root;
        while let Some(node) = current.and_then(|idx| self.arena.get(idx)) {
            current = match code.cmp(node.code.as_str()) {
                Ordering::Equal => return true,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn get_node(&self, idx: Index) -> Option<&CourseNode> {
        self.arena.get(idx)
    }

    /// Number of nodes on the longest root-to-leaf path, 0 for an empty catalog.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.arena.get(idx) {
                stack.extend(node.left.map(|l| (l, depth + 1)));
                stack.extend(node.right.map(|r| (r, depth + 1)));
            }
        }
        max_depth
    }

    /// Renders the tree shape; children are prefixed with `<` (left) or `>` (right).
    pub fn to_tree(&self) -> Tree<String> {
        fn build(catalog: &CourseCatalog, idx: Index, label: String) -> Tree<String> {
            let mut tree = Tree::new(label);
            if let Some(node) = catalog.get_node(idx) {
                for (side, child) in [("<", node.left), (">", node.right)] {
                    if let Some(child_idx) = child {
                        if let Some(child_node) = catalog.get_node(child_idx) {
                            let label = format!("{} {}", side, child_node.code);
                            tree.push(build(catalog, child_idx, label));
                        }
                    }
                }
            }
            tree
        }

        match self.root.and_then(|r| self.get_node(r).map(|n| (r, n))) {
            Some((root_idx, root)) => build(self, root_idx, root.code.clone()),
            None => Tree::new("(empty catalog)".to_string()),
        }
    }
}

impl<S: Into<String>> Extend<S> for CourseCatalog {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for code in iter {
            self.insert(code);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for CourseCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

impl<'a> IntoIterator for &'a CourseCatalog {
    type Item = &'a str;
    type IntoIter = InOrderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Stack-based in-order traversal, ascending.
pub struct InOrderIter<'a> {
    catalog: &'a CourseCatalog,
    stack: Vec<Index>,
}

impl<'a> InOrderIter<'a> {
    fn new(catalog: &'a CourseCatalog) -> Self {
        let mut iter = Self {
            catalog,
            stack: Vec::new(),
        };
        iter.push_left_spine(catalog.root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Index>) {
        while let Some(idx) = current {
            self.stack.push(idx);
            current = self.catalog.arena.get(idx).and_then(|n| n.left);
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.catalog.arena.get(idx)?;
        self.push_left_spine(node.right);
        Some(node.code.as_str())
    }
}
