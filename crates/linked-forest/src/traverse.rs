//! Stack-free traversal primitives.
//!
//! These locate traversal neighbours using only the tree's own links —
//! no recursion, no explicit frontier, O(1) extra memory. The parent
//! back-reference acts as the implicit stack: `cross_bridge_*` ascends the
//! parent chain from a finished subtree until it finds the sibling subtree
//! to enter next. Traversal-order policies (pre/post/level-order iterators)
//! are built on top of these by callers.

use crate::navigator::Navigator;
use crate::types::{BinaryLinks, NaryLinks, Store};

/// Follows first-child links from `node` until no child exists.
pub fn descend_leftmost<N, S, V>(nav: &V, store: &S, node: u32) -> u32
where
    S: Store<N> + ?Sized,
    V: Navigator<N>,
{
    let mut curr = node;
    while let Some(child) = nav.first_child(store, curr) {
        curr = child;
    }
    curr
}

/// Follows last-child links from `node` until no child exists.
pub fn descend_rightmost<N, S, V>(nav: &V, store: &S, node: u32) -> u32
where
    S: Store<N> + ?Sized,
    V: Navigator<N>,
{
    let mut curr = node;
    while let Some(child) = nav.last_child(store, curr) {
        curr = child;
    }
    curr
}

/// Next node after the subtree rooted at `node` is finished.
///
/// Ascends the parent chain; at the first ancestor of which the previous
/// hop is not the last child, returns the next sibling of that hop. Absent
/// when the ascent reaches the top of the (possibly bounded) tree:
/// traversal is exhausted.
pub fn cross_bridge_right<N, S, V>(nav: &V, store: &S, node: u32) -> Option<u32>
where
    S: Store<N> + ?Sized,
    V: Navigator<N>,
{
    let mut prev = node;
    let mut next = nav.parent(store, prev);
    while let Some(p) = next {
        if nav.last_child(store, p) != Some(prev) {
            return nav.next_sibling(store, prev);
        }
        prev = p;
        next = nav.parent(store, p);
    }
    None
}

/// Mirror of [`cross_bridge_right`]: previous sibling subtree, found by
/// testing "is the previous hop the first child".
pub fn cross_bridge_left<N, S, V>(nav: &V, store: &S, node: u32) -> Option<u32>
where
    S: Store<N> + ?Sized,
    V: Navigator<N>,
{
    let mut prev = node;
    let mut next = nav.parent(store, prev);
    while let Some(p) = next {
        if nav.first_child(store, p) != Some(prev) {
            return nav.prev_sibling(store, prev);
        }
        prev = p;
        next = nav.parent(store, p);
    }
    None
}

/// Number of nodes in the binary subtree rooted at `node`.
pub fn binary_size<N, S>(store: &S, node: Option<u32>) -> usize
where
    N: BinaryLinks,
    S: Store<N> + ?Sized,
{
    match node {
        None => 0,
        Some(idx) => {
            let n = store.node(idx);
            1 + binary_size(store, n.left()) + binary_size(store, n.right())
        }
    }
}

/// Number of nodes in the n-ary subtree rooted at `node`.
pub fn nary_size<N, S>(store: &S, node: Option<u32>) -> usize
where
    N: NaryLinks,
    S: Store<N> + ?Sized,
{
    let Some(idx) = node else {
        return 0;
    };
    let mut size = 1;
    let mut child = store.node(idx).first_child();
    while let Some(c) = child {
        size += nary_size(store, Some(c));
        child = store.node(c).next_sibling();
    }
    size
}

/// Maximum child count over the n-ary subtree rooted at `node`.
///
/// Stops early once `max_expected` is reached.
pub fn arity<N, S>(store: &S, node: u32, max_expected: usize) -> usize
where
    N: NaryLinks,
    S: Store<N> + ?Sized,
{
    let mut result = 0;
    let mut child = store.node(node).first_child();
    while let Some(c) = child {
        result += 1;
        child = store.node(c).next_sibling();
    }
    let mut child = store.node(node).first_child();
    while let Some(c) = child {
        if result >= max_expected {
            return result;
        }
        result = result.max(arity(store, c, max_expected));
        child = store.node(c).next_sibling();
    }
    result
}
