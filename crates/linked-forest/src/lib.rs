//! Linked-node tree utilities for arbitrarily shaped trees.
//!
//! Two node shapes — binary (fixed two children) and n-ary (variable child
//! count) — stored in caller-owned index arenas, with:
//!
//! - a capability-polymorphic [`Navigator`] layer presenting a uniform
//!   first/last-child and next/prev-sibling operation set over both shapes,
//! - stack-free traversal primitives (`descend_*`, `cross_bridge_*`) that
//!   use the parent back-reference as an implicit stack, and
//! - a recursive [`construct`]/[`destroy`] ownership protocol over a
//!   pluggable [`SlotAllocator`], returning a scoped [`OwnedSubtree`]
//!   handle with guaranteed cleanup, including on partial-construction
//!   failure.
//!
//! All "pointers" are `Option<u32>` indices; `None` is the absent sentinel.
//! Child-ward links own their subtrees, parent and sibling links are plain
//! back-references, and only owning links are walked for destruction.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`BinaryLinks`] / [`NaryLinks`] traits, [`Store`] access |
//! | [`binary`] | [`BinaryNode`] |
//! | [`nary`] | [`NaryNode`], [`append_child`] |
//! | [`navigator`] | [`Navigator`], [`BinaryNavigator`], [`NaryNavigator`] |
//! | [`traverse`] | `descend_*`, `cross_bridge_*`, sizes, arity |
//! | [`slab`] | [`SlotAllocator`], [`SlabArena`], [`AllocError`] |
//! | [`subtree`] | blueprints, [`Subtree`], [`construct`], [`OwnedSubtree`] |

pub mod binary;
pub mod nary;
pub mod navigator;
pub mod slab;
pub mod subtree;
pub mod traverse;
pub mod types;

pub use binary::BinaryNode;
pub use nary::{append_child, NaryNode};
pub use navigator::{BinaryNavigator, NaryNavigator, Navigator};
pub use slab::{AllocError, SlabArena, SlotAllocator};
pub use subtree::{
    construct, destroy, BinaryBlueprint, NaryBlueprint, OwnedSubtree, Subtree,
};
pub use traverse::{
    arity, binary_size, cross_bridge_left, cross_bridge_right, descend_leftmost,
    descend_rightmost, nary_size,
};
pub use types::{BinaryLinks, NaryLinks, Store};
