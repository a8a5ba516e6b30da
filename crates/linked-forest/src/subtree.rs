//! Recursive subtree construction and destruction through a
//! [`SlotAllocator`], with scoped ownership.
//!
//! A blueprint describes the shape to build; [`construct`] reserves,
//! recursively builds children, links, and initializes, returning an
//! [`OwnedSubtree`] handle whose `Drop` destroys the whole subtree through
//! the same allocator on every exit path. If construction of a child
//! fails, everything already built under the failing node is destroyed and
//! its own reservation released before the error propagates: for every
//! successful reservation there is exactly one release, never two.
//!
//! Destruction walks owning links only — left/right for binary nodes,
//! first child and then along the sibling chain for n-ary — deepest-first,
//! then finalizes and releases the node itself.

use std::fmt;
use std::marker::PhantomData;

use crate::binary::BinaryNode;
use crate::nary::NaryNode;
use crate::slab::{AllocError, SlotAllocator};

/// Shape description for a binary subtree.
#[derive(Clone, Debug)]
pub struct BinaryBlueprint<T> {
    pub value: T,
    pub left: Option<Box<BinaryBlueprint<T>>>,
    pub right: Option<Box<BinaryBlueprint<T>>>,
}

impl<T> BinaryBlueprint<T> {
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: BinaryBlueprint<T>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: BinaryBlueprint<T>) -> Self {
        self.right = Some(Box::new(child));
        self
    }
}

/// Shape description for an n-ary subtree.
#[derive(Clone, Debug)]
pub struct NaryBlueprint<T> {
    pub value: T,
    pub children: Vec<NaryBlueprint<T>>,
}

impl<T> NaryBlueprint<T> {
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: NaryBlueprint<T>) -> Self {
        self.children.push(child);
        self
    }
}

/// Per-shape recursive construct/destroy, implemented by the node types.
pub trait Subtree: Sized {
    type Blueprint;

    /// Builds the subtree described by `blueprint`, wiring `parent` into
    /// the root's back-reference. On failure the allocator is left exactly
    /// as it was before the call.
    fn construct_at<A: SlotAllocator<Self>>(
        alloc: &mut A,
        blueprint: Self::Blueprint,
        parent: Option<u32>,
    ) -> Result<u32, AllocError>;

    /// Destroys the subtree rooted at `node`, deepest-first. No-op on
    /// `None`.
    fn destroy<A: SlotAllocator<Self>>(alloc: &mut A, node: Option<u32>);
}

impl<T> Subtree for BinaryNode<T> {
    type Blueprint = BinaryBlueprint<T>;

    fn construct_at<A: SlotAllocator<Self>>(
        alloc: &mut A,
        blueprint: Self::Blueprint,
        parent: Option<u32>,
    ) -> Result<u32, AllocError> {
        let BinaryBlueprint { value, left, right } = blueprint;
        let slot = alloc.reserve()?;
        let left = match left {
            Some(child) => match Self::construct_at(alloc, *child, Some(slot)) {
                Ok(idx) => Some(idx),
                Err(err) => {
                    alloc.release(slot);
                    return Err(err);
                }
            },
            None => None,
        };
        let right = match right {
            Some(child) => match Self::construct_at(alloc, *child, Some(slot)) {
                Ok(idx) => Some(idx),
                Err(err) => {
                    Self::destroy(alloc, left);
                    alloc.release(slot);
                    return Err(err);
                }
            },
            None => None,
        };
        alloc.init(
            slot,
            BinaryNode {
                parent,
                left,
                right,
                value,
            },
        );
        Ok(slot)
    }

    fn destroy<A: SlotAllocator<Self>>(alloc: &mut A, node: Option<u32>) {
        let Some(idx) = node else {
            return;
        };
        let (left, right) = {
            let n = alloc.get(idx);
            (n.left, n.right)
        };
        Self::destroy(alloc, left);
        Self::destroy(alloc, right);
        alloc.finalize(idx);
        alloc.release(idx);
    }
}

impl<T> Subtree for NaryNode<T> {
    type Blueprint = NaryBlueprint<T>;

    fn construct_at<A: SlotAllocator<Self>>(
        alloc: &mut A,
        blueprint: Self::Blueprint,
        parent: Option<u32>,
    ) -> Result<u32, AllocError> {
        let NaryBlueprint { value, children } = blueprint;
        let slot = alloc.reserve()?;
        let mut first = None;
        let mut last: Option<u32> = None;
        for child in children {
            match Self::construct_at(alloc, child, Some(slot)) {
                Ok(idx) => {
                    match last {
                        Some(tail) => {
                            alloc.get_mut(tail).next_sibling = Some(idx);
                            alloc.get_mut(idx).prev_sibling = Some(tail);
                        }
                        None => first = Some(idx),
                    }
                    last = Some(idx);
                }
                Err(err) => {
                    // Unwind the siblings built so far, oldest first.
                    let mut curr = first;
                    while let Some(c) = curr {
                        let next = alloc.get(c).next_sibling;
                        Self::destroy(alloc, Some(c));
                        curr = next;
                    }
                    alloc.release(slot);
                    return Err(err);
                }
            }
        }
        alloc.init(
            slot,
            NaryNode {
                parent,
                first_child: first,
                last_child: last,
                next_sibling: None,
                prev_sibling: None,
                value,
            },
        );
        Ok(slot)
    }

    fn destroy<A: SlotAllocator<Self>>(alloc: &mut A, node: Option<u32>) {
        let Some(idx) = node else {
            return;
        };
        let mut child = alloc.get(idx).first_child;
        while let Some(c) = child {
            let next = alloc.get(c).next_sibling;
            Self::destroy(alloc, Some(c));
            child = next;
        }
        alloc.finalize(idx);
        alloc.release(idx);
    }
}

/// Destroys the subtree rooted at `node` through `alloc`.
///
/// Idempotent on `None`; destroying the same live node twice is caller
/// error.
pub fn destroy<N, A>(alloc: &mut A, node: Option<u32>)
where
    N: Subtree,
    A: SlotAllocator<N>,
{
    N::destroy(alloc, node);
}

/// Builds the subtree described by `blueprint` and returns the owning
/// handle.
pub fn construct<'a, N, A>(
    alloc: &'a mut A,
    blueprint: N::Blueprint,
) -> Result<OwnedSubtree<'a, N, A>, AllocError>
where
    N: Subtree,
    A: SlotAllocator<N>,
{
    let root = N::construct_at(alloc, blueprint, None)?;
    Ok(OwnedSubtree {
        alloc,
        root,
        _node: PhantomData,
    })
}

/// Uniquely-owned subtree: a root index bound to the allocator that built
/// it. Dropping the handle destroys the subtree; [`release`](Self::release)
/// detaches the root and hands cleanup responsibility back to the caller.
pub struct OwnedSubtree<'a, N: Subtree, A: SlotAllocator<N>> {
    alloc: &'a mut A,
    root: u32,
    _node: PhantomData<N>,
}

impl<'a, N: Subtree, A: SlotAllocator<N>> OwnedSubtree<'a, N, A> {
    pub fn root(&self) -> u32 {
        self.root
    }

    pub fn allocator(&self) -> &A {
        self.alloc
    }

    pub fn allocator_mut(&mut self) -> &mut A {
        self.alloc
    }

    /// Detaches the root from the handle without destroying anything. The
    /// caller becomes responsible for eventually passing it to
    /// [`destroy`](crate::subtree::destroy).
    pub fn release(self) -> u32 {
        let root = self.root;
        std::mem::forget(self);
        root
    }

    /// Destroys the subtree now rather than at end of scope.
    pub fn destroy(self) {}
}

impl<'a, N: Subtree, A: SlotAllocator<N>> fmt::Debug for OwnedSubtree<'a, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedSubtree")
            .field("root", &self.root)
            .finish()
    }
}

impl<'a, N: Subtree, A: SlotAllocator<N>> Drop for OwnedSubtree<'a, N, A> {
    fn drop(&mut self) {
        N::destroy(self.alloc, Some(self.root));
    }
}
