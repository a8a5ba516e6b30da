//! N-ary node: a value, an owning first-child link, a last-child cache,
//! and sibling/parent back-references.

use crate::types::NaryLinks;

#[derive(Clone, Debug)]
pub struct NaryNode<T> {
    pub parent: Option<u32>,
    pub first_child: Option<u32>,
    pub last_child: Option<u32>,
    pub next_sibling: Option<u32>,
    pub prev_sibling: Option<u32>,
    pub value: T,
}

impl<T> NaryNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            prev_sibling: None,
            value,
        }
    }
}

impl<T> NaryLinks for NaryNode<T> {
    fn parent(&self) -> Option<u32> {
        self.parent
    }

    fn first_child(&self) -> Option<u32> {
        self.first_child
    }

    fn last_child(&self) -> Option<u32> {
        self.last_child
    }

    fn next_sibling(&self) -> Option<u32> {
        self.next_sibling
    }

    fn prev_sibling(&self) -> Option<u32> {
        self.prev_sibling
    }

    fn set_parent(&mut self, v: Option<u32>) {
        self.parent = v;
    }

    fn set_first_child(&mut self, v: Option<u32>) {
        self.first_child = v;
    }

    fn set_last_child(&mut self, v: Option<u32>) {
        self.last_child = v;
    }

    fn set_next_sibling(&mut self, v: Option<u32>) {
        self.next_sibling = v;
    }

    fn set_prev_sibling(&mut self, v: Option<u32>) {
        self.prev_sibling = v;
    }
}

/// Appends `child` as the last child of `parent`, in O(1) via the
/// `last_child` cache.
///
/// `child` must not currently be linked into any sibling list.
pub fn append_child<N: NaryLinks>(arena: &mut [N], parent: u32, child: u32) {
    let tail = arena[parent as usize].last_child();
    arena[child as usize].set_parent(Some(parent));
    arena[child as usize].set_prev_sibling(tail);
    arena[child as usize].set_next_sibling(None);
    match tail {
        Some(tail) => arena[tail as usize].set_next_sibling(Some(child)),
        None => arena[parent as usize].set_first_child(Some(child)),
    }
    arena[parent as usize].set_last_child(Some(child));
}
