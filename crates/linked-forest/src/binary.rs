//! Binary node: a value plus left/right child links and a parent
//! back-reference.

use crate::types::BinaryLinks;

#[derive(Clone, Debug)]
pub struct BinaryNode<T> {
    pub parent: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub value: T,
}

impl<T> BinaryNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            parent: None,
            left: None,
            right: None,
            value,
        }
    }
}

impl<T> BinaryLinks for BinaryNode<T> {
    fn parent(&self) -> Option<u32> {
        self.parent
    }

    fn left(&self) -> Option<u32> {
        self.left
    }

    fn right(&self) -> Option<u32> {
        self.right
    }

    fn set_parent(&mut self, v: Option<u32>) {
        self.parent = v;
    }

    fn set_left(&mut self, v: Option<u32>) {
        self.left = v;
    }

    fn set_right(&mut self, v: Option<u32>) {
        self.right = v;
    }
}
