//! Allocator abstraction and the default slab-backed implementation.
//!
//! [`SlotAllocator`] splits node allocation into the four steps the
//! ownership protocol needs: reserve raw storage, initialize in place,
//! finalize in place, release storage. [`SlabArena`] implements it over a
//! vector with an intrusive free list; each slot moves through
//! `Vacant → Reserved → Occupied → Reserved → Vacant`.

use thiserror::Error;

use crate::types::Store;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AllocError {
    #[error("node storage limit reached: {limit}")]
    LimitReached { limit: usize },
    #[error("slot index space exhausted")]
    IndexExhausted,
    #[error("storage reservation refused")]
    Refused,
}

/// Storage for nodes of one shape, reserved and released one slot at a time.
///
/// Misuse — initializing a slot that was not reserved, releasing a slot
/// that still holds a node, accessing a vacant slot — is caller error and
/// panics. Release of a given reservation must happen exactly once.
pub trait SlotAllocator<N> {
    /// Reserves raw storage for one node.
    fn reserve(&mut self) -> Result<u32, AllocError>;

    /// Initializes a reserved slot with `node`.
    fn init(&mut self, slot: u32, node: N);

    /// Drops the node state in an occupied slot, leaving the raw storage
    /// reserved.
    fn finalize(&mut self, slot: u32);

    /// Returns a reserved slot's storage to the allocator.
    fn release(&mut self, slot: u32);

    fn get(&self, slot: u32) -> &N;
    fn get_mut(&mut self, slot: u32) -> &mut N;
}

#[derive(Debug)]
enum Slot<N> {
    Vacant { next_free: Option<u32> },
    Reserved,
    Occupied(N),
}

/// Vector-backed [`SlotAllocator`] with slot reuse and an optional live-node
/// limit for surfacing allocation failure deterministically.
///
/// Slot indices are `u32`, so an arena holds at most `u32::MAX` slots;
/// reserving past that reports [`AllocError::IndexExhausted`].
#[derive(Debug)]
pub struct SlabArena<N> {
    slots: Vec<Slot<N>>,
    free_head: Option<u32>,
    limit: Option<usize>,
    live: usize,
}

impl<N> SlabArena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            limit: None,
            live: 0,
        }
    }

    /// Arena that refuses reservations once `limit` slots are live.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            limit: Some(limit),
            live: 0,
        }
    }

    /// Number of currently reserved or occupied slots.
    pub fn live(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total slots ever grown, vacant ones included.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<N> Default for SlabArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> SlotAllocator<N> for SlabArena<N> {
    fn reserve(&mut self) -> Result<u32, AllocError> {
        if let Some(limit) = self.limit {
            if self.live >= limit {
                return Err(AllocError::LimitReached { limit });
            }
        }
        let idx = match self.free_head {
            Some(idx) => {
                self.free_head = match self.slots[idx as usize] {
                    Slot::Vacant { next_free } => next_free,
                    _ => panic!("free list points at a non-vacant slot"),
                };
                self.slots[idx as usize] = Slot::Reserved;
                idx
            }
            None => {
                let idx =
                    u32::try_from(self.slots.len()).map_err(|_| AllocError::IndexExhausted)?;
                self.slots.push(Slot::Reserved);
                idx
            }
        };
        self.live += 1;
        Ok(idx)
    }

    fn init(&mut self, slot: u32, node: N) {
        match &mut self.slots[slot as usize] {
            s @ Slot::Reserved => *s = Slot::Occupied(node),
            _ => panic!("init on a slot that was not reserved"),
        }
    }

    fn finalize(&mut self, slot: u32) {
        match &mut self.slots[slot as usize] {
            s @ Slot::Occupied(_) => *s = Slot::Reserved,
            _ => panic!("finalize on a slot that holds no node"),
        }
    }

    fn release(&mut self, slot: u32) {
        match self.slots[slot as usize] {
            Slot::Reserved => {}
            Slot::Occupied(_) => panic!("release on a slot still holding a node"),
            Slot::Vacant { .. } => panic!("double release of a slot"),
        }
        self.slots[slot as usize] = Slot::Vacant {
            next_free: self.free_head,
        };
        self.free_head = Some(slot);
        self.live -= 1;
    }

    fn get(&self, slot: u32) -> &N {
        match &self.slots[slot as usize] {
            Slot::Occupied(node) => node,
            _ => panic!("access to a slot with no live node"),
        }
    }

    fn get_mut(&mut self, slot: u32) -> &mut N {
        match &mut self.slots[slot as usize] {
            Slot::Occupied(node) => node,
            _ => panic!("access to a slot with no live node"),
        }
    }
}

impl<N> Store<N> for SlabArena<N> {
    fn node(&self, idx: u32) -> &N {
        self.get(idx)
    }
}
