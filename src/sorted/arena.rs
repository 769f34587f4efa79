//! Index-addressed node storage for [`SortedList`](super::SortedList).
//!
//! Nodes live in a `Vec` of slots and refer to their neighbours by
//! [`NodeIndex`] instead of by pointer, so the list never forms an ownership
//! cycle. Released slots are threaded onto a free list and handed out again
//! by the next [`NodeArena::allocate`].
//!
//! ```text
//! slots:  [ Occupied(b) | Vacant -> None | Occupied(a) | Occupied(c) ]
//! links:    a(2) <-> b(0) <-> c(3)          free_head = Some(1)
//! ```

/// Stable address of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(usize);

/// A list node: the element plus the addresses of its neighbours.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) previous: Option<NodeIndex>,
    pub(crate) next: Option<NodeIndex>,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeIndex> },
}

/// Slot storage with free-list reuse.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    /// Most recently released slot, if any.
    free_head: Option<NodeIndex>,
    occupied: usize,
}

impl<T> NodeArena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            occupied: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            occupied: 0,
        }
    }

    /// Stores `node`, reusing a released slot when one is available.
    pub(crate) fn allocate(&mut self, node: Node<T>) -> NodeIndex {
        self.occupied += 1;
        match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index.0];
                match slot {
                    Slot::Vacant { next_free } => self.free_head = *next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                }
                *slot = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeIndex(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of its slot and puts the slot on the free list.
    ///
    /// The caller is responsible for relinking the neighbours.
    pub(crate) fn release(&mut self, index: NodeIndex) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[index.0], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(index);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { .. } => unreachable!("released a vacant slot"),
        }
    }

    #[inline]
    pub(crate) fn node(&self, index: NodeIndex) -> &Node<T> {
        match &self.slots[index.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("live link points at a vacant slot"),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        match &mut self.slots[index.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("live link points at a vacant slot"),
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.occupied
    }

    /// Number of slots ever handed out, occupied or vacant.
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.occupied = 0;
    }
}
