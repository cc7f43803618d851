//! Slot arena owning every node of a list.
//!
//! Nodes are addressed by [`NodeId`], a stable index into the slot vector.
//! Removed slots go on an intrusive free list and are reused by later
//! insertions, so ids stay valid until their node is removed.

use std::mem;

/// Stable address of a node inside an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// Forward link; `None` is "no successor".
pub(crate) type Link = Option<NodeId>;

/// One stored key/value pair with its per-level forward links.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    /// `forward[i]` is the next node on level `i`; `len() == level + 1`.
    pub(crate) forward: Vec<Link>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn level(&self) -> usize {
        self.forward.len() - 1
    }

    pub(crate) fn next(&self) -> Link {
        self.forward[0]
    }
}

#[derive(Debug, Clone)]
enum Slot<K, V> {
    Occupied(Node<K, V>),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Option<usize>,
    live: usize,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            live: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    pub(crate) fn insert(&mut self, node: Node<K, V>) -> NodeId {
        self.live += 1;
        match self.free {
            Some(index) => {
                match mem::replace(&mut self.slots[index], Slot::Occupied(node)) {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot {index}"),
                }
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> Node<K, V> {
        let vacant = Slot::Vacant { next_free: self.free };
        match mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id.0);
                self.live -= 1;
                node
            }
            Slot::Vacant { .. } => unreachable!("slot {} removed twice", id.0),
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node<K, V> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {}", id.0),
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {}", id.0),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.live = 0;
    }
}
