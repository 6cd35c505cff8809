//! Arena-based MCTS tree shared by every search worker.
//!
//! Nodes are stored in fixed-size segments that are allocated on first use
//! and never move, so a `&Node` handed out by `get` stays valid for the
//! lifetime of the tree. Appending is lock-free: a worker reserves a slot
//! with one atomic increment and publishes the node into it before any other
//! worker can learn its `NodeId`.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::OnceLock;

use log::warn;

use super::node::{Node, NodeId};
use crate::rules::State;

const SEGMENT_SIZE: usize = 4096;

type Segment<S> = Box<[OnceLock<Node<S>>]>;

/// Largest capacity whose node IDs all stay below `NodeId::NONE`.
pub const MAX_CAPACITY: usize = u32::MAX as usize - 1;

/// Append-only node arena with a fixed capacity.
pub struct SearchTree<S: State> {
    segments: Box<[OnceLock<Segment<S>>]>,
    len: AtomicUsize,
    capacity: usize,
    full: AtomicBool,
}

impl<S: State> SearchTree<S> {
    /// Create a tree holding `root` and room for `capacity` nodes in total.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or above `MAX_CAPACITY`.
    pub fn new(root: Node<S>, capacity: usize) -> Self {
        assert!(capacity > 0, "tree needs room for the root");
        assert!(
            capacity <= MAX_CAPACITY,
            "capacity {capacity} exceeds the NodeId range"
        );

        let segment_count = capacity.div_ceil(SEGMENT_SIZE);
        let tree = Self {
            segments: (0..segment_count).map(|_| OnceLock::new()).collect(),
            len: AtomicUsize::new(0),
            capacity,
            full: AtomicBool::new(false),
        };
        tree.alloc(root);
        tree
    }

    /// The root node ID (always 0).
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Get a node by ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID was never returned by `alloc`.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node<S> {
        let index = id.raw() as usize;
        self.segments
            .get(index / SEGMENT_SIZE)
            .and_then(OnceLock::get)
            .and_then(|segment| segment[index % SEGMENT_SIZE].get())
            .unwrap_or_else(|| panic!("{id} is not allocated"))
    }

    /// Allocate a new node, returning its ID, or `None` once the arena is
    /// full.
    pub fn alloc(&self, node: Node<S>) -> Option<NodeId> {
        let index = self.len.fetch_add(1, Ordering::AcqRel);
        if index >= self.capacity {
            if !self.full.swap(true, Ordering::Relaxed) {
                warn!("search tree is full at {} nodes, no further expansion", self.capacity);
            }
            return None;
        }

        let segment = self.segments[index / SEGMENT_SIZE]
            .get_or_init(|| (0..SEGMENT_SIZE).map(|_| OnceLock::new()).collect());
        if segment[index % SEGMENT_SIZE].set(node).is_err() {
            unreachable!("arena slot {index} handed out twice");
        }
        Some(NodeId::new(index as u32))
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire).min(self.capacity)
    }

    /// Always false: the root is allocated on creation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Has an allocation been refused?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.full.load(Ordering::Relaxed)
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &Node<S> {
        self.get(self.root())
    }
}
