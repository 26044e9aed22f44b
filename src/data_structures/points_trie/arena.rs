// Copyright (c) 2025 Trie Shell Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Index-addressed node pool for the points trie.
//!
//! Freed slots go onto a free list and are handed out again by the next
//! allocation. Slot 0 holds the root for the whole lifetime of the arena.

use super::node::{Node, NodeId};

#[derive(Debug, Clone)]
pub(crate) struct NodeArena {
    slots: Vec<Option<Node>>,
    free_list: Vec<usize>,
}

impl NodeArena {
    /// Creates an arena containing only the root.
    pub fn new() -> Self {
        Self {
            slots: vec![Some(Node::root())],
            free_list: Vec::new(),
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn root(&self) -> &Node {
        match self.slots.first() {
            Some(Some(root)) => root,
            _ => unreachable!("root slot is never freed"),
        }
    }

    /// Stores `node` and returns its handle, reusing a freed slot if any.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free_list.pop() {
            self.slots[index] = Some(node);
            return NodeId(index);
        }
        self.slots.push(Some(node));
        NodeId(self.slots.len() - 1)
    }

    /// Releases a slot. Freeing the root or an already free slot is a no-op.
    pub fn free(&mut self, id: NodeId) -> Option<Node> {
        if id == NodeId::ROOT {
            return None;
        }
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free_list.push(id.0);
        Some(node)
    }

    /// Live nodes, root included.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}
