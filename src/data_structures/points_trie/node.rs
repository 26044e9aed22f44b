// Copyright (c) 2025 Trie Shell Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the points trie.
//!
//! Nodes never hold references to each other. Children and the parent are
//! addressed through [`NodeId`] handles into the owning
//! [`NodeArena`](super::arena::NodeArena), so the parent back-link is a plain
//! index rather than an ownership cycle.

use std::fmt;

/// Points value stored for a key.
pub type Points = u32;

/// Number of child slots per node, one per letter `a..=z`.
pub const ALPHABET_SIZE: usize = 26;

/// Index of a node inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root always lives in the first arena slot and is never freed.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A lowercase ASCII letter, stored as its slot index (`a` = 0 ... `z` = 25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Converts an ASCII byte into a letter, rejecting anything outside `a..=z`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_lowercase() {
            Some(Self(byte - b'a'))
        } else {
            None
        }
    }

    /// Builds the letter for a child slot index.
    pub(crate) fn from_slot(slot: usize) -> Option<Self> {
        u8::try_from(slot)
            .ok()
            .filter(|&slot| usize::from(slot) < ALPHABET_SIZE)
            .map(Self)
    }

    /// Slot index of this letter in a child array.
    pub fn slot(self) -> usize {
        usize::from(self.0)
    }

    /// The letter as a `char`.
    pub fn as_char(self) -> char {
        char::from(b'a' + self.0)
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        u8::try_from(c)
            .ok()
            .and_then(Letter::from_byte)
            .ok_or(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single trie vertex.
///
/// A node is either structural (no value, links deeper keys) or terminal for
/// the key spelled by the path from the root (has a value). A non-root node
/// with neither a value nor children is pruned as soon as it becomes so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Letter on the edge from the parent; `None` only for the root.
    letter: Option<Letter>,

    /// Points stored if this node terminates a key.
    value: Option<Points>,

    /// Child slots indexed by [`Letter::slot`].
    children: [Option<NodeId>; ALPHABET_SIZE],

    /// Non-owning back-link used for upward pruning; `None` only for the root.
    parent: Option<NodeId>,
}

impl Node {
    /// Creates the distinguished root node.
    pub fn root() -> Self {
        Self {
            letter: None,
            value: None,
            children: [None; ALPHABET_SIZE],
            parent: None,
        }
    }

    /// Creates a value-less node for `letter` below `parent`.
    pub fn new(letter: Letter, parent: NodeId) -> Self {
        Self {
            letter: Some(letter),
            value: None,
            children: [None; ALPHABET_SIZE],
            parent: Some(parent),
        }
    }

    /// Whether this node is the root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn letter(&self) -> Option<Letter> {
        self.letter
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn value(&self) -> Option<Points> {
        self.value
    }

    /// Assigns a value. Gaining a value never makes a node prunable.
    pub fn set_value(&mut self, value: Points) {
        self.value = Some(value);
    }

    /// Clears the value and returns what was stored.
    pub fn take_value(&mut self) -> Option<Points> {
        self.value.take()
    }

    /// O(1) slot lookup.
    pub fn child(&self, letter: Letter) -> Option<NodeId> {
        self.children[letter.slot()]
    }

    /// Installs or clears the child slot for `letter`.
    pub fn set_child(&mut self, letter: Letter, child: Option<NodeId>) {
        self.children[letter.slot()] = child;
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Present children in ascending letter order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (Letter, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(slot, child)| Some((Letter::from_slot(slot)?, (*child)?)))
    }

    /// A node that may no longer exist: not the root, no value, no children.
    pub fn is_prunable(&self) -> bool {
        !self.is_root() && self.value.is_none() && !self.has_children()
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::root()
    }
}
