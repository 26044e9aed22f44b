//! Points Trie Implementation
//!
//! This module provides a prefix tree mapping lowercase ASCII names to points.
//! Nodes live in an index-addressed arena; every node keeps a non-owning
//! parent index so that removing a value can prune the chain of nodes that
//! became useless, walking upwards in a loop.
//!
//! The trie reports expected failures (duplicate insert, missing key) through
//! `bool` and `Option` results. The `try_*` family wraps the same operations
//! in [`PointsTrieResult`].

mod arena;
mod error;
mod node;

use std::fmt;

use tracing::{debug, trace, warn};

use arena::NodeArena;
pub use error::PointsTrieError;
pub use node::{Letter, Node, NodeId, Points, ALPHABET_SIZE};

/// Result type for points trie operations
pub type PointsTrieResult<T> = Result<T, PointsTrieError>;

/// Rendering of a trie without any entries.
pub const EMPTY_TRIE: &str = "+";

/// A trie mapping non-empty lowercase names to [`Points`].
///
/// Key features:
/// * O(1) child lookup through a fixed 26-slot child array
/// * Automatic pruning of structural nodes that no longer lead to a value
/// * Canonical, alphabetically ordered serialization
///
/// The structure is not synchronized. Share it behind a single lock
/// (e.g. `Mutex<PointsTrie>`) held for the whole operation, since pruning can
/// touch an unbounded chain of ancestors.
#[derive(Debug, Clone, Default)]
pub struct PointsTrie {
    /// Node storage; slot 0 is the root
    arena: NodeArena,

    /// Number of nodes currently carrying a value
    len: usize,
}

/// Maps a key to its letters, or `None` if the key is empty or holds any
/// byte outside `a..=z`.
fn letters(key: &str) -> Option<Vec<Letter>> {
    if key.is_empty() {
        return None;
    }
    key.bytes().map(Letter::from_byte).collect()
}

impl PointsTrie {
    /// Creates a new empty `PointsTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` for `key`.
    ///
    /// Returns `false` without mutating anything if `key` already has a value.
    /// Missing nodes along the path are created as structural nodes.
    pub fn insert(&mut self, key: &str, value: Points) -> bool {
        let Some(path) = letters(key) else {
            warn!(key, "rejected insert of invalid key");
            return false;
        };

        if self.lookup(key).is_some() {
            return false;
        }

        let mut current = NodeId::ROOT;
        for letter in path {
            current = self.child_or_insert(current, letter);
        }

        match self.arena.get_mut(current) {
            Some(node) => node.set_value(value),
            None => return false,
        }
        self.len += 1;

        debug!(key, value, "inserted key");
        true
    }

    /// Returns the points stored for `key`.
    ///
    /// A missing path and a purely structural node are both misses.
    pub fn lookup(&self, key: &str) -> Option<Points> {
        self.find(key)
            .and_then(|id| self.arena.get(id))
            .and_then(Node::value)
    }

    /// Overwrites the points of an existing key.
    ///
    /// Returns `false` if the key has no node or its node holds no value.
    pub fn update(&mut self, key: &str, value: Points) -> bool {
        let Some(node) = self.valued_node(key).and_then(|id| self.arena.get_mut(id)) else {
            return false;
        };
        node.set_value(value);

        debug!(key, value, "updated key");
        true
    }

    /// Removes the value of `key` and prunes nodes left without purpose.
    ///
    /// Returns `false` under the same conditions as [`PointsTrie::update`].
    pub fn delete(&mut self, key: &str) -> bool {
        let Some(id) = self.valued_node(key) else {
            return false;
        };
        let removed = self.remove_value(id);

        debug!(key, ?removed, "deleted key");
        removed.is_some()
    }

    /// Canonical textual form of the trie.
    ///
    /// An empty trie renders as `+`. Otherwise the root's children are
    /// rendered in letter order, each as its letter, `[points]` when it
    /// carries a value, and its own children wrapped in parentheses.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Whether `key` currently has a value.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Number of keys with a value.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live nodes excluding the root.
    ///
    /// Because useless nodes are pruned eagerly, this always equals the
    /// number of distinct non-empty prefixes of the stored keys.
    pub fn node_count(&self) -> usize {
        self.arena.live() - 1
    }

    /// Like [`PointsTrie::insert`], but reports why the insert failed.
    pub fn try_insert(&mut self, key: &str, value: Points) -> PointsTrieResult<()> {
        if letters(key).is_none() {
            return Err(PointsTrieError::InvalidKey(key.to_string()));
        }
        if self.insert(key, value) {
            Ok(())
        } else {
            Err(PointsTrieError::DuplicateKey(key.to_string()))
        }
    }

    /// Like [`PointsTrie::lookup`], but a miss is an error.
    pub fn try_lookup(&self, key: &str) -> PointsTrieResult<Points> {
        self.lookup(key)
            .ok_or_else(|| PointsTrieError::KeyNotFound(key.to_string()))
    }

    /// Like [`PointsTrie::update`], but a miss is an error.
    pub fn try_update(&mut self, key: &str, value: Points) -> PointsTrieResult<()> {
        if self.update(key, value) {
            Ok(())
        } else {
            Err(PointsTrieError::KeyNotFound(key.to_string()))
        }
    }

    /// Like [`PointsTrie::delete`], but a miss is an error.
    pub fn try_delete(&mut self, key: &str) -> PointsTrieResult<()> {
        if self.delete(key) {
            Ok(())
        } else {
            Err(PointsTrieError::KeyNotFound(key.to_string()))
        }
    }

    /// Walks one child per letter of `key` and returns the node reached.
    ///
    /// Empty keys and keys with bytes outside `a..=z` never match.
    pub fn find(&self, key: &str) -> Option<NodeId> {
        let Some(path) = letters(key) else {
            warn!(key, "lookup with invalid key");
            return None;
        };

        path.into_iter()
            .try_fold(NodeId::ROOT, |current, letter| self.child(current, letter))
    }

    /// The child of `id` for `letter`, if present.
    pub fn child(&self, id: NodeId, letter: Letter) -> Option<NodeId> {
        self.arena.get(id)?.child(letter)
    }

    /// Read access to a live node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    /// The node of `key` if it holds a value.
    fn valued_node(&self, key: &str) -> Option<NodeId> {
        self.find(key)
            .filter(|&id| self.arena.get(id).and_then(Node::value).is_some())
    }

    /// Returns the child of `parent` for `letter`, creating it if missing.
    fn child_or_insert(&mut self, parent: NodeId, letter: Letter) -> NodeId {
        if let Some(existing) = self.child(parent, letter) {
            return existing;
        }

        let child = self.arena.alloc(Node::new(letter, parent));
        if let Some(node) = self.arena.get_mut(parent) {
            node.set_child(letter, Some(child));
        }
        child
    }

    /// Clears the value of `id`, then prunes upwards.
    fn remove_value(&mut self, id: NodeId) -> Option<Points> {
        let removed = self.arena.get_mut(id)?.take_value();
        if removed.is_some() {
            self.len -= 1;
        }
        self.prune_from(id);
        removed
    }

    /// Detaches and frees `id` while it is prunable, then repeats for its
    /// parent. Stops at the first node that still has a value or a child, and
    /// always at the root.
    fn prune_from(&mut self, id: NodeId) {
        let mut current = id;

        loop {
            let Some(node) = self.arena.get(current) else {
                return;
            };
            if !node.is_prunable() {
                return;
            }
            let (Some(parent), Some(letter)) = (node.parent(), node.letter()) else {
                return;
            };

            self.arena.free(current);
            if let Some(parent_node) = self.arena.get_mut(parent) {
                parent_node.set_child(letter, None);
            }
            trace!(node = current.index(), %letter, "pruned node");

            current = parent;
        }
    }
}

/// Step of the iterative pre-order traversal used for rendering.
enum Frame {
    Enter(NodeId),
    Close,
}

impl fmt::Display for PointsTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.arena.root();
        if !root.has_children() {
            return f.write_str(EMPTY_TRIE);
        }

        let mut stack: Vec<Frame> = root.children().rev().map(|(_, id)| Frame::Enter(id)).collect();

        while let Some(frame) = stack.pop() {
            let id = match frame {
                Frame::Close => {
                    f.write_str(")")?;
                    continue;
                }
                Frame::Enter(id) => id,
            };
            let Some(node) = self.arena.get(id) else {
                continue;
            };

            if let Some(letter) = node.letter() {
                write!(f, "{letter}")?;
            }
            if let Some(value) = node.value() {
                write!(f, "[{value}]")?;
            }
            if node.has_children() {
                f.write_str("(")?;
                stack.push(Frame::Close);
                stack.extend(node.children().rev().map(|(_, child)| Frame::Enter(child)));
            }
        }

        Ok(())
    }
}
