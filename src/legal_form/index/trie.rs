//! Reversed character trie over cleaned legal-form phrases.
//!
//! Phrases are inserted back to front. The matcher grows its window of
//! cleaned tokens leftwards, which appends the new token's characters (in
//! reverse) to the reversed window key. The walk therefore continues from
//! where the previous step stopped instead of re-hashing the whole window.

use std::collections::HashMap;

type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, NodeId>,
    /// A phrase ends here (reading the phrase backwards).
    terminal: bool,
}

#[derive(Debug, Clone)]
pub struct ReverseTrie {
    nodes: Vec<TrieNode>,
}

impl ReverseTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Insert a phrase. The empty phrase is ignored so the root never matches.
    pub fn insert(&mut self, phrase: &str) {
        if phrase.is_empty() {
            return;
        }

        let mut node = ROOT;
        for c in phrase.chars().rev() {
            node = match self.nodes[node as usize].children.get(&c) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len() as NodeId;
                    self.nodes.push(TrieNode::default());
                    self.nodes[node as usize].children.insert(c, next);
                    next
                }
            };
        }
        self.nodes[node as usize].terminal = true;
    }

    /// Start a new, empty window.
    pub fn cursor(&self) -> TrieCursor<'_> {
        TrieCursor {
            trie: self,
            node: Some(ROOT),
        }
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for ReverseTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Position of a growing window inside a [`ReverseTrie`].
#[derive(Debug, Clone, Copy)]
pub struct TrieCursor<'t> {
    trie: &'t ReverseTrie,
    node: Option<NodeId>,
}

impl TrieCursor<'_> {
    /// Prepend a cleaned token to the window.
    ///
    /// Returns `false` once no phrase can end with the current window; the
    /// cursor stays dead from then on, since a longer window cannot match
    /// either.
    pub fn prepend(&mut self, token: &str) -> bool {
        let Some(mut node) = self.node else {
            return false;
        };

        for c in token.chars().rev() {
            match self.trie.nodes[node as usize].children.get(&c) {
                Some(&next) => node = next,
                None => {
                    self.node = None;
                    return false;
                }
            }
        }

        self.node = Some(node);
        true
    }

    /// The window concatenation is a complete phrase.
    pub fn is_match(&self) -> bool {
        self.node
            .is_some_and(|node| self.trie.nodes[node as usize].terminal)
    }
}
