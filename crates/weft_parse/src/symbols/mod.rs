//! Symbol tables: a set of keywords, each mapped to a value.
//!
//! Parsing a table matches the longest key at the cursor and produces a
//! clone of its value. Tables are populated before parsing; parsing only
//! reads them.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;
use weft_attr::Attribute;

use crate::{Context, Cursor, Parser};

struct Node<T> {
    value: Option<T>,
    children: FxHashMap<char, Node<T>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node {
            value: None,
            children: FxHashMap::default(),
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Node {
            value: self.value.clone(),
            children: self.children.clone(),
        }
    }
}

impl<T> Node<T> {
    fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Remove `key` below this node, pruning branches left empty.
    fn remove(&mut self, key: &str) -> Option<T> {
        let mut chars = key.chars();
        let Some(c) = chars.next() else {
            return self.value.take();
        };
        let child = self.children.get_mut(&c)?;
        let removed = child.remove(chars.as_str());
        if child.is_empty() {
            self.children.remove(&c);
        }
        removed
    }

    /// Longest key that prefixes `rest`; `consumed` bytes already matched.
    fn longest<'n>(
        &'n self,
        rest: &str,
        consumed: usize,
        no_case: bool,
        best: &mut Option<(usize, &'n T)>,
    ) {
        if let Some(value) = &self.value {
            if best.map_or(true, |(len, _)| consumed >= len) {
                *best = Some((consumed, value));
            }
        }
        let mut chars = rest.chars();
        let Some(c) = chars.next() else {
            return;
        };
        let next = chars.as_str();
        let consumed = consumed + c.len_utf8();
        if let Some(child) = self.children.get(&c) {
            child.longest(next, consumed, no_case, best);
        }
        if no_case {
            for (&key, child) in &self.children {
                if key != c && key.to_lowercase().eq(c.to_lowercase()) {
                    child.longest(next, consumed, no_case, best);
                }
            }
        }
    }
}

/// A trie of string keys to values of type `T`.
pub struct Symbols<T> {
    root: Node<T>,
    len: usize,
}

impl<T> Default for Symbols<T> {
    fn default() -> Self {
        Symbols {
            root: Node::default(),
            len: 0,
        }
    }
}

impl<T: Clone> Clone for Symbols<T> {
    fn clone(&self) -> Self {
        Symbols {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Symbols<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Symbols").field("len", &self.len).finish()
    }
}

impl<T> Symbols<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(key, value)` pairs; later duplicates win.
    pub fn from_pairs<'k>(pairs: impl IntoIterator<Item = (&'k str, T)>) -> Self {
        let mut table = Self::new();
        for (key, value) in pairs {
            table.add(key, value);
        }
        table
    }

    /// Build a table from a slice of keys and the values in the same order.
    ///
    /// Surplus keys or values are ignored.
    pub fn from_parallel(keys: &[&str], values: impl IntoIterator<Item = T>) -> Self {
        Self::from_pairs(keys.iter().copied().zip(values))
    }

    /// Insert `key`, replacing any previous value.
    pub fn add(&mut self, key: &str, value: T) -> &mut Self {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.value.replace(value).is_none() {
            self.len += 1;
        }
        debug!(key, len = self.len, "symbol added");
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        let removed = self.root.remove(key);
        if removed.is_some() {
            self.len -= 1;
            debug!(key, len = self.len, "symbol removed");
        }
        removed
    }

    /// Exact lookup.
    pub fn find(&self, key: &str) -> Option<&T> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        node.value.as_ref()
    }

    /// Longest key prefixing `input`, with its byte length.
    pub fn prefix_match(&self, input: &str, no_case: bool) -> Option<(usize, &T)> {
        let mut best = None;
        self.root.longest(input, 0, no_case, &mut best);
        best
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.root = Node::default();
        self.len = 0;
    }
}

impl<T: Attribute + Clone> Parser for Symbols<T> {
    type Attribute = T;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut T) -> bool {
        let start = cur.position();
        ctx.skip_over(cur);
        if let Some((len, value)) = self.prefix_match(cur.rest(), ctx.no_case()) {
            cur.advance(len);
            attr.clone_from(value);
            return true;
        }
        cur.set_position(start);
        false
    }

    fn what(&self) -> String {
        "symbol".to_owned()
    }
}

/// Parse through a borrowed table so it can be repopulated between parses.
impl<T: Attribute + Clone> Parser for &Symbols<T> {
    type Attribute = T;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut T) -> bool {
        (**self).parse(cur, ctx, attr)
    }

    fn what(&self) -> String {
        (**self).what()
    }
}

crate::parser::impl_operators! {
    [T,] Symbols<T>;
    ['a, T,] &'a Symbols<T>;
}
