//! Segment trie backing both the builder and the frozen router.
//!
//! Every edge is labelled with one *segment key*: the text up to and
//! including the next `/`, or the whole remainder for the last segment of a
//! path without a trailing slash. `/a` and `/a/` therefore end on different
//! nodes (`"a"` vs `"a/"`).
//!
//! Two keys are reserved for wildcards:
//!
//! - `"*"` matches one final segment (no trailing slash)
//! - `"*/"` matches one segment followed by a slash
//!
//! ## Matching order
//!
//! At each node the concrete child is explored first. Only if that whole
//! branch fails to end on a routed node does the walk fall back to the
//! wildcard child for the same segment. An existing but unrouted concrete
//! prefix never blocks the wildcard sibling.
//!
//! ```text
//! registered: GET /a/*    GET /a/b/c/*
//!
//!   root ── "a/" ──┬── "*"
//!                  └── "b/" ── "c/" ── "*"
//!
//! /a/b/c/x  ->  a/ -> b/ -> c/ -> *      captures ["x"]
//! /a/b      ->  a/ -> (b: none) -> *     captures ["b"]
//! ```

use smallvec::SmallVec;
use std::collections::HashMap;

use crate::verb::Verb;

/// Number of wildcard captures held inline before spilling to the heap.
pub const MAX_INLINE_CAPTURES: usize = 8;

/// Literal text consumed by wildcard segments, root to leaf.
///
/// Captures borrow from the request path so a lookup allocates nothing
/// for up to [`MAX_INLINE_CAPTURES`] wildcards.
pub type Captures<'p> = SmallVec<[&'p str; MAX_INLINE_CAPTURES]>;

const WILDCARD: &str = "*";
const WILDCARD_DIR: &str = "*/";

/// Next segment key of `path`: up to and including the first `/`, or all of it.
#[inline]
pub(crate) fn segment_key(path: &str) -> &str {
    match path.find('/') {
        Some(ix) => &path[..=ix],
        None => path,
    }
}

#[inline]
fn is_wildcard(key: &str) -> bool {
    key == WILDCARD || key == WILDCARD_DIR
}

/// Per-node verb table.
pub(crate) struct Route<H> {
    handlers: [Option<H>; Verb::COUNT],
}

impl<H> Route<H> {
    fn new() -> Self {
        Self {
            handlers: std::array::from_fn(|_| None),
        }
    }

    #[inline]
    pub(crate) fn get(&self, verb: Verb) -> Option<&H> {
        self.handlers[verb.index()].as_ref()
    }

    /// Store `handler` for `verb`, returning the handler it replaced.
    fn set(&mut self, verb: Verb, handler: H) -> Option<H> {
        self.handlers[verb.index()].replace(handler)
    }

    /// Verbs with a populated slot, in table order.
    pub(crate) fn verbs(&self) -> impl Iterator<Item = Verb> + '_ {
        Verb::ALL
            .into_iter()
            .filter(move |verb| self.handlers[verb.index()].is_some())
    }
}

/// A trie node. Owns its children outright; lookups never ascend.
pub(crate) struct Node<H> {
    children: HashMap<String, Node<H>>,
    route: Option<Route<H>>,
}

impl<H> Default for Node<H> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            route: None,
        }
    }
}

impl<H> Node<H> {
    #[inline]
    pub(crate) fn route(&self) -> Option<&Route<H>> {
        self.route.as_ref()
    }

    #[inline]
    fn is_routed(&self) -> bool {
        self.route.is_some()
    }

    /// Walk `path` (leading `/` already stripped), creating missing nodes,
    /// and return the node it ends on.
    pub(crate) fn place(&mut self, path: &str) -> &mut Node<H> {
        let mut node = self;
        let mut rest = path;
        while !rest.is_empty() {
            let key = segment_key(rest);
            rest = &rest[key.len()..];
            node = node.children.entry(key.to_string()).or_default();
        }
        node
    }

    /// Set the handler for `verb` on this node, creating its route if needed.
    pub(crate) fn set(&mut self, verb: Verb, handler: H) -> Option<H> {
        self.route.get_or_insert_with(Route::new).set(verb, handler)
    }

    /// Resolve `path` (leading `/` already stripped) below this node.
    ///
    /// An empty path returns `self` whether or not it is routed; the caller
    /// decides. Otherwise only a routed node counts as a match. Captures
    /// pushed on a branch that fails are truncated before the next
    /// alternative is tried.
    pub(crate) fn find<'p>(&self, path: &'p str, captures: &mut Captures<'p>) -> Option<&Node<H>> {
        if path.is_empty() {
            return Some(self);
        }

        let key = segment_key(path);
        let rest = &path[key.len()..];

        // A literal "*" in the request is still wildcard text, not a concrete edge.
        if !is_wildcard(key) {
            if let Some(child) = self.children.get(key) {
                let mark = captures.len();
                if let Some(found) = child.find(rest, captures) {
                    if found.is_routed() {
                        return Some(found);
                    }
                }
                captures.truncate(mark);
            }
        }

        let (wildcard, segment) = match key.strip_suffix('/') {
            Some(segment) => (WILDCARD_DIR, segment),
            None => (WILDCARD, key),
        };
        if segment.is_empty() {
            return None;
        }

        if let Some(child) = self.children.get(wildcard) {
            let mark = captures.len();
            captures.push(segment);
            if let Some(found) = child.find(rest, captures) {
                if found.is_routed() {
                    return Some(found);
                }
            }
            captures.truncate(mark);
        }

        None
    }

    /// Depth-first visit of every routed node with its absolute pattern.
    pub(crate) fn visit_routes<F>(&self, prefix: &mut String, visit: &mut F)
    where
        F: FnMut(&str, &Route<H>),
    {
        if let Some(route) = &self.route {
            visit(prefix, route);
        }
        for (key, child) in &self.children {
            let len = prefix.len();
            prefix.push_str(key);
            child.visit_routes(prefix, visit);
            prefix.truncate(len);
        }
    }
}
