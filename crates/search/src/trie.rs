//! Character trie mapping case-folded token prefixes to the entities that
//! carry them.
//!
//! Nodes are stored in an arena (`Vec<TrieNode>`) and refer to their children
//! by index, so the tree owns no boxed nodes and drops in one go. Children are
//! kept in a `BTreeMap`, which fixes traversal order to ascending code point.
//!
//! Every node on the path of an inserted token records the entity, including
//! the root, so the entity list at depth `d` holds exactly the entities with
//! some token sharing that `d`-character prefix. Entity lists keep first
//! insertion order and are never sorted by relevance.

use crate::entity::{fold_case, Entity};
use crate::{Result, SearchError};
use std::collections::{BTreeMap, HashMap};

/// Maximum number of completions returned by [`PrefixIndex::search`] unless
/// overridden with [`PrefixIndex::with_suggestion_limit`].
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

type NodeId = usize;
type Slot = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, NodeId>,
    is_end: bool,
    entities: Vec<Slot>,
}

impl TrieNode {
    fn attach(&mut self, slot: Slot) {
        // Tokens of one entity are usually inserted back to back, so the tail
        // check settles most calls before the scan.
        if self.entities.last() == Some(&slot) || self.entities.contains(&slot) {
            return;
        }
        self.entities.push(slot);
    }
}

/// Result of a prefix lookup.
#[derive(Debug, Clone)]
pub struct PrefixMatch<'a, E> {
    /// Entities with at least one token starting with the prefix, in
    /// insertion order
    pub entities: Vec<&'a E>,
    /// Complete tokens extending the prefix, in ascending character order
    pub suggestions: Vec<String>,
}

impl<E> PrefixMatch<'_, E> {
    /// The "no match" result.
    pub fn empty() -> Self {
        Self {
            entities: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Returns true if neither entities nor suggestions were found.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.suggestions.is_empty()
    }
}

/// Prefix index over borrowed entities.
///
/// # Example
///
/// ```
/// use venue_index::{PrefixIndex, Venue};
///
/// let hall = Venue::new("v1", "Lakeside Hall");
/// let garden = Venue::new("v2", "Lake Garden");
///
/// let mut index = PrefixIndex::new();
/// index.insert(&hall.name, &hall).unwrap();
/// index.insert(&garden.name, &garden).unwrap();
///
/// let found = index.search("LAKE");
/// assert_eq!(found.entities.len(), 2);
/// assert_eq!(found.suggestions, vec!["lake garden", "lakeside hall"]);
/// ```
#[derive(Debug)]
pub struct PrefixIndex<'a, E: Entity> {
    nodes: Vec<TrieNode>,
    entities: Vec<&'a E>,
    slots: HashMap<E::Id, Slot>,
    suggestion_limit: usize,
}

impl<E: Entity> Default for PrefixIndex<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E: Entity> PrefixIndex<'a, E> {
    /// Creates an empty index holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            entities: Vec::new(),
            slots: HashMap::new(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Sets how many completions [`search`](Self::search) returns.
    #[must_use]
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Indexes `token` for `entity`.
    ///
    /// The token is case-folded and walked character by character; the entity
    /// is recorded at every node on the path unless an entity with the same id
    /// is already there. Re-inserting a token is harmless.
    ///
    /// # Errors
    /// Returns [`SearchError::EmptyToken`] if `token` is empty.
    pub fn insert(&mut self, token: &str, entity: &'a E) -> Result<()> {
        if token.is_empty() {
            return Err(SearchError::EmptyToken);
        }
        self.insert_folded(&fold_case(token), entity);
        Ok(())
    }

    /// Inserts an already folded, non-empty token.
    pub(crate) fn insert_folded(&mut self, token: &str, entity: &'a E) {
        debug_assert!(!token.is_empty());
        let slot = self.slot_for(entity);

        let mut current = ROOT;
        self.nodes[current].attach(slot);
        for ch in token.chars() {
            current = match self.nodes[current].children.get(&ch).copied() {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(ch, child);
                    child
                }
            };
            self.nodes[current].attach(slot);
        }
        self.nodes[current].is_end = true;
    }

    fn slot_for(&mut self, entity: &'a E) -> Slot {
        if let Some(&slot) = self.slots.get(entity.id()) {
            return slot;
        }
        let slot = self.entities.len();
        self.entities.push(entity);
        self.slots.insert(entity.id().clone(), slot);
        slot
    }

    /// Looks up `prefix`.
    ///
    /// An unknown prefix is not an error: the result is simply empty. The
    /// empty prefix matches the root, i.e. every indexed entity.
    pub fn search(&self, prefix: &str) -> PrefixMatch<'a, E> {
        let folded = fold_case(prefix);
        let Some(node_id) = self.find(&folded) else {
            return PrefixMatch::empty();
        };

        PrefixMatch {
            entities: self.nodes[node_id]
                .entities
                .iter()
                .map(|&slot| self.entities[slot])
                .collect(),
            suggestions: self.completions(node_id, folded),
        }
    }

    /// Returns true if `token` was inserted as a whole token.
    pub fn contains(&self, token: &str) -> bool {
        self.find(&fold_case(token))
            .is_some_and(|id| self.nodes[id].is_end)
    }

    fn find(&self, folded: &str) -> Option<NodeId> {
        let mut current = ROOT;
        for ch in folded.chars() {
            current = *self.nodes[current].children.get(&ch)?;
        }
        Some(current)
    }

    /// Pre-order walk below `start` with an explicit stack, smallest character
    /// first, stopping once the limit is reached.
    fn completions(&self, start: NodeId, prefix: String) -> Vec<String> {
        let mut found = Vec::new();
        if self.suggestion_limit == 0 {
            return found;
        }

        let mut stack = vec![(start, prefix)];
        while let Some((id, word)) = stack.pop() {
            let node = &self.nodes[id];
            for (&ch, &child) in node.children.iter().rev() {
                let mut next = word.clone();
                next.push(ch);
                stack.push((child, next));
            }
            if node.is_end {
                found.push(word);
                if found.len() == self.suggestion_limit {
                    break;
                }
            }
        }
        found
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct tokens.
    pub fn token_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_end).count()
    }

    /// Number of distinct entities (by id).
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: u32,
        label: &'static str,
    }

    impl Entity for Item {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn ids(found: &PrefixMatch<'_, Item>) -> Vec<u32> {
        found.entities.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_empty_token_rejected() {
        let item = Item { id: 1, label: "x" };
        let mut index = PrefixIndex::new();
        assert!(matches!(index.insert("", &item), Err(SearchError::EmptyToken)));
        assert!(index.is_empty());
        assert_eq!(index.node_count(), 1);
    }

    #[test]
    fn test_intermediate_nodes_record_entities() {
        let a = Item { id: 1, label: "pokhara" };
        let b = Item { id: 2, label: "pokh" };
        let mut index = PrefixIndex::new();
        index.insert(a.label, &a).unwrap();
        index.insert(b.label, &b).unwrap();

        assert_eq!(ids(&index.search("po")), vec![1, 2]);
        assert_eq!(ids(&index.search("pokha")), vec![1]);
        assert_eq!(index.search("pok").suggestions, vec!["pokh", "pokhara"]);
    }

    #[test]
    fn test_case_folding() {
        let a = Item { id: 1, label: "Kathmandu" };
        let mut index = PrefixIndex::new();
        index.insert(a.label, &a).unwrap();

        assert_eq!(ids(&index.search("KATH")), vec![1]);
        assert_eq!(index.search("kAtH").suggestions, vec!["kathmandu"]);
        assert!(index.contains("KATHMANDU"));
        assert!(!index.contains("kath"));
    }

    #[test]
    fn test_duplicate_insert_keeps_one_reference() {
        let a = Item { id: 7, label: "wedding" };
        let mut index = PrefixIndex::new();
        index.insert(a.label, &a).unwrap();
        index.insert(a.label, &a).unwrap();

        for prefix in ["", "w", "wed", "wedding"] {
            assert_eq!(ids(&index.search(prefix)), vec![7], "prefix {prefix:?}");
        }
        assert_eq!(index.token_count(), 1);
        assert_eq!(index.entity_count(), 1);
    }

    #[test]
    fn test_dedup_by_id_not_reference() {
        let a = Item { id: 1, label: "hall" };
        let same_id = Item { id: 1, label: "hall copy" };
        let mut index = PrefixIndex::new();
        index.insert("hall", &a).unwrap();
        index.insert("hall", &same_id).unwrap();

        let found = index.search("hall");
        assert_eq!(found.entities.len(), 1);
        assert_eq!(found.entities[0].label, "hall");
    }

    #[test]
    fn test_no_match_sentinel() {
        let a = Item { id: 1, label: "garden" };
        let mut index = PrefixIndex::new();
        index.insert(a.label, &a).unwrap();

        let found = index.search("zzz-nonexistent");
        assert!(found.is_empty());
        assert!(found.entities.is_empty());
        assert!(found.suggestions.is_empty());
    }

    #[test]
    fn test_empty_prefix_matches_root() {
        let a = Item { id: 1, label: "b" };
        let b = Item { id: 2, label: "a" };
        let mut index = PrefixIndex::new();
        index.insert(a.label, &a).unwrap();
        index.insert(b.label, &b).unwrap();

        let found = index.search("");
        assert_eq!(ids(&found), vec![1, 2]);
        assert_eq!(found.suggestions, vec!["a", "b"]);
    }

    #[test]
    fn test_suggestions_capped_and_ordered() {
        let words = ["hall", "halls", "hallway", "halo", "ham", "hat", "hay"];
        let items: Vec<Item> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Item { id: i as u32, label: *w })
            .collect();
        let mut index = PrefixIndex::new();
        for item in &items {
            index.insert(item.label, item).unwrap();
        }

        let found = index.search("ha");
        assert_eq!(found.entities.len(), 7);
        assert_eq!(
            found.suggestions,
            vec!["hall", "halls", "hallway", "halo", "ham"]
        );
    }

    #[test]
    fn test_custom_suggestion_limit() {
        let a = Item { id: 1, label: "venue" };
        let mut index = PrefixIndex::new().with_suggestion_limit(0);
        index.insert(a.label, &a).unwrap();

        let found = index.search("ven");
        assert_eq!(ids(&found), vec![1]);
        assert!(found.suggestions.is_empty());
    }

    #[test]
    fn test_multibyte_characters() {
        let a = Item { id: 1, label: "पोखरा" };
        let mut index = PrefixIndex::new();
        index.insert(a.label, &a).unwrap();

        assert_eq!(ids(&index.search("पो")), vec![1]);
        assert_eq!(index.search("पो").suggestions, vec!["पोखरा"]);
    }

    #[test]
    fn test_counts() {
        let a = Item { id: 1, label: "ab" };
        let b = Item { id: 2, label: "ac" };
        let mut index = PrefixIndex::new();
        index.insert(a.label, &a).unwrap();
        index.insert(b.label, &b).unwrap();

        // root, a, b, c
        assert_eq!(index.node_count(), 4);
        assert_eq!(index.token_count(), 2);
        assert_eq!(index.entity_count(), 2);
    }
}
