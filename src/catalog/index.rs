use std::cmp::Ordering;

use super::item::ItemRef;

/// One node of an unbalanced binary search tree. Owns its key, a shared
/// handle to the item, and its two subtrees.
#[derive(Debug)]
struct Node<K> {
    key: K,
    item: ItemRef,
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,
}

/// Unbalanced binary search tree keyed by `K`. Keys strictly less than a
/// node go left, equal-or-greater go right, so duplicate keys accumulate
/// rightward and the shallowest duplicate wins exact-match lookup.
///
/// No rebalancing: worst-case insert/search is linear in tree size, which
/// is accepted at catalog scale.
#[derive(Debug)]
pub struct BstIndex<K> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

impl<K> Default for BstIndex<K> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord> BstIndex<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: K, item: ItemRef) {
        Self::insert_node(&mut self.root, key, item);
        self.len += 1;
    }

    fn insert_node(slot: &mut Option<Box<Node<K>>>, key: K, item: ItemRef) {
        match slot {
            None => {
                *slot = Some(Box::new(Node {
                    key,
                    item,
                    left: None,
                    right: None,
                }));
            }
            Some(node) => {
                if key < node.key {
                    Self::insert_node(&mut node.left, key, item);
                } else {
                    Self::insert_node(&mut node.right, key, item);
                }
            }
        }
    }

    /// Exact-match lookup by recursive descent.
    pub fn get(&self, key: &K) -> Option<&ItemRef> {
        Self::get_node(self.root.as_deref(), key)
    }

    fn get_node<'a>(node: Option<&'a Node<K>>, key: &K) -> Option<&'a ItemRef> {
        let node = node?;
        match key.cmp(&node.key) {
            Ordering::Equal => Some(&node.item),
            Ordering::Less => Self::get_node(node.left.as_deref(), key),
            Ordering::Greater => Self::get_node(node.right.as_deref(), key),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Key for the name index: ordering and equality compare the lowercase
/// folding, making lookups case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NameKey(String);

impl NameKey {
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }
}
