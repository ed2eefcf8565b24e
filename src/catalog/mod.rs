//! The catalog engine.
//!
//! One insertion-ordered sequence, two binary-search-tree indexes (id and
//! case-insensitive name), a LIFO undo history, and a FIFO urgent-item
//! worklist. Every mutation enters through [`CatalogEngine`], which keeps
//! the derived structures in step with the sequence.

pub mod history;
pub mod index;
pub mod item;
pub mod queue;
pub mod sequence;

pub use item::{Item, ItemRef};

use std::rc::Rc;

use tracing::debug;

use history::UndoHistory;
use index::{BstIndex, NameKey};
use queue::UrgentQueue;
use sequence::CatalogSequence;

/// Owns all five catalog structures. Construct one per catalog; there is no
/// shared or global state.
#[derive(Debug, Default)]
pub struct CatalogEngine {
    sequence: CatalogSequence,
    id_index: BstIndex<i64>,
    name_index: BstIndex<NameKey>,
    history: UndoHistory,
    urgent: UrgentQueue,
}

impl CatalogEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the catalog. The sequence takes it first, then both
    /// indexes, then the urgent worklist when the category qualifies.
    /// Duplicate ids and names are accepted.
    pub fn insert(&mut self, item: Item) {
        self.insert_shared(Rc::new(item));
    }

    fn insert_shared(&mut self, item: ItemRef) {
        debug!("Inserting item {} ({})", item.id, item.name);
        self.sequence.prepend(Rc::clone(&item));
        self.id_index.insert(item.id, Rc::clone(&item));
        self.name_index
            .insert(NameKey::new(&item.name), Rc::clone(&item));
        if item.is_urgent() {
            self.urgent.enqueue(item);
        }
    }

    /// Remove the first item matching `id` from the sequence and park it on
    /// the undo history. Returns the removed item, or `None` (with nothing
    /// mutated) when no item matches.
    ///
    /// The id and name indexes keep their entries: a removed item remains
    /// reachable through both searches until the catalog is rebuilt. This
    /// asymmetry is intended behavior, not an oversight; repairing it would
    /// change what searches observe for deleted-but-not-restored items.
    pub fn remove(&mut self, id: i64) -> Option<ItemRef> {
        let item = self.sequence.remove_by_id(id)?;
        debug!("Removed item {}, restorable via undo", id);
        self.history.push(Rc::clone(&item));
        Some(item)
    }

    /// Restore the most recently removed item, if any. Restoration is a
    /// full insert: tree placement is recomputed and an urgent item
    /// re-enters the worklist.
    pub fn undo(&mut self) -> Option<ItemRef> {
        let item = self.history.pop()?;
        debug!("Restoring item {}", item.id);
        self.insert_shared(Rc::clone(&item));
        Some(item)
    }

    /// Exact-match lookup in the id index.
    pub fn search_by_id(&self, id: i64) -> Option<&ItemRef> {
        self.id_index.get(&id)
    }

    /// Exact-match, case-insensitive lookup in the name index.
    pub fn search_by_name(&self, name: &str) -> Option<&ItemRef> {
        self.name_index.get(&NameKey::new(name))
    }

    /// Live items whose category matches (case-insensitive), newest first.
    pub fn scan_by_category<'a>(&'a self, category: &'a str) -> Vec<&'a ItemRef> {
        self.sequence.by_category(category).collect()
    }

    /// All live items, newest first.
    pub fn list_all(&self) -> Vec<&ItemRef> {
        self.sequence.iter().collect()
    }

    /// Remove and return every queued urgent item in FIFO order.
    pub fn drain_urgent(&mut self) -> Vec<ItemRef> {
        self.urgent.drain()
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Number of removed items awaiting restoration.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Number of queued urgent items.
    pub fn urgent_len(&self) -> usize {
        self.urgent.len()
    }
}
