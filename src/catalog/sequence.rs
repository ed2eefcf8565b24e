use std::collections::VecDeque;

use super::item::ItemRef;

/// Insertion-ordered container of live items, newest first. Membership here
/// is what "exists in the catalog" means; every other structure is derived.
#[derive(Debug, Default)]
pub struct CatalogSequence {
    items: VecDeque<ItemRef>,
}

impl CatalogSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new item at the head of the sequence.
    pub fn prepend(&mut self, item: ItemRef) {
        self.items.push_front(item);
    }

    /// Unlink the first item with a matching id, scanning from the head.
    pub fn remove_by_id(&mut self, id: i64) -> Option<ItemRef> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        self.items.remove(pos)
    }

    /// All live items, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ItemRef> {
        self.items.iter()
    }

    /// Live items whose category matches, newest first.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ItemRef> + 'a {
        self.items
            .iter()
            .filter(move |item| item.matches_category(category))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::item::Item;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    fn item(id: i64, category: &str) -> ItemRef {
        Rc::new(Item::new(id, format!("item-{id}"), "desc", category, 1.0))
    }

    #[test]
    fn test_prepend_orders_newest_first() {
        let mut seq = CatalogSequence::new();
        seq.prepend(item(1, "a"));
        seq.prepend(item(2, "a"));
        seq.prepend(item(3, "a"));

        let ids: Vec<i64> = seq.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_remove_by_id_head_and_middle() {
        let mut seq = CatalogSequence::new();
        seq.prepend(item(1, "a"));
        seq.prepend(item(2, "a"));
        seq.prepend(item(3, "a"));

        let removed = seq.remove_by_id(3).unwrap();
        assert_eq!(removed.id, 3);

        let removed = seq.remove_by_id(1).unwrap();
        assert_eq!(removed.id, 1);

        let ids: Vec<i64> = seq.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_remove_by_id_missing() {
        let mut seq = CatalogSequence::new();
        seq.prepend(item(1, "a"));

        assert!(seq.remove_by_id(99).is_none());
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_remove_by_id_takes_first_duplicate() {
        let mut seq = CatalogSequence::new();
        seq.prepend(item(5, "old"));
        seq.prepend(item(5, "new"));

        let removed = seq.remove_by_id(5).unwrap();
        assert_eq!(removed.category, "new");
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_by_category_preserves_order() {
        let mut seq = CatalogSequence::new();
        seq.prepend(item(1, "tools"));
        seq.prepend(item(2, "home"));
        seq.prepend(item(3, "Tools"));

        let ids: Vec<i64> = seq.by_category("TOOLS").map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
