use std::collections::VecDeque;

use super::item::ItemRef;

/// FIFO worklist of items flagged urgent at insert time. Membership is a
/// snapshot: draining removes items from the queue only, never from the
/// catalog.
#[derive(Debug, Default)]
pub struct UrgentQueue {
    items: VecDeque<ItemRef>,
}

impl UrgentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, item: ItemRef) {
        self.items.push_back(item);
    }

    /// Remove and return every queued item in FIFO order, leaving the queue
    /// empty.
    pub fn drain(&mut self) -> Vec<ItemRef> {
        self.items.drain(..).collect()
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

    fn item(id: i64) -> ItemRef {
        Rc::new(Item::new(id, format!("item-{id}"), "d", "urgent", 1.0))
    }

    #[test]
    fn test_drain_fifo_order() {
        let mut queue = UrgentQueue::new();
        queue.enqueue(item(1));
        queue.enqueue(item(2));
        queue.enqueue(item(3));

        let drained: Vec<i64> = queue.drain().iter().map(|i| i.id).collect();
        assert_eq!(drained, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_empty_queue() {
        let mut queue = UrgentQueue::new();
        assert!(queue.drain().is_empty());
    }
}
