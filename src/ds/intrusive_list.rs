//! Intrusive doubly linked list backed by `SlotArena`.
//!
//! Nodes live in a `SlotArena` and link to each other by `SlotId`, so a node
//! can be spliced out of any position in O(1) given its handle, and a freed
//! node can never be reached through a dangling link.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None, next: Some(id_2) }  │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: id_3 }  │
//!   │ id_3   │ { value: C, prev: Some(id_2), next: None }  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//!    (MRU)                                     (LRU)
//! ```
//!
//! ## Performance
//! - `push_front`, `pop_back`, `remove`, `move_to_front`: O(1)
//! - `iter`, `validate`: O(n)

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Intrusive list that stores nodes in a `SlotArena` and links them via `SlotId`.
#[derive(Debug)]
pub struct IntrusiveList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the value at the back (LRU) of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Inserts a new node at the front and returns its `SlotId`.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        if let Some(head) = self.head {
            if let Some(node) = self.arena.get_mut(head) {
                node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
        id
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Removes the node `id` from the list and returns its value.
    ///
    /// Returns `None` for a stale or foreign handle; the list is left untouched.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves an existing node to the front; returns `false` if `id` is not present.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if Some(id) == self.head {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Number of arena slots allocated, including freed ones awaiting reuse.
    pub fn allocated_slots(&self) -> usize {
        self.arena.slot_count()
    }

    /// Reserves room for `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.arena.reserve(additional);
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> IntrusiveListIter<'_, T> {
        IntrusiveListIter {
            list: self,
            current: self.head,
        }
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        if let Some(prev_id) = prev {
            if let Some(prev_node) = self.arena.get_mut(prev_id) {
                prev_node.next = next;
            }
        } else {
            self.head = next;
        }

        if let Some(next_id) = next {
            if let Some(next_node) = self.arena.get_mut(next_id) {
                next_node.prev = prev;
            }
        } else {
            self.tail = prev;
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }

        Some(())
    }

    fn attach_front(&mut self, id: SlotId) -> Option<()> {
        let old_head = self.head;
        let node = self.arena.get_mut(id)?;
        node.prev = None;
        node.next = old_head;

        if let Some(old_head) = old_head {
            if let Some(head_node) = self.arena.get_mut(old_head) {
                head_node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
        Some(())
    }

    /// Checks link consistency in both directions.
    ///
    /// Walking head→tail via `next` and tail→head via `prev` must each visit
    /// exactly `len()` nodes, every `prev`/`next` pair must agree, and the ends
    /// must be empty together.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let len = self.len();
        match (self.head, self.tail) {
            (None, None) if len == 0 => return Ok(()),
            (None, None) => {
                return Err(InvariantError::new(format!(
                    "list has no head or tail but holds {len} nodes"
                )));
            },
            (Some(_), None) | (None, Some(_)) => {
                return Err(InvariantError::new("exactly one of head/tail is set"));
            },
            (Some(head), Some(tail)) => {
                if len == 1 && head != tail {
                    return Err(InvariantError::new(
                        "single-node list must have head == tail",
                    ));
                }
            },
        }

        let mut count = 0usize;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            count += 1;
            if count > len {
                return Err(InvariantError::new("cycle detected walking from head"));
            }
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("stale SlotId {id:?} in list")))?;
            if node.prev != prev {
                return Err(InvariantError::new(format!(
                    "node {id:?} prev link {:?} != {prev:?}",
                    node.prev
                )));
            }
            prev = Some(id);
            current = node.next;
        }
        if count != len {
            return Err(InvariantError::new(format!(
                "forward walk visited {count} nodes, expected {len}"
            )));
        }
        if prev != self.tail {
            return Err(InvariantError::new("forward walk did not end at tail"));
        }

        let mut count = 0usize;
        let mut current = self.tail;
        let mut last = None;
        while let Some(id) = current {
            count += 1;
            if count > len {
                return Err(InvariantError::new("cycle detected walking from tail"));
            }
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("stale SlotId {id:?} in list")))?;
            last = Some(id);
            current = node.prev;
        }
        if count != len {
            return Err(InvariantError::new(format!(
                "backward walk visited {count} nodes, expected {len}"
            )));
        }
        if last != self.head {
            return Err(InvariantError::new("backward walk did not end at head"));
        }

        Ok(())
    }
}

pub struct IntrusiveListIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for IntrusiveListIter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some((id, &node.value))
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(list: &IntrusiveList<T>) -> Vec<T> {
        list.iter().map(|(_, v)| *v).collect()
    }

    fn ids<T>(list: &IntrusiveList<T>) -> Vec<SlotId> {
        list.iter().map(|(id, _)| id).collect()
    }

    #[test]
    fn intrusive_list_basic_ops() {
        let mut list = IntrusiveList::new();
        let c = list.push_front("c");
        let b = list.push_front("b");
        let a = list.push_front("a");

        assert_eq!(values(&list), vec!["a", "b", "c"]);
        assert_eq!(ids(&list), vec![a, b, c]);
        assert_eq!(list.back(), Some(&"c"));
        assert_eq!(list.len(), 3);

        assert!(list.move_to_front(c));
        assert_eq!(values(&list), vec!["c", "a", "b"]);
        assert_eq!(list.back(), Some(&"b"));

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(list.len(), 2);
        list.validate().unwrap();

        assert_eq!(list.pop_back(), Some("a"));
        assert_eq!(list.pop_back(), Some("c"));
        assert!(list.is_empty());
        assert_eq!(list.get(a), None);
        list.validate().unwrap();
    }

    #[test]
    fn intrusive_list_move_to_front_every_position() {
        let mut list = IntrusiveList::new();
        let c = list.push_front(3);
        let b = list.push_front(2);
        let a = list.push_front(1);

        // head is a no-op
        assert!(list.move_to_front(a));
        assert_eq!(values(&list), vec![1, 2, 3]);

        // interior
        assert!(list.move_to_front(b));
        assert_eq!(values(&list), vec![2, 1, 3]);
        list.validate().unwrap();

        // tail
        assert!(list.move_to_front(c));
        assert_eq!(values(&list), vec![3, 2, 1]);
        assert_eq!(list.back(), Some(&1));
        list.validate().unwrap();
    }

    #[test]
    fn intrusive_list_two_node_tail_promotion() {
        let mut list = IntrusiveList::new();
        let second = list.push_front(2);
        let first = list.push_front(1);

        assert!(list.move_to_front(second));
        assert_eq!(ids(&list), vec![second, first]);
        assert_eq!(list.back(), Some(&1));
        list.validate().unwrap();

        assert!(list.move_to_front(first));
        assert_eq!(values(&list), vec![1, 2]);
        list.validate().unwrap();
    }

    #[test]
    fn intrusive_list_remove_middle_and_ends() {
        let mut list = IntrusiveList::new();
        let c = list.push_front("c");
        let b = list.push_front("b");
        let a = list.push_front("a");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(values(&list), vec!["a", "c"]);
        list.validate().unwrap();

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(ids(&list), vec![c]);
        assert_eq!(list.back(), Some(&"c"));
        list.validate().unwrap();

        assert_eq!(list.remove(c), Some("c"));
        assert!(list.is_empty());
        assert_eq!(list.back(), None);
        list.validate().unwrap();
    }

    #[test]
    fn intrusive_list_stale_handle_leaves_list_intact() {
        let mut list = IntrusiveList::new();
        let a = list.push_front(1);
        list.push_front(2);
        assert_eq!(list.remove(a), Some(1));

        assert_eq!(list.remove(a), None);
        assert!(!list.move_to_front(a));
        assert_eq!(list.get(a), None);
        assert_eq!(list.len(), 1);
        list.validate().unwrap();
    }

    #[test]
    fn intrusive_list_handle_from_reused_slot_is_rejected() {
        let mut list = IntrusiveList::new();
        let a = list.push_front("a");
        list.push_front("b");
        assert_eq!(list.remove(a), Some("a"));
        let c = list.push_front("c");
        assert_eq!(a.index(), c.index());

        assert_eq!(list.get(a), None);
        assert_eq!(list.remove(a), None);
        assert!(!list.move_to_front(a));
        assert_eq!(values(&list), vec!["c", "b"]);
        assert_eq!(list.get(c), Some(&"c"));
        list.validate().unwrap();
    }

    #[test]
    fn intrusive_list_clear_resets_state() {
        let mut list = IntrusiveList::with_capacity(4);
        let a = list.push_front(1);
        list.push_front(2);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_back(), None);
        assert!(!list.move_to_front(a));
        list.validate().unwrap();

        let b = list.push_front(3);
        assert_eq!(list.get(a), None);
        assert_eq!(list.get(b), Some(&3));
        list.validate().unwrap();
    }

    #[test]
    fn intrusive_list_reuses_freed_slots() {
        let mut list = IntrusiveList::new();
        let a = list.push_front(1);
        list.push_front(2);
        list.pop_back();
        let c = list.push_front(3);
        assert_eq!(a.index(), c.index());
        assert_eq!(list.allocated_slots(), 2);
        assert_eq!(values(&list), vec![3, 2]);
        list.validate().unwrap();
    }
}
