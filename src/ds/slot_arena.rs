//! Generational slot arena.
//!
//! Values live in a `Vec` of slots; freed slots go on a free list and are
//! handed out again by the next `insert`. Each slot carries a generation that
//! is bumped whenever its value leaves, and a [`SlotId`] records the
//! generation it was issued under. A handle whose slot has since been freed,
//! or freed and reused, no longer matches and resolves to nothing.
//!
//! ```text
//!   insert(a) -> SlotId { index: 0, generation: 0 }
//!   remove(a)    slot 0 now generation 1, on free list
//!   insert(c) -> SlotId { index: 0, generation: 1 }
//!   get(a)    -> None   (generation 0 != 1)
//! ```

/// Handle to a value in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    index: usize,
    generation: u32,
}

impl SlotId {
    /// Position of the slot in the arena. Reused slots share an index.
    pub fn index(self) -> usize {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` and returns its handle, reusing a freed slot when one exists.
    pub fn insert(&mut self, value: T) -> SlotId {
        let index = match self.free_list.pop() {
            Some(index) => {
                self.slots[index].value = Some(value);
                index
            },
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    value: Some(value),
                });
                self.slots.len() - 1
            },
        };
        self.len += 1;
        SlotId {
            index,
            generation: self.slots[index].generation,
        }
    }

    /// Frees the slot and returns its value.
    ///
    /// Returns `None` if `id` is out of range, already freed, or was issued
    /// for an earlier occupant of a reused slot.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slot_mut(id)?;
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.index);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slot_mut(id).and_then(|slot| slot.value.as_mut())
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots (live and free) currently allocated.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Ensures room for `additional` more live values without reallocating.
    pub fn reserve(&mut self, additional: usize) {
        let reusable = self.free_list.len();
        if additional > reusable {
            self.slots.reserve(additional - reusable);
        }
    }

    /// Drops every value. Slots stay allocated and every outstanding handle
    /// is invalidated.
    pub fn clear(&mut self) {
        self.free_list.clear();
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free_list.push(index);
        }
        self.len = 0;
    }

    fn slot_mut(&mut self, id: SlotId) -> Option<&mut Slot<T>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
