//! Agent storage with recyclable slots
//!
//! `AgentSet` is a slot arena with a free list: inserting reuses released
//! slots, and handles carry a generation so a handle to a despawned agent
//! goes stale instead of silently pointing at its replacement. Queries that
//! receive handle lists from elsewhere (the hide behavior, the spawner's
//! live list) use `get` returning `Option` and skip stale entries.

use crate::agent::AgentBody;

// ============================================================================
// Handle
// ============================================================================

/// Handle to an agent in an `AgentSet`.
///
/// Stays valid until the agent is removed; after the slot is reused the old
/// handle resolves to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgentHandle {
    index: usize,
    generation: u32,
}

impl AgentHandle {
    /// Raw slot index (stable while the agent is alive).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }
}

// ============================================================================
// Slot
// ============================================================================

#[derive(Debug)]
enum Slot {
    /// Slot holds a live agent stamped with the generation it was created at
    Occupied { generation: u32, body: AgentBody },
    /// Slot is free; remembers the next free slot and the generation the
    /// next occupant will be stamped with
    Vacant { next_free: usize, generation: u32 },
}

// ============================================================================
// Agent set
// ============================================================================

/// Pooled agent storage.
///
/// Acquire and release are O(1) through the free list; released slots are
/// recycled on the next insert.
#[derive(Debug)]
pub struct AgentSet {
    slots: Vec<Slot>,
    /// Head of the free list, or `NONE` when every slot is occupied
    free_head: usize,
    live_count: usize,
}

impl Default for AgentSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentSet {
    const NONE: usize = usize::MAX;

    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: Self::NONE,
            live_count: 0,
        }
    }

    /// Create a set with pre-allocated capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: Self::NONE,
            live_count: 0,
        }
    }

    /// Insert an agent, reusing a released slot when one exists
    pub fn insert(&mut self, body: AgentBody) -> AgentHandle {
        self.live_count += 1;

        if self.free_head != Self::NONE {
            let index = self.free_head;
            let Slot::Vacant {
                next_free,
                generation,
            } = self.slots[index]
            else {
                unreachable!("free list points at an occupied slot");
            };

            self.free_head = next_free;
            self.slots[index] = Slot::Occupied { generation, body };
            AgentHandle { index, generation }
        } else {
            let index = self.slots.len();
            self.slots.push(Slot::Occupied {
                generation: 0,
                body,
            });
            AgentHandle {
                index,
                generation: 0,
            }
        }
    }

    /// Remove an agent, returning its final state.
    ///
    /// Returns `None` when the handle is stale or never existed. The slot is
    /// recycled by a later `insert`, at which point the handle's generation
    /// no longer matches.
    pub fn remove(&mut self, handle: AgentHandle) -> Option<AgentBody> {
        let slot = self.slots.get_mut(handle.index)?;
        match slot {
            Slot::Occupied { generation, body } if *generation == handle.generation => {
                let body = *body;
                *slot = Slot::Vacant {
                    next_free: self.free_head,
                    generation: handle.generation.wrapping_add(1),
                };
                self.free_head = handle.index;
                self.live_count -= 1;
                Some(body)
            }
            _ => None,
        }
    }

    /// Resolve a handle, or `None` when it has gone stale
    #[must_use]
    #[inline]
    pub fn get(&self, handle: AgentHandle) -> Option<&AgentBody> {
        match self.slots.get(handle.index) {
            Some(Slot::Occupied { generation, body }) if *generation == handle.generation => {
                Some(body)
            }
            _ => None,
        }
    }

    /// Resolve a handle mutably
    #[inline]
    pub fn get_mut(&mut self, handle: AgentHandle) -> Option<&mut AgentBody> {
        match self.slots.get_mut(handle.index) {
            Some(Slot::Occupied { generation, body }) if *generation == handle.generation => {
                Some(body)
            }
            _ => None,
        }
    }

    /// Check whether a handle still points at a live agent
    #[must_use]
    #[inline]
    pub fn contains(&self, handle: AgentHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Number of live agents
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.live_count
    }

    /// Whether the set holds no live agents
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Iterate over live agents
    pub fn iter(&self) -> impl Iterator<Item = &AgentBody> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied { body, .. } => Some(body),
            Slot::Vacant { .. } => None,
        })
    }

    /// Iterate over live agents with their handles
    pub fn iter_with_handles(&self) -> impl Iterator<Item = (AgentHandle, &AgentBody)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Occupied { generation, body } => Some((
                    AgentHandle {
                        index,
                        generation: *generation,
                    },
                    body,
                )),
                Slot::Vacant { .. } => None,
            })
    }

    /// Drop every agent and reset the free list.
    ///
    /// Allocated memory is retained; all outstanding handles go stale.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = Self::NONE;
        self.live_count = 0;
    }
}

// ============================================================================
// Tests
// ============================================================================
