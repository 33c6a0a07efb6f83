//! Monster identification.
//!
//! Every monster spawned by a [`MonsterIdAllocator`] receives a unique
//! `MonsterId`. The player targets monsters by this id.
//!
//! ## ID Layout
//!
//! IDs are handed out sequentially starting at 0 and are never reused,
//! even after the monster holding an ID is defeated or its encounter ends.
//! The allocator is an explicit value owned by whoever spawns monsters,
//! so two independent campaigns never share a counter.
//!
//! ## Usage
//!
//! ```
//! use spire_combat::core::{MonsterId, MonsterIdAllocator};
//!
//! let mut ids = MonsterIdAllocator::new();
//!
//! let first = ids.allocate();
//! let second = ids.allocate();
//!
//! assert_eq!(first, MonsterId(0));
//! assert_eq!(second, MonsterId(1));
//! assert_eq!(ids.peek(), MonsterId(2));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl MonsterId {
    /// Create a monster ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for MonsterId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic allocator for [`MonsterId`]s.
///
/// Thread the same allocator through every encounter of a campaign to
/// keep ids unique for the campaign's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterIdAllocator {
    next: u32,
}

impl MonsterIdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose first id is `first`.
    #[must_use]
    pub const fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Hand out the next id.
    pub fn allocate(&mut self) -> MonsterId {
        let id = MonsterId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `allocate` will return.
    #[must_use]
    pub const fn peek(&self) -> MonsterId {
        MonsterId(self.next)
    }
}
