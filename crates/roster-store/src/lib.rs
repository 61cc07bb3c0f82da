//! # Roster Store
//!
//! In-memory user store for the Roster API.
//!
//! [`UserStore`] holds the single ordered sequence of [`User`] records for the
//! lifetime of the process. It is cheap to clone: every clone shares the same
//! table behind one `parking_lot::RwLock`. Each operation takes the lock once
//! and releases it before returning, so no lock is ever held across an
//! `.await`. `parking_lot` locks do not poison, so a panicking request cannot
//! wedge the store for later ones.
//!
//! Lookups are linear scans in insertion order. When two records share an id
//! (possible only with [`IdAllocation::CurrentCount`]) the first one wins.
//!
//! # Example
//!
//! ```ignore
//! use roster_config::IdAllocation;
//! use roster_store::UserStore;
//!
//! let store = UserStore::new(IdAllocation::Monotonic);
//! let user = store.insert(dto)?;
//! assert_eq!(store.get(user.id), Some(user));
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use roster_config::IdAllocation;
use roster_models::{User, UserDto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No further id fits in an `i32`.
    IdSpaceExhausted,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdSpaceExhausted => f.write_str("No user ids left to allocate"),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Default)]
struct UserTable {
    users: Vec<User>,
    /// Highest id handed out so far under monotonic allocation.
    last_id: i32,
}

impl UserTable {
    fn next_id(&mut self, allocation: IdAllocation) -> Result<i32, StoreError> {
        match allocation {
            IdAllocation::Monotonic => {
                let id = self
                    .last_id
                    .checked_add(1)
                    .ok_or(StoreError::IdSpaceExhausted)?;
                self.last_id = id;
                Ok(id)
            }
            IdAllocation::CurrentCount => i32::try_from(self.users.len())
                .ok()
                .and_then(|len| len.checked_add(1))
                .ok_or(StoreError::IdSpaceExhausted),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserStore {
    inner: Arc<RwLock<UserTable>>,
    id_allocation: IdAllocation,
}

impl UserStore {
    pub fn new(id_allocation: IdAllocation) -> Self {
        Self {
            inner: Arc::new(RwLock::new(UserTable::default())),
            id_allocation,
        }
    }

    pub fn id_allocation(&self) -> IdAllocation {
        self.id_allocation
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.inner.read().users.clone()
    }

    pub fn get(&self, id: i32) -> Option<User> {
        self.inner.read().users.iter().find(|u| u.id == id).cloned()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.inner.read().users.iter().any(|u| u.id == id)
    }

    /// Assigns an id to `dto` and appends the resulting record.
    pub fn insert(&self, dto: UserDto) -> Result<User, StoreError> {
        let mut table = self.inner.write();
        let id = table.next_id(self.id_allocation)?;
        let user = User::from_dto(id, dto);
        table.users.push(user.clone());

        debug!(user_id = id, total = table.users.len(), "User inserted");
        Ok(user)
    }

    /// Overwrites the non-id fields of the record with `id`.
    ///
    /// Returns the updated record, or `None` if no record has that id.
    pub fn update(&self, id: i32, dto: UserDto) -> Option<User> {
        let mut table = self.inner.write();
        let user = table.users.iter_mut().find(|u| u.id == id)?;
        user.apply(dto);
        Some(user.clone())
    }

    /// Removes the record with `id`, keeping the order of the rest.
    pub fn remove(&self, id: i32) -> Option<User> {
        let mut table = self.inner.write();
        let position = table.users.iter().position(|u| u.id == id)?;
        let removed = table.users.remove(position);

        debug!(user_id = id, total = table.users.len(), "User removed");
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.inner.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new(IdAllocation::default())
    }
}
