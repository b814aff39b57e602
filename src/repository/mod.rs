//! Repository layer: the in-memory entity store

pub mod books;
pub mod members;
pub mod records;
pub mod table;

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Book, BorrowingRecord, Member};
use table::{Keyed, Table};

/// All library state. Lost when the process exits.
#[derive(Debug, Default)]
pub struct Store {
    pub books: Table<Book>,
    pub members: Table<Member>,
    pub records: Table<BorrowingRecord>,
}

impl Keyed for Book {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Keyed for Member {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Keyed for BorrowingRecord {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Shared handle to the store.
///
/// Every mutation runs under the single write lock, so a check and the
/// update that depends on it can never interleave with another writer.
/// Readers only ever see complete writes.
#[derive(Clone, Default)]
pub struct Repository {
    store: Arc<RwLock<Store>>,
}

impl Repository {
    /// Create a repository over an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().await
    }
}
