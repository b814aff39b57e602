//! Book catalog service

use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.repository.read().await.books_list())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        tracing::debug!("Lookup book id={}", id);
        self.repository.read().await.books_get(id).cloned()
    }

    pub async fn create(&self, payload: BookPayload) -> AppResult<Book> {
        payload.validate()?;
        let book = self.repository.write().await.books_create(payload);
        tracing::info!("Added book id={}", book.id);
        Ok(book)
    }

    /// Full replace. Copy counts are stored as given.
    pub async fn update(&self, id: i64, payload: BookPayload) -> AppResult<Book> {
        payload.validate()?;
        let book = self.repository.write().await.books_update(id, payload)?;
        tracing::info!("Updated book id={}", id);
        Ok(book)
    }

    /// Outstanding borrowing records keep pointing at the removed id
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.write().await.books_delete(id)?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }
}
