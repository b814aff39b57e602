//! Book domain methods on Store

use super::Store;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
};

impl Store {
    pub fn books_list(&self) -> Vec<Book> {
        self.books.rows().to_vec()
    }

    pub fn books_get(&self, id: i64) -> AppResult<&Book> {
        self.books
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub fn books_get_mut(&mut self, id: i64) -> AppResult<&mut Book> {
        self.books
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Insert a book, assigning the next id unless the payload carries one
    pub fn books_create(&mut self, payload: BookPayload) -> Book {
        let id = match payload.id {
            Some(id) => id,
            None => self.books.allocate_id(),
        };
        let book = payload.into_book(id);
        self.books.push(book.clone());
        book
    }

    /// Replace the whole book stored under `id`
    pub fn books_update(&mut self, id: i64, payload: BookPayload) -> AppResult<Book> {
        let book = payload.into_book(id);
        if !self.books.replace(book.clone()) {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(book)
    }

    pub fn books_delete(&mut self, id: i64) -> AppResult<()> {
        if !self.books.remove(id) {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
