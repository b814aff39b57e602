//! Loan management service

use chrono::{Duration, Local, NaiveDate};

use crate::{
    error::{AppError, AppResult},
    models::borrowing::{BorrowRequest, BorrowingRecordDetails, LOAN_DURATION_DAYS},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<BorrowingRecordDetails>> {
        let records = self.repository.read().await.records_list();
        tracing::debug!("Returning borrowing records count={}", records.len());
        Ok(records)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<BorrowingRecordDetails> {
        let store = self.repository.read().await;
        let record = store.records_get(id)?;
        Ok(store.records_details(record))
    }

    /// Borrow a book today
    pub async fn borrow(&self, request: BorrowRequest) -> AppResult<BorrowingRecordDetails> {
        self.borrow_on(request, today()).await
    }

    /// Borrow a book on `date`.
    ///
    /// Rejections leave the store untouched. The availability check and the
    /// decrement happen under one write lock.
    pub async fn borrow_on(
        &self,
        request: BorrowRequest,
        date: NaiveDate,
    ) -> AppResult<BorrowingRecordDetails> {
        let (book_id, member_id) = match (request.book_id, request.member_id) {
            (Some(book_id), Some(member_id)) => (book_id, member_id),
            _ => {
                return Err(AppError::BadRequest(
                    "Both a book id and a member id are required".to_string(),
                ))
            }
        };

        let mut store = self.repository.write().await;

        let available = store.books_get(book_id)?.available_copies;
        store.members_get(member_id)?;

        if available <= 0 {
            tracing::warn!("Borrow rejected: book id={} has no available copies", book_id);
            return Err(AppError::Unavailable(format!(
                "Book {} has no available copies",
                book_id
            )));
        }

        store.books_get_mut(book_id)?.available_copies -= 1;
        let due_date = date + Duration::days(LOAN_DURATION_DAYS);
        let record = store.records_create(book_id, member_id, date, due_date);

        tracing::info!(
            "Borrowed book id={} by member={} (record id={}, due {})",
            book_id,
            member_id,
            record.id,
            due_date
        );
        Ok(store.records_details(&record))
    }

    /// Return the book of a borrowing record today
    pub async fn return_book(&self, record_id: i64) -> AppResult<BorrowingRecordDetails> {
        self.return_book_on(record_id, today()).await
    }

    /// Mark a record returned on `date` and put the copy back on the shelf.
    ///
    /// Returning an already returned record is a no-op that yields the record
    /// as it stands.
    pub async fn return_book_on(
        &self,
        record_id: i64,
        date: NaiveDate,
    ) -> AppResult<BorrowingRecordDetails> {
        let mut store = self.repository.write().await;
        let record = store.records_get(record_id)?.clone();

        if record.return_date.is_some() {
            tracing::debug!("Borrowing record id={} already returned", record_id);
            return Ok(store.records_details(&record));
        }

        // restore the copy first so a failure leaves the record active
        match store.books.get_mut(record.book_id) {
            Some(book) => {
                book.available_copies = book.available_copies.checked_add(1).ok_or_else(|| {
                    AppError::Internal(format!(
                        "Available copies overflow for book id={}",
                        record.book_id
                    ))
                })?;
            }
            None => tracing::warn!(
                "Returned record id={} references deleted book id={}",
                record_id,
                record.book_id
            ),
        }

        let record = store.records_get_mut(record_id)?;
        record.return_date = Some(date);
        let record = record.clone();

        tracing::info!("Returned borrowing record id={}", record_id);
        Ok(store.records_details(&record))
    }
}

/// Local calendar date
fn today() -> NaiveDate {
    Local::now().date_naive()
}
