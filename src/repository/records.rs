//! Borrowing record methods on Store

use chrono::NaiveDate;

use super::Store;
use crate::{
    error::{AppError, AppResult},
    models::borrowing::{BorrowingRecord, BorrowingRecordDetails},
};

impl Store {
    pub fn records_list(&self) -> Vec<BorrowingRecordDetails> {
        self.records
            .rows()
            .iter()
            .map(|record| self.records_details(record))
            .collect()
    }

    pub fn records_get(&self, id: i64) -> AppResult<&BorrowingRecord> {
        self.records
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Borrowing record {} not found", id)))
    }

    pub fn records_get_mut(&mut self, id: i64) -> AppResult<&mut BorrowingRecord> {
        self.records
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Borrowing record {} not found", id)))
    }

    /// Append a new active record under the next record id
    pub fn records_create(
        &mut self,
        book_id: i64,
        member_id: i64,
        borrow_date: NaiveDate,
        due_date: NaiveDate,
    ) -> BorrowingRecord {
        let record = BorrowingRecord {
            id: self.records.allocate_id(),
            book_id,
            member_id,
            borrow_date,
            due_date,
            return_date: None,
        };
        self.records.push(record.clone());
        record
    }

    /// Attach the current book and member to a record
    pub fn records_details(&self, record: &BorrowingRecord) -> BorrowingRecordDetails {
        record.details(
            self.books.get(record.book_id).cloned(),
            self.members.get(record.member_id).cloned(),
        )
    }
}
