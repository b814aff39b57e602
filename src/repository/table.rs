//! Id-keyed in-memory table

/// Rows that carry their own identity
pub trait Keyed {
    fn id(&self) -> i64;
}

/// Ordered rows of one entity type plus its id counter.
///
/// Lookups are linear scans. The counter starts at 1 and only moves forward,
/// so ids are never handed out twice, even after deletes.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Keyed> Table<T> {
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    pub fn push(&mut self, row: T) {
        self.rows.push(row);
    }

    /// Replace the first row sharing `row`'s id. Returns false if there is none.
    pub fn replace(&mut self, row: T) -> bool {
        match self.get_mut(row.id()) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    /// Remove the first row with `id`
    pub fn remove(&mut self, id: i64) -> bool {
        match self.rows.iter().position(|row| row.id() == id) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }
}
