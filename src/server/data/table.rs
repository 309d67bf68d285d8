use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use entity::prelude::*;

/// A row with an integer primary key.
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> i32;
}

macro_rules! impl_record {
    ($($record:ty),+ $(,)?) => {
        $(
            impl Record for $record {
                fn id(&self) -> i32 {
                    self.id
                }
            }
        )+
    };
}

impl_record!(
    Affiliate,
    Campaign,
    Commission,
    Conversation,
    Message,
    Payout,
    Product,
    Referral,
    WalletTransaction,
);

/// Next free id of a table: the highest id plus one, or 1 when the table is empty.
pub fn next_id<T: Record>(rows: &[T]) -> i32 {
    rows.iter().map(Record::id).max().map_or(1, |max| max + 1)
}

/// An in-memory table.
///
/// Reads hand out clones so callers can never mutate a stored row behind the table's back.
pub struct Table<T> {
    rows: RwLock<Vec<T>>,
}

impl<T: Record> Table<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub async fn all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .await
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    pub async fn find(&self, id: i32) -> Option<T> {
        self.find_by(|row| row.id() == id).await
    }

    pub async fn find_by<F>(&self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .await
            .iter()
            .find(|row| predicate(row))
            .cloned()
    }

    /// Insert the row built from the next free id and return a copy of it.
    pub async fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(i32) -> T,
    {
        let mut rows = self.rows.write().await;
        let row = build(next_id(&rows));
        rows.push(row.clone());

        row
    }

    /// Apply `change` to the row with `id`, returning the updated copy or `None` if absent.
    pub async fn update<F>(&self, id: i32, change: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut rows = self.rows.write().await;
        let row = rows.iter_mut().find(|row| row.id() == id)?;
        change(row);

        Some(row.clone())
    }

    /// Remove the row with `id`, returning whether it existed.
    pub async fn remove(&self, id: i32) -> bool {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id() != id);

        rows.len() != before
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Hold the table for reading across several lookups.
    pub async fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.rows.read().await
    }

    /// Hold the table for writing across several changes.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.rows.write().await
    }
}

#[cfg(test)]
mod tests {
    use influencehub_test_utils::factory;

    use super::*;

    #[test]
    fn next_id_follows_highest_id() {
        assert_eq!(next_id::<Campaign>(&[]), 1);

        let rows = vec![factory::campaign(3), factory::campaign(7)];
        assert_eq!(next_id(&rows), 8);
    }

    #[tokio::test]
    async fn insert_assigns_next_id() {
        let table = Table::new(vec![factory::campaign(4)]);

        let inserted = table
            .insert_with(|id| Campaign {
                id,
                ..factory::campaign(0)
            })
            .await;

        assert_eq!(inserted.id, 5);
        assert_eq!(table.len().await, 2);
    }

    #[tokio::test]
    async fn returned_rows_are_copies() {
        let table = Table::new(vec![factory::campaign(1)]);

        let mut copy = table.find(1).await.unwrap();
        copy.product_name = "Changed".to_string();

        assert_ne!(table.find(1).await.unwrap().product_name, "Changed");
    }

    #[tokio::test]
    async fn update_and_remove_report_missing_rows() {
        let table = Table::new(vec![factory::campaign(1)]);

        assert!(table.update(2, |row| row.views = 10).await.is_none());
        assert_eq!(table.update(1, |row| row.views = 10).await.unwrap().views, 10);

        assert!(table.remove(1).await);
        assert!(!table.remove(1).await);
        assert!(table.find(1).await.is_none());
    }
}
