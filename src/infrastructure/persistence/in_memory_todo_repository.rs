//! In-memory implementation of the todo repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::Todo;
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;

/// Process-local todo store.
///
/// Records live only as long as the process. Keys are stored lowercased so
/// lookups ignore ASCII case. Each record carries an insertion sequence number
/// so [`TodoRepository::find_all`] returns records in insertion order;
/// replacing a record keeps its original position.
#[derive(Default)]
pub struct InMemoryTodoRepository {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    records: HashMap<String, Entry>,
    next_seq: u64,
}

struct Entry {
    seq: u64,
    todo: Todo,
}

impl InMemoryTodoRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `count` bootstrap todos, each dated
    /// at the moment it is created.
    pub fn seeded(count: usize) -> Self {
        let mut store = Store::default();
        for _ in 0..count {
            store.upsert(Todo::bootstrap(Utc::now()));
        }

        tracing::info!(count, "Todo store initialized with bootstrap data");

        Self {
            inner: RwLock::new(store),
        }
    }
}

impl Store {
    fn upsert(&mut self, todo: Todo) {
        let key = todo.id.to_ascii_lowercase();
        let seq = match self.records.get(&key) {
            Some(existing) => existing.seq,
            None => {
                self.next_seq += 1;
                self.next_seq
            }
        };
        self.records.insert(key, Entry { seq, todo });
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn upsert(&self, todo: Todo) -> Result<(), AppError> {
        self.inner.write().await.upsert(todo);
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<bool, AppError> {
        let mut store = self.inner.write().await;
        let key = id.to_ascii_lowercase();

        // Removal matches the stored id exactly; only lookups ignore case.
        if store.records.get(&key).is_some_and(|e| e.todo.id == id) {
            store.records.remove(&key);
            return Ok(true);
        }
        Ok(false)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, AppError> {
        let store = self.inner.read().await;
        let mut entries: Vec<&Entry> = store.records.values().collect();
        entries.sort_by_key(|e| e.seq);
        Ok(entries.into_iter().map(|e| e.todo.clone()).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, AppError> {
        let store = self.inner.read().await;
        Ok(store
            .records
            .get(&id.to_ascii_lowercase())
            .map(|e| e.todo.clone()))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.inner.read().await.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BOOTSTRAP_DESCRIPTION;

    fn todo(id: &str, description: &str) -> Todo {
        Todo::new(id.to_string(), Utc::now(), description.to_string())
    }

    #[tokio::test]
    async fn test_seeded_store_has_bootstrap_records() {
        let repo = InMemoryTodoRepository::seeded(10);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 10);
        assert!(all.iter().all(|t| t.description == BOOTSTRAP_DESCRIPTION));
        assert_eq!(repo.count().await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryTodoRepository::new();
        for id in ["c", "a", "b"] {
            repo.upsert(todo(id, id)).await.unwrap();
        }

        let ids: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_upsert_replaces_in_place() {
        let repo = InMemoryTodoRepository::new();
        repo.upsert(todo("first", "old")).await.unwrap();
        repo.upsert(todo("second", "other")).await.unwrap();
        repo.upsert(todo("first", "new")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "first");
        assert_eq!(all[0].description, "new");
    }

    #[tokio::test]
    async fn test_find_by_id_ignores_case() {
        let repo = InMemoryTodoRepository::new();
        repo.upsert(todo("abc-def", "x")).await.unwrap();

        let found = repo.find_by_id("ABC-DEF").await.unwrap();
        assert_eq!(found.unwrap().id, "abc-def");
    }

    #[tokio::test]
    async fn test_find_by_id_missing_returns_none() {
        let repo = InMemoryTodoRepository::seeded(3);

        assert!(repo.find_by_id("does-not-exist").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_reports_existence() {
        let repo = InMemoryTodoRepository::new();
        repo.upsert(todo("gone", "x")).await.unwrap();

        assert!(repo.remove("gone").await.unwrap());
        assert!(!repo.remove("gone").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_remove_requires_exact_case() {
        let repo = InMemoryTodoRepository::new();
        repo.upsert(todo("abc-def", "x")).await.unwrap();

        assert!(!repo.remove("ABC-DEF").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);

        assert!(repo.remove("abc-def").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seeded_records_get_their_own_timestamps() {
        let before = Utc::now();
        let repo = InMemoryTodoRepository::seeded(5);
        let after = Utc::now();

        let dates: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.date)
            .collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
        assert!(dates.iter().all(|d| *d >= before && *d <= after));
    }
}
