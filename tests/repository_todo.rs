use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use todo_pincode_service::domain::entities::Todo;
use todo_pincode_service::domain::repositories::TodoRepository;
use todo_pincode_service::infrastructure::persistence::InMemoryTodoRepository;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inserts_are_all_kept() {
    let repo = Arc::new(InMemoryTodoRepository::seeded(10));

    let mut handles = Vec::new();
    for i in 0..50 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            let todo = Todo::with_generated_id(Utc::now(), format!("task {i}"));
            let id = todo.id.clone();
            repo.upsert(todo).await.unwrap();
            id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 50);
    assert_eq!(repo.count().await.unwrap(), 60);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_deletes_and_reads() {
    let repo = Arc::new(InMemoryTodoRepository::seeded(20));
    let ids: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();

    let mut handles = Vec::new();
    for id in ids.iter().take(10).cloned() {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.remove(&id).await.unwrap();
            repo.find_all().await.unwrap().len()
        }));
    }

    for handle in handles {
        let seen = handle.await.unwrap();
        assert!((10..20).contains(&seen));
    }

    assert_eq!(repo.count().await.unwrap(), 10);
    for id in ids.iter().skip(10) {
        assert!(repo.find_by_id(id).await.unwrap().is_some());
    }
}
