//! Tests for the shared in-memory contact repository.

use contact_manager::{
    Contact, ContactField, ContactRepository, ContactStore, InMemoryContactRepository,
    NewContact,
};
use std::sync::Arc;

#[tokio::test]
async fn test_repository_through_trait_object() {
    let repo = Arc::new(InMemoryContactRepository::new()) as Arc<dyn ContactRepository>;

    repo.add(NewContact::new(Some("John"), Some("Doe"), Some("0123456789")))
        .await
        .unwrap();
    let err = repo
        .add(NewContact::new(Some("John"), Some("Doe"), None))
        .await
        .unwrap_err();

    assert_eq!(err.missing_field(), Some(ContactField::PhoneNumber));
    assert_eq!(
        repo.list().await.unwrap(),
        vec![Contact::new("John", "Doe", "0123456789")]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_all_land() {
    let repo = InMemoryContactRepository::new();
    let tasks: usize = 50;

    let handles: Vec<_> = (0..tasks)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                let phone = format!("{:010}", i);
                repo.add(NewContact::new(Some("Task"), Some("Writer"), Some(phone.as_str())))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repo.count().await.unwrap(), tasks);

    let mut phones: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .iter()
        .map(|c| c.phone_number().to_string())
        .collect();
    phones.sort();
    phones.dedup();
    assert_eq!(phones.len(), tasks);

    let summary = repo.metrics().await.summary();
    assert_eq!(summary.contacts_added_total, tasks as u64);
    assert_eq!(summary.validation_failures_total, 0);
}

#[tokio::test]
async fn test_list_is_a_snapshot() {
    let repo = InMemoryContactRepository::new();
    repo.add(NewContact::new(Some("A"), Some("B"), Some("1")))
        .await
        .unwrap();

    let mut snapshot = repo.list().await.unwrap();
    snapshot.clear();

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_repository_over_preloaded_store() {
    let mut store = ContactStore::new();
    store.add(Some("A"), Some("One"), Some("1")).unwrap();
    let repo = InMemoryContactRepository::with_store(store);

    repo.add(NewContact::new(Some("B"), Some("Two"), Some("2")))
        .await
        .unwrap();

    let names: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .iter()
        .map(Contact::full_name)
        .collect();
    assert_eq!(names, vec!["A One", "B Two"]);
}
