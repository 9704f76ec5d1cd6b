use std::sync::Arc;

use async_trait::async_trait;
use domain_resource::{
    model::vo::TagDescriptor, repository::TagRepo, service::TagSyncService,
};
use typed_builder::TypedBuilder;

/// Owning-side tag sync: the ids this returns become the resource's whole
/// tag membership, nothing is appended incrementally.
#[derive(TypedBuilder)]
pub struct TagSyncServiceImpl {
    tag_repo: Arc<dyn TagRepo>,
}

#[async_trait]
impl TagSyncService for TagSyncServiceImpl {
    async fn reconcile(&self, descriptors: &[TagDescriptor]) -> anyhow::Result<Vec<String>> {
        let mut tag_ids = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            match descriptor {
                TagDescriptor::New { proposed_id, name } => {
                    let id = proposed_id.to_lowercase();
                    let tag = self.tag_repo.find_or_create(&id, name).await?;
                    tag_ids.push(tag.id);
                }
                TagDescriptor::Existing { id } => {
                    // An existing reference with an empty id is dropped.
                    if !id.is_empty() {
                        tag_ids.push(id.clone());
                    }
                }
            }
        }
        Ok(tag_ids)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use domain_resource::{mock::MockTagRepo, model::entity::Tag};

    use super::*;

    /// Mock repo backed by a shared map, so find-or-create keeps the first
    /// name written for an id.
    fn store_backed_repo(store: Arc<Mutex<HashMap<String, String>>>) -> MockTagRepo {
        let mut repo = MockTagRepo::new();
        repo.expect_find_or_create().returning(move |id, name| {
            let mut store = store.lock().unwrap();
            let name = store.entry(id.to_owned()).or_insert_with(|| name.to_owned());
            Ok(Tag {
                id: id.to_owned(),
                name: name.clone(),
            })
        });
        repo
    }

    fn service(repo: MockTagRepo) -> TagSyncServiceImpl {
        TagSyncServiceImpl::builder().tag_repo(Arc::new(repo)).build()
    }

    fn new_tag(proposed_id: &str, name: &str) -> TagDescriptor {
        TagDescriptor::New {
            proposed_id: proposed_id.to_owned(),
            name: name.to_owned(),
        }
    }

    fn existing(id: &str) -> TagDescriptor {
        TagDescriptor::Existing { id: id.to_owned() }
    }

    #[tokio::test]
    async fn first_seen_name_wins_within_one_batch() {
        let store = Arc::new(Mutex::new(HashMap::new()));
        let service = service(store_backed_repo(store.clone()));

        let ids = service
            .reconcile(&[new_tag("Rust", "Rust Lang"), new_tag("rust", "Renamed")])
            .await
            .unwrap();

        assert_eq!(ids, vec!["rust", "rust"]);
        assert_eq!(store.lock().unwrap().get("rust").unwrap(), "Rust Lang");
    }

    #[tokio::test]
    async fn id_normalization_is_idempotent() {
        let store = Arc::new(Mutex::new(HashMap::new()));
        let service = service(store_backed_repo(store.clone()));

        service.reconcile(&[new_tag("Foo", "Foo")]).await.unwrap();
        service.reconcile(&[new_tag("foo", "Foo")]).await.unwrap();

        let store = store.lock().unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.contains_key("foo"));
    }

    #[tokio::test]
    async fn empty_existing_id_is_dropped() {
        let service = service(MockTagRepo::new());

        let ids = service
            .reconcile(&[existing(""), existing("landscape")])
            .await
            .unwrap();

        assert_eq!(ids, vec!["landscape"]);
    }

    #[tokio::test]
    async fn empty_input_yields_empty_membership() {
        let service = service(MockTagRepo::new());

        let ids = service.reconcile(&[]).await.unwrap();

        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn output_preserves_input_order_and_duplicates() {
        let store = Arc::new(Mutex::new(HashMap::new()));
        let service = service(store_backed_repo(store));

        let ids = service
            .reconcile(&[existing("sunset"), new_tag("Beach", "Beach"), existing("sunset")])
            .await
            .unwrap();

        assert_eq!(ids, vec!["sunset", "beach", "sunset"]);
    }
}
