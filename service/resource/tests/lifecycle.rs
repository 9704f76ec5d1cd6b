use std::sync::Arc;

use anyhow::anyhow;
use chrono::Utc;
use domain_resource::{
    command::{ResourceFieldPatch, UpdateResourceCommand},
    event::ResourceEvent,
    exception::ResourceException,
    mock::{MockResourceEventProducer, MockResourceRepo, MockTagRepo},
    model::{
        entity::{Resource, ResourceTranslation},
        vo::TagDescriptor,
    },
    service::ResourceLifecycleService,
};
use service_resource::{ResourceLifecycleServiceImpl, TagSyncServiceImpl};
use uuid::Uuid;

fn record(id: Uuid, author_id: Option<Uuid>) -> Resource {
    let now = Utc::now();
    Resource {
        id,
        author_id,
        original_name: "photo.jpg".to_owned(),
        extension: Some("jpg".to_owned()),
        mime_type: Some("image/jpeg".to_owned()),
        path: "uploads/2026/photo.jpg".to_owned(),
        size: 2048,
        uploaded_by: None,
        checksum: None,
        created_at: now,
        updated_at: now,
        deleted_at: None,
        translations: vec![],
        tags: vec![],
        author: None,
    }
}

fn update_command(author_id: Option<Uuid>) -> UpdateResourceCommand {
    UpdateResourceCommand {
        fields: ResourceFieldPatch {
            original_name: "photo.jpg".to_owned(),
            extension: Some("jpg".to_owned()),
            mime_type: Some("image/jpeg".to_owned()),
            path: "uploads/2026/photo.jpg".to_owned(),
            size: 2048,
            checksum: None,
            author_id,
        },
        translations: vec![ResourceTranslation {
            language_code: "en".to_owned(),
            label: "Photo".to_owned(),
            description: None,
        }],
        tags: vec![TagDescriptor::Existing {
            id: "landscape".to_owned(),
        }],
    }
}

fn lifecycle_service(
    repo: MockResourceRepo,
    tag_repo: MockTagRepo,
    producer: MockResourceEventProducer,
) -> ResourceLifecycleServiceImpl {
    ResourceLifecycleServiceImpl::builder()
        .resource_repo(Arc::new(repo))
        .tag_sync_service(Arc::new(
            TagSyncServiceImpl::builder().tag_repo(Arc::new(tag_repo)).build(),
        ))
        .event_producer(Arc::new(producer))
        .build()
}

#[tokio::test]
async fn soft_delete_reports_only_the_ids_actually_affected() {
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let affected = vec![a, b];

    let mut repo = MockResourceRepo::new();
    let expected_affected = affected.clone();
    repo.expect_bulk_soft_delete()
        .withf(move |ids| ids == [a, b, c])
        .return_once(move |_| Ok(expected_affected));
    repo.expect_save_changed().return_once(|| Ok(true));

    let mut producer = MockResourceEventProducer::new();
    let event_ids = affected.clone();
    producer
        .expect_send_object()
        .withf(move |event, topic| {
            topic == "resource-soft-deleted"
                && matches!(event, ResourceEvent::SoftDeleted { ids } if *ids == event_ids)
        })
        .return_once(|_, _| Ok(()));

    let service = lifecycle_service(repo, MockTagRepo::new(), producer);
    let deleted = service.delete_soft(&[a, b, c]).await.unwrap();

    assert_eq!(deleted, affected);
}

#[tokio::test]
async fn failed_bulk_operation_emits_no_event() {
    let id = Uuid::new_v4();

    let mut repo = MockResourceRepo::new();
    repo.expect_bulk_restore()
        .return_once(|_| Err(anyhow!("connection reset by peer")));
    repo.expect_save_changed().times(0);

    let mut producer = MockResourceEventProducer::new();
    producer.expect_send_object().times(0);

    let service = lifecycle_service(repo, MockTagRepo::new(), producer);
    let err = service.restore(&[id]).await.unwrap_err();

    assert!(err.to_string().contains("connection reset by peer"));
}

#[tokio::test]
async fn rolled_back_commit_emits_no_event() {
    let id = Uuid::new_v4();

    let mut repo = MockResourceRepo::new();
    repo.expect_bulk_soft_delete().return_once(move |_| Ok(vec![id]));
    repo.expect_save_changed()
        .return_once(|| Err(anyhow!("deadlock detected")));

    let mut producer = MockResourceEventProducer::new();
    producer.expect_send_object().times(0);

    let service = lifecycle_service(repo, MockTagRepo::new(), producer);
    let err = service.delete_soft(&[id]).await.unwrap_err();

    assert!(err.to_string().contains("deadlock detected"));
}

#[tokio::test]
async fn restore_after_force_delete_affects_zero_records() {
    let id = Uuid::new_v4();

    let mut repo = MockResourceRepo::new();
    repo.expect_bulk_restore().return_once(|_| Ok(vec![]));
    repo.expect_save_changed().return_once(|| Ok(false));

    let mut producer = MockResourceEventProducer::new();
    producer
        .expect_send_object()
        .withf(|event, _| matches!(event, ResourceEvent::Restored { ids } if ids.is_empty()))
        .return_once(|_, _| Ok(()));

    let service = lifecycle_service(repo, MockTagRepo::new(), producer);
    let restored = service.restore(&[id]).await.unwrap();

    assert!(restored.is_empty());
}

#[tokio::test]
async fn update_clears_author_when_none_submitted() {
    let id = Uuid::new_v4();
    let previous_author = Uuid::new_v4();

    let mut repo = MockResourceRepo::new();
    repo.expect_find_by_id()
        .return_once(move |_| Ok(Some(record(id, Some(previous_author)))));
    repo.expect_update_fields()
        .withf(|_, patch| patch.author_id.is_none())
        .return_once(|_, _| Ok(()));
    repo.expect_replace_translations().return_once(|_, _| Ok(()));
    repo.expect_replace_tag_associations()
        .withf(|_, tag_ids| tag_ids == ["landscape"])
        .return_once(|_, _| Ok(()));
    repo.expect_get_with_author()
        .return_once(move |_| Ok(Some(record(id, None))));

    let mut producer = MockResourceEventProducer::new();
    producer
        .expect_send_object()
        .withf(move |event, topic| {
            topic == "resource-updated"
                && matches!(event, ResourceEvent::Updated { resource } if resource.id == id)
        })
        .return_once(|_, _| Ok(()));

    let service = lifecycle_service(repo, MockTagRepo::new(), producer);
    let updated = service.update(id, update_command(None)).await.unwrap();

    assert_eq!(updated.author_id, None);
}

#[tokio::test]
async fn update_of_missing_resource_is_not_found() {
    let id = Uuid::new_v4();

    let mut repo = MockResourceRepo::new();
    repo.expect_find_by_id().return_once(|_| Ok(None));

    let service = lifecycle_service(repo, MockTagRepo::new(), MockResourceEventProducer::new());
    let err = service.update(id, update_command(None)).await.unwrap_err();

    assert!(matches!(err, ResourceException::NotFound { id: missing } if missing == id));
}
