use std::sync::atomic::Ordering;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_resource::command::ResourceFieldPatch;
use domain_resource::model::entity::{AuthorRef, Resource, ResourceTranslation, Tag};
use domain_resource::model::vo::{ResourceOption, ResourcePage, ResourceQuery};
use domain_resource::repository::ResourceRepo;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};
use uuid::Uuid;

use crate::infrastructure::database::model::{
    resource, resource_author, resource_tag, resource_tag_association, resource_translation,
};
use crate::infrastructure::database::OrmRepo;

impl OrmRepo {
    fn resource_from_model(model: resource::Model) -> Resource {
        Resource {
            id: model.id,
            author_id: model.author_id,
            original_name: model.original_name,
            extension: model.extension,
            mime_type: model.mime_type,
            path: model.path,
            size: model.size,
            uploaded_by: model.uploaded_by,
            checksum: model.checksum,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
            translations: vec![],
            tags: vec![],
            author: None,
        }
    }

    async fn load_relations(&self, model: resource::Model) -> anyhow::Result<Resource> {
        let conn = self.db.get_connection();
        let translations = resource_translation::Entity::find()
            .filter(resource_translation::Column::ResourceId.eq(model.id))
            .order_by_asc(resource_translation::Column::LanguageCode)
            .all(conn)
            .await?
            .into_iter()
            .map(|t| ResourceTranslation {
                language_code: t.language_code,
                label: t.label,
                description: t.description,
            })
            .collect();
        let tag_ids: Vec<String> = resource_tag_association::Entity::find()
            .filter(resource_tag_association::Column::ResourceId.eq(model.id))
            .all(conn)
            .await?
            .into_iter()
            .map(|a| a.tag_id)
            .collect();
        let tags = if tag_ids.is_empty() {
            vec![]
        } else {
            resource_tag::Entity::find()
                .filter(resource_tag::Column::Id.is_in(tag_ids))
                .order_by_asc(resource_tag::Column::Id)
                .all(conn)
                .await?
                .into_iter()
                .map(|t| Tag {
                    id: t.id,
                    name: t.name,
                })
                .collect()
        };
        // Author projected to id and label only.
        let author = match model.author_id {
            Some(author_id) => resource_author::Entity::find_by_id(author_id)
                .one(conn)
                .await?
                .map(|a| AuthorRef {
                    id: a.id,
                    label: a.name,
                }),
            None => None,
        };
        let mut record = Self::resource_from_model(model);
        record.translations = translations;
        record.tags = tags;
        record.author = author;
        Ok(record)
    }

    /// Ids of the listed rows matching the extra condition, in one query.
    async fn existing_ids(
        &self,
        ids: &[Uuid],
        condition: Condition,
    ) -> anyhow::Result<Vec<Uuid>> {
        Ok(resource::Entity::find()
            .select_only()
            .column(resource::Column::Id)
            .filter(resource::Column::Id.is_in(ids.iter().copied()))
            .filter(condition)
            .into_tuple()
            .all(self.db.get_connection())
            .await?)
    }
}

#[async_trait]
impl ResourceRepo for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Resource>> {
        let model = resource::Entity::find_by_id(id).one(self.db.get_connection()).await?;
        Ok(model.map(Self::resource_from_model))
    }

    async fn get_with_author(&self, id: Uuid) -> anyhow::Result<Option<Resource>> {
        let model = resource::Entity::find_by_id(id).one(self.db.get_connection()).await?;
        match model {
            Some(model) => Ok(Some(self.load_relations(model).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self, query: &ResourceQuery) -> anyhow::Result<ResourcePage> {
        let mut select = resource::Entity::find()
            .filter(resource::Column::DeletedAt.is_null())
            .order_by_desc(resource::Column::CreatedAt);
        if let Some(q) = query.query.as_deref().filter(|q| !q.is_empty()) {
            select = select.filter(
                Condition::any()
                    .add(resource::Column::OriginalName.contains(q))
                    .add(resource::Column::Path.contains(q)),
            );
        }
        let page = query.page.max(1);
        let per_page = query.per_page.max(1);
        let paginator = select.paginate(self.db.get_connection(), per_page);
        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(page - 1)
            .await?
            .into_iter()
            .map(Self::resource_from_model)
            .collect();
        Ok(ResourcePage {
            items,
            total,
            page,
            per_page,
        })
    }

    async fn options(&self) -> anyhow::Result<Vec<ResourceOption>> {
        let rows: Vec<(Uuid, String)> = resource::Entity::find()
            .select_only()
            .column(resource::Column::Id)
            .column(resource::Column::OriginalName)
            .filter(resource::Column::DeletedAt.is_null())
            .order_by_asc(resource::Column::OriginalName)
            .into_tuple()
            .all(self.db.get_connection())
            .await?;
        Ok(rows
            .into_iter()
            .map(|(id, label)| ResourceOption { id, label })
            .collect())
    }

    async fn update_fields(&self, id: Uuid, patch: &ResourceFieldPatch) -> anyhow::Result<()> {
        resource::Entity::update_many()
            .col_expr(
                resource::Column::OriginalName,
                Expr::value(patch.original_name.clone()),
            )
            .col_expr(resource::Column::Extension, Expr::value(patch.extension.clone()))
            .col_expr(resource::Column::MimeType, Expr::value(patch.mime_type.clone()))
            .col_expr(resource::Column::Path, Expr::value(patch.path.clone()))
            .col_expr(resource::Column::Size, Expr::value(patch.size))
            .col_expr(resource::Column::Checksum, Expr::value(patch.checksum.clone()))
            .col_expr(resource::Column::AuthorId, Expr::value(patch.author_id))
            .col_expr(resource::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(resource::Column::Id.eq(id))
            .exec(self.db.get_connection())
            .await?;
        Ok(())
    }

    async fn replace_translations(
        &self,
        id: Uuid,
        translations: &[ResourceTranslation],
    ) -> anyhow::Result<()> {
        let conn = self.db.get_connection();
        resource_translation::Entity::delete_many()
            .filter(resource_translation::Column::ResourceId.eq(id))
            .exec(conn)
            .await?;
        if translations.is_empty() {
            return Ok(());
        }
        let models = translations.iter().map(|t| resource_translation::ActiveModel {
            resource_id: Set(id),
            language_code: Set(t.language_code.clone()),
            label: Set(t.label.clone()),
            description: Set(t.description.clone()),
        });
        resource_translation::Entity::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    resource_translation::Column::ResourceId,
                    resource_translation::Column::LanguageCode,
                ])
                .update_columns([
                    resource_translation::Column::Label,
                    resource_translation::Column::Description,
                ])
                .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    async fn replace_tag_associations(
        &self,
        id: Uuid,
        tag_ids: &[String],
    ) -> anyhow::Result<()> {
        let conn = self.db.get_connection();
        resource_tag_association::Entity::delete_many()
            .filter(resource_tag_association::Column::ResourceId.eq(id))
            .exec(conn)
            .await?;
        if tag_ids.is_empty() {
            return Ok(());
        }
        let models = tag_ids.iter().map(|tag_id| resource_tag_association::ActiveModel {
            resource_id: Set(id),
            tag_id: Set(tag_id.clone()),
        });
        // The association key absorbs duplicate ids in the submitted set.
        resource_tag_association::Entity::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    resource_tag_association::Column::ResourceId,
                    resource_tag_association::Column::TagId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    async fn bulk_soft_delete(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Uuid>> {
        let affected = self
            .existing_ids(ids, Condition::all().add(resource::Column::DeletedAt.is_null()))
            .await?;
        if affected.is_empty() {
            return Ok(affected);
        }
        let stmt = resource::Entity::update_many()
            .col_expr(resource::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(resource::Column::Id.is_in(affected.iter().copied()))
            .build(self.db.get_connection().get_database_backend());
        self.statements.lock().await.push(stmt);
        self.can_drop.store(false, Ordering::Relaxed);
        Ok(affected)
    }

    async fn bulk_restore(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Uuid>> {
        let affected = self
            .existing_ids(
                ids,
                Condition::all().add(resource::Column::DeletedAt.is_not_null()),
            )
            .await?;
        if affected.is_empty() {
            return Ok(affected);
        }
        let stmt = resource::Entity::update_many()
            .col_expr(
                resource::Column::DeletedAt,
                Expr::value(None::<DateTime<Utc>>),
            )
            .filter(resource::Column::Id.is_in(affected.iter().copied()))
            .build(self.db.get_connection().get_database_backend());
        self.statements.lock().await.push(stmt);
        self.can_drop.store(false, Ordering::Relaxed);
        Ok(affected)
    }

    async fn bulk_force_delete(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Uuid>> {
        let affected = self.existing_ids(ids, Condition::all()).await?;
        if affected.is_empty() {
            return Ok(affected);
        }
        let backend = self.db.get_connection().get_database_backend();
        let mut stmts = self.statements.lock().await;
        stmts.push(
            resource_tag_association::Entity::delete_many()
                .filter(
                    resource_tag_association::Column::ResourceId
                        .is_in(affected.iter().copied()),
                )
                .build(backend),
        );
        stmts.push(
            resource_translation::Entity::delete_many()
                .filter(resource_translation::Column::ResourceId.is_in(affected.iter().copied()))
                .build(backend),
        );
        stmts.push(
            resource::Entity::delete_many()
                .filter(resource::Column::Id.is_in(affected.iter().copied()))
                .build(backend),
        );
        self.can_drop.store(false, Ordering::Relaxed);
        Ok(affected)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}
