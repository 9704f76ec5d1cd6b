use anyhow::Context;
use async_trait::async_trait;
use domain_resource::{model::entity::Tag, repository::TagRepo};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, EntityTrait};

use crate::infrastructure::database::model::resource_tag;
use crate::infrastructure::database::OrmRepo;

#[async_trait]
impl TagRepo for OrmRepo {
    async fn find_or_create(&self, id: &str, name: &str) -> anyhow::Result<Tag> {
        let conn = self.db.get_connection();
        if let Some(existing) = resource_tag::Entity::find_by_id(id).one(conn).await? {
            return Ok(Tag {
                id: existing.id,
                name: existing.name,
            });
        }
        let model = resource_tag::ActiveModel {
            id: Set(id.to_owned()),
            name: Set(name.to_owned()),
        };
        resource_tag::Entity::insert(model)
            .on_conflict(OnConflict::column(resource_tag::Column::Id).do_nothing().to_owned())
            .exec_without_returning(conn)
            .await?;
        // Re-read so a concurrent creator's name wins; the first write is
        // the one that sticks.
        let created = resource_tag::Entity::find_by_id(id)
            .one(conn)
            .await?
            .context("tag row missing right after find-or-create")?;
        Ok(Tag {
            id: created.id,
            name: created.name,
        })
    }
}
