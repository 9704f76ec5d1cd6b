use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "resource")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Option<Uuid>,
    pub original_name: String,
    pub extension: Option<String>,
    pub mime_type: Option<String>,
    pub path: String,
    pub size: i64,
    pub uploaded_by: Option<Uuid>,
    pub checksum: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    /// Non-null marks the row soft-deleted.
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::resource_author::Entity",
        from = "Column::AuthorId",
        to = "super::resource_author::Column::Id"
    )]
    Author,
    #[sea_orm(has_many = "super::resource_translation::Entity")]
    Translation,
    #[sea_orm(has_many = "super::resource_tag_association::Entity")]
    TagAssociation,
}

impl Related<super::resource_author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::resource_translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Translation.def()
    }
}

impl Related<super::resource_tag_association::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagAssociation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
