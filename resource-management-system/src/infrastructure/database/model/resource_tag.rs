use sea_orm::entity::prelude::*;

/// Tag ids are stored lowercased; the reconciliation flow normalizes
/// before it ever writes here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "resource_tag")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::resource_tag_association::Entity")]
    TagAssociation,
}

impl Related<super::resource_tag_association::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagAssociation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
