use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "chat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rescue_id: i32,
    pub application_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application::Entity",
        from = "Column::ApplicationId",
        to = "super::application::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Application,
    #[sea_orm(has_many = "super::chat_participant::Entity")]
    ChatParticipant,
    #[sea_orm(has_many = "super::message::Entity")]
    Message,
    #[sea_orm(
        belongs_to = "super::rescue::Entity",
        from = "Column::RescueId",
        to = "super::rescue::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Rescue,
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl Related<super::chat_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatParticipant.def()
    }
}

impl Related<super::message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Message.def()
    }
}

impl Related<super::rescue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rescue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
