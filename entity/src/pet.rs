use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rescue_id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age_months: i32,
    pub status: String,
    #[sea_orm(column_type = "Text")]
    pub description_source: String,
    #[sea_orm(column_type = "Text")]
    pub description_html: String,
    pub photo_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
    #[sea_orm(has_many = "super::rating::Entity")]
    Rating,
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

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl Related<super::rescue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rescue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
