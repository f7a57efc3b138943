pub use sea_orm_migration::prelude::*;

mod m20260601_000001_create_user_table;
mod m20260601_000002_create_rescue_table;
mod m20260601_000003_create_staff_member_table;
mod m20260601_000004_create_pet_table;
mod m20260601_000005_create_application_table;
mod m20260602_000006_create_chat_table;
mod m20260602_000007_create_chat_participant_table;
mod m20260602_000008_create_message_table;
mod m20260602_000009_create_rating_table;
mod m20260603_000010_create_notification_table;
mod m20260603_000011_create_audit_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_create_user_table::Migration),
            Box::new(m20260601_000002_create_rescue_table::Migration),
            Box::new(m20260601_000003_create_staff_member_table::Migration),
            Box::new(m20260601_000004_create_pet_table::Migration),
            Box::new(m20260601_000005_create_application_table::Migration),
            Box::new(m20260602_000006_create_chat_table::Migration),
            Box::new(m20260602_000007_create_chat_participant_table::Migration),
            Box::new(m20260602_000008_create_message_table::Migration),
            Box::new(m20260602_000009_create_rating_table::Migration),
            Box::new(m20260603_000010_create_notification_table::Migration),
            Box::new(m20260603_000011_create_audit_log_table::Migration),
        ]
    }
}
