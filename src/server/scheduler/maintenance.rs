use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::server::{
    data::{
        application::ApplicationRepository, notification::NotificationRepository,
        pet::PetRepository, staff_member::StaffMemberRepository,
    },
    error::AppError,
};

/// Pending applications older than this get a staff reminder.
const REMINDER_AGE_HOURS: i64 = 72;

/// Read notifications older than this are deleted by the cleanup job.
const NOTIFICATION_RETENTION_DAYS: i64 = 30;

/// Starts the maintenance scheduler.
///
/// Two jobs run in the background:
/// - Hourly: reminds rescue staff about pending applications older than 72 hours
/// - Daily at 03:00 UTC: deletes read notifications older than 30 days
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let reminder_db = db.clone();
    let reminder_job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = reminder_db.clone();

        Box::pin(async move {
            if let Err(e) = process_application_reminders(&db, Utc::now()).await {
                error!("Error processing application reminders: {}", e);
            }
        })
    })?;

    let cleanup_db = db.clone();
    let cleanup_job = Job::new_async("0 0 3 * * *", move |_uuid, _lock| {
        let db = cleanup_db.clone();

        Box::pin(async move {
            if let Err(e) = process_notification_cleanup(&db, Utc::now()).await {
                error!("Error cleaning up notifications: {}", e);
            }
        })
    })?;

    scheduler.add(reminder_job).await?;
    scheduler.add(cleanup_job).await?;
    scheduler.start().await?;

    info!("Maintenance scheduler started");

    Ok(())
}

/// Reminds rescue staff about stale pending applications.
///
/// Finds applications that are still pending, have never been reminded, and were
/// submitted more than 72 hours before `now`. Every staff member of the pet's
/// rescue receives an `application.reminder` notification, then the application
/// is stamped so it is not reminded twice.
///
/// # Arguments
/// - `db`: Database connection
/// - `now`: Current time, used as the reference for the age cutoff
async fn process_application_reminders(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let application_repo = ApplicationRepository::new(db);
    let pet_repo = PetRepository::new(db);
    let staff_repo = StaffMemberRepository::new(db);
    let notification_repo = NotificationRepository::new(db);

    let cutoff = now - Duration::hours(REMINDER_AGE_HOURS);
    let stale = application_repo.get_pending_unreminded_before(cutoff).await?;

    for application in stale {
        let Some(pet) = pet_repo.find_by_id(application.pet_id).await? else {
            continue;
        };

        let staff_ids = staff_repo.get_user_ids_by_rescue(pet.rescue_id).await?;
        let body = format!(
            "The application for {} has been waiting for review for over {} hours.",
            pet.name, REMINDER_AGE_HOURS
        );

        notification_repo
            .create_for_users(&staff_ids, "application.reminder", &body)
            .await?;
        application_repo.set_reminded(application.id, now).await?;

        info!(
            "Reminded {} staff member(s) about application {}",
            staff_ids.len(),
            application.id
        );
    }

    Ok(())
}

/// Deletes read notifications past the retention window.
///
/// Unread notifications are kept regardless of age.
///
/// # Arguments
/// - `db`: Database connection
/// - `now`: Current time, used as the reference for the retention cutoff
async fn process_notification_cleanup(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let notification_repo = NotificationRepository::new(db);

    let cutoff = now - Duration::days(NOTIFICATION_RETENTION_DAYS);
    let deleted = notification_repo.delete_read_older_than(cutoff).await?;

    if deleted > 0 {
        info!("Deleted {} expired notification(s)", deleted);
    }

    Ok(())
}
