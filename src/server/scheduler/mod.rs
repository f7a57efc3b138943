//! Background jobs driven by cron schedules.

pub mod maintenance;
