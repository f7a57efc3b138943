pub use super::application::Entity as Application;
pub use super::audit_log::Entity as AuditLog;
pub use super::chat::Entity as Chat;
pub use super::chat_participant::Entity as ChatParticipant;
pub use super::message::Entity as Message;
pub use super::notification::Entity as Notification;
pub use super::pet::Entity as Pet;
pub use super::rating::Entity as Rating;
pub use super::rescue::Entity as Rescue;
pub use super::staff_member::Entity as StaffMember;
pub use super::user::Entity as User;
