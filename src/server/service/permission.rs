//! Static role and permission table.
//!
//! Authorization is a fixed function of role and action. Roles are resolved
//! per rescue: the same user can be a coordinator at one rescue and a plain
//! adopter everywhere else. The table lives in code so a permission change is
//! a reviewed code change, not a data migration.

/// Role a user holds in the context of a request.
///
/// Ordered from least to most privileged; each role includes everything the
/// previous one may do, which the table below spells out explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Any authenticated user without staff standing at the rescue in question.
    Adopter,
    /// Staff member of the rescue in question.
    Staff,
    /// Coordinator of the rescue in question.
    Coordinator,
    /// Platform administrator.
    Admin,
}

/// Action checked against the permission table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewPets,
    RatePets,
    SubmitApplications,
    ViewStaff,
    ManagePets,
    ReviewApplications,
    ManageStaff,
    ManageRescue,
    ManageUsers,
    ViewAuditLogs,
}

/// Checks the static permission table.
///
/// # Returns
/// - `true` - The role may perform the action
/// - `false` - The action is denied for that role
pub fn allows(role: Role, action: Action) -> bool {
    match action {
        Action::ViewPets | Action::RatePets | Action::SubmitApplications => true,
        Action::ViewStaff | Action::ManagePets | Action::ReviewApplications => matches!(
            role,
            Role::Staff | Role::Coordinator | Role::Admin
        ),
        Action::ManageStaff | Action::ManageRescue => {
            matches!(role, Role::Coordinator | Role::Admin)
        }
        Action::ManageUsers | Action::ViewAuditLogs => matches!(role, Role::Admin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adopters_can_browse_and_apply() {
        assert!(allows(Role::Adopter, Action::ViewPets));
        assert!(allows(Role::Adopter, Action::RatePets));
        assert!(allows(Role::Adopter, Action::SubmitApplications));
    }

    #[test]
    fn adopters_cannot_manage_anything() {
        assert!(!allows(Role::Adopter, Action::ManagePets));
        assert!(!allows(Role::Adopter, Action::ReviewApplications));
        assert!(!allows(Role::Adopter, Action::ViewStaff));
        assert!(!allows(Role::Adopter, Action::ManageStaff));
        assert!(!allows(Role::Adopter, Action::ManageRescue));
        assert!(!allows(Role::Adopter, Action::ManageUsers));
        assert!(!allows(Role::Adopter, Action::ViewAuditLogs));
    }

    #[test]
    fn staff_manage_pets_but_not_staff() {
        assert!(allows(Role::Staff, Action::ManagePets));
        assert!(allows(Role::Staff, Action::ReviewApplications));
        assert!(allows(Role::Staff, Action::ViewStaff));
        assert!(!allows(Role::Staff, Action::ManageStaff));
        assert!(!allows(Role::Staff, Action::ManageRescue));
    }

    #[test]
    fn coordinators_manage_their_rescue() {
        assert!(allows(Role::Coordinator, Action::ManageStaff));
        assert!(allows(Role::Coordinator, Action::ManageRescue));
        assert!(!allows(Role::Coordinator, Action::ManageUsers));
        assert!(!allows(Role::Coordinator, Action::ViewAuditLogs));
    }

    #[test]
    fn admins_can_do_everything() {
        let actions = [
            Action::ViewPets,
            Action::RatePets,
            Action::SubmitApplications,
            Action::ViewStaff,
            Action::ManagePets,
            Action::ReviewApplications,
            Action::ManageStaff,
            Action::ManageRescue,
            Action::ManageUsers,
            Action::ViewAuditLogs,
        ];
        for action in actions {
            assert!(allows(Role::Admin, action));
        }
    }
}
