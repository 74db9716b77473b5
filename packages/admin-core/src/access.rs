/// Capabilities in the admin console
///
/// Every gated screen and action names one capability; the allowed-role set
/// lives here and nowhere else. Role strings are compared case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Site-wide totals on the dashboard
    ViewDashboard,

    /// List, create and edit categories
    ManageCategories,

    /// Delete categories
    DeleteCategories,

    /// List and edit posts
    ManagePosts,

    /// Delete posts
    DeletePosts,

    /// Browse and delete ads
    ManageAds,

    /// Create new ads
    CreateAds,

    /// Browse registered users
    ManageUsers,

    /// Create, re-role and delete staff accounts
    ManagePermissions,

    /// Approve or reject publisher applications
    ReviewRoleRequests,
}

/// Staff roles an account can be given.
pub const STAFF_ROLES: &[&str] = &["admin", "editor", "publisher"];

impl Capability {
    pub fn allowed_roles(&self) -> &'static [&'static str] {
        match self {
            Capability::ManageCategories | Capability::ManageAds => &["admin", "editor"],
            Capability::ManagePosts => &["admin", "editor", "publisher"],
            Capability::DeletePosts => &["admin", "publisher"],
            Capability::ViewDashboard
            | Capability::DeleteCategories
            | Capability::CreateAds
            | Capability::ManageUsers
            | Capability::ManagePermissions
            | Capability::ReviewRoleRequests => &["admin"],
        }
    }

    /// Check a role against this capability. `None` (claims not resolved)
    /// is never permitted.
    pub fn permits(&self, role: Option<&str>) -> bool {
        let Some(role) = role else {
            return false;
        };
        let role = role.trim().to_lowercase();
        self.allowed_roles().iter().any(|allowed| *allowed == role)
    }
}

/// Whether `role` names a known staff role.
pub fn is_staff_role(role: &str) -> bool {
    let role = role.trim().to_lowercase();
    STAFF_ROLES.iter().any(|r| *r == role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_role_is_denied() {
        assert!(!Capability::ManagePosts.permits(None));
        assert!(!Capability::ManagePosts.permits(Some("")));
    }

    #[test]
    fn test_role_comparison_ignores_case() {
        assert!(Capability::ManageUsers.permits(Some("Admin")));
        assert!(Capability::ManageUsers.permits(Some(" ADMIN ")));
        assert!(!Capability::ManageUsers.permits(Some("editor")));
    }

    #[test]
    fn test_post_capabilities() {
        assert!(Capability::ManagePosts.permits(Some("publisher")));
        assert!(Capability::ManagePosts.permits(Some("editor")));
        assert!(!Capability::DeletePosts.permits(Some("editor")));
        assert!(Capability::DeletePosts.permits(Some("publisher")));
    }

    #[test]
    fn test_category_delete_is_admin_only() {
        assert!(Capability::ManageCategories.permits(Some("editor")));
        assert!(!Capability::DeleteCategories.permits(Some("editor")));
    }

    #[test]
    fn test_staff_roles() {
        assert!(is_staff_role("Publisher"));
        assert!(!is_staff_role("user"));
    }
}
