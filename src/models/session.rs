use crate::models::domain::{User, UserRole};

/// The viewer a listing or claim check is evaluated for
///
/// Passed explicitly to anything that depends on who is looking; there is no
/// process-wide "current user".
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Session for the first user holding `role`, anonymous if none does
    ///
    /// This is how demos and tests switch between customer, merchant, NGO
    /// and admin views.
    pub fn for_role(users: &[User], role: UserRole) -> Self {
        match users.iter().find(|u| u.role == role) {
            Some(user) => Self::signed_in(user.clone()),
            None => {
                tracing::warn!("No user with role {:?}, falling back to anonymous session", role);
                Self::anonymous()
            }
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
