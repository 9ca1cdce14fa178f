//! Repository operations for [`User`] records.

use siwes_shared::{validate, Role, UserId};

use crate::error::{Result, StoreError};
use crate::models::User;
use crate::store::Store;

impl Store {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Insert a user.  Ids and emails must be unique; name and email must
    /// not be blank.
    pub fn add_user(&mut self, user: User) -> Result<User> {
        validate::require_field("name", &user.name)?;
        validate::require_field("email", &user.email)?;

        if self.users.contains(&user.id) {
            tracing::warn!(user_id = %user.id, "rejecting user with duplicate id");
            return Err(StoreError::DuplicateId(user.id.to_string()));
        }
        if self.find_user_by_email(&user.email).is_some() {
            tracing::warn!(email = %user.email, "rejecting user with duplicate email");
            return Err(StoreError::DuplicateEmail(user.email));
        }

        tracing::info!(user_id = %user.id, role = %user.role, "user added");
        self.users.insert(user.id.clone(), user.id.clone(), user.clone());
        Ok(user)
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    pub fn get_user_by_id(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    /// Exact, case-sensitive email match.
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// First user, in insertion order, holding `role`.
    pub fn first_user_with_role(&self, role: Role) -> Option<&User> {
        self.users.iter().find(|u| u.role == role)
    }

    /// All users in insertion order.
    pub fn list_users(&self) -> Vec<&User> {
        self.users.iter().collect()
    }

    pub fn count_users_with_role(&self, role: Role) -> usize {
        self.users.iter().filter(|u| u.role == role).count()
    }

    /// Look a user up and check its role in one go.
    pub(crate) fn require_user_with_role(&self, id: &UserId, expected: Role) -> Result<&User> {
        let user = self
            .get_user_by_id(id)
            .ok_or_else(|| StoreError::UnknownUser(id.clone()))?;
        if user.role != expected {
            return Err(StoreError::RoleMismatch {
                user: id.clone(),
                expected,
                actual: user.role,
            });
        }
        Ok(user)
    }
}
