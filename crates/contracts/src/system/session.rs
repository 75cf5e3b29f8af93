use serde::{Deserialize, Serialize};

/// Role of the connected user. Only employees reach the pages of this
/// application; the admin dashboard lives elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Employee,
    Admin,
}

/// The session user persisted in browser local storage under the `user` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    #[serde(rename = "type")]
    pub role: UserRole,
}

impl SessionUser {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: UserRole::Employee,
        }
    }

    pub fn is_employee(&self) -> bool {
        self.role == UserRole::Employee
    }
}
