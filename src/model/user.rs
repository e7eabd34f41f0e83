//! User account records as listed by the user-management screen.

use crate::model::record::{Listable, NoKind, StatusValue};
use crate::model::RecordId;
use crate::query::SortKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account status for a user.
///
/// Any state may transition to any other except itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Signed up, not yet verified.
    PendingVerification,
    /// Account in good standing.
    Active,
    /// Temporarily locked out by an admin.
    Suspended,
    /// Permanently locked out by an admin.
    Blocked,
}

impl StatusValue for UserStatus {
    fn label(&self) -> &'static str {
        match self {
            UserStatus::PendingVerification => "Pending",
            UserStatus::Active => "Active",
            UserStatus::Suspended => "Suspended",
            UserStatus::Blocked => "Blocked",
        }
    }

    fn is_destructive(&self) -> bool {
        matches!(self, UserStatus::Suspended | UserStatus::Blocked)
    }

    fn all() -> &'static [Self] {
        &[
            UserStatus::PendingVerification,
            UserStatus::Active,
            UserStatus::Suspended,
            UserStatus::Blocked,
        ]
    }
}

/// Role attached to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular buyer account.
    Customer,
    /// Account that owns one or more business listings.
    Businessman,
    /// Platform administrator.
    Admin,
}

/// A user account record.
///
/// Phone and city are optional - accounts created before those fields were
/// collected simply lack them, and search/sort degrade gracefully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Unique handle.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Contact phone, if one was provided.
    pub phone: Option<String>,
    /// Self-reported city, if one was provided.
    pub city: Option<String>,
    /// Account role.
    pub role: UserRole,
    /// Current account status.
    pub status: UserStatus,
    /// Account creation time.
    pub joined_at: DateTime<Utc>,
}

impl Listable for User {
    type Status = UserStatus;
    type Kind = NoKind;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> UserStatus {
        self.status
    }

    fn set_status(&mut self, status: UserStatus) {
        self.status = status;
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.joined_at
    }

    fn collect_search_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.name);
        out.push(&self.username);
        out.push(&self.email);
    }

    fn sort_text(&self, key: SortKey) -> &str {
        match key {
            SortKey::Name => &self.name,
            SortKey::City => self.city.as_deref().unwrap_or(""),
            SortKey::Unsorted => "",
        }
    }
}

#[cfg(test)]
impl User {
    /// Minimal fixture for unit tests.
    pub(crate) fn sample(id: &str, name: &str, status: UserStatus) -> Self {
        let username = name.to_lowercase().replace(' ', ".");
        let email = format!("{username}@example.com");
        Self {
            id: RecordId::new(id).expect("valid id"),
            name: name.to_string(),
            username,
            email,
            phone: None,
            city: None,
            role: UserRole::Customer,
            status,
            joined_at: Utc::now(),
        }
    }
}
