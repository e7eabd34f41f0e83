//! Business listing records as managed by the business-management screen.

use crate::model::record::{KindValue, Listable, StatusValue};
use crate::model::RecordId;
use crate::query::SortKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a business listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessStatus {
    /// Submitted, awaiting admin review.
    Pending,
    /// Approved and publicly listed.
    Active,
    /// Temporarily delisted by an admin.
    Suspended,
    /// Permanently delisted.
    Closed,
}

impl StatusValue for BusinessStatus {
    fn label(&self) -> &'static str {
        match self {
            BusinessStatus::Pending => "Pending",
            BusinessStatus::Active => "Active",
            BusinessStatus::Suspended => "Suspended",
            BusinessStatus::Closed => "Closed",
        }
    }

    fn is_destructive(&self) -> bool {
        matches!(self, BusinessStatus::Suspended | BusinessStatus::Closed)
    }

    fn all() -> &'static [Self] {
        &[
            BusinessStatus::Pending,
            BusinessStatus::Active,
            BusinessStatus::Suspended,
            BusinessStatus::Closed,
        ]
    }
}

/// Whether a business sells products or offers services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessKind {
    /// Sells physical goods.
    Product,
    /// Offers services.
    Service,
}

impl KindValue for BusinessKind {}

/// Contact details of the account that owns a business listing.
///
/// Sourced from a joined owner document; any of the fields may be absent on
/// partially-migrated records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnerContact {
    /// Owner account handle.
    pub username: Option<String>,
    /// Owner first name.
    pub first_name: Option<String>,
    /// Owner last name.
    pub last_name: Option<String>,
    /// Owner email.
    pub email: Option<String>,
}

/// A business listing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Opaque unique identifier.
    pub id: RecordId,
    /// Business display name.
    pub name: String,
    /// Listing category, if assigned.
    pub category: Option<String>,
    /// Product or service business.
    pub kind: BusinessKind,
    /// Current listing status.
    pub status: BusinessStatus,
    /// Owner account contact block, if joined in.
    pub owner: OwnerContact,
    /// Business contact email.
    pub contact_email: Option<String>,
    /// Business contact phone.
    pub contact_phone: Option<String>,
    /// City, if a structured location exists.
    pub city: Option<String>,
    /// Street address, if one exists.
    pub address: Option<String>,
    /// Listing registration time.
    pub registered_at: DateTime<Utc>,
}

impl Business {
    /// Location text for display and city sorting.
    ///
    /// Resolution policy for the optional location fields: prefer the
    /// structured city, fall back to the street address, then to empty.
    pub fn location_text(&self) -> &str {
        self.city
            .as_deref()
            .or(self.address.as_deref())
            .unwrap_or("")
    }
}

impl Listable for Business {
    type Status = BusinessStatus;
    type Kind = BusinessKind;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> BusinessStatus {
        self.status
    }

    fn set_status(&mut self, status: BusinessStatus) {
        self.status = status;
    }

    fn kind(&self) -> Option<BusinessKind> {
        Some(self.kind)
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.registered_at
    }

    fn collect_search_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.name);
        if let Some(category) = self.category.as_deref() {
            out.push(category);
        }
        for field in [
            self.owner.username.as_deref(),
            self.owner.first_name.as_deref(),
            self.owner.last_name.as_deref(),
            self.owner.email.as_deref(),
            self.contact_email.as_deref(),
            self.contact_phone.as_deref(),
        ]
        .into_iter()
        .flatten()
        {
            out.push(field);
        }
    }

    fn sort_text(&self, key: SortKey) -> &str {
        match key {
            SortKey::Name => &self.name,
            SortKey::City => self.location_text(),
            SortKey::Unsorted => "",
        }
    }
}

#[cfg(test)]
impl Business {
    /// Minimal fixture for unit tests.
    pub(crate) fn sample(id: &str, name: &str, status: BusinessStatus) -> Self {
        Self {
            id: RecordId::new(id).expect("valid id"),
            name: name.to_string(),
            category: None,
            kind: BusinessKind::Product,
            status,
            owner: OwnerContact::default(),
            contact_email: None,
            contact_phone: None,
            city: None,
            address: None,
            registered_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_text_prefers_city_over_address() {
        let mut biz = Business::sample("b1", "Artisan Coffee House", BusinessStatus::Active);
        biz.address = Some("123 Main Street".to_string());
        assert_eq!(biz.location_text(), "123 Main Street");
        biz.city = Some("Surat".to_string());
        assert_eq!(biz.location_text(), "Surat");
    }

    #[test]
    fn location_text_empty_when_both_missing() {
        let biz = Business::sample("b1", "Artisan Coffee House", BusinessStatus::Active);
        assert_eq!(biz.location_text(), "");
    }

    #[test]
    fn search_fields_skip_missing_optionals() {
        let mut biz = Business::sample("b1", "Artisan Coffee House", BusinessStatus::Active);
        biz.owner.username = Some("asha.rao".to_string());
        let mut fields = Vec::new();
        biz.collect_search_fields(&mut fields);
        assert_eq!(fields, vec!["Artisan Coffee House", "asha.rao"]);
    }

    #[test]
    fn suspended_and_closed_are_destructive() {
        assert!(BusinessStatus::Suspended.is_destructive());
        assert!(BusinessStatus::Closed.is_destructive());
        assert!(!BusinessStatus::Pending.is_destructive());
        assert!(!BusinessStatus::Active.is_destructive());
    }
}
