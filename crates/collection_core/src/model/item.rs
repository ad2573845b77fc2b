//! Item domain model.
//!
//! # Responsibility
//! - Define the collectible record kept by `ItemStore`.
//! - Provide `ItemDraft` as the caller input shape for create/edit flows.
//!
//! # Invariants
//! - `id` is private and only assigned by the store's create path.
//! - The store does not validate fields; callers run
//!   `ItemDraft::validate()` before handing input over.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier of one item inside the active collection.
///
/// Strictly positive. Dense `1..=N` right after a load.
pub type ItemId = u64;

/// One collectible in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    pub title: String,
    /// Free text; expected to match a registry label at creation time.
    pub category: String,
    pub acquired_date: NaiveDate,
    pub manufactured_date: NaiveDate,
    pub description: String,
}

impl Item {
    /// Builds an item from a store-assigned id and caller input.
    pub(crate) fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            title: draft.title,
            category: draft.category,
            acquired_date: draft.acquired_date,
            manufactured_date: draft.manufactured_date,
            description: draft.description,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Replaces every editable field with the draft values.
    ///
    /// The id is left untouched.
    pub fn apply(&mut self, draft: ItemDraft) {
        self.title = draft.title;
        self.category = draft.category;
        self.acquired_date = draft.acquired_date;
        self.manufactured_date = draft.manufactured_date;
        self.description = draft.description;
    }

    /// Returns the editable fields as a draft, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            title: self.title.clone(),
            category: self.category.clone(),
            acquired_date: self.acquired_date,
            manufactured_date: self.manufactured_date,
            description: self.description.clone(),
        }
    }
}

/// Caller-supplied fields of a new or edited item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub category: String,
    pub acquired_date: NaiveDate,
    pub manufactured_date: NaiveDate,
    pub description: String,
}

impl ItemDraft {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        acquired_date: NaiveDate,
        manufactured_date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            acquired_date,
            manufactured_date,
            description: description.into(),
        }
    }

    /// Checks form-level rules against `today`.
    ///
    /// Collects every failing rule instead of stopping at the first one, so
    /// callers can show a single combined message.
    ///
    /// # Errors
    /// - Title or description empty after trimming.
    /// - Manufacture date later than acquisition date.
    /// - Either date later than `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ItemValidationError> {
        let mut issues = Vec::new();
        if self.title.trim().is_empty() {
            issues.push(ItemFieldIssue::MissingTitle);
        }
        if self.description.trim().is_empty() {
            issues.push(ItemFieldIssue::MissingDescription);
        }
        if self.manufactured_date > self.acquired_date {
            issues.push(ItemFieldIssue::ManufacturedAfterAcquired);
        }
        if self.acquired_date > today {
            issues.push(ItemFieldIssue::AcquiredInFuture);
        }
        if self.manufactured_date > today {
            issues.push(ItemFieldIssue::ManufacturedInFuture);
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ItemValidationError { issues })
        }
    }
}

/// One failed form rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFieldIssue {
    MissingTitle,
    MissingDescription,
    ManufacturedAfterAcquired,
    AcquiredInFuture,
    ManufacturedInFuture,
}

impl Display for ItemFieldIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Item title is missing."),
            Self::MissingDescription => write!(f, "Item description is missing."),
            Self::ManufacturedAfterAcquired => write!(
                f,
                "Date of Manufacture must not be after Date Added to Collection."
            ),
            Self::AcquiredInFuture => write!(f, "Date Added to Collection is in the future."),
            Self::ManufacturedInFuture => write!(f, "Date of Manufacture is in the future."),
        }
    }
}

/// Every rule an `ItemDraft` failed, in check order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemValidationError {
    pub issues: Vec<ItemFieldIssue>,
}

impl ItemValidationError {
    pub fn contains(&self, issue: ItemFieldIssue) -> bool {
        self.issues.contains(&issue)
    }
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, issue) in self.issues.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl Error for ItemValidationError {}

#[cfg(test)]
mod tests {
    use super::{Item, ItemDraft, ItemFieldIssue};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stamp() -> ItemDraft {
        ItemDraft::new(
            "Stamp",
            "Stamps",
            date(2020, 1, 1),
            date(2019, 1, 1),
            "Rare stamp",
        )
    }

    #[test]
    fn valid_draft_passes() {
        assert!(stamp().validate(date(2024, 1, 1)).is_ok());
    }

    #[test]
    fn validate_collects_every_issue() {
        let draft = ItemDraft::new("  ", "Stamps", date(2020, 1, 1), date(2021, 1, 1), "");
        let err = draft.validate(date(2020, 6, 1)).unwrap_err();

        assert!(err.contains(ItemFieldIssue::MissingTitle));
        assert!(err.contains(ItemFieldIssue::MissingDescription));
        assert!(err.contains(ItemFieldIssue::ManufacturedAfterAcquired));
        assert!(err.contains(ItemFieldIssue::ManufacturedInFuture));
        assert!(!err.contains(ItemFieldIssue::AcquiredInFuture));
        assert_eq!(err.to_string().lines().count(), 4);
    }

    #[test]
    fn same_day_manufacture_and_acquisition_is_allowed() {
        let draft = ItemDraft::new("Coin", "Coins", date(2021, 6, 1), date(2021, 6, 1), "Old");
        assert!(draft.validate(date(2021, 6, 1)).is_ok());
    }

    #[test]
    fn apply_keeps_id() {
        let mut item = Item::from_draft(7, stamp());
        let mut draft = item.to_draft();
        draft.title = "Blue stamp".to_string();
        item.apply(draft);

        assert_eq!(item.id(), 7);
        assert_eq!(item.title, "Blue stamp");
        assert_eq!(item.category, "Stamps");
    }
}
