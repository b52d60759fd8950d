use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Create/edit form for a passport. The issue date is not part of the form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PassportForm {
    pub person_id: Uuid,
    #[validate(length(min = 1, max = 8, message = "must be 1 to 8 characters"))]
    pub passport_id: String,
    #[validate(length(min = 1, max = 50, message = "must be 1 to 50 characters"))]
    pub country: String,
    /// Defaults to the current date when omitted on create
    pub expire_date: Option<NaiveDate>,
}

/// A row of the passport list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportListRow {
    pub id: Uuid,
    /// Display string of the owning person
    pub person: String,
    pub person_id: Uuid,
    pub passport_id: String,
    pub country: String,
    pub issue_date: NaiveDate,
    pub expire_date: NaiveDate,
}

/// Records selected in the passport list for a bulk action
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkSelection {
    #[validate(length(min = 1, message = "select at least one record"))]
    pub ids: Vec<Uuid>,
}

/// Bulk actions offered on the passport list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassportAction {
    IncreaseExpiryDate,
    DecreaseExpiryDate,
}

impl PassportAction {
    pub const ALL: [PassportAction; 2] = [
        PassportAction::IncreaseExpiryDate,
        PassportAction::DecreaseExpiryDate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PassportAction::IncreaseExpiryDate => "increase_expiry_date",
            PassportAction::DecreaseExpiryDate => "decrease_expiry_date",
        }
    }

    /// Label shown in the action dropdown
    pub fn short_description(&self) -> &'static str {
        match self {
            PassportAction::IncreaseExpiryDate => "Increase expire date by 5 year",
            PassportAction::DecreaseExpiryDate => "Decrease expire date by 5 year",
        }
    }
}

impl FromStr for PassportAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increase_expiry_date" => Ok(PassportAction::IncreaseExpiryDate),
            "decrease_expiry_date" => Ok(PassportAction::DecreaseExpiryDate),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub name: String,
    pub description: String,
}

impl From<PassportAction> for ActionDescriptor {
    fn from(action: PassportAction) -> Self {
        ActionDescriptor {
            name: action.name().to_string(),
            description: action.short_description().to_string(),
        }
    }
}

/// Outcome of a bulk action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkActionResult {
    pub action: PassportAction,
    pub updated: usize,
    pub passports: Vec<PassportListRow>,
}
