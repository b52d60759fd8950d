use chrono::NaiveDate;
use heapless::String as HeaplessString;
use people_admin_api::{ApiError, PassportForm, PassportListRow};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::utils::{bounded_string, utf8_capacity};

/// Column lengths, in characters
pub const PASSPORT_ID_MAX_CHARS: usize = 8;
pub const COUNTRY_MAX_CHARS: usize = 50;

/// Database model for Passport
///
/// At most one passport exists per person (`person_id` is unique) and it is
/// removed with its person. Default ordering is by `passport_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportModel {
    pub id: Uuid,
    /// References PersonModel.id
    pub person_id: Uuid,
    pub passport_id: HeaplessString<{ utf8_capacity(PASSPORT_ID_MAX_CHARS) }>,
    pub issue_date: NaiveDate,
    pub expire_date: NaiveDate,
    pub country: HeaplessString<{ utf8_capacity(COUNTRY_MAX_CHARS) }>,
}

impl PassportModel {
    /// Build the record behind a submitted passport form.
    ///
    /// The form never carries the issue date; `expire_date` falls back to
    /// `default_expiry` when the form leaves it out.
    pub fn from_form(
        id: Uuid,
        form: &PassportForm,
        issue_date: NaiveDate,
        default_expiry: NaiveDate,
    ) -> Result<Self, ApiError> {
        Ok(PassportModel {
            id,
            person_id: form.person_id,
            passport_id: bounded_string("passport_id", &form.passport_id, PASSPORT_ID_MAX_CHARS)?,
            issue_date,
            expire_date: form.expire_date.unwrap_or(default_expiry),
            country: bounded_string("country", &form.country, COUNTRY_MAX_CHARS)?,
        })
    }

    /// List row, with `person` being the owner's display string
    pub fn to_list_row(&self, person: &str) -> PassportListRow {
        PassportListRow {
            id: self.id,
            person: person.to_string(),
            person_id: self.person_id,
            passport_id: self.passport_id.to_string(),
            country: self.country.to_string(),
            issue_date: self.issue_date,
            expire_date: self.expire_date,
        }
    }
}

impl Identifiable for PassportModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(expire_date: Option<NaiveDate>) -> PassportForm {
        PassportForm {
            person_id: Uuid::new_v4(),
            passport_id: "A1234567".to_string(),
            country: "Kenya".to_string(),
            expire_date,
        }
    }

    #[test]
    fn test_from_form_defaults_expiry() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let passport = PassportModel::from_form(Uuid::new_v4(), &form(None), today, today).unwrap();
        assert_eq!(passport.issue_date, today);
        assert_eq!(passport.expire_date, today);

        let given = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let passport =
            PassportModel::from_form(Uuid::new_v4(), &form(Some(given)), today, today).unwrap();
        assert_eq!(passport.expire_date, given);
    }

    #[test]
    fn test_list_row_uses_owner_display() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let passport = PassportModel::from_form(Uuid::new_v4(), &form(None), today, today).unwrap();
        let row = passport.to_list_row("Ada");
        assert_eq!(row.person, "Ada");
        assert_eq!(row.passport_id, "A1234567");
        assert_eq!(row.person_id, passport.person_id);
    }
}
