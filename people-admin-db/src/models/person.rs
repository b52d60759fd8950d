use heapless::String as HeaplessString;
use people_admin_api::{full_name, ApiError, Gender, PersonForm, PersonListRow};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::utils::{bounded_string, utf8_capacity};

/// Column length of `first_name` and `last_name`, in characters
pub const NAME_MAX_CHARS: usize = 20;

/// Database model for Person
///
/// Default ordering is by first name. Cars are linked through `person_car`
/// and are not carried on the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonModel {
    pub id: Uuid,
    pub first_name: HeaplessString<{ utf8_capacity(NAME_MAX_CHARS) }>,
    pub last_name: HeaplessString<{ utf8_capacity(NAME_MAX_CHARS) }>,
    pub age: i32,
    pub gender: Gender,
}

impl PersonModel {
    /// Build the record behind a submitted person form. Car assignments
    /// are stored separately.
    pub fn from_form(id: Uuid, form: &PersonForm) -> Result<Self, ApiError> {
        Ok(PersonModel {
            id,
            first_name: bounded_string("first_name", &form.first_name, NAME_MAX_CHARS)?,
            last_name: bounded_string("last_name", &form.last_name, NAME_MAX_CHARS)?,
            age: form.age,
            gender: form.gender,
        })
    }

    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }
}

impl std::fmt::Display for PersonModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first_name)
    }
}

impl Identifiable for PersonModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl From<&PersonModel> for PersonListRow {
    fn from(person: &PersonModel) -> Self {
        PersonListRow {
            id: person.id,
            first_name: person.first_name.to_string(),
            last_name: person.last_name.to_string(),
            age: person.age,
            gender: person.gender,
            full_name: person.full_name(),
        }
    }
}

/// Filter applied to the person list view
///
/// `gender` and `age` are exact matches; `first_name_contains` is a
/// case-insensitive substring search on the first name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFilter {
    pub gender: Option<Gender>,
    pub age: Option<i32>,
    pub first_name_contains: Option<String>,
}

impl PersonFilter {
    pub fn male() -> Self {
        Self::by_gender(Gender::Male)
    }

    pub fn female() -> Self {
        Self::by_gender(Gender::Female)
    }

    pub fn other() -> Self {
        Self::by_gender(Gender::Other)
    }

    pub fn by_gender(gender: Gender) -> Self {
        Self {
            gender: Some(gender),
            ..Self::default()
        }
    }

    /// Builds a gender filter from a raw code; `None` when the code is not one of `M`, `F`, `O`.
    pub fn by_gender_code(code: &str) -> Option<Self> {
        code.parse::<Gender>().ok().map(Self::by_gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn ada() -> PersonModel {
        PersonModel {
            id: Uuid::new_v4(),
            first_name: HeaplessString::from_str("Ada").unwrap(),
            last_name: HeaplessString::from_str("L.").unwrap(),
            age: 30,
            gender: Gender::Female,
        }
    }

    #[test]
    fn test_display_is_first_name() {
        assert_eq!(ada().to_string(), "Ada");
    }

    #[test]
    fn test_list_row_carries_full_name() {
        let person = ada();
        let row = PersonListRow::from(&person);
        assert_eq!(row.full_name, "Ada L.");
        assert_eq!(row.gender, Gender::Female);
        assert_eq!(row.id, person.id);
    }

    #[test]
    fn test_named_gender_filters() {
        assert_eq!(PersonFilter::male().gender, Some(Gender::Male));
        assert_eq!(PersonFilter::female().gender, Some(Gender::Female));
        assert_eq!(PersonFilter::other().gender, Some(Gender::Other));
        assert_eq!(PersonFilter::other().age, None);
    }

    #[test]
    fn test_from_form_keeps_fields() {
        let form = PersonForm {
            first_name: "Ada".to_string(),
            last_name: "L.".to_string(),
            age: 30,
            gender: Gender::Female,
            cars: vec![Uuid::new_v4()],
        };
        let id = Uuid::new_v4();
        let person = PersonModel::from_form(id, &form).unwrap();
        assert_eq!(person, PersonModel { id, ..ada() });
    }

    #[test]
    fn test_from_form_accepts_multibyte_name_within_limit() {
        let form = PersonForm {
            first_name: "Éléonore-Bénédicte".to_string(),
            last_name: "é".repeat(NAME_MAX_CHARS),
            age: 30,
            gender: Gender::Other,
            cars: vec![],
        };
        let person = PersonModel::from_form(Uuid::new_v4(), &form).unwrap();
        assert_eq!(person.first_name.as_str(), "Éléonore-Bénédicte");
        assert_eq!(person.last_name.chars().count(), NAME_MAX_CHARS);
    }

    #[test]
    fn test_from_form_rejects_name_over_limit() {
        let form = PersonForm {
            first_name: "é".repeat(NAME_MAX_CHARS + 1),
            last_name: "L.".to_string(),
            age: 30,
            gender: Gender::Other,
            cars: vec![],
        };
        assert!(matches!(
            PersonModel::from_form(Uuid::new_v4(), &form),
            Err(ApiError::ValidationError(_))
        ));
    }

    #[test]
    fn test_unrecognized_gender_code_builds_no_filter() {
        assert_eq!(PersonFilter::by_gender_code("F"), Some(PersonFilter::female()));
        assert_eq!(PersonFilter::by_gender_code("Q"), None);
    }
}
