use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::car::CarView;
use super::gender::Gender;
use super::house::HouseView;

/// Create/edit form for a person
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PersonForm {
    #[validate(length(min = 1, max = 20, message = "must be 1 to 20 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 20, message = "must be 1 to 20 characters"))]
    pub last_name: String,
    pub age: i32,
    pub gender: Gender,
    #[serde(default)]
    pub cars: Vec<Uuid>,
}

/// A row of the person list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonListRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub gender: Gender,
    pub full_name: String,
}

/// Person edit view with its computed relations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDetail {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub gender: Gender,
    pub cars: Vec<Uuid>,
    pub has_passport: bool,
    pub owned_cars: Vec<CarView>,
    pub owned_houses: Vec<HouseView>,
}

/// Inline edit submitted from the person list; only gender is editable there
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenderEdit {
    pub id: Uuid,
    pub gender: Gender,
}

/// Outcome of an inline list edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineEditResult {
    pub updated: usize,
}

/// Query string of the person list view
///
/// `gender` stays a raw code so that an unrecognized value filters
/// everything out instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonListQuery {
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub q: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}
