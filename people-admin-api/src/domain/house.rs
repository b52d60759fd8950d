use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HouseForm {
    pub person_id: Uuid,
    pub house_no: i32,
    #[validate(length(min = 1, max = 60, message = "must be 1 to 60 characters"))]
    pub landmark: String,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseView {
    pub id: Uuid,
    /// Display string of the owning person
    pub person: String,
    pub person_id: Uuid,
    pub house_no: i32,
    pub landmark: String,
    pub address: String,
}
