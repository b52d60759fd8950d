use heapless::String as HeaplessString;
use people_admin_api::{ApiError, CarForm, CarView};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::utils::{bounded_string, utf8_capacity};

pub const CAR_NAME_MAX_CHARS: usize = 20;

/// Database model for Car, ordered by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarModel {
    pub id: Uuid,
    pub name: HeaplessString<{ utf8_capacity(CAR_NAME_MAX_CHARS) }>,
}

impl CarModel {
    pub fn from_form(id: Uuid, form: &CarForm) -> Result<Self, ApiError> {
        Ok(CarModel {
            id,
            name: bounded_string("name", &form.name, CAR_NAME_MAX_CHARS)?,
        })
    }
}

impl std::fmt::Display for CarModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Identifiable for CarModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl From<&CarModel> for CarView {
    fn from(car: &CarModel) -> Self {
        CarView {
            id: car.id,
            name: car.name.to_string(),
        }
    }
}
