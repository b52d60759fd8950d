use heapless::String as HeaplessString;
use people_admin_api::{ApiError, HouseForm, HouseView};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::utils::{bounded_string, utf8_capacity};

pub const LANDMARK_MAX_CHARS: usize = 60;
pub const ADDRESS_MAX_CHARS: usize = 100;

/// Database model for House
///
/// Owned by exactly one person and removed with it. Default ordering is
/// house number, then landmark, then address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseModel {
    pub id: Uuid,
    /// References PersonModel.id
    pub person_id: Uuid,
    pub house_no: i32,
    pub landmark: HeaplessString<{ utf8_capacity(LANDMARK_MAX_CHARS) }>,
    pub address: HeaplessString<{ utf8_capacity(ADDRESS_MAX_CHARS) }>,
}

impl HouseModel {
    pub fn from_form(id: Uuid, form: &HouseForm) -> Result<Self, ApiError> {
        Ok(HouseModel {
            id,
            person_id: form.person_id,
            house_no: form.house_no,
            landmark: bounded_string("landmark", &form.landmark, LANDMARK_MAX_CHARS)?,
            address: bounded_string("address", &form.address, ADDRESS_MAX_CHARS)?,
        })
    }

    pub fn to_view(&self, person: &str) -> HouseView {
        HouseView {
            id: self.id,
            person: person.to_string(),
            person_id: self.person_id,
            house_no: self.house_no,
            landmark: self.landmark.to_string(),
            address: self.address.to_string(),
        }
    }
}

impl Identifiable for HouseModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
