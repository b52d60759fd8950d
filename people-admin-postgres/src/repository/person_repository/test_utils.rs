use heapless::String as HeaplessString;
use people_admin_api::Gender;
use people_admin_db::models::person::PersonModel;
use uuid::Uuid;

pub fn create_test_person(first_name: &str, gender: Gender) -> PersonModel {
    PersonModel {
        id: Uuid::new_v4(),
        first_name: HeaplessString::try_from(first_name).unwrap(),
        last_name: HeaplessString::try_from("Tester").unwrap(),
        age: 30,
        gender,
    }
}
