use heapless::String as HeaplessString;
use people_admin_db::models::house::HouseModel;
use uuid::Uuid;

pub fn create_test_house(person_id: Uuid, house_no: i32) -> HouseModel {
    HouseModel {
        id: Uuid::new_v4(),
        person_id,
        house_no,
        landmark: HeaplessString::try_from("Near the market").unwrap(),
        address: HeaplessString::try_from("12 Unity Road, Lagos").unwrap(),
    }
}
