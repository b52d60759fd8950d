use heapless::String as HeaplessString;
use people_admin_db::models::car::CarModel;
use uuid::Uuid;

pub fn create_test_car(name: &str) -> CarModel {
    CarModel {
        id: Uuid::new_v4(),
        name: HeaplessString::try_from(name).unwrap(),
    }
}
