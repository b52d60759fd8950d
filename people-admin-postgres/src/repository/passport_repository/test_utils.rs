use chrono::NaiveDate;
use heapless::String as HeaplessString;
use people_admin_db::models::passport::PassportModel;
use uuid::Uuid;

pub fn create_test_passport(person_id: Uuid, passport_id: &str) -> PassportModel {
    create_test_passport_expiring(
        person_id,
        passport_id,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
}

pub fn create_test_passport_expiring(
    person_id: Uuid,
    passport_id: &str,
    expire_date: NaiveDate,
) -> PassportModel {
    PassportModel {
        id: Uuid::new_v4(),
        person_id,
        passport_id: HeaplessString::try_from(passport_id).unwrap(),
        issue_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        expire_date,
        country: HeaplessString::try_from("Nigeria").unwrap(),
    }
}
