use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::models::passport::PassportModel;
use crate::rules::expiry::{extend_expiry, shorten_expiry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    Increase,
    Decrease,
}

impl ShiftDirection {
    pub fn apply(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            ShiftDirection::Increase => extend_expiry(date),
            ShiftDirection::Decrease => shorten_expiry(date),
        }
    }
}

/// How a bulk expiry shift derives the new dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryShiftMode {
    /// Shift the first selected record's expiry and write that one date to
    /// every selected record
    #[default]
    UniformFromFirst,
    /// Shift each record from its own expiry
    PerRecord,
}

impl FromStr for ExpiryShiftMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform_from_first" => Ok(ExpiryShiftMode::UniformFromFirst),
            "per_record" => Ok(ExpiryShiftMode::PerRecord),
            _ => Err(format!(
                "Invalid expiry shift mode: {s} (expected uniform_from_first or per_record)"
            )),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BulkShiftError {
    #[error("No passports selected")]
    EmptySelection,

    #[error("Shifted expiry date of passport {0} is out of range")]
    DateOutOfRange(Uuid),
}

/// Computes the new expiry of every selected passport.
///
/// `selection` must already be in the passport list's default ordering;
/// its first element is the "first record" of the uniform mode.
pub fn plan_expiry_shift(
    selection: &[PassportModel],
    direction: ShiftDirection,
    mode: ExpiryShiftMode,
) -> Result<Vec<(Uuid, NaiveDate)>, BulkShiftError> {
    let first = selection.first().ok_or(BulkShiftError::EmptySelection)?;

    match mode {
        ExpiryShiftMode::UniformFromFirst => {
            let new_date = direction
                .apply(first.expire_date)
                .ok_or(BulkShiftError::DateOutOfRange(first.id))?;
            Ok(selection.iter().map(|p| (p.id, new_date)).collect())
        }
        ExpiryShiftMode::PerRecord => selection
            .iter()
            .map(|p| {
                direction
                    .apply(p.expire_date)
                    .map(|d| (p.id, d))
                    .ok_or(BulkShiftError::DateOutOfRange(p.id))
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String as HeaplessString;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn passport(passport_id: &str, expire_date: NaiveDate) -> PassportModel {
        PassportModel {
            id: Uuid::new_v4(),
            person_id: Uuid::new_v4(),
            passport_id: HeaplessString::from_str(passport_id).unwrap(),
            issue_date: date(2020, 1, 1),
            expire_date,
            country: HeaplessString::from_str("Ghana").unwrap(),
        }
    }

    #[test]
    fn test_uniform_increase_uses_first_record_for_all() {
        let p1 = passport("A0000001", date(2024, 1, 1));
        let p2 = passport("A0000002", date(2030, 6, 1));
        let plan = plan_expiry_shift(
            &[p1.clone(), p2.clone()],
            ShiftDirection::Increase,
            ExpiryShiftMode::UniformFromFirst,
        )
        .unwrap();

        assert_eq!(plan, vec![(p1.id, date(2028, 12, 30)), (p2.id, date(2028, 12, 30))]);
    }

    #[test]
    fn test_uniform_decrease_is_inverse_of_increase() {
        let p1 = passport("A0000001", date(2028, 12, 30));
        let p2 = passport("A0000002", date(2019, 3, 3));
        let plan = plan_expiry_shift(
            &[p1.clone(), p2.clone()],
            ShiftDirection::Decrease,
            ExpiryShiftMode::UniformFromFirst,
        )
        .unwrap();

        assert_eq!(plan, vec![(p1.id, date(2024, 1, 1)), (p2.id, date(2024, 1, 1))]);
    }

    #[test]
    fn test_per_record_shifts_independently() {
        let p1 = passport("A0000001", date(2024, 1, 1));
        let p2 = passport("A0000002", date(2025, 1, 1));
        let plan = plan_expiry_shift(
            &[p1.clone(), p2.clone()],
            ShiftDirection::Increase,
            ExpiryShiftMode::PerRecord,
        )
        .unwrap();

        assert_eq!(plan[0], (p1.id, date(2028, 12, 30)));
        assert_eq!(plan[1], (p2.id, date(2029, 12, 31)));
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        for mode in [ExpiryShiftMode::UniformFromFirst, ExpiryShiftMode::PerRecord] {
            assert_eq!(
                plan_expiry_shift(&[], ShiftDirection::Increase, mode),
                Err(BulkShiftError::EmptySelection)
            );
        }
    }

    #[test]
    fn test_out_of_range_reports_offending_record() {
        let ok = passport("A0000001", date(2024, 1, 1));
        let edge = passport("A0000002", NaiveDate::MAX);
        let err = plan_expiry_shift(
            &[ok, edge.clone()],
            ShiftDirection::Increase,
            ExpiryShiftMode::PerRecord,
        )
        .unwrap_err();
        assert_eq!(err, BulkShiftError::DateOutOfRange(edge.id));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("per_record".parse(), Ok(ExpiryShiftMode::PerRecord));
        assert_eq!(ExpiryShiftMode::default(), ExpiryShiftMode::UniformFromFirst);
        assert!("first".parse::<ExpiryShiftMode>().is_err());
    }
}
