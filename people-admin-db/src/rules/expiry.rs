use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::passport::PassportModel;

/// Length of a passport validity grant (five years of 365 days)
pub const EXPIRY_EXTENSION_DAYS: u64 = 1825;

/// Moves an expiry date forward by one grant. `None` past the calendar range.
pub fn extend_expiry(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(EXPIRY_EXTENSION_DAYS))
}

/// Moves an expiry date back by one grant. `None` past the calendar range.
pub fn shorten_expiry(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(EXPIRY_EXTENSION_DAYS))
}

/// Which kind of write just completed on a passport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveEvent {
    Created,
    Updated,
}

/// When the expiry extension hook fires
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryExtensionTrigger {
    /// Only after the passport is first inserted
    #[default]
    OnCreate,
    /// After the insert and after every later update
    EverySave,
}

impl ExpiryExtensionTrigger {
    pub fn fires_on(&self, event: SaveEvent) -> bool {
        match self {
            ExpiryExtensionTrigger::OnCreate => event == SaveEvent::Created,
            ExpiryExtensionTrigger::EverySave => true,
        }
    }
}

impl FromStr for ExpiryExtensionTrigger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on_create" => Ok(ExpiryExtensionTrigger::OnCreate),
            "every_save" => Ok(ExpiryExtensionTrigger::EverySave),
            _ => Err(format!(
                "Invalid expiry extension trigger: {s} (expected on_create or every_save)"
            )),
        }
    }
}

/// Step run by the passport repository right after a successful write,
/// inside the same transaction.
///
/// Returns the expiry date to persist, or `None` to leave the record as written.
pub trait PassportLifecycleHook: Send + Sync {
    fn after_save(&self, passport: &PassportModel, event: SaveEvent) -> Option<NaiveDate>;
}

/// Grants five more years of validity after a passport is saved
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpiryExtensionHook {
    trigger: ExpiryExtensionTrigger,
}

impl ExpiryExtensionHook {
    pub fn new(trigger: ExpiryExtensionTrigger) -> Self {
        Self { trigger }
    }

    pub fn trigger(&self) -> ExpiryExtensionTrigger {
        self.trigger
    }
}

impl PassportLifecycleHook for ExpiryExtensionHook {
    fn after_save(&self, passport: &PassportModel, event: SaveEvent) -> Option<NaiveDate> {
        if !self.trigger.fires_on(event) {
            return None;
        }
        extend_expiry(passport.expire_date)
    }
}

/// Leaves saved passports untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLifecycleHook;

impl PassportLifecycleHook for NoopLifecycleHook {
    fn after_save(&self, _passport: &PassportModel, _event: SaveEvent) -> Option<NaiveDate> {
        None
    }
}
