use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A window in which a technician cannot take appointments.
///
/// Recurring blocks repeat daily from the date of `start_time` onwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedTime {
    pub id: Uuid,
    pub technician_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub reason: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
}
