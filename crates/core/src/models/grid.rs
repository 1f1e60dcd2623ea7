use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which technicians a render pass covers.
///
/// On the wire this is either the string `"all"` or a technician UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TechnicianScope {
    #[default]
    All,
    Technician(Uuid),
}

impl TechnicianScope {
    pub fn includes(&self, technician_id: Uuid) -> bool {
        match self {
            TechnicianScope::All => true,
            TechnicianScope::Technician(id) => *id == technician_id,
        }
    }
}

impl fmt::Display for TechnicianScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TechnicianScope::All => f.write_str("all"),
            TechnicianScope::Technician(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for TechnicianScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(TechnicianScope::All);
        }
        Uuid::parse_str(s)
            .map(TechnicianScope::Technician)
            .map_err(|_| format!("technician scope must be 'all' or a UUID, got '{}'", s))
    }
}

impl TryFrom<String> for TechnicianScope {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TechnicianScope> for String {
    fn from(scope: TechnicianScope) -> Self {
        scope.to_string()
    }
}

/// Selection state a render pass is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridFilters {
    pub selected_date: NaiveDate,
    #[serde(default)]
    pub technician_scope: TechnicianScope,
    #[serde(default)]
    pub hide_blocked_times: bool,
}

impl GridFilters {
    /// Filters for the whole salon on `date`, blocked times visible.
    pub fn for_date(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            technician_scope: TechnicianScope::All,
            hide_blocked_times: false,
        }
    }
}

/// Shape of the day axis: first hour, last hour (both inclusive) and slot length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub start_hour: u32,
    pub end_hour: u32,
    pub interval_minutes: u32,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 20,
            interval_minutes: 10,
        }
    }
}
