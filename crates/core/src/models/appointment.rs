use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length assumed for a stored appointment that carries no explicit end.
pub const DEFAULT_APPOINTMENT_MINUTES: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    Pending,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 5] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Pending,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no-show",
        }
    }

    /// Display style used by the grid for this status.
    pub fn style(&self) -> StatusStyle {
        match self {
            AppointmentStatus::Scheduled => StatusStyle {
                label: "Scheduled",
                color: "#3b82f6",
            },
            AppointmentStatus::Pending => StatusStyle {
                label: "Pending",
                color: "#f59e0b",
            },
            AppointmentStatus::Completed => StatusStyle {
                label: "Completed",
                color: "#22c55e",
            },
            AppointmentStatus::Cancelled => StatusStyle {
                label: "Cancelled",
                color: "#ef4444",
            },
            AppointmentStatus::NoShow => StatusStyle {
                label: "No-show",
                color: "#6b7280",
            },
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown appointment status '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    pub label: &'static str,
    pub color: &'static str,
}

/// Style for blocked-time entries, which have no status.
pub const BLOCKED_TIME_STYLE: StatusStyle = StatusStyle {
    label: "Blocked",
    color: "#9ca3af",
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub technician_id: Uuid,
    pub appointment_start: NaiveDateTime,
    pub appointment_end: NaiveDateTime,
    pub status: AppointmentStatus,
    pub client_name: String,
    pub service_name: String,
    pub phone_number: Option<String>,
    pub order_number: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}
