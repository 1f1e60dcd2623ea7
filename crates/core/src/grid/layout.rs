//! Column layout composition.
//!
//! Combines the filtered appointments and blocked times of one technician with
//! their slot positions. Entities sharing a position are all emitted; stacking
//! them is left to the presentation layer.

use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use super::{
    filter::{select_appointments, select_blocked_times, GridEntity},
    offset::{map_interval, SlotSpan},
};
use crate::{
    errors::GridError,
    models::{
        appointment::{Appointment, StatusStyle, BLOCKED_TIME_STYLE},
        blocked_time::BlockedTime,
        grid::{AxisConfig, GridFilters, TechnicianScope},
        technician::Technician,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Appointment,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LayoutEntity<'a> {
    Appointment(&'a Appointment),
    Blocked(&'a BlockedTime),
}

impl LayoutEntity<'_> {
    pub fn kind(&self) -> EntryKind {
        match self {
            LayoutEntity::Appointment(_) => EntryKind::Appointment,
            LayoutEntity::Blocked(_) => EntryKind::Blocked,
        }
    }

    pub fn style(&self) -> StatusStyle {
        match self {
            LayoutEntity::Appointment(appointment) => appointment.status.style(),
            LayoutEntity::Blocked(_) => BLOCKED_TIME_STYLE,
        }
    }

    fn as_entity(&self) -> &dyn GridEntity {
        match self {
            LayoutEntity::Appointment(appointment) => *appointment as &dyn GridEntity,
            LayoutEntity::Blocked(blocked) => *blocked as &dyn GridEntity,
        }
    }

    pub fn id(&self) -> Uuid {
        self.as_entity().id()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutEntry<'a> {
    pub kind: EntryKind,
    pub entity: LayoutEntity<'a>,
    #[serde(flatten)]
    pub span: SlotSpan,
}

/// An entity left out of a column because its interval could not be placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedEntry {
    pub kind: EntryKind,
    pub id: Uuid,
    pub reason: String,
    #[serde(skip)]
    pub error: GridError,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLayout<'a> {
    pub technician_id: Uuid,
    pub entries: Vec<LayoutEntry<'a>>,
    pub skipped: Vec<SkippedEntry>,
}

impl ColumnLayout<'_> {
    fn empty(technician_id: Uuid) -> Self {
        Self {
            technician_id,
            entries: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianColumn<'a> {
    pub technician: &'a Technician,
    pub color: &'a str,
    #[serde(flatten)]
    pub layout: ColumnLayout<'a>,
}

/// Lays out one technician's column for the selected date.
///
/// Appointments come first, then blocked times, each in input order. A scope
/// naming another technician gives an empty column. Entities whose interval
/// cannot be mapped are reported in [`ColumnLayout::skipped`] and the rest of
/// the column is still produced.
///
/// # Errors
///
/// [`GridError::InvalidConfiguration`] when `config` is not a valid axis.
pub fn layout_column<'a>(
    technician_id: Uuid,
    appointments: &'a [Appointment],
    blocked_times: &'a [BlockedTime],
    filters: &GridFilters,
    config: &AxisConfig,
) -> Result<ColumnLayout<'a>, GridError> {
    config.validate()?;

    let mut column = ColumnLayout::empty(technician_id);
    if !filters.technician_scope.includes(technician_id) {
        return Ok(column);
    }

    let date = filters.selected_date;
    let day_start = config.day_start(date);
    let scope = TechnicianScope::Technician(technician_id);

    let appointments = select_appointments(appointments, date, scope)
        .into_iter()
        .map(LayoutEntity::Appointment);
    let blocked = select_blocked_times(blocked_times, date, scope, filters.hide_blocked_times)
        .into_iter()
        .map(LayoutEntity::Blocked);

    for entity in appointments.chain(blocked) {
        let source = entity.as_entity();
        match map_interval(
            source.starts_at(),
            source.ends_at(),
            day_start,
            config.interval_minutes,
        ) {
            Ok(span) => column.entries.push(LayoutEntry {
                kind: entity.kind(),
                entity,
                span,
            }),
            Err(error) => {
                warn!(
                    entity_id = %source.id(),
                    technician_id = %technician_id,
                    error = %error,
                    "Skipping grid entity with invalid interval"
                );
                column.skipped.push(SkippedEntry {
                    kind: entity.kind(),
                    id: source.id(),
                    reason: error.to_string(),
                    error,
                });
            }
        }
    }

    Ok(column)
}

/// Lays out one column per technician in scope, keeping technician order.
///
/// Fallback colours are picked by the technician's position in `technicians`,
/// so a technician keeps its colour when the scope narrows.
pub fn layout_grid<'a>(
    technicians: &'a [Technician],
    appointments: &'a [Appointment],
    blocked_times: &'a [BlockedTime],
    filters: &GridFilters,
    config: &AxisConfig,
) -> Result<Vec<TechnicianColumn<'a>>, GridError> {
    config.validate()?;

    technicians
        .iter()
        .enumerate()
        .filter(|(_, technician)| filters.technician_scope.includes(technician.id))
        .map(|(index, technician)| -> Result<TechnicianColumn<'a>, GridError> {
            let layout =
                layout_column(technician.id, appointments, blocked_times, filters, config)?;
            Ok(TechnicianColumn {
                technician,
                color: technician.display_color(index),
                layout,
            })
        })
        .collect()
}
