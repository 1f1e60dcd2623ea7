use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;

use chairside_core::{
    errors::GridError,
    grid::{
        generate_time_axis, layout_column, layout_grid, map_interval, select_appointments,
        select_blocked_times, slot_offset_to_time, EntryKind, LayoutEntity, SlotSpan,
    },
    models::{
        appointment::{Appointment, AppointmentStatus},
        blocked_time::BlockedTime,
        grid::{AxisConfig, GridFilters, TechnicianScope},
        technician::Technician,
    },
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
}

fn appointment(technician_id: Uuid, start: &str, end: &str) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        technician_id,
        appointment_start: dt(start),
        appointment_end: dt(end),
        status: AppointmentStatus::Scheduled,
        client_name: "Client".to_string(),
        service_name: "Haircut".to_string(),
        phone_number: None,
        order_number: None,
        is_favorite: false,
    }
}

fn blocked(technician_id: Uuid, start: &str, end: &str) -> BlockedTime {
    BlockedTime {
        id: Uuid::new_v4(),
        technician_id,
        start_time: dt(start),
        end_time: dt(end),
        reason: Some("Break".to_string()),
        is_recurring: false,
    }
}

fn technician(name: &str) -> Technician {
    Technician {
        id: Uuid::new_v4(),
        name: name.to_string(),
        avatar_url: None,
        color: None,
    }
}

fn axis_config(start_hour: u32, end_hour: u32, interval_minutes: u32) -> AxisConfig {
    AxisConfig {
        start_hour,
        end_hour,
        interval_minutes,
    }
}

// Time axis

#[test]
fn test_default_axis_has_73_slots() {
    let axis = generate_time_axis(date("2024-01-01"), &AxisConfig::default()).unwrap();
    let slots: Vec<_> = axis.iter().collect();

    assert_eq!(slots.len(), 73);
    assert_eq!(slots[0].to_string(), "08:00");
    assert_eq!(slots[72].to_string(), "20:00");
    assert_eq!(slots[0].starts_at(), dt("2024-01-01T08:00"));
    assert_eq!(slots[72].starts_at(), dt("2024-01-01T20:00"));
}

#[rstest]
#[case(8, 20, 10)]
#[case(8, 20, 5)]
#[case(9, 18, 30)]
#[case(0, 23, 60)]
#[case(12, 12, 15)]
#[case(6, 22, 1)]
fn test_axis_shape(#[case] start_hour: u32, #[case] end_hour: u32, #[case] interval: u32) {
    let config = axis_config(start_hour, end_hour, interval);
    let axis = generate_time_axis(date("2024-03-15"), &config).unwrap();
    let slots: Vec<_> = axis.iter().collect();

    let expected = ((end_hour - start_hour) * 60 / interval) as usize + 1;
    assert_eq!(slots.len(), expected);
    assert_eq!(axis.len(), expected);
    assert_eq!(axis.iter().len(), expected);

    let first = slots.first().unwrap();
    let last = slots.last().unwrap();
    assert_eq!((first.hour, first.minute), (start_hour, 0));
    assert_eq!((last.hour, last.minute), (end_hour, 0));
    assert!(slots.windows(2).all(|pair| pair[0].starts_at() < pair[1].starts_at()));
    assert!(slots.iter().all(|slot| slot.date == date("2024-03-15")));
}

#[rstest]
#[case(8, 20, 7)]
#[case(8, 20, 0)]
#[case(8, 20, 45)]
#[case(8, 20, 120)]
#[case(20, 8, 10)]
#[case(8, 24, 10)]
fn test_invalid_axis_configuration(
    #[case] start_hour: u32,
    #[case] end_hour: u32,
    #[case] interval: u32,
) {
    let result = generate_time_axis(
        date("2024-01-01"),
        &axis_config(start_hour, end_hour, interval),
    );

    assert!(matches!(result, Err(GridError::InvalidConfiguration(_))));
}

#[test]
fn test_axis_iteration_restarts() {
    let axis = generate_time_axis(date("2024-01-01"), &axis_config(8, 10, 30)).unwrap();

    let first_pass: Vec<_> = axis.iter().map(|slot| slot.to_string()).collect();
    let second_pass: Vec<_> = (&axis).into_iter().map(|slot| slot.to_string()).collect();
    let reversed: Vec<_> = axis.iter().rev().map(|slot| slot.to_string()).collect();

    assert_eq!(first_pass, vec!["08:00", "08:30", "09:00", "09:30", "10:00"]);
    assert_eq!(first_pass, second_pass);
    assert_eq!(reversed, vec!["10:00", "09:30", "09:00", "08:30", "08:00"]);
}

#[test]
fn test_axis_slot_lookup() {
    let axis = generate_time_axis(date("2024-01-01"), &AxisConfig::default()).unwrap();

    assert_eq!(axis.slot(6).map(|slot| slot.to_string()), Some("09:00".to_string()));
    assert_eq!(axis.slot(73), None);
    assert_eq!(axis.day_start(), dt("2024-01-01T08:00"));
}

// Interval mapping

#[test]
fn test_map_half_hour_appointment() {
    let span = map_interval(
        dt("2024-01-01T10:00"),
        dt("2024-01-01T10:30"),
        dt("2024-01-01T08:00"),
        10,
    )
    .unwrap();

    assert_eq!(
        span,
        SlotSpan {
            offset_slots: 12.0,
            height_slots: 3.0,
        }
    );
}

#[test]
fn test_map_unaligned_interval_is_fractional() {
    let span = map_interval(
        dt("2024-01-01T10:05"),
        dt("2024-01-01T10:20"),
        dt("2024-01-01T08:00"),
        10,
    )
    .unwrap();

    assert_eq!(span.offset_slots, 12.5);
    assert_eq!(span.height_slots, 1.5);
}

#[test]
fn test_map_uses_time_of_day_only() {
    let span = map_interval(
        dt("2023-12-31T10:00"),
        dt("2023-12-31T10:30"),
        dt("2024-01-01T08:00"),
        10,
    )
    .unwrap();

    assert_eq!(span.offset_slots, 12.0);
    assert_eq!(span.height_slots, 3.0);
}

#[test]
fn test_map_before_axis_start_is_not_clamped() {
    let span = map_interval(
        dt("2024-01-01T07:00"),
        dt("2024-01-01T07:30"),
        dt("2024-01-01T08:00"),
        10,
    )
    .unwrap();

    assert_eq!(span.offset_slots, -6.0);
    assert_eq!(span.height_slots, 3.0);
}

#[rstest]
#[case("2024-01-01T10:00", "2024-01-01T10:00")]
#[case("2024-01-01T10:30", "2024-01-01T10:00")]
#[case("2024-01-01T23:30", "2024-01-02T00:30")]
fn test_map_invalid_interval(#[case] start: &str, #[case] end: &str) {
    let result = map_interval(dt(start), dt(end), dt("2024-01-01T08:00"), 10);

    assert_eq!(
        result,
        Err(GridError::InvalidInterval {
            start: dt(start),
            end: dt(end),
        })
    );
}

fn precise(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").unwrap()
}

#[test]
fn test_map_sub_second_interval_keeps_its_height() {
    let span = map_interval(
        precise("2024-01-01T10:00:00.100"),
        precise("2024-01-01T10:00:00.900"),
        dt("2024-01-01T08:00"),
        10,
    )
    .unwrap();

    assert!(span.height_slots > 0.0);
    assert!((span.height_slots - 0.8 / 600.0).abs() < 1e-12);
    assert!((span.offset_slots - 7200.1 / 600.0).abs() < 1e-12);
}

#[test]
fn test_map_does_not_truncate_fractional_seconds() {
    let day_start = dt("2024-01-01T08:00");
    let start = precise("2024-01-01T10:00:59.999");
    let end = precise("2024-01-01T10:30:00.250");

    let span = map_interval(start, end, day_start, 10).unwrap();

    assert!((span.offset_slots - 7259.999 / 600.0).abs() < 1e-12);
    assert_eq!(slot_offset_to_time(day_start, span.offset_slots, 10), start);
    assert_eq!(slot_offset_to_time(day_start, span.end_slots(), 10), end);
}

#[test]
fn test_map_zero_interval_is_configuration_error() {
    let result = map_interval(
        dt("2024-01-01T10:00"),
        dt("2024-01-01T10:30"),
        dt("2024-01-01T08:00"),
        0,
    );

    assert!(matches!(result, Err(GridError::InvalidConfiguration(_))));
}

#[rstest]
#[case("2024-01-01T08:00", "2024-01-01T08:10", 10)]
#[case("2024-01-01T10:00", "2024-01-01T10:30", 10)]
#[case("2024-01-01T10:07", "2024-01-01T11:13", 10)]
#[case("2024-01-01T13:45", "2024-01-01T19:59", 15)]
#[case("2024-01-01T19:01", "2024-01-01T20:00", 5)]
fn test_offset_round_trip(#[case] start: &str, #[case] end: &str, #[case] interval: u32) {
    let day_start = dt("2024-01-01T08:00");
    let span = map_interval(dt(start), dt(end), day_start, interval).unwrap();

    assert_eq!(slot_offset_to_time(day_start, span.offset_slots, interval), dt(start));
    assert_eq!(slot_offset_to_time(day_start, span.end_slots(), interval), dt(end));
}

#[test]
fn test_span_to_pixels() {
    let span = SlotSpan {
        offset_slots: 12.0,
        height_slots: 3.0,
    };

    let pixels = span.to_pixels(20.0);

    assert_eq!(pixels.top, 240.0);
    assert_eq!(pixels.height, 60.0);
}

// Filtering

#[test]
fn test_select_appointments_by_date_and_technician() {
    let alice = Uuid::new_v4();
    let bruno = Uuid::new_v4();
    let appointments = vec![
        appointment(alice, "2024-01-01T09:00", "2024-01-01T09:30"),
        appointment(bruno, "2024-01-01T10:00", "2024-01-01T10:30"),
        appointment(alice, "2024-01-02T09:00", "2024-01-02T09:30"),
        appointment(alice, "2024-01-01T15:00", "2024-01-01T15:45"),
    ];

    let all = select_appointments(&appointments, date("2024-01-01"), TechnicianScope::All);
    let alice_only = select_appointments(
        &appointments,
        date("2024-01-01"),
        TechnicianScope::Technician(alice),
    );

    let ids = |selected: &[&Appointment]| selected.iter().map(|a| a.id).collect::<Vec<_>>();
    assert_eq!(
        ids(&all),
        vec![appointments[0].id, appointments[1].id, appointments[3].id]
    );
    assert_eq!(ids(&alice_only), vec![appointments[0].id, appointments[3].id]);
}

#[test]
fn test_selection_is_idempotent() {
    let alice = Uuid::new_v4();
    let bruno = Uuid::new_v4();
    let appointments = vec![
        appointment(alice, "2024-01-01T09:00", "2024-01-01T09:30"),
        appointment(bruno, "2024-01-01T10:00", "2024-01-01T10:30"),
        appointment(alice, "2024-01-03T09:00", "2024-01-03T09:30"),
    ];
    let blocked_times = vec![
        blocked(alice, "2024-01-01T12:00", "2024-01-01T13:00"),
        blocked(bruno, "2024-01-01T12:00", "2024-01-01T13:00"),
        blocked(alice, "2024-01-02T12:00", "2024-01-02T13:00"),
    ];
    let scope = TechnicianScope::Technician(alice);
    let day = date("2024-01-01");

    let once = select_appointments(&appointments, day, scope);
    let twice = select_appointments(once.iter().copied(), day, scope);
    assert_eq!(once, twice);

    let once = select_blocked_times(&blocked_times, day, scope, false);
    let twice = select_blocked_times(once.iter().copied(), day, scope, false);
    assert_eq!(once, twice);
    assert_eq!(once.len(), 1);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(250)]
fn test_hidden_blocked_times_are_never_selected(#[case] count: usize) {
    let technician_id = Uuid::new_v4();
    let blocked_times: Vec<_> = (0..count)
        .map(|_| blocked(technician_id, "2024-01-01T12:00", "2024-01-01T13:00"))
        .collect();

    for scope in [TechnicianScope::All, TechnicianScope::Technician(technician_id)] {
        assert!(select_blocked_times(&blocked_times, date("2024-01-01"), scope, true).is_empty());
    }
}

#[test]
fn test_recurring_block_repeats_from_its_first_day() {
    let technician_id = Uuid::new_v4();
    let mut lunch = blocked(technician_id, "2024-01-10T12:00", "2024-01-10T13:00");
    lunch.is_recurring = true;
    let blocked_times = vec![lunch];

    let on = |day: &str| {
        select_blocked_times(&blocked_times, date(day), TechnicianScope::All, false).len()
    };

    assert_eq!(on("2024-01-09"), 0);
    assert_eq!(on("2024-01-10"), 1);
    assert_eq!(on("2024-02-29"), 1);
}

// Layout

#[test]
fn test_layout_has_no_cross_technician_leakage() {
    let technicians = vec![technician("Alice"), technician("Bruno"), technician("Caio")];
    let appointments: Vec<_> = technicians
        .iter()
        .enumerate()
        .flat_map(|(index, tech)| {
            let hour = 9 + index;
            vec![
                appointment(
                    tech.id,
                    &format!("2024-01-01T{:02}:00", hour),
                    &format!("2024-01-01T{:02}:30", hour),
                ),
                appointment(
                    tech.id,
                    &format!("2024-01-01T{:02}:00", hour + 5),
                    &format!("2024-01-01T{:02}:20", hour + 5),
                ),
            ]
        })
        .collect();
    let filters = GridFilters::for_date(date("2024-01-01"));

    let selected = select_appointments(&appointments, filters.selected_date, TechnicianScope::All);
    assert_eq!(selected.len(), 6);

    let columns = layout_grid(
        &technicians,
        &appointments,
        &[],
        &filters,
        &AxisConfig::default(),
    )
    .unwrap();

    assert_eq!(columns.len(), 3);
    for column in &columns {
        assert_eq!(column.layout.technician_id, column.technician.id);
        assert_eq!(column.layout.entries.len(), 2);
        for entry in &column.layout.entries {
            match entry.entity {
                LayoutEntity::Appointment(appointment) => {
                    assert_eq!(appointment.technician_id, column.technician.id)
                }
                LayoutEntity::Blocked(_) => panic!("no blocked times were supplied"),
            }
        }
    }
}

#[test_log::test]
fn test_zero_length_block_is_skipped_and_rest_is_laid_out() {
    let technician_id = Uuid::new_v4();
    let appointments = vec![appointment(
        technician_id,
        "2024-01-01T10:00",
        "2024-01-01T10:30",
    )];
    let blocked_times = vec![
        blocked(technician_id, "2024-01-01T12:00", "2024-01-01T12:00"),
        blocked(technician_id, "2024-01-01T15:00", "2024-01-01T16:00"),
    ];
    let filters = GridFilters::for_date(date("2024-01-01"));

    let column = layout_column(
        technician_id,
        &appointments,
        &blocked_times,
        &filters,
        &AxisConfig::default(),
    )
    .unwrap();

    let placed: Vec<_> = column
        .entries
        .iter()
        .map(|entry| (entry.kind, entry.entity.id(), entry.span))
        .collect();
    assert_eq!(
        placed,
        vec![
            (
                EntryKind::Appointment,
                appointments[0].id,
                SlotSpan {
                    offset_slots: 12.0,
                    height_slots: 3.0,
                }
            ),
            (
                EntryKind::Blocked,
                blocked_times[1].id,
                SlotSpan {
                    offset_slots: 42.0,
                    height_slots: 6.0,
                }
            ),
        ]
    );

    assert_eq!(column.skipped.len(), 1);
    assert_eq!(column.skipped[0].kind, EntryKind::Blocked);
    assert_eq!(column.skipped[0].id, blocked_times[0].id);
    assert_eq!(
        column.skipped[0].error,
        GridError::InvalidInterval {
            start: dt("2024-01-01T12:00"),
            end: dt("2024-01-01T12:00"),
        }
    );
}

#[test]
fn test_layout_respects_scope_and_visibility() {
    let alice = Uuid::new_v4();
    let bruno = Uuid::new_v4();
    let appointments = vec![appointment(alice, "2024-01-01T10:00", "2024-01-01T10:30")];
    let blocked_times = vec![blocked(alice, "2024-01-01T12:00", "2024-01-01T13:00")];
    let config = AxisConfig::default();

    let mut filters = GridFilters::for_date(date("2024-01-01"));
    filters.technician_scope = TechnicianScope::Technician(bruno);
    let other_scope = layout_column(alice, &appointments, &blocked_times, &filters, &config).unwrap();
    assert!(other_scope.entries.is_empty());

    filters.technician_scope = TechnicianScope::Technician(alice);
    filters.hide_blocked_times = true;
    let hidden = layout_column(alice, &appointments, &blocked_times, &filters, &config).unwrap();
    assert_eq!(hidden.entries.len(), 1);
    assert_eq!(hidden.entries[0].kind, EntryKind::Appointment);

    filters.hide_blocked_times = false;
    let visible = layout_column(alice, &appointments, &blocked_times, &filters, &config).unwrap();
    assert_eq!(
        visible.entries.iter().map(|e| e.kind).collect::<Vec<_>>(),
        vec![EntryKind::Appointment, EntryKind::Blocked]
    );
}

#[test]
fn test_layout_keeps_overlapping_entries() {
    let technician_id = Uuid::new_v4();
    let appointments = vec![
        appointment(technician_id, "2024-01-01T10:00", "2024-01-01T10:30"),
        appointment(technician_id, "2024-01-01T10:00", "2024-01-01T10:30"),
    ];

    let column = layout_column(
        technician_id,
        &appointments,
        &[],
        &GridFilters::for_date(date("2024-01-01")),
        &AxisConfig::default(),
    )
    .unwrap();

    assert_eq!(column.entries.len(), 2);
    assert_eq!(column.entries[0].span, column.entries[1].span);
}

#[test]
fn test_layout_rejects_invalid_configuration() {
    let result = layout_column(
        Uuid::new_v4(),
        &[],
        &[],
        &GridFilters::for_date(date("2024-01-01")),
        &axis_config(8, 20, 7),
    );

    assert!(matches!(result, Err(GridError::InvalidConfiguration(_))));
}

#[test]
fn test_layout_grid_single_technician_scope() {
    let technicians = vec![technician("Alice"), technician("Bruno")];
    let mut filters = GridFilters::for_date(date("2024-01-01"));
    filters.technician_scope = TechnicianScope::Technician(technicians[1].id);

    let columns = layout_grid(&technicians, &[], &[], &filters, &AxisConfig::default()).unwrap();

    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].technician.name, "Bruno");
    assert_eq!(columns[0].color, technicians[1].display_color(1));
}

#[test]
fn test_layout_entry_json_shape() {
    let technician_id = Uuid::new_v4();
    let appointments = vec![appointment(
        technician_id,
        "2024-01-01T10:00",
        "2024-01-01T10:30",
    )];

    let column = layout_column(
        technician_id,
        &appointments,
        &[],
        &GridFilters::for_date(date("2024-01-01")),
        &AxisConfig::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&column).unwrap();

    let entry = &json["entries"][0];
    assert_eq!(entry["kind"], "appointment");
    assert_eq!(entry["offsetSlots"], 12.0);
    assert_eq!(entry["heightSlots"], 3.0);
    assert_eq!(entry["entity"]["clientName"], "Client");
    assert_eq!(json["skipped"], serde_json::json!([]));
}
