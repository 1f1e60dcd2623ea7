//! # Scheduling Grid Engine
//!
//! Pure, synchronous computations behind the per-technician scheduling grid:
//!
//! - [`axis`]: the ordered slots of a day
//! - [`offset`]: interval to slot-offset mapping
//! - [`filter`]: date, technician and visibility selection
//! - [`layout`]: per-column composition of positioned entries
//!
//! Every function here is a function of its inputs only and can be re-run on
//! any change of date, scope, visibility flag or data snapshot.

pub mod axis;
pub mod filter;
pub mod layout;
pub mod offset;

pub use axis::{generate_time_axis, Slots, TimeAxis};
pub use filter::{select_appointments, select_blocked_times, GridEntity};
pub use layout::{
    layout_column, layout_grid, ColumnLayout, EntryKind, LayoutEntity, LayoutEntry,
    SkippedEntry, TechnicianColumn,
};
pub use offset::{map_interval, slot_offset_to_time, PixelSpan, SlotSpan};
