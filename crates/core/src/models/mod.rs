pub mod appointment;
pub mod blocked_time;
pub mod grid;
pub mod technician;
pub mod time_slot;
