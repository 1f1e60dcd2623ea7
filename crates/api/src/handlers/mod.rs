/// Scheduling grid endpoints
pub mod grid;
/// Technician listing
pub mod technician;
