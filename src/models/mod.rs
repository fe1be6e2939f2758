pub mod booking;
pub mod day_summary;
pub mod reference_zone;
