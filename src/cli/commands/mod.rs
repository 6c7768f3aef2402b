//! Command implementations for sleeptrack.

mod track;

pub use track::track;
