//! Load and save orchestration.

pub mod load;
pub mod save;
