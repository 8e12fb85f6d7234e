pub mod config;
pub mod dates;
pub mod meetings;
pub mod notes;
pub mod slots;
pub mod tasks;
pub mod team;
pub mod themes;
