//! Feature slices for the TUI (state/update/render per slice).

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod profile;
pub mod splash;
pub mod students;
pub mod tabs;
