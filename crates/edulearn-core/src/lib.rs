//! Core EduLearn library (config, auth, session, navigation, catalog).

pub mod auth;
pub mod catalog;
pub mod config;
pub mod interrupt;
pub mod logging;
pub mod navigation;
pub mod session;
