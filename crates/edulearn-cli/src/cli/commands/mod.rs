//! CLI command handlers.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod config;
