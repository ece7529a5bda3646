//! Shared leaf types for TUI features.
//!
//! This module must NOT import `UiEvent` or feature-specific state
//! to avoid circular dependencies.

pub mod task;
pub mod text;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
pub use text::{mask, progress_bar, truncate_with_ellipsis};
