//! Cross-slice state mutations.
//!
//! Feature reducers and overlays return these mutations to request changes
//! outside their own slice. The main reducer applies them in order.

use edulearn_core::navigation::Tab;

/// Mutations for cross-slice state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    Nav(NavMutation),
    /// Reset per-session view state (cursors, form focus).
    ResetViews,
}

/// Navigation shell changes requested by feature slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMutation {
    SelectTab(Tab),
    NextTab,
    PreviousTab,
    OpenLessonModal { course_id: String },
    CloseLessonModal,
}
