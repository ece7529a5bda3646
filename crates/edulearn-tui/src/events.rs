//! UI event types.
//!
//! All external inputs (terminal, timers, provider results) are converted to
//! `UiEvent` before being processed by the reducer.
//!
//! ## Task Lifecycle Events
//!
//! Provider calls use a uniform lifecycle:
//! - The runtime emits `UiEvent::TaskStarted` once a task is actually spawned
//! - The runtime emits `UiEvent::TaskCompleted` with the result event when done
//! - The reducer is the only place that mutates `TaskState`

use crossterm::event::Event as CrosstermEvent;
use edulearn_core::auth::{AuthError, Identity};

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick for animation and render cadence.
    Tick,

    /// Raw terminal input.
    Terminal(CrosstermEvent),

    /// The one-shot splash timer fired.
    SplashElapsed,

    /// Provider answer to a sign-in or sign-up.
    AuthResult(Result<Identity, AuthError>),

    /// Provider answer to a sign-out.
    SignOutResult(Result<(), AuthError>),

    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },

    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}
