//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).

use std::time::Duration;

use edulearn_core::auth::AuthRequest;

use crate::common::{TaskId, TaskSeq};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Fire `UiEvent::SplashElapsed` once after `delay`.
    StartSplashTimer { delay: Duration },

    /// Run a validated sign-in or sign-up against the provider.
    SubmitCredentials {
        task: Option<TaskId>,
        request: AuthRequest,
    },

    /// Ask the provider to end the session.
    SignOut { task: Option<TaskId> },
}

impl UiEffect {
    /// Gives task-backed effects a fresh id if they don't have one yet.
    pub fn assign_task(&mut self, seq: &mut TaskSeq) {
        match self {
            UiEffect::SubmitCredentials { task, .. } | UiEffect::SignOut { task } => {
                if task.is_none() {
                    *task = Some(seq.next_id());
                }
            }
            UiEffect::Quit | UiEffect::StartSplashTimer { .. } => {}
        }
    }
}
