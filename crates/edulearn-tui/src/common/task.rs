#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Sign-in or sign-up request.
    Submit,
    SignOut,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub submit: TaskState,
    pub sign_out: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::Submit => &self.submit,
            TaskKind::SignOut => &self.sign_out,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Submit => &mut self.submit,
            TaskKind::SignOut => &mut self.sign_out,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.submit.is_running() || self.sign_out.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_completion_is_rejected() {
        let mut seq = TaskSeq::default();
        let mut tasks = Tasks::default();
        let first = seq.next_id();
        let second = seq.next_id();

        tasks
            .state_mut(TaskKind::Submit)
            .on_started(&TaskStarted { id: second });

        assert!(tasks.is_any_running());
        assert!(!tasks.state_mut(TaskKind::Submit).finish_if_active(first));
        assert!(tasks.state_mut(TaskKind::Submit).finish_if_active(second));
        assert!(!tasks.state(TaskKind::Submit).is_running());
    }
}
