//! Async task lifecycle tracking.
//!
//! Every provider call runs as a spawned task with a uniform
//! started/completed envelope. The reducer records the active id per
//! kind; a completion only counts if its id is still the active one, so
//! stale results from an abandoned screen are dropped on the floor.

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

/// One kind per provider operation the UI can have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Ready,
    SendEmailCode,
    VerifyEmailCode,
    SendSmsCode,
    VerifySmsCode,
    OAuth,
    Passkey,
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
    pub ready: TaskState,
    pub send_email: TaskState,
    pub verify_email: TaskState,
    pub send_sms: TaskState,
    pub verify_sms: TaskState,
    pub oauth: TaskState,
    pub passkey: TaskState,
}

impl Tasks {
    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Ready => &mut self.ready,
            TaskKind::SendEmailCode => &mut self.send_email,
            TaskKind::VerifyEmailCode => &mut self.verify_email,
            TaskKind::SendSmsCode => &mut self.send_sms,
            TaskKind::VerifySmsCode => &mut self.verify_sms,
            TaskKind::OAuth => &mut self.oauth,
            TaskKind::Passkey => &mut self.passkey,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.ready.is_running()
            || self.send_email.is_running()
            || self.verify_email.is_running()
            || self.send_sms.is_running()
            || self.verify_sms.is_running()
            || self.oauth.is_running()
            || self.passkey.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_seq_is_monotonic() {
        let mut seq = TaskSeq::default();
        assert_eq!(seq.next_id(), TaskId(0));
        assert_eq!(seq.next_id(), TaskId(1));
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut state = TaskState::default();
        state.on_started(&TaskStarted { id: TaskId(1) });
        assert!(!state.finish_if_active(TaskId(0)));
        assert!(state.is_running());
        assert!(state.finish_if_active(TaskId(1)));
        assert!(!state.is_running());
    }

    #[test]
    fn test_any_running() {
        let mut tasks = Tasks::default();
        assert!(!tasks.is_any_running());
        tasks
            .state_mut(TaskKind::SendSmsCode)
            .on_started(&TaskStarted { id: TaskId(7) });
        assert!(tasks.is_any_running());
    }
}
