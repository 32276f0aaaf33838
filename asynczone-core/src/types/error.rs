use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use thiserror::Error;

/// Interception hooks a zone spec may name but this crate refuses to honor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Interceptor {
    OnFork,
    OnIntercept,
    OnInvoke,
    OnHandleError,
    OnScheduleTask,
    OnInvokeTask,
    OnCancelTask,
    OnHasTask,
}

impl Interceptor {
    pub const ALL: [Interceptor; 8] = [
        Interceptor::OnFork,
        Interceptor::OnIntercept,
        Interceptor::OnInvoke,
        Interceptor::OnHandleError,
        Interceptor::OnScheduleTask,
        Interceptor::OnInvokeTask,
        Interceptor::OnCancelTask,
        Interceptor::OnHasTask,
    ];

    /// The key under which the hook appears in a zone spec
    pub fn key(&self) -> &'static str {
        match self {
            Interceptor::OnFork => "onFork",
            Interceptor::OnIntercept => "onIntercept",
            Interceptor::OnInvoke => "onInvoke",
            Interceptor::OnHandleError => "onHandleError",
            Interceptor::OnScheduleTask => "onScheduleTask",
            Interceptor::OnInvokeTask => "onInvokeTask",
            Interceptor::OnCancelTask => "onCancelTask",
            Interceptor::OnHasTask => "onHasTask",
        }
    }
}

impl Display for Interceptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.key())
    }
}

/// Zone operations that exist only to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    RunGuarded,
    RunTask,
    ScheduleMicroTask,
    ScheduleMacroTask,
    ScheduleEventTask,
    CancelTask,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            Operation::RunGuarded => "run_guarded",
            Operation::RunTask => "run_task",
            Operation::ScheduleMicroTask => "schedule_micro_task",
            Operation::ScheduleMacroTask => "schedule_macro_task",
            Operation::ScheduleEventTask => "schedule_event_task",
            Operation::CancelTask => "cancel_task",
        };
        f.write_str(name)
    }
}

/// Error type for zone operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ZoneError {
    #[error("{0} is currently unsupported")]
    UnsupportedInterceptor(Interceptor),

    #[error("{0} is currently unsupported")]
    UnsupportedOperation(Operation),

    #[error("Invalid zone spec: {0}")]
    InvalidSpec(String),
}

impl From<serde_json::Error> for ZoneError {
    fn from(err: serde_json::Error) -> Self {
        ZoneError::InvalidSpec(err.to_string())
    }
}
