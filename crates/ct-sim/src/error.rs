use ct_core::{PoolId, ProcessId};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("resource pool {0} does not exist")]
    UnknownPool(PoolId),

    #[error("process {0} is not registered with the scheduler")]
    UnknownProcess(ProcessId),

    #[error("{pool} pool must have a capacity of at least 1")]
    ZeroCapacity { pool: &'static str },

    #[error("too many resource pools (limit {limit})")]
    TooManyPools { limit: usize },

    #[error("{pool} released with no unit held")]
    ReleaseUnheld { pool: &'static str },

    #[error("process {0} tried to wait for itself")]
    SelfJoin(ProcessId),

    #[error("process {0} is not sleeping and cannot be rescheduled")]
    NotSleeping(ProcessId),
}

pub type SimResult<T> = Result<T, SimError>;
