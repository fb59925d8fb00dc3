use crate::modules::time_logs::core::changes::LogChange;
use crate::modules::time_logs::core::outcome::{IgnoreReason, RejectReason};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted { change: LogChange },
    Rejected { reason: RejectReason },
    Ignored { reason: IgnoreReason },
}
