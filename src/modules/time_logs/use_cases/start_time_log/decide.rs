// Pure decision function for starting a timed task.
//
// Responsibilities
// - Reject labels that are empty after trimming. Nothing is sent to the store.
// - Otherwise create a running log: no pauses, no end.

use crate::modules::time_logs::core::changes::LogChange;
use crate::modules::time_logs::core::decision::Decision;
use crate::modules::time_logs::core::outcome::RejectReason;
use crate::modules::time_logs::use_cases::start_time_log::command::StartTimeLog;

pub fn decide_start(command: StartTimeLog) -> Decision {
    if command.label.trim().is_empty() {
        return Decision::Rejected {
            reason: RejectReason::EmptyLabel,
        };
    }
    Decision::Accepted {
        change: LogChange::Create {
            label: command.label,
            start_at: command.start_at,
        },
    }
}
