// Pure decision function for deleting a log.
//
// Deletion is valid from any state and does not consult the snapshot: the id is sent as given.

use crate::modules::time_logs::core::changes::LogChange;
use crate::modules::time_logs::core::decision::Decision;
use crate::modules::time_logs::core::outcome::IgnoreReason;
use crate::modules::time_logs::use_cases::remove_time_log::command::RemoveTimeLog;

pub fn decide_remove(command: RemoveTimeLog) -> Decision {
    if !command.confirmed {
        return Decision::Ignored {
            reason: IgnoreReason::NotConfirmed,
        };
    }
    Decision::Accepted {
        change: LogChange::Delete { id: command.id },
    }
}
