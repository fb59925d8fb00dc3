// Pure decision function for finishing a task.
//
// Responsibilities
// - Valid from running and paused. An open last pause is closed at the same instant as end_at,
//   so no open interval survives into the finished state.
// - pauses and end_at are written together in one update.

use crate::modules::time_logs::core::changes::LogChange;
use crate::modules::time_logs::core::decision::Decision;
use crate::modules::time_logs::core::outcome::IgnoreReason;
use crate::modules::time_logs::core::state::TimeLog;
use crate::modules::time_logs::use_cases::finish_time_log::command::FinishTimeLog;

pub fn decide_finish(log: Option<&TimeLog>, command: FinishTimeLog) -> Decision {
    let Some(log) = log else {
        return Decision::Ignored {
            reason: IgnoreReason::StaleReference,
        };
    };
    if log.is_finished() {
        return Decision::Ignored {
            reason: IgnoreReason::AlreadyFinished,
        };
    }

    let mut pauses = log.pauses.clone();
    if let Some(last) = pauses.last_mut() {
        if last.is_open() {
            last.to = Some(command.at);
        }
    }
    Decision::Accepted {
        change: LogChange::Finish {
            id: log.id.clone(),
            pauses,
            end_at: command.at,
        },
    }
}
