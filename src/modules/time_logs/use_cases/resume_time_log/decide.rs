// Pure decision function for resuming a paused task.
//
// Responsibilities
// - Close the last pause, and only if it is open. Earlier intervals are never touched.
// - A closed interval is never closed again: resuming twice is a no-op.

use crate::modules::time_logs::core::changes::LogChange;
use crate::modules::time_logs::core::decision::Decision;
use crate::modules::time_logs::core::outcome::IgnoreReason;
use crate::modules::time_logs::core::state::TimeLog;
use crate::modules::time_logs::use_cases::resume_time_log::command::ResumeTimeLog;

pub fn decide_resume(log: Option<&TimeLog>, command: ResumeTimeLog) -> Decision {
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
    if !log.last_pause().is_some_and(|last| last.is_open()) {
        return Decision::Ignored {
            reason: IgnoreReason::NotPaused,
        };
    }

    let mut pauses = log.pauses.clone();
    if let Some(last) = pauses.last_mut() {
        last.to = Some(command.at);
    }
    Decision::Accepted {
        change: LogChange::ReplacePauses {
            id: log.id.clone(),
            pauses,
        },
    }
}
